//! Shared constants for test infrastructure

// Tag constants (with 'v' prefix)
pub const TAG_V2_1_0: &str = "v2.1.0";
pub const TAG_V3_0_0: &str = "v3.0.0";
pub const TAG_V9_9_9: &str = "v9.9.9";

// Normalized platform names (release packaging convention)
pub const OS_LINUX: &str = "linux";
pub const OS_DARWIN: &str = "darwin";
pub const OS_WINDOWS: &str = "windows";
pub const ARCH_AMD64: &str = "amd64";
pub const ARCH_386: &str = "386";
pub const ARCH_ARM64: &str = "arm64";

// Binary content for testing
pub const FAKE_BINARY_CONTENT: &[u8] = b"fake frieza binary for testing";
