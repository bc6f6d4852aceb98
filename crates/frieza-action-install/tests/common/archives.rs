//! In-memory zip fixtures shaped like frieza release assets

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build a zip archive holding a single file
pub fn zip_with_entry(name: &str, content: &[u8]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().unix_permissions(0o755);

    writer.start_file(name, options).unwrap();
    writer.write_all(content).unwrap();

    writer.finish().unwrap().into_inner()
}

/// Build a release-shaped zip: one executable named `frieza_{tag}{suffix}`
pub fn frieza_release_zip(tag: &str, suffix: &str) -> Vec<u8> {
    zip_with_entry(
        &format!("frieza_{tag}{suffix}"),
        super::constants::FAKE_BINARY_CONTENT,
    )
}
