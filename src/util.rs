use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Trim the line, split on tabs, trim every field.
pub fn split_fields(line: &str) -> Vec<String> {
    line.trim()
        .split('\t')
        .map(|field| field.trim().to_string())
        .collect()
}
