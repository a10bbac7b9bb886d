/*
    swutool - A .swu OTA container inspector and chip-string scanner
    Copyright (C) 2025 plzdonthaxme

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

pub use {
    colored::Colorize,
    std::{
        fs::File,
        io::{self, Read},
        ops::Range,
    },
};

//how much of the header is sniffed for magic bytes
pub const HEAD_LEN: usize = 512;
//how many header bytes are dumped for manual inspection
pub const DUMP_LEN: usize = 64;
//how far into the body the chip-string scan reaches
pub const SCAN_LIMIT: usize = 2_000_000;
//error page first lines longer than this are cut off
pub const ERROR_SNIPPET_LEN: usize = 120;

//utility functions

//read the first min(n, file size) bytes of the file at path
/// # Errors
/// Returns an error if the file cannot be opened or read
pub fn read_head(path: &str, n: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::new();
    file.take(n as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

//render bytes as space-separated two-digit lowercase hex
#[must_use]
pub fn hex_dump(buf: &[u8]) -> String {
    buf.iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

//first line of a buffer, truncated to max_len bytes, lossily decoded
#[must_use]
pub fn first_line(buf: &[u8], max_len: usize) -> String {
    let line = buf.split(|&b| b == b'\n').next().unwrap_or_default();
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(&line[..line.len().min(max_len)]).into_owned()
}

//create a range from the start and size
#[must_use]
pub const fn range_size(start: usize, size: usize) -> Range<usize> {
    start..start + size
}

pub const GZIP_HEADER_MAGIC: [u8; 2] = [0x1F, 0x8B];
pub const ZIP_HEADER_MAGIC: [u8; 4] = *b"PK\x03\x04";
pub const TAR_USTAR_MAGIC: [u8; 5] = *b"ustar";
pub const TAR_USTAR_OFF: usize = 257;
pub const BZIP2_HEADER_MAGIC: [u8; 3] = *b"BZh";
pub const XZ_HEADER_MAGIC: [u8; 6] = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];
pub const ELF_HEADER_MAGIC: [u8; 4] = *b"\x7fELF";
pub const SQUASHFS_HEADER_MAGIC: [u8; 4] = *b"hsqs"; //squashfs in le

pub const XML_DECL_MAGIC: [u8; 5] = *b"<?xml";
pub const XML_ERROR_TAG: &[u8; 7] = b"<Error>";

//JL7018F / Allwinner V821L2 and related part markers, checked in this order
pub const CHIP_TOKENS: [&str; 6] = ["JL7018", "JL70", "JERRY", "ALLWINNER", "V821", "V821L"];
