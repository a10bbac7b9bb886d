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

use {
    crate::utils::*,
    memchr::memmem,
    std::fmt,
};

//outer container formats recognizable from the header bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Gzip,
    Zip,
    Tar,
    Bzip2,
    Xz,
    Elf,
    Squashfs,
    Unknown,
}

//checked top to bottom, first match wins
pub const DETECT_ORDER: [ContainerKind; 7] = [
    ContainerKind::Gzip,
    ContainerKind::Zip,
    ContainerKind::Tar,
    ContainerKind::Bzip2,
    ContainerKind::Xz,
    ContainerKind::Elf,
    ContainerKind::Squashfs,
];

impl ContainerKind {
    //whether this format's magic is present in the header,
    //headers too short for the magic never match
    #[must_use]
    pub fn matches(self, head: &[u8]) -> bool {
        match self {
            Self::Gzip => head.starts_with(&GZIP_HEADER_MAGIC),
            Self::Zip => head.starts_with(&ZIP_HEADER_MAGIC),
            Self::Tar => {
                head.len() >= TAR_USTAR_OFF + TAR_USTAR_MAGIC.len()
                    && head[range_size(TAR_USTAR_OFF, TAR_USTAR_MAGIC.len())] == TAR_USTAR_MAGIC
            }
            Self::Bzip2 => head.starts_with(&BZIP2_HEADER_MAGIC),
            Self::Xz => head.starts_with(&XZ_HEADER_MAGIC),
            Self::Elf => head.starts_with(&ELF_HEADER_MAGIC),
            Self::Squashfs => head.starts_with(&SQUASHFS_HEADER_MAGIC),
            Self::Unknown => false,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Gzip => "gzip-compressed data",
            Self::Zip => "zip archive",
            Self::Tar => "tar archive",
            Self::Bzip2 => "bzip2-compressed data",
            Self::Xz => "xz-compressed data",
            Self::Elf => "ELF executable",
            Self::Squashfs => "squashfs filesystem",
            Self::Unknown => "unknown (no common magic found)",
        })
    }
}

//classify the outer container from the header bytes
#[must_use]
pub fn detect(head: &[u8]) -> ContainerKind {
    DETECT_ORDER
        .into_iter()
        .find(|kind| kind.matches(head))
        .unwrap_or(ContainerKind::Unknown)
}

//many failed OTA downloads are an object storage XML document, not firmware
#[must_use]
pub fn is_error_page(head: &[u8]) -> bool {
    head.starts_with(&XML_DECL_MAGIC) || memmem::find(head, XML_ERROR_TAG).is_some()
}
