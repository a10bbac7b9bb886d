use swutool::inspect::{detect, is_error_page, ContainerKind};

/// A gzip prefix decides the classification no matter what follows it.
#[test]
fn gzip_prefix_wins_regardless_of_trailing_bytes() {
    assert_eq!(detect(&[0x1f, 0x8b]), ContainerKind::Gzip);

    let mut buf = vec![0x1f, 0x8b];
    buf.extend(std::iter::repeat(0xaa).take(1000));
    assert_eq!(detect(&buf), ContainerKind::Gzip);
}

#[test]
fn zip_local_file_header_is_zip() {
    let mut buf = b"PK\x03\x04".to_vec();
    buf.extend_from_slice(&[0x14, 0x00, 0x00, 0x00]);
    assert_eq!(detect(&buf), ContainerKind::Zip);
}

#[test]
fn ustar_at_offset_257_is_tar() {
    let mut buf = vec![0u8; 512];
    buf[257..262].copy_from_slice(b"ustar");
    assert_eq!(detect(&buf), ContainerKind::Tar);
}

/// Buffers too short to hold the full ustar region must fall through to
/// "unknown" instead of erroring out.
#[test]
fn short_buffer_never_matches_tar() {
    let mut buf = vec![0u8; 261];
    buf[257..261].copy_from_slice(b"usta");
    assert_eq!(detect(&buf), ContainerKind::Unknown);

    assert_eq!(detect(&[]), ContainerKind::Unknown);
}

#[test]
fn remaining_magics_are_recognized() {
    assert_eq!(detect(b"BZh91AY&SY"), ContainerKind::Bzip2);
    assert_eq!(
        detect(&hex::decode("fd377a585a000004").unwrap()),
        ContainerKind::Xz
    );
    assert_eq!(detect(b"\x7fELF\x02\x01\x01"), ContainerKind::Elf);
    assert_eq!(detect(b"hsqs\x00\x00\x00\x00"), ContainerKind::Squashfs);
}

/// The rule table is ordered: a buffer carrying both the gzip prefix and a
/// ustar marker classifies as gzip.
#[test]
fn earlier_rules_shadow_later_ones() {
    let mut buf = vec![0u8; 512];
    buf[0] = 0x1f;
    buf[1] = 0x8b;
    buf[257..262].copy_from_slice(b"ustar");
    assert_eq!(detect(&buf), ContainerKind::Gzip);
}

#[test]
fn unknown_buffers_get_the_fallback_label() {
    assert_eq!(detect(b"not a container"), ContainerKind::Unknown);
    assert_eq!(
        detect(b"not a container").to_string(),
        "unknown (no common magic found)"
    );
}

#[test]
fn labels_match_the_reported_wording() {
    assert_eq!(ContainerKind::Gzip.to_string(), "gzip-compressed data");
    assert_eq!(ContainerKind::Zip.to_string(), "zip archive");
    assert_eq!(ContainerKind::Tar.to_string(), "tar archive");
    assert_eq!(ContainerKind::Bzip2.to_string(), "bzip2-compressed data");
    assert_eq!(ContainerKind::Xz.to_string(), "xz-compressed data");
    assert_eq!(ContainerKind::Elf.to_string(), "ELF executable");
    assert_eq!(ContainerKind::Squashfs.to_string(), "squashfs filesystem");
}

#[test]
fn xml_declaration_prefix_is_an_error_page() {
    assert!(is_error_page(b"<?xml version=\"1.0\"?>"));
}

#[test]
fn error_tag_anywhere_in_the_header_is_an_error_page() {
    assert!(is_error_page(
        b"HTTP junk before the body <Error><Code>AccessDenied</Code>"
    ));
}

/// An XML declaration takes precedence even when container magic is also
/// present further in, since the error page check runs first.
#[test]
fn xml_prefix_beats_container_magic() {
    let mut buf = b"<?xml".to_vec();
    buf.extend_from_slice(&[0x1f, 0x8b]);
    assert!(is_error_page(&buf));
}

#[test]
fn binary_headers_are_not_error_pages() {
    assert!(!is_error_page(&[0x1f, 0x8b, 0x08, 0x00]));
    assert!(!is_error_page(b"xml without the declaration"));
    assert!(!is_error_page(&[]));
}
