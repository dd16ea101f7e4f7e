//! XMP envelope scanning
//!
//! Locates the `<x:xmpmeta ...>...</x:xmpmeta>` block inside arbitrary file
//! bytes. Files may contain binary data, so the search works on raw bytes.

use crate::core::options::ExtractOptions;
use std::ops::Range;

/// Opening marker of the XMP envelope
pub const MARKER_BEGIN: &[u8] = b"<x:xmpmeta";
/// Closing marker of the XMP envelope
pub const MARKER_END: &[u8] = b"</x:xmpmeta>";

/// Find the byte range of the XMP envelope in `buffer`.
///
/// The range starts at the first `<x:xmpmeta` and ends just past the first
/// `</x:xmpmeta>`. Returns `None` when either marker is missing, when the
/// closing marker does not end after the opening one, or when the opening
/// marker sits at offset 0 and `options.accept_marker_at_start` is off.
pub fn locate_xmp(buffer: &[u8], options: &ExtractOptions) -> Option<Range<usize>> {
    let Some(begin) = find(buffer, MARKER_BEGIN) else {
        tracing::debug!("no XMP opening marker in {} bytes", buffer.len());
        return None;
    };

    if begin == 0 && !options.accept_marker_at_start {
        tracing::debug!("XMP opening marker at offset 0 ignored");
        return None;
    }

    let Some(end_start) = find(buffer, MARKER_END) else {
        tracing::debug!(begin, "no XMP closing marker");
        return None;
    };

    let end = end_start + MARKER_END.len();
    if end <= begin {
        tracing::debug!(begin, end, "XMP closing marker precedes opening marker");
        return None;
    }

    tracing::debug!(begin, end, "located XMP envelope");
    Some(begin..end)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKET: &[u8] = b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"></x:xmpmeta>";

    #[test]
    fn test_locate_in_junk() {
        let mut buffer = b"\xff\xd8\xff\xe1junk".to_vec();
        buffer.extend_from_slice(PACKET);
        buffer.extend_from_slice(b"\x00\x00trailing");

        let range = locate_xmp(&buffer, &ExtractOptions::default()).unwrap();
        assert_eq!(range, 8..8 + PACKET.len());
        assert_eq!(&buffer[range], PACKET);
    }

    #[test]
    fn test_missing_markers() {
        let options = ExtractOptions::default();
        assert_eq!(locate_xmp(b"", &options), None);
        assert_eq!(locate_xmp(b"nothing here", &options), None);
        assert_eq!(locate_xmp(b"junk <x:xmpmeta> no end", &options), None);
        assert_eq!(locate_xmp(b"junk </x:xmpmeta> no begin", &options), None);
    }

    #[test]
    fn test_marker_at_start() {
        assert_eq!(locate_xmp(PACKET, &ExtractOptions::default()), None);

        let options = ExtractOptions::default().accept_marker_at_start();
        assert_eq!(locate_xmp(PACKET, &options), Some(0..PACKET.len()));
    }

    #[test]
    fn test_closing_marker_before_opening() {
        let buffer = b"junk </x:xmpmeta> more <x:xmpmeta>";
        assert_eq!(locate_xmp(buffer, &ExtractOptions::default()), None);
    }

    #[test]
    fn test_first_closing_marker_wins() {
        let buffer = b"_<x:xmpmeta></x:xmpmeta><x:xmpmeta></x:xmpmeta>";
        let range = locate_xmp(buffer, &ExtractOptions::default()).unwrap();
        assert_eq!(&buffer[range], b"<x:xmpmeta></x:xmpmeta>");
    }
}
