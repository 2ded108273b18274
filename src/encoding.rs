//! UTF-8 byte order mark handling for streamed input.

use std::io::{self, Cursor, Read};

/// The UTF-8 BOM byte sequence: EF BB BF.
pub(crate) const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
pub(crate) fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&UTF8_BOM)
}

/// Strip a leading UTF-8 BOM from `input` without buffering the stream.
///
/// Reads at most three bytes. When they spell the BOM they are discarded;
/// otherwise they are replayed ahead of the rest of the stream.
pub(crate) fn strip_bom<D: Read>(mut input: D) -> io::Result<impl Read> {
    let mut head = [0u8; 3];
    let mut filled = 0;
    while filled < head.len() {
        match input.read(&mut head[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    let kept = if has_utf8_bom(&head[..filled]) {
        Vec::new()
    } else {
        head[..filled].to_vec()
    };
    Ok(Cursor::new(kept).chain(input))
}
