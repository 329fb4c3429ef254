//! Plain-text decoder.
//!
//! The payload is already text; it only needs byte decoding. Decoding is
//! lossy, mirroring the browser file-reading primitive that hands back a
//! string no matter what, so this path cannot fail.

pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
