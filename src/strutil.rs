//! Safe bounded string copies over byte buffers.
//!
//! X11 hands back raw, possibly unterminated byte runs; these helpers
//! copy them into fixed-capacity buffers without ever overflowing and
//! with a guaranteed trailing NUL. Truncation is not an error: the
//! returned length tells the caller how much space the source wanted.

/// Length of `src` as a C string: bytes up to the first NUL, or the
/// whole slice if none is present.
pub fn strlen(src: &[u8]) -> usize {
    src.iter().position(|&b| b == 0).unwrap_or(src.len())
}

/// Safe limited string copy.
///
/// Copies at most `min(dst.len() - 1, limit)` bytes of `src` into
/// `dst`, always writing a final NUL right after the copied bytes.
/// An empty `dst` is allowed and left untouched.
///
/// Returns `min(strlen(src), limit)`: the length the copy would have
/// had without the capacity bound. A return value `>= dst.len()`
/// means the copy was truncated.
pub fn strncpy(dst: &mut [u8], src: &[u8], limit: usize) -> usize {
    let len = strlen(src).min(limit);

    if !dst.is_empty() {
        let dlen = (dst.len() - 1).min(len);
        dst[..dlen].copy_from_slice(&src[..dlen]);
        dst[dlen] = 0;
    }

    len
}

/// Safe string copy: [`strncpy`] without a source bound.
///
/// Returns `strlen(src)`; a return value `>= dst.len()` means the
/// copy was truncated.
pub fn strcpy(dst: &mut [u8], src: &[u8]) -> usize {
    let len = strlen(src);
    strncpy(dst, src, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_and_terminates() {
        let mut dst = [0xffu8; 8];
        assert_eq!(strcpy(&mut dst, b"abc"), 3);
        assert_eq!(&dst[..4], b"abc\0");
    }

    #[test]
    fn empty_dst_writes_nothing() {
        let mut dst: [u8; 0] = [];
        assert_eq!(strcpy(&mut dst, b"hello"), 5);
        assert_eq!(strncpy(&mut dst, b"hello", 2), 2);
    }

    #[test]
    fn truncates_to_capacity() {
        let mut dst = [0xffu8; 4];
        let len = strcpy(&mut dst, b"overflow");
        assert_eq!(len, 8);
        assert_eq!(&dst, b"ove\0");
        // ret >= capacity signals truncation
        assert!(len >= dst.len());
    }

    #[test]
    fn limit_bounds_the_source() {
        let mut dst = [0xffu8; 16];
        assert_eq!(strncpy(&mut dst, b"abcdef", 3), 3);
        assert_eq!(&dst[..4], b"abc\0");
    }

    #[test]
    fn return_ignores_capacity() {
        let mut small = [0u8; 2];
        let mut large = [0u8; 64];
        assert_eq!(strncpy(&mut small, b"abcdef", 4), 4);
        assert_eq!(strncpy(&mut large, b"abcdef", 4), 4);
    }

    #[test]
    fn exact_fit_is_not_truncation() {
        let mut dst = [0u8; 4];
        let len = strcpy(&mut dst, b"abc");
        assert_eq!(&dst, b"abc\0");
        assert!(len < dst.len());
    }

    #[test]
    fn source_stops_at_interior_nul() {
        let mut dst = [0xffu8; 8];
        assert_eq!(strcpy(&mut dst, b"ab\0cd"), 2);
        assert_eq!(&dst[..3], b"ab\0");
    }

    #[test]
    fn one_byte_dst_holds_empty_string() {
        let mut dst = [0xffu8; 1];
        assert_eq!(strcpy(&mut dst, b"xyz"), 3);
        assert_eq!(dst[0], 0);
    }
}
