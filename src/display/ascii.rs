//! Byte to display-token mapping for the ASCII base.
//!
//! Every byte becomes a two-column token so a word always renders as eight
//! columns: printable characters are right-aligned, the common control
//! characters use their escape mnemonics, everything else is a dot.

/// Token used for bytes with no printable form.
pub const NON_PRINTABLE: &str = " .";

/// Two-column token for a single byte.
pub fn byte_token(byte: u8) -> String {
    match byte {
        0x00 => "\\0".to_string(),
        0x08 => "\\b".to_string(),
        0x09 => "\\t".to_string(),
        0x0a => "\\n".to_string(),
        0x0b => "\\v".to_string(),
        0x0c => "\\f".to_string(),
        0x0d => "\\r".to_string(),
        0x20..=0x7e => format!("{:>2}", byte as char),
        _ => NON_PRINTABLE.to_string(),
    }
}

/// Render the four bytes of a word, most significant byte first.
pub fn word_to_ascii(value: i32) -> String {
    value.to_be_bytes().iter().map(|&b| byte_token(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_right_aligned() {
        assert_eq!(byte_token(b'A'), " A");
        assert_eq!(byte_token(b' '), "  ");
        assert_eq!(byte_token(b'~'), " ~");
    }

    #[test]
    fn test_control_mnemonics() {
        assert_eq!(byte_token(0), "\\0");
        assert_eq!(byte_token(b'\n'), "\\n");
        assert_eq!(byte_token(b'\t'), "\\t");
        assert_eq!(byte_token(0x0d), "\\r");
    }

    #[test]
    fn test_non_printable() {
        assert_eq!(byte_token(0x01), NON_PRINTABLE);
        assert_eq!(byte_token(0x7f), NON_PRINTABLE);
        assert_eq!(byte_token(0xff), NON_PRINTABLE);
    }

    #[test]
    fn test_word_byte_order() {
        // "Hi!\n" packed big-endian
        assert_eq!(word_to_ascii(0x4869_210a), " H i !\\n");
        assert_eq!(word_to_ascii(0), "\\0\\0\\0\\0");
    }

    #[test]
    fn test_word_is_eight_columns() {
        for value in [0, -1, 0x7f00_1041, i32::MIN] {
            assert_eq!(word_to_ascii(value).chars().count(), 8);
        }
    }
}
