//! # Checksum
//!
//! The NMEA 0183 checksum is the XOR of every byte strictly between the begin
//! character (`$` or `!`) and the checksum delimiter (`*`), rendered as two
//! upper-case hexadecimal digits.
//!
//! All functions here are pure and infallible: any string has a checksum, even
//! one that is not a sentence.

use crate::CHECKSUM_DELIMITER;

/// XORs every byte of `input`.
///
/// This is the raw checksum over sentence content that has already been stripped of
/// the begin character and everything from the checksum delimiter on.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::checksum::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(input: &str) -> u8 {
    input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit upper-case hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::checksum::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x05), "05");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Returns the byte position of the checksum delimiter, or the length of `sentence`
/// when there is none.
pub fn index_of_delimiter(sentence: &str) -> usize {
    sentence
        .find(CHECKSUM_DELIMITER)
        .unwrap_or(sentence.len())
}

/// Calculates the checksum of a complete sentence.
///
/// The first character is taken to be the begin character and skipped; anything from
/// the checksum delimiter on (an existing checksum, a line terminator) is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::checksum::calculate;
///
/// assert_eq!(calculate("$GPGGA,123456,data"), "41");
/// assert_eq!(calculate("$GPGGA,123456,data*00\r\n"), "41");
/// ```
pub fn calculate(sentence: &str) -> String {
    let mut content = sentence[..index_of_delimiter(sentence)].chars();
    content.next();

    format_checksum(checksum(content.as_str()))
}

/// Returns `sentence` with any existing checksum (and whatever follows it) replaced by
/// a freshly computed one.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::checksum::append;
///
/// assert_eq!(append("$GPGGA,123456,data"), "$GPGGA,123456,data*41");
/// assert_eq!(append("$GPGGA,123456,data*FF"), "$GPGGA,123456,data*41");
/// ```
pub fn append(sentence: &str) -> String {
    let end = index_of_delimiter(sentence);
    let mut appended = String::with_capacity(end + 3);
    appended.push_str(&sentence[..end]);
    appended.push(CHECKSUM_DELIMITER);
    appended.push_str(&calculate(sentence));
    appended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate() {
        assert_eq!(calculate("$ABCDE,1,2,3,4,5,6,7,8,9"), "5C");
        assert_eq!(calculate("$GPRMC,142312.000,V,,,,,,,080514,,"), "20");
        assert_eq!(
            calculate("!AIVDM,1,1,,A,13u@Dt002s000000000000000000,0"),
            calculate("$AIVDM,1,1,,A,13u@Dt002s000000000000000000,0")
        );
    }

    #[test]
    fn test_calculate_zero_padded() {
        // 'E' ^ '@' == 0x05
        assert_eq!(calculate("$E@"), "05");
        assert_eq!(calculate("$E@*FF"), "05");
    }

    #[test]
    fn test_calculate_degenerate_input() {
        assert_eq!(calculate(""), "00");
        assert_eq!(calculate("$"), "00");
        assert_eq!(calculate("*"), "00");
        assert_eq!(calculate("$*12"), "00");
        assert_eq!(calculate("\u{e9}E@"), "05");
    }

    #[test]
    fn test_index_of_delimiter() {
        assert_eq!(index_of_delimiter("$GPGGA,1*7F"), 8);
        assert_eq!(index_of_delimiter("$GPGGA,1"), 8);
        assert_eq!(index_of_delimiter(""), 0);
    }

    #[test]
    fn test_append() {
        let sentence = "$ABCDE,1,2,3,4,5,6,7,8,9";
        let appended = append(sentence);
        assert_eq!(appended.len(), sentence.len() + 3);
        assert!(appended.starts_with(sentence));
        assert!(appended.ends_with(&calculate(sentence)));

        assert_eq!(append(&appended), appended);
        assert_eq!(append("$GPRMC,142312.000,V,,,,,,,080514,,*00\r\n"), "$GPRMC,142312.000,V,,,,,,,080514,,*20");
    }
}
