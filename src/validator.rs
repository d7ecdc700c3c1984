//! # Structural Validation
//!
//! This module recognizes the NMEA 0183 sentence shape:
//! `<begin><address>,<payload>[*<checksum>][<terminator>]`
//!
//! - `begin` is `$` or `!`
//! - `address` is 3 to 10 upper-case letters or digits (talker id followed by the
//!   sentence id; proprietary addresses may be long)
//! - `payload` is any run of printable ASCII
//! - `checksum` is two upper-case hexadecimal digits
//! - `terminator` is one of `\r`, `\n`, `\r\n` or `\n\r`
//!
//! The conventional 82 character length limit is not enforced here. Devices on the wire
//! violate it routinely, and dropping otherwise well formed traffic is worse than
//! accepting a long line. Use [`SentenceRecord::to_text_checked`](crate::SentenceRecord::to_text_checked)
//! where the limit matters.
//!
//! How strict the validator is about the checksum and the terminator is configurable:
//! - Checksum requirements (required or optional)
//! - Line ending requirements (required, optional or forbidden)

use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{all_consuming, eof, opt},
};

use crate::{CHECKSUM_DELIMITER, FIELD_DELIMITER, checksum};

/// Defines how the validator handles the `*CC` checksum suffix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// The sentence must end in `*` followed by exactly two upper-case hexadecimal
    /// digits (before the terminator), and the digits must match the content.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Sentences without a checksum are valid by structure alone.
    #[default]
    Optional,
}

/// Defines how the validator handles line terminators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEndingMode {
    /// A single terminator (`\r`, `\n`, `\r\n` or `\n\r`) must be present.
    ///
    /// Use this mode for raw serial or log file lines.
    Required,

    /// At most a single terminator may be present.
    #[default]
    Optional,

    /// No terminator may be present.
    ///
    /// Use this mode for lines that were already split and stripped, e.g. by a
    /// line reader.
    Forbidden,
}

/// Configurable structural validator.
///
/// The default validator accepts sentences with or without a checksum and with or
/// without a single line terminator.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{ChecksumMode, LineEndingMode, Validator};
///
/// let lenient = Validator::default();
/// assert!(lenient.is_valid("$GPGGA,data"));
/// assert!(lenient.is_valid("$GPGGA,data*6A\r\n"));
///
/// let strict = Validator::new(ChecksumMode::Required, LineEndingMode::Required);
/// assert!(strict.is_valid("$GPGGA,data*6A\r\n"));
/// assert!(!strict.is_valid("$GPGGA,data*6A"));   // (missing terminator)
/// assert!(!strict.is_valid("$GPGGA,data\r\n"));  // (missing checksum)
/// assert!(!strict.is_valid("$GPGGA,data*99\r\n")); // (wrong checksum)
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validator {
    /// Checksum requirement
    pub checksum: ChecksumMode,
    /// Line terminator requirement
    pub line_ending: LineEndingMode,
}

impl Validator {
    /// Creates a validator with the given checksum and line ending requirements.
    pub const fn new(checksum: ChecksumMode, line_ending: LineEndingMode) -> Self {
        Self {
            checksum,
            line_ending,
        }
    }

    /// Returns `true` if `raw` has the shape of a sentence.
    ///
    /// The checksum digits, if any, are not verified; see [`Validator::is_valid`].
    pub fn is_sentence(&self, raw: &str) -> bool {
        self.frame(raw).is_some()
    }

    /// Returns `true` if `raw` has the shape of a sentence and its checksum, when
    /// present, matches the content.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.checked_frame(raw).is_some()
    }

    /// Like [`Validator::frame`], but also rejects a checksum that does not match.
    pub(crate) fn checked_frame<'a>(&self, raw: &'a str) -> Option<Frame<'a>> {
        let frame = self.frame(raw)?;

        match frame.checksum {
            Some(found) if found.trim() != checksum::calculate(raw) => {
                trace!("checksum mismatch in {raw:?}");
                None
            }
            _ => Some(frame),
        }
    }

    /// Splits `raw` into its framing parts if it satisfies this validator's shape
    /// requirements.
    pub(crate) fn frame<'a>(&self, raw: &'a str) -> Option<Frame<'a>> {
        let Ok((_, frame)) = frame(raw) else {
            trace!("not a sentence: {raw:?}");
            return None;
        };

        let line_ending_ok = match self.line_ending {
            LineEndingMode::Required => frame.terminator.is_some(),
            LineEndingMode::Optional => true,
            LineEndingMode::Forbidden => frame.terminator.is_none(),
        };

        let checksum_ok = match self.checksum {
            ChecksumMode::Required => frame.checksum.is_some_and(is_checksum_digits),
            ChecksumMode::Optional => true,
        };

        if line_ending_ok && checksum_ok {
            Some(frame)
        } else {
            trace!("{raw:?} rejected by {self:?}");
            None
        }
    }
}

/// Returns `true` if `raw` has the shape of a sentence, with or without checksum and
/// line terminator.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::is_sentence;
///
/// assert!(is_sentence("$ABCDE,1,2,3"));
/// assert!(is_sentence("!AIVDM,1,1,,A,13u@Dt002s000000000000000000,0*00"));
/// assert!(!is_sentence("$gpgga,1,2,3"));
/// ```
pub fn is_sentence(raw: &str) -> bool {
    Validator::default().is_sentence(raw)
}

/// Returns `true` if `raw` is a sentence whose checksum, when present, is correct.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::is_valid;
///
/// assert!(is_valid("$ABCDE,1,2,3"));
/// assert!(!is_valid("$ABCDE,1,2,3*00"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    Validator::default().is_valid(raw)
}

/// The framing parts of a structurally valid sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Frame<'a> {
    pub begin: char,
    pub address: &'a str,
    /// Everything between the first field delimiter and the checksum delimiter
    pub data: &'a str,
    pub checksum: Option<&'a str>,
    pub terminator: Option<&'a str>,
}

fn frame(i: &str) -> IResult<&str, Frame<'_>> {
    let (i, begin) = one_of("$!").parse(i)?;
    let (i, address) = address(i)?;
    let (i, _) = char(FIELD_DELIMITER).parse(i)?;
    let (i, payload) = take_while(is_printable).parse(i)?;
    let (i, terminator) = opt(line_terminator).parse(i)?;
    let (i, _) = eof.parse(i)?;

    let (data, checksum) = match payload.split_once(CHECKSUM_DELIMITER) {
        Some((data, checksum)) => (data, Some(checksum)),
        None => (payload, None),
    };

    Ok((
        i,
        Frame {
            begin,
            address,
            data,
            checksum,
            terminator,
        },
    ))
}

fn address(i: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 10, is_address_char).parse(i)
}

/// Returns `true` if `text` is a complete address field: talker id plus sentence id.
pub(crate) fn is_address(text: &str) -> bool {
    all_consuming(address).parse(text).is_ok()
}

fn line_terminator(i: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\n\r"), tag("\r"), tag("\n"))).parse(i)
}

fn is_address_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn is_checksum_digits(checksum: &str) -> bool {
    checksum.len() == 2
        && checksum
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_parts() {
        let (_, parts) = frame("$GPGGA,1,,3*78\r\n").unwrap();
        assert_eq!(parts.begin, '$');
        assert_eq!(parts.address, "GPGGA");
        assert_eq!(parts.data, "1,,3");
        assert_eq!(parts.checksum, Some("78"));
        assert_eq!(parts.terminator, Some("\r\n"));

        let (_, parts) = frame("!AIVDO,").unwrap();
        assert_eq!(parts.begin, '!');
        assert_eq!(parts.data, "");
        assert_eq!(parts.checksum, None);
        assert_eq!(parts.terminator, None);
    }

    #[test]
    fn test_frame_rejects_control_characters() {
        assert!(frame("$GPGGA,1\t2").is_err());
        assert!(frame("$GPGGA,1\r\n2").is_err());
        assert!(frame("$GPGGA,1\u{e9}").is_err());
    }

    #[test]
    fn test_line_ending_modes() {
        let line = "$GPGGA,data*6A\r\n";
        let stripped = "$GPGGA,data*6A";

        let required = Validator::new(ChecksumMode::Optional, LineEndingMode::Required);
        assert!(required.is_valid(line));
        assert!(!required.is_valid(stripped));

        let forbidden = Validator::new(ChecksumMode::Optional, LineEndingMode::Forbidden);
        assert!(!forbidden.is_valid(line));
        assert!(forbidden.is_valid(stripped));
    }

    #[test]
    fn test_checksum_modes() {
        let required = Validator::new(ChecksumMode::Required, LineEndingMode::Optional);
        assert!(required.is_valid("$GPGGA,data*6A"));
        assert!(!required.is_valid("$GPGGA,data"));
        assert!(!required.is_sentence("$GPGGA,data*6"));
        assert!(!required.is_sentence("$GPGGA,data*6a"));

        let optional = Validator::default();
        assert!(optional.is_valid("$GPGGA,data"));
        assert!(!optional.is_valid("$GPGGA,data*6a"));
    }
}
