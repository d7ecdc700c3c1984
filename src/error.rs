//! # Error Types
//!
//! This module defines the error type shared by every part of the sentence engine:
//! structural validation, field access, the field codec and the sentence registry.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur while decoding or encoding sentences.
///
/// None of these are fatal on their own; whether a malformed line aborts a batch or is
/// skipped is left to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The raw text failed structural validation (bad shape, bad checksum or
    /// disallowed characters).
    #[error("malformed sentence: {0:?}")]
    MalformedSentence(String),

    /// The parsed sentence id differs from the id the caller expected.
    #[error("sentence id mismatch: expected {expected}, found {found}")]
    SentenceIdMismatch {
        /// The id the caller asked for
        expected: String,
        /// The id found in the sentence
        found: String,
    },

    /// The requested field holds the empty sentinel.
    ///
    /// Callers may probe for this before deciding how to proceed; it is not a
    /// malformed-content condition.
    #[error("field {0} is not available")]
    FieldNotAvailable(usize),

    /// The field holds content that cannot be converted to the requested type.
    #[error("field {index}: cannot read {value:?} as {expected}")]
    FieldParse {
        /// Index of the field
        index: usize,
        /// Raw field content
        value: String,
        /// Name of the requested type
        expected: &'static str,
    },

    /// The field index is not allocated in the record.
    #[error("field index {index} out of range (field count {count})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current field count
        count: usize,
    },

    /// The registry has no constructor for the resolved sentence id.
    #[error("unsupported sentence: {0}")]
    UnsupportedSentence(String),

    /// A constructor was registered without one of the required construction capabilities.
    #[error("cannot register parser for {id}: missing {missing} constructor")]
    Registration {
        /// Sentence id of the rejected registration
        id: String,
        /// Name of the missing capability
        missing: &'static str,
    },

    /// A numeric value is outside the range the field accepts.
    #[error("value {value} out of range [{min}, {max}]")]
    ValueOutOfRange {
        /// Rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Field text would break sentence framing.
    #[error("field {index}: {value:?} cannot be carried in a sentence field")]
    InvalidFieldValue {
        /// Index of the field
        index: usize,
        /// Rejected text
        value: String,
    },

    /// The text is not a usable talker id.
    #[error("invalid talker id: {0:?}")]
    InvalidTalkerId(String),

    /// The talker id and sentence id do not form an address that parses back to the
    /// same pair.
    #[error("invalid sentence address: {0:?}")]
    InvalidAddress(String),

    /// The serialized sentence exceeds the caller's length limit.
    #[error("sentence is {length} characters long, limit is {max}")]
    SentenceTooLong {
        /// Serialized length, including the line terminator
        length: usize,
        /// Caller's limit
        max: usize,
    },

    /// A list of fragments does not form one complete message.
    #[error("cannot reassemble fragments: {0}")]
    FragmentSequence(&'static str),
}

impl Error {
    pub(crate) fn field_parse(index: usize, value: &str, expected: &'static str) -> Self {
        Error::FieldParse {
            index,
            value: value.to_owned(),
            expected,
        }
    }
}
