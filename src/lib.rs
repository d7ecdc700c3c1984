//! # NMEA 0183 Sentence Engine
//!
//! This library decodes and encodes NMEA 0183 sentences with the format:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` (or `!` for encapsulation sentences such as AIS).
//!
//! A sentence is held as a mutable, field-indexed [`SentenceRecord`]. Records are read
//! and written through a typed field codec (strings, characters, integers, decimals,
//! positions and, with the `time` feature, UTC times and dates), and serialized back to
//! text with a freshly computed checksum.
//!
//! On top of the record sit typed sentence views ([`sentences`]) and a
//! [`SentenceFactory`] that picks the right view for a raw line by its sentence id.
//! Custom sentence kinds are derived with `#[derive(Sentence)]` and registered at run
//! time.
//!
//! How strict parsing is can be configured:
//! - Required or optional checksum
//! - Required, optional or forbidden line terminator
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_sentence::{SentenceFactory, SentenceRecord, TalkerId, sentences::GGA};
//!
//! // Generic access by field index
//! let record = SentenceRecord::parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n").unwrap();
//! assert_eq!(record.sentence_id(), "GGA");
//! assert_eq!(record.get_int(6).unwrap(), 8);
//! assert!((record.get_latitude(1, 2).unwrap() - 48.1173).abs() < 1e-9);
//!
//! // Typed access through the registry
//! let factory = SentenceFactory::default();
//! let sentence = factory.create_from_text(&record.to_text()).unwrap();
//! let gga = sentence.downcast_ref::<GGA>().unwrap();
//! assert_eq!(gga.satellite_count().unwrap(), 8);
//!
//! // Encoding
//! let mut hdt = factory.create_for_talker(TalkerId::HE, "HDT").unwrap();
//! hdt.record_mut().set_degrees(0, 274.07).unwrap();
//! assert_eq!(hdt.to_text(), "$HEHDT,274.1,T*2F");
//! ```

// Lets the derive macro's `::nmea0183_sentence` paths resolve inside this crate.
extern crate self as nmea0183_sentence;

pub mod checksum;
pub mod error;
mod field;
mod fragment;
pub mod position;
mod record;
mod registry;
mod sentence;
pub mod sentences;
mod talker;
#[cfg(feature = "time")]
mod time_fields;
mod validator;

pub use error::{Error, Result};
pub use field::FieldValue;
pub use fragment::{Fragment, FragmentHeader, is_continuation, reassemble};
pub use nmea0183_sentence_derive::Sentence;
pub use record::{BeginChar, SentenceRecord, sentence_id_of, talker_id_of};
pub use registry::{SentenceConstructor, SentenceFactory};
pub use sentence::{Sentence, SentenceKind};
pub use talker::{TalkerCode, TalkerId};
pub use validator::{ChecksumMode, LineEndingMode, Validator, is_sentence, is_valid};

/// Separates the fields of a sentence.
pub const FIELD_DELIMITER: char = ',';

/// Separates the sentence content from the checksum.
pub const CHECKSUM_DELIMITER: char = '*';

/// The maximum sentence length set by the standard, including the begin character and
/// the `\r\n` terminator.
///
/// Only enforced by [`SentenceRecord::to_text_checked`] and
/// [`SentenceRecord::fits_max_length`].
pub const MAX_LENGTH: usize = 82;

#[cfg(test)]
mod tests {
    mod fragment;
    mod registry;
    mod round_trip;
    mod validator;
}
