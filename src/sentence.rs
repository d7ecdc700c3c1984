//! # Typed Sentence Views
//!
//! Every sentence kind is a thin view over a [`SentenceRecord`]: it knows its sentence
//! id, how many fields a blank sentence has, its begin character and any fixed
//! indicator fields, and otherwise reads and writes the record by field index.
//!
//! [`SentenceKind`] is the static side, usually derived:
//!
//! ```rust
//! use nmea0183_sentence::{Sentence, SentenceKind, SentenceRecord, TalkerId};
//!
//! #[derive(Debug, Clone, PartialEq, Sentence)]
//! #[sentence(id = "MTW", fields = 2, preset(index = 1, value = "C"))]
//! pub struct WaterTemperature(SentenceRecord);
//!
//! let mut mtw = WaterTemperature::for_talker(TalkerId::II);
//! mtw.as_record_mut().set_double(0, 17.84, 1, 1).unwrap();
//! assert_eq!(mtw.to_text(), "$IIMTW,17.8,C*1D");
//! ```
//!
//! [`Sentence`] is the object-safe side that the [`SentenceFactory`](crate::SentenceFactory)
//! hands out as `Box<dyn Sentence>`.

use std::{any::Any, fmt};

use log::debug;

use crate::{BeginChar, Result, SentenceRecord, TalkerId, Validator};

/// A sentence kind with a fixed sentence id, implemented by a newtype over
/// [`SentenceRecord`].
///
/// Use `#[derive(Sentence)]` rather than implementing this by hand.
pub trait SentenceKind: fmt::Debug + Send + Sync + Sized + 'static {
    /// Sentence id of 2 to 8 upper-case letters or digits, e.g. `GGA`
    const SENTENCE_ID: &'static str;
    /// Number of fields of a blank sentence
    const FIELD_COUNT: usize;
    /// Begin character of a blank sentence
    const BEGIN_CHAR: BeginChar = BeginChar::Standard;
    /// `(index, value)` pairs written into a blank sentence, e.g. unit indicators
    const PRESETS: &'static [(usize, &'static str)] = &[];

    /// Wraps a record that is known to carry [`Self::SENTENCE_ID`].
    fn from_record(record: SentenceRecord) -> Self;

    /// Returns the underlying record.
    fn as_record(&self) -> &SentenceRecord;

    /// Returns the underlying record for writing.
    fn as_record_mut(&mut self) -> &mut SentenceRecord;

    /// Unwraps the underlying record.
    fn into_record(self) -> SentenceRecord;

    /// Parses raw text, checking the sentence id.
    fn parse(raw: &str) -> Result<Self> {
        SentenceRecord::parse_expecting(raw, Self::SENTENCE_ID).map(Self::from_record)
    }

    /// Parses raw text under `validator`, checking the sentence id.
    fn parse_with(raw: &str, validator: &Validator) -> Result<Self> {
        SentenceRecord::parse_with_expecting(raw, validator, Self::SENTENCE_ID)
            .map(Self::from_record)
    }

    /// Creates a blank sentence for `talker_id`, with the presets filled in.
    ///
    /// Any talker id forms a valid address with a [`Self::SENTENCE_ID`] of 2 to 8
    /// upper-case letters or digits, which `#[derive(Sentence)]` checks at compile time.
    fn for_talker(talker_id: TalkerId) -> Self {
        let mut record =
            SentenceRecord::blank(Self::BEGIN_CHAR, talker_id, Self::SENTENCE_ID, Self::FIELD_COUNT);

        for (index, value) in Self::PRESETS {
            if let Err(err) = record.set_field(*index, value) {
                debug!("{}: skipping preset {index}: {err}", Self::SENTENCE_ID);
            }
        }

        Self::from_record(record)
    }
}

/// A decoded sentence of any kind.
///
/// Implemented for every [`SentenceKind`]; use [`downcast_ref`](trait.Sentence.html#method.downcast_ref)
/// to get back to the concrete kind.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{SentenceFactory, sentences::GGA};
///
/// let factory = SentenceFactory::default();
/// let sentence = factory.create_from_text("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,").unwrap();
///
/// assert_eq!(sentence.record().sentence_id(), "GGA");
/// assert!(sentence.downcast_ref::<GGA>().is_some());
/// ```
pub trait Sentence: fmt::Debug + Send + Sync + Any {
    /// Returns the underlying record.
    fn record(&self) -> &SentenceRecord;

    /// Returns the underlying record for writing.
    fn record_mut(&mut self) -> &mut SentenceRecord;

    /// Returns the sentence as [`Any`], for downcasting to its concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Serializes the sentence with a fresh checksum.
    fn to_text(&self) -> String {
        self.record().to_text()
    }
}

impl<T: SentenceKind> Sentence for T {
    fn record(&self) -> &SentenceRecord {
        self.as_record()
    }

    fn record_mut(&mut self) -> &mut SentenceRecord {
        self.as_record_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Sentence {
    /// Returns `true` if the sentence is a `T`.
    pub fn is<T: Sentence>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the sentence as a `T`, if it is one.
    pub fn downcast_ref<T: Sentence>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

impl fmt::Display for dyn Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
