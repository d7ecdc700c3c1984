//! # Sentence Record
//!
//! [`SentenceRecord`] is the single concrete representation of a sentence: a begin
//! character, a talker id, a sentence id and an ordered buffer of field strings.
//!
//! An empty field string means "value not available". It is distinct from a field
//! holding a value such as `"0"`.

use std::{fmt, str::FromStr};

use crate::{
    CHECKSUM_DELIMITER, Error, FIELD_DELIMITER, MAX_LENGTH, Result, TalkerId, Validator,
    checksum, validator,
};

/// The character a sentence starts with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeginChar {
    /// `$` - parametric sentences
    #[default]
    Standard,
    /// `!` - encapsulation sentences, e.g. AIS
    Encapsulation,
}

impl BeginChar {
    /// Returns the wire character.
    pub const fn as_char(&self) -> char {
        match self {
            BeginChar::Standard => '$',
            BeginChar::Encapsulation => '!',
        }
    }

    /// Returns the begin character for `c`, if it is one.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '$' => Some(BeginChar::Standard),
            '!' => Some(BeginChar::Encapsulation),
            _ => None,
        }
    }
}

impl fmt::Display for BeginChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A mutable, field-indexed NMEA 0183 sentence.
///
/// Records are created either by parsing raw text or by allocating a number of blank
/// fields, and are then read and written through the typed field accessors.
///
/// Two records are equal if they serialize to the same text.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{SentenceRecord, TalkerId};
///
/// let mut record = SentenceRecord::new_empty(TalkerId::II, "MTW", 2).unwrap();
/// record.set_double(0, 17.84, 1, 1).unwrap();
/// record.set_char(1, 'C').unwrap();
/// assert_eq!(record.to_text(), "$IIMTW,17.8,C*1D");
///
/// let parsed = SentenceRecord::parse("$IIMTW,17.8,C*1D").unwrap();
/// assert_eq!(parsed, record);
/// assert_eq!(parsed.get_double(0).unwrap(), 17.8);
/// ```
///
/// With the `serde` feature a record serializes as its sentence text, and
/// deserializing parses that text.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Debug, Clone)]
pub struct SentenceRecord {
    begin_char: BeginChar,
    talker_id: TalkerId,
    sentence_id: String,
    fields: Vec<String>,
}

impl SentenceRecord {
    /// Parses a sentence, accepting it with or without checksum and line terminator.
    ///
    /// Fails with [`Error::MalformedSentence`] if the text is not a valid sentence.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &Validator::default())
    }

    /// Parses a sentence under the given validator's requirements.
    pub fn parse_with(raw: &str, validator: &Validator) -> Result<Self> {
        let frame = validator
            .checked_frame(raw)
            .ok_or_else(|| Error::MalformedSentence(raw.to_owned()))?;

        let begin_char = BeginChar::from_char(frame.begin)
            .ok_or_else(|| Error::MalformedSentence(raw.to_owned()))?;
        let (talker_id, sentence_id) = split_address(frame.address)
            .ok_or_else(|| Error::MalformedSentence(raw.to_owned()))?;

        let fields = frame
            .data
            .split(FIELD_DELIMITER)
            .map(str::to_owned)
            .collect();

        Ok(Self {
            begin_char,
            talker_id,
            sentence_id: sentence_id.to_owned(),
            fields,
        })
    }

    /// Parses a sentence and checks that its sentence id is `expected`.
    ///
    /// A well-formed sentence of another kind fails with
    /// [`Error::SentenceIdMismatch`], not [`Error::MalformedSentence`].
    pub fn parse_expecting(raw: &str, expected: &str) -> Result<Self> {
        Self::parse_with_expecting(raw, &Validator::default(), expected)
    }

    /// Parses a sentence under the given validator and checks its sentence id.
    pub fn parse_with_expecting(raw: &str, validator: &Validator, expected: &str) -> Result<Self> {
        let record = Self::parse_with(raw, validator)?;

        if record.sentence_id != expected {
            return Err(Error::SentenceIdMismatch {
                expected: expected.to_owned(),
                found: record.sentence_id,
            });
        }

        Ok(record)
    }

    /// Creates a `$` sentence with `field_count` empty fields.
    ///
    /// A sentence always carries at least one field, so a count of zero allocates one
    /// (`$GPTXT,` has one empty field, not none).
    ///
    /// Fails with [`Error::InvalidAddress`] unless the talker id and sentence id form
    /// an address of 3 to 10 upper-case letters or digits that splits back into the
    /// same pair.
    ///
    /// ```rust
    /// use nmea0183_sentence::{Error, SentenceRecord, TalkerId};
    ///
    /// assert!(SentenceRecord::new_empty(TalkerId::P, "GRME", 6).is_ok());
    /// assert_eq!(
    ///     SentenceRecord::new_empty(TalkerId::GP, "gga", 2),
    ///     Err(Error::InvalidAddress("GPgga".to_owned()))
    /// );
    /// ```
    pub fn new_empty(
        talker_id: TalkerId,
        sentence_id: &str,
        field_count: usize,
    ) -> Result<Self> {
        Self::new(BeginChar::Standard, talker_id, sentence_id, field_count)
    }

    /// Creates a sentence with the given begin character and `field_count` empty fields.
    ///
    /// Checks the address like [`SentenceRecord::new_empty`].
    pub fn new(
        begin_char: BeginChar,
        talker_id: TalkerId,
        sentence_id: &str,
        field_count: usize,
    ) -> Result<Self> {
        check_address(talker_id, sentence_id)?;
        Ok(Self::blank(begin_char, talker_id, sentence_id, field_count))
    }

    /// Creates a record without checking the address.
    pub(crate) fn blank(
        begin_char: BeginChar,
        talker_id: TalkerId,
        sentence_id: &str,
        field_count: usize,
    ) -> Self {
        Self {
            begin_char,
            talker_id,
            sentence_id: sentence_id.to_owned(),
            fields: vec![String::new(); field_count.max(1)],
        }
    }

    /// Returns the begin character.
    pub fn begin_char(&self) -> BeginChar {
        self.begin_char
    }

    /// Sets the begin character.
    pub fn set_begin_char(&mut self, begin_char: BeginChar) {
        self.begin_char = begin_char;
    }

    /// Returns the talker id.
    pub fn talker_id(&self) -> TalkerId {
        self.talker_id
    }

    /// Sets the talker id.
    ///
    /// Fails with [`Error::InvalidAddress`] if the new talker id and the sentence id
    /// no longer form a valid address, e.g. switching `$PGRMEXYZAB` to a two-character
    /// talker.
    pub fn set_talker_id(&mut self, talker_id: TalkerId) -> Result<()> {
        check_address(talker_id, &self.sentence_id)?;
        self.talker_id = talker_id;
        Ok(())
    }

    /// Returns the sentence id, e.g. `GGA`, or `GRME` for `$PGRME`.
    pub fn sentence_id(&self) -> &str {
        &self.sentence_id
    }

    /// Returns `true` for proprietary sentences (talker `P`).
    pub fn is_proprietary(&self) -> bool {
        self.talker_id.is_proprietary()
    }

    /// Returns `true` for encapsulation (`!`) sentences such as AIS.
    pub fn is_ais(&self) -> bool {
        self.begin_char == BeginChar::Encapsulation
    }

    /// Returns the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns all fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the fields from `first` to the end.
    pub fn fields_from(&self, first: usize) -> Result<&[String]> {
        self.fields.get(first..).ok_or(Error::IndexOutOfRange {
            index: first,
            count: self.fields.len(),
        })
    }

    /// Truncates or pads the field buffer with empty fields.
    ///
    /// Used by sentence kinds with an optional tail. A sentence always carries at
    /// least one field, so `resize(0)` leaves a single empty field.
    pub fn resize(&mut self, field_count: usize) {
        self.fields.resize(field_count.max(1), String::new());
    }

    /// Empties every field, keeping the field count.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(String::clear);
    }

    /// Returns `true` if the field exists and is not empty.
    pub fn has_value(&self, index: usize) -> bool {
        self.fields.get(index).is_some_and(|field| !field.is_empty())
    }

    /// Returns the raw field text, which may be empty.
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.fields.len(),
            })
    }

    /// Replaces the raw field text. An empty string clears the field.
    ///
    /// Fails with [`Error::InvalidFieldValue`] if the text contains a delimiter or
    /// anything other than printable ASCII.
    pub fn set_field(&mut self, index: usize, value: &str) -> Result<()> {
        check_field_value(index, value)?;

        let count = self.fields.len();
        let field = self
            .fields
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, count })?;

        field.clear();
        field.push_str(value);
        Ok(())
    }

    /// Replaces every field from `first` on with `values`, growing or shrinking the
    /// buffer as needed.
    ///
    /// Sentence kinds with a variable number of trailing groups use this to write the
    /// whole tail at once.
    pub fn set_values<S: AsRef<str>>(&mut self, first: usize, values: &[S]) -> Result<()> {
        if first > self.fields.len() {
            return Err(Error::IndexOutOfRange {
                index: first,
                count: self.fields.len(),
            });
        }

        for (offset, value) in values.iter().enumerate() {
            check_field_value(first + offset, value.as_ref())?;
        }

        self.fields.truncate(first);
        self.fields
            .extend(values.iter().map(|value| value.as_ref().to_owned()));
        if self.fields.is_empty() {
            self.fields.push(String::new());
        }
        Ok(())
    }

    /// Serializes the record, computing a fresh checksum.
    ///
    /// Trailing empty fields are kept; the output never includes a line terminator.
    pub fn to_text(&self) -> String {
        let mut body = String::with_capacity(
            8 + self.sentence_id.len() + self.fields.iter().map(|f| f.len() + 1).sum::<usize>(),
        );

        body.push_str(&self.talker_id.to_string());
        body.push_str(&self.sentence_id);
        for field in &self.fields {
            body.push(FIELD_DELIMITER);
            body.push_str(field);
        }

        let cc = checksum::format_checksum(checksum::checksum(&body));
        format!("{}{body}{CHECKSUM_DELIMITER}{cc}", self.begin_char)
    }

    /// Serializes the record, failing if the sentence plus its `\r\n` terminator would
    /// be longer than `max_length` characters.
    ///
    /// [`MAX_LENGTH`] is the limit set by the standard.
    pub fn to_text_checked(&self, max_length: usize) -> Result<String> {
        let text = self.to_text();
        let length = text.len() + 2;

        if length > max_length {
            return Err(Error::SentenceTooLong {
                length,
                max: max_length,
            });
        }

        Ok(text)
    }

    /// Returns `true` if the serialized sentence fits within [`MAX_LENGTH`].
    pub fn fits_max_length(&self) -> bool {
        self.to_text_checked(MAX_LENGTH).is_ok()
    }
}

impl PartialEq for SentenceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.to_text() == other.to_text()
    }
}

impl Eq for SentenceRecord {}

impl fmt::Display for SentenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for SentenceRecord {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for SentenceRecord {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<SentenceRecord> for String {
    fn from(record: SentenceRecord) -> Self {
        record.to_text()
    }
}

/// Resolves the sentence id of a raw sentence without parsing its fields.
///
/// For proprietary sentences (`$P...`) this is everything after the `P` up to the
/// first field delimiter; otherwise everything after the two-character talker id.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::sentence_id_of;
///
/// assert_eq!(sentence_id_of("$GPGGA,1,2,3"), Some("GGA"));
/// assert_eq!(sentence_id_of("$PGRME,15.0,M*00"), Some("GRME"));
/// assert_eq!(sentence_id_of("GPGGA,1,2,3"), None);
/// ```
pub fn sentence_id_of(raw: &str) -> Option<&str> {
    let frame = Validator::default().frame(raw)?;
    split_address(frame.address).map(|(_, sentence_id)| sentence_id)
}

/// Resolves the talker id of a raw sentence without parsing its fields.
pub fn talker_id_of(raw: &str) -> Option<TalkerId> {
    let frame = Validator::default().frame(raw)?;
    split_address(frame.address).map(|(talker_id, _)| talker_id)
}

/// Splits an address field (already checked to be upper-case ASCII) into talker and
/// sentence id.
fn split_address(address: &str) -> Option<(TalkerId, &str)> {
    if let Some(sentence_id) = address.strip_prefix('P') {
        return Some((TalkerId::P, sentence_id));
    }

    let (talker, sentence_id) = address.split_at_checked(2)?;
    Some((talker.parse().ok()?, sentence_id))
}

/// Checks that `talker_id` and `sentence_id` serialize to an address that parses back
/// into the same pair.
fn check_address(talker_id: TalkerId, sentence_id: &str) -> Result<()> {
    let address = format!("{talker_id}{sentence_id}");

    if validator::is_address(&address)
        && split_address(&address) == Some((talker_id, sentence_id))
    {
        Ok(())
    } else {
        Err(Error::InvalidAddress(address))
    }
}

pub(crate) fn check_field_value(index: usize, value: &str) -> Result<()> {
    let framing_safe = value
        .chars()
        .all(|c| (' '..='~').contains(&c) && c != FIELD_DELIMITER && c != CHECKSUM_DELIMITER);

    if framing_safe {
        Ok(())
    } else {
        Err(Error::InvalidFieldValue {
            index,
            value: value.to_owned(),
        })
    }
}
