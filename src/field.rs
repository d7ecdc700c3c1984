//! # Field Codec
//!
//! Typed access to the fields of a [`SentenceRecord`].
//!
//! Reading distinguishes three failure modes:
//! - [`Error::IndexOutOfRange`] - the field is not allocated
//! - [`Error::FieldNotAvailable`] - the field is empty
//! - [`Error::FieldParse`] - the field holds text of the wrong type
//!
//! Numeric setters render with a fixed number of leading and decimal digits, always
//! using `.` as the decimal separator.

use nom::{
    IResult, Parser,
    character::complete::anychar,
    combinator::all_consuming,
};

use crate::{Error, Result, SentenceRecord};

/// Trait for values that can be read from and written to a single sentence field.
///
/// Implementations are provided for the primitive integer and float types, `char` and
/// `String` (and, with the `time` feature, `time::Time` and `time::Date`). Parsing is
/// done with nom; the whole field must be consumed.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::SentenceRecord;
///
/// let record = SentenceRecord::parse("$GPGSV,3,1,11,01,65,123,45").unwrap();
/// assert_eq!(record.get::<u8>(0).unwrap(), 3);
/// assert_eq!(record.get::<u16>(5).unwrap(), 123);
/// assert!(record.get::<u8>(2).is_ok());
/// assert!(record.get::<char>(2).is_err());
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_sentence::{FieldValue, SentenceRecord};
/// use nom::{IResult, Parser, character::complete::one_of};
///
/// #[derive(Debug, PartialEq)]
/// enum Status {
///     Valid,
///     Invalid,
/// }
///
/// impl FieldValue for Status {
///     const NAME: &'static str = "status";
///
///     fn parse_field(i: &str) -> IResult<&str, Self> {
///         one_of("AV")
///             .map(|c| if c == 'A' { Status::Valid } else { Status::Invalid })
///             .parse(i)
///     }
///
///     fn format_field(&self) -> String {
///         match self {
///             Status::Valid => "A".to_owned(),
///             Status::Invalid => "V".to_owned(),
///         }
///     }
/// }
///
/// let record = SentenceRecord::parse("$GPRMC,123519,A").unwrap();
/// assert_eq!(record.get::<Status>(1).unwrap(), Status::Valid);
/// ```
pub trait FieldValue: Sized {
    /// Type name reported in [`Error::FieldParse`].
    const NAME: &'static str;

    /// Parses the value from the start of `i`.
    fn parse_field(i: &str) -> IResult<&str, Self>;

    /// Renders the value as field text.
    fn format_field(&self) -> String;
}

macro_rules! impl_integer_type {
    ($($t:tt),*) => ($(
        impl FieldValue for $t {
            const NAME: &'static str = stringify!($t);

            fn parse_field(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t.parse(i)
            }

            fn format_field(&self) -> String {
                self.to_string()
            }
        }
    )*)
}

impl_integer_type!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl FieldValue for $t {
            const NAME: &'static str = stringify!($t);

            fn parse_field(i: &str) -> IResult<&str, Self> {
                nom::number::complete::$p.parse(i)
            }

            fn format_field(&self) -> String {
                self.to_string()
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl FieldValue for char {
    const NAME: &'static str = "char";

    fn parse_field(i: &str) -> IResult<&str, Self> {
        anychar.parse(i)
    }

    fn format_field(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for String {
    const NAME: &'static str = "string";

    fn parse_field(i: &str) -> IResult<&str, Self> {
        Ok(("", i.to_owned()))
    }

    fn format_field(&self) -> String {
        self.clone()
    }
}

impl SentenceRecord {
    /// Reads a field as `T`.
    pub fn get<T: FieldValue>(&self, index: usize) -> Result<T> {
        let field = self.value(index)?;

        all_consuming(T::parse_field)
            .parse(field)
            .map(|(_, value)| value)
            .map_err(|_| Error::field_parse(index, field, T::NAME))
    }

    /// Writes `value` into a field using its default rendering.
    pub fn set<T: FieldValue>(&mut self, index: usize, value: T) -> Result<()> {
        self.set_field(index, &value.format_field())
    }

    /// Returns the content of a non-empty field.
    pub fn get_string(&self, index: usize) -> Result<String> {
        self.value(index).map(str::to_owned)
    }

    /// Reads a single-character field.
    pub fn get_char(&self, index: usize) -> Result<char> {
        self.get(index)
    }

    /// Reads an integer field.
    pub fn get_int(&self, index: usize) -> Result<i32> {
        self.get(index)
    }

    /// Reads a decimal field.
    pub fn get_double(&self, index: usize) -> Result<f64> {
        self.get(index)
    }

    /// Writes a string field. An empty string clears the field.
    pub fn set_string(&mut self, index: usize, value: &str) -> Result<()> {
        self.set_field(index, value)
    }

    /// Writes a single-character field.
    pub fn set_char(&mut self, index: usize, value: char) -> Result<()> {
        self.set(index, value)
    }

    /// Writes an integer, zero-padded to at least `leading` digits.
    ///
    /// ```rust
    /// # use nmea0183_sentence::{SentenceRecord, TalkerId};
    /// let mut record = SentenceRecord::new_empty(TalkerId::GP, "GSV", 4).unwrap();
    /// record.set_int(3, 7, 2).unwrap();
    /// assert_eq!(record.field(3).unwrap(), "07");
    /// ```
    pub fn set_int(&mut self, index: usize, value: i32, leading: usize) -> Result<()> {
        self.set_field(index, &format!("{value:0leading$}"))
    }

    /// Writes a decimal with at least `leading` integer digits and exactly `decimals`
    /// fraction digits.
    ///
    /// NaN and infinite values fail with [`Error::InvalidFieldValue`].
    ///
    /// ```rust
    /// # use nmea0183_sentence::{SentenceRecord, TalkerId};
    /// let mut record = SentenceRecord::new_empty(TalkerId::GP, "VTG", 9).unwrap();
    /// record.set_double(0, 54.7, 3, 1).unwrap();
    /// assert_eq!(record.field(0).unwrap(), "054.7");
    /// record.set_double(0, -1.5, 2, 2).unwrap();
    /// assert_eq!(record.field(0).unwrap(), "-01.50");
    /// ```
    pub fn set_double(
        &mut self,
        index: usize,
        value: f64,
        leading: usize,
        decimals: usize,
    ) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::InvalidFieldValue {
                index,
                value: value.to_string(),
            });
        }

        self.set_field(index, &format_decimal(value, leading, decimals))
    }

    /// Writes a direction in degrees as `ddd.d`, checking `0 <= value <= 360`.
    pub fn set_degrees(&mut self, index: usize, value: f64) -> Result<()> {
        if !(0.0..=360.0).contains(&value) {
            return Err(Error::ValueOutOfRange {
                value,
                min: 0.0,
                max: 360.0,
            });
        }

        self.set_double(index, value, 3, 1)
    }

    /// Returns the text of a non-empty field.
    pub(crate) fn value(&self, index: usize) -> Result<&str> {
        match self.field(index)? {
            "" => Err(Error::FieldNotAvailable(index)),
            field => Ok(field),
        }
    }
}

/// Renders `value` with at least `leading` integer digits and exactly `decimals`
/// fraction digits. The sign is not counted as a digit.
pub(crate) fn format_decimal(value: f64, leading: usize, decimals: usize) -> String {
    let width = if decimals > 0 {
        leading + decimals + 1
    } else {
        leading
    };

    let magnitude = format!("{:0width$.decimals$}", value.abs());
    if value.is_sign_negative() && magnitude.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TalkerId;

    fn record(raw: &str) -> SentenceRecord {
        SentenceRecord::parse(raw).unwrap()
    }

    #[test]
    fn test_get_string() {
        let record = record("$GPGGA,abc,,0");
        assert_eq!(record.get_string(0).unwrap(), "abc");
        assert_eq!(record.get_string(1), Err(Error::FieldNotAvailable(1)));
        assert_eq!(record.get_string(2).unwrap(), "0");
        assert_eq!(
            record.get_string(3),
            Err(Error::IndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_get_char() {
        let record = record("$GPGGA,A,AB,");
        assert_eq!(record.get_char(0).unwrap(), 'A');
        assert_eq!(
            record.get_char(1),
            Err(Error::FieldParse {
                index: 1,
                value: "AB".to_owned(),
                expected: "char"
            })
        );
        assert_eq!(record.get_char(2), Err(Error::FieldNotAvailable(2)));
    }

    #[test]
    fn test_get_numbers() {
        let record = record("$GPGGA,42,-7,3.25,1e2,x1,1.5.0,08");
        assert_eq!(record.get_int(0).unwrap(), 42);
        assert_eq!(record.get_int(1).unwrap(), -7);
        assert_eq!(record.get_double(2).unwrap(), 3.25);
        assert_eq!(record.get_double(3).unwrap(), 100.0);
        assert_eq!(record.get_int(6).unwrap(), 8);
        assert_eq!(record.get_double(0).unwrap(), 42.0);

        assert!(matches!(record.get_int(2), Err(Error::FieldParse { index: 2, .. })));
        assert!(matches!(record.get_int(4), Err(Error::FieldParse { index: 4, .. })));
        assert!(matches!(record.get_double(4), Err(Error::FieldParse { index: 4, .. })));
        assert!(matches!(record.get_double(5), Err(Error::FieldParse { index: 5, .. })));
        assert!(matches!(record.get::<u8>(1), Err(Error::FieldParse { expected: "u8", .. })));
    }

    #[test]
    fn test_set_int() {
        let mut record = SentenceRecord::new_empty(TalkerId::GP, "GSV", 3).unwrap();
        record.set_int(0, 5, 0).unwrap();
        record.set_int(1, 5, 3).unwrap();
        record.set_int(2, 1234, 2).unwrap();
        assert_eq!(record.fields(), ["5", "005", "1234"]);

        record.set_int(0, -42, 5).unwrap();
        assert_eq!(record.field(0).unwrap(), "-0042");
    }

    #[test]
    fn test_set_double() {
        let mut record = SentenceRecord::new_empty(TalkerId::GP, "VTG", 1).unwrap();

        for (value, leading, decimals, expected) in [
            (0.0, 0, 0, "0"),
            (3.14159, 1, 2, "3.14"),
            (3.14159, 3, 1, "003.1"),
            (123.456, 1, 1, "123.5"),
            (7.0, 2, 0, "07"),
            (-0.04, 1, 1, "0.0"),
            (-12.346, 3, 2, "-012.35"),
        ] {
            record.set_double(0, value, leading, decimals).unwrap();
            assert_eq!(record.field(0).unwrap(), expected, "{value} {leading} {decimals}");
        }

        assert_eq!(
            record.set_double(0, f64::NAN, 1, 1),
            Err(Error::InvalidFieldValue {
                index: 0,
                value: "NaN".to_owned()
            })
        );
        assert_eq!(
            record.set_double(0, f64::INFINITY, 1, 1),
            Err(Error::InvalidFieldValue {
                index: 0,
                value: "inf".to_owned()
            })
        );
        assert!(record.set_double(1, 1.0, 1, 1).is_err());
    }

    #[test]
    fn test_set_degrees() {
        let mut record = SentenceRecord::new_empty(TalkerId::HC, "HDT", 2).unwrap();
        record.set_degrees(0, 5.26).unwrap();
        assert_eq!(record.field(0).unwrap(), "005.3");
        record.set_degrees(0, 360.0).unwrap();
        assert_eq!(record.field(0).unwrap(), "360.0");
        record.set_degrees(0, 0.0).unwrap();
        assert_eq!(record.field(0).unwrap(), "000.0");

        for value in [-0.1, 360.1] {
            assert_eq!(
                record.set_degrees(0, value),
                Err(Error::ValueOutOfRange {
                    value,
                    min: 0.0,
                    max: 360.0
                })
            );
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut record = SentenceRecord::new_empty(TalkerId::II, "XDR", 4).unwrap();
        record.set_char(0, 'C').unwrap();
        record.set(1, 21.5f64).unwrap();
        record.set_string(2, "C").unwrap();
        record.set(3, 12u8).unwrap();

        assert_eq!(record.get_char(0).unwrap(), 'C');
        assert_eq!(record.get_double(1).unwrap(), 21.5);
        assert_eq!(record.get_string(2).unwrap(), "C");
        assert_eq!(record.get::<u8>(3).unwrap(), 12);

        record.set_string(2, "").unwrap();
        assert!(!record.has_value(2));
    }
}
