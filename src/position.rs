//! # Position Codec
//!
//! Latitude and longitude travel as `ddmm.mmm` / `dddmm.mmm` (whole degrees followed by
//! decimal minutes) with the hemisphere in a separate field (`N`/`S`, `E`/`W`).

use nom::{
    Parser,
    character::complete::{digit0, u16},
    combinator::{all_consuming, opt},
    number::complete::double,
};

use crate::{Error, Result, SentenceRecord};

/// Parses a `[d]ddmm.mmm` field into unsigned decimal degrees.
///
/// Everything up to two digits left of the decimal point is whole degrees, the rest is
/// minutes. Returns `None` if the text is not of that form or the minutes are not
/// below 60.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::position::parse_degrees;
///
/// assert_eq!(parse_degrees("4807.038"), Some(48.1173));
/// assert_eq!(parse_degrees("01131.000"), Some(11.516666666666667));
/// assert_eq!(parse_degrees("4860.000"), None);
/// ```
pub fn parse_degrees(field: &str) -> Option<f64> {
    if !field.is_ascii() {
        return None;
    }

    let point = field.find('.').unwrap_or(field.len());
    let (degrees, minutes) = field.split_at(point.checked_sub(2)?);

    let (_, degrees) = all_consuming(opt(u16::<_, nom::error::Error<_>>))
        .parse(degrees)
        .ok()?;
    let (_, _) = all_consuming(digit0::<_, nom::error::Error<_>>)
        .parse(&minutes[..2])
        .ok()?;
    let (_, minutes) = all_consuming(double::<_, nom::error::Error<_>>)
        .parse(minutes)
        .ok()?;

    if !(0.0..60.0).contains(&minutes) {
        return None;
    }

    Some(f64::from(degrees.unwrap_or(0)) + minutes / 60.0)
}

/// Formats the magnitude of a latitude as `ddmm.mmm`.
///
/// ```rust
/// use nmea0183_sentence::position::format_latitude;
///
/// assert_eq!(format_latitude(48.1173), "4807.038");
/// assert_eq!(format_latitude(-0.5), "0030.000");
/// ```
pub fn format_latitude(value: f64) -> String {
    format_degrees(value, 2)
}

/// Formats the magnitude of a longitude as `dddmm.mmm`.
///
/// ```rust
/// use nmea0183_sentence::position::format_longitude;
///
/// assert_eq!(format_longitude(11.516666), "01131.000");
/// ```
pub fn format_longitude(value: f64) -> String {
    format_degrees(value, 3)
}

fn format_degrees(value: f64, width: usize) -> String {
    // Round once, in thousandths of a minute, so 59.9999' carries into the degrees.
    let thousandths = (value.abs() * 60_000.0).round() as u64;
    let degrees = thousandths / 60_000;
    let minutes = (thousandths % 60_000) as f64 / 1000.0;

    format!("{degrees:0width$}{minutes:06.3}")
}

impl SentenceRecord {
    /// Reads a signed latitude from a `ddmm.mmm` field and its `N`/`S` field.
    pub fn get_latitude(&self, index: usize, hemisphere_index: usize) -> Result<f64> {
        self.get_coordinate(index, hemisphere_index, ('N', 'S'), 90.0)
    }

    /// Reads a signed longitude from a `dddmm.mmm` field and its `E`/`W` field.
    pub fn get_longitude(&self, index: usize, hemisphere_index: usize) -> Result<f64> {
        self.get_coordinate(index, hemisphere_index, ('E', 'W'), 180.0)
    }

    /// Writes a signed latitude as `ddmm.mmm` plus `N`/`S`.
    pub fn set_latitude(&mut self, index: usize, hemisphere_index: usize, value: f64) -> Result<()> {
        check_range(value, 90.0)?;
        self.set_field(index, &format_latitude(value))?;
        self.set_char(hemisphere_index, if value < 0.0 { 'S' } else { 'N' })
    }

    /// Writes a signed longitude as `dddmm.mmm` plus `E`/`W`.
    pub fn set_longitude(
        &mut self,
        index: usize,
        hemisphere_index: usize,
        value: f64,
    ) -> Result<()> {
        check_range(value, 180.0)?;
        self.set_field(index, &format_longitude(value))?;
        self.set_char(hemisphere_index, if value < 0.0 { 'W' } else { 'E' })
    }

    fn get_coordinate(
        &self,
        index: usize,
        hemisphere_index: usize,
        (positive, negative): (char, char),
        limit: f64,
    ) -> Result<f64> {
        let field = self.value(index)?;
        let magnitude =
            parse_degrees(field).ok_or_else(|| Error::field_parse(index, field, "degrees"))?;
        check_range(magnitude, limit)?;

        match self.get_char(hemisphere_index)? {
            c if c == positive => Ok(magnitude),
            c if c == negative => Ok(-magnitude),
            c => Err(Error::field_parse(
                hemisphere_index,
                &c.to_string(),
                "hemisphere",
            )),
        }
    }
}

fn check_range(value: f64, limit: f64) -> Result<()> {
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(Error::ValueOutOfRange {
            value,
            min: -limit,
            max: limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::TalkerId;

    const MINUTE: f64 = 1.0 / 60.0;

    #[test]
    fn test_parse_degrees() {
        assert_abs_diff_eq!(parse_degrees("4807.038").unwrap(), 48.1173, epsilon = 1e-9);
        assert_abs_diff_eq!(parse_degrees("12311.12").unwrap(), 123.18533333, epsilon = 1e-8);
        assert_abs_diff_eq!(parse_degrees("0000.000").unwrap(), 0.0);
        assert_abs_diff_eq!(parse_degrees("30.5").unwrap(), 0.50833333, epsilon = 1e-8);
        assert_abs_diff_eq!(parse_degrees("4807").unwrap(), 48.11666666, epsilon = 1e-8);

        for field in ["", "7.5", ".5", "48a7.038", "4807.0x8", "4875.000", "-4807.038"] {
            assert_eq!(parse_degrees(field), None, "{field:?}");
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format_latitude(0.0), "0000.000");
        assert_eq!(format_latitude(90.0), "9000.000");
        assert_eq!(format_longitude(-180.0), "18000.000");
        assert_eq!(format_longitude(123.18533333), "12311.120");
        assert_eq!(format_latitude(59.99999999), "6000.000");
    }

    #[test]
    fn test_degrees_round_trip() {
        let mut value = -90.0;
        while value <= 90.0 {
            let parsed = parse_degrees(&format_latitude(value)).unwrap();
            assert_abs_diff_eq!(parsed, value.abs(), epsilon = MINUTE / 1000.0);
            value += 0.0137;
        }

        let mut value = -180.0;
        while value <= 180.0 {
            let parsed = parse_degrees(&format_longitude(value)).unwrap();
            assert_abs_diff_eq!(parsed, value.abs(), epsilon = MINUTE / 1000.0);
            value += 0.0291;
        }
    }

    #[test]
    fn test_record_coordinates() {
        let mut record = SentenceRecord::new_empty(TalkerId::GP, "GLL", 4).unwrap();
        record.set_latitude(0, 1, -33.8568).unwrap();
        record.set_longitude(2, 3, 151.2153).unwrap();
        assert_eq!(record.fields(), ["3351.408", "S", "15112.918", "E"]);

        assert_abs_diff_eq!(record.get_latitude(0, 1).unwrap(), -33.8568, epsilon = 1e-5);
        assert_abs_diff_eq!(record.get_longitude(2, 3).unwrap(), 151.2153, epsilon = 1e-5);

        assert!(matches!(
            record.set_latitude(0, 1, 90.5),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            record.set_longitude(2, 3, -181.0),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_record_coordinate_errors() {
        let record = SentenceRecord::parse("$GPGLL,4916.45,X,,W,9500.00,N").unwrap();
        assert!(matches!(
            record.get_latitude(0, 1),
            Err(Error::FieldParse { index: 1, expected: "hemisphere", .. })
        ));
        assert_eq!(record.get_longitude(2, 3), Err(Error::FieldNotAvailable(2)));
        assert!(matches!(
            record.get_latitude(4, 5),
            Err(Error::ValueOutOfRange { .. })
        ));
    }
}
