//! UTC time (`hhmmss.sss`) and date (`ddmmyy`) fields.

use nom::{
    IResult, Parser,
    bytes::complete::take,
    error::{ErrorKind, make_error},
    number::complete::double,
};

use crate::{FieldValue, Result, SentenceRecord};

fn two_digits(i: &str) -> IResult<&str, u8> {
    take(2usize)
        .and_then(nom::character::complete::u8)
        .parse(i)
}

fn verify_error(i: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(make_error(i, ErrorKind::Verify))
}

impl FieldValue for time::Time {
    const NAME: &'static str = "time";

    fn parse_field(i: &str) -> IResult<&str, Self> {
        let (i, (hour, minute, second)) = (two_digits, two_digits, double).parse(i)?;

        if second.is_sign_negative() {
            return Err(verify_error(i));
        }

        let milliseconds = (second * 1000.0).round() as u32;
        let time = time::Time::from_hms_milli(
            hour,
            minute,
            (milliseconds / 1000) as u8,
            (milliseconds % 1000) as u16,
        )
        .or(Err(verify_error(i)))?;

        Ok((i, time))
    }

    fn format_field(&self) -> String {
        format!(
            "{:02}{:02}{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

impl FieldValue for time::Date {
    const NAME: &'static str = "date";

    fn parse_field(i: &str) -> IResult<&str, Self> {
        let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

        let month = month.try_into().or(Err(verify_error(i)))?;
        let year = match year {
            83..=99 => 1900 + i32::from(year),
            _ => 2000 + i32::from(year),
        };

        let date = time::Date::from_calendar_date(year, month, day).or(Err(verify_error(i)))?;

        Ok((i, date))
    }

    fn format_field(&self) -> String {
        format!(
            "{:02}{:02}{:02}",
            self.day(),
            u8::from(self.month()),
            self.year().rem_euclid(100)
        )
    }
}

impl SentenceRecord {
    /// Reads a UTC time field (`hhmmss` or `hhmmss.sss`).
    pub fn get_time(&self, index: usize) -> Result<time::Time> {
        self.get(index)
    }

    /// Writes a UTC time field as `hhmmss.sss`.
    pub fn set_time(&mut self, index: usize, value: time::Time) -> Result<()> {
        self.set(index, value)
    }

    /// Reads a `ddmmyy` date field. Two-digit years from 83 map to the 1900s.
    pub fn get_date(&self, index: usize) -> Result<time::Date> {
        self.get(index)
    }

    /// Writes a `ddmmyy` date field.
    pub fn set_date(&mut self, index: usize, value: time::Date) -> Result<()> {
        self.set(index, value)
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, Time};

    use super::*;
    use crate::{Error, TalkerId};

    #[test]
    fn test_get_time() {
        let record = SentenceRecord::parse("$GPRMC,123519,A,,,,,,,230394,,,A").unwrap();
        assert_eq!(record.get_time(0).unwrap(), Time::from_hms(12, 35, 19).unwrap());

        let record = SentenceRecord::parse("$GPGGA,092750.125,,,").unwrap();
        assert_eq!(
            record.get_time(0).unwrap(),
            Time::from_hms_milli(9, 27, 50, 125).unwrap()
        );

        for field in ["250000", "126000", "1235", "12:35:19"] {
            let record = SentenceRecord::parse(&format!("$GPGGA,{field}")).unwrap();
            assert!(
                matches!(record.get_time(0), Err(Error::FieldParse { expected: "time", .. })),
                "{field:?}"
            );
        }
    }

    #[test]
    fn test_get_date() {
        let record = SentenceRecord::parse("$GPRMC,123519,A,,,,,,,230394,,,A").unwrap();
        assert_eq!(
            record.get_date(8).unwrap(),
            Date::from_calendar_date(1994, Month::March, 23).unwrap()
        );

        let record = SentenceRecord::parse("$GPRMC,,,,,,,,,080514").unwrap();
        assert_eq!(
            record.get_date(8).unwrap(),
            Date::from_calendar_date(2014, Month::May, 8).unwrap()
        );

        let record = SentenceRecord::parse("$GPRMC,,,,,,,,,311314").unwrap();
        assert!(record.get_date(8).is_err());
    }

    #[test]
    fn test_set_time_and_date() {
        let mut record = SentenceRecord::new_empty(TalkerId::GP, "ZDA", 6).unwrap();
        record
            .set_time(0, Time::from_hms_milli(1, 2, 3, 40).unwrap())
            .unwrap();
        record
            .set_date(1, Date::from_calendar_date(1999, Month::December, 31).unwrap())
            .unwrap();

        assert_eq!(record.field(0).unwrap(), "010203.040");
        assert_eq!(record.field(1).unwrap(), "311299");
        assert_eq!(
            record.get_time(0).unwrap(),
            Time::from_hms_milli(1, 2, 3, 40).unwrap()
        );
        assert_eq!(
            record.get_date(1).unwrap(),
            Date::from_calendar_date(1999, Month::December, 31).unwrap()
        );
    }
}
