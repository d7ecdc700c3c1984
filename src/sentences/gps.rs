#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, Sentence, SentenceRecord};

/// ALM - GPS Almanac Data
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "ALM", fields = 15)]
pub struct ALM(SentenceRecord);

/// DTM - Datum Reference
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "DTM", fields = 8)]
pub struct DTM(SentenceRecord);

/// GBS - GPS Satellite Fault Detection
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GBS", fields = 8)]
pub struct GBS(SentenceRecord);

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///         0         1       2 3        4 5 6  7   8   9 10  11 12  13
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GGA", fields = 14)]
pub struct GGA(SentenceRecord);

impl GGA {
    /// Fix time in UTC
    #[cfg(feature = "time")]
    pub fn fix_time(&self) -> Result<time::Time> {
        self.0.get_time(0)
    }

    /// Latitude in signed decimal degrees, south negative
    pub fn latitude(&self) -> Result<f64> {
        self.0.get_latitude(1, 2)
    }

    /// Longitude in signed decimal degrees, west negative
    pub fn longitude(&self) -> Result<f64> {
        self.0.get_longitude(3, 4)
    }

    /// Writes latitude and longitude with their hemisphere indicators.
    pub fn set_position(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        self.0.set_latitude(1, 2, latitude)?;
        self.0.set_longitude(3, 4, longitude)
    }

    /// GPS quality indicator, 0 when the fix is not valid
    pub fn fix_quality(&self) -> Result<u8> {
        self.0.get(5)
    }

    /// Number of satellites in use
    pub fn satellite_count(&self) -> Result<u8> {
        self.0.get(6)
    }

    /// Horizontal dilution of precision
    pub fn hdop(&self) -> Result<f64> {
        self.0.get_double(7)
    }

    /// Altitude above mean sea level in meters
    pub fn altitude(&self) -> Result<f64> {
        self.0.get_double(8)
    }

    /// Writes the altitude in meters, with its unit indicator.
    pub fn set_altitude(&mut self, meters: f64) -> Result<()> {
        self.0.set_double(8, meters, 1, 1)?;
        self.0.set_char(9, 'M')
    }
}

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         0       1 2        3 4         5 6
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GLL", fields = 7)]
pub struct GLL(SentenceRecord);

impl GLL {
    /// Latitude in signed decimal degrees, south negative
    pub fn latitude(&self) -> Result<f64> {
        self.0.get_latitude(0, 1)
    }

    /// Longitude in signed decimal degrees, west negative
    pub fn longitude(&self) -> Result<f64> {
        self.0.get_longitude(2, 3)
    }

    /// Writes latitude and longitude with their hemisphere indicators.
    pub fn set_position(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        self.0.set_latitude(0, 1, latitude)?;
        self.0.set_longitude(2, 3, longitude)
    }

    /// UTC time of the position
    #[cfg(feature = "time")]
    pub fn fix_time(&self) -> Result<time::Time> {
        self.0.get_time(4)
    }

    /// `true` if the status field is `A` (data valid)
    pub fn is_valid(&self) -> Result<bool> {
        self.0.get_char(5).map(|status| status == 'A')
    }
}

/// GNS - Fix data
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GNS", fields = 12)]
pub struct GNS(SentenceRecord);

/// GSA - GPS DOP and active satellites
///
/// Twelve satellite id slots (fields 2 to 13) followed by PDOP, HDOP and VDOP.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GSA", fields = 17)]
pub struct GSA(SentenceRecord);

impl GSA {
    /// Ids of the satellites used in the solution, skipping empty slots
    pub fn satellite_ids(&self) -> Result<Vec<u8>> {
        (2..14)
            .filter(|&index| self.0.has_value(index))
            .map(|index| self.0.get(index))
            .collect()
    }

    /// Position dilution of precision
    pub fn pdop(&self) -> Result<f64> {
        self.0.get_double(14)
    }

    /// Horizontal dilution of precision
    pub fn hdop(&self) -> Result<f64> {
        self.0.get_double(15)
    }

    /// Vertical dilution of precision
    pub fn vdop(&self) -> Result<f64> {
        self.0.get_double(16)
    }
}

/// GST - GPS Pseudorange Noise Statistics
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GST", fields = 8)]
pub struct GST(SentenceRecord);

/// GSV - Satellites in view
///
/// Up to four satellites per sentence, four fields each (id, elevation, azimuth, SNR)
/// starting at field 3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "GSV", fields = 19)]
pub struct GSV(SentenceRecord);

impl GSV {
    /// Number of GSV sentences in this cycle
    pub fn sentence_count(&self) -> Result<u8> {
        self.0.get(0)
    }

    /// Index of this sentence in the cycle, starting at 1
    pub fn sentence_index(&self) -> Result<u8> {
        self.0.get(1)
    }

    /// Total number of satellites in view
    pub fn satellite_count(&self) -> Result<u8> {
        self.0.get(2)
    }
}

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         0         1 2       3 4        5 6   7   8      9   10 11
///         |         | |       | |        | |   |   |      |   | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RMC", fields = 12)]
pub struct RMC(SentenceRecord);

impl RMC {
    /// UTC time of the position fix
    #[cfg(feature = "time")]
    pub fn fix_time(&self) -> Result<time::Time> {
        self.0.get_time(0)
    }

    /// UTC date of the position fix
    #[cfg(feature = "time")]
    pub fn fix_date(&self) -> Result<time::Date> {
        self.0.get_date(8)
    }

    /// `true` if the status field is `A` (data valid)
    pub fn is_valid(&self) -> Result<bool> {
        self.0.get_char(1).map(|status| status == 'A')
    }

    /// Latitude in signed decimal degrees, south negative
    pub fn latitude(&self) -> Result<f64> {
        self.0.get_latitude(2, 3)
    }

    /// Longitude in signed decimal degrees, west negative
    pub fn longitude(&self) -> Result<f64> {
        self.0.get_longitude(4, 5)
    }

    /// Speed over ground in knots
    pub fn speed(&self) -> Result<f64> {
        self.0.get_double(6)
    }

    /// Course over ground in degrees true
    pub fn course(&self) -> Result<f64> {
        self.0.get_double(7)
    }

    /// Writes the course over ground as `ddd.d`.
    pub fn set_course(&mut self, degrees: f64) -> Result<()> {
        self.0.set_degrees(7, degrees)
    }

    /// Magnetic variation in degrees, westerly variation negative
    pub fn variation(&self) -> Result<f64> {
        let variation = self.0.get_double(9)?;
        match self.0.get_char(10)? {
            'W' => Ok(-variation),
            _ => Ok(variation),
        }
    }
}

/// TXT - Text Transmission
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "TXT", fields = 4)]
pub struct TXT(SentenceRecord);

impl TXT {
    /// Text of the message
    pub fn message(&self) -> Result<String> {
        self.0.get_string(3)
    }
}

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         0         1  2  3    4  5
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "ZDA", fields = 6)]
pub struct ZDA(SentenceRecord);

#[cfg(feature = "time")]
impl ZDA {
    /// UTC time of day
    pub fn time(&self) -> Result<time::Time> {
        self.0.get_time(0)
    }

    /// Calendar date from the day, month and four-digit year fields
    pub fn date(&self) -> Result<time::Date> {
        let day = self.0.get::<u8>(1)?;
        let month = self.0.get::<u8>(2)?;
        let year = self.0.get::<i32>(3)?;

        time::Month::try_from(month)
            .and_then(|month| time::Date::from_calendar_date(year, month, day))
            .map_err(|_| crate::Error::InvalidFieldValue {
                index: 1,
                value: format!("{day:02},{month:02},{year:04}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Error, SentenceKind, TalkerId};

    const GGA_TEXT: &str =
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
    const RMC_TEXT: &str =
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

    #[test]
    fn test_gga() {
        let gga = GGA::parse(GGA_TEXT).unwrap();
        assert_abs_diff_eq!(gga.latitude().unwrap(), 48.1173, epsilon = 1e-9);
        assert_abs_diff_eq!(gga.longitude().unwrap(), 11.516666, epsilon = 1e-6);
        assert_eq!(gga.fix_quality().unwrap(), 1);
        assert_eq!(gga.satellite_count().unwrap(), 8);
        assert_eq!(gga.altitude().unwrap(), 545.4);
        assert_eq!(gga.as_record().field(12), Ok(""));
    }

    #[test]
    fn test_gga_build() {
        let mut gga = GGA::for_talker(TalkerId::GN);
        gga.set_position(-33.8568, 151.2153).unwrap();
        gga.set_altitude(12.34).unwrap();

        let text = gga.to_text();
        assert!(text.starts_with("$GNGGA,,3351.408,S,15112.918,E,,,,12.3,M,"));
        assert_eq!(GGA::parse(&text).unwrap(), gga);
    }

    #[test]
    fn test_rmc() {
        let rmc = RMC::parse(RMC_TEXT).unwrap();
        assert!(rmc.is_valid().unwrap());
        assert_eq!(rmc.speed().unwrap(), 22.4);
        assert_eq!(rmc.course().unwrap(), 84.4);
        assert_eq!(rmc.variation().unwrap(), -3.1);

        let mut rmc = rmc;
        assert!(matches!(
            rmc.set_course(361.0),
            Err(Error::ValueOutOfRange { .. })
        ));
        rmc.set_course(5.0).unwrap();
        assert_eq!(rmc.as_record().field(7), Ok("005.0"));
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_times() {
        let rmc = RMC::parse(RMC_TEXT).unwrap();
        assert_eq!(
            rmc.fix_time().unwrap(),
            time::Time::from_hms(12, 35, 19).unwrap()
        );
        assert_eq!(
            rmc.fix_date().unwrap(),
            time::Date::from_calendar_date(1994, time::Month::March, 23).unwrap()
        );

        let zda = ZDA::parse("$GPZDA,201530.00,04,07,2002,00,00").unwrap();
        assert_eq!(
            zda.date().unwrap(),
            time::Date::from_calendar_date(2002, time::Month::July, 4).unwrap()
        );
    }

    #[test]
    fn test_gsa_satellites() {
        let gsa = GSA::parse("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1").unwrap();
        assert_eq!(gsa.satellite_ids().unwrap(), [4, 5, 9, 12, 24]);
        assert_eq!(gsa.hdop().unwrap(), 1.3);
    }
}
