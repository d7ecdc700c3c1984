#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, Sentence, SentenceRecord};

/// AAM - Waypoint Arrival Alarm
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "AAM", fields = 5, preset(index = 3, value = "N"))]
pub struct AAM(SentenceRecord);

/// APB - Autopilot Sentence "B"
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "APB", fields = 14)]
pub struct APB(SentenceRecord);

/// BOD - Bearing - Waypoint to Waypoint
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "BOD", fields = 6)]
#[sentence(preset(index = 1, value = "T"), preset(index = 3, value = "M"))]
pub struct BOD(SentenceRecord);

/// BWC - Bearing & Distance to Waypoint - Great Circle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "BWC", fields = 12)]
#[sentence(
    preset(index = 6, value = "T"),
    preset(index = 8, value = "M"),
    preset(index = 10, value = "N")
)]
pub struct BWC(SentenceRecord);

/// BWR - Bearing and Distance to Waypoint - Rhumb Line
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "BWR", fields = 12)]
#[sentence(
    preset(index = 6, value = "T"),
    preset(index = 8, value = "M"),
    preset(index = 10, value = "N")
)]
pub struct BWR(SentenceRecord);

/// HDG - Heading - Deviation & Variation
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "HDG", fields = 5)]
pub struct HDG(SentenceRecord);

impl HDG {
    /// Magnetic sensor heading in degrees
    pub fn heading(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Magnetic variation in degrees, easterly positive
    pub fn variation(&self) -> Result<f64> {
        let variation = self.0.get_double(3)?;
        match self.0.get_char(4)? {
            'W' => Ok(-variation),
            _ => Ok(variation),
        }
    }
}

/// HDM - Heading - Magnetic
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "HDM", fields = 2, preset(index = 1, value = "M"))]
pub struct HDM(SentenceRecord);

impl HDM {
    /// Magnetic heading in degrees
    pub fn heading(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Writes the magnetic heading as `ddd.d`.
    pub fn set_heading(&mut self, degrees: f64) -> Result<()> {
        self.0.set_degrees(0, degrees)
    }
}

/// HDT - Heading - True
///
/// ```text
///         0   1
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "HDT", fields = 2, preset(index = 1, value = "T"))]
pub struct HDT(SentenceRecord);

impl HDT {
    /// True heading in degrees
    pub fn heading(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Writes the true heading as `ddd.d`.
    pub fn set_heading(&mut self, degrees: f64) -> Result<()> {
        self.0.set_degrees(0, degrees)
    }
}

/// OSD - Own Ship Data
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "OSD", fields = 9)]
pub struct OSD(SentenceRecord);

/// RMB - Recommended Minimum Navigation Information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RMB", fields = 13)]
pub struct RMB(SentenceRecord);

/// ROT - Rate Of Turn
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "ROT", fields = 2)]
pub struct ROT(SentenceRecord);

/// RPM - Revolutions
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RPM", fields = 5)]
pub struct RPM(SentenceRecord);

/// RSA - Rudder Sensor Angle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RSA", fields = 4)]
pub struct RSA(SentenceRecord);

/// RSD - RADAR System Data
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RSD", fields = 13)]
pub struct RSD(SentenceRecord);

/// RTE - Routes
///
/// The waypoint ids form a variable-length tail starting at field 4.
///
/// ```text
///         0 1 2 3 4    5         n
///         | | | | |    |         |
///  $--RTE,x,x,a,c--c,c--c, ..... c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "RTE", fields = 4)]
pub struct RTE(SentenceRecord);

impl RTE {
    const FIRST_WAYPOINT: usize = 4;

    /// Route identifier
    pub fn route_id(&self) -> Result<String> {
        self.0.get_string(3)
    }

    /// Waypoint ids in route order
    pub fn waypoint_ids(&self) -> Vec<&str> {
        self.0
            .fields_from(Self::FIRST_WAYPOINT)
            .map(|fields| {
                fields
                    .iter()
                    .map(String::as_str)
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replaces the waypoint list, resizing the sentence to fit.
    pub fn set_waypoint_ids<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        if self.0.field_count() < Self::FIRST_WAYPOINT {
            self.0.resize(Self::FIRST_WAYPOINT);
        }
        self.0.set_values(Self::FIRST_WAYPOINT, ids)
    }
}

/// TLL - Target Latitude and Longitude
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "TLL", fields = 9)]
pub struct TLL(SentenceRecord);

/// TTM - Tracked Target Message
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "TTM", fields = 15)]
pub struct TTM(SentenceRecord);

/// VBW - Dual Ground/Water Speed
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VBW", fields = 10)]
pub struct VBW(SentenceRecord);

/// VDR - Set and Drift
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VDR", fields = 6)]
#[sentence(
    preset(index = 1, value = "T"),
    preset(index = 3, value = "M"),
    preset(index = 5, value = "N")
)]
pub struct VDR(SentenceRecord);

/// VHW - Water speed and heading
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VHW", fields = 8)]
#[sentence(
    preset(index = 1, value = "T"),
    preset(index = 3, value = "M"),
    preset(index = 5, value = "N"),
    preset(index = 7, value = "K")
)]
pub struct VHW(SentenceRecord);

/// VLW - Distance Traveled through Water
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VLW", fields = 4)]
#[sentence(preset(index = 1, value = "N"), preset(index = 3, value = "N"))]
pub struct VLW(SentenceRecord);

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         0   1 2   3 4   5 6   7 8
///         |   | |   | |   | |   | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VTG", fields = 9)]
#[sentence(
    preset(index = 1, value = "T"),
    preset(index = 3, value = "M"),
    preset(index = 5, value = "N"),
    preset(index = 7, value = "K")
)]
pub struct VTG(SentenceRecord);

impl VTG {
    /// Course over ground in degrees true
    pub fn true_course(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Writes the true course as `ddd.d`.
    pub fn set_true_course(&mut self, degrees: f64) -> Result<()> {
        self.0.set_degrees(0, degrees)
    }

    /// Course over ground in degrees magnetic
    pub fn magnetic_course(&self) -> Result<f64> {
        self.0.get_double(2)
    }

    /// Speed over ground in knots
    pub fn speed_knots(&self) -> Result<f64> {
        self.0.get_double(4)
    }

    /// Writes the speed in knots and, converted, in km/h.
    pub fn set_speed_knots(&mut self, knots: f64) -> Result<()> {
        self.0.set_double(4, knots, 1, 1)?;
        self.0.set_double(6, knots * 1.852, 1, 1)
    }

    /// Speed over ground in km/h
    pub fn speed_kmh(&self) -> Result<f64> {
        self.0.get_double(6)
    }
}

/// WPL - Waypoint Location
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "WPL", fields = 5)]
pub struct WPL(SentenceRecord);

impl WPL {
    /// Waypoint latitude in signed decimal degrees, south negative
    pub fn latitude(&self) -> Result<f64> {
        self.0.get_latitude(0, 1)
    }

    /// Waypoint longitude in signed decimal degrees, west negative
    pub fn longitude(&self) -> Result<f64> {
        self.0.get_longitude(2, 3)
    }

    /// Waypoint identifier
    pub fn waypoint_id(&self) -> Result<String> {
        self.0.get_string(4)
    }
}

/// XTE - Cross-Track Error, Measured
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "XTE", fields = 6, preset(index = 4, value = "N"))]
pub struct XTE(SentenceRecord);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SentenceKind, TalkerId};

    #[test]
    fn test_vtg_presets_and_speed() {
        let mut vtg = VTG::for_talker(TalkerId::GP);
        vtg.set_true_course(54.7).unwrap();
        vtg.set_speed_knots(5.5).unwrap();

        assert_eq!(
            vtg.as_record().fields(),
            ["054.7", "T", "", "M", "5.5", "N", "10.2", "K", ""]
        );
        assert_eq!(vtg.speed_kmh().unwrap(), 10.2);
        assert_eq!(vtg.magnetic_course(), Err(Error::FieldNotAvailable(2)));
    }

    #[test]
    fn test_heading() {
        let mut hdt = HDT::for_talker(TalkerId::HE);
        hdt.set_heading(274.07).unwrap();
        assert_eq!(hdt.to_text(), SentenceRecord::parse("$HEHDT,274.1,T").unwrap().to_text());

        let hdg = HDG::parse("$HCHDG,98.3,0.0,E,12.6,W").unwrap();
        assert_eq!(hdg.heading().unwrap(), 98.3);
        assert_eq!(hdg.variation().unwrap(), -12.6);
    }

    #[test]
    fn test_route_waypoints() {
        let mut rte = RTE::parse("$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND").unwrap();
        assert_eq!(rte.route_id().unwrap(), "0");
        assert_eq!(rte.waypoint_ids(), ["PBRCPK", "PBRTO", "PTELGR", "PPLAND"]);

        rte.set_waypoint_ids(&["A", "B"]).unwrap();
        assert_eq!(rte.as_record().field_count(), 6);
        assert_eq!(rte.waypoint_ids(), ["A", "B"]);

        let empty: [&str; 0] = [];
        rte.set_waypoint_ids(&empty).unwrap();
        assert!(rte.waypoint_ids().is_empty());
        assert_eq!(rte.as_record().field_count(), 4);
    }
}
