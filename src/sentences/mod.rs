//! # Built-in Sentence Kinds
//!
//! Thin typed views over [`SentenceRecord`](crate::SentenceRecord) for the standard
//! sentence kinds. Each kind fixes its sentence id, field count and indicator fields;
//! some add named accessors for the fields they are most often read for. Everything
//! else is reachable through [`Sentence::record`](crate::Sentence::record).
//!
//! | Kind | Sentence |
//! |------|----------|
//! | [`AAM`] | Waypoint Arrival Alarm |
//! | [`ALM`] | GPS Almanac Data |
//! | [`APB`] | Autopilot Sentence "B" |
//! | [`BOD`] | Bearing - Waypoint to Waypoint |
//! | [`BWC`] | Bearing & Distance to Waypoint - Great Circle |
//! | [`BWR`] | Bearing and Distance to Waypoint - Rhumb Line |
//! | [`DBT`] | Depth below transducer |
//! | [`DPT`] | Depth of Water |
//! | [`DTM`] | Datum Reference |
//! | [`GBS`] | GPS Satellite Fault Detection |
//! | [`GGA`] | Global Positioning System Fix Data |
//! | [`GLL`] | Geographic Position - Latitude/Longitude |
//! | [`GNS`] | Fix data |
//! | [`GSA`] | GPS DOP and active satellites |
//! | [`GST`] | GPS Pseudorange Noise Statistics |
//! | [`GSV`] | Satellites in view |
//! | [`HDG`] | Heading - Deviation & Variation |
//! | [`HDM`] | Heading - Magnetic |
//! | [`HDT`] | Heading - True |
//! | [`MDA`] | Meteorological Composite |
//! | [`MHU`] | Humidity |
//! | [`MMB`] | Barometer |
//! | [`MTA`] | Air Temperature |
//! | [`MTW`] | Mean Temperature of Water |
//! | [`MWD`] | Wind Direction & Speed |
//! | [`MWV`] | Wind Speed and Angle |
//! | [`OSD`] | Own Ship Data |
//! | [`RMB`] | Recommended Minimum Navigation Information |
//! | [`RMC`] | Recommended Minimum Navigation Information |
//! | [`ROT`] | Rate Of Turn |
//! | [`RPM`] | Revolutions |
//! | [`RSA`] | Rudder Sensor Angle |
//! | [`RSD`] | RADAR System Data |
//! | [`RTE`] | Routes |
//! | [`TLL`] | Target Latitude and Longitude |
//! | [`TTM`] | Tracked Target Message |
//! | [`TXT`] | Text Transmission |
//! | [`VBW`] | Dual Ground/Water Speed |
//! | [`VDM`] | AIS VHF Data-link Message |
//! | [`VDO`] | AIS VHF Data-link Own-vessel Report |
//! | [`VDR`] | Set and Drift |
//! | [`VHW`] | Water speed and heading |
//! | [`VLW`] | Distance Traveled through Water |
//! | [`VTG`] | Track made good and Ground speed |
//! | [`VWR`] | Relative Wind Speed and Angle |
//! | [`VWT`] | True Wind Speed and Angle |
//! | [`WPL`] | Waypoint Location |
//! | [`XDR`] | Transducer Measurement |
//! | [`XTE`] | Cross-Track Error, Measured |
//! | [`ZDA`] | Time & Date - UTC, day, month, year and local time zone |

mod ais;
mod environment;
mod gps;
mod navigation;

pub use ais::{VDM, VDO};
pub use environment::{DBT, DPT, MDA, MHU, MMB, MTA, MTW, MWD, MWV, VWR, VWT, XDR};
pub use gps::{ALM, DTM, GBS, GGA, GLL, GNS, GSA, GST, GSV, RMC, TXT, ZDA};
pub use navigation::{
    AAM, APB, BOD, BWC, BWR, HDG, HDM, HDT, OSD, RMB, ROT, RPM, RSA, RSD, RTE, TLL, TTM, VBW,
    VDR, VHW, VLW, VTG, WPL, XTE,
};

use crate::{SentenceConstructor, SentenceKind};

macro_rules! builtin_table {
    ($($kind:ident),* $(,)?) => {
        vec![$((<$kind as SentenceKind>::SENTENCE_ID, SentenceConstructor::of::<$kind>())),*]
    };
}

/// The sentence kinds a new [`SentenceFactory`](crate::SentenceFactory) knows.
pub(crate) fn builtin() -> Vec<(&'static str, SentenceConstructor)> {
    builtin_table![
        AAM, ALM, APB, BOD, BWC, BWR, DBT, DPT, DTM, GBS, GGA, GLL, GNS, GSA, GST, GSV, HDG, HDM,
        HDT, MDA, MHU, MMB, MTA, MTW, MWD, MWV, OSD, RMB, RMC, ROT, RPM, RSA, RSD, RTE, TLL, TTM,
        TXT, VBW, VDM, VDO, VDR, VHW, VLW, VTG, VWR, VWT, WPL, XDR, XTE, ZDA,
    ]
}
