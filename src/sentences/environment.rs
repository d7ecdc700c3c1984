#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, Sentence, SentenceRecord};

/// DBT - Depth below transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         0   1 2   3 4   5
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "DBT", fields = 6)]
#[sentence(
    preset(index = 1, value = "f"),
    preset(index = 3, value = "M"),
    preset(index = 5, value = "F")
)]
pub struct DBT(SentenceRecord);

impl DBT {
    /// Water depth in meters
    pub fn depth(&self) -> Result<f64> {
        self.0.get_double(2)
    }

    /// Writes the depth in meters, feet and fathoms.
    pub fn set_depth(&mut self, meters: f64) -> Result<()> {
        self.0.set_double(0, meters * 3.28084, 1, 1)?;
        self.0.set_double(2, meters, 1, 1)?;
        self.0.set_double(4, meters * 0.546807, 1, 1)
    }
}

/// DPT - Depth of Water
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "DPT", fields = 3)]
pub struct DPT(SentenceRecord);

impl DPT {
    /// Water depth relative to the transducer in meters
    pub fn depth(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Transducer offset in meters, positive for distance to the waterline
    pub fn offset(&self) -> Result<f64> {
        self.0.get_double(1)
    }
}

/// MDA - Meteorological Composite
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MDA", fields = 20)]
pub struct MDA(SentenceRecord);

/// MHU - Humidity
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MHU", fields = 4)]
pub struct MHU(SentenceRecord);

/// MMB - Barometer
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MMB", fields = 4)]
#[sentence(preset(index = 1, value = "I"), preset(index = 3, value = "B"))]
pub struct MMB(SentenceRecord);

/// MTA - Air Temperature
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MTA", fields = 2, preset(index = 1, value = "C"))]
pub struct MTA(SentenceRecord);

impl MTA {
    /// Air temperature in degrees Celsius
    pub fn temperature(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Writes the air temperature in degrees Celsius.
    pub fn set_temperature(&mut self, celsius: f64) -> Result<()> {
        self.0.set_double(0, celsius, 1, 1)
    }
}

/// MTW - Mean Temperature of Water
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MTW", fields = 2, preset(index = 1, value = "C"))]
pub struct MTW(SentenceRecord);

impl MTW {
    /// Water temperature in degrees Celsius
    pub fn temperature(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// Writes the water temperature in degrees Celsius.
    pub fn set_temperature(&mut self, celsius: f64) -> Result<()> {
        self.0.set_double(0, celsius, 1, 1)
    }
}

/// MWD - Wind Direction & Speed
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MWD", fields = 8)]
#[sentence(
    preset(index = 1, value = "T"),
    preset(index = 3, value = "M"),
    preset(index = 5, value = "N"),
    preset(index = 7, value = "M")
)]
pub struct MWD(SentenceRecord);

/// MWV - Wind Speed and Angle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "MWV", fields = 5)]
pub struct MWV(SentenceRecord);

impl MWV {
    /// Wind angle in degrees, 0 to 359
    pub fn angle(&self) -> Result<f64> {
        self.0.get_double(0)
    }

    /// `true` for true wind, `false` for relative wind
    pub fn is_true(&self) -> Result<bool> {
        self.0.get_char(1).map(|reference| reference == 'T')
    }

    /// Wind speed in the unit given by [`MWV::speed_unit`]
    pub fn speed(&self) -> Result<f64> {
        self.0.get_double(2)
    }

    /// Wind speed unit: `K`, `M` or `N`
    pub fn speed_unit(&self) -> Result<char> {
        self.0.get_char(3)
    }
}

/// VWR - Relative Wind Speed and Angle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VWR", fields = 8)]
#[sentence(
    preset(index = 3, value = "N"),
    preset(index = 5, value = "M"),
    preset(index = 7, value = "K")
)]
pub struct VWR(SentenceRecord);

/// VWT - True Wind Speed and Angle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VWT", fields = 8)]
#[sentence(
    preset(index = 3, value = "N"),
    preset(index = 5, value = "M"),
    preset(index = 7, value = "K")
)]
pub struct VWT(SentenceRecord);

/// XDR - Transducer Measurement
///
/// Measurements come in groups of four fields (type, value, unit, name); a sentence
/// carries one or more groups.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "XDR", fields = 4)]
pub struct XDR(SentenceRecord);

impl XDR {
    /// Number of complete measurement groups
    pub fn measurement_count(&self) -> usize {
        self.0.field_count() / 4
    }
}
