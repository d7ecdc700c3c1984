use std::{fmt, str::FromStr};

use crate::Error;

macro_rules! talker_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Any other two-character talker, e.g. a vendor specific one
            Other(TalkerCode),
        }

        impl $name {
            /// All talker ids known by name.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),*];

            fn from_known(code: &str) -> Option<Self> {
                match code {
                    $(stringify!($variant) => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn known_code(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(stringify!($variant)),)*
                    Self::Other(..) => None,
                }
            }
        }
    };
}

talker_ids! {
    /// Talker identifier: the transmitting device class of a sentence.
    ///
    /// The enumeration is open; codes without a name are kept as [`TalkerId::Other`].
    /// Proprietary sentences use the single letter [`TalkerId::P`]. Every value
    /// displays as a code that parses back to the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_sentence::{TalkerCode, TalkerId};
    ///
    /// assert_eq!("GP".parse::<TalkerId>().unwrap(), TalkerId::GP);
    /// let zz = TalkerId::Other(TalkerCode::new('Z', 'Z').unwrap());
    /// assert_eq!("ZZ".parse::<TalkerId>().unwrap(), zz);
    /// assert_eq!(zz.to_string(), "ZZ");
    /// ```
    pub enum TalkerId {
        /// Independent AIS base station
        AB,
        /// Dependent AIS base station
        AD,
        /// Heading/track controller (autopilot), general
        AG,
        /// Mobile AIS station
        AI,
        /// AIS aids to navigation station
        AN,
        /// AIS receiving station
        AR,
        /// AIS station (limited base station)
        AS,
        /// AIS transmitting station
        AT,
        /// AIS simplex repeater
        AX,
        /// BeiDou (China)
        BD,
        /// Digital selective calling (DSC)
        CD,
        /// Electronic chart display and information system (ECDIS)
        EC,
        /// Galileo positioning system
        GA,
        /// BeiDou (NMEA 4.11)
        GB,
        /// NavIC (India)
        GI,
        /// GLONASS
        GL,
        /// Combination of several satellite systems
        GN,
        /// Global positioning system (GPS)
        GP,
        /// QZSS (Japan)
        GQ,
        /// Heading, magnetic compass
        HC,
        /// Heading, north seeking gyro
        HE,
        /// Heading, non north seeking gyro
        HN,
        /// Integrated instrumentation
        II,
        /// Integrated navigation
        IN,
        /// Radar and/or ARPA
        RA,
        /// Depth sounder
        SD,
        /// Velocity sensor, doppler
        VD,
        /// Velocity sensor, speed log, water, mechanical
        VW,
        /// Weather instruments
        WI,
        /// Transducer
        YX,
        /// Proprietary sentence, identified by a single `P`
        P,
    }
}

impl TalkerId {
    /// Returns `true` for the proprietary talker `P`.
    pub fn is_proprietary(&self) -> bool {
        *self == TalkerId::P
    }
}

impl FromStr for TalkerId {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if let Some(talker) = Self::from_known(code) {
            return Ok(talker);
        }

        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => TalkerCode::new(first, second).map(TalkerId::Other),
            _ => Err(Error::InvalidTalkerId(code.to_owned())),
        }
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkerId::Other(code) => fmt::Display::fmt(code, f),
            known => f.write_str(known.known_code().unwrap_or_default()),
        }
    }
}

impl TryFrom<String> for TalkerId {
    type Error = Error;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<TalkerId> for String {
    fn from(talker_id: TalkerId) -> Self {
        talker_id.to_string()
    }
}

/// A two-character talker code without a named [`TalkerId`] variant.
///
/// Only codes that survive a trip through sentence text can be built: two upper-case
/// letters or digits, not starting with `P` (which marks a proprietary sentence) and
/// not spelling a named talker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkerCode(char, char);

impl TalkerCode {
    /// Creates a code from its two characters.
    ///
    /// Fails with [`Error::InvalidTalkerId`] for anything [`TalkerId`] would not parse
    /// back into this code.
    ///
    /// ```rust
    /// use nmea0183_sentence::TalkerCode;
    ///
    /// assert!(TalkerCode::new('Z', '9').is_ok());
    /// assert!(TalkerCode::new('g', 'p').is_err());
    /// assert!(TalkerCode::new('P', 'X').is_err());
    /// assert!(TalkerCode::new('G', 'P').is_err());
    /// ```
    pub fn new(first: char, second: char) -> Result<Self, Error> {
        let code = Self(first, second);

        let valid = is_talker_char(first)
            && is_talker_char(second)
            && first != 'P'
            && TalkerId::from_known(&code.to_string()).is_none();
        if valid {
            Ok(code)
        } else {
            Err(Error::InvalidTalkerId(code.to_string()))
        }
    }

    /// Returns the two characters of the code.
    pub fn chars(&self) -> (char, char) {
        (self.0, self.1)
    }
}

impl fmt::Display for TalkerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

fn is_talker_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_talkers_round_trip() {
        for talker in TalkerId::KNOWN {
            let code = talker.to_string();
            assert_eq!(code.parse::<TalkerId>().unwrap(), *talker, "{code}");
        }
    }

    #[test]
    fn test_proprietary() {
        assert!("P".parse::<TalkerId>().unwrap().is_proprietary());
        assert!(!TalkerId::GP.is_proprietary());
        assert_eq!(TalkerId::P.to_string(), "P");
    }

    #[test]
    fn test_invalid_talkers() {
        for code in ["", "G", "gp", "GPS", "G-", "Q", "PX", "P1"] {
            assert_eq!(
                code.parse::<TalkerId>(),
                Err(Error::InvalidTalkerId(code.to_owned())),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_other_codes() {
        let code = TalkerCode::new('Z', '9').unwrap();
        assert_eq!(code.chars(), ('Z', '9'));
        assert_eq!("Z9".parse::<TalkerId>().unwrap(), TalkerId::Other(code));

        assert_eq!(
            TalkerCode::new('g', 'p'),
            Err(Error::InvalidTalkerId("gp".to_owned()))
        );
        assert_eq!(
            TalkerCode::new('P', 'X'),
            Err(Error::InvalidTalkerId("PX".to_owned()))
        );
        assert_eq!(
            TalkerCode::new('G', 'P'),
            Err(Error::InvalidTalkerId("GP".to_owned()))
        );
    }
}
