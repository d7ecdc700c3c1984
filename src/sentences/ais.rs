#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Fragment, FragmentHeader, Result, Sentence, SentenceRecord};

/// VDM - AIS VHF Data-link Message
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html>
///
/// ```text
///         0 1 2 3 4    5
///         | | | | |    |
///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
/// ```
///
/// 0. fragment count
/// 1. fragment index
/// 2. sequential message id
/// 3. radio channel
/// 4. payload (6-bit armored)
/// 5. fill bits
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VDM", fields = 6, begin = '!')]
pub struct VDM(SentenceRecord);

/// VDO - AIS VHF Data-link Own-vessel Report
///
/// Same layout as [`VDM`], reporting the receiving vessel itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[sentence(id = "VDO", fields = 6, begin = '!')]
pub struct VDO(SentenceRecord);

macro_rules! impl_fragment {
    ($($kind:ident),*) => ($(
        impl Fragment for $kind {
            fn header(&self) -> Result<FragmentHeader> {
                FragmentHeader::from_record(&self.0)
            }

            fn payload(&self) -> Result<&str> {
                self.0.field(4)
            }

            fn fill_bits(&self) -> Result<u8> {
                self.0.get(5)
            }
        }

        impl $kind {
            /// Writes the fragment header, payload chunk and fill bits.
            pub fn set_fragment(
                &mut self,
                header: &FragmentHeader,
                payload: &str,
                fill_bits: u8,
            ) -> Result<()> {
                self.0.set(0, header.count)?;
                self.0.set(1, header.index)?;
                self.0.set_string(2, header.message_id.as_deref().unwrap_or_default())?;
                self.0.set_string(3, header.channel.as_deref().unwrap_or_default())?;
                self.0.set_string(4, payload)?;
                self.0.set(5, fill_bits)
            }
        }
    )*)
}

impl_fragment!(VDM, VDO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SentenceKind, TalkerId, reassemble};

    const FIRST: &str =
        "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
    const SECOND: &str = "!AIVDM,2,2,3,B,1@0000000000000,2*55";

    #[test]
    fn test_reassemble_two_fragments() {
        let fragments = [VDM::parse(FIRST).unwrap(), VDM::parse(SECOND).unwrap()];

        let (payload, fill_bits) = reassemble(&fragments).unwrap();
        assert_eq!(
            payload,
            "55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E531@0000000000000"
        );
        assert_eq!(fill_bits, 2);
    }

    #[test]
    fn test_reassemble_incomplete() {
        let second = VDM::parse(SECOND).unwrap();
        assert_eq!(
            reassemble(&[second]),
            Err(Error::FragmentSequence("first fragment missing"))
        );

        let first = VDM::parse(FIRST).unwrap();
        assert_eq!(
            reassemble(&[first]),
            Err(Error::FragmentSequence("fragments missing"))
        );

        let empty: [VDM; 0] = [];
        assert_eq!(reassemble(&empty), Err(Error::FragmentSequence("no fragments")));
    }

    #[test]
    fn test_reassemble_mixed_messages() {
        let mut other = VDM::for_talker(TalkerId::AI);
        let header = FragmentHeader {
            count: 2,
            index: 2,
            message_id: Some("4".to_owned()),
            channel: Some("A".to_owned()),
        };
        other.set_fragment(&header, "1@0000000000000", 2).unwrap();

        assert_eq!(
            reassemble(&[VDM::parse(FIRST).unwrap(), other]),
            Err(Error::FragmentSequence("fragments belong to different messages"))
        );
    }

    #[test]
    fn test_build_single_fragment() {
        let mut vdo = VDO::for_talker(TalkerId::AI);
        let header = FragmentHeader {
            count: 1,
            index: 1,
            message_id: None,
            channel: Some("A".to_owned()),
        };
        vdo.set_fragment(&header, "13u@Dt002s000000000000000000", 0)
            .unwrap();

        let text = vdo.to_text();
        assert!(text.starts_with("!AIVDO,1,1,,A,13u@Dt002s000000000000000000,0*"));

        let parsed = VDO::parse(&text).unwrap();
        assert_eq!(parsed.header().unwrap(), header);
        assert_eq!(reassemble(&[parsed]).unwrap().1, 0);
    }
}
