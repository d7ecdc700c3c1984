//! # Fragment Reassembly
//!
//! Encapsulation sentences such as AIS `VDM`/`VDO` split payloads that do not fit into
//! one sentence across several fragments. Each fragment carries the fragment count,
//! its 1-based index, an optional sequential message id and a radio channel.
//!
//! [`is_continuation`] decides whether one fragment continues another. Buffering
//! policy (how long to wait for a missing fragment) is left to the caller; once a
//! complete run is collected, [`reassemble`] joins the payload.

use crate::{Error, Result, SentenceRecord};

/// Fragment bookkeeping of one encapsulation sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentHeader {
    /// Total number of fragments in the message
    pub count: u8,
    /// Index of this fragment, starting at 1
    pub index: u8,
    /// Sequential message id, absent for single-fragment messages
    pub message_id: Option<String>,
    /// Radio channel, e.g. `A` or `B`
    pub channel: Option<String>,
}

impl FragmentHeader {
    /// Reads the header from the first four fields of an encapsulation record.
    pub fn from_record(record: &SentenceRecord) -> Result<Self> {
        let count = record.get::<u8>(0)?;
        let index = record.get::<u8>(1)?;

        if count == 0 || index == 0 || index > count {
            return Err(Error::InvalidFieldValue {
                index: 1,
                value: format!("{index} of {count}"),
            });
        }

        let optional = |index| {
            record
                .field(index)
                .map(|field| (!field.is_empty()).then(|| field.to_owned()))
        };

        Ok(Self {
            count,
            index,
            message_id: optional(2)?,
            channel: optional(3)?,
        })
    }

    /// `true` if the message spans more than one sentence
    pub fn is_fragmented(&self) -> bool {
        self.count > 1
    }

    /// `true` for the first fragment of a message
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    /// `true` for the last fragment of a message, which carries the fill bits
    pub fn is_last(&self) -> bool {
        self.index == self.count
    }
}

/// Returns `true` if `next` continues the message that `previous` belongs to.
///
/// Both fragments must agree on the count and `next` must come later. A directly
/// following fragment only has to share the channel or the message id; after a gap
/// it has to share both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{FragmentHeader, is_continuation};
///
/// let header = |index, channel: &str, id: &str| FragmentHeader {
///     count: 3,
///     index,
///     message_id: Some(id.to_owned()),
///     channel: Some(channel.to_owned()),
/// };
///
/// assert!(is_continuation(&header(1, "A", "5"), &header(2, "A", "9")));
/// assert!(!is_continuation(&header(1, "A", "5"), &header(3, "B", "5")));
/// ```
pub fn is_continuation(previous: &FragmentHeader, next: &FragmentHeader) -> bool {
    if previous.count != next.count || previous.index >= next.index {
        return false;
    }

    let same_channel = previous.channel == next.channel;
    let same_message = previous.message_id == next.message_id;

    if next.index == previous.index + 1 {
        same_channel || same_message
    } else {
        same_channel && same_message
    }
}

/// A sentence carrying one fragment of an encapsulated payload.
pub trait Fragment {
    /// The fragment bookkeeping fields
    fn header(&self) -> Result<FragmentHeader>;

    /// The payload chunk carried by this fragment
    fn payload(&self) -> Result<&str>;

    /// Number of padding bits appended to the payload, meaningful on the last fragment
    fn fill_bits(&self) -> Result<u8>;
}

/// Joins the payload of a complete, ordered run of fragments.
///
/// Returns the payload and the fill bit count of the last fragment. Fails with
/// [`Error::FragmentSequence`] unless the run starts at the first fragment, ends at
/// the last one and every fragment continues its predecessor.
pub fn reassemble<F: Fragment>(fragments: &[F]) -> Result<(String, u8)> {
    let (Some(first), Some(last)) = (fragments.first(), fragments.last()) else {
        return Err(Error::FragmentSequence("no fragments"));
    };

    let headers = fragments
        .iter()
        .map(Fragment::header)
        .collect::<Result<Vec<_>>>()?;

    if !headers[0].is_first() {
        return Err(Error::FragmentSequence("first fragment missing"));
    }
    if !headers[headers.len() - 1].is_last() || headers.len() != usize::from(headers[0].count) {
        return Err(Error::FragmentSequence("fragments missing"));
    }
    if !headers
        .windows(2)
        .all(|pair| is_continuation(&pair[0], &pair[1]))
    {
        return Err(Error::FragmentSequence("fragments belong to different messages"));
    }

    let mut payload = first.payload()?.to_owned();
    for fragment in &fragments[1..] {
        payload.push_str(fragment.payload()?);
    }

    Ok((payload, last.fill_bits()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(count: u8, index: u8, channel: Option<&str>, id: Option<&str>) -> FragmentHeader {
        FragmentHeader {
            count,
            index,
            message_id: id.map(str::to_owned),
            channel: channel.map(str::to_owned),
        }
    }

    #[test]
    fn test_adjacent_needs_channel_or_id() {
        let first = header(3, 1, Some("A"), Some("5"));

        assert!(is_continuation(&first, &header(3, 2, Some("A"), Some("9"))));
        assert!(is_continuation(&first, &header(3, 2, Some("B"), Some("5"))));
        assert!(!is_continuation(&first, &header(3, 2, Some("B"), Some("9"))));
    }

    #[test]
    fn test_gap_needs_channel_and_id() {
        let first = header(3, 1, Some("A"), Some("5"));

        assert!(is_continuation(&first, &header(3, 3, Some("A"), Some("5"))));
        assert!(!is_continuation(&first, &header(3, 3, Some("B"), Some("5"))));
        assert!(!is_continuation(&first, &header(3, 3, Some("A"), Some("9"))));
    }

    #[test]
    fn test_count_and_order() {
        let first = header(3, 1, Some("A"), Some("5"));

        assert!(!is_continuation(&first, &header(2, 2, Some("A"), Some("5"))));
        assert!(!is_continuation(&first, &first));
        assert!(!is_continuation(&header(3, 2, Some("A"), Some("5")), &first));
    }

    #[test]
    fn test_absent_fields_compare_equal() {
        assert!(is_continuation(
            &header(2, 1, None, None),
            &header(2, 2, None, None)
        ));
    }

    #[test]
    fn test_bookkeeping() {
        let single = header(1, 1, Some("A"), None);
        assert!(!single.is_fragmented());
        assert!(single.is_first() && single.is_last());

        let middle = header(3, 2, Some("A"), Some("1"));
        assert!(middle.is_fragmented());
        assert!(!middle.is_first() && !middle.is_last());
    }

    #[test]
    fn test_header_from_record() {
        let record = SentenceRecord::parse("!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E").unwrap();
        assert_eq!(
            FragmentHeader::from_record(&record).unwrap(),
            header(2, 1, Some("B"), Some("3"))
        );

        let record = SentenceRecord::parse("!AIVDM,1,2,,A,,0").unwrap();
        assert!(matches!(
            FragmentHeader::from_record(&record),
            Err(Error::InvalidFieldValue { .. })
        ));
    }
}
