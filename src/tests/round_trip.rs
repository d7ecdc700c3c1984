use crate::{BeginChar, Error, MAX_LENGTH, SentenceRecord, TalkerId};

#[test]
fn test_populated_record_survives_text() {
    let mut record = SentenceRecord::new_empty(TalkerId::GP, "GLL", 7).unwrap();
    record.set_latitude(0, 1, -33.8568).unwrap();
    record.set_longitude(2, 3, 151.21533).unwrap();
    record.set_string(4, "120000.00").unwrap();
    record.set_char(5, 'A').unwrap();
    record.set_char(6, 'A').unwrap();

    let text = record.to_text();
    assert_eq!(SentenceRecord::parse(&text).unwrap(), record);
    assert_eq!(SentenceRecord::parse(&format!("{text}\r\n")).unwrap(), record);
}

#[test]
fn test_empty_record_survives_text() {
    let record = SentenceRecord::new_empty(TalkerId::II, "MTW", 2).unwrap();
    let text = record.to_text();

    assert_eq!(text, "$IIMTW,,*4E");
    let parsed = SentenceRecord::parse(&text).unwrap();
    assert_eq!(parsed.field_count(), 2);
    assert_eq!(parsed, record);
}

#[test]
fn test_encapsulation_survives_text() {
    let mut record =
        SentenceRecord::new(BeginChar::Encapsulation, TalkerId::AI, "VDM", 6).unwrap();
    record
        .set_values(0, &["1", "1", "", "A", "13u@Dt002s000000000000000000", "0"])
        .unwrap();

    let parsed = SentenceRecord::parse(&record.to_text()).unwrap();
    assert_eq!(parsed.begin_char(), BeginChar::Encapsulation);
    assert!(parsed.is_ais());
    assert_eq!(parsed, record);
}

#[test]
fn test_changed_talker_keeps_fields() {
    let mut record =
        SentenceRecord::parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
            .unwrap();
    record.set_talker_id(TalkerId::GN).unwrap();

    let parsed = SentenceRecord::parse(&record.to_text()).unwrap();
    assert_eq!(parsed.talker_id(), TalkerId::GN);
    assert_eq!(parsed.fields(), record.fields());
}

#[test]
fn test_length_limit() {
    let mut record = SentenceRecord::new_empty(TalkerId::GP, "TXT", 4).unwrap();
    record.set_string(3, "SHORT").unwrap();
    assert!(record.fits_max_length());
    assert!(record.to_text_checked(MAX_LENGTH).is_ok());

    let long = "X".repeat(70);
    record.set_string(3, &long).unwrap();
    assert!(!record.fits_max_length());
    assert!(matches!(
        record.to_text_checked(MAX_LENGTH),
        Err(Error::SentenceTooLong { max: MAX_LENGTH, .. })
    ));
}
