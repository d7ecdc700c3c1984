use std::sync::Arc;

use crate::{
    Error, SentenceConstructor, SentenceFactory, SentenceKind, SentenceRecord, TalkerId,
    sentences::{GGA, HDT},
};

/// Reads only the first three GGA fields.
#[derive(Debug, Clone, PartialEq, crate::Sentence)]
#[sentence(id = "GGA", fields = 3)]
struct BriefGga(SentenceRecord);

const GGA_TEXT: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

#[test]
fn test_reset_restores_builtin_kind() {
    let factory = SentenceFactory::default();
    factory.register_kind::<BriefGga>().unwrap();

    let custom = factory.create_from_text(GGA_TEXT).unwrap();
    assert!(custom.is::<BriefGga>());
    assert!(!custom.is::<GGA>());

    factory.reset_to_defaults();

    let builtin = factory.create_from_text(GGA_TEXT).unwrap();
    assert!(builtin.is::<GGA>());
    assert_eq!(builtin.downcast_ref::<GGA>().unwrap().fix_quality().unwrap(), 1);
}

#[test]
fn test_custom_kind_builds_for_talker() {
    let factory = SentenceFactory::empty();
    factory.register_kind::<BriefGga>().unwrap();

    assert_eq!(factory.parsers(), ["GGA"]);
    let blank = factory.create_for_talker(TalkerId::GN, "GGA").unwrap();
    assert_eq!(blank.to_text(), "$GNGGA,,,*64");
    assert!(matches!(
        factory.create_for_talker(TalkerId::GN, "HDT"),
        Err(Error::UnsupportedSentence(id)) if id == "HDT"
    ));
}

#[test]
fn test_shared_factory_across_threads() {
    let factory = Arc::new(SentenceFactory::default());

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || {
                let mut hdt = factory.create_for_talker(TalkerId::HE, "HDT").unwrap();
                hdt.record_mut().set_degrees(0, f64::from(n) * 10.0).unwrap();
                let text = hdt.to_text();
                factory.create_from_text(&text).unwrap().to_text()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let text = handle.join().unwrap();
        let hdt = HDT::parse(&text).unwrap();
        assert_eq!(hdt.heading().unwrap(), n as f64 * 10.0);
    }
}

#[test]
fn test_unregister_with_shared_constructor() {
    let factory = SentenceFactory::empty();
    let constructor = SentenceConstructor::of::<HDT>();
    factory.register("HDT", constructor.clone()).unwrap();

    assert_eq!(factory.unregister(&constructor).as_deref(), Some("HDT"));
    assert!(!factory.has_parser("HDT"));
    assert_eq!(factory.unregister(&constructor), None);
}

#[test]
fn test_longer_sentence_id_is_not_truncated() {
    let factory = SentenceFactory::default();

    assert_eq!(
        factory.create_from_text("$GPGGAX,1,2").unwrap_err(),
        Error::UnsupportedSentence("GGAX".to_owned())
    );
}
