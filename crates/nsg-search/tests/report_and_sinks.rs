use nsg_core::{ErrorInfo, NsgError};
use nsg_search::{
    run_search, FixedFrobeniusSearch, FixedGenusSearch, FnSink, NullSink, SearchConfig,
    SearchMode, SearchReport, SearchStrategy, SemigroupRecord, REPORT_SCHEMA,
};

#[test]
fn sinks_see_records_in_emission_order() {
    let mut streamed: Vec<SemigroupRecord> = Vec::new();
    let report = run_search(
        &FixedFrobeniusSearch::new(5),
        &SearchConfig::default(),
        &mut streamed,
    )
    .unwrap();
    assert_eq!(streamed, report.records);
}

#[test]
fn closure_sinks_can_stop_a_search() {
    let mut seen = 0usize;
    let mut sink = FnSink(|_record: &SemigroupRecord| {
        seen += 1;
        if seen == 2 {
            Err(NsgError::Search(ErrorInfo::new("stop", "enough")))
        } else {
            Ok(())
        }
    });
    let err = run_search(&FixedGenusSearch::new(3), &SearchConfig::default(), &mut sink)
        .unwrap_err();
    assert_eq!(err.code(), "stop");
    assert_eq!(seen, 2);
}

#[test]
fn strategies_report_their_mode() {
    let strategy = SearchMode::FixedGenus { genus: 4 }.strategy();
    assert_eq!(strategy.mode(), SearchMode::FixedGenus { genus: 4 });
    assert!(strategy.validate().is_ok());
}

#[test]
fn json_report_round_trips() {
    let report = run_search(
        &FixedGenusSearch::new(3),
        &SearchConfig::default(),
        &mut NullSink,
    )
    .unwrap();
    let json = report.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mode"]["mode"], "fixed-genus");
    assert_eq!(value["mode"]["genus"], 3);
    assert_eq!(value["records"][1]["generators"], serde_json::json!([3, 4]));
    assert_eq!(value["records"][1]["classification"], "leaf");
    assert_eq!(value["records"][3]["origin"]["kind"], "extremal");
    assert_eq!(value["summary"]["majority"], "internal");

    let back: SearchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn provenance_hash_tracks_parameters() {
    let config = SearchConfig::default();
    let first = run_search(&FixedGenusSearch::new(2), &config, &mut NullSink).unwrap();
    let again = run_search(&FixedGenusSearch::new(2), &config, &mut NullSink).unwrap();
    let other = run_search(&FixedGenusSearch::new(3), &config, &mut NullSink).unwrap();

    assert_eq!(first.provenance.schema_version, REPORT_SCHEMA);
    assert_eq!(first.provenance.input_hash, again.provenance.input_hash);
    assert_ne!(first.provenance.input_hash, other.provenance.input_hash);
    assert_eq!(first.provenance.input_hash.len(), 64);
    assert!(first.provenance.tool_versions.contains_key("nsg-search"));
    assert!(!first.provenance.created_at.is_empty());
}

#[test]
fn record_digests_hash_the_key() {
    let report = run_search(
        &FixedFrobeniusSearch::new(4),
        &SearchConfig::default(),
        &mut NullSink,
    )
    .unwrap();
    for record in &report.records {
        assert_eq!(record.digest, record.key.digest());
        assert_eq!(record.key, *record.generators.key());
    }
}
