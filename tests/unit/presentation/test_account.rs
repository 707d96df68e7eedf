use line_status::presentation::account::AccountRecord;
use serde_json::json;

#[test]
fn test_record_deserializes_upstream_names() {
    let record: AccountRecord = serde_json::from_value(json!({
        "ID": "12345",
        "login": "user@a.1",
        "postcode": "TR1 1AA",
        "tx_rate": "80000000",
        "rx_rate": "20000000",
        "tx_rate_adjusted": "75000000",
        "quota_monthly": "500000000000",
        "quota_remaining": "1999999999",
        "quota_timestamp": "2026-10-18 09:00:00",
        "unexpected": 1
    }))
    .unwrap();

    assert_eq!(record.id, "12345");
    assert_eq!(record.upload_bps(), Some(20_000_000.0));
    assert_eq!(record.download_bps(), Some(80_000_000.0));
}

#[test]
fn test_record_serializes_for_the_template() {
    let record = AccountRecord {
        id: "12345".to_string(),
        tx_rate: "80000000".to_string(),
        ..Default::default()
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["id"], "12345");
    assert_eq!(value["tx_rate"], "80000000");
    assert_eq!(value["quota_timestamp"], "");
}
