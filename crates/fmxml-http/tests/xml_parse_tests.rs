mod common;

use common::TWO_PEOPLE;
use fmxml_core::TransportError;
use fmxml_http::parse_fmresultset;

#[test]
fn test_parse_counts_and_records() {
    // GIVEN a result set with two records
    // WHEN decoding it
    let result = parse_fmresultset(TWO_PEOPLE).expect("Should decode");

    // THEN the error code and counts are read
    assert!(result.is_success());
    assert_eq!(result.error_message, "No error");
    assert_eq!(result.total_count, Some(57));
    assert_eq!(result.count, Some(2));
    assert_eq!(result.fetch_size, Some(2));

    // AND both top-level records are present, portal rows excluded
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].record_id, Some(14));
    assert_eq!(result.records[0].mod_id, Some(3));
    assert_eq!(result.records[1].record_id, Some(15));
}

#[test]
fn test_parse_field_values() {
    let result = parse_fmresultset(TWO_PEOPLE).unwrap();
    let ann = &result.records[0];
    let bob = &result.records[1];

    // Entities are unescaped
    assert_eq!(ann.field("FirstName"), Some("Ann & Co"));
    // First repetition only
    assert_eq!(ann.field("Phone"), Some("555-0100"));
    // Related fields are not merged into the parent record
    assert_eq!(ann.field("Notes::Body"), None);
    assert_eq!(ann.fields.len(), 2);

    // CDATA is taken verbatim, empty data is an empty string
    assert_eq!(bob.field("FirstName"), Some("Bob <Jr>"));
    assert_eq!(bob.field("Phone"), Some(""));
}

#[test]
fn test_parse_remote_error_fills_message() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<fmresultset xmlns="http://www.filemaker.com/xml/fmresultset" version="1.0">
  <error code="105"/>
  <product build="" name="FileMaker Web Publishing Engine" version="14.0.4.412"/>
  <datasource database="" date-format="" layout="" table="" time-format="" timestamp-format="" total-count="0"/>
  <metadata/>
  <resultset count="0" fetch-size="0"/>
</fmresultset>"#;

    let result = parse_fmresultset(body).unwrap();

    assert_eq!(result.error_code, 105);
    assert_eq!(result.error_message, "Layout is missing");
    assert_eq!(result.count, Some(0));
    assert!(result.records.is_empty());
}

#[test]
fn test_parse_rejects_documents_without_error_code() {
    let bodies = [
        "",
        "<fmresultset></fmresultset>",
        "<html><head><title>503</title></head></html>",
        r#"<fmresultset><error/></fmresultset>"#,
    ];

    for body in bodies {
        let err = parse_fmresultset(body).unwrap_err();
        assert!(
            matches!(err, TransportError::Parse { .. }),
            "{:?} gave {:?}",
            body,
            err
        );
    }
}

#[test]
fn test_parse_rejects_bad_record_id() {
    let body = r#"<fmresultset><error code="0"/><resultset count="1" fetch-size="1"><record record-id="abc" mod-id="1"/></resultset></fmresultset>"#;
    let err = parse_fmresultset(body).unwrap_err();
    assert!(err.to_string().contains("record-id"));
}
