/// Execution scenarios: one round trip, classification and reset
mod common;

use common::{people_connection, three_smiths, StubTransport, DATABASE};
use fmxml_core::{
    CommandSet, DirectiveKey, DirectiveValue, FileMaker, FileMakerInterface, FmErrorKind,
    RawResult, TransportError,
};

fn smith_command_set() -> CommandSet {
    let mut expected = CommandSet::new();
    expected.insert(DirectiveKey::Db, DATABASE);
    expected.insert(DirectiveKey::Lay, "people");
    expected.insert(DirectiveKey::Custom("LastName".to_string()), "Smith");
    expected.insert(DirectiveKey::Find, DirectiveValue::Marker);
    expected
}

#[test]
fn test_find_smith_returns_three_records() {
    // GIVEN a connection on layout "people" whose transport returns three records
    let transport = StubTransport::returning(three_smiths());
    let mut fm = people_connection(&transport);

    // WHEN finding by LastName and executing
    let result = fm
        .find_by_fields([("LastName", "Smith")])
        .unwrap()
        .execute_command()
        .expect("Should succeed");

    // THEN three records come back
    assert_eq!(result.records().len(), 3);
    assert_eq!(result.records()[0].field("LastName"), Some("Smith"));

    // AND exactly the primed find command was sent, once
    assert_eq!(transport.calls(), 1);
    let sent = transport.last_sent().unwrap();
    assert_eq!(sent, smith_command_set());
    assert_eq!(
        sent.to_string(),
        r#"{"-db":"contacts","-lay":"people","LastName":"Smith","-find":null}"#
    );
}

#[test]
fn test_find_smith_with_401_is_records_not_found_and_clears() {
    // GIVEN a transport reporting "no records match" (401)
    let transport = StubTransport::returning(RawResult::error(401, "No records match the request"));
    let mut fm = people_connection(&transport);

    // WHEN executing the same find
    let err = fm
        .find_by_fields([("LastName", "Smith")])
        .unwrap()
        .execute_command()
        .unwrap_err();

    // THEN the failure is RecordsNotFound, never GeneralFailure
    assert_eq!(err.kind(), FmErrorKind::RecordsNotFound);
    assert_eq!(err.code(), "ERR_RECORDS_NOT_FOUND");
    assert_eq!(err.command_result().map(|r| r.error_code), Some(401));
    assert_eq!(err.command_set(), Some(&smith_command_set()));

    // AND the command set is cleared while the layout survives
    assert!(fm.builder().command_set().is_empty());
    assert_eq!(fm.builder().layout(), Some("people"));
}

#[test]
fn test_general_failure_carries_remote_text_and_sent_set() {
    // GIVEN a transport reporting a missing field
    let transport = StubTransport::returning(RawResult::error(102, "Field is missing"));
    let mut fm = people_connection(&transport);

    // WHEN executing
    let err = fm
        .find_by_fields([("Nickname", "Smithy")])
        .unwrap()
        .execute_command()
        .unwrap_err();

    // THEN the message names the remote error and the exact command set
    assert_eq!(err.kind(), FmErrorKind::GeneralFailure);
    assert_eq!(err.remote_code(), Some(102));
    let text = err.to_string();
    assert!(text.contains("Field is missing"), "{}", text);
    assert!(text.contains(r#""Nickname":"Smithy""#), "{}", text);
}

#[test]
fn test_transport_failure_is_no_result_returned() {
    // GIVEN a transport that cannot reach the server
    let transport = StubTransport::failing(TransportError::Http {
        message: "connection refused".to_string(),
    });
    let mut fm = people_connection(&transport);

    // WHEN executing
    let err = fm.find_all().unwrap().execute_command().unwrap_err();

    // THEN the failure is NoResultReturned and the set is cleared
    assert_eq!(err.kind(), FmErrorKind::NoResultReturned);
    assert!(err.remote_code().is_none());
    assert!(fm.builder().command_set().is_empty());
}

#[test]
fn test_zero_code_is_success_regardless_of_message() {
    // GIVEN a success code with an unexpected message
    let mut result = three_smiths();
    result.error_message = "Warning: something looked odd".to_string();
    let transport = StubTransport::returning(result);
    let mut fm = people_connection(&transport);

    // WHEN executing
    let result = fm.find_all().unwrap().execute_command();

    // THEN the call succeeds
    assert_eq!(result.unwrap().records().len(), 3);
}

#[test]
fn test_next_call_starts_from_empty_set() {
    // GIVEN a connection that already executed a command with modifiers
    let transport = StubTransport::returning(three_smiths());
    let mut fm = people_connection(&transport);
    fm.find_all().unwrap().max(5).skip(10);
    fm.execute_command().unwrap();

    // WHEN building and executing a different command
    fm.delete_record(7).unwrap();
    fm.execute_command().unwrap();

    // THEN the second set carries none of the first set's directives
    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    let keys: Vec<String> = sent[1].keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["-db", "-lay", "-recid", "-delete"]);
}

#[test]
fn test_state_cleared_after_failure_too() {
    // GIVEN a failing transport
    let transport = StubTransport::returning(RawResult::error(
        500,
        "Date value does not meet validation",
    ));
    let mut fm = people_connection(&transport);
    fm.create_record([("Born", "not-a-date")]).unwrap();

    // WHEN execution fails
    assert!(fm.execute_command().is_err());

    // THEN a fresh operation is not rejected as a verb conflict
    fm.find_all().expect("previous -new must not linger");
}

#[test]
fn test_missing_layout_never_reaches_transport() {
    // GIVEN a connection without a layout
    let transport = StubTransport::returning(three_smiths());
    let mut fm = FileMaker::new(&transport, DATABASE);

    // WHEN priming
    let err = fm.find_all().unwrap_err();

    // THEN MissingScope is raised locally
    assert_eq!(err.kind(), FmErrorKind::MissingScope);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_script_alongside_find() {
    // GIVEN a find with a script attached
    let transport = StubTransport::returning(three_smiths());
    let mut fm = people_connection(&transport);

    // WHEN executing
    fm.find_all()
        .unwrap()
        .call_script("Audit", Some("full"))
        .unwrap()
        .execute_command()
        .unwrap();

    // THEN both the verb and the script directives were sent
    let sent = transport.last_sent().unwrap();
    assert!(sent.contains(&DirectiveKey::FindAll));
    assert_eq!(sent.get(&DirectiveKey::Script), Some(&DirectiveValue::from("Audit")));
    assert_eq!(
        sent.get(&DirectiveKey::ScriptParam),
        Some(&DirectiveValue::from("full"))
    );
}

#[test]
fn test_into_parts_returns_builder_and_transport() {
    let transport = StubTransport::returning(three_smiths());
    let mut fm = people_connection(transport);
    fm.find_all().unwrap();

    let (builder, transport) = fm.into_parts();

    assert_eq!(builder.command_set().len(), 3);
    assert_eq!(transport.calls(), 0);
}
