mod common;

use football_api::{Error, FootballApi};

use common::{StubTransport, envelope, route};

#[test]
fn status_200_passes_the_body_through_unchanged() {
    let body = envelope(2, serde_json::json!(["UTC", "Europe/London"]));
    let stub = StubTransport::new(vec![route("timezone", &[], 200, body)]);
    let api = FootballApi::with_transport("key", "host", stub);

    let timezones = api.list_timezones().expect("200 response should succeed");
    assert_eq!(timezones, vec!["UTC".to_string(), "Europe/London".to_string()]);
}

#[test]
fn credential_headers_are_attached_to_every_call() {
    let stub = StubTransport::new(vec![route(
        "timezone",
        &[],
        200,
        envelope(1, serde_json::json!(["UTC"])),
    )]);
    let api = FootballApi::with_transport("the-key", "the-host", &stub);

    api.list_timezones().unwrap();

    let headers = stub.last_headers();
    assert!(headers.contains(&("x-rapidapi-key".to_string(), "the-key".to_string())));
    assert!(headers.contains(&("x-rapidapi-host".to_string(), "the-host".to_string())));
}

#[test]
fn status_204_is_a_server_error_with_diagnostics() {
    let stub = StubTransport::new(vec![route("countries", &[], 204, serde_json::json!({}))]);
    let api = FootballApi::with_transport("key", "host", stub);

    let err = api.list_countries("full").expect_err("204 must fail");
    match err {
        Error::Server { diagnostic } => {
            assert!(diagnostic.url.ends_with("/countries"), "url was: {}", diagnostic.url);
            assert!(!diagnostic.headers.is_empty());
        }
        other => panic!("expected Server error, got: {:?}", other),
    }
}

#[test]
fn any_other_status_is_an_unknown_api_error() {
    let body = serde_json::json!({ "message": "Too many requests" });
    let stub = StubTransport::new(vec![route("countries", &[], 429, body)]);
    let api = FootballApi::with_transport("key", "host", stub);

    let err = api.list_countries("full").expect_err("429 must fail");
    match err {
        Error::UnknownApi { status, diagnostic } => {
            assert_eq!(status, 429);
            assert!(diagnostic.body.contains("Too many requests"), "body was: {}", diagnostic.body);
        }
        other => panic!("expected UnknownApi error, got: {:?}", other),
    }
}
