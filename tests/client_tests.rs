mod common;

use football_api::{Error, FootballApi};

use common::{StubTransport, envelope, route};

fn countries_body() -> serde_json::Value {
    envelope(
        3,
        serde_json::json!([
            { "name": "Brazil", "code": "BR", "flag": "https://media.api-sports.io/flags/br.svg" },
            { "name": "England", "code": "GB", "flag": "https://media.api-sports.io/flags/gb.svg" },
            { "name": "Italy", "code": "IT", "flag": "https://media.api-sports.io/flags/it.svg" }
        ]),
    )
}

#[test]
fn list_timezones_unwraps_the_envelope() {
    let body = envelope(3, serde_json::json!(["UTC", "Europe/London", "America/Sao_Paulo"]));
    let stub = StubTransport::new(vec![route("timezone", &[], 200, body)]);
    let api = FootballApi::with_transport("key", "host", stub);

    let timezones = api.list_timezones().unwrap();
    assert_eq!(timezones.len(), 3);
    assert_eq!(timezones[1], "Europe/London");
}

#[test]
fn set_timezone_rejects_unknown_values_before_recording() {
    let body = envelope(2, serde_json::json!(["UTC", "Europe/London"]));
    let stub = StubTransport::new(vec![route("timezone", &[], 200, body)]);
    let mut api = FootballApi::with_transport("key", "host", stub);

    let err = api.set_timezone("Mars/Olympus_Mons").expect_err("unknown timezone must fail");
    assert!(matches!(err, Error::InvalidArgument(_)), "got: {:?}", err);
    // The default stays untouched
    assert_eq!(api.default_timezone(), "America/Sao_Paulo");
}

#[test]
fn set_timezone_records_a_listed_value_as_the_default() {
    let body = envelope(2, serde_json::json!(["UTC", "Europe/London"]));
    let stub = StubTransport::new(vec![route("timezone", &[], 200, body)]);
    let mut api = FootballApi::with_transport("key", "host", stub);

    api.set_timezone("Europe/London").unwrap();
    assert_eq!(api.default_timezone(), "Europe/London");
}

#[test]
fn list_countries_basic_keeps_only_the_name_in_order() {
    let stub = StubTransport::new(vec![route("countries", &[], 200, countries_body())]);
    let api = FootballApi::with_transport("key", "host", stub);

    let records = api.list_countries("basic").unwrap();
    assert_eq!(records.len(), 3);
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Brazil", "England", "Italy"]);
    for record in &records {
        let value = serde_json::to_value(record).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name"], "record was: {}", value);
    }
}

#[test]
fn list_countries_with_flag_drops_the_code() {
    let stub = StubTransport::new(vec![route("countries", &[], 200, countries_body())]);
    let api = FootballApi::with_transport("key", "host", stub);

    let records = api.list_countries("with-flag").unwrap();
    assert!(records.iter().all(|r| r.code.is_none() && r.flag.is_some()));
}

#[test]
fn list_countries_with_code_drops_the_flag() {
    let stub = StubTransport::new(vec![route("countries", &[], 200, countries_body())]);
    let api = FootballApi::with_transport("key", "host", stub);

    let records = api.list_countries("with-code").unwrap();
    assert!(records.iter().all(|r| r.code.is_some() && r.flag.is_none()));
}

#[test]
fn list_countries_unrecognized_mode_falls_through_to_full_records() {
    let stub = StubTransport::new(vec![route("countries", &[], 200, countries_body())]);
    let api = FootballApi::with_transport("key", "host", stub);

    let records = api.list_countries("deluxe").unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.code.is_some() && r.flag.is_some()));
}

#[test]
fn list_leagues_extracts_the_league_sub_objects() {
    let body = envelope(
        2,
        serde_json::json!([
            {
                "league": { "id": 39, "name": "Premier League", "type": "League", "logo": "l39" },
                "country": { "name": "England", "code": "GB", "flag": "f" },
                "seasons": []
            },
            {
                "league": { "id": 61, "name": "Ligue 1", "type": "League", "logo": "l61" },
                "country": { "name": "France", "code": "FR", "flag": "f" },
                "seasons": []
            }
        ]),
    );
    let stub = StubTransport::new(vec![route("leagues", &[], 200, body)]);
    let api = FootballApi::with_transport("key", "host", stub);

    let leagues = api.list_leagues().unwrap();
    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0].id, 39);
    assert_eq!(leagues[0].name, "Premier League");
    assert_eq!(leagues[1].kind, "League");
    assert_eq!(leagues[1].logo, "l61");
}
