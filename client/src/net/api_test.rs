use super::*;

#[test]
fn success_statuses_pass() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert!(check_status(299).is_ok());
}

#[test]
fn non_success_statuses_fail_uniformly() {
    for status in [301, 404, 500, 503] {
        let err = check_status(status).unwrap_err();
        assert_eq!(err, FetchError::Status(status));
        assert_eq!(err.to_string(), "Failed to fetch data");
    }
}

#[test]
fn transport_error_keeps_underlying_message() {
    let err = FetchError::Transport("NetworkError when attempting to fetch resource.".to_owned());
    assert_eq!(err.to_string(), "NetworkError when attempting to fetch resource.");
}

#[test]
fn decode_companies_reads_array() {
    let body = r#"[{"id":1,"name":"Acme","industry":"","founded_year":0,"headquarters_city":null},{"id":2,"name":"Initech"}]"#;
    let list = decode_companies(body).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, Some(serde_json::json!("Acme")));
    assert_eq!(list[1].id, 2);
}

#[test]
fn decode_companies_accepts_empty_array() {
    assert!(decode_companies("[]").unwrap().is_empty());
}

#[test]
fn decode_companies_rejects_non_array() {
    let err = decode_companies(r#"{"companies":[]}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}
