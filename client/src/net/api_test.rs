use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

const BASE_URL: &str = "http://localhost:8080/marsrover/api/rovers/";

/// Records every request and replays one canned outcome.
struct RecordingTransport {
    outcome: Result<HttpResponse, FetchError>,
    calls: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self { outcome: Ok(HttpResponse { status, body: body.to_owned() }), calls: RefCell::new(Vec::new()) }
    }

    fn failing(err: FetchError) -> Self {
        Self { outcome: Err(err), calls: RefCell::new(Vec::new()) }
    }
}

impl HttpTransport for RecordingTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

fn config() -> RoverApiConfig {
    RoverApiConfig::new(BASE_URL).unwrap()
}

#[test]
fn rovers_request_targets_base_url_without_trailing_slash() {
    let req = rovers_request(&config());
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, "http://localhost:8080/marsrover/api/rovers");
}

#[test]
fn rovers_request_sends_only_json_content_type_header() {
    let req = rovers_request(&config());
    let expected: BTreeMap<String, String> =
        [("content-type".to_owned(), "application/json".to_owned())].into_iter().collect();
    assert_eq!(req.headers, expected);
}

#[test]
fn http_method_get_formats_as_get() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
}

#[test]
fn fetch_rovers_issues_exactly_one_get() {
    let transport = RecordingTransport::responding(200, r#"{"rovers":[{"name":"Curiosity"}]}"#);
    let rovers = block_on(fetch_rovers(&transport, &config())).unwrap();

    assert_eq!(rovers, vec![Rover { name: "Curiosity".to_owned() }]);
    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], rovers_request(&config()));
}

#[test]
fn fetch_rovers_preserves_response_order() {
    let transport =
        RecordingTransport::responding(200, r#"{"rovers":[{"name":"Spirit"},{"name":"Curiosity"},{"name":"Spirit"}]}"#);
    let names: Vec<String> = block_on(fetch_rovers(&transport, &config()))
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Spirit", "Curiosity", "Spirit"]);
}

#[test]
fn fetch_rovers_maps_non_success_status() {
    let transport = RecordingTransport::responding(502, r#"{"message":"bad gateway"}"#);
    assert_eq!(block_on(fetch_rovers(&transport, &config())), Err(FetchError::Status(502)));
}

#[test]
fn fetch_rovers_propagates_network_failure() {
    let transport = RecordingTransport::failing(FetchError::Network("connection refused".to_owned()));
    let err = block_on(fetch_rovers(&transport, &config())).unwrap_err();
    assert_eq!(err.to_string(), "network error: connection refused");
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn decode_rover_list_treats_missing_field_as_empty() {
    assert_eq!(decode_rover_list(r#"{"photos":[]}"#), Ok(Vec::new()));
    assert_eq!(decode_rover_list("[]"), Ok(Vec::new()));
}

#[test]
fn decode_rover_list_treats_null_rovers_as_empty() {
    assert_eq!(decode_rover_list(r#"{"rovers":null}"#), Ok(Vec::new()));
}

#[test]
fn decode_rover_list_rejects_invalid_json() {
    assert!(matches!(decode_rover_list("<html>oops</html>"), Err(FetchError::Decode(_))));
}

#[test]
fn decode_rover_list_rejects_malformed_entries() {
    assert!(matches!(decode_rover_list(r#"{"rovers":[{"id":1}]}"#), Err(FetchError::Decode(_))));
    assert!(matches!(decode_rover_list(r#"{"rovers":"Curiosity"}"#), Err(FetchError::Decode(_))));
}
