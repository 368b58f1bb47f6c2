use reqwest::Method;

use super::*;
use crate::error::TestFailure;
use crate::runner::EngineConfig;
use crate::suite::{MultiMap, RequestSpec};

fn base_config() -> EngineConfig {
    let mut config = EngineConfig::new("http://api.local");
    config.client_id = Some("client-7".to_owned());
    config.auth_token = Some("Bearer abc".to_owned());
    config
}

fn spec(method: &str, path: &str) -> RequestSpec {
    RequestSpec {
        method: method.to_owned(),
        path: path.to_owned(),
        ..RequestSpec::default()
    }
}

fn header_values(request: &reqwest::Request, name: &str) -> Vec<String> {
    request
        .headers()
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok().map(str::to_owned))
        .collect()
}

#[test]
fn allowed_methods_build_in_any_casing() -> Result<(), String> {
    let config = base_config();
    let cases = [
        ("get", Method::GET),
        ("GET", Method::GET),
        ("Post", Method::POST),
        ("pUT", Method::PUT),
    ];
    for (name, expected) in cases {
        let request = build_request(&config, &spec(name, "/x")).map_err(|err| err.to_string())?;
        if *request.method() != expected {
            return Err(format!("{} built as {}", name, request.method()));
        }
    }
    Ok(())
}

#[test]
fn other_methods_are_unsupported() -> Result<(), String> {
    let config = base_config();
    for name in ["DELETE", "patch", "HEAD", "OPTIONS", ""] {
        match build_request(&config, &spec(name, "/x")) {
            Err(TestFailure::UnsupportedMethod { method }) if method == name => {}
            other => return Err(format!("{}: expected UnsupportedMethod, got {:?}", name, other)),
        }
    }
    Ok(())
}

#[test]
fn target_keeps_trailing_question_mark_without_params() -> Result<(), String> {
    let request =
        build_request(&base_config(), &spec("GET", "/ping")).map_err(|err| err.to_string())?;
    if request.url().as_str() != "http://api.local/ping?" {
        return Err(format!("Unexpected url: {}", request.url()));
    }
    Ok(())
}

#[test]
fn params_are_form_encoded_in_key_order() -> Result<(), String> {
    let mut request_spec = spec("GET", "/search");
    request_spec.params =
        MultiMap::from_iter([("q", "a b"), ("lang", "en"), ("q", "c&d")]);
    let target = compose_target("http://api.local", "/search", &request_spec.params);
    if target != "http://api.local/search?lang=en&q=a+b&q=c%26d" {
        return Err(format!("Unexpected target: {}", target));
    }
    let request = build_request(&base_config(), &request_spec).map_err(|err| err.to_string())?;
    if request.url().query() != Some("lang=en&q=a+b&q=c%26d") {
        return Err(format!("Unexpected query: {:?}", request.url().query()));
    }
    Ok(())
}

#[test]
fn explicit_headers_replace_and_injections_append() -> Result<(), String> {
    let mut request_spec = spec("POST", "/items");
    request_spec.headers = Some(MultiMap::from_iter([
        ("Content-Type", "application/json"),
        ("client-id", "from-suite"),
    ]));
    request_spec.with_client_id = true;
    request_spec.with_auth_token = true;

    let request = build_request(&base_config(), &request_spec).map_err(|err| err.to_string())?;

    if header_values(&request, "content-type") != vec!["application/json".to_owned()] {
        return Err("Expected suite Content-Type".to_owned());
    }
    let client_ids = header_values(&request, "client-id");
    if client_ids != vec!["from-suite".to_owned(), "client-7".to_owned()] {
        return Err(format!("Expected appended client-id, got {:?}", client_ids));
    }
    if header_values(&request, "authorization") != vec!["Bearer abc".to_owned()] {
        return Err("Expected Authorization header".to_owned());
    }
    if request.headers().len() != 4 {
        return Err(format!("Unexpected headers: {:?}", request.headers()));
    }
    Ok(())
}

#[test]
fn no_injection_flags_means_no_credentials() -> Result<(), String> {
    let request =
        build_request(&base_config(), &spec("GET", "/x")).map_err(|err| err.to_string())?;
    if !request.headers().is_empty() {
        return Err(format!("Expected no headers, got {:?}", request.headers()));
    }
    Ok(())
}

#[test]
fn missing_credentials_inject_empty_values() -> Result<(), String> {
    let mut request_spec = spec("GET", "/x");
    request_spec.with_client_id = true;
    request_spec.with_auth_token = true;
    let request = build_request(&EngineConfig::new("http://api.local"), &request_spec)
        .map_err(|err| err.to_string())?;
    if header_values(&request, "client-id") != vec![String::new()] {
        return Err("Expected empty client-id".to_owned());
    }
    if header_values(&request, "authorization") != vec![String::new()] {
        return Err("Expected empty Authorization".to_owned());
    }
    Ok(())
}

#[test]
fn body_is_attached_even_for_get() -> Result<(), String> {
    let mut request_spec = spec("GET", "/x");
    request_spec.body = r#"{"probe":true}"#.to_owned();
    let request = build_request(&base_config(), &request_spec).map_err(|err| err.to_string())?;
    let bytes = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .ok_or_else(|| "Expected a body".to_owned())?;
    if bytes != br#"{"probe":true}"# {
        return Err(format!("Unexpected body: {:?}", bytes));
    }
    Ok(())
}

#[test]
fn invalid_target_or_header_is_a_construction_failure() -> Result<(), String> {
    let bad_host = EngineConfig::new("not a host");
    if !matches!(
        build_request(&bad_host, &spec("GET", "/x")),
        Err(TestFailure::RequestConstruction { .. })
    ) {
        return Err("Expected RequestConstruction for invalid URL".to_owned());
    }

    let mut bad_header = spec("GET", "/x");
    bad_header.headers = Some(MultiMap::from_iter([("bad header", "v")]));
    if !matches!(
        build_request(&base_config(), &bad_header),
        Err(TestFailure::RequestConstruction { .. })
    ) {
        return Err("Expected RequestConstruction for invalid header".to_owned());
    }
    Ok(())
}

#[test]
fn client_builds_with_configured_timeout() -> Result<(), String> {
    build_client(&base_config())
        .map(drop)
        .map_err(|err| err.to_string())
}
