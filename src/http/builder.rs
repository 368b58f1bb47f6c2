use reqwest::{
    Body, Request, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};

use crate::error::TestFailure;
use crate::runner::EngineConfig;
use crate::suite::{HttpMethod, MultiMap, RequestSpec};

const CLIENT_ID_HEADER: &str = "client-id";

/// Turns a request spec into a concrete request against the configured host.
///
/// # Errors
///
/// Returns [`TestFailure::UnsupportedMethod`] for verbs outside GET/POST/PUT
/// and [`TestFailure::RequestConstruction`] when the target URL or a header
/// is invalid.
pub fn build_request(config: &EngineConfig, spec: &RequestSpec) -> Result<Request, TestFailure> {
    let method =
        HttpMethod::from_name(&spec.method).ok_or_else(|| TestFailure::UnsupportedMethod {
            method: spec.method.clone(),
        })?;

    let target = compose_target(&config.host, &spec.path, &spec.params);
    let url = Url::parse(&target).map_err(|err| TestFailure::RequestConstruction {
        reason: format!("invalid URL '{}': {}", target, err),
    })?;

    let mut request = Request::new(method.to_reqwest(), url);
    if let Some(headers) = spec.headers.as_ref() {
        *request.headers_mut() = header_map(headers)?;
    }
    if spec.with_client_id {
        append_header(
            request.headers_mut(),
            HeaderName::from_static(CLIENT_ID_HEADER),
            config.client_id.as_deref().unwrap_or_default(),
        )?;
    }
    if spec.with_auth_token {
        append_header(
            request.headers_mut(),
            AUTHORIZATION,
            config.auth_token.as_deref().unwrap_or_default(),
        )?;
    }

    // An empty body sends no payload at all.
    if !spec.body.is_empty() {
        *request.body_mut() = Some(Body::from(spec.body.clone()));
    }

    Ok(request)
}

/// `host + path + "?" + query`. The `?` is kept even with no parameters.
#[must_use]
pub fn compose_target(host: &str, path: &str, params: &MultiMap) -> String {
    format!("{}{}?{}", host, path, params.encode())
}

fn header_map(headers: &MultiMap) -> Result<HeaderMap, TestFailure> {
    let mut map = HeaderMap::new();
    for (key, value) in headers.pairs() {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            TestFailure::RequestConstruction {
                reason: format!("invalid header name '{}': {}", key, err),
            }
        })?;
        append_header(&mut map, name, value)?;
    }
    Ok(map)
}

fn append_header(map: &mut HeaderMap, name: HeaderName, value: &str) -> Result<(), TestFailure> {
    let value = HeaderValue::from_str(value).map_err(|err| TestFailure::RequestConstruction {
        reason: format!("invalid value for header '{}': {}", name, err),
    })?;
    map.append(name, value);
    Ok(())
}
