//! HTTP error mapping shared by the REST-based providers.

use reqwest::header::RETRY_AFTER;
use reqwest::Response;
use std::time::Duration;

use crate::ports::AIError;

/// Default wait suggested when a 429 carries no usable hint.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Converts a transport-level failure into an [`AIError`].
pub(super) fn map_send_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::timeout(timeout)
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Passes successful responses through and classifies everything else.
pub(super) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_header = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let error_body = response.text().await.unwrap_or_default();

    Err(classify_status(
        status.as_u16(),
        retry_header.as_deref(),
        &error_body,
    ))
}

/// Maps a non-success status code and body onto an [`AIError`].
pub(super) fn classify_status(status: u16, retry_header: Option<&str>, body: &str) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(retry_header, body)),
        400 | 404 | 422 => AIError::InvalidRequest(body.to_string()),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Extracts a retry hint from the `Retry-After` header or the error body.
///
/// Understands a numeric header, OpenAI's "try again in Ns" message and
/// Gemini's `"retryDelay": "Ns"` detail. Falls back to 30 seconds.
pub(super) fn parse_retry_after(header: Option<&str>, body: &str) -> u32 {
    if let Some(secs) = header.and_then(|h| h.trim().parse::<u32>().ok()) {
        return secs;
    }

    for marker in ["try again in ", "\"retryDelay\": \"", "\"retryDelay\":\""] {
        if let Some(idx) = body.find(marker) {
            let rest = &body[idx + marker.len()..];
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if let Ok(secs) = rest[..end].parse::<u32>() {
                return secs;
            }
        }
    }

    DEFAULT_RETRY_AFTER_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication_failed() {
        assert_eq!(classify_status(401, None, ""), AIError::AuthenticationFailed);
        assert_eq!(classify_status(403, None, ""), AIError::AuthenticationFailed);
    }

    #[test]
    fn server_errors_are_unavailable() {
        assert!(matches!(
            classify_status(503, None, "overloaded"),
            AIError::Unavailable { .. }
        ));
    }

    #[test]
    fn bad_request_keeps_body() {
        assert_eq!(
            classify_status(400, None, "bad model"),
            AIError::InvalidRequest("bad model".to_string())
        );
    }

    #[test]
    fn unexpected_status_is_network_error() {
        assert!(matches!(classify_status(302, None, ""), AIError::Network(_)));
    }

    #[test]
    fn rate_limit_prefers_header() {
        assert_eq!(
            classify_status(429, Some("12"), "try again in 40 seconds"),
            AIError::rate_limited(12)
        );
    }

    #[test]
    fn retry_after_from_openai_message() {
        let body = r#"{"error":{"message":"Rate limit exceeded. Please try again in 20 seconds."}}"#;
        assert_eq!(parse_retry_after(None, body), 20);
    }

    #[test]
    fn retry_after_from_gemini_detail() {
        let body = r#"{"error":{"details":[{"retryDelay": "17s"}]}}"#;
        assert_eq!(parse_retry_after(None, body), 17);
    }

    #[test]
    fn retry_after_default() {
        assert_eq!(parse_retry_after(Some("Wed, 21 Oct 2015 07:28:00 GMT"), "{}"), 30);
    }
}
