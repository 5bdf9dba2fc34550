use url::Url;

use crate::{ChatError, FailureKind};

/// Route of the chat API below the configured base path.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Resolves `{base_url}/api/chat`, tolerating a trailing slash on the base.
pub fn chat_endpoint(base_url: &str) -> Result<Url, ChatError> {
    let base = base_url.trim().trim_end_matches('/');
    let raw = format!("{base}{CHAT_ROUTE}");
    Url::parse(&raw).map_err(|err| ChatError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_route_to_origin() {
        let url = chat_endpoint("http://127.0.0.1:5000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/chat");
    }

    #[test]
    fn keeps_base_path_and_drops_trailing_slash() {
        let url = chat_endpoint("https://example.com/anp/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/anp/api/chat");
    }

    #[test]
    fn rejects_relative_base() {
        let err = chat_endpoint("/anp").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
