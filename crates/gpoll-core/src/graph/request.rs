//! Request URL construction and redaction.

use url::Url;

use crate::credential::AccessToken;

const TOKEN_PARAM: &str = "access_token";

/// `{api_base}/{api_version}/me`. A base path without a trailing slash is kept
/// as a directory rather than replaced by the join.
pub fn profile_endpoint(api_base: &str, api_version: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(api_base)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("{}/me", api_version.trim_matches('/')))
}

/// Endpoint with `fields` and `access_token` query parameters.
pub fn request_url(endpoint: &Url, fields: &[String], token: &AccessToken) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("fields", &fields.join(","))
        .append_pair(TOKEN_PARAM, token.expose());
    url
}

/// URL as a string with the access token value replaced, for logging.
pub fn redact_token(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == TOKEN_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.set_query(None);
    if !pairs.is_empty() {
        redacted.query_pairs_mut().extend_pairs(pairs);
    }
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<String> {
        ["id", "name", "last_name"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn endpoint_joins_version_and_me() {
        let url = profile_endpoint("https://graph.facebook.com", "v19.0").unwrap();
        assert_eq!(url.as_str(), "https://graph.facebook.com/v19.0/me");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = profile_endpoint("http://127.0.0.1:8080/graph", "/v19.0/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/graph/v19.0/me");
    }

    #[test]
    fn request_url_carries_fields_and_token() {
        let endpoint = profile_endpoint("https://graph.facebook.com", "v19.0").unwrap();
        let url = request_url(&endpoint, &fields(), &AccessToken::new("abc"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("fields".to_string(), "id,name,last_name".to_string()),
                ("access_token".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn redaction_hides_token_only() {
        let endpoint = profile_endpoint("https://graph.facebook.com", "v19.0").unwrap();
        let url = request_url(&endpoint, &fields(), &AccessToken::new("s3cr3t"));
        let logged = redact_token(&url);
        assert!(!logged.contains("s3cr3t"));
        assert!(logged.contains("access_token=REDACTED"));
        assert!(logged.starts_with("https://graph.facebook.com/v19.0/me?fields="));
    }
}
