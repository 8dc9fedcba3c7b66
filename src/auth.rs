use crate::errors::DashboardError;
use tracing::warn;

/// One Basic-auth round trip against the upstream signin endpoint. Any
/// non-2xx status or an empty token body is an `Auth` error; network
/// failures surface the transport error text.
pub async fn login(
    http: &reqwest::Client,
    auth_url: &str,
    username: &str,
    password: &str,
) -> Result<String, DashboardError> {
    let response = http
        .post(auth_url)
        .basic_auth(username, Some(password))
        .json(&serde_json::json!({}))
        .send()
        .await
        .map_err(|err| DashboardError::auth(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!("signin rejected with status {status}");
        return Err(DashboardError::auth(format!("signin returned {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|err| DashboardError::auth(err.to_string()))?;

    parse_token(&body)
}

/// The upstream encodes the token as a JSON string literal; some
/// deployments return it bare. Accept both, reject anything empty.
fn parse_token(body: &str) -> Result<String, DashboardError> {
    let token = match serde_json::from_str::<String>(body) {
        Ok(decoded) => decoded,
        Err(_) => body.trim().to_string(),
    };

    if token.is_empty() {
        return Err(DashboardError::auth("empty token in signin response"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_encoded_token_is_unwrapped() {
        assert_eq!(parse_token("\"abc123\"").unwrap(), "abc123");
    }

    #[test]
    fn bare_token_passes_through() {
        assert_eq!(parse_token("abc123").unwrap(), "abc123");
        assert_eq!(parse_token("  abc123\n").unwrap(), "abc123");
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(parse_token("").is_err());
        assert!(parse_token("\"\"").is_err());
        assert!(parse_token("   \n").is_err());
    }
}
