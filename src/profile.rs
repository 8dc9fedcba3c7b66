use crate::errors::DashboardError;
use crate::models::{GraphqlResponse, UserProfile};

// Fixed query, no variables: profile fields plus the capped, newest-first
// XP transaction history.
const PROFILE_QUERY: &str = r#"
query {
    user {
        login
        email
        firstName
        lastName
        auditRatio
        totalUp
        totalDown
        transactions(order_by: {createdAt: desc}, where: {type: {_eq: "xp"}, eventId: {_is_null: false}}, limit: 1000) {
            amount
            createdAt
        }
    }
}
"#;

/// One bearer-authorized GraphQL round trip. The envelope is expected to be
/// `{"data":{"user":[...]}}`; the first record is the profile. A missing or
/// empty user list decodes to a `Fetch` error rather than an index panic.
/// One attempt only, no retry.
pub async fn fetch_profile(
    http: &reqwest::Client,
    graphql_url: &str,
    token: &str,
) -> Result<UserProfile, DashboardError> {
    let response = http
        .post(graphql_url)
        .bearer_auth(token)
        .json(&serde_json::json!({ "query": PROFILE_QUERY }))
        .send()
        .await
        .map_err(|err| DashboardError::fetch(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::fetch(format!("graphql returned {status}")));
    }

    let envelope: GraphqlResponse = response
        .json()
        .await
        .map_err(|err| DashboardError::fetch(err.to_string()))?;

    envelope
        .data
        .and_then(|data| data.user.into_iter().next())
        .ok_or_else(|| DashboardError::fetch("no user record in response"))
}
