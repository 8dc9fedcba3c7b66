use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// One profile record as returned by the upstream GraphQL endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub login: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub audit_ratio: f64,
    pub total_up: u64,
    pub total_down: u64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// One XP-granting event. Upstream filters to type "xp" with a non-null
/// event id, newest first, capped at 1000 records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyXpBucket {
    pub month: String,
    pub xp: i64,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlData {
    #[serde(default)]
    pub user: Vec<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_decodes_from_graphql_envelope() {
        let body = r#"{
            "data": {
                "user": [{
                    "login": "alice",
                    "email": "alice@example.com",
                    "firstName": "Alice",
                    "lastName": "Aster",
                    "auditRatio": 0.82,
                    "totalUp": 3000000,
                    "totalDown": 1000000,
                    "transactions": [
                        { "amount": 75, "createdAt": "2024-05-15T10:00:00+00:00" }
                    ]
                }]
            }
        }"#;

        let envelope: GraphqlResponse = serde_json::from_str(body).unwrap();
        let user = &envelope.data.unwrap().user[0];
        assert_eq!(user.login, "alice");
        assert_eq!(user.total_up, 3_000_000);
        assert_eq!(user.transactions.len(), 1);
        assert_eq!(user.transactions[0].amount, 75);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{
            "login": "bob",
            "email": "bob@example.com",
            "auditRatio": 1.0,
            "totalUp": 0,
            "totalDown": 0
        }"#;

        let user: UserProfile = serde_json::from_str(body).unwrap();
        assert!(user.first_name.is_empty());
        assert!(user.transactions.is_empty());
    }
}
