use serde::Deserialize;

/// Envelope for `GET /2/users/by/username/{username}`.
///
/// X answers an unknown username with HTTP 200 and an `errors` array instead
/// of `data`, so both are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookupResponse {
    pub data: Option<User>,
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub username: String,
    pub name: String,
    pub public_metrics: Option<PublicMetrics>,
}

/// Counters returned when `user.fields` includes `public_metrics`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    pub tweet_count: Option<u64>,
    pub listed_count: Option<u64>,
}

/// A partial-error entry from the v2 API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub title: Option<String>,
    pub detail: Option<String>,
}
