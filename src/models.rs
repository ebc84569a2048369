use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

// Query for GET /api/vibe
#[derive(Deserialize, Default)]
pub struct VibeQuery {
    pub mood: Option<String>,
}

// Query for GET /api/secret
#[derive(Deserialize, Default)]
pub struct SecretQuery {
    pub code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FortuneResponse {
    pub fortune: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JokeResponse {
    pub joke: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VibeResponse {
    pub mood: String,
    pub emoji: String,
    pub message: String,
}

// Body of an accepted smash and of a reset
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SmashResponse {
    pub smashes: u64,
    pub message: &'static str,
    #[serde(serialize_with = "serialize_millis")]
    pub last_smash_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SmashesResponse {
    pub smashes: u64,
    #[serde(serialize_with = "serialize_millis")]
    pub last_smash_at: Option<DateTime<Utc>>,
}

// Body of a 429 from /api/smash
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SmashRejectedResponse {
    pub smashes: u64,
    pub message: String,
    pub retry_after_ms: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// 2024-01-01T00:00:00.000Z, or null
fn serialize_millis<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(at) => serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
