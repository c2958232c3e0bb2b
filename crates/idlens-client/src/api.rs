use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Wire values accepted by the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Username,
    Email,
    Phone,
    Name,
    Crypto,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Username => "username",
            QueryKind::Email => "email",
            QueryKind::Phone => "phone",
            QueryKind::Name => "name",
            QueryKind::Crypto => "crypto",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Blocking client for the identity-lookup API.
///
/// Non-2xx answers are classified here, once, into [`Error`] variants;
/// callers never look at status codes.
pub struct Client {
    agent: ureq::Agent,
    api_key: String,
    base_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Remaining credit balance. The endpoint answers with either a bare
    /// number or a mapping carrying a `credits` field; both pass through
    /// as the decoded value.
    pub fn credits(&self) -> Result<Value> {
        self.get_json("/misc/credits", &[])
    }

    /// One identity lookup. The decoded payload is handed to the
    /// rendering engine untouched.
    pub fn search(&self, kind: QueryKind, query: &str) -> Result<Value> {
        self.get_json("/v2/request", &[("type", kind.as_str()), ("query", query)])
    }

    fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .get(&url)
            .header("api-key", self.api_key.as_str())
            .header("accept", "application/json");
        for (key, value) in params {
            request = request.query(*key, *value);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(classify(status, body));
        }

        response
            .body_mut()
            .read_json::<Value>()
            .map_err(|err| Error::Decode(err.to_string()))
    }
}

fn classify(status: u16, body: String) -> Error {
    match status {
        401 => Error::AuthRejected,
        429 => Error::RateLimited,
        451 => Error::LegallyRestricted {
            details: if body.is_empty() {
                "No additional details provided.".to_string()
            } else {
                body
            },
        },
        _ => Error::Api {
            status,
            message: extract_message(&body),
        },
    }
}

/// A JSON body's `message` field wins over the raw body text.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
