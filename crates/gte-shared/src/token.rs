use std::fmt::Debug;

/// Opaque bearer credential returned by login
///
/// Sent as is (no scheme prefix) in the `Authorization` header
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<AuthToken> for String {
    fn from(value: AuthToken) -> Self {
        value.0
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("is_empty", &self.0.is_empty())
            .finish()
    }
}
