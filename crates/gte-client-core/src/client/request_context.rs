use gte_shared::token::AuthToken;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::warn;

/// Per request view of the credentials to send
///
/// Built from the current session each time a request is created, so a
/// request made after sign out carries no token
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: Option<AuthToken>,
}

impl RequestContext {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self { token }
    }

    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some(token) = &self.token else {
            return request;
        };
        match HeaderValue::from_str(token.as_str()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.header(AUTHORIZATION, value)
            }
            Err(e) => {
                warn!(?e, "token is not a valid header value, sending without it");
                request
            }
        }
    }
}
