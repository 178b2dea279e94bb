use async_graphql::InputObject;

use crate::shared::infrastructure::credentials::OAuthToken;

#[derive(InputObject)]
pub struct GqlOAuthToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    /// Epoch milliseconds.
    pub expiry_date: Option<i64>,
}

impl From<GqlOAuthToken> for OAuthToken {
    fn from(token: GqlOAuthToken) -> Self {
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            token_type: token.token_type,
            expiry_date: token.expiry_date,
        }
    }
}

#[derive(InputObject)]
pub struct GqlShiftInput {
    /// Epoch milliseconds or an ISO-8601 string.
    pub clock_in: String,
    pub clock_out: Option<String>,
}
