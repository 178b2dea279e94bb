use chrono::Utc;

use crate::shared::infrastructure::credentials::{Credentials, OAuthToken, authorize};

pub const TEST_ACCESS_TOKEN: &str = "ya29.test-access-token";

pub fn valid_token() -> OAuthToken {
    OAuthToken {
        access_token: TEST_ACCESS_TOKEN.to_string(),
        token_type: Some("Bearer".to_string()),
        ..OAuthToken::default()
    }
}

pub fn test_credentials() -> Credentials {
    authorize(&valid_token(), Utc::now()).expect("fixture token must authorize")
}
