use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{credentials::ValidatedKey, error::SheetsError};

pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Signs the RS256 assertion for the service-account JWT bearer flow.
pub fn sign_assertion(key: &ValidatedKey<'_>) -> Result<String, SheetsError> {
    let now = Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: key.client_email.to_string(),
        scope: SHEETS_READONLY_SCOPE.to_string(),
        aud: key.token_uri.to_string(),
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &signing_key)?)
}

/// Exchanges a signed assertion for a short-lived access token.
pub async fn fetch_access_token(
    http_client: &Client,
    key: &ValidatedKey<'_>,
) -> Result<String, SheetsError> {
    let assertion = sign_assertion(key)?;

    let response = http_client
        .post(key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "Google token exchange rejected");
        return Err(SheetsError::Token(status.as_u16()));
    }

    let token = response.json::<TokenResponse>().await?;
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    const TEST_PRIVATE_KEY: &str = include_str!("../testdata/test_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../testdata/test_key.pub.pem");

    #[test]
    fn assertion_carries_service_account_claims() {
        let key = ValidatedKey {
            client_email: "svc@proj.iam.gserviceaccount.com",
            private_key: TEST_PRIVATE_KEY,
            token_uri: "https://oauth2.googleapis.com/token",
        };

        let jwt = sign_assertion(&key).unwrap();

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&["https://oauth2.googleapis.com/token"]);
        let decoded = decode::<AssertionClaims>(
            &jwt,
            &DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.iss, "svc@proj.iam.gserviceaccount.com");
        assert_eq!(decoded.claims.scope, SHEETS_READONLY_SCOPE);
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 3600);
    }

    #[test]
    fn rejects_invalid_private_key() {
        let key = ValidatedKey {
            client_email: "svc@proj",
            private_key: "not a pem",
            token_uri: "https://oauth2.googleapis.com/token",
        };

        assert!(matches!(sign_assertion(&key), Err(SheetsError::Jwt(_))));
    }
}
