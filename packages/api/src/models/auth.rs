use serde::{Deserialize, Serialize};

use super::is_blank;
use crate::error::ApiError;

/// JSON body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(ApiError::Validation(
                "Both email and password are required.".to_string(),
            ));
        }
        Ok(())
    }
}

/// JSON body of `POST /auth/google-auth`: the Google ID-token credential.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoogleCredential {
    pub token: String,
}

/// Reply of both login endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_required() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: String::new(),
        };
        assert_eq!(
            creds.validate().unwrap_err().to_string(),
            "Both email and password are required."
        );

        let creds = Credentials {
            email: "a@b.c".into(),
            password: "secret".into(),
        };
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_auth_response_partial() {
        let reply: AuthResponse = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        assert_eq!(reply.token.as_deref(), Some("t"));
        assert!(reply.message.is_none());
    }
}
