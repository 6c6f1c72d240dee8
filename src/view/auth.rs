//! Credential status indicator

use crate::error::ApiError;
use crate::models::AuthStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIndicator {
    /// Lights the status dot
    pub connected: bool,
    pub text: String,
}

impl AuthIndicator {
    pub fn checking() -> Self {
        Self { connected: false, text: "Checking credentials...".to_string() }
    }

    pub fn from_result(result: &Result<AuthStatus, ApiError>) -> Self {
        match result {
            Ok(status) if status.has_credentials && status.credentials_valid => Self {
                connected: true,
                text: format!("Connected ({})", status.api_key_preview),
            },
            Ok(status) if status.has_credentials => Self {
                connected: false,
                text: "Credentials invalid, please re-enter".to_string(),
            },
            Ok(_) => Self {
                connected: false,
                text: "No API credentials configured".to_string(),
            },
            Err(_) => Self {
                connected: false,
                text: "Connection failed".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(has: bool, valid: bool) -> Result<AuthStatus, ApiError> {
        Ok(AuthStatus {
            has_credentials: has,
            credentials_valid: valid,
            api_key_preview: "abcd****".to_string(),
        })
    }

    #[test]
    fn test_three_credential_states() {
        let valid = AuthIndicator::from_result(&status(true, true));
        assert!(valid.connected);
        assert_eq!(valid.text, "Connected (abcd****)");

        let invalid = AuthIndicator::from_result(&status(true, false));
        assert!(!invalid.connected);
        assert_eq!(invalid.text, "Credentials invalid, please re-enter");

        let absent = AuthIndicator::from_result(&status(false, false));
        assert_eq!(absent.text, "No API credentials configured");
    }

    #[test]
    fn test_fetch_failure() {
        let failed = AuthIndicator::from_result(&Err(ApiError::Network("refused".into())));
        assert!(!failed.connected);
        assert_eq!(failed.text, "Connection failed");
    }
}
