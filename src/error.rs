//! Error Types
//!
//! Failures surfaced by the API client and by form validation.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Body was not the JSON shape we expected
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    /// API answered with `status != "success"`
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Rejected(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "unknown error".to_string()),
        )
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Field-level validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Errors to show after a submit attempt; empty unless validation failed
    pub fn after_submit<T>(result: &Result<T, FormErrors>) -> Self {
        match result {
            Ok(_) => Self::default(),
            Err(errors) => errors.clone(),
        }
    }

    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_submit_clears_field_errors() {
        let mut stale = FormErrors::default();
        stale.add("name", "Name is required");

        let failed: Result<(), FormErrors> = Err(stale.clone());
        assert_eq!(FormErrors::after_submit(&failed), stale);

        let saved: Result<(), FormErrors> = Ok(());
        assert!(FormErrors::after_submit(&saved).is_empty());
    }

    #[test]
    fn test_rejected_falls_back_to_unknown() {
        assert_eq!(ApiError::rejected(None).to_string(), "unknown error");
        assert_eq!(ApiError::rejected(Some("  ".into())).to_string(), "unknown error");
        assert_eq!(
            ApiError::rejected(Some("already shipped".into())).to_string(),
            "already shipped"
        );
    }
}
