//! Credential Endpoints

use crate::error::{ApiError, ApiResult};
use crate::models::{AuthStatus, Credentials, VerifyResult};

use super::{ApiClient, ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn auth_status(&self) -> ApiResult<AuthStatus> {
        self.fetch(ApiRequest::get("/api/auth/status")).await
    }

    /// Verify and store marketplace credentials.
    ///
    /// Succeeds only when the API both answers `success` and reports the
    /// credentials as valid.
    pub async fn verify_credentials(&self, credentials: &Credentials) -> ApiResult<()> {
        let envelope = self
            .envelope(ApiRequest::post("/api/auth/verify").json(credentials)?)
            .await?;
        let success = envelope.is_success();
        let top_message = envelope.message.clone();
        let verdict = envelope.decode_data::<VerifyResult>().ok();

        match verdict {
            Some(result) if success && result.valid => Ok(()),
            Some(result) => Err(ApiError::rejected(result.message.or(top_message))),
            None => Err(ApiError::rejected(top_message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::RecordingTransport;
    use crate::api::ApiClient;
    use crate::error::ApiError;
    use crate::models::Credentials;
    use futures::executor::block_on;

    fn credentials() -> Credentials {
        Credentials {
            api_key: "key".into(),
            secret_key: "secret".into(),
            salt_key: "salt".into(),
        }
    }

    #[test]
    fn test_verify_requires_valid_flag() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"success","data":{"valid":false,"message":"signature mismatch"}}"#);
        let api = ApiClient::new(transport);
        let err = block_on(api.verify_credentials(&credentials())).unwrap_err();
        assert_eq!(err, ApiError::Rejected("signature mismatch".to_string()));

        let body = api.transport().requests()[0].body.clone().unwrap();
        assert_eq!(body["salt_key"], "salt");
    }

    #[test]
    fn test_verify_error_without_data_uses_top_message() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"error","message":"Missing required fields"}"#);
        let api = ApiClient::new(transport);
        let err = block_on(api.verify_credentials(&credentials())).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_auth_status_decodes() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"success","data":{"has_credentials":true,"credentials_valid":false,"api_key_preview":"abcd****"}}"#);
        let api = ApiClient::new(transport);
        let status = block_on(api.auth_status()).unwrap();
        assert!(status.has_credentials);
        assert!(!status.credentials_valid);
    }
}
