//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::config::AppConfig;
use crate::notify::Notifier;

/// API client used by the running app
pub type Api = ApiClient<HttpTransport>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Api>,
    /// Banner shown at the top of the page
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(HttpTransport::new(config.api_base.clone()))),
            notifier: Notifier::new(config.notice_ttl_ms),
        }
    }

    /// Owned handle for use inside a spawned task
    pub fn api(&self) -> Api {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
