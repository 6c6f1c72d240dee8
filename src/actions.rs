//! Mutation Handlers
//!
//! One request per action: ask the user where needed, send, notify, and
//! report whether the affected listing should be reloaded.

use crate::api::{ApiClient, Transport};
use crate::dialogs::Dialogs;
use crate::error::{ApiResult, FormErrors};
use crate::forms::{AuthForm, CategoryForm, FormMode, ProductForm};
use crate::notify::{NoticeKind, Notify};
use crate::state::Tab;

/// Default refund reason when the prompt is left blank
const DEFAULT_REFUND_REASON: &str = "Customer request";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// User backed out before anything was sent
    Aborted,
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn should_reload(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

fn settle(notices: &impl Notify, result: ApiResult<()>, success: &str, failure: &str) -> Outcome {
    match result {
        Ok(()) => {
            log::info!("{}", success);
            notices.notify(NoticeKind::Success, success.to_string());
            Outcome::Succeeded
        }
        Err(e) => {
            log::warn!("{}: {}", failure, e);
            notices.notify(NoticeKind::Danger, format!("{}: {}", failure, e));
            Outcome::Failed
        }
    }
}

// ========================
// Products
// ========================

/// Create or update depending on whether the form carries an id
pub async fn submit_product<T: Transport>(
    api: &ApiClient<T>,
    notices: &impl Notify,
    form: &ProductForm,
) -> Result<Outcome, FormErrors> {
    let (mode, draft) = form.parse()?;
    let outcome = match mode {
        FormMode::Create => settle(notices, api.create_product(&draft).await, "Product created", "Save failed"),
        FormMode::Edit(id) => settle(notices, api.update_product(id, &draft).await, "Product updated", "Save failed"),
    };
    Ok(outcome)
}

pub async fn delete_product<T: Transport>(
    api: &ApiClient<T>,
    dialogs: &impl Dialogs,
    notices: &impl Notify,
    id: u32,
) -> Outcome {
    if !dialogs.confirm("Delete this product?") {
        return Outcome::Aborted;
    }
    settle(notices, api.delete_product(id).await, "Product deleted", "Delete failed")
}

// ========================
// Categories
// ========================

pub async fn submit_category<T: Transport>(
    api: &ApiClient<T>,
    notices: &impl Notify,
    form: &CategoryForm,
) -> Result<Outcome, FormErrors> {
    let (mode, draft) = form.parse()?;
    let outcome = match mode {
        FormMode::Create => settle(notices, api.create_category(&draft).await, "Category created", "Save failed"),
        FormMode::Edit(id) => settle(notices, api.update_category(id, &draft).await, "Category updated", "Save failed"),
    };
    Ok(outcome)
}

pub async fn delete_category<T: Transport>(
    api: &ApiClient<T>,
    dialogs: &impl Dialogs,
    notices: &impl Notify,
    id: u32,
) -> Outcome {
    if !dialogs.confirm("Delete this category?") {
        return Outcome::Aborted;
    }
    settle(notices, api.delete_category(id).await, "Category deleted", "Delete failed")
}

// ========================
// Orders
// ========================

/// Tracking number is optional; a dismissed prompt ships without one
pub async fn ship_order<T: Transport>(
    api: &ApiClient<T>,
    dialogs: &impl Dialogs,
    notices: &impl Notify,
    id: u32,
) -> Outcome {
    let tracking = dialogs.prompt("Tracking number (optional):").unwrap_or_default();
    settle(notices, api.ship_order(id, tracking.trim()).await, "Order shipped", "Ship failed")
}

/// Needs a non-empty reason
pub async fn cancel_order<T: Transport>(
    api: &ApiClient<T>,
    dialogs: &impl Dialogs,
    notices: &impl Notify,
    id: u32,
) -> Outcome {
    let reason = match dialogs.prompt("Reason for cancelling:") {
        Some(reason) if !reason.trim().is_empty() => reason,
        _ => return Outcome::Aborted,
    };
    settle(notices, api.cancel_order(id, reason.trim()).await, "Order cancelled", "Cancel failed")
}

pub async fn refund_order<T: Transport>(
    api: &ApiClient<T>,
    dialogs: &impl Dialogs,
    notices: &impl Notify,
    id: u32,
) -> Outcome {
    let Some(reason) = dialogs.prompt("Refund reason (optional):") else {
        return Outcome::Aborted;
    };
    let reason = match reason.trim() {
        "" => DEFAULT_REFUND_REASON,
        r => r,
    };
    settle(notices, api.refund_order(id, reason).await, "Order refunded", "Refund failed")
}

// ========================
// Sync
// ========================

/// Pull everything of one resource from the marketplace
pub async fn sync_all<T: Transport>(api: &ApiClient<T>, notices: &impl Notify, resource: Tab) -> Outcome {
    let noun = resource.label().to_lowercase();
    notices.notify(NoticeKind::Warning, format!("Syncing {}...", noun));

    let report = match resource {
        Tab::Products => api.sync_products().await,
        Tab::Categories => api.sync_categories().await,
        Tab::Orders => api.sync_orders().await,
    };
    let count = report.as_ref().map(|r| r.synced_count).unwrap_or_default();
    let success = format!("Synced {} {}", count, noun);
    settle(notices, report.map(|_| ()), &success, "Sync failed")
}

// ========================
// Credentials
// ========================

pub async fn verify_credentials<T: Transport>(
    api: &ApiClient<T>,
    notices: &impl Notify,
    form: &AuthForm,
) -> Outcome {
    settle(
        notices,
        api.verify_credentials(&form.credentials()).await,
        "Credentials verified",
        "Credential verification failed",
    )
}
