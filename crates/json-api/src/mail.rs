//! Test Email Handler

use std::sync::Arc;

use salvo::{http::StatusCode, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use storefront_app::notifications::NotificationError;

use crate::{errors::ApiError, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestEmailResponse {
    pub success: bool,

    pub message: String,

    /// Provider message id, when the provider returned one
    pub email_id: Option<String>,
}

fn into_api_error(error: &NotificationError) -> ApiError {
    let message = match error {
        NotificationError::NoProvider => "Email service not configured",
        NotificationError::NoRecipient => "Notification address not configured",
        NotificationError::SendFailed { .. } => "Failed to send test email",
    };

    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Test Email Handler
///
/// Sends a delivery check email to the operator address.
#[endpoint(tags("mail"), summary = "Send Test Email")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TestEmailResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let delivery = state
        .app
        .notifier
        .send_test_email()
        .await
        .map_err(|err| {
            error!(error = %err, "test email failed");

            into_api_error(&err)
        })?;

    let email_id = delivery.message_id().map(ToString::to_string);

    info!(email_id = email_id.as_deref().unwrap_or_default(), "test email sent");

    Ok(Json(TestEmailResponse {
        success: true,
        message: "Test email sent successfully".to_string(),
        email_id,
    }))
}
