use axum::extract::State;
use axum::Json;
use bridge_core::types::{NotificationRequest, NotificationResult};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/v1/notifications/submit — announce a completed step in Slack.
///
/// Responds 200 whether or not Slack accepted the message; check `success`.
pub async fn submit_notification(
    State(app): State<AppState>,
    Json(body): Json<NotificationRequest>,
) -> Result<Json<NotificationResult>, AppError> {
    let result = bridge_core::handoff::submit(&body, &app.notifier).await?;
    Ok(Json(result))
}
