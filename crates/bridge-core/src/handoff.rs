use crate::error::{BridgeError, Result};
use crate::message;
use crate::slack::SlackNotifier;
use crate::types::{NotificationRequest, NotificationResult};
use crate::workflow::{self, Resolution};

/// Handle a "task submitted" event: resolve the next member, post to Slack,
/// and report the outcome.
///
/// An unknown `currentMemberId` fails before anything is sent. A failed post
/// does not fail the call; it shows up as `success: false` in the result, and
/// `next_member_name` is reported either way.
pub async fn submit(
    request: &NotificationRequest,
    notifier: &SlackNotifier,
) -> Result<NotificationResult> {
    let pod = &request.pod;
    let resolution = workflow::resolve(&pod.members, &request.current_member_id);

    let Some(text) = message::compose(&pod.name, &resolution, &request.handoff_link) else {
        return Err(BridgeError::MemberNotFound(
            request.current_member_id.clone(),
        ));
    };

    for warning in workflow::check_order(pod) {
        tracing::warn!(pod = %pod.id, %warning, "workflow order does not match members");
    }

    let next_member_name = resolution.next().map(|m| m.name.clone());
    match resolution {
        Resolution::Found { current, next } => {
            tracing::info!(pod = %pod.id, from = %current.id, to = %next.id, "handoff");
        }
        Resolution::EndOfWorkflow { current } => {
            tracing::info!(pod = %pod.id, by = %current.id, "workflow complete");
        }
        Resolution::NotAMember => {}
    }

    let sent = notifier.dispatch(&text).await;

    Ok(NotificationResult {
        success: sent,
        message: message::status_line(sent).to_string(),
        next_member_name,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
