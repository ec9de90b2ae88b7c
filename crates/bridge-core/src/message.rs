//! Slack message bodies for handoff notifications.
//!
//! Plain interpolation of caller-supplied fields: no escaping, no length cap.

use crate::types::Member;
use crate::workflow::Resolution;

pub const SENT: &str = "Slack notification sent successfully";
pub const NOT_SENT: &str = "Failed to send Slack notification";

pub fn handoff_message(project: &str, current: &Member, next: &Member, handoff_link: &str) -> String {
    format!(
        ":white_check_mark: *Task Completed - Handoff Ready*\n\
         \n\
         *Project:* {project}\n\
         *Completed by:* {completed_by}\n\
         *Handoff Link:* {handoff_link}\n\
         \n\
         :arrow_right: *Next in line:* {next_in_line}\n\
         *Status:* Pending handoff to {next_name}\n\
         \n\
         Please review the handoff link and proceed with your tasks.",
        completed_by = current.label(),
        next_in_line = next.label(),
        next_name = next.name,
    )
}

pub fn completion_message(project: &str, current: &Member, handoff_link: &str) -> String {
    format!(
        ":white_check_mark: *Project Completed!*\n\
         \n\
         *Project:* {project}\n\
         *Completed by:* {completed_by}\n\
         *Handoff Link:* {handoff_link}\n\
         \n\
         :tada: *Status:* All stages completed successfully!\n\
         \n\
         This project has been fully completed by the team.",
        completed_by = current.label(),
    )
}

/// Pick the template for a resolution. `None` for [`Resolution::NotAMember`].
pub fn compose(project: &str, resolution: &Resolution<'_>, handoff_link: &str) -> Option<String> {
    match *resolution {
        Resolution::Found { current, next } => {
            Some(handoff_message(project, current, next, handoff_link))
        }
        Resolution::EndOfWorkflow { current } => {
            Some(completion_message(project, current, handoff_link))
        }
        Resolution::NotAMember => None,
    }
}

/// Status line returned to the caller for a dispatch outcome.
pub fn status_line(sent: bool) -> &'static str {
    if sent {
        SENT
    } else {
        NOT_SENT
    }
}
