use crate::types::{Member, Pod};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Where a member sits in a pod's linear workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The member is followed by `next`.
    Found {
        current: &'a Member,
        next: &'a Member,
    },
    /// The member is the last step; the workflow is complete.
    EndOfWorkflow { current: &'a Member },
    /// No member has the given id.
    NotAMember,
}

impl<'a> Resolution<'a> {
    pub fn current(&self) -> Option<&'a Member> {
        match *self {
            Resolution::Found { current, .. } | Resolution::EndOfWorkflow { current } => {
                Some(current)
            }
            Resolution::NotAMember => None,
        }
    }

    pub fn next(&self) -> Option<&'a Member> {
        match *self {
            Resolution::Found { next, .. } => Some(next),
            _ => None,
        }
    }
}

/// Locate `current_id` in `members` (exact match, first hit) and report what follows it.
pub fn resolve<'a>(members: &'a [Member], current_id: &str) -> Resolution<'a> {
    let Some(i) = members.iter().position(|m| m.id == current_id) else {
        return Resolution::NotAMember;
    };
    match members.get(i + 1) {
        Some(next) => Resolution::Found {
            current: &members[i],
            next,
        },
        None => Resolution::EndOfWorkflow {
            current: &members[i],
        },
    }
}

/// Member after `current_id`, or `None` when it is last *or* absent.
///
/// Callers that must tell those apart should use [`resolve`].
pub fn resolve_next<'a>(members: &'a [Member], current_id: &str) -> Option<&'a Member> {
    resolve(members, current_id).next()
}

// ---------------------------------------------------------------------------
// Workflow order consistency
// ---------------------------------------------------------------------------

/// A disagreement between `workflowOrder` and the roles of `members`.
///
/// Member order always wins; these are reported, never enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderWarning {
    LengthMismatch {
        roles: usize,
        members: usize,
    },
    RoleMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
}

impl std::fmt::Display for OrderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderWarning::LengthMismatch { roles, members } => write!(
                f,
                "workflowOrder lists {roles} roles but pod has {members} members"
            ),
            OrderWarning::RoleMismatch {
                position,
                expected,
                actual,
            } => write!(
                f,
                "position {position}: workflowOrder says '{expected}', member role is '{actual}'"
            ),
        }
    }
}

pub fn check_order(pod: &Pod) -> Vec<OrderWarning> {
    let mut warnings = Vec::new();
    if pod.workflow_order.len() != pod.members.len() {
        warnings.push(OrderWarning::LengthMismatch {
            roles: pod.workflow_order.len(),
            members: pod.members.len(),
        });
    }
    for (position, (expected, member)) in pod.workflow_order.iter().zip(&pod.members).enumerate() {
        if *expected != member.role {
            warnings.push(OrderWarning::RoleMismatch {
                position,
                expected: expected.clone(),
                actual: member.role.clone(),
            });
        }
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
