//! Task lifecycle state machine (spec §4.10, authoritative per DESIGN.md
//! Open Question decisions — the source enforces this only weakly).

use crate::entities::memory::TaskStatus;
use crate::error::{Error, Result};

/// Validate a task status transition, returning an error naming the illegal
/// transition rather than silently allowing it.
///
/// Transition table:
/// - `todo -> {in_progress, cancelled, on_hold}`
/// - `in_progress -> {completed, blocked, cancelled, on_hold}`
/// - `blocked -> {in_progress, cancelled}`
/// - `on_hold -> {in_progress, cancelled}`
/// - `completed` is terminal.
pub fn validate_transition(from: TaskStatus, to: TaskStatus) -> Result<()> {
    use TaskStatus::{Blocked, Cancelled, Completed, InProgress, OnHold, Todo};

    let allowed: &[TaskStatus] = match from {
        Todo => &[InProgress, Cancelled, OnHold],
        InProgress => &[Completed, Blocked, Cancelled, OnHold],
        Blocked => &[InProgress, Cancelled],
        OnHold => &[InProgress, Cancelled],
        Completed => &[],
        Cancelled => &[],
    };

    if allowed.contains(&to) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "illegal task transition {} -> {}; allowed from {} are: {}",
            from.as_str(),
            to.as_str(),
            from.as_str(),
            allowed
                .iter()
                .map(TaskStatus::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// `list_tasks` status shortcut expanding `active` into its member statuses.
#[must_use]
pub fn expand_status_shortcut(shortcut: &str) -> Option<Vec<TaskStatus>> {
    if shortcut == "active" {
        Some(vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Blocked,
        ])
    } else {
        None
    }
}
