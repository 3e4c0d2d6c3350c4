//! Convenient re-exports for all SeaORM entities.
//!
//! Usage: `use crate::database::seaorm::entities::prelude::*;`

pub use super::agent_session::Entity as AgentSession;
pub use super::agent_worktree_assignment::Entity as AgentWorktreeAssignment;
pub use super::api_key::Entity as ApiKey;
pub use super::branch::Entity as Branch;
pub use super::checkpoint::Entity as Checkpoint;
pub use super::collection::Entity as Collection;
pub use super::delegation::Entity as Delegation;
pub use super::error_pattern::Entity as ErrorPattern;
pub use super::error_pattern_match::Entity as ErrorPatternMatch;
pub use super::file_hash::Entity as FileHash;
pub use super::index_operation::Entity as IndexOperation;
pub use super::issue_comment::Entity as IssueComment;
pub use super::issue_label::Entity as IssueLabel;
pub use super::issue_label_assignment::Entity as IssueLabelAssignment;
pub use super::observation::Entity as Observation;
pub use super::organization::Entity as Organization;
pub use super::plan::Entity as Plan;
pub use super::plan_review::Entity as PlanReview;
pub use super::plan_version::Entity as PlanVersion;
pub use super::project::Entity as Project;
pub use super::project_issue::Entity as ProjectIssue;
pub use super::repository::Entity as Repository;
pub use super::session_summary::Entity as SessionSummary;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::tool_call::Entity as ToolCall;
pub use super::user::Entity as User;
pub use super::worktree::Entity as Worktree;
