use serde::Serialize;

use super::status::ScmStatus;

/// Repository state captured from one `git status` run.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitStatus {
    /// Branch name; `None` when HEAD is detached
    pub head: Option<String>,
    pub oid: Option<String>,
    pub upstream: Option<String>,
    pub ahead: u32,
    pub behind: u32,
    pub working: ScmStatus,
    pub staging: ScmStatus,
}

impl GitStatus {
    pub fn short_oid(&self) -> Option<String> {
        self.oid.as_ref().map(|id| id.chars().take(7).collect())
    }

    pub fn is_detached(&self) -> bool {
        self.head.is_none()
    }
}
