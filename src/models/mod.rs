pub mod git;
pub mod status;

pub use git::GitStatus;
pub use status::{Category, ScmStatus};
