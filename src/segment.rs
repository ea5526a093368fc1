use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::branch::BranchFormatter;
use crate::command::{CommandResolver, CommandRunner, Environment};
use crate::error::ScmError;
use crate::git::{HEAD_ARGS, STATUS_ARGS, apply_formats, parse_porcelain_v2, read_head};
use crate::models::GitStatus;

/// Everything the display layer needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentData {
    /// Branch as shown: formatted name, or `(detached@<sha>)`
    pub branch: String,
    pub status: GitStatus,
}

/// The VCS prompt segment: resolver, runner and formatter for one session.
pub struct ScmSegment<E: Environment, R: CommandRunner> {
    resolver: CommandResolver<E>,
    runner: R,
    formatter: BranchFormatter,
    formats: HashMap<String, String>,
    fetch_status: bool,
}

impl<E: Environment, R: CommandRunner> ScmSegment<E, R> {
    pub fn new(
        resolver: CommandResolver<E>,
        runner: R,
        formatter: BranchFormatter,
        formats: HashMap<String, String>,
        fetch_status: bool,
    ) -> Self {
        Self {
            resolver,
            runner,
            formatter,
            formats,
            fetch_status,
        }
    }

    /// `None` outside a repository or when git cannot be run at all.
    pub fn collect(&self, dir: &Path) -> Option<SegmentData> {
        let mut status = match self.read_status(dir) {
            Ok(status) => status,
            Err(ScmError::NotFound(tool)) => {
                log::debug!("{} unavailable, reading HEAD directly", tool);
                read_head(dir)?
            }
            Err(e) => {
                log::debug!("status unavailable: {}", e);
                return None;
            }
        };
        apply_formats(&mut status, &self.formats);
        Some(SegmentData {
            branch: self.display_branch(&status),
            status,
        })
    }

    fn read_status(&self, dir: &Path) -> Result<GitStatus, ScmError> {
        let command = self
            .resolver
            .command()
            .ok_or_else(|| ScmError::NotFound(self.resolver.tool().to_string()))?;
        let args = if self.fetch_status { STATUS_ARGS } else { HEAD_ARGS };
        let output = self.runner.run(command, args, dir)?;
        let mut status = parse_porcelain_v2(&output);
        if !self.fetch_status {
            status.working = Default::default();
            status.staging = Default::default();
        }
        Ok(status)
    }

    fn display_branch(&self, status: &GitStatus) -> String {
        match (&status.head, status.short_oid()) {
            (Some(head), _) => self.formatter.format_branch(head),
            (None, Some(oid)) => format!("(detached@{})", oid),
            (None, None) => String::new(),
        }
    }
}
