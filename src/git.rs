//! # Git Module
//!
//! Reads repository state for the prompt segment.
//!
//! ## Sources
//!
//! - `git status --porcelain=2 --branch` output, parsed by [`parse_porcelain_v2`]
//! - HEAD via the gix library when no git executable is available (`git` feature)

use std::collections::HashMap;

use crate::models::GitStatus;

/// Arguments for the status command whose output [`parse_porcelain_v2`] understands.
pub const STATUS_ARGS: &[&str] = &["status", "-unormal", "--branch", "--porcelain=2"];

/// Cheaper variant used when file counts are not wanted; only its headers are kept.
pub const HEAD_ARGS: &[&str] = &[
    "status",
    "--untracked-files=no",
    "--ignore-submodules",
    "--branch",
    "--porcelain=2",
];

/// Parse porcelain v2 status output.
///
/// Only branch headers and the two-letter `XY` codes are read; paths and the
/// remaining per-entry fields are skipped.
pub fn parse_porcelain_v2(output: &str) -> GitStatus {
    let mut status = GitStatus::default();
    for line in output.lines() {
        if let Some(header) = line.strip_prefix("# ") {
            parse_header(header, &mut status);
            continue;
        }
        let mut fields = line.splitn(3, ' ');
        match (fields.next(), fields.next()) {
            (Some("1" | "2"), Some(xy)) => {
                let mut codes = xy.chars();
                if let (Some(x), Some(y)) = (codes.next(), codes.next()) {
                    status.staging.add_code(x);
                    status.working.add_code(y);
                }
            }
            (Some("u"), Some(_)) => status.working.unmerged += 1,
            (Some("?"), Some(_)) => status.working.untracked += 1,
            _ => {}
        }
    }
    status
}

fn parse_header(header: &str, status: &mut GitStatus) {
    let Some((key, value)) = header.split_once(' ') else {
        return;
    };
    match key {
        "branch.oid" if value != "(initial)" => status.oid = Some(value.to_string()),
        "branch.head" if value != "(detached)" => status.head = Some(value.to_string()),
        "branch.upstream" => status.upstream = Some(value.to_string()),
        "branch.ab" => {
            for part in value.split_whitespace() {
                if let Some(n) = part.strip_prefix('+') {
                    status.ahead = n.parse().unwrap_or(0);
                } else if let Some(n) = part.strip_prefix('-') {
                    status.behind = n.parse().unwrap_or(0);
                }
            }
        }
        _ => {}
    }
}

/// Apply the same override templates to both sides of a status.
pub fn apply_formats(status: &mut GitStatus, formats: &HashMap<String, String>) {
    status.working = std::mem::take(&mut status.working).with_formats(formats.clone());
    status.staging = std::mem::take(&mut status.staging).with_formats(formats.clone());
}

/// Branch and commit straight from the object database, without counts.
#[cfg(feature = "git")]
pub fn read_head(start_dir: &std::path::Path) -> Option<GitStatus> {
    let repo = gix::discover(start_dir).ok()?;
    let mut head = repo.head().ok()?;
    let mut status = GitStatus::default();
    if let Some(name) = head.referent_name() {
        status.head = Some(name.shorten().to_string());
    }
    if let Ok(Some(id)) = head.try_peel_to_id() {
        status.oid = Some(id.to_hex().to_string());
    }
    Some(status)
}

#[cfg(not(feature = "git"))]
pub fn read_head(_start_dir: &std::path::Path) -> Option<GitStatus> {
    None
}
