//! # Config Module
//!
//! Settings file discovery and merging with command-line overrides.
//!
//! Precedence: CLI flag > environment (via clap) > settings file > defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::branch::BranchOptions;
use crate::cli::Args;

/// Contents of the JSON settings file. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SegmentConfig {
    #[serde(alias = "branchMaxLength")]
    pub branch_max_length: Option<usize>,
    #[serde(alias = "truncateSymbol")]
    pub truncate_symbol: Option<String>,
    #[serde(alias = "fullBranchPath")]
    pub full_branch_path: Option<bool>,
    #[serde(alias = "branchPatterns")]
    pub branch_patterns: Vec<String>,
    #[serde(alias = "mappedBranches")]
    pub mapped_branches: BTreeMap<String, String>,
    #[serde(alias = "statusFormats")]
    pub status_formats: HashMap<String, String>,
    #[serde(alias = "nativeFallback")]
    pub native_fallback: Option<bool>,
    #[serde(alias = "fetchStatus")]
    pub fetch_status: Option<bool>,
}

/// Fully merged settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub branch: BranchOptions,
    pub status_formats: HashMap<String, String>,
    pub native_fallback: bool,
    pub fetch_status: bool,
}

pub fn parse_config(content: &str) -> Result<SegmentConfig> {
    let cfg: SegmentConfig = serde_json::from_str(content)?;
    Ok(cfg)
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(b) = directories::BaseDirs::new() {
        candidates.push(b.config_dir().join("prompt-scm").join("config.json"));
        candidates.push(b.home_dir().join(".prompt-scm.json"));
    }
    candidates
}

/// Load the settings file.
///
/// An explicitly named file must exist and parse. Discovered files are best
/// effort: a malformed one is logged and skipped.
pub fn load_config(explicit: Option<&Path>) -> Result<SegmentConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        log::debug!("using config {}", path.display());
        return parse_config(&content).with_context(|| format!("parse config {}", path.display()));
    }
    for path in default_candidates() {
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|c| parse_config(&c))
        {
            Ok(cfg) => {
                log::debug!("using config {}", path.display());
                return Ok(cfg);
            }
            Err(e) => log::warn!("ignoring config {}: {}", path.display(), e),
        }
    }
    Ok(SegmentConfig::default())
}

/// Split `KEY=VALUE`; the key must be non-empty.
pub fn parse_key_value(s: &str) -> Option<(String, String)> {
    let (k, v) = s.split_once('=')?;
    if k.is_empty() {
        return None;
    }
    Some((k.to_string(), v.to_string()))
}

pub fn resolve_settings(args: &Args, file: SegmentConfig) -> Settings {
    let mut mapped_branches = file.mapped_branches;
    for entry in &args.map_branch {
        match parse_key_value(entry) {
            Some((glob, label)) => {
                mapped_branches.insert(glob, label);
            }
            None => log::warn!("ignoring --map-branch {:?}, expected GLOB=LABEL", entry),
        }
    }
    let mut status_formats = file.status_formats;
    for entry in &args.status_format {
        match parse_key_value(entry) {
            Some((name, template)) => {
                status_formats.insert(name, template);
            }
            None => log::warn!("ignoring --status-format {:?}, expected NAME=TEMPLATE", entry),
        }
    }
    let branch_patterns = if args.branch_pattern.is_empty() {
        file.branch_patterns
    } else {
        args.branch_pattern.clone()
    };

    Settings {
        branch: BranchOptions {
            branch_max_length: args
                .branch_max_length
                .or(file.branch_max_length)
                .unwrap_or(0),
            truncate_symbol: args
                .truncate_symbol
                .clone()
                .or(file.truncate_symbol)
                .unwrap_or_default(),
            full_branch_path: !args.short_branch_path && file.full_branch_path.unwrap_or(true),
            branch_patterns,
            mapped_branches,
        },
        status_formats,
        native_fallback: args.native_fallback || file.native_fallback.unwrap_or(false),
        fetch_status: !args.no_status && file.fetch_status.unwrap_or(true),
    }
}
