//! # Prompt SCM
//!
//! A git status segment for shell prompts: a compact change summary and a
//! configurable branch name.
//!
//! ## Overview
//!
//! The segment runs `git status --porcelain=2 --branch` once per render and
//! turns the output into:
//! - per-category change counts for the working tree and the index
//! - a branch name rewritten by regex extraction, glob labels and truncation
//!
//! ## Features
//!
//! - `git` (default): Reads HEAD via gix when no git executable is found
//! - `colors` (default): Enables terminal color output via owo-colors

/// Branch name formatting pipeline
pub mod branch;

/// Command-line argument parsing
pub mod cli;

/// Executable resolution and process invocation
pub mod command;

/// Settings file loading and merging
pub mod config;

/// Text and JSON rendering
pub mod display;

/// Error types for command execution
pub mod error;

/// Porcelain status parsing and the gix HEAD fallback
pub mod git;

/// Status counters and repository snapshot
pub mod models;

/// Segment orchestration
pub mod segment;
