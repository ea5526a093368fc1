//! # Command Module
//!
//! Locates the VCS executable and runs it.
//!
//! On Windows, and inside a WSL session whose working directory lives on a
//! Windows drive (`/mnt/c/...`), the Windows build (`git.exe`) is preferred so
//! that worktree paths and file modes agree with the checkout. Optionally the
//! native Linux binary is used when the `.exe` is not reachable.

use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, ScmError};

/// Platform signals consulted when choosing an executable.
pub trait Environment {
    fn is_windows(&self) -> bool;
    fn in_wsl_shared_drive(&self) -> bool;
    fn has_command(&self, name: &str) -> bool;
}

/// [`Environment`] backed by the running process.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    cwd: PathBuf,
}

impl SystemEnvironment {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Environment for SystemEnvironment {
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn in_wsl_shared_drive(&self) -> bool {
        is_wsl() && is_windows_drive_path(&self.cwd)
    }

    fn has_command(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

fn is_wsl() -> bool {
    if cfg!(windows) {
        return false;
    }
    if std::env::var_os("WSL_DISTRO_NAME").is_some() {
        return true;
    }
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|s| s.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

/// `/mnt/<drive letter>` or anything below it
pub fn is_windows_drive_path(path: &Path) -> bool {
    let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("/mnt/")) else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && matches!(chars.next(), None | Some('/'))
}

/// Resolves the executable for one tool, once per session.
///
/// The answer (including "not found") is memoized on the resolver itself,
/// so construct one per render session and pass it to whoever runs commands.
pub struct CommandResolver<E: Environment> {
    tool: String,
    env: E,
    native_fallback: bool,
    resolved: OnceCell<Option<String>>,
}

impl<E: Environment> CommandResolver<E> {
    pub fn new(tool: &str, env: E, native_fallback: bool) -> Self {
        Self {
            tool: tool.to_string(),
            env,
            native_fallback,
            resolved: OnceCell::new(),
        }
    }

    /// Seed the resolver with an already known command name.
    pub fn with_command(self, command: &str) -> Self {
        let resolved = OnceCell::new();
        let _ = resolved.set(Some(command.to_string()));
        Self { resolved, ..self }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn command(&self) -> Option<&str> {
        self.resolved.get_or_init(|| self.resolve()).as_deref()
    }

    fn resolve(&self) -> Option<String> {
        let prefer_exe = self.env.is_windows() || self.env.in_wsl_shared_drive();
        let candidate = if prefer_exe {
            format!("{}.exe", self.tool)
        } else {
            self.tool.clone()
        };
        if self.env.has_command(&candidate) {
            log::debug!("resolved {} to {}", self.tool, candidate);
            return Some(candidate);
        }
        if prefer_exe && self.native_fallback && self.env.has_command(&self.tool) {
            log::debug!("{} not found, falling back to native {}", candidate, self.tool);
            return Some(self.tool.clone());
        }
        log::debug!("no executable found for {}", self.tool);
        None
    }
}

/// Runs a resolved command and hands back its standard output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<String>;
}

/// [`CommandRunner`] spawning real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<String> {
        let cmd_str = format!("{} {}", program, args.join(" "));
        log::debug!("$ {} [{}]", cmd_str.trim_end(), dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            // Keep prompt-time status from taking index.lock
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()
            .map_err(|source| ScmError::Spawn {
                command: cmd_str.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScmError::CommandFailed {
                command: cmd_str,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_windows_drive_path() {
        assert!(is_windows_drive_path(Path::new("/mnt/c")));
        assert!(is_windows_drive_path(Path::new("/mnt/d/src/repo")));
        assert!(!is_windows_drive_path(Path::new("/mnt/wsl/x")));
        assert!(!is_windows_drive_path(Path::new("/home/me/mnt/c")));
        assert!(!is_windows_drive_path(Path::new("/mnt/")));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_disables_optional_locks() {
        let out = ProcessRunner
            .run("sh", &["-c", "printf %s \"$GIT_OPTIONAL_LOCKS\""], Path::new("/"))
            .unwrap();
        assert_eq!(out, "0");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_reports_failure() {
        let err = ProcessRunner
            .run("sh", &["-c", "echo nope >&2; exit 3"], Path::new("/"))
            .unwrap_err();
        match err {
            ScmError::CommandFailed { stderr, .. } => assert_eq!(stderr, "nope"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
