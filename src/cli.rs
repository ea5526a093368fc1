use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "prompt-scm", about = "Git status segment for shell prompts")]
pub struct Args {
    /// Repository directory (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Emit JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Settings file
    #[arg(long, env = "PROMPT_SCM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum branch length in characters, 0 for unlimited
    #[arg(long, env = "PROMPT_SCM_BRANCH_MAX_LENGTH")]
    pub branch_max_length: Option<usize>,

    /// Symbol appended to truncated branch names
    #[arg(long)]
    pub truncate_symbol: Option<String>,

    /// Show only the last path segment of the branch name
    #[arg(long)]
    pub short_branch_path: bool,

    /// Branch extraction pattern `regex[:group]`, may be repeated
    #[arg(long = "branch-pattern", value_name = "REGEX[:N]")]
    pub branch_pattern: Vec<String>,

    /// Branch label mapping `GLOB=LABEL`, may be repeated
    #[arg(long = "map-branch", value_name = "GLOB=LABEL")]
    pub map_branch: Vec<String>,

    /// Status format override `Category=TEMPLATE` (e.g. `Added=+%d`), may be repeated
    #[arg(long = "status-format", value_name = "NAME=TEMPLATE")]
    pub status_format: Vec<String>,

    /// Fall back to the native git when git.exe is missing on a WSL shared drive
    #[arg(long)]
    pub native_fallback: bool,

    /// Only show the branch, skip file counts
    #[arg(long)]
    pub no_status: bool,

    /// Debug mode: log resolution and executed commands to stderr
    #[arg(long, env = "PROMPT_SCM_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
