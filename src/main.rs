use anyhow::{Context, Result};
use std::path::PathBuf;

use prompt_scm::branch::BranchFormatter;
use prompt_scm::cli::Args;
use prompt_scm::command::{CommandResolver, ProcessRunner, SystemEnvironment};
use prompt_scm::config::{load_config, resolve_settings};
use prompt_scm::display::{print_json_output, print_text_output};
use prompt_scm::segment::ScmSegment;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("PROMPT_SCM_LOG", default_level),
    )
    .format_timestamp(None)
    .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let dir: PathBuf = match args.dir.clone() {
        Some(d) => d,
        None => std::env::current_dir().context("read current directory")?,
    };
    let file_cfg = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, file_cfg);
    log::debug!("settings: {:?}", settings);

    // One resolver per run; it memoizes the executable it picks
    let resolver = CommandResolver::new(
        "git",
        SystemEnvironment::new(dir.clone()),
        settings.native_fallback,
    );
    let segment = ScmSegment::new(
        resolver,
        ProcessRunner,
        BranchFormatter::new(&settings.branch),
        settings.status_formats,
        settings.fetch_status,
    );

    // Outside a repository the segment is simply empty
    let Some(data) = segment.collect(&dir) else {
        if args.json {
            println!("null");
        }
        return Ok(());
    };

    if args.json {
        print_json_output(&data)?;
    } else {
        print_text_output(&data);
    }
    Ok(())
}
