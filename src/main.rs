//! osscz - switch the terminal color scheme for an SSH host
//!
//! Meant to be run from the SSH client, e.g. `LocalCommand osscz %n` or a
//! shell wrapper around `ssh`. `osscz RESET-SCHEME` restores the defaults.

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};

use osscz::platform::Platform;
use osscz::watchdog::{Started, Watchdog};
use osscz::{logging, version_line, Context, Invocation, Outcome, SchemeEmitter, Session};

/// Switch the terminal color scheme for an SSH host
#[derive(Parser, Debug)]
#[command(
    name = "osscz",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// SSH host name, or RESET-SCHEME / RESET-THEME
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    targets: Vec<String>,
}

fn main() -> ExitCode {
    let ctx = Context::from_process();
    if let Err(e) = logging::init(ctx.env()) {
        eprintln!("Warning: {}", e);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", version_line());
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let [target] = cli.targets.as_slice() else {
        println!("{}", version_line());
        error!("Gimme a single SSH host name to work on!");
        return ExitCode::FAILURE;
    };

    info!(
        "=== {} {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        version_line()
    );

    match run(&ctx, target) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(ctx: &Context, target: &str) -> anyhow::Result<ExitCode> {
    let invocation = Invocation::from_target(target);
    let parent_pid = Platform::process().parent_pid();
    let session = Session::new(ctx, parent_pid);

    let outcome = session
        .run(&invocation, &mut SchemeEmitter::stdout())
        .with_context(|| format!("Failed to switch scheme for '{}'", target))?;
    info!("Outcome: {:?}", outcome);

    if let Outcome::Applied { tracked_pid, .. } = outcome {
        match Watchdog::new(tracked_pid)
            .start()
            .context("Process watchdog failed")?
        {
            Started::Detached { watcher_pid } => {
                info!("Watcher {} tracks {}", watcher_pid, tracked_pid);
            }
            Started::Finished { phase } => {
                info!("Watcher finished after {}", phase);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    info!("All done, TTFN!");
    Ok(ExitCode::SUCCESS)
}
