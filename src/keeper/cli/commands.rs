use super::prompt::TermPrompter;
use super::render::{print_help, print_result};
use super::repl::run_loop;
use super::setup::Cli;
use chrono::Local;
use clap::Parser;
use keeper::api::{parse_line, resolve, KeeperApi};
use keeper::commands::Command;
use keeper::config::KeeperConfig;
use keeper::error::Result;
use keeper::store::fs::FileStore;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive for log output.
const LOG_ENV: &str = "KEEPER_LOG";

pub(super) struct AppContext {
    pub api: KeeperApi<FileStore>,
    pub config: KeeperConfig,
}

/// Whether the session goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Stop,
}

/// Owns the session's context and saves it if the session unwinds before
/// `finish` runs.
pub(super) struct SaveGuard {
    pub ctx: AppContext,
    saved: bool,
}

impl SaveGuard {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx, saved: false }
    }

    pub fn finish(mut self) -> Result<()> {
        self.saved = true;
        self.ctx.api.save()
    }
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        if self.saved {
            return;
        }
        if let Err(e) = self.ctx.api.save() {
            error!(error = %e, "could not save after an aborted session");
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut session = SaveGuard::new(init_context(&cli)?);

    let outcome = if cli.command.is_empty() {
        run_loop(&mut session.ctx)
    } else {
        let mut prompter = TermPrompter::new();
        execute_line(&mut session.ctx, &cli.command.join(" "), &mut prompter).map(|_| ())
    };

    // Save even when the session ended on an error.
    let saved = session.finish();
    if let (Err(_), Err(e)) = (&outcome, &saved) {
        error!(error = %e, "could not save after a failed session");
    }
    outcome?;
    saved
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "keeper=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli.data_dir()?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = KeeperConfig::load(&data_dir)?;
    let store = FileStore::with_config(data_dir, &config);
    let api = KeeperApi::open(store)?;

    Ok(AppContext { api, config })
}

/// Runs one input line: resolves the command, executes it, prints the
/// outcome.
pub(super) fn execute_line(
    ctx: &mut AppContext,
    line: &str,
    prompter: &mut TermPrompter,
) -> Result<Flow> {
    let Some((name, args)) = parse_line(line) else {
        return Ok(Flow::Continue);
    };

    let command = match resolve(&name) {
        Ok(command) => command,
        Err(invalid) => {
            debug!(command = %name, "unknown command");
            print_result(&invalid);
            return Ok(Flow::Continue);
        }
    };

    let today = Local::now().date_naive();
    let result = ctx.api.execute(command, &args, prompter, today)?;

    if command == Command::Help {
        print_help();
    }
    print_result(&result);

    Ok(if command == Command::Exit {
        Flow::Stop
    } else {
        Flow::Continue
    })
}
