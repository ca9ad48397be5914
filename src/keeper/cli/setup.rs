use clap::Parser;
use directories::ProjectDirs;
use keeper::error::{KeeperError, Result};
use std::path::PathBuf;

/// Overrides the data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "KEEPER_HOME";

/// Returns the version string, including the git hash for non-release builds.
/// Format for releases: "0.3.1"
/// Format for dev builds: "0.3.1@abc1234"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "keeper", bin_name = "keeper", version = get_version())]
#[command(about = "Personal assistant for contacts and notes", long_about = None)]
pub struct Cli {
    /// Directory holding the address book, the notebook and config.json
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Run one command and exit instead of starting the interactive loop
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// `--data-dir`, else `$KEEPER_HOME`, else the platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        resolve_data_dir(
            self.data_dir.clone(),
            std::env::var_os(HOME_ENV).map(PathBuf::from),
        )
    }
}

fn resolve_data_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or(env).filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "keeper", "keeper")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| KeeperError::Config("could not determine a data directory".into()))
}
