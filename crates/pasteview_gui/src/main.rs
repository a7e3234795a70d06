//! Launcher for the native paste viewer.

use clap::Parser;
use pasteview_core::{Config, Route};
use pasteview_gui::LaunchOptions;

#[derive(Parser, Debug)]
#[command(name = "pasteview", about = "View a shared paste", version)]
struct Cli {
    /// Paste identifier or `/paste/{id}` path to open at startup
    target: Option<String>,

    /// API base URL (can also be set via PASTEVIEW_API_URL env var)
    #[arg(long, env = "PASTEVIEW_API_URL")]
    api_url: Option<String>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,
}

impl Cli {
    fn dark_mode(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn into_options(self, base: Config) -> LaunchOptions {
        let config = base
            .with_api_url(self.api_url.as_deref())
            .with_dark_mode(self.dark_mode());
        let initial_route = self
            .target
            .as_deref()
            .map(Route::from_user_input)
            .unwrap_or_default();
        LaunchOptions {
            config,
            initial_route,
        }
    }
}

fn main() {
    let options = Cli::parse().into_options(Config::from_env());
    let exit_code = run_and_report(|| pasteview_gui::run(options));
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("pasteview error: {}", err);
            1
        }
    }
}
