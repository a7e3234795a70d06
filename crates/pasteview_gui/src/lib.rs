//! Native paste viewer library entry point.
//!
//! Exposes a `run` helper so the launcher binary stays a thin argument parser.

mod app;
/// Backend worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::PasteViewApp;
use eframe::egui;
use pasteview_core::{Config, Route};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "pasteview=warn,pasteview_gui=info,pasteview_core=info";

/// Startup parameters resolved by the launcher.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config: Config,
    pub initial_route: Route,
}

fn suppress_vulkan_loader_debug() {
    if std::env::var("PASTEVIEW_KEEP_VK_DEBUG").is_ok() {
        return;
    }
    std::env::remove_var("VK_LOADER_DEBUG");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the viewer UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the configured API base address is unusable.
pub fn run(options: LaunchOptions) -> eframe::Result<()> {
    suppress_vulkan_loader_debug();
    init_tracing();

    let app = PasteViewApp::new(&options.config, options.initial_route)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("PasteView"),
        ..Default::default()
    };

    eframe::run_native(
        "PasteView",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
