#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sadhana_core::{
    AuthState, CurrentUser, DurableStore, KeyValueStore, MemoryStore, WelcomeConfig, WelcomeGate,
};
use tracing_subscriber::EnvFilter;

use crate::context::Launch;

/// Default log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "sadhana=info,sadhana_core=info,sadhana_ui=info";

/// Durable flag database inside the data directory
const DURABLE_STORE_FILE: &str = "welcome.redb";

/// Launch state, set once from command line
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Get the launch state (falls back to an in-memory, signed-out launch)
pub fn get_launch() -> &'static Launch {
    LAUNCH.get_or_init(|| Launch {
        gate: WelcomeGate::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new())),
        auth: AuthState::signed_out(),
        sign_in_as: None,
    })
}

/// Sadhana - daily practice companion
#[derive(Parser, Debug)]
#[command(name = "sadhana-desktop")]
#[command(about = "Sadhana - greets you once with a quote on your first visit")]
struct Args {
    /// Data directory for the durable welcome flag and config
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Display name of the signed-in user
    #[arg(short, long, default_value = "Sadhaka")]
    user_name: String,

    /// Avatar glyph (emoji) of the signed-in user
    #[arg(short, long)]
    avatar: Option<String>,

    /// Start signed out (sign in from the home page)
    #[arg(long)]
    signed_out: bool,

    /// Override the reveal delay from welcome.json
    #[arg(long)]
    reveal_delay_ms: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sadhana")
}

/// Open the durable store, falling back to memory so the app still starts.
fn open_durable_store(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    let path = data_dir.join(DURABLE_STORE_FILE);
    match DurableStore::open(&path)
        .with_context(|| format!("opening durable store at {}", path.display()))
    {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("{:#}; welcome flag will not persist across restarts", e);
            Arc::new(MemoryStore::new())
        }
    }
}

fn load_config(data_dir: &Path, args: &Args) -> WelcomeConfig {
    let mut config = match WelcomeConfig::load_from_dir(data_dir)
        .with_context(|| format!("loading config from {}", data_dir.display()))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{:#}; using defaults", e);
            WelcomeConfig::default()
        }
    };
    if let Some(delay) = args.reveal_delay_ms {
        config.reveal_delay_ms = delay;
    }
    config
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    let config = load_config(&data_dir, &args);
    let durable = open_durable_store(&data_dir);
    // One process is one session
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let gate = WelcomeGate::new(durable, session).with_config(config);

    let mut user = CurrentUser::new(args.user_name.clone());
    if let Some(avatar) = args.avatar.clone() {
        user = user.with_avatar(avatar);
    }
    let auth = if args.signed_out {
        AuthState::signed_out()
    } else {
        AuthState::signed_in(user.clone())
    };

    tracing::info!(
        "Starting as '{}' (signed in: {}) with data dir: {:?}",
        user.name,
        auth.is_authenticated,
        data_dir
    );

    let _ = LAUNCH.set(Launch {
        gate,
        auth,
        sign_in_as: Some(user),
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Sadhana")
            .with_inner_size(dioxus::desktop::LogicalSize::new(700.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
