use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use flashgen_openai::config::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Debug, Parser, Clone)]
#[command(name = "flashgen", version, about = "Generate flashcards about any topic with a chat model")]
pub struct Cli {
    #[command(flatten)]
    pub endpoint: EndpointOpts,

    #[command(subcommand)]
    pub cmd: Command,
}

// Chat endpoint settings, shared by generate/tui/api.
#[derive(Debug, Args, Clone)]
pub struct EndpointOpts {
    /// API key for the chat endpoint; never has a default
    #[arg(long, env = "FLASHGEN_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "FLASHGEN_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[arg(long, env = "FLASHGEN_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, global = true)]
    pub max_tokens: u32,

    #[arg(long, default_value_t = DEFAULT_TEMPERATURE, global = true)]
    pub temperature: f32,

    /// Transport timeout in seconds (none by default)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate cards for a topic and print them
    Generate(GenerateCmd),
    /// Parse a saved model reply (file or `-` for stdin) without calling the endpoint
    Parse { path: PathBuf },
    /// Launch Terminal UI
    Tui(TuiCmd),
    /// Launch Axum HTTP API
    Api(ApiCmd),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateCmd {
    pub topic: String,
    /// Print cards as JSON instead of Q:/A: lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct TuiCmd {
    /// Log file for the TUI session (defaults to flashgen-tui.log in the temp dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl TuiCmd {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("flashgen-tui.log"))
    }
}

#[derive(Debug, Args, Clone)]
pub struct ApiCmd {
    /// Bind address (host:port)
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,
}
