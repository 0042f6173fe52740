//! Studygen server entry point

use clap::{Parser, Subcommand};
use studygen_lib::config::{ProviderConfig, SecretsConfig};
use studygen_lib::generation::GenerationService;
use studygen_lib::server::{run_server, ServerAppState};

/// HTTP gateway for LLM-generated study material
#[derive(Parser, Debug)]
#[command(name = "studygen", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 3070, env = "STUDYGEN_PORT")]
    port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "STUDYGEN_BIND")]
    bind: String,

    /// Allowed CORS origin (repeatable); all origins allowed when unset
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store the provider API token in ~/.studygen/secrets.toml
    SetToken {
        /// Bearer token for the LLM provider
        token: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Some(Command::SetToken { token }) = args.command {
        if let Err(e) = set_token(&token) {
            log::error!("{}", e);
            std::process::exit(1);
        }
        println!("API token saved");
        return;
    }

    let config = ProviderConfig::from_env();
    if !config.has_credential() {
        log::warn!(
            "No API token configured (STUDYGEN_API_TOKEN, GROQ_API_KEY, or \
             `studygen set-token`); only mock requests will succeed"
        );
    }

    let state = ServerAppState::new(GenerationService::new(config));

    let cors_origins = if args.cors_origins.is_empty() {
        None
    } else {
        Some(args.cors_origins)
    };

    if let Err(e) = run_server(args.port, &args.bind, state, cors_origins).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Persist the token, keeping any other secrets the file already carries
fn set_token(token: &str) -> anyhow::Result<()> {
    let mut secrets = SecretsConfig::load()?;
    secrets.api_token = Some(token.to_string());
    secrets.save()
}
