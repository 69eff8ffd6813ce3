use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gatepass::feedback::{AlertFeedback, Feedback, StatusLineFeedback};
use gatepass::{ApiClient, ApiError, BackendConfig, Credentials, FileTokenStore, SessionContext, flows};

#[derive(Parser, Debug)]
#[command(name = "gatepass", about = "Username/password auth API client")]
struct Cli {
    /// Backend hostname; the base URL is derived from it and the fixed port.
    #[arg(long, env = "GATEPASS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Explicit base URL, overriding host derivation.
    #[arg(long, env = "GATEPASS_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register { username: String, password: String },
    /// Log in and store the session token.
    Login {
        username: String,
        password: String,
        /// Render feedback as an inline status line instead of an alert.
        #[arg(long)]
        inline: bool,
    },
    /// Show the profile of the logged-in user.
    Whoami,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            tracing::error!(%error, "request failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool, ApiError> {
    let config = match cli.base_url {
        Some(url) => BackendConfig::from_base_url(url),
        None => BackendConfig::from_host(&cli.host),
    };
    tracing::debug!(base_url = %config.base_url, "resolved backend");
    let api = ApiClient::new(config);

    match cli.command {
        Command::Register { username, password } => {
            let creds = Credentials { username, password };
            let mut feedback = AlertFeedback::stderr();
            finish(flows::register(&api, &creds, &mut feedback).await?)
        }
        Command::Login { username, password, inline } => {
            let creds = Credentials { username, password };
            let mut session = SessionContext::restore(FileTokenStore::from_env())?;

            let mut alert;
            let mut status_line;
            let feedback: &mut dyn Feedback = if inline {
                status_line = StatusLineFeedback::stdout();
                &mut status_line
            } else {
                alert = AlertFeedback::stderr();
                &mut alert
            };

            finish(flows::login(&api, &creds, &mut session, feedback).await?)
        }
        Command::Whoami => {
            let session = SessionContext::restore(FileTokenStore::from_env())?;
            let user = flows::current_user(&api, &session).await?;
            println!("Welcome, {}", user.username);
            Ok(true)
        }
    }
}

fn finish(destination: Option<flows::Destination>) -> Result<bool, ApiError> {
    match destination {
        Some(dest) => {
            println!("proceed to {dest}");
            Ok(true)
        }
        None => Ok(false),
    }
}
