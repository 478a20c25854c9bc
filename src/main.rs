//! `quizdash` command-line client

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use quizdash::analytics::MonthLocale;
use quizdash::dashboard::{load_monthly_growth, load_player_leaderboard, overview_counts};
use quizdash::error::ErrorResponse;
use quizdash::import::{read_file, ImportFormat};
use quizdash::models::{EntityId, SignInRequest};
use quizdash::telemetry::init_tracing;
use quizdash::{ApiClient, AppError, ClientConfig, InMemorySessionProvider, Session};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// API base URL (defaults to NEXT_PUBLIC_API_BASE_URL)
    #[clap(long, global = true)]
    base_url: Option<String>,
    /// Bearer token sent with every request
    #[clap(long, global = true)]
    token: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as an administrator and print the session
    Signin {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Player leaderboard
    Stats,
    /// New users and quizzes over the last six months
    Growth {
        /// Month label language (en, fr)
        #[clap(long, default_value = "en")]
        locale: MonthLocale,
    },
    /// Entity counts
    Overview,
    /// Bulk import questions into a quiz
    ImportQuestions {
        #[clap(long)]
        quiz_id: EntityId,
        #[clap(long)]
        file: PathBuf,
        /// Parse the file as a JSON array whatever its extension
        #[clap(long)]
        json: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

fn build_client(cli: &Cli) -> Result<ApiClient, AppError> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = ClientConfig {
            timeout: config.timeout,
            ..ClientConfig::new(base_url.as_str())
        };
    }

    let session = match &cli.token {
        Some(token) => InMemorySessionProvider::with_session(Session::from_token(token.as_str(), Utc::now())),
        None => InMemorySessionProvider::new(),
    };

    Ok(ApiClient::new(config, Arc::new(session))?)
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let client = build_client(&cli)?;
    tracing::debug!(base_url = %client.config().base_url, "client ready");

    match cli.command {
        Commands::Signin { email, password } => {
            let response = client.auth().sign_in_admin(&SignInRequest { email, password }).await?;
            print_json(&Session::from_auth_response(response, Utc::now()))
        }
        Commands::Stats => print_json(&load_player_leaderboard(&client).await?),
        Commands::Growth { locale } => {
            let today = Utc::now().date_naive();
            print_json(&load_monthly_growth(&client, today, locale).await?)
        }
        Commands::Overview => print_json(&overview_counts(&client).await),
        Commands::ImportQuestions { quiz_id, file, json } => {
            let format = if json {
                ImportFormat::Json
            } else {
                ImportFormat::from_path(&file)
            };
            let dto = read_file(&file, quiz_id, format)?;
            let created = client.questions().create_bulk(&dto).await?;
            tracing::info!(quiz_id, created = created.len(), "questions imported");
            print_json(&created)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            if let Ok(out) = serde_json::to_string_pretty(&ErrorResponse::from(&err)) {
                eprintln!("{}", out);
            }
            ExitCode::FAILURE
        }
    }
}
