use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing admin token; pass --admin-token or set MOMENTS_ADMIN_TOKEN")]
    MissingAdminToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Content(#[from] catalog::ContentError),
    #[error("content validation failed with {count} issue(s)")]
    ValidationFailed { count: usize },
}

#[derive(Parser, Debug)]
#[command(name = "moments", about = "Eternal Moments content and admin CLI")]
struct Cli {
    #[arg(long, env = "MOMENTS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "MOMENTS_ADMIN_TOKEN")]
    admin_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    admin_token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Validate {
        #[arg(long, default_value = "content")]
        dir: PathBuf,
    },
    Ping,
    Inquiries,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        admin_token: cli.admin_token,
    };

    match cli.command {
        Command::Validate { dir } => run_validate(&dir),
        Command::Ping => run_ping(&ctx).await,
        Command::Inquiries => run_inquiries(&ctx).await,
    }
}

fn run_validate(dir: &Path) -> Result<(), CliError> {
    let content = catalog::SiteContent::load_dir(dir)?;
    let issues = content.validation_issues();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("issue: {issue}");
        }
        return Err(CliError::ValidationFailed {
            count: issues.len(),
        });
    }

    println!(
        "ok: {} photos, {} vendors, {} posts",
        content.photos.len(),
        content.vendors.len(),
        content.posts.len()
    );
    Ok(())
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_inquiries(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, "/api/inquiries").await?;
    print_json(&json)
}

async fn api_request(cli: &CliContext, path: &str) -> Result<Value, CliError> {
    let admin_token = cli
        .admin_token
        .as_deref()
        .ok_or(CliError::MissingAdminToken)?;

    let client = reqwest::Client::new();
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let response = client.get(&url).bearer_auth(admin_token).send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::Server {
            status: status.as_u16(),
            message: value.to_string(),
        });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
