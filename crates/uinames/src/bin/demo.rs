//! Demonstration CLI for the uinames client.
//!
//! # Usage
//!
//! ```bash
//! # One random identity, then four extended male identities from Canada
//! cargo run -p uinames --bin uinames-demo
//!
//! # Different batch filters
//! cargo run -p uinames --bin uinames-demo -- --amount 10 --gender female --region sweden
//!
//! # Against a local stand-in for the service, with request logging
//! RUST_LOG=uinames=debug cargo run -p uinames --bin uinames-demo -- --base-url http://127.0.0.1:8080/api/
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use uinames::{
    ClientConfig, ClientError, FieldError, Gender, GenerationRequest, NamesClient, Person,
};

/// Print randomly generated identities from the uinames API.
#[derive(Debug, Parser)]
#[command(name = "uinames-demo", version)]
struct Args {
    /// Number of identities in the batch (1-500)
    #[arg(short = 'n', long, default_value_t = 4)]
    amount: u32,

    /// Gender filter for the batch
    #[arg(short, long, default_value = "male")]
    gender: String,

    /// Region filter for the batch
    #[arg(short, long, default_value = "canada")]
    region: String,

    /// Request only the basic field set for the batch
    #[arg(long)]
    no_extended: bool,

    /// Endpoint override (takes precedence over UINAMES_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (takes precedence over UINAMES_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,
}

/// Failures surfaced by the demo.
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Identity is missing a field to print: {0}")]
    Field(#[from] FieldError),
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                DemoError::Client(c) if c.is_client_error() => {
                    warn!(status = ?c.status(), "request parameters were rejected");
                }
                DemoError::Field(f) => {
                    warn!(error = %f, "identity does not match the requested field set");
                }
                DemoError::Client(_) => {}
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), DemoError> {
    let mut config = match args.base_url {
        Some(ref url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(secs) = args.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }
    let client = NamesClient::new(config)?;

    let person = client
        .generate_random_identity(&GenerationRequest::default())
        .await?;
    println!("========== A Single Person ==========");
    println!("{}", describe_basic(&person)?);

    let request = GenerationRequest::builder()
        .amount(args.amount)
        .gender(Gender::from(args.gender.as_str()))
        .region(args.region)
        .extended(!args.no_extended)
        .build()
        .map_err(ClientError::from)?;

    let people = client.generate_random_identities(&request).await?;
    println!("========== Multiple People ==========");
    for p in &people {
        let line = if request.extended {
            describe_extended(p)?
        } else {
            describe_basic(p)?
        };
        println!("{line}");
    }

    Ok(())
}

fn describe_basic(p: &Person) -> Result<String, FieldError> {
    Ok(format!("{} {} from {}", p.name()?, p.surname()?, p.region()?))
}

fn describe_extended(p: &Person) -> Result<String, FieldError> {
    Ok(format!(
        "{} {} {} from {}, age {}",
        p.title()?,
        p.name()?,
        p.surname()?,
        p.region()?,
        p.age()?
    ))
}
