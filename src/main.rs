use clap::{Parser, Subcommand};
use coursereview_client::{
    router::Navigation, ApiClient, ClientConfig, ClientError, CookieJar, Navigator, RouteGuard,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "coursereview", about = "Course review client tools")]
struct Cli {
    /// Raw cookie string, e.g. `jwt=eyJ...`
    #[arg(long, env = "COURSEREVIEW_COOKIE", default_value = "")]
    cookie: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show where navigating to a path would lead
    Guard { path: String },
    Health,
    Courses,
    Ratings { course: String },
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env if present; real environment variables take precedence
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursereview_client=debug,coursereview=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = ClientConfig::from_env()?;
    let cookies = Arc::new(CookieJar::new(cli.cookie));

    info!(api_url = %config.api_url, "Starting course review client");

    match cli.command {
        Command::Guard { path } => {
            let navigator = Navigator::new(RouteGuard::from_config(&config, cookies)?);
            match navigator.navigate(&path).await {
                Navigation::Render(target) => println!(
                    "render {} ({}) params={:?}",
                    target.route.name, target.route.view, target.params
                ),
                Navigation::NotFound(path) => println!("not found: {}", path),
                Navigation::External(url) => println!("redirect: {}", url),
            }
        }
        Command::Health => {
            let client = ApiClient::from_config(&config, cookies);
            println!("{}", client.api_health().await?);
        }
        Command::Courses => {
            let client = ApiClient::from_config(&config, cookies);
            print_json(&client.fetch_courses().await?)?;
        }
        Command::Ratings { course } => {
            let client = ApiClient::from_config(&config, cookies);
            print_json(&client.fetch_ratings(&course).await?)?;
        }
        Command::Stats => {
            let client = ApiClient::from_config(&config, cookies);
            print_json(&client.fetch_stats().await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
