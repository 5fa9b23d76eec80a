//! # Page Studio
//!
//! Command-line host for the landing page builder.

use clap::Parser;
use page_studio::{CliArgs, Command, Studio, StudioConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels
/// (default: `page_studio=info,page_renderer=info,page_core=info`).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("page_studio=info,page_renderer=info,page_core=info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let command = args.command.clone();
    let config = StudioConfig::from(args);
    tracing::debug!(?config, "studio config");

    let studio = match Studio::open(config).await {
        Ok(studio) => studio,
        Err(e) => {
            eprintln!("{}", e.user_notice());
            return Err(e.into());
        }
    };

    let result = match command {
        Command::Export { format } => studio.export(format).await.map(|path| {
            println!("{}", path.display());
        }),
        Command::Bundle { formats } => studio.bundle(&formats).await.map(|(path, outcome)| {
            for (format, reason) in &outcome.omitted {
                eprintln!("{} was not included: {reason}", format.label());
            }
            println!("{}", path.display());
        }),
        Command::Sections => {
            print!("{}", studio.describe());
            Ok(())
        }
        Command::State => studio.state_json().map(|json| println!("{json}")),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_notice());
        return Err(e.into());
    }
    Ok(())
}
