use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use recipe_api_cli::{
    cli::Cli,
    display::{errors::render_error, Printer, Theme},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let theme = Theme::detect(cli.no_color);

    let mut stdout = io::stdout();
    let mut printer = Printer::new(&mut stdout, theme);

    let outcome = recipe_api_cli::run(&cli.command, &config, &mut printer).await;

    let code = match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            // Nothing sensible is left to do if stdout itself is gone.
            let _ = render_error(&mut printer, &e);
            ExitCode::FAILURE
        }
    };

    let _ = stdout.flush();
    code
}
