//! AlertKit - command-line front end
//!
//! Inspect how errors classify and present, drive a live coordinator, and run
//! the presentation formatters.

use std::sync::Arc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use alertkit::cli::{Cli, Command, parse_error_arg};
use alertkit::config::Config;
use alertkit::{
    ChannelPresenter, Choice, Coordinator, ErrorCallbacks, ErrorClassifier, NavigationAction, PresentationBuilder,
    Resolution,
};
use presentfmt::{ByteUnit, number_to_digits, parse_seconds, to_hhmmss, to_tbgbmbkbb};

fn setup_logging(verbose: bool) -> Result<()> {
    // Logs go to stderr so command output stays clean
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Classify { error } => {
            let classifier = ErrorClassifier::new(config.coordinator.catalog());
            let reported = classifier.ingest(parse_error_arg(&error));
            println!("{}", classifier.key_for_error(&reported));
        }
        Command::Present { error } => {
            let classifier = ErrorClassifier::new(config.coordinator.catalog());
            let builder = PresentationBuilder::new(Arc::new(config.strings.clone()));
            let presentation = builder.build(&classifier.ingest(parse_error_arg(&error)));
            if presentation.is_empty() {
                println!("{}", "(no alert: resolves immediately)".dimmed());
            } else {
                println!("{}", serde_json::to_string_pretty(&presentation)?);
            }
        }
        Command::Simulate { errors, choice } => cmd_simulate(&config, &errors, choice.into()).await?,
        Command::Bytes { bytes, from } => {
            println!("{}", to_tbgbmbkbb(bytes, from.unwrap_or(ByteUnit::B)));
        }
        Command::Clock { seconds } => {
            let seconds = parse_seconds(&seconds)?;
            println!("{}", to_hhmmss(seconds));
        }
        Command::Digits { number, length, base } => {
            let digits = number_to_digits(number, length, base)?;
            let rendered: Vec<String> = digits.iter().map(u64::to_string).collect();
            println!("{}", rendered.join(" "));
        }
    }

    Ok(())
}

async fn cmd_simulate(config: &Config, errors: &[String], choice: Choice) -> Result<()> {
    let classifier = ErrorClassifier::new(config.coordinator.catalog());
    let (presenter, mut alerts) = ChannelPresenter::new();

    let coordinator = Coordinator::new(config.coordinator.clone(), Arc::new(presenter))
        .with_strings(Arc::new(config.strings.clone()))
        .with_navigator(Arc::new(|action: NavigationAction| match action {
            NavigationAction::Push { key, modal, modal_level } => {
                println!(
                    "{} push {} (modal: {}, level: {})",
                    "→".cyan(),
                    key.cyan(),
                    modal,
                    modal_level
                );
            }
        }));
    let (handle, task) = coordinator.spawn();

    let mut pending = Vec::with_capacity(errors.len());
    for raw in errors {
        let reported = classifier.ingest(parse_error_arg(raw));
        pending.push((raw.clone(), handle.submit(reported, ErrorCallbacks::new()).await?));
    }

    // Stand-in for the user: answer every alert the same way. Only started once
    // every report is queued
    let answering = tokio::spawn(async move {
        while let Some(alert) = alerts.recv().await {
            println!(
                "{} [{}] {}",
                "alert".yellow(),
                alert.request.key,
                alert.request.title.as_deref().unwrap_or_default()
            );
            if alert.responder.respond(choice).await.is_err() {
                break;
            }
        }
    });

    for (raw, resolution) in pending {
        let resolution = resolution.wait().await?;
        let label = match resolution {
            Resolution::Handled => resolution.to_string().green(),
            Resolution::Ignored => resolution.to_string().red(),
        };
        println!("{} {}", label, raw);
    }

    let metrics = handle.metrics().await?;
    println!(
        "{} reports, {} alerts, {} coalesced, {} resolved immediately",
        metrics.reports_received, metrics.alerts_presented, metrics.coalesced_reports, metrics.immediate_resolutions
    );

    handle.shutdown().await?;
    task.await.context("Coordinator task failed")?;
    answering.abort();
    Ok(())
}
