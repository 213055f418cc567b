use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::DiagnosisClient;
use crossbeam_channel::unbounded;
use form_controller::{
    drain_events, page::ids, symptom_checker_page, FormController, Notifier, SubmitOutcome,
    UiEvent,
};
use shared::catalog::Symptom;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Submit symptom severities to a diagnosis server and print the results")]
struct Args {
    /// Diagnosis server base URL; overrides config and environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Body temperature in °C.
    #[arg(long)]
    temperature: Option<String>,
    /// Symptom severity as `name=value`, e.g. `--symptom fever=8`. Repeatable.
    #[arg(long = "symptom", value_parser = parse_symptom_arg)]
    symptoms: Vec<(Symptom, String)>,
    /// Print the whole page instead of only the results region.
    #[arg(long)]
    full_page: bool,
}

fn parse_symptom_arg(raw: &str) -> Result<(Symptom, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let symptom = name.parse::<Symptom>().map_err(|err| err.to_string())?;
    Ok((symptom, value.trim().to_string()))
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    let client = DiagnosisClient::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    tracing::info!(endpoint = %client.endpoint(), "diagnosis endpoint configured");

    let (ui_tx, ui_rx) = unbounded::<UiEvent>();
    if let Some(temperature) = args.temperature {
        ui_tx.send(UiEvent::TemperatureInput(temperature))?;
    }
    for (symptom, value) in args.symptoms {
        ui_tx.send(UiEvent::SliderInput { symptom, value })?;
    }
    ui_tx.send(UiEvent::Submit)?;

    let mut controller = FormController::bind(symptom_checker_page());
    let mut notifier = ConsoleNotifier;
    let outcome = drain_events(&mut controller, &ui_rx, &client, &mut notifier).await;

    match outcome {
        Some(SubmitOutcome::Rendered) => {
            let document = controller.document();
            let html = if args.full_page {
                document.to_html()
            } else {
                let results = document
                    .get_element_by_id(ids::RESULTS)
                    .ok_or_else(|| anyhow!("page has no results region"))?;
                document.outer_html(results)
            };
            println!("{html}");
            Ok(())
        }
        Some(SubmitOutcome::Failed(err)) => Err(anyhow!(err).context("diagnosis failed")),
        Some(SubmitOutcome::Ignored) | None => Err(anyhow!("no submission was processed")),
    }
}
