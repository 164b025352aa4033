use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    config::load_client_settings, EstimationController, FormField, LocationCatalog, Phase,
    ValuationClient,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Ask the valuation service for a home price estimate")]
struct Cli {
    /// Base URL of the valuation service; overrides estimator.toml and env.
    #[arg(long, global = true)]
    service_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the location catalog, one name per line.
    Locations,
    Estimate {
        #[arg(long, default_value = "")]
        sqft: String,
        #[arg(long, default_value = "")]
        bhk: String,
        #[arg(long, default_value = "")]
        bath: String,
        #[arg(long, default_value = "")]
        location: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
    let cli = Cli::parse();

    let mut settings = load_client_settings();
    if let Some(url) = cli.service_url {
        settings.service_url = url;
    }
    let client = ValuationClient::from_settings(&settings)?;
    tracing::info!(service_url = %client.base_url(), "using valuation service");

    match cli.command {
        Command::Locations => {
            let mut catalog = LocationCatalog::new();
            catalog.load_once(&client).await;
            for name in catalog.names() {
                println!("{name}");
            }
        }
        Command::Estimate {
            sqft,
            bhk,
            bath,
            location,
        } => {
            let mut controller = EstimationController::new();
            controller.set_field(FormField::TotalSqft, sqft);
            controller.set_field(FormField::Bhk, bhk);
            controller.set_field(FormField::Bath, bath);
            controller.set_field(FormField::Location, location);

            if !controller.can_submit() {
                println!("{}", missing_fields_message(&controller));
                return Ok(());
            }
            controller.submit_estimate(&client).await;
            println!("{}", result_panel(&controller));
        }
    }

    Ok(())
}

fn field_flag(field: FormField) -> &'static str {
    match field {
        FormField::TotalSqft => "--sqft",
        FormField::Bhk => "--bhk",
        FormField::Bath => "--bath",
        FormField::Location => "--location",
    }
}

fn missing_fields_message(controller: &EstimationController) -> String {
    let missing: Vec<&str> = FormField::ALL
        .into_iter()
        .filter(|field| controller.field(*field).is_empty())
        .map(field_flag)
        .collect();
    format!("Cannot estimate yet; fill in {}", missing.join(", "))
}

fn result_panel(controller: &EstimationController) -> String {
    match (controller.phase(), controller.result()) {
        (Phase::Succeeded, Some(result)) => format!("Estimated market value: \u{20b9}{result}"),
        (_, Some(result)) => result.to_string(),
        (_, None) => "Complete all property details to receive a price estimate.".to_string(),
    }
}
