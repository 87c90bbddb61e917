use anyhow::Context;
use clap::{Parser, Subcommand};
use flightdesk_app::utils::format_price;
use flightdesk_backend::BackendClient;
use flightdesk_kernel::settings::Settings;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(
    name = "flightdesk",
    version,
    about = "Flight booking front-end and backend console"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web front-end
    Serve,
    /// List flights between two places
    Search {
        #[arg(long)]
        source: String,
        #[arg(long)]
        destination: String,
        /// Print the backend response as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show a booking by its PNR
    Booking {
        pnr: String,
        /// Print the backend response as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load FLIGHTDESK settings")?;

    match cli.command {
        Command::Serve => {
            flightdesk_telemetry::init(&settings.telemetry)?;
            flightdesk_app::serve(&settings, CancellationToken::new()).await
        }
        Command::Search {
            source,
            destination,
            json,
        } => {
            let backend = BackendClient::new(&settings.backend)?;
            let flights = backend
                .search_flights(&source, &destination)
                .await
                .with_context(|| format!("search {source} → {destination} failed"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&flights)?);
            } else if flights.is_empty() {
                println!("No flights found.");
            } else {
                for flight in &flights {
                    println!(
                        "{}\t{} → {}\t{}\t{}\tflight {}",
                        flight.airline,
                        flight.source,
                        flight.destination,
                        flight.departure_time,
                        format_price(&settings.display.currency_symbol, flight.price),
                        flight.flight_id,
                    );
                }
            }
            Ok(())
        }
        Command::Booking { pnr, json } => {
            let backend = BackendClient::new(&settings.backend)?;
            let details = backend
                .fetch_booking(&pnr)
                .await
                .with_context(|| format!("lookup of booking {pnr} failed"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("PNR:         {}", details.pnr);
                println!("Passenger:   {}", details.passenger_name);
                println!("Flight:      {}", details.flight_id);
                println!("Seats:       {}", details.seats);
                println!(
                    "Total Price: {}",
                    format_price(&settings.display.currency_symbol, details.total_price)
                );
            }
            Ok(())
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}
