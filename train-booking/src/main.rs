use std::error::Error;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use train_booking::account::{AccountClient, AccountClientConfig, FeedbackRequest, LoginRequest};
use train_booking::booking::{BookingClient, BookingClientConfig, BookingSubmitter};
use train_booking::cache::{CachedStationClient, DirectoryCacheConfig};
use train_booking::domain::PaymentMethod;
use train_booking::fare::DEFAULT_RATE_PER_KM;
use train_booking::session::{SessionError, SessionStore, SessionStoreConfig};
use train_booking::stations::{StationClient, StationClientConfig, StationDirectory};

/// Base URL used when `TRAIN_BOOKING_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// State directory used when `TRAIN_BOOKING_STATE_DIR` is not set.
const DEFAULT_STATE_DIR: &str = ".train-booking";

#[derive(Parser)]
#[command(name = "train-booking")]
#[command(about = "Book train tickets from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        phone: String,
        email: String,
        name: String,
        password: String,
    },
    /// Destroy the current session
    Logout,
    /// List stations with the fare from the default origin
    Stations,
    /// Quote the fare between two stations
    Quote { from: String, to: String },
    /// Book a ticket from the default origin to a destination
    Book {
        /// Destination station (id, code, or name)
        to: String,
        /// Payment method: cash or credit-card
        #[arg(long, default_value = "credit-card")]
        payment: String,
    },
    /// List your bookings
    Bookings,
    /// List available tickets
    Tickets,
    /// Send feedback to the operator
    Feedback { message: String },
    /// Show or set the profile photo URI
    ProfilePhoto {
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let base_url =
        std::env::var("TRAIN_BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let state_dir =
        std::env::var("TRAIN_BOOKING_STATE_DIR").unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());

    let store = SessionStore::new(SessionStoreConfig::new(state_dir));

    if let Err(e) = run(cli.command, &base_url, &store).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, base_url: &str, store: &SessionStore) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Login {
            phone,
            email,
            name,
            password,
        } => {
            let client = AccountClient::new(AccountClientConfig::new(base_url))?;
            let response = client
                .login(&LoginRequest {
                    phone,
                    email,
                    name,
                    password,
                })
                .await?;

            let message = response.message.clone();
            let session = response.into_session(Utc::now());
            store.save_session(&session)?;

            println!("{}", message.unwrap_or_else(|| "Logged in.".to_string()));
            println!("Welcome, {}", session.customer.name);
        }

        Commands::Logout => {
            store.clear_session()?;
            println!("Logged out.");
        }

        Commands::Stations => {
            let directory = fetch_directory(base_url).await?;
            let origin = directory.central();

            println!("{} stations (fares from {}):", directory.len(), origin.name);
            for station in directory.iter() {
                let fare = directory.quote(&origin.id, &station.id, DEFAULT_RATE_PER_KM);
                println!(
                    "  {:<6} {:<30} {}, {}  {:>10.2}",
                    station.code, station.name, station.city, station.region, fare
                );
            }
        }

        Commands::Quote { from, to } => {
            let directory = fetch_directory(base_url).await?;
            let origin = resolve(&directory, &from)?;
            let destination = resolve(&directory, &to)?;

            let fare = directory.quote(&origin.id, &destination.id, DEFAULT_RATE_PER_KM);
            println!("{} -> {}: {:.2}", origin.name, destination.name, fare);
        }

        Commands::Book { to, payment } => {
            let payment_method: PaymentMethod = payment.parse()?;

            let directory = fetch_directory(base_url).await?;
            let origin = directory.central();
            let destination = resolve(&directory, &to)?;

            let fare = directory.quote(&origin.id, &destination.id, DEFAULT_RATE_PER_KM);

            let client = BookingClient::new(BookingClientConfig::new(base_url))?;
            let mut submitter = BookingSubmitter::new(client);

            let booking = submitter
                .submit(store, &origin.id, &destination.id, payment_method, fare)
                .await?;

            println!("Booking created: {}", booking.booking_id);
            println!(
                "  {} -> {}  seat {}  {:.2} ({})",
                origin.name,
                destination.name,
                booking.seat_number,
                booking.total_cost,
                booking.payment_method
            );
        }

        Commands::Bookings => {
            let session = store.load_session()?.ok_or(SessionError::NoSession)?;

            let client = BookingClient::new(BookingClientConfig::new(base_url))?;
            let bookings = client
                .bookings_for_customer(&session.access_token, &session.customer.id)
                .await?;

            if bookings.is_empty() {
                println!("No bookings yet.");
            }
            for b in bookings {
                println!(
                    "  {}  {} -> {}  {:.2} ({})",
                    b.id, b.from.name, b.to.name, b.total_cost, b.payment_method
                );
            }
        }

        Commands::Tickets => {
            let client = BookingClient::new(BookingClientConfig::new(base_url))?;
            let tickets = client.fetch_tickets().await?;

            if tickets.is_empty() {
                println!("No tickets available.");
            }
            for t in tickets {
                println!(
                    "  {}  {} ({})  seat {}  {}  {:.2}  [{}]",
                    t.id, t.train.name, t.train.train_number, t.seat_number, t.class_type, t.price,
                    t.status
                );
            }
        }

        Commands::Feedback { message } => {
            let session = store.load_session()?;
            let (name, email) = match session {
                Some(s) => (Some(s.customer.name), Some(s.customer.email)),
                None => (None, None),
            };

            let client = AccountClient::new(AccountClientConfig::new(base_url))?;
            client
                .submit_feedback(&FeedbackRequest {
                    name,
                    email,
                    message,
                })
                .await?;

            println!("Thanks for the feedback!");
        }

        Commands::ProfilePhoto { set } => match set {
            Some(uri) => {
                store.set_profile_photo(&uri)?;
                println!("Profile photo updated.");
            }
            None => match store.profile_photo()? {
                Some(uri) => println!("{uri}"),
                None => println!("No profile photo set."),
            },
        },
    }

    Ok(())
}

/// Fetch a directory snapshot through the TTL cache.
async fn fetch_directory(base_url: &str) -> Result<std::sync::Arc<StationDirectory>, Box<dyn Error>> {
    let client = StationClient::new(StationClientConfig::new(base_url))?;
    let cached = CachedStationClient::new(client, &DirectoryCacheConfig::default());
    Ok(cached.directory().await?)
}

/// Resolve a station query (id, code, or name) against the directory.
fn resolve<'a>(
    directory: &'a StationDirectory,
    query: &str,
) -> Result<&'a train_booking::domain::Station, Box<dyn Error>> {
    directory
        .find(query)
        .ok_or_else(|| format!("unknown station: {query}").into())
}
