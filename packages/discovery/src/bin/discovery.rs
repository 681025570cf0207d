//! CLI for running discovery queries against a JSON candidate file
//!
//! Prints results as JSON so the output can be piped into other tools.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use discovery_core::domains::discovery::slugify;
use discovery_core::{
    CleanupEvent, Community, Config, Discovery, DiscoveryQuery, GeoPoint, JsonFileStore,
    Locatable, Partner, Slugged, TimeWindowed,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "discovery")]
#[command(about = "Find communities, partners and cleanup events by location and slug")]
struct Cli {
    /// JSON file holding an array of candidates (overrides DISCOVERY_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Entity type stored in the data file
    #[arg(long, value_enum, default_value_t = Kind::Community, global = true)]
    kind: Kind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Community,
    Partner,
    Event,
}

#[derive(Subcommand)]
enum Commands {
    /// List active candidates, optionally limited to a radius around a point
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Radius in miles (defaults to DISCOVERY_DEFAULT_RADIUS_MILES when an origin is given)
        #[arg(long)]
        radius: Option<f64>,
        /// Evaluate active windows at this RFC 3339 instant instead of now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
        /// Sort by distance and include it in the output
        #[arg(long)]
        sorted: bool,
    },

    /// Resolve an active candidate by slug
    Resolve {
        slug: String,
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },

    /// Check whether a slug is free
    SlugAvailable {
        slug: String,
        /// Id of the candidate being renamed
        #[arg(long)]
        exclude: Option<Uuid>,
    },

    /// Suggest a free slug for a display name
    Suggest {
        name: String,
        #[arg(long)]
        exclude: Option<Uuid>,
    },

    /// Print the slug for a display name without checking availability
    Slugify { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,discovery_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Slugify { name } = &cli.command {
        println!("{}", json!({ "slug": slugify(name) }));
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let data_path = cli
        .data
        .clone()
        .or_else(|| config.data_path.clone())
        .ok_or_else(|| anyhow!("No data file: pass --data or set DISCOVERY_DATA_PATH"))?;

    tracing::debug!(path = %data_path.display(), "Using candidate file");

    match cli.kind {
        Kind::Community => run::<Community>(cli.command, data_path, &config).await,
        Kind::Partner => run::<Partner>(cli.command, data_path, &config).await,
        Kind::Event => run::<CleanupEvent>(cli.command, data_path, &config).await,
    }
}

async fn run<E>(command: Commands, data_path: PathBuf, config: &Config) -> Result<()>
where
    E: DeserializeOwned
        + Serialize
        + Clone
        + Send
        + Sync
        + 'static
        + TimeWindowed
        + Locatable
        + Slugged,
    E::Id: From<Uuid>,
{
    let discovery: Discovery<E, _> = Discovery::new(JsonFileStore::<E>::new(data_path));

    let output = match command {
        Commands::Nearby {
            lat,
            lon,
            radius,
            as_of,
            sorted,
        } => {
            let radius = radius.or_else(|| {
                (lat.is_some() && lon.is_some()).then_some(config.default_radius_miles)
            });

            match (sorted, lat, lon, radius) {
                (true, Some(lat), Some(lon), Some(radius)) => {
                    let hits = discovery
                        .find_nearby(
                            GeoPoint::new(lat, lon),
                            radius,
                            as_of.unwrap_or_else(Utc::now),
                        )
                        .await
                        .context("Nearby search failed")?;
                    serde_json::to_value(hits)?
                }
                (true, ..) => return Err(anyhow!("--sorted requires --lat and --lon")),
                (false, ..) => {
                    let query = DiscoveryQuery {
                        origin_latitude: lat,
                        origin_longitude: lon,
                        radius_miles: radius,
                        as_of,
                    };
                    let found = discovery
                        .find_enabled(&query)
                        .await
                        .context("Discovery query failed")?;
                    serde_json::to_value(found)?
                }
            }
        }
        Commands::Resolve { slug, as_of } => {
            let found = discovery
                .find_by_slug(&slug, as_of.unwrap_or_else(Utc::now))
                .await
                .context("Slug lookup failed")?;
            match found {
                Some(entity) => serde_json::to_value(entity)?,
                None => json!({ "found": false, "slug": slug }),
            }
        }
        Commands::SlugAvailable { slug, exclude } => {
            let exclude = exclude.map(<E::Id>::from);
            let available = discovery
                .is_slug_available(&slug, exclude.as_ref())
                .await
                .context("Slug availability check failed")?;
            json!({ "slug": slug, "available": available })
        }
        Commands::Suggest { name, exclude } => {
            let exclude = exclude.map(<E::Id>::from);
            let slug = discovery
                .suggest_slug(&name, exclude.as_ref())
                .await
                .context("Slug suggestion failed")?;
            json!({ "name": name, "slug": slug })
        }
        Commands::Slugify { name } => json!({ "slug": slugify(&name) }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
