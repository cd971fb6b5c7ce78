use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use encoding_rs::Encoding;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use meetup_server::cli::run_interactive;
use meetup_server::ingest::{LoaderConfig, load_dataset, parse_encoding};
use meetup_server::planner::PlannerConfig;
use meetup_server::web::{AppState, create_router};

/// Find a fair MRT meeting station and rank the attractions around it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct DataArgs {
    /// Station-to-station travel-time table (CSV)
    #[arg(long, env = "MEETUP_TRAVEL_TIMES", default_value = "data/travel_times.csv", global = true)]
    travel_times: PathBuf,

    /// Attraction table (CSV)
    #[arg(long, env = "MEETUP_ATTRACTIONS", default_value = "data/attractions.csv", global = true)]
    attractions: PathBuf,

    /// Encodings to try when reading the tables, in order
    #[arg(
        long,
        env = "MEETUP_ENCODINGS",
        value_delimiter = ',',
        default_value = "utf-8,cp950",
        global = true
    )]
    encodings: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the web interface and JSON API
    Serve {
        /// Address to listen on
        #[arg(long, env = "MEETUP_BIND", default_value = "127.0.0.1:3000")]
        bind: String,

        /// Directory of static assets
        #[arg(long, env = "MEETUP_STATIC_DIR", default_value = "static")]
        static_dir: String,
    },

    /// Ask for the group on the terminal and print recommendations
    Ask,
}

impl DataArgs {
    fn loader_config(&self) -> Result<LoaderConfig, String> {
        let encodings = self
            .encodings
            .iter()
            .map(|label| parse_encoding(label).map_err(|e| e.to_string()))
            .collect::<Result<Vec<&'static Encoding>, _>>()?;

        Ok(LoaderConfig::new(&self.travel_times, &self.attractions).with_encodings(encodings))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let loader = match cli.data.loader_config() {
        Ok(loader) => loader,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Data problems are fatal: nothing useful can be answered without both tables.
    let dataset = match load_dataset(&loader) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "failed to load data");
            return ExitCode::FAILURE;
        }
    };

    let config = PlannerConfig::default();

    match cli.command {
        Command::Ask => match run_interactive(&dataset, &config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "session ended");
                ExitCode::FAILURE
            }
        },
        Command::Serve { bind, static_dir } => {
            let state = AppState::new(dataset, config);
            let app = create_router(state, &static_dir);

            let listener = match tokio::net::TcpListener::bind(&bind).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!(%bind, error = %e, "failed to bind");
                    return ExitCode::FAILURE;
                }
            };

            info!("Meetup planner listening on http://{bind}");
            info!("  GET  /               - Participant form");
            info!("  POST /recommend      - Form submission (HTML or JSON)");
            info!("  POST /api/recommend  - JSON recommendation");
            info!("  GET  /api/stations   - Start stations");
            info!("  GET  /api/tags       - Preference tags");
            info!("  GET  /health         - Health check");

            match axum::serve(listener, app).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!(error = %e, "server stopped");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
