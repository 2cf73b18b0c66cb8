use std::path::Path;
use std::process::ExitCode;

use bramon_gallery::bramon::BramonClient;
use bramon_gallery::radiants::RadiantCatalog;
use bramon_gallery::web::{run_server, AppState, Config};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bramon-gallery")]
#[command(about = "BRAMON meteor station and capture gallery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the gallery pages and JSON API
    Serve {
        #[arg(short, long, default_value = "bramon.yaml")]
        config: String,
        /// Overrides `bramon.api_key` from the config file
        #[arg(long, env = "BRAMON_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Parse a radiant file and list its entries
    Radiants { file: String },
    /// Fetch the station list with the configured API key
    Stations {
        #[arg(short, long, default_value = "bramon.yaml")]
        config: String,
        #[arg(long, env = "BRAMON_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, api_key } => serve(&config, api_key),
        Commands::Radiants { file } => radiants(&file),
        Commands::Stations { config, api_key } => stations(&config, api_key),
    }
}

fn load_config(path: &str, api_key: Option<String>) -> Option<Config> {
    let mut config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            return None;
        }
    };
    if let Some(key) = api_key {
        config.bramon.api_key = key;
    }
    Some(config)
}

fn runtime() -> Option<tokio::runtime::Runtime> {
    match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => Some(rt),
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            None
        }
    }
}

fn serve(path: &str, api_key: Option<String>) -> ExitCode {
    let Some(config) = load_config(path, api_key) else {
        return ExitCode::FAILURE;
    };

    let state = match AppState::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Startup error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };

    match rt.block_on(run_server(state)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn radiants(path: &str) -> ExitCode {
    match RadiantCatalog::load(Path::new(path)) {
        Ok(catalog) => {
            println!("{} radiants", catalog.len());
            for radiant in catalog.iter() {
                println!("  {}: {}", radiant.code, radiant.name);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error reading radiants: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn stations(path: &str, api_key: Option<String>) -> ExitCode {
    let Some(config) = load_config(path, api_key) else {
        return ExitCode::FAILURE;
    };

    let client = match BramonClient::new(&config.bramon) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error creating client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };

    match rt.block_on(client.fetch_stations()) {
        Ok(stations) => {
            println!("{} stations", stations.len());
            for station in stations {
                println!("  {}: {}", station.id, station.name);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error fetching stations: {}", e);
            ExitCode::FAILURE
        }
    }
}
