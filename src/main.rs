use clap::Parser;
use log::{error, info};
use musicsummary::api::server::start_rocket_server;
use musicsummary::config::{get_service_config, load_config_file, ServerSettings};
use musicsummary::constants::DEFAULT_CONFIG_FILE;
use musicsummary::helpers::FileStatusSource;
use musicsummary::logging::initialize_logging;
use musicsummary::players::create_probe_from_config;
use musicsummary::SummaryService;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Serve the now-playing summary of a player status dump", long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[clap(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Port to listen on (overrides the configuration file)
    #[clap(short = 'p', long)]
    port: Option<u16>,

    /// Status dump to read (overrides the configuration file)
    #[clap(long)]
    status_file: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Enable verbose logging
    #[clap(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_config_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = initialize_logging(&config, args.debug, args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let mut settings = ServerSettings::from_config(&config);
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(status_file) = args.status_file {
        settings.status_file = status_file;
    }

    info!("Reading status dump from {}", settings.status_file.display());

    let probe = create_probe_from_config(get_service_config(&config, "probe"));
    let service = SummaryService::new(Box::new(FileStatusSource::new(&settings.status_file)), probe)
        .with_test_source(Box::new(FileStatusSource::new(&settings.test_file)));
    let service = Arc::new(service);

    // The first poll primes the position state before clients arrive
    service.warm_up();

    if let Err(e) = start_rocket_server(service, &settings).await {
        error!("Webserver failed: {}", e);
        std::process::exit(1);
    }

    info!("Exiting application");
}
