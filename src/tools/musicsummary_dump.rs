use clap::Parser;
use log::info;
use musicsummary::helpers::url_encoding::decode_value;
use musicsummary::helpers::FileStatusSource;
use musicsummary::players::NullProbe;
use musicsummary::SummaryService;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Print the summary of a status dump file", long_about = None)]
struct Args {
    /// Status dump file to read
    status_file: PathBuf,

    /// API version to project (major.minor)
    #[clap(long = "api-version", default_value = "0.3")]
    api_version: String,

    /// Print decoded `key: value` lines instead of the encoded JSON
    #[clap(long)]
    decoded: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("Dumping summary of {}", args.status_file.display());

    let service = SummaryService::new(
        Box::new(FileStatusSource::new(&args.status_file)),
        Box::new(NullProbe),
    );
    let encoded = service.summary(Some(&args.api_version), false)?;

    if args.decoded {
        for key in encoded.keys() {
            let raw = encoded.get(key).unwrap_or("");
            let value = decode_value(raw).unwrap_or_else(|| raw.to_string());
            println!("{}: {}", key, value);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    }

    Ok(())
}
