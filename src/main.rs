use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use zone_export::config::ExportConfig;
use zone_export::error::{ConfigError, ExportError};
use zone_export::export::{ExportOptions, FileSink, ZoneSink, export_zone};
use zone_export::source::{RowReader, SourceFormat};
use zone_export::zone::domain_from_hostname;

/// Convert an exported DNS console table into a BIND zone file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table export to read (CSV, TSV or JSON)
    input: PathBuf,

    /// TTL override ("0" keeps each record's TTL)
    #[arg(short, long)]
    ttl: Option<String>,

    /// Zone domain printed in the banner
    #[arg(short, long, conflicts_with = "hostname")]
    domain: Option<String>,

    /// Console hostname; the zone domain is the hostname minus its first label
    #[arg(long)]
    hostname: Option<String>,

    /// Input format (default: guessed from the file extension)
    #[arg(short, long, value_enum)]
    format: Option<SourceFormat>,

    /// The first CSV/TSV row is data, not a header
    #[arg(long)]
    no_headers: bool,

    /// Directory to save the zone file into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Console name for the provenance line
    #[arg(long)]
    source: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the zone file instead of saving it
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(Some(location)) => {
            println!("Export Complete!");
            println!("{}", location);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.status_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<Option<String>, ExportError> {
    let config = load_config(&args)?;

    let domain = match (&args.hostname, &config.domain) {
        (Some(hostname), _) => domain_from_hostname(hostname.trim())
            .ok_or_else(|| {
                ConfigError::InvalidDomain(format!("hostname {:?} names no zone", hostname))
            })?
            .to_string(),
        (None, Some(domain)) => domain.clone(),
        (None, None) => return Err(ConfigError::MissingDomain.into()),
    };

    let format = args
        .format
        .or_else(|| SourceFormat::from_path(&args.input))
        .unwrap_or(SourceFormat::Csv);
    debug!("Reading {} as {:?}", args.input.display(), format);

    let rows = RowReader::new(format)
        .with_headers(config.has_headers)
        .read_path(&args.input)?;

    let options = ExportOptions {
        ttl_override: config.ttl(),
        domain,
        source_label: config.source_label.clone(),
    };
    let outcome = export_zone(&rows, &options, Utc::now())?;

    if args.stdout {
        print!("{}", outcome.artifact.content);
        return Ok(None);
    }

    let sink = FileSink::new(&config.output_dir);
    let location = sink.save(&outcome.artifact).await?;
    Ok(Some(location))
}

/// Defaults, then config file, then environment, then command-line flags
fn load_config(args: &Args) -> Result<ExportConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => ExportConfig::from_file(path)?,
        None => ExportConfig::default(),
    };
    config.apply_env();

    if let Some(ttl) = &args.ttl {
        config.ttl_override = ttl.trim().to_string();
    }
    if let Some(domain) = &args.domain {
        config.domain = Some(domain.trim().to_string());
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(source) = &args.source {
        config.source_label = source.clone();
    }
    if args.no_headers {
        config.has_headers = false;
    }

    config.validate()?;
    Ok(config)
}
