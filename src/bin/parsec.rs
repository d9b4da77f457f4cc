use clap::Parser;
use monadic_parsec::{
    config::{OutputFormat, ParsecConfig},
    parse_document, Error, Result,
};
use std::{
    io::{self, Read},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Document text; read from --file or stdin when omitted
    input: Option<String>,

    /// Read the document from a file
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "parsec.json")]
    config: PathBuf,

    /// Output format (pretty, compact, debug)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Reject unconsumed input after the document
    #[arg(long)]
    strict: Option<bool>,

    /// Trim surrounding whitespace before parsing
    #[arg(long)]
    trim: Option<bool>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<ParsecConfig> {
    let mut config = if cli.config.exists() {
        ParsecConfig::from_file(&cli.config)?
    } else {
        ParsecConfig::default()
    };

    if let Some(format) = cli.format {
        config.output = format;
    }
    if let Some(strict) = cli.strict {
        config.strict = strict;
    }
    if let Some(trim) = cli.trim {
        config.trim_input = trim;
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.input {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        debug!("Reading document from {:?}", path);
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let text = read_input(cli)?;
    if text.trim().is_empty() {
        return Err(Error::NoParse);
    }

    let value = parse_document(&text, &config)?;
    println!("{}", value.render(config.output)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
