//! Binary to compile a YAML settings file into a `MyBatis` Generator XML configuration.
//!
//! Usage: `mbgconfig settings.yml -o generatorConfig.xml`
//!
//! Reads the settings from INPUT (or stdin) and writes the XML to OUTPUT (or stdout).

use std::fs;
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use mybatis_gen_config::{
    ConfigGenError, GeneratorDocument, Settings, compile_settings, load_settings_tree,
    render_to_writer,
};
use tracing_subscriber::EnvFilter;

/// Compile a YAML settings file into a `MyBatis` Generator XML configuration.
#[derive(Debug, Parser)]
#[command(name = "mbgconfig", version, about)]
struct Cli {
    /// Settings file to read; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// File to write the XML configuration to; absent writes stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved settings (defaults applied, password omitted) as JSON instead of XML.
    #[arg(long)]
    resolved: bool,

    /// Log each compilation step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter: &str = if verbose { "debug" } else { "warn" };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(input: Option<&Path>) -> Result<String, ConfigGenError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigGenError> {
    let source: String = read_source(cli.input.as_deref())?;
    let settings: Settings = Settings::from_tree(&load_settings_tree(&source)?)?;

    let mut rendered: Vec<u8> = Vec::new();
    if cli.resolved {
        serde_json::to_writer_pretty(&mut rendered, &settings)?;
        rendered.push(b'\n');
    } else {
        let document: GeneratorDocument = compile_settings(&settings)?;
        render_to_writer(&document, &mut rendered)?;
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            tracing::info!(
                output = %path.display(),
                tables = settings.tables.len(),
                "wrote configuration"
            );
        }
        None => stdout().write_all(&rendered)?,
    }
    Ok(())
}

fn main() {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
