//! snipgen CLI
//!
//! Usage:
//!   snipgen [OPTIONS] [GENERATOR]
//!
//! Options:
//!   -c, --config <FILE>  Formatting and snippet overrides (TOML format)
//!   -o, --output <FILE>  Write the script to a file instead of stdout
//!   -l, --list           List registered generators and snippets
//!   -v, --verbose        Log registry activity to stderr
//!   -h, --help           Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snipgen::{with_defaults, Codegen, CodegenConfig};

#[derive(Parser)]
#[command(name = "snipgen")]
#[command(about = "Generate boilerplate scripts from named snippets")]
struct Cli {
    /// Generator to run (e.g. uf, ibprop, mevent)
    generator: Option<String>,

    /// Config file with [format] and [snippets] sections (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List registered generators and snippet keys
    #[arg(short, long)]
    list: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => match CodegenConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CodegenConfig::default(),
    };

    let codegen = with_defaults(config);

    if cli.list {
        print_registry(&codegen);
        return;
    }

    let Some(name) = cli.generator else {
        eprintln!(
            "Error: no generator given (available: {})",
            codegen.generators().names().join(", ")
        );
        std::process::exit(1);
    };

    let script = match codegen.generate(&name) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, script) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", script),
    }
}

fn print_registry(codegen: &Codegen) {
    println!("GENERATORS");
    for name in codegen.generators().names() {
        println!("    {}", name);
    }
    println!();
    println!("SNIPPETS");
    for key in codegen.snippets().keys() {
        println!("    {}", key);
    }
}
