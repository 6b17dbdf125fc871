use clap::Parser;
use screenflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt};

/// Compiles a flow builder document into a declarative flow JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the editor's flow JSON file
    input: Option<String>,

    /// Write the compiled document here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Emit compact JSON instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Print the navigation outline of the compiled flow to stderr
    #[arg(long)]
    outline: bool,

    /// Fail if any content had to be replaced by a placeholder
    #[arg(long)]
    strict: bool,

    /// Override the schema version stamped on the output
    #[arg(long)]
    schema_version: Option<String>,

    /// Compile the built-in starter flow instead of reading a file
    #[arg(long, conflicts_with = "input")]
    starter: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Loading and Conversion ---
    let flow = if cli.starter {
        FlowDocument::starter()
    } else {
        let input = cli.input.as_deref().unwrap_or_else(|| {
            exit_with_error("An input path is required unless --starter is given.")
        });
        let editor_json = fs::read_to_string(input).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read flow file '{}': {}", input, e))
        });
        UiFlow::from_json(&editor_json)
            .and_then(UiFlow::into_flow)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert flow: {}", e)))
    };

    // --- 2. Compilation ---
    let mut builder = Compiler::builder();
    if let Some(version) = &cli.schema_version {
        builder = builder.with_version(version);
    }
    let compile_start = Instant::now();
    let compilation = builder.build().compile(&flow);
    let compile_duration = compile_start.elapsed();

    for diagnostic in &compilation.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
    if cli.outline {
        eprint!("{}", FlowOutline::new(&compilation.document));
    }
    if cli.strict && !compilation.is_clean() {
        exit_with_error(&format!(
            "{} content item(s) were not supported (--strict)",
            compilation.diagnostics.len()
        ));
    }

    // --- 3. Serialization ---
    let json = if cli.compact {
        compilation.document.to_json()
    } else {
        compilation.document.to_json_pretty()
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    match &cli.output {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output '{}': {}", path, e))
            });
            eprintln!(
                "Compiled {} screen(s), {} field(s) into '{}' in {:?} (total {:?})",
                compilation.document.screens.len(),
                compilation.document.field_names().len(),
                path,
                compile_duration,
                total_start.elapsed()
            );
        }
        None => println!("{}", json),
    }
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "screenflow=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
