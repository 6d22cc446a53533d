//! Command-line interface for links notation
//!
//! Usage:
//!   lino parse [path] [--output json|yaml]   - Print the parsed links as data
//!   lino format [path] [layout flags]        - Re-print the document
//!   lino check [path]                        - Validate, exit 1 with a report on error
//!
//! A missing path or `-` reads standard input. Layout flags override the loaded
//! configuration, which starts from the built-in defaults plus an optional `--config` file.
//! Set `RUST_LOG=debug` to see pipeline diagnostics on stderr.

use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};
use links_notation::lino::ast::Document;
use links_notation::lino::config::{LinoConfig, Loader};
use links_notation::{ParseError, Parser};
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "lino", version, about = "Parse, check and format links notation")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// TOML file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat an empty identifier before ':' as no identifier
    #[arg(long, global = true)]
    lenient: bool,

    /// Merge reference runs that spell a multi-word identifier defined in the document
    #[arg(long, global = true)]
    multi_ref_context: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed links as JSON or YAML
    Parse {
        path: Option<PathBuf>,
        #[arg(long, short, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Re-print the document in canonical form
    Format {
        path: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Validate a document
    Check { path: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Json,
    Yaml,
}

#[derive(Args)]
struct LayoutArgs {
    #[arg(long)]
    less_parentheses: bool,
    #[arg(long)]
    group_consecutive: bool,
    #[arg(long)]
    quote_multi_references: bool,
    /// Use block layout above this many values
    #[arg(long)]
    max_inline_refs: Option<usize>,
    /// Use block layout for lines longer than --max-line-length
    #[arg(long)]
    indent_long_lines: bool,
    #[arg(long)]
    max_line_length: Option<usize>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Parse(String),
    #[error("serializing output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serializing output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let layout = match &cli.command {
        Command::Format { layout, .. } => Some(layout),
        _ => None,
    };
    let config = load_config(&cli, layout)?;
    debug!(?config, "loaded configuration");
    let parser = Parser::new(config.parsing.clone());

    match &cli.command {
        Command::Parse { path, output } => {
            let doc = parse_input(&parser, path.as_ref())?;
            let rendered = match output {
                Output::Json => serde_json::to_string_pretty(&doc)?,
                Output::Yaml => serde_yaml::to_string(&doc)?,
            };
            println!("{}", rendered);
        }
        Command::Format { path, .. } => {
            let doc = parse_input(&parser, path.as_ref())?;
            println!("{}", doc.format(&config.formatting));
        }
        Command::Check { path } => {
            let doc = parse_input(&parser, path.as_ref())?;
            println!("ok: {} links", doc.len());
        }
    }
    Ok(())
}

fn load_config(cli: &Cli, layout: Option<&LayoutArgs>) -> Result<LinoConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if cli.lenient {
        loader = loader.set_override("parsing.strictness", "lenient")?;
    }
    if cli.multi_ref_context {
        loader = loader.set_override("parsing.multi_ref_context", true)?;
    }
    if let Some(layout) = layout {
        if layout.less_parentheses {
            loader = loader.set_override("formatting.less_parentheses", true)?;
        }
        if layout.group_consecutive {
            loader = loader.set_override("formatting.group_consecutive", true)?;
        }
        if layout.quote_multi_references {
            loader = loader.set_override("formatting.quote_multi_references", true)?;
        }
        if layout.indent_long_lines {
            loader = loader.set_override("formatting.indent_long_lines", true)?;
        }
        if let Some(max) = layout.max_inline_refs {
            loader = loader.set_override("formatting.max_inline_refs", max as i64)?;
        }
        if let Some(max) = layout.max_line_length {
            loader = loader.set_override("formatting.max_line_length", max as i64)?;
        }
        // Asking for block layout implies not insisting on inline layout
        if layout.max_inline_refs.is_some() || layout.indent_long_lines {
            loader = loader.set_override("formatting.prefer_inline", false)?;
        }
    }
    Ok(loader.build()?)
}

fn parse_input(parser: &Parser, path: Option<&PathBuf>) -> Result<Document, CliError> {
    let source = read_input(path)?;
    parser
        .parse_document(&source)
        .map_err(|err: ParseError| CliError::Parse(err.render(&source)))
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
