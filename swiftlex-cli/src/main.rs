//! swiftlex CLI - tokenize Swift-like source files.
//!
//! This is the main entry point for the swiftlex command-line tool.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::resolve_format;
use commands::{
    run_by_kind, run_html, run_init, run_tokens, ByKindArgs, HtmlArgs, InitArgs, TokensArgs,
};
use config::Config;
use error::{CliError, Result};

/// swiftlex - a table-driven tokenizer for Swift-like source
///
/// Prints token sequences, groups token texts by kind, and renders
/// highlighted HTML.
#[derive(Parser, Debug)]
#[command(name = "swiftlex")]
#[command(author = "Swiftlex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Swift-like source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SWIFTLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SWIFTLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SWIFTLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the swiftlex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token sequence of each file
    ///
    /// Each token is printed as `KIND :text` below a dashed rule, or as a
    /// JSON document with spans.
    Tokens(TokensCommand),

    /// Print the distinct token texts grouped by kind
    #[command(name = "by-kind")]
    ByKind(ByKindCommand),

    /// Render a file as highlighted HTML
    Html(HtmlCommand),

    /// Write a default swiftlex.toml
    Init(InitCommand),
}

/// Options shared by every command that tokenizes input.
#[derive(Args, Debug)]
struct LexOptions {
    /// Directory containing keywords.txt, punctuation.txt and directives.txt
    #[arg(long, value_name = "DIR")]
    rules: Option<PathBuf>,

    /// Exit with an error when any ERROR token is produced
    #[arg(long)]
    deny_errors: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    #[command(flatten)]
    lex: LexOptions,
}

/// Arguments for the by-kind subcommand.
#[derive(Parser, Debug)]
struct ByKindCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    #[command(flatten)]
    lex: LexOptions,
}

/// Arguments for the html subcommand.
#[derive(Parser, Debug)]
struct HtmlCommand {
    /// Source file to render
    input: PathBuf,

    /// Output file (default: input with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (default: input file name)
    #[arg(short, long)]
    title: Option<String>,

    #[command(flatten)]
    lex: LexOptions,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write swiftlex.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the swiftlex CLI.
///
/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so listings on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, &config),
        Commands::ByKind(args) => execute_by_kind(args, &config),
        Commands::Html(args) => execute_html(args, &config),
        Commands::Init(args) => execute_init(args),
    }
}

/// `--rules` wins over `rules_dir` from the configuration.
fn rules_dir(options: &LexOptions, config: &Config) -> Option<PathBuf> {
    options.rules.clone().or_else(|| config.rules_dir.clone())
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        format: resolve_format(args.format.as_deref(), &config.output.format)?,
        rules_dir: rules_dir(&args.lex, config),
        deny_errors: args.lex.deny_errors,
        inputs: args.input,
    };
    run_tokens(&tokens_args)
}

/// Execute the by-kind command.
fn execute_by_kind(args: ByKindCommand, config: &Config) -> Result<()> {
    let by_kind_args = ByKindArgs {
        format: resolve_format(args.format.as_deref(), &config.output.format)?,
        rules_dir: rules_dir(&args.lex, config),
        deny_errors: args.lex.deny_errors,
        inputs: args.input,
    };
    run_by_kind(&by_kind_args)
}

/// Execute the html command.
fn execute_html(args: HtmlCommand, config: &Config) -> Result<()> {
    let html_args = HtmlArgs {
        rules_dir: rules_dir(&args.lex, config),
        deny_errors: args.lex.deny_errors,
        output: args.output.or_else(|| config.html.output_path.clone()),
        title: args.title.or_else(|| config.html.title.clone()),
        input: args.input,
    };
    run_html(&html_args).map(|_| ())
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let path = run_init(&InitArgs {
        path: args.path,
        force: args.force,
    })?;
    println!("Created {}", path.display());
    Ok(())
}
