// crates/lakegraph-cli/src/main.rs
// ============================================================================
// Module: Lakegraph CLI Entry Point
// Description: Command dispatcher for lake stack composition workflows.
// Purpose: Compose the resource graph and emit it for a provisioning engine.
// Dependencies: clap, lakegraph-config, lakegraph-core, thiserror
// ============================================================================

//! ## Overview
//! The Lakegraph CLI loads configuration, composes the lake stack resource
//! graph, and emits it as canonical JSON for whichever provisioning engine
//! applies it. Composition is synchronous and performs no network calls;
//! the only I/O is reading the config file and writing the graph.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use lakegraph_config::LakeConfig;
use lakegraph_core::ResourceGraph;
use lakegraph_core::StackComposition;
use lakegraph_core::StaticIdentityDirectory;
use lakegraph_core::StaticIngestionSource;
use lakegraph_core::compose_stack;
use lakegraph_core::hashing::canonical_json_bytes;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "lakegraph", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose the resource graph and emit it as canonical JSON.
    Compose(ComposeCommand),
    /// Compose the resource graph and print the apply order.
    Plan(PlanCommand),
    /// Configuration inspection commands.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `compose` command.
#[derive(Args, Debug)]
struct ComposeCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output file for the composed graph (stdout when omitted).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
struct PlanCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validates the configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("lakegraph {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        return Err(CliError::new("no command specified; see --help".to_string()));
    };

    match command {
        Commands::Compose(command) => command_compose(&command),
        Commands::Plan(command) => command_plan(&command),
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

// ============================================================================
// SECTION: Compose Command
// ============================================================================

/// Executes the `compose` command.
fn command_compose(command: &ComposeCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let composition = compose_from_config(&config)?;
    let bytes = render_graph(&composition.graph)?;
    match &command.output {
        Some(path) => {
            fs::write(path, &bytes).map_err(|err| {
                CliError::new(format!("failed to write graph to {}: {err}", path.display()))
            })?;
        }
        None => {
            write_stdout_bytes(&bytes)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Plan Command
// ============================================================================

/// Executes the `plan` command.
fn command_plan(command: &PlanCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let composition = compose_from_config(&config)?;
    let plan = render_plan(&composition.graph)?;
    write_stdout_bytes(plan.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes config subcommands.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(command),
    }
}

/// Executes the `config validate` command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    load_config(command.config.as_deref())?;
    write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Composition Helpers
// ============================================================================

/// Loads and validates the configuration file.
fn load_config(path: Option<&std::path::Path>) -> CliResult<LakeConfig> {
    LakeConfig::load(path).map_err(|err| CliError::new(format!("config load failed: {err}")))
}

/// Composes the stack from validated configuration.
fn compose_from_config(config: &LakeConfig) -> CliResult<StackComposition> {
    let settings = config.to_stack_settings();
    let identity = StaticIdentityDirectory::new(vec![settings.debugging_group.clone()]);
    compose_stack(&settings, &StaticIngestionSource, &identity)
        .map_err(|err| CliError::new(format!("composition failed: {err}")))
}

/// Renders the composed graph as canonical JSON with a trailing newline.
fn render_graph(graph: &ResourceGraph) -> CliResult<Vec<u8>> {
    let mut bytes = canonical_json_bytes(graph)
        .map_err(|err| CliError::new(format!("graph serialization failed: {err}")))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Renders the apply order, one resource per line.
fn render_plan(graph: &ResourceGraph) -> CliResult<String> {
    let order = graph
        .apply_order()
        .map_err(|err| CliError::new(format!("apply order failed: {err}")))?;
    let mut output = String::new();
    for resource in order {
        output.push_str(&resource.to_string());
        output.push('\n');
    }
    Ok(output)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
