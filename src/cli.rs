use clap::{Args, Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::catalog::ComponentCatalog;
use crate::adapters::invoke_session::InvokeSession;
use crate::adapters::reporter::TracingReporter;
use crate::codec::{editor_buffer, render_function, safe_format_json};
use crate::config::Settings;
use crate::domain::{ComponentMetadata, FunctionDescriptor};

/// Build and check invocation payloads for platform component functions
#[derive(Parser, Debug, Clone)]
#[command(name = "invoker", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "INVOKER_CONFIG", default_value = "invoker.toml", global = true)]
    pub config: PathBuf,

    /// Directory of component metadata files
    #[arg(long, env = "INVOKER_METADATA_DIR", global = true)]
    pub metadata_dir: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the default argument buffer for a function
    Skeleton(FunctionArgs),
    /// Encode an argument document into an invocation payload
    Encode {
        #[command(flatten)]
        function: FunctionArgs,
        /// File holding the argument document (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List exported function signatures
    Signature {
        #[command(flatten)]
        source: SourceArgs,
        /// Only show functions whose name or export contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Pretty-print a JSON document, leaving invalid input untouched
    Format {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Component metadata file (JSON or YAML)
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// Component id; may be omitted when only one component is loaded
    #[arg(long)]
    pub component: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct FunctionArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Export (interface) name
    #[arg(short, long)]
    pub export: String,

    /// Function name
    #[arg(short, long)]
    pub function: String,
}

impl SourceArgs {
    fn catalog(&self, settings: &Settings) -> Result<ComponentCatalog, anyhow::Error> {
        let mut catalog = settings.load_catalog()?;
        if let Some(path) = &self.metadata {
            catalog.load_file(path)?;
        }
        Ok(catalog)
    }

    fn component(&self, settings: &Settings) -> Result<ComponentMetadata, anyhow::Error> {
        let catalog = self.catalog(settings)?;
        match &self.component {
            Some(id) => catalog
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Component not found: '{}'", id)),
            None => match catalog.components().as_slice() {
                [only] => Ok((*only).clone()),
                [] => Err(anyhow::anyhow!("No component metadata loaded")),
                _ => Err(anyhow::anyhow!(
                    "{} components loaded; pass --component",
                    catalog.len()
                )),
            },
        }
    }
}

impl FunctionArgs {
    fn resolve(&self, settings: &Settings) -> Result<FunctionDescriptor, anyhow::Error> {
        let component = self.source.component(settings)?;
        Ok(component.find_function(&self.export, &self.function)?)
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String, anyhow::Error> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> Result<(), anyhow::Error> {
    match &cli.command {
        Command::Skeleton(args) => {
            let function = args.resolve(settings)?;
            writeln!(out, "{}", editor_buffer(&function))?;
        }
        Command::Encode { function, input } => {
            let function = function.resolve(settings)?;
            let text = read_input(input.as_ref())?;

            let mut session =
                InvokeSession::new(function, settings.editor, Arc::new(TracingReporter::new()));
            session.edit(&text);
            let prepared = session.prepare()?;

            tracing::info!("Encoded {} arguments", prepared.payload.params.len());
            writeln!(out, "{}", serde_json::to_string_pretty(&prepared)?)?;
        }
        Command::Signature { source, query } => {
            let component = source.component(settings)?;
            let functions = match query {
                Some(q) => component.search(q),
                None => component.exported_functions(),
            };
            for function in &functions {
                writeln!(out, "{}", render_function(function))?;
            }
        }
        Command::Format { input } => {
            let text = read_input(input.as_ref())?;
            writeln!(out, "{}", safe_format_json(&text))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["invoker", "format"]);
        assert_eq!(cli.config, PathBuf::from("invoker.toml"));
        assert!(cli.metadata_dir.is_none());
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Command::Format { input: None }));
    }

    #[test]
    fn test_cli_encode_args() {
        let cli = Cli::parse_from([
            "invoker",
            "encode",
            "--metadata",
            "cart.json",
            "--export",
            "golem:cart/api",
            "--function",
            "add-item",
            "--input",
            "args.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        match cli.command {
            Command::Encode { function, input } => {
                assert_eq!(function.source.metadata, Some(PathBuf::from("cart.json")));
                assert!(function.source.component.is_none());
                assert_eq!(function.export, "golem:cart/api");
                assert_eq!(function.function, "add-item");
                assert_eq!(input, Some(PathBuf::from("args.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_function_for_skeleton() {
        assert!(Cli::try_parse_from(["invoker", "skeleton", "--export", "api"]).is_err());
    }
}
