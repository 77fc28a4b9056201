use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter_syntax::lexer::Lexer;
use model::resource::registry::AttributeRegistry;
use planner::FilterCompiler;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "filterc", version = "0.1.0", about = "Resource filter to SQL compiler")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "FILTERC_DRIVER",
        default_value = "sqlite",
        help = "Target database driver: sqlite, mysql or postgres"
    )]
    driver: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = match &cli.command {
        Commands::Compile { filter, .. }
        | Commands::Check { filter, .. }
        | Commands::Tokens { filter } => Some(filter.clone()),
        Commands::Attributes { .. } => None,
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let CliError::Filter(inner) = &err
                && !inner.is_client_error()
            {
                error!(kind = %inner.kind(), "internal compiler error");
            }
            eprintln!("error: {}", err.render(source.as_deref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Compile {
            resource,
            pretty,
            filter,
        } => {
            let registry = AttributeRegistry::builtin()?;
            let compiler = FilterCompiler::for_driver(&registry, &cli.driver)?;
            let compiled = compiler.compile(&resource, &filter)?;
            output::print_compiled(&compiled, pretty)?;
        }
        Commands::Check { resource, filter } => {
            let registry = AttributeRegistry::builtin()?;
            let compiler = FilterCompiler::for_driver(&registry, &cli.driver)?;
            compiler.check(&resource, &filter)?;
            info!(resource = %resource, "filter is valid");
        }
        Commands::Attributes { resource, json } => {
            let registry = AttributeRegistry::builtin()?;
            let resources = match resource {
                Some(resource) => vec![resource],
                None => registry
                    .resource_types()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            };
            for resource in resources {
                let attributes = registry.attributes(&resource)?;
                output::print_attributes(&resource, attributes, json)?;
            }
        }
        Commands::Tokens { filter } => {
            let tokens = Lexer::new().tokenize(&filter)?;
            output::print_tokens(&tokens);
        }
    }
    Ok(())
}
