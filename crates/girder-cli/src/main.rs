//! Girder CLI: the `girder` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            group,
            version,
            architecture,
            catalog,
            output,
            properties,
            json,
        } => commands::new::run(commands::new::Args {
            name,
            group,
            version,
            architecture,
            catalog,
            output,
            properties,
            json,
        }),

        Commands::Architectures { catalog, json } => commands::architectures::run(catalog, json),
    }
}
