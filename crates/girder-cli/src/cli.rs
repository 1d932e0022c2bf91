use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "girder",
    about = "Girder: generate multi-module Maven project skeletons",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project skeleton
    New {
        /// Base project name
        name: String,

        /// Group/package identifier
        #[arg(long, default_value = "com.example")]
        group: String,

        /// Project version
        #[arg(long, default_value = "0.1.0")]
        version: String,

        /// Architecture id: none, mvc, or an id from the catalog
        #[arg(long)]
        architecture: Option<String>,

        /// Path to an architecture catalog TOML
        #[arg(long)]
        catalog: Option<String>,

        /// Target directory (defaults to ./<name>)
        #[arg(long)]
        output: Option<String>,

        /// Property written to application.properties (repeatable, key=value)
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the architectures this generator has assembly rules for
    Architectures {
        /// Path to an architecture catalog TOML
        #[arg(long)]
        catalog: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
