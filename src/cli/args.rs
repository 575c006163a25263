use std::path::PathBuf;

use clap::Parser;

/// Prepares remote repository templates for local scaffolding.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Fetches the template's repository and prints the checkout path
    Prepare {
        /// Template descriptor toml file
        #[clap(short, long, default_value = "template.toml")]
        template_file: PathBuf,
        /// Directory the checkout is allocated under, defaults to the system
        /// temp directory
        #[clap(short, long)]
        working_directory: Option<PathBuf>,
    },
}
