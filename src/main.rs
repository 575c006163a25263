use std::error::Error;

use clap::Parser;
use templatefetch::{
    cli::{
        args::{CliArgs, Command},
        command_handlers::do_prepare,
    },
    config::TemplatefetchConfig,
    Preparer,
};

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse();

    let config = TemplatefetchConfig::load()?;
    let preparer = Preparer::from_config(config)?;

    match cli_args.cmd {
        Command::Prepare {
            template_file,
            working_directory,
        } => do_prepare(&preparer, &template_file, working_directory.as_deref()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
