use add_license_header_cli::args::Args;
use add_license_header_cli::config::Config;
use add_license_header_cli::presentation;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);
    log::debug!("Scanning {} for *{}", config.root.display(), config.extension);

    match add_license_header_engine::run(&config, presentation::print_added) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
