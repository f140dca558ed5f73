use clap::Parser;

/// Takes no options: the tool always processes the current working directory.
#[derive(Parser, Debug)]
#[command(
    name = "add_license_header",
    version = crate::VERSION,
    about = "Prepend the license header to every .swift file under the current directory"
)]
pub struct Args {}
