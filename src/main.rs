use clap::Parser;

use factorlab::adapter::inbound::cli::{self, command::Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let code = cli::run(cli);
    std::process::exit(code);
}
