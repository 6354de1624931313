// src/bin/cli.rs
use uni_scrape::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    uni_scrape::log::init();

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => eprintln!("{}", cli::HELP),
        Command::Run(params) => { cli::run(params)?; }
    }
    Ok(())
}
