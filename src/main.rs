use changelog_ci::{Args, forge::github::Github, generate};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::*;

mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("changelog_ci")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.is_debug())?;

    let inputs = cli_args.get_inputs()?;
    let forge = Github::new(cli_args.get_remote()?)?;

    let outcome = generate::execute(&inputs, &forge)
        .await
        .wrap_err("failed to generate changelog")?;

    debug!("finished: {outcome:?}");

    Ok(())
}
