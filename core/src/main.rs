mod args;
mod driver;
mod engine;

use args::Args;
use clap::Parser;
use console::ConsoleConnection;
use cozy_chess::Board;
use driver::Driver;
use log::{info, LevelFilter};
use search::EngineConfig;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::time::Duration;
use utils::Game;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let mut config = EngineConfig::default();
    for assignment in &args.options {
        config.apply_assignment(assignment)?;
    }

    let start = match &args.fen {
        Some(fen) => Game::from_fen(fen)?.board().clone(),
        None => Board::default(),
    };

    let engine = engine::create(&config);
    let mut driver = Driver::new(
        engine,
        config,
        start,
        args.human.into(),
        Duration::from_millis(args.reply_delay),
    );

    let mut console = ConsoleConnection::new();
    driver.start(&console.sender())?;

    console.listen(|input, output| driver.handle(input, &output))?;
    console.close();

    info!("Goodbye");
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
