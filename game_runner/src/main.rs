mod config;
mod error;

use config::GameConfig;
use error::RunError;
use lib_agents::HumanAgent;
use lib_boardgame::{GameOutcome, GeneralGameRunner};
use lib_printer::{error, info, out};
use lib_reversi::{ConsoleView, ReversiBoard};
use std::io;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RunError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(Path::new(&path))?,
        None => GameConfig::default(),
    };
    lib_printer::set_level(config.log_level);
    info!("log level: {}", config.log_level);

    out!("The starting point of a board game");

    let stdin = io::stdin();
    let mut agent = HumanAgent::new(stdin.lock(), io::stdout(), config.glyphs);

    let mut board = match config.dimensions() {
        Some((rows, columns)) => ReversiBoard::new(rows, columns)?,
        None => agent.read_board()?,
    };

    let glyphs = config.glyphs;
    let runner = GeneralGameRunner::new(
        move |board: &ReversiBoard| ConsoleView::new(board, glyphs).render(),
        config.runner_options(),
    );

    match runner.play_to_end(&mut board, &mut agent, &mut io::stdout())? {
        GameOutcome::Finished(result) => info!("game finished: {:?}", result),
        GameOutcome::Abandoned => info!("game abandoned"),
    }

    Ok(())
}
