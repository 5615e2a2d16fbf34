use std::error::Error;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use console::{ConsoleInput, ConsoleOutput};
use cozy_chess::{Board, Color, Square};
use log::{debug, info, warn};
use search::{Engine, EngineConfig};
use utils::{classify, move_to_uci, moves_to_uci, Game, GameError, Outcome, Rules};

/// Owns the game and runs the turns: the human moves through console input,
/// the engine answers right after.
pub struct Driver<E: Engine> {
    engine: E,
    config: EngineConfig,
    game: Game,
    start: Board,
    human: Color,
    outcome: Outcome,
    last_move: Option<String>,
    reply_delay: Duration,
}

impl<E: Engine> Driver<E> {
    pub fn new(
        engine: E,
        config: EngineConfig,
        start: Board,
        human: Color,
        reply_delay: Duration,
    ) -> Self {
        Self {
            engine,
            config,
            game: Game::new(start.clone()),
            start,
            human,
            outcome: Outcome::Ongoing,
            last_move: None,
            reply_delay,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn start(&mut self, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        info!("Starting game, human plays {:?}", self.human);
        output.send(ConsoleOutput::Welcome { human: self.human })?;
        self.begin(output)
    }

    pub fn handle(
        &mut self,
        input: &ConsoleInput,
        output: &Sender<ConsoleOutput>,
    ) -> Result<(), Box<dyn Error>> {
        match input {
            ConsoleInput::Move(text) => self.human_move(text, output)?,
            ConsoleInput::Select(square) => self.select(square, output)?,
            ConsoleInput::Board => self.show_board(output)?,
            ConsoleInput::Moves => {
                let moves = moves_to_uci(self.game.board(), &self.game.legal_moves());
                output.send(ConsoleOutput::Moves(moves))?;
            }
            ConsoleInput::NewGame => self.new_game(output)?,
            ConsoleInput::Options => {
                output.send(ConsoleOutput::Options(self.config.describe()))?;
            }
            ConsoleInput::SetOption { name, value } => {
                match self.config.update_from_option(name, value) {
                    Ok(()) => {
                        debug!("Set option '{}' to '{}'", name, value);
                        self.engine.configure(&self.config);
                        output.send(ConsoleOutput::OptionSet {
                            name: name.clone(),
                            value: value.clone(),
                        })?;
                    }
                    Err(e) => output.send(ConsoleOutput::Error(e))?,
                }
            }
            ConsoleInput::Help => output.send(ConsoleOutput::Help)?,
            ConsoleInput::Quit => info!("Quit after {} plies", self.game.ply()),
            ConsoleInput::Empty => {}
            ConsoleInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
                output.send(ConsoleOutput::Error(format!(
                    "unknown command '{}', type 'help' for a list",
                    line
                )))?;
            }
        }
        Ok(())
    }

    fn begin(&mut self, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        self.show_board(output)?;
        if self.update_outcome(output)? {
            return Ok(());
        }
        if self.game.side_to_move() != self.human {
            self.engine_turn(output)?;
        }
        Ok(())
    }

    fn new_game(&mut self, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        info!("New game");
        self.game = Game::new(self.start.clone());
        self.outcome = Outcome::Ongoing;
        self.last_move = None;
        self.begin(output)
    }

    fn human_move(
        &mut self,
        text: &str,
        output: &Sender<ConsoleOutput>,
    ) -> Result<(), Box<dyn Error>> {
        if self.outcome.is_terminal() {
            output.send(ConsoleOutput::Error(
                "the game is over, type 'new' to play again".to_string(),
            ))?;
            return Ok(());
        }
        if self.game.side_to_move() != self.human {
            output.send(ConsoleOutput::Error("it is not your turn".to_string()))?;
            return Ok(());
        }

        if let Err(e) = self.play(text) {
            debug!("Rejected move {}: {}", text, e);
            output.send(ConsoleOutput::Error(e.to_string()))?;
            return Ok(());
        }

        self.show_board(output)?;
        if self.update_outcome(output)? {
            return Ok(());
        }

        if !self.reply_delay.is_zero() {
            thread::sleep(self.reply_delay);
        }
        self.engine_turn(output)
    }

    fn play(&mut self, text: &str) -> Result<(), GameError> {
        let mv = self.game.parse_move(text)?;
        let notation = move_to_uci(self.game.board(), mv);
        self.game.try_apply(mv)?;
        info!("Human played {}", notation);
        self.last_move = Some(notation);
        Ok(())
    }

    fn engine_turn(&mut self, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        let mv = self.engine.choose_move(&mut self.game).map_err(|e| {
            warn!("Engine found no move in an ongoing game: {}", e);
            e
        })?;
        let notation = move_to_uci(self.game.board(), mv);
        self.game.apply(mv);
        info!("{} played {}", self.engine.name(), notation);

        self.last_move = Some(notation.clone());
        output.send(ConsoleOutput::EngineMove(notation))?;
        self.show_board(output)?;
        self.update_outcome(output)?;
        Ok(())
    }

    fn select(&mut self, text: &str, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        let Ok(square) = text.parse::<Square>() else {
            output.send(ConsoleOutput::Error(format!("'{}' is not a square", text)))?;
            return Ok(());
        };
        if !matches!(self.game.piece_at(square), Some((_, color)) if color == self.human) {
            output.send(ConsoleOutput::Error(format!(
                "there is no piece of yours on {}",
                square
            )))?;
            return Ok(());
        }

        let mut targets: Vec<String> = Vec::new();
        for mv in self.game.moves_from(square) {
            // Destination part of the UCI text, which shows castling as the king's move.
            let target = move_to_uci(self.game.board(), mv)[2..4].to_string();
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        output.send(ConsoleOutput::Targets {
            square: square.to_string(),
            targets,
        })?;
        Ok(())
    }

    fn show_board(&self, output: &Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>> {
        output.send(ConsoleOutput::Board {
            board: self.game.board().clone(),
            last_move: self.last_move.clone(),
        })?;
        Ok(())
    }

    /// Recompute the outcome and announce it if the game just ended.
    fn update_outcome(&mut self, output: &Sender<ConsoleOutput>) -> Result<bool, Box<dyn Error>> {
        self.outcome = classify(&self.game);
        if self.outcome.is_terminal() {
            info!("Game over: {}", self.outcome);
            output.send(ConsoleOutput::GameOver(self.result_text()))?;
        }
        Ok(self.outcome.is_terminal())
    }

    fn result_text(&self) -> String {
        match self.outcome.winner() {
            Some(winner) if winner == self.human => format!("{}, you beat the engine", self.outcome),
            Some(_) => format!("{}, the engine won despite itself", self.outcome),
            None => self.outcome.to_string(),
        }
    }
}
