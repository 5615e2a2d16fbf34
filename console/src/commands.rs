use cozy_chess::{Board, Color};

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    /// A move in UCI notation, e.g. `e2e4` or `e7e8q`.
    Move(String),
    /// Ask for the legal destinations of the piece on a square.
    Select(String),

    Board,
    Moves,
    NewGame,

    Options,
    SetOption {
        name: String,
        value: String,
    },

    Help,
    Quit,
    Empty,
    Unknown(String),
}

#[derive(Debug)]
pub enum ConsoleOutput {
    Welcome {
        human: Color,
    },
    Board {
        board: Board,
        last_move: Option<String>,
    },
    EngineMove(String),
    Targets {
        square: String,
        targets: Vec<String>,
    },
    Moves(Vec<String>),
    GameOver(String),
    Options(Vec<String>),
    OptionSet {
        name: String,
        value: String,
    },
    Help,
    Error(String),
}
