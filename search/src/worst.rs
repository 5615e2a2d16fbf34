// Move selection for an engine that wants to lose.
//
// Every legal move is played on the real position, scored, and taken back.
// The score rewards giving away material and punishes captures, checks and
// checkmates; the lowest score is played. Only one extra ply is examined: a
// move is rewarded once for every opponent reply that captures something.

use cozy_chess::Move;
use evaluation::{scores::POS_INFINITY, Evaluator, Score};
use log::{debug, info};
use utils::{Rules, Simulation};

use crate::{Engine, EngineConfig, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub capture_penalty: Score,
    pub check_penalty: Score,
    pub checkmate_penalty: Score,
    pub hanging_reply_bonus: Score,
}

impl Weights {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            capture_penalty: config.capture_penalty.value,
            check_penalty: config.check_penalty.value,
            checkmate_penalty: config.checkmate_penalty.value,
            hanging_reply_bonus: config.hanging_reply_bonus.value,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

/// What happened when a candidate move was tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    /// Material after the move, from the mover's side.
    pub material: Score,
    pub capture: bool,
    pub check: bool,
    pub checkmate: bool,
    /// Opponent replies that capture something.
    pub capturing_replies: u32,
}

impl MoveScore {
    /// Lower is worse for the mover, which is what we are after.
    pub fn total(&self, weights: &Weights) -> Score {
        let mut score = self.material;
        if self.capture {
            score += weights.capture_penalty;
        }
        if self.check {
            score += weights.check_penalty;
        }
        if self.checkmate {
            score += weights.checkmate_penalty;
        }
        score - weights.hanging_reply_bonus * self.capturing_replies as Score
    }
}

pub struct WorstMoveEngine {
    evaluator: Box<dyn Evaluator>,
    weights: Weights,
    nodes: u64,
}

impl Engine for WorstMoveEngine {
    fn new(evaluator: Box<dyn Evaluator>, config: &EngineConfig) -> Self {
        Self {
            evaluator,
            weights: Weights::from_config(config),
            nodes: 0,
        }
    }

    fn configure(&mut self, config: &EngineConfig) {
        self.weights = Weights::from_config(config);
        debug!("Weights set to {:?}", self.weights);
    }

    fn choose_move<R: Rules>(&mut self, rules: &mut R) -> Result<Move, SearchError> {
        self.choose_worst_move(rules)
    }

    fn name(&self) -> String {
        format!("Worst Move ({})", self.evaluator.name())
    }
}

impl WorstMoveEngine {
    #[inline]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Positions visited by the last call to `choose_worst_move`.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// The lowest scoring legal move. Ties go to the move generated first.
    pub fn choose_worst_move<R: Rules>(&mut self, rules: &mut R) -> Result<Move, SearchError> {
        let moves = rules.legal_moves();
        let Some(&first) = moves.first() else {
            return Err(SearchError::NoMoveAvailable);
        };

        self.nodes = 0;
        let mut best_move = None;
        let mut best_score = POS_INFINITY;

        for mv in moves {
            let breakdown = self.score_move(rules, mv);
            let score = breakdown.total(&self.weights);

            debug!("Move: {}, Score: {}, {:?}", mv, score, breakdown);

            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let chosen = best_move.unwrap_or(first);
        info!(
            "Chose {} with score {} after {} nodes",
            chosen, best_score, self.nodes
        );
        Ok(chosen)
    }

    /// Every legal move with its score breakdown, in generation order.
    pub fn rank_moves<R: Rules>(&mut self, rules: &mut R) -> Vec<(Move, MoveScore)> {
        rules
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, self.score_move(rules, mv)))
            .collect()
    }

    /// Try `mv` and report what it leads to. `mv` must be legal.
    pub fn score_move<R: Rules>(&mut self, rules: &mut R, mv: Move) -> MoveScore {
        let mover = rules.side_to_move();
        let capture = rules.is_capture(mv);

        let after = Simulation::new(rules, mv);
        let material = self.evaluator.evaluate(&*after, mover);
        let check = after.is_check();
        let checkmate = after.is_checkmate();

        let replies = after.legal_moves();
        let capturing_replies = replies
            .iter()
            .filter(|&&reply| after.is_capture(reply))
            .count() as u32;

        self.nodes += 1 + replies.len() as u64;

        MoveScore {
            material,
            capture,
            check,
            checkmate,
            capturing_replies,
        }
    }
}
