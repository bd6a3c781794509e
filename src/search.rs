//! Move search with Monte Carlo playouts.
//!
//! The searcher keeps one statistics node per legal move of the root
//! position. Each pass picks a node with UCB1, plays a uniformly random
//! game from it and records who won. The most visited move is returned.
//!
//! Atari Go playouts always terminate: stones are never removed, so every
//! move fills one more point until someone captures or cannot move.

use std::time::{Duration, Instant};

use log::debug;

use crate::constants::UCB_FACTOR;
use crate::models::{Board, Color, GameError, Move};
use crate::sgf::encode_point;

/// Limits of one search. Whichever is reached first ends it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchSettings {
    /// Maximal number of playouts.
    pub passes: usize,
    /// Maximal wall-clock time.
    pub duration: Duration,
}

pub trait MoveSearcher {
    /// Chooses a move for `color`, or tells that the game is already over.
    fn search_move(&mut self, board: &Board, color: Color) -> Result<Move, GameError>;
}

/// Statistics of one root move.
#[derive(Clone, Debug)]
pub struct MoveNode {
    pub mv: Move,
    /// Number of playouts started with this move
    pub visits: u64,
    /// Playouts won by the searching color
    pub wins: u64,
}

impl MoveNode {
    fn new(mv: Move) -> Self {
        Self {
            mv,
            visits: 0,
            wins: 0,
        }
    }

    #[inline]
    pub fn winrate(&self) -> f64 {
        if self.visits > 0 {
            self.wins as f64 / self.visits as f64
        } else {
            -0.1 // Indicate unvisited
        }
    }

    fn ucb_score(&self, total_visits: u64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploration = ((total_visits as f64).ln() / self.visits as f64).sqrt();
        self.winrate() + UCB_FACTOR * exploration
    }
}

pub struct MonteCarloSearcher {
    settings: SearchSettings,
    rng: fastrand::Rng,
}

impl MonteCarloSearcher {
    pub fn new(settings: SearchSettings) -> Self {
        Self::with_rng(settings, fastrand::Rng::new())
    }

    /// A searcher with a fixed random source, for reproducible games.
    pub fn with_rng(settings: SearchSettings, rng: fastrand::Rng) -> Self {
        Self { settings, rng }
    }

    /// Runs the playouts and returns the statistics of every root move.
    pub fn evaluate(&mut self, board: &Board, color: Color) -> Result<Vec<MoveNode>, GameError> {
        let mut nodes: Vec<MoveNode> = board
            .legal_moves(color)?
            .into_iter()
            .map(MoveNode::new)
            .collect();

        let start = Instant::now();
        let mut total_visits = 0u64;
        for _ in 0..self.settings.passes {
            if start.elapsed() >= self.settings.duration {
                break;
            }

            let i = most_urgent(&nodes, total_visits);
            let node = &mut nodes[i];
            let next = board.apply_move(&node.mv);
            let winner = self.playout(next, color.negative());
            node.visits += 1;
            if winner == color {
                node.wins += 1;
            }
            total_visits += 1;
        }
        debug!(
            "{} playouts over {} moves in {:?}",
            total_visits,
            nodes.len(),
            start.elapsed()
        );
        Ok(nodes)
    }

    /// Plays random moves starting with `to_play` and returns the winner.
    fn playout(&mut self, mut board: Board, mut to_play: Color) -> Color {
        loop {
            match board.legal_moves(to_play) {
                Ok(moves) => {
                    let mv = moves[self.rng.usize(..moves.len())];
                    board = board.apply_move(&mv);
                    to_play = to_play.negative();
                }
                Err(GameError::AlreadyLoss) => return to_play.negative(),
                Err(GameError::AlreadyWin) => return to_play,
            }
        }
    }
}

impl MoveSearcher for MonteCarloSearcher {
    fn search_move(&mut self, board: &Board, color: Color) -> Result<Move, GameError> {
        let nodes = self.evaluate(board, color)?;
        let best = best_node(&nodes).ok_or(GameError::AlreadyLoss)?;
        debug!(
            "best move {} with winrate {:.1}% over {} visits",
            encode_point(best.mv.point),
            best.winrate() * 100.0,
            best.visits
        );
        Ok(best.mv)
    }
}

fn most_urgent(nodes: &[MoveNode], total_visits: u64) -> usize {
    nodes
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.ucb_score(total_visits)
                .partial_cmp(&b.ucb_score(total_visits))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// The most visited node; ties go to the better winrate.
fn best_node(nodes: &[MoveNode]) -> Option<&MoveNode> {
    nodes.iter().max_by(|a, b| {
        a.visits.cmp(&b.visits).then(
            a.winrate()
                .partial_cmp(&b.winrate())
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    })
}
