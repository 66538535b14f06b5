//! Caller-owned game state.
//!
//! The engine only recommends moves; the game loop owns the board, whose
//! turn it is, and whether the game has ended. Black moves first.

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::has_five_at_pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current: Stone,
    pub winner: Option<Stone>,
    pub history: Vec<(Pos, Stone)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Stone::Black,
            winner: None,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Place a stone for the side to move.
    ///
    /// Returns the winner if this move completed a five. The turn passes to
    /// the other side only when the game continues.
    pub fn play(&mut self, pos: Pos) -> Result<Option<Stone>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        let side = self.current;
        self.board.place_stone(pos, side);
        self.history.push((pos, side));

        if has_five_at_pos(&self.board, pos, side) {
            self.winner = Some(side);
        } else {
            self.current = side.opponent();
        }
        Ok(self.winner)
    }

    /// [`GameState::play`] from unchecked coordinates.
    pub fn play_at(&mut self, row: i32, col: i32) -> Result<Option<Stone>, GameError> {
        let pos = Pos::checked(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Take back the last move. The side that played it is to move again.
    pub fn undo(&mut self) -> Option<Pos> {
        let (pos, side) = self.history.pop()?;
        self.board.remove_stone(pos);
        self.current = side;
        self.winner = None;
        Some(pos)
    }

    /// A five was made or no empty cell remains.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    pub fn legal_moves_left(&self) -> usize {
        self.board.empty_cells().count()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }
}
