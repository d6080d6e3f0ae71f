use std::ops::Range;

use super::super::attack_tables::ray;
use super::super::{Board, Color, EngineError, Move, MoveList, Square};

impl Board {
    /// Walk each direction over vacant squares, then take an enemy blocker.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        dirs: Range<usize>,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        for dir in dirs {
            for &to in ray(from, dir) {
                if self.is_vacant(to) {
                    moves.try_push(Move::new(from, to))?;
                    continue;
                }
                if self.is_occupied_by_enemy(color, to) {
                    moves.try_push(Move::new(from, to))?;
                }
                break;
            }
        }
        Ok(())
    }
}
