//! Draughts men and flying kings.

use super::super::attack_tables::{ray, DIAGONAL};
use super::super::{Board, Color, EngineError, Move, MoveList, Square};

impl Board {
    /// A man steps diagonally forward, or jumps a forward enemy onto the
    /// vacant square behind it. Reaching the far rank crowns it.
    pub(crate) fn generate_man_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        let dy = color.forward();
        for dx in [-1, 1] {
            let Some(next) = from.offset(dx, dy) else {
                continue;
            };
            if self.is_vacant(next) {
                self.push_advance(from, next, color, moves)?;
            } else if self.is_occupied_by_enemy(color, next) {
                if let Some(landing) = next.offset(dx, dy).filter(|&sq| self.is_vacant(sq)) {
                    self.push_advance(from, landing, color, moves)?;
                }
            }
        }
        Ok(())
    }

    /// A king flies along diagonals. It may pass over exactly one enemy piece,
    /// landing on any vacant square beyond it before the next obstacle.
    pub(crate) fn generate_flying_king_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        for dir in DIAGONAL {
            let mut jumped = false;
            for &to in ray(from, dir) {
                if self.is_vacant(to) {
                    moves.try_push(Move::new(from, to))?;
                } else if !jumped && self.is_occupied_by_enemy(color, to) {
                    jumped = true;
                } else {
                    break;
                }
            }
        }
        Ok(())
    }
}
