use super::super::attack_tables::king_targets;
use super::super::{Board, Color, EngineError, Move, MoveList, Square};

impl Board {
    /// Adjacent steps. Safety of the destination is checked by the legality
    /// filter, which tests the king on the square it moves to.
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        for &to in king_targets(from) {
            if self.is_vacant(to) || self.is_occupied_by_enemy(color, to) {
                moves.try_push(Move::new(from, to))?;
            }
        }
        Ok(())
    }
}
