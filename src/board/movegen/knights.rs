use super::super::attack_tables::knight_targets;
use super::super::{Board, Color, EngineError, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        for &to in knight_targets(from) {
            if self.is_vacant(to) || self.is_occupied_by_enemy(color, to) {
                moves.try_push(Move::new(from, to))?;
            }
        }
        Ok(())
    }
}
