use super::super::{Board, Color, EngineError, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut MoveList,
    ) -> Result<(), EngineError> {
        let dir = color.forward();

        if let Some(to) = from.offset(0, dir).filter(|&sq| self.is_vacant(sq)) {
            self.push_advance(from, to, color, moves)?;
        }

        for dx in [-1, 1] {
            if let Some(to) = from
                .offset(dx, dir)
                .filter(|&sq| self.is_occupied_by_enemy(color, sq))
            {
                self.push_advance(from, to, color, moves)?;
            }
        }
        Ok(())
    }
}
