//! Static evaluation.

use super::{Board, Color};

/// Score of a won position
pub const WIN_SCORE: i32 = 1000;
/// Score of a lost position
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

impl Board {
    /// Material balance from `color`'s point of view.
    ///
    /// A side with neither pawns nor kings is eliminated: that side scores
    /// [`LOSS_SCORE`] and its opponent [`WIN_SCORE`].
    #[must_use]
    pub fn score(&self, color: Color) -> i32 {
        let own = self.army(color);
        let theirs = self.army(color.opponent());
        if own.is_eliminated() {
            return LOSS_SCORE;
        }
        if theirs.is_eliminated() {
            return WIN_SCORE;
        }
        own.material() - theirs.material()
    }
}
