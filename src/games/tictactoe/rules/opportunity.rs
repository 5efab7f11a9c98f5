//! Opportunity detection: lines one mark away from a win.

use super::super::{Board, Cell, Marker, Position};
use super::WINNING_LINES;
use tracing::{instrument, trace};

/// Returns the empty cell of the first line `marker` can complete.
///
/// A line qualifies when exactly two of its cells hold `marker` and the third
/// is empty. Lines are scanned in [`WINNING_LINES`] order, so when several
/// lines qualify the earliest one wins.
#[instrument(skip_all, fields(marker = %marker))]
pub fn opportunity_position(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Cell::Marked(marker))
            .count();
        let mut empty = line.iter().copied().filter(|pos| board.is_unmarked(*pos));

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => {
                trace!(position = pos.number(), "Found opportunity");
                Some(pos)
            }
            _ => None,
        }
    })
}
