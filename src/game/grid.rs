use rand::Rng;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The toroidal playing field: `width × height` cells, where leaving one edge
/// re-enters at the opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_position<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}

/// Step `coord` one cell forwards within `0..extent`, wrapping from the last
/// cell to the first.
pub(crate) fn increment_wrapping(coord: u16, extent: u16) -> u16 {
    debug_assert!(coord < extent, "coordinate {coord} outside of 0..{extent}");
    coord.checked_add(1).filter(|&c| c < extent).unwrap_or(0)
}

/// Step `coord` one cell backwards within `0..extent`, wrapping from the first
/// cell to the last.
pub(crate) fn decrement_wrapping(coord: u16, extent: u16) -> u16 {
    debug_assert!(coord < extent, "coordinate {coord} outside of 0..{extent}");
    coord.checked_sub(1).unwrap_or(extent - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 1)]
    #[case(5, 10, 6)]
    #[case(9, 10, 0)]
    #[case(0, 1, 0)]
    fn test_increment_wrapping(#[case] coord: u16, #[case] extent: u16, #[case] r: u16) {
        assert_eq!(increment_wrapping(coord, extent), r);
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(5, 10, 4)]
    #[case(0, 10, 9)]
    #[case(0, 1, 0)]
    fn test_decrement_wrapping(#[case] coord: u16, #[case] extent: u16, #[case] r: u16) {
        assert_eq!(decrement_wrapping(coord, extent), r);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(30)]
    #[case(u16::MAX)]
    fn full_lap_returns_to_start(#[case] extent: u16) {
        for start in [0, extent / 2, extent - 1] {
            let mut fwd = start;
            let mut back = start;
            for _ in 0..extent {
                fwd = increment_wrapping(fwd, extent);
                back = decrement_wrapping(back, extent);
            }
            assert_eq!(fwd, start);
            assert_eq!(back, start);
        }
    }

    #[test]
    fn random_positions_in_bounds() {
        let grid = Grid::new(7, 4);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_position(&mut rng)));
        }
    }

    #[test]
    fn positions_cover_grid() {
        let grid = Grid::new(4, 3);
        let cells = grid.positions().collect::<Vec<_>>();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(3, 2)));
    }
}
