use super::grid::{decrement_wrapping, increment_wrapping, Grid};
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `grid`
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = decrement_wrapping(y, grid.height),
            Direction::Right => x = increment_wrapping(x, grid.width),
            Direction::Down => y = increment_wrapping(y, grid.height),
            Direction::Left => x = decrement_wrapping(x, grid.width),
        }
        Position { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Position::new(2, 6))]
    #[case(Direction::Down, Position::new(2, 7), Position::new(2, 8))]
    #[case(Direction::Right, Position::new(2, 7), Position::new(3, 7))]
    #[case(Direction::Left, Position::new(2, 7), Position::new(1, 7))]
    #[case(Direction::Up, Position::new(2, 0), Position::new(2, 14))]
    #[case(Direction::Down, Position::new(2, 14), Position::new(2, 0))]
    #[case(Direction::Right, Position::new(9, 7), Position::new(0, 7))]
    #[case(Direction::Left, Position::new(0, 7), Position::new(9, 7))]
    #[case(Direction::Left, Position::new(0, 0), Position::new(9, 0))]
    #[case(Direction::Up, Position::new(9, 0), Position::new(9, 14))]
    fn test_direction_advance(#[case] d: Direction, #[case] pos: Position, #[case] r: Position) {
        assert_eq!(d.advance(pos, Grid::new(10, 15)), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Right)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    fn lap_around_grid(#[case] d: Direction) {
        let grid = Grid::new(10, 15);
        let laps = match d {
            Direction::Up | Direction::Down => grid.height,
            Direction::Right | Direction::Left => grid.width,
        };
        for start in [Position::new(0, 0), Position::new(9, 14), Position::new(4, 0)] {
            let mut pos = start;
            for _ in 0..laps {
                pos = d.advance(pos, grid);
                assert!(grid.contains(pos));
            }
            assert_eq!(pos, start);
        }
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Right)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    fn reverse_undoes_advance(#[case] d: Direction) {
        let grid = Grid::new(10, 15);
        let start = Position::new(0, 14);
        assert_eq!(d.reverse().advance(d.advance(start, grid), grid), start);
        assert_eq!(d.reverse().reverse(), d);
    }
}
