use super::direction::Direction;
use super::entity::{Entity, Palette};
use super::grid::Grid;
use super::surface::{cell_rect, Surface};
use ratatui::layout::{Position, Rect};

/// The snake: a head plus a trail of body segments.
///
/// All positions are cells of the grid the snake is on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(crate) head: Position,

    /// The positions of the cells in the snake's body, starting with the one
    /// right behind the head and ending with the tip of the tail
    pub(crate) body: Vec<Position>,

    /// The direction in which the snake is currently facing
    pub(crate) direction: Direction,

    /// The cell that the tip of the tail (or the head, if there is no body)
    /// moved out of on the most recent tick
    vacated: Option<Position>,
}

impl Snake {
    /// Create a new snake with only a head, at `head` and facing in
    /// `direction`
    pub(crate) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            head,
            body: Vec::new(),
            direction,
            vacated: None,
        }
    }

    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn body(&self) -> &[Position] {
        &self.body
    }

    /// Return every cell the snake occupies, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Change the snake's direction to `direction`.  Turning around onto the
    /// body is allowed.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Extend the body by one segment, placed on the cell the tail came from
    pub(crate) fn grow(&mut self, grid: Grid) {
        let tail = self.body.last().copied().unwrap_or(self.head);
        let segment = self
            .vacated
            .unwrap_or_else(|| self.direction.reverse().advance(tail, grid));
        self.body.push(segment);
        self.vacated = None;
    }

    /// Is the head on top of part of the body?
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}

impl Entity for Snake {
    /// Shift every body segment into the cell of the segment in front of it,
    /// then move the head one cell in the current direction.
    fn tick(&mut self, grid: Grid) {
        let prior_head = self.head;
        self.vacated = Some(self.body.last().copied().unwrap_or(prior_head));
        let len = self.body.len();
        if len > 1 {
            self.body.copy_within(..len - 1, 1);
        }
        if let Some(neck) = self.body.first_mut() {
            *neck = prior_head;
        }
        self.head = self.direction.advance(prior_head, grid);
    }

    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) {
        let cells = self.cells().map(cell_rect).collect::<Vec<Rect>>();
        surface.set_fill(palette.snake);
        surface.fill_rects(&cells);
    }
}
