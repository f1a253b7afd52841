use super::grid::Grid;
use super::surface::{cell_rect, Surface};
use crate::consts;
use log::{debug, warn};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{layout::Position, style::Color};

/// Something that lives on the grid and takes part in the game loop.  Both
/// operations do nothing by default.
pub(crate) trait Entity {
    /// Advance by one simulation step
    fn tick(&mut self, _grid: Grid) {}

    fn draw(&self, _surface: &mut dyn Surface, _palette: &Palette) {}
}

/// Fill colors for the entities
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) snake: Color,
    pub(crate) seed: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_COLOR,
            seed: consts::SEED_COLOR,
        }
    }
}

/// The thing the snake eats
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Seed {
    pub(crate) pos: Position,
}

impl Seed {
    pub(crate) fn new(pos: Position) -> Seed {
        Seed { pos }
    }

    /// Move the seed to a random cell of `grid` that is not in `occupied`.
    ///
    /// Cells are sampled uniformly until a free one turns up.  If that takes
    /// too long (a nearly-full grid), the free cells are enumerated instead.
    /// If there are no free cells at all, the seed stays where it is and
    /// `false` is returned.
    pub(crate) fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        occupied: &[Position],
        rng: &mut R,
    ) -> bool {
        let attempts = grid.area().saturating_mul(consts::SEED_SAMPLES_PER_CELL);
        let mut found = std::iter::repeat_with(|| grid.random_position(rng))
            .take(attempts)
            .find(|p| !occupied.contains(p));
        if found.is_none() {
            found = grid
                .positions()
                .filter(|p| !occupied.contains(p))
                .choose(rng);
        }
        if let Some(pos) = found {
            debug!("Placing seed at ({}, {})", pos.x, pos.y);
            self.pos = pos;
            true
        } else {
            warn!("No free cell left for the seed");
            false
        }
    }
}

impl Entity for Seed {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) {
        surface.set_fill(palette.seed);
        surface.fill_rects(&[cell_rect(self.pos)]);
    }
}
