mod direction;
mod entity;
mod grid;
mod snake;
mod state;
mod surface;
mod timer;
pub(crate) use self::entity::Palette;
pub(crate) use self::grid::Grid;
pub(crate) use self::surface::Canvas;
use self::direction::Direction;
use self::entity::{Entity, Seed};
use self::snake::Snake;
use self::state::{GameState, Paused, Running, State};
use self::surface::Surface;
use self::timer::Timers;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use log::{debug, info};
use rand::{Rng, RngCore};
use ratatui::layout::{Position, Size};
use std::time::Instant;

/// Return the size of the surface needed to draw a grid of size `grid`
pub(crate) fn surface_size(grid: Grid) -> Size {
    let scale = consts::CELL_SCALE;
    Size {
        width: grid.width.saturating_mul(scale.width),
        height: grid.height.saturating_mul(scale.height),
    }
}

/// The things on the grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct World {
    pub(crate) grid: Grid,
    pub(crate) seed: Seed,
    pub(crate) snake: Snake,
    pub(crate) palette: Palette,
}

impl World {
    /// Create a world with the snake in the middle of `grid`, heading right.
    /// The seed is not placed until [`World::place_seed()`] is called.
    pub(crate) fn new(grid: Grid, palette: Palette) -> World {
        World {
            grid,
            seed: Seed::new(Position::ORIGIN),
            snake: Snake::new(grid.center(), Direction::Right),
            palette,
        }
    }

    pub(crate) fn tick_entities(&mut self) {
        let grid = self.grid;
        let entities: [&mut dyn Entity; 2] = [&mut self.seed, &mut self.snake];
        for entity in entities {
            entity.tick(grid);
        }
    }

    pub(crate) fn draw_entities(&self, surface: &mut dyn Surface) {
        let entities: [&dyn Entity; 2] = [&self.seed, &self.snake];
        for entity in entities {
            entity.draw(surface, &self.palette);
        }
    }

    /// Move the seed to a random cell not covered by the snake
    pub(crate) fn place_seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let occupied = self.snake.cells().collect::<Vec<_>>();
        self.seed.relocate(self.grid, &occupied, rng)
    }

    /// If the snake's head is on the seed, grow the snake, move the seed
    /// elsewhere, and return `true`.
    pub(crate) fn feed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.snake.head() != self.seed.pos {
            return false;
        }
        self.snake.grow(self.grid);
        debug!("Snake ate a seed; length is now {}", self.snake.body().len() + 1);
        self.place_seed(rng);
        true
    }
}

/// Everything a [`State`] may act on
pub(crate) struct Context<'a> {
    pub(crate) world: &'a mut World,
    pub(crate) timers: &'a mut Timers,
    pub(crate) surface: &'a mut dyn Surface,
    pub(crate) rng: &'a mut dyn RngCore,
    pub(crate) now: Instant,
}

/// The game orchestrator: owns the world, the active state, the timers, and
/// the surface everything is drawn on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<S, R = rand::rngs::ThreadRng> {
    rng: R,
    world: World,
    state: GameState,
    timers: Timers,
    surface: S,
}

impl<S: Surface> Game<S, rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config, surface: S) -> Self {
        Game::new_with_rng(config, surface, rand::rng())
    }
}

impl<S: Surface, R: Rng> Game<S, R> {
    pub(crate) fn new_with_rng(config: &Config, surface: S, rng: R) -> Game<S, R> {
        Game {
            rng,
            world: World::new(config.grid, config.palette),
            state: Running.into(),
            timers: Timers::new(config.simulation_period, config.render_period),
            surface,
        }
    }

    /// Place the seed and start the game
    pub(crate) fn run(&mut self, now: Instant) {
        self.world.place_seed(&mut self.rng);
        self.change_state(Running.into(), now);
    }

    pub(crate) fn handle_input(&mut self, cmd: Command, now: Instant) {
        let state = self.state;
        let next = state.handle_input(cmd, &mut self.context(now));
        if let Some(next) = next {
            self.change_state(next, now);
        }
    }

    /// Pause the game if it's running; used when the terminal loses focus
    pub(crate) fn suspend(&mut self, now: Instant) {
        if self.state == GameState::from(Running) {
            self.change_state(Paused.into(), now);
        }
    }

    /// Run a simulation tick and/or a render tick if either is due
    pub(crate) fn on_timers(&mut self, now: Instant) {
        if self.timers.simulation.fire(now) {
            let state = self.state;
            let next = state.tick(&mut self.context(now));
            if let Some(next) = next {
                self.change_state(next, now);
            }
        }
        if self.timers.render.fire(now) {
            let state = self.state;
            state.draw(&mut self.context(now));
        }
    }

    fn change_state(&mut self, next: GameState, now: Instant) {
        info!("Entering {} state", next.name());
        self.state = next;
        next.on_enter(&mut self.context(now));
    }

    fn context(&mut self, now: Instant) -> Context<'_> {
        Context {
            world: &mut self.world,
            timers: &mut self.timers,
            surface: &mut self.surface,
            rng: &mut self.rng,
            now,
        }
    }
}

impl<S, R> Game<S, R> {
    /// Return the earliest time at which [`Game::on_timers()`] has something
    /// to do, or `None` if the timers are stopped
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}
