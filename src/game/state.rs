use super::direction::Direction;
use super::Context;
use crate::command::Command;
use crate::consts;
use enum_dispatch::enum_dispatch;
use log::info;

/// Behavior of one phase of the game.  Exactly one `State` is active at a
/// time; the game hands every input, simulation tick, and render tick to it.
///
/// Methods that return `Some` request a transition to the returned state.
#[enum_dispatch]
pub(crate) trait State {
    fn name(&self) -> &'static str;

    /// Called right after the state becomes active.  Responsible for starting
    /// or stopping the timers and for any immediate drawing.
    fn on_enter(&self, _ctx: &mut Context<'_>) {}

    fn handle_input(&self, _cmd: Command, _ctx: &mut Context<'_>) -> Option<GameState> {
        None
    }

    fn tick(&self, _ctx: &mut Context<'_>) -> Option<GameState> {
        None
    }

    fn draw(&self, _ctx: &mut Context<'_>) {}
}

#[enum_dispatch(State)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    Paused,
    GameOver,
}

/// The snake is moving
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Running;

impl State for Running {
    fn name(&self) -> &'static str {
        "running"
    }

    fn on_enter(&self, ctx: &mut Context<'_>) {
        ctx.timers.start(ctx.now);
    }

    fn handle_input(&self, cmd: Command, ctx: &mut Context<'_>) -> Option<GameState> {
        match cmd {
            Command::Up => ctx.world.snake.set_direction(Direction::Up),
            Command::Right => ctx.world.snake.set_direction(Direction::Right),
            Command::Down => ctx.world.snake.set_direction(Direction::Down),
            Command::Left => ctx.world.snake.set_direction(Direction::Left),
            Command::Pause => return Some(Paused.into()),
            Command::Quit => (),
        }
        None
    }

    /// Move everything one step, then resolve feeding before checking for
    /// self-collision.  A snake that eats on the same tick it runs into
    /// itself still grows, and the game still ends.
    fn tick(&self, ctx: &mut Context<'_>) -> Option<GameState> {
        ctx.world.tick_entities();
        ctx.world.feed(&mut *ctx.rng);
        if ctx.world.snake.bites_itself() {
            let head = ctx.world.snake.head();
            info!("Snake ran into itself at ({}, {})", head.x, head.y);
            return Some(GameOver.into());
        }
        None
    }

    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.surface.clear();
        ctx.world.draw_entities(&mut *ctx.surface);
    }
}

/// Everything is frozen until the pause key is pressed again
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Paused;

impl State for Paused {
    fn name(&self) -> &'static str {
        "paused"
    }

    fn on_enter(&self, ctx: &mut Context<'_>) {
        ctx.timers.stop();
        ctx.surface.draw_centered_text(consts::PAUSE_TEXT);
    }

    fn handle_input(&self, cmd: Command, _ctx: &mut Context<'_>) -> Option<GameState> {
        (cmd == Command::Pause).then_some(Running.into())
    }
}

/// The snake has run into itself.  There is no way out of this state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOver;

impl State for GameOver {
    fn name(&self) -> &'static str {
        "game over"
    }

    /// Stop both timers, then show the final positions under the banner
    fn on_enter(&self, ctx: &mut Context<'_>) {
        ctx.timers.stop();
        ctx.surface.clear();
        ctx.world.draw_entities(&mut *ctx.surface);
        ctx.surface.draw_centered_text(consts::GAME_OVER_TEXT);
    }
}
