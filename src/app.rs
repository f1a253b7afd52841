use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::game::{surface_size, Canvas, Game};
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    text::{Line, Span},
    widgets::Widget,
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

/// The application shell: feeds terminal events and the passage of time to
/// the game, and shows the game's canvas on the terminal
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<Canvas, R>,
    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> App {
        let canvas = Canvas::new(surface_size(config.grid), config.banner_style);
        App::from_game(Game::new(config, canvas))
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn from_game(game: Game<Canvas, R>) -> App<R> {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.game.run(Instant::now());
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either a terminal event or the next timer deadline, whichever
    /// comes first, and act on it.  With both timers stopped, this blocks until
    /// an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        let event = match self.game.next_deadline() {
            Some(when) => {
                let wait = when.saturating_duration_since(Instant::now());
                if !wait.is_zero() && poll(wait)? {
                    Some(read()?)
                } else {
                    None
                }
            }
            None => Some(read()?),
        };
        if let Some(event) = event {
            self.handle_event(&event);
        }
        self.game.on_timers(Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if *event == Event::FocusLost {
            self.game.suspend(Instant::now());
            return;
        }
        match Command::from_event(event) {
            Some(Command::Quit) => self.quitting = true,
            Some(cmd) => self.game.handle_input(cmd, Instant::now()),
            None => (),
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas = self.game.surface().buffer();
        let canvas_size = canvas.area.as_size();
        let block_size = Size {
            width: canvas_size.width.saturating_add(2),
            height: canvas_size.height.saturating_add(2),
        };
        let [top_area, help_area] = Layout::vertical([
            Constraint::Length(block_size.height),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let block_area = center_rect(top_area, block_size);
        DottedBorder.render(block_area, buf);
        copy_buffer(canvas, block_area.inner(Margin::new(1, 1)), buf);
        Line::from_iter([
            Span::styled("←↑↓→", consts::KEY_STYLE),
            Span::raw(" move · "),
            Span::styled("p", consts::KEY_STYLE),
            Span::raw(" pause · "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" quit"),
        ])
        .centered()
        .render(help_area, buf);
    }
}

/// Copy the cells of `src` into `dest`, with `src`'s origin placed at the
/// top-left corner of `area`.  Anything that doesn't fit in `area` is dropped.
fn copy_buffer(src: &Buffer, area: Rect, dest: &mut Buffer) {
    for pos in src.area.positions() {
        if pos.x >= area.width || pos.y >= area.height {
            continue;
        }
        let (Some(x), Some(y)) = (area.x.checked_add(pos.x), area.y.checked_add(pos.y)) else {
            continue;
        };
        if let (Some(cell), Some(target)) = (src.cell(pos), dest.cell_mut(Position { x, y })) {
            *target = cell.clone();
        }
    }
}

/// A border drawn with dots, to show that the edges wrap around
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.width.saturating_sub(1);
        let max_y = area.height.saturating_sub(1);
        let mut draw = |x: u16, y: u16, symbol: char| {
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_char(symbol);
            }
        };
        draw(0, 0, '·');
        draw(max_x, 0, '·');
        draw(max_x, max_y, '·');
        draw(0, max_y, '·');
        for x in 1..max_x {
            draw(x, 0, '⋯');
            draw(x, max_y, '⋯');
        }
        for y in 1..max_y {
            draw(0, y, '⋮');
            draw(max_x, y, '⋮');
        }
    }
}
