use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

/// The drawing primitives the game needs from its output device.
///
/// Coordinates are in surface units (terminal cells), i.e., grid cells
/// already multiplied by [`CELL_SCALE`][consts::CELL_SCALE].
pub(crate) trait Surface {
    fn size(&self) -> Size;

    fn clear_rect(&mut self, area: Rect);

    /// Set the color used by subsequent calls to [`Surface::fill_rects()`]
    fn set_fill(&mut self, color: Color);

    fn fill_rects(&mut self, areas: &[Rect]);

    /// Draw `text` centered horizontally & vertically on the surface
    fn draw_centered_text(&mut self, text: &str);

    fn clear(&mut self) {
        let area = Rect::from((Position::ORIGIN, self.size()));
        self.clear_rect(area);
    }
}

/// Return the surface rectangle covering the grid cell at `pos`
pub(crate) fn cell_rect(pos: Position) -> Rect {
    let scale = consts::CELL_SCALE;
    Rect::new(
        pos.x.saturating_mul(scale.width),
        pos.y.saturating_mul(scale.height),
        scale.width,
        scale.height,
    )
}

/// A retained terminal-cell raster.  Whatever is drawn stays in place until
/// it is cleared or drawn over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Canvas {
    buffer: Buffer,
    fill: Color,
    banner_style: Style,
}

impl Canvas {
    pub(crate) fn new(size: Size, banner_style: Style) -> Canvas {
        Canvas {
            buffer: Buffer::empty(Rect::from((Position::ORIGIN, size))),
            fill: Color::Reset,
            banner_style,
        }
    }

    pub(crate) fn buffer(&self) -> &Buffer {
        &self.buffer
    }
}

impl Surface for Canvas {
    fn size(&self) -> Size {
        self.buffer.area.as_size()
    }

    fn clear_rect(&mut self, area: Rect) {
        for pos in area.intersection(self.buffer.area).positions() {
            if let Some(cell) = self.buffer.cell_mut(pos) {
                cell.reset();
            }
        }
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rects(&mut self, areas: &[Rect]) {
        let style = Style::reset().bg(self.fill);
        for &area in areas {
            for pos in area.intersection(self.buffer.area).positions() {
                if let Some(cell) = self.buffer.cell_mut(pos) {
                    cell.set_symbol(consts::FILL_SYMBOL).set_style(style);
                }
            }
        }
    }

    fn draw_centered_text(&mut self, text: &str) {
        let area = self.buffer.area;
        if area.is_empty() {
            return;
        }
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = area.width.saturating_sub(width) / 2;
        let y = area.height / 2;
        self.buffer.set_stringn(
            x,
            y,
            text,
            usize::from(area.width - x),
            Style::reset().patch(self.banner_style),
        );
    }
}

#[cfg(test)]
pub(crate) use self::recorder::{DrawOp, Recorder};

#[cfg(test)]
mod recorder {
    use super::Surface;
    use ratatui::{
        layout::{Rect, Size},
        style::Color,
    };

    /// A single call made on a [`Recorder`]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub(crate) enum DrawOp {
        ClearRect(Rect),
        SetFill(Color),
        FillRects(Vec<Rect>),
        CenteredText(String),
    }

    /// A surface that remembers what was drawn on it instead of drawing
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Recorder {
        pub(crate) size: Size,
        pub(crate) ops: Vec<DrawOp>,
    }

    impl Recorder {
        pub(crate) fn new(size: Size) -> Recorder {
            Recorder {
                size,
                ops: Vec::new(),
            }
        }

        pub(crate) fn take(&mut self) -> Vec<DrawOp> {
            std::mem::take(&mut self.ops)
        }

        pub(crate) fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::CenteredText(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> Size {
            self.size
        }

        fn clear_rect(&mut self, area: Rect) {
            self.ops.push(DrawOp::ClearRect(area));
        }

        fn set_fill(&mut self, color: Color) {
            self.ops.push(DrawOp::SetFill(color));
        }

        fn fill_rects(&mut self, areas: &[Rect]) {
            self.ops.push(DrawOp::FillRects(areas.to_vec()));
        }

        fn draw_centered_text(&mut self, text: &str) {
            self.ops.push(DrawOp::CenteredText(text.to_owned()));
        }
    }
}
