//! Plain-text city frames for terminals and logs

use std::io::Write;

use crate::core::types::{Shape, Tick};
use crate::render::{RenderItem, RenderSurface};

const EMPTY_CELL: char = '.';

/// Glyph for one item: agents show their mood, everything else its shape
pub fn glyph(item: &RenderItem) -> char {
    if let Some(mood) = item.mood {
        return mood.glyph();
    }
    match (item.shape, item.is_active) {
        (Shape::Round, true) => 'O',
        (Shape::Round, false) => 'o',
        (Shape::Square, true) => '#',
        (Shape::Square, false) => '+',
        (Shape::Triangle, true) => 'A',
        (Shape::Triangle, false) => 'a',
    }
}

/// Render a bordered `size` x `size` frame
pub fn render_frame(size: usize, items: &[RenderItem]) -> String {
    let mut rows = vec![vec![EMPTY_CELL; size]; size];
    for item in items {
        if let Some(cell) = rows
            .get_mut(item.position.row)
            .and_then(|row| row.get_mut(item.position.column))
        {
            *cell = glyph(item);
        }
    }

    let border = format!("+{}+", "-".repeat(size));
    let mut frame = String::with_capacity((size + 3) * (size + 2));
    frame.push_str(&border);
    frame.push('\n');
    for row in rows {
        frame.push('|');
        frame.extend(row);
        frame.push_str("|\n");
    }
    frame.push_str(&border);
    frame.push('\n');
    frame
}

/// Writes one framed grid per tick to any writer
pub struct AsciiSurface<W: Write> {
    out: W,
}

impl<W: Write> AsciiSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for AsciiSurface<W> {
    fn present(&mut self, tick: Tick, size: usize, items: &[RenderItem]) -> std::io::Result<()> {
        writeln!(self.out, "Tick {}", tick)?;
        self.out.write_all(render_frame(size, items).as_bytes())?;
        self.out.flush()
    }
}
