//! Screen layout for the chat shell.

mod shell;

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
};

pub use shell::{render_app, MIN_HEIGHT, MIN_WIDTH};

/// Center a fixed-size rect inside `area`, shrinking it to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Screen text of a buffer: one line per row, trailing blanks trimmed.
pub fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)))
                .map(Cell::symbol)
                .collect();
            row.trim_end_matches(' ').to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
