//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It owns the RGB values
//! behind the engine's palette indices; the engine itself only ever sees
//! color ids.

use blockfall_core::snapshot::GameSnapshot;
use blockfall_types::ColorId;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// The 12-entry render palette behind [`ColorId`].
pub const PALETTE: [Rgb; 12] = [
    Rgb::new(255, 13, 114), // pink
    Rgb::new(13, 194, 255), // light blue
    Rgb::new(13, 255, 114), // bright green
    Rgb::new(245, 56, 255), // purple
    Rgb::new(255, 142, 13), // orange
    Rgb::new(255, 225, 56), // yellow
    Rgb::new(255, 53, 94),  // ruby red
    Rgb::new(102, 255, 102), // neon green
    Rgb::new(255, 110, 255), // pink purple
    Rgb::new(0, 255, 255),  // cyan
    Rgb::new(255, 153, 102), // peach
    Rgb::new(170, 0, 255),  // violet
];

/// RGB value for a palette index (wraps past the end).
pub fn palette_color(id: ColorId) -> Rgb {
    PALETTE[id as usize % PALETTE.len()]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders a [`GameSnapshot`] into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot centered in the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = snapshot.cols as u16 * self.cell_w;
        let board_px_h = snapshot.rows as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..snapshot.rows as i16 {
            for x in 0..snapshot.cols as i16 {
                match snapshot.cell(x, y).flatten() {
                    Some(color) => {
                        self.fill_cell(&mut fb, start_x, start_y, x, y, '█', block_style(color));
                    }
                    None => {
                        self.fill_cell(
                            &mut fb,
                            start_x,
                            start_y,
                            x,
                            y,
                            '·',
                            CellStyle {
                                fg: Rgb::new(70, 70, 80),
                                dim: true,
                                ..bg
                            },
                        );
                    }
                }
            }
        }

        // Active piece overlay; rows above the board are simply not drawn.
        let active = &snapshot.active;
        let style = block_style(active.color);
        for (dx, dy) in active.grid.filled_offsets() {
            let x = active.x + dx;
            let y = active.y + dy;
            if x >= 0 && x < snapshot.cols as i16 && y >= 0 && y < snapshot.rows as i16 {
                self.fill_cell(&mut fb, start_x, start_y, x, y, '█', style);
            }
        }

        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        if snapshot.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_text_at(
                &mut fb,
                start_x,
                start_y.saturating_add(frame_h / 2 + 1),
                frame_w,
                "R to restart",
            );
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i16,
        cell_y: i16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snapshot.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snapshot.level.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // One-piece preview: the next shape's matrix in its color.
        let style = block_style(snapshot.next_color);
        for (dx, dy) in snapshot.next_grid.filled_offsets() {
            let px = panel_x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.draw_overlay_text_at(fb, start_x, mid_y, frame_w, text);
    }

    fn draw_overlay_text_at(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, y, text, style);
    }
}

fn block_style(color: ColorId) -> CellStyle {
    CellStyle {
        fg: palette_color(color),
        bg: Rgb::new(20, 20, 28),
        bold: true,
        dim: false,
    }
}
