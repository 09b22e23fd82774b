//! Terminal backend: raw mode lifecycle and framebuffer flushing.
//!
//! The renderer owns stdout. `enter` switches the terminal into the
//! alternate screen with the cursor hidden; `exit` restores it. `draw`
//! performs a full-frame redraw of a [`FrameBuffer`] with queued writes
//! and a single flush.

use std::io::{Stdout, Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    out: Stdout,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: stdout(),
            entered: false,
        }
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(size()?)
    }

    /// Enter raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        queue!(
            self.out,
            EnterAlternateScreen,
            Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        self.out.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        disable_raw_mode()?;
        self.entered = false;
        Ok(())
    }

    /// Full redraw of the framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let mut current: Option<CellStyle> = None;
        for y in 0..fb.height() {
            queue!(self.out, MoveTo(0, y))?;
            for x in 0..fb.width() {
                let Some(cell) = fb.get(x, y) else { continue };
                if current != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current = Some(cell.style);
                }
                write!(self.out, "{}", cell.ch)?;
            }
        }
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(rgb_to_color(style.fg)),
            SetBackgroundColor(rgb_to_color(style.bg)),
        )?;
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best effort; the terminal must not be left in raw mode on panic.
        let _ = self.exit();
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
