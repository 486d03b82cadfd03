//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The framed area covers the extended board: the playable grid plus the
//! ring of edge cells around it, where the push cursor and any block pushed
//! off the board are drawn.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CENTER_BG: Rgb = Rgb::new(40, 55, 45);
const EDGE_BG: Rgb = Rgb::new(12, 12, 16);

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Frame placement for one render.
#[derive(Debug, Clone, Copy)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the framed area for a grid of side `grid_size`.
    pub fn frame_size(&self, grid_size: i8) -> (u16, u16) {
        let ext = grid_size as u16 + 2;
        (ext * self.cell_w + 2, ext * self.cell_h + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the edge cell currently selected for a push.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i8, i8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let n = snap.grid_size;
        let (frame_w, frame_h) = self.frame_size(n);
        let layout = Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        };

        self.draw_border(fb, layout, CellStyle::default());

        for row in -1..=n {
            for col in -1..=n {
                let on_board = row >= 0 && row < n && col >= 0 && col < n;
                if on_board {
                    self.draw_empty_cell(fb, layout, snap, row, col);
                } else {
                    self.draw_edge_cell(fb, layout, n, row, col, cursor == Some((row, col)));
                }
            }
        }

        let flash = snap.is_animating;
        for b in &snap.blocks {
            let on_board = b.row >= 0 && b.row < n && b.col >= 0 && b.col < n;
            let fg = if !on_board {
                Rgb::new(230, 70, 70)
            } else if flash && snap.last_moved.contains(&b.id) {
                Rgb::new(255, 255, 255)
            } else if snap.in_center(b.row, b.col) {
                Rgb::new(110, 220, 130)
            } else {
                Rgb::new(90, 160, 230)
            };
            let bg = if snap.in_center(b.row, b.col) {
                CENTER_BG
            } else if on_board {
                BOARD_BG
            } else {
                EDGE_BG
            };
            self.fill_cell(fb, layout, b.row, b.col, '█', CellStyle::new(fg, bg).bold());
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.status {
            GameStatus::Won => self.draw_overlay_text(fb, layout, "SOLVED"),
            GameStatus::Lost => self.draw_overlay_text(fb, layout, "OFF THE BOARD"),
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i8, i8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout, style: CellStyle) {
        let (x, y, w, h) = (l.start_x, l.start_y, l.frame_w, l.frame_h);
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, l: Layout, snap: &GameSnapshot, row: i8, col: i8) {
        let (ch, bg) = if snap.in_center(row, col) {
            ('+', CENTER_BG)
        } else {
            ('·', BOARD_BG)
        };
        let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
        self.fill_cell(fb, l, row, col, ch, style);
    }

    fn draw_edge_cell(&self, fb: &mut FrameBuffer, l: Layout, n: i8, row: i8, col: i8, selected: bool) {
        // Corners have no push.
        let ch = if row == -1 && col >= 0 && col < n {
            '▼'
        } else if row == n && col >= 0 && col < n {
            '▲'
        } else if col == -1 && row >= 0 && row < n {
            '▶'
        } else if col == n && row >= 0 && row < n {
            '◀'
        } else {
            ' '
        };
        let style = if selected {
            CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(240, 200, 80)).bold()
        } else {
            CellStyle::new(Rgb::new(70, 70, 80), EDGE_BG).dim()
        };
        self.fill_cell(fb, l, row, col, ' ', style);
        let (px, py) = self.cell_origin(l, row, col);
        fb.put_char(px, py, ch, style);
    }

    /// Top-left terminal position of extended-board cell `(row, col)`.
    fn cell_origin(&self, l: Layout, row: i8, col: i8) -> (u16, u16) {
        let px = l.start_x + 1 + (col + 1) as u16 * self.cell_w;
        let py = l.start_y + 1 + (row + 1) as u16 * self.cell_h;
        (px, py)
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, l: Layout, row: i8, col: i8, ch: char, style: CellStyle) {
        if row < -1 || col < -1 {
            return;
        }
        let (px, py) = self.cell_origin(l, row, col);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, l: Layout) {
        let panel_x = l.start_x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = l.start_y;
        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x + 8, y, snap.mode.as_str(), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "SEED", label);
        match snap.seed {
            Some(seed) => fb.put_u32(panel_x + 8, y, seed, value),
            None => fb.put_str(panel_x + 8, y, "-", value),
        }
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x + 8, y, snap.move_count, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "RETRIES", label);
        fb.put_u32(panel_x + 8, y, snap.retry_count, value);
        y = y.saturating_add(2);

        let help = value.dim();
        for line in [
            "arrows  move",
            "enter   push",
            "r       retry",
            "m       mode",
            "n       next day",
            "q       quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, l: Layout, text: &str) {
        let mid_y = l.start_y.saturating_add(l.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = l.start_x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
