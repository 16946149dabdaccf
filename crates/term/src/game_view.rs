//! GameView: maps an engine [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::leaderboard::LeaderboardRecord;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const LABEL: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: Style = Style::fg(Rgb::new(200, 200, 200));
const CONFETTI: Style = Style::fg(Rgb::new(255, 200, 60)).bold();

/// Lays out the board, the side panel and the overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (BOARD_WIDTH as u16 * self.cell_w + 2, BOARD_HEIGHT as u16 + 2)
    }

    /// Render a frame into an existing framebuffer, resizing it to the
    /// viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        leaders: &[LeaderboardRecord],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h, Style::default());

        for (y, row) in snap.board.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', Style::fg(piece_color(*kind)).on(PLAYFIELD_BG)),
                    None => ('·', Style::fg(Rgb::new(90, 90, 100)).dim().on(PLAYFIELD_BG)),
                };
                let px = start_x + 1 + x as u16 * self.cell_w;
                fb.fill_rect(px, start_y + 1 + y as u16, self.cell_w, 1, ch, style);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, leaders, panel_x, start_y);

        if !snap.is_playing {
            let title = if snap.game_over {
                "GAME OVER"
            } else {
                "FALLING BLOCKS"
            };
            let mid_y = start_y.saturating_add(frame_h / 2);
            draw_centered(fb, start_x, frame_w, mid_y, title, LABEL);
            draw_centered(fb, start_x, frame_w, mid_y + 1, "press Enter", VALUE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        leaders: &[LeaderboardRecord],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, leaders, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        leaders: &[LeaderboardRecord],
        x: u16,
        start_y: u16,
    ) {
        if x >= fb.width() {
            return;
        }

        let mut y = start_y;
        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x, y + 1, snap.score, VALUE);
        y += 3;

        fb.put_str(x, y, "NEXT", LABEL);
        let next: Vec<&str> = snap.upcoming.iter().map(PieceKind::letter).collect();
        fb.put_str(x, y + 1, &next.join(" "), VALUE);
        y += 3;

        fb.put_str(x, y, "SPEED", LABEL);
        fb.put_str(x, y + 1, snap.tick_speed.as_str(), VALUE);
        y += 3;

        for event in snap.live_confetti() {
            let noun = if event.magnitude == 1 { "LINE" } else { "LINES" };
            fb.put_str(x, y, &format!("+{} {}", event.magnitude, noun), CONFETTI);
            y += 1;
        }
        y += 1;

        if !leaders.is_empty() {
            fb.put_str(x, y, "LEADERBOARD", LABEL);
            y += 1;
            for (rank, record) in leaders.iter().enumerate() {
                let line = format!("{}. {} {}", rank + 1, record.id, record.highscore);
                fb.put_str(x, y, &line, VALUE);
                y += 1;
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_idle_frame_shows_title_and_prompt() {
        let fb = GameView::default().render(&GameSnapshot::default(), &[], Viewport::new(60, 24));
        let text = screen(&fb);
        assert!(text.contains("FALLING BLOCKS"));
        assert!(text.contains("press Enter"));
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn test_board_is_drawn_two_columns_per_cell() {
        let mut game = Game::with_seed(3);
        game.start_game();
        let snap = game.snapshot();
        let fb = GameView::default().render(&snap, &[], Viewport::new(60, 24));

        // Border width is 10 cells * 2 columns + 2.
        let top = fb.row_text(1);
        assert_eq!(top.chars().filter(|&c| c == '─').count(), 20);

        let blocks = (0..fb.height())
            .map(|y| fb.row_text(y).chars().filter(|&c| c == '█').count())
            .sum::<usize>();
        assert_eq!(blocks, 8, "four cells of the active piece, two columns each");
        assert!(!screen(&fb).contains("press Enter"));
    }

    #[test]
    fn test_panel_lists_next_letters_and_leaders() {
        let mut game = Game::with_seed(9);
        game.start_game();
        let snap = game.snapshot();
        let leaders = vec![
            LeaderboardRecord::new("ada", 900),
            LeaderboardRecord::new("bob", 300),
        ];
        let fb = GameView::default().render(&snap, &leaders, Viewport::new(70, 24));
        let text = screen(&fb);

        let next: Vec<&str> = snap.upcoming.iter().map(PieceKind::letter).collect();
        assert!(text.contains(&next.join(" ")));
        assert!(text.contains("1. ada 900"));
        assert!(text.contains("2. bob 300"));
        assert!(text.contains("normal"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&GameSnapshot::default(), &[], Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
