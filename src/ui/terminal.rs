//! ratatui widgets for the arena, header, score table and action log

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::core::types::Position;
use crate::interface::Glyph;
use crate::rules::{GameMode, RankEntry};
use crate::ui::canvas::Canvas;
use crate::ui::state::{GameUI, LogCategory};

/// Draws the canvas one character per cell
pub struct ArenaView<'a> {
    pub canvas: &'a Canvas,
}

fn glyph_style(glyph: Option<Glyph>) -> Style {
    match glyph {
        Some(Glyph::Food) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some(Glyph::Hazard) => Style::default().fg(Color::DarkGray),
        Some(Glyph::Snake(_)) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::Gray),
    }
}

impl Widget for ArenaView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.canvas.width() as u16).min(area.width);
        let height = (self.canvas.height() as u16).min(area.height);
        for y in 0..height {
            for x in 0..width {
                let pos = Position::new(x as i32, y as i32);
                buf.get_mut(area.x + x, area.y + y)
                    .set_char(self.canvas.symbol_at(pos))
                    .set_style(glyph_style(self.canvas.glyph_at(pos)));
            }
        }
    }
}

/// Title and status lines above the arena
pub fn header(mode: GameMode, slowdown: u8, elapsed: u64, sudden_death: bool) -> Paragraph<'static> {
    let mut status = vec![
        Span::styled(
            format!("Twelve Snakes - {}", mode.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   SD: {}   Time: {}s", slowdown, elapsed)),
    ];
    if sudden_death {
        status.push(Span::styled(
            "   SUDDEN DEATH",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(vec![
        Line::from(status),
        Line::from("Press 1-4 to join   +/- speed   Enter scores   Esc quit"),
    ])
}

/// Score table in ranking order
pub fn score_table(entries: &[RankEntry], title: &str, footer: &str) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(" #  P#  Snake   A#   K#   D#   E#   L#     S#"),
        Line::from("-----------------------------------------------"),
    ];
    for (place, e) in entries.iter().enumerate() {
        let glyphs: String = std::iter::repeat(e.glyph).take(3).collect();
        lines.push(Line::from(format!(
            "{:>2}  {:>2}  {}   {:>3}  {:>3}  {:>3}  {:>3}  {:>3}  = {:>3}",
            place + 1,
            e.player.0 + 1,
            glyphs,
            e.apples,
            e.kills,
            e.deaths,
            e.players_eaten,
            e.length,
            e.score,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(footer.to_string()));

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    )
}

/// Most recent action log entries, newest last
pub fn log_panel(ui: &GameUI, rows: usize) -> Paragraph<'static> {
    let skip = ui.action_log.len().saturating_sub(rows);
    let lines: Vec<Line> = ui
        .action_log
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = match entry.category {
                LogCategory::Join => Color::Cyan,
                LogCategory::Death => Color::Red,
                LogCategory::Food => Color::Yellow,
                LogCategory::System => Color::Magenta,
            };
            Line::from(Span::styled(
                format!("[{:>5}] {}", entry.tick, entry.message),
                Style::default().fg(color),
            ))
        })
        .collect();

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"))
}
