//! Terminal rendering for the game: a ratatui canvas in logical screen coordinates.

use crate::game::Game;
use crate::geometry::Rect as GameRect;
use crate::render::{draw_game, RenderSink, Shade};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

/// Collects the core's draw calls for one frame.
#[derive(Debug, Default)]
pub struct CanvasSink {
    pub rects: Vec<(GameRect, Shade)>,
    pub text: Vec<String>,
}

impl RenderSink for CanvasSink {
    fn fill_rect(&mut self, rect: GameRect, shade: Shade) {
        self.rects.push((rect, shade));
    }

    fn debug_print(&mut self, text: &str) {
        self.text.push(text.to_string());
    }
}

fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::White => Color::White,
    }
}

/// A solid rectangle in top-down game coordinates, clipped to the screen.
struct FilledRect {
    rect: GameRect,
    screen: (f32, f32),
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let (width, height) = self.screen;
        let left = self.rect.x.max(0.0);
        let right = self.rect.right().min(width);
        let top = self.rect.y.max(0.0);
        let bottom = self.rect.bottom().min(height);
        if left >= right || top >= bottom {
            return;
        }

        // Canvas y grows upward
        let corners = (
            painter.get_point(left as f64, (height - top) as f64),
            painter.get_point(right as f64, (height - bottom) as f64),
        );
        let (Some((col0, row0)), Some((col1, row1))) = corners else {
            return;
        };
        for row in row0.min(row1)..=row0.max(row1) {
            for col in col0.min(col1)..=col0.max(col1) {
                painter.paint(col, row, self.color);
            }
        }
    }
}

/// Render the game scene: bordered play field plus a one-line status bar.
pub fn render_game<S>(frame: &mut Frame, area: Rect, game: &Game<S>, title: &str) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let mut sink = CanvasSink::default();
    draw_game(game, &mut sink);

    let (width, height) = game.config.layout();
    let canvas = Canvas::default()
        .marker(Marker::Block)
        .x_bounds([0.0, width as f64])
        .y_bounds([0.0, height as f64])
        .paint(|ctx| {
            for (rect, shade) in &sink.rects {
                ctx.draw(&FilledRect {
                    rect: *rect,
                    screen: (width, height),
                    color: shade_color(*shade),
                });
            }
        });
    frame.render_widget(canvas, chunks[0]);

    render_status_bar(frame, chunks[1], &sink.text);
}

fn render_status_bar(frame: &mut Frame, area: Rect, debug_text: &[String]) {
    let mut spans = vec![Span::styled(
        format!(" {} ", debug_text.join("  ")),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, action) in [("[Space/Up]", "Flap"), ("[Esc/q]", "Quit")] {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
