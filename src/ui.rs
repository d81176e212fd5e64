pub mod results;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, AppState},
    difficulty::Difficulty,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

pub(crate) fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

pub fn difficulty_header(difficulty: Difficulty) -> Line<'static> {
    Line::from(Span::styled(
        format!("=== {difficulty} MODE ==="),
        bold_style().fg(difficulty_color(difficulty)),
    ))
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match (self.state, self.round.as_ref()) {
            (AppState::Menu, _) | (_, None) => menu_lines(),
            (AppState::Preview, Some(round)) => {
                vec![
                    difficulty_header(round.difficulty),
                    Line::default(),
                    Line::from("Type this:"),
                    Line::default(),
                    Line::from(Span::styled(round.prompt.clone(), bold_style())),
                    Line::default(),
                    Line::from(Span::styled("Press any key to start...", italic_style())),
                ]
            }
            (AppState::Typing, Some(round)) => {
                let mut typed = vec![Span::raw("Your turn: "), Span::raw(round.input.clone())];
                // cursor cell
                typed.push(Span::styled(
                    " ",
                    Style::default().add_modifier(Modifier::UNDERLINED | Modifier::SLOW_BLINK),
                ));
                vec![
                    difficulty_header(round.difficulty),
                    Line::default(),
                    Line::from(vec![
                        Span::raw("Original: "),
                        Span::styled(round.prompt.clone(), bold_style()),
                    ]),
                    Line::default(),
                    Line::from(typed),
                    Line::default(),
                    Line::from(Span::styled("(enter) submit / (esc)ape", dim_style())),
                ]
            }
            (AppState::Summary, Some(round)) => {
                results::summary_lines(round, self.outcome.as_ref(), self.settings.placeholder)
            }
        };

        render_centered(lines, area, buf);
    }
}

fn menu_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Welcome to Typing Master!", bold_style())),
        Line::default(),
        Line::from("Choose difficulty:"),
    ];
    lines.extend(Difficulty::ALL.into_iter().map(|d| {
        Line::from(Span::styled(
            format!("{} - {} ({})", d.menu_key(), d, d.description()),
            Style::default().fg(difficulty_color(d)),
        ))
    }));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("(esc)ape", dim_style())));
    lines
}

/// Vertically centers the block, accounting for lines that will wrap
fn render_centered(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1) as usize;

    let occupied: usize = lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            width.div_ceil(max_chars_per_line).max(1)
        })
        .sum();
    let occupied = occupied.min(u16::MAX as usize) as u16;

    let padding = area
        .height
        .saturating_sub(occupied.saturating_add(VERTICAL_MARGIN * 2))
        / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(padding),
            Constraint::Min(occupied),
        ])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .render(chunks[1], buf);
}
