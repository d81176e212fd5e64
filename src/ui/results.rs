use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::{bold_style, difficulty_header, dim_style, italic_style};
use crate::{
    diff::DiffSegment,
    round::{Round, RoundOutcome, RoundReport},
};

const PLAY_AGAIN: &str = "Play again? (y/n)   (r)etry same sentence / (esc)ape";

/// Colors each segment: errors red, matches plain
pub fn diff_spans(segments: &[DiffSegment], placeholder: char) -> Vec<Span<'static>> {
    let red_bold_style = bold_style().fg(Color::Red);

    segments
        .iter()
        .map(|segment| match segment {
            DiffSegment::Matched(c) => Span::raw(c.to_string()),
            DiffSegment::Mismatched(' ') => Span::styled("·", red_bold_style),
            DiffSegment::Mismatched(_) | DiffSegment::Missing => {
                Span::styled(segment.glyph(placeholder).to_string(), red_bold_style)
            }
        })
        .collect()
}

pub fn report_lines(report: &RoundReport, placeholder: char) -> Vec<Line<'static>> {
    let result = &report.result;
    let mut your_text = vec![Span::raw("Your text: ")];
    your_text.extend(diff_spans(&report.diff, placeholder));

    vec![
        Line::from(Span::styled("--- Results ---", bold_style())),
        Line::from(format!("Time: {:.2} seconds", result.elapsed_secs)),
        Line::from(format!("Errors: {}", result.error_count)),
        Line::from(format!("Speed: {:.1} WPM", result.wpm)),
        Line::from(Span::styled(format!("Score: {}", result.score), bold_style())),
        Line::default(),
        Line::from("Error analysis:"),
        Line::from(format!("Original: {}", report.original)),
        Line::from(your_text),
    ]
}

pub fn summary_lines(
    round: &Round,
    outcome: Option<&RoundOutcome>,
    placeholder: char,
) -> Vec<Line<'static>> {
    let mut lines = vec![difficulty_header(round.difficulty), Line::default()];

    match outcome {
        Some(RoundOutcome::Completed(report)) => lines.extend(report_lines(report, placeholder)),
        Some(RoundOutcome::Aborted) | None => lines.push(Line::from(Span::styled(
            "You didn't type anything!",
            Style::default().fg(Color::Yellow).patch(italic_style()),
        ))),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(PLAY_AGAIN, dim_style())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::difficulty::Difficulty;
    use crate::round::evaluate;
    use ratatui::style::Modifier;
    use std::time::Duration;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_diff_spans_styles() {
        let spans = diff_spans(&compute_diff("abc", "axc"), '_');
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "a");
        assert_eq!(spans[0].style, Style::default());
        assert_eq!(spans[1].content, "x");
        assert_eq!(spans[1].style.fg, Some(Color::Red));
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[2].content, "c");
    }

    #[test]
    fn test_diff_spans_placeholder_and_space() {
        let spans = diff_spans(&compute_diff("a b", "a"), '~');
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a~~");

        let spans = diff_spans(&compute_diff("ab", "a "), '_');
        assert_eq!(spans[1].content, "·");
    }

    #[test]
    fn test_report_lines_format() {
        let outcome = evaluate(
            "The cat sits on the mat.",
            "The cat sits on the hat.",
            Duration::from_millis(12_346),
            Difficulty::Easy,
        );
        let RoundOutcome::Completed(report) = outcome else {
            panic!("expected a completed round");
        };
        let lines: Vec<String> = report_lines(&report, '_').iter().map(line_text).collect();

        assert_eq!(lines[1], "Time: 12.35 seconds");
        assert_eq!(lines[2], "Errors: 1");
        assert_eq!(lines[3], "Speed: 29.2 WPM");
        assert_eq!(lines[4], "Score: 135");
        assert_eq!(lines[7], "Original: The cat sits on the mat.");
        assert_eq!(lines[8], "Your text: The cat sits on the hat.");
    }

    #[test]
    fn test_summary_for_aborted_round() {
        let round = Round::new("cat".to_string(), Difficulty::Medium);
        let lines: Vec<String> = summary_lines(&round, Some(&RoundOutcome::Aborted), '_')
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(lines[0], "=== Medium MODE ===");
        assert!(lines.iter().any(|l| l == "You didn't type anything!"));
        assert!(lines.last().unwrap().starts_with("Play again? (y/n)"));
        assert!(!lines.iter().any(|l| l.starts_with("Score:")));
    }
}
