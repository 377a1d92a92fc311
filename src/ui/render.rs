use crate::core::line::{LineColor, RenderLine};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn to_color(color: LineColor) -> Color {
    match color {
        LineColor::Default => Color::Reset,
        LineColor::Black => Color::Black,
        LineColor::Red => Color::Red,
        LineColor::Green => Color::Green,
        LineColor::Yellow => Color::Yellow,
        LineColor::Blue => Color::Blue,
        LineColor::Magenta => Color::Magenta,
        LineColor::Cyan => Color::Cyan,
        LineColor::White => Color::White,
    }
}

fn to_line(line: &RenderLine) -> Line<'_> {
    let style = Style::default().fg(to_color(line.fg)).bg(to_color(line.bg));
    Line::from(Span::styled(line.text.as_str(), style))
}

/// Draw `lines` from the top-left corner, one per row. A notice, when present,
/// takes the bottom row.
pub fn draw(f: &mut Frame, lines: &[RenderLine], notice: Option<&str>) {
    let area = f.area();

    let body = match notice {
        Some(message) if area.height > 1 => {
            let notice_row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            let style = Style::default().fg(Color::Red);
            f.render_widget(Paragraph::new(Line::from(Span::styled(message, style))), notice_row);
            Rect::new(area.x, area.y, area.width, area.height - 1)
        }
        _ => area,
    };

    let text: Vec<Line> = lines.iter().map(to_line).collect();
    f.render_widget(Paragraph::new(text), body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_lines_drawn_at_their_row() -> std::io::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(30, 5))?;
        let lines = vec![
            RenderLine::plain("legend"),
            RenderLine::plain("Untracked files:"),
            RenderLine::colored("       ? a.txt", LineColor::Red).with_bg(LineColor::Yellow),
        ];

        terminal.draw(|f| draw(f, &lines, None))?;

        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 0), "legend");
        assert_eq!(row_text(buffer, 1), "Untracked files:");
        assert_eq!(row_text(buffer, 2), "       ? a.txt");
        assert_eq!(buffer[(7, 2)].fg, Color::Red);
        assert_eq!(buffer[(7, 2)].bg, Color::Yellow);
        assert_eq!(buffer[(0, 1)].bg, Color::Reset);
        Ok(())
    }

    #[test]
    fn test_notice_on_bottom_row() -> std::io::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(40, 4))?;
        let lines = vec![RenderLine::plain("legend")];

        terminal.draw(|f| draw(f, &lines, Some("Failed to add 'x'")))?;

        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 0), "legend");
        assert_eq!(row_text(buffer, 3), "Failed to add 'x'");
        assert_eq!(buffer[(0, 3)].fg, Color::Red);
        Ok(())
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_color(LineColor::Default), Color::Reset);
        assert_eq!(to_color(LineColor::Green), Color::Green);
        assert_eq!(to_color(LineColor::Yellow), Color::Yellow);
    }
}
