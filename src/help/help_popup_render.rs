use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
use crate::theme;
use crate::widgets::popup;

const KEY_COLUMN_WIDTH: usize = 16;

/// Render the help popup centered over the frame
///
/// Returns the popup area, or `None` when the terminal is too small to fit it.
pub fn render_popup(app: &mut App, frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < 40 || frame_area.height < 12 {
        return None;
    }

    let popup_width = 60.min(frame_area.width.saturating_sub(4));
    let popup_height = ((frame_area.height as f32 * 0.8) as u16)
        .clamp(12, 34)
        .min(frame_area.height.saturating_sub(2));

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Keyboard Shortcuts ", theme::help::TITLE))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let lines = section_lines(HELP_SECTIONS);
    app.help
        .scroll
        .update_bounds(lines.len(), chunks[0].height);

    let window = app.help.scroll.visible_range(lines.len());
    let body = Paragraph::new(Text::from(lines[window].to_vec()));
    frame.render_widget(body, chunks[0]);

    let footer = Line::from(Span::styled(
        HELP_FOOTER,
        Style::default().fg(theme::help::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), chunks[1]);

    Some(popup_area)
}

fn section_lines(sections: &[HelpSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("── {} ──", section.title),
                theme::help::SECTION_HEADER,
            ),
        ]));

        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    theme::help::KEY,
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::HelpPopupState;
    use crate::test_utils::test_helpers::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_section_lines_match_content_height() {
        assert_eq!(
            section_lines(HELP_SECTIONS).len(),
            HelpPopupState::content_height()
        );
    }

    #[test]
    fn test_entry_line_pads_key_column() {
        let lines = section_lines(HELP_SECTIONS);
        let entry: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(entry, format!("  {:<16}Toggle this help", "F1 or ?"));
    }

    #[test]
    fn test_popup_renders_title_and_footer() {
        let mut app = test_app(Vec::new());
        app.help.visible = true;
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let mut area = None;
        terminal
            .draw(|f| area = render_popup(&mut app, f))
            .unwrap();

        assert!(area.is_some());
        let output = terminal.backend().to_string();
        assert!(output.contains("Keyboard Shortcuts"));
        assert!(output.contains("── GLOBAL ──"));
        assert!(output.contains(HELP_FOOTER));
    }

    #[test]
    fn test_popup_skipped_on_tiny_terminal() {
        let mut app = test_app(Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();

        let mut area = Some(Rect::default());
        terminal
            .draw(|f| area = render_popup(&mut app, f))
            .unwrap();

        assert!(area.is_none());
    }
}
