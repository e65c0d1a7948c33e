use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Draw the current notification in the top-right corner
///
/// Call after everything else so it floats on top. Expired notifications are
/// cleared first.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    // message + 2 padding + 2 borders
    let width = notif.message.chars().count() as u16 + 4;
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN,
        width: width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: 3u16.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let colors = notif.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_lines(notification: &mut NotificationState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_notification(f, notification))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_notification_in_top_right_corner() {
        let mut notification = NotificationState::new();
        notification.show("Copied item");

        let lines = render_to_lines(&mut notification, 60, 12);

        // Box spans rows 2..5 and ends MARGIN columns from the right edge
        assert!(lines[3].contains(" Copied item "));
        assert!(lines[3].trim_end().ends_with('│'));
        assert_eq!(lines[3].len() - lines[3].trim_end().len(), MARGIN as usize);
        assert!(lines[0].trim().is_empty());
    }

    #[test]
    fn test_no_notification_renders_nothing() {
        let mut notification = NotificationState::new();

        let lines = render_to_lines(&mut notification, 40, 10);

        assert!(lines.iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_tiny_frame_skips_notification() {
        let mut notification = NotificationState::new();
        notification.show("Copied item");

        let lines = render_to_lines(&mut notification, 40, 4);

        assert!(lines.iter().all(|line| !line.contains("Copied")));
    }

    #[test]
    fn test_notification_uses_kind_colors() {
        let mut notification = NotificationState::new();
        notification.show_warning("Careful");

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| render_notification(f, &mut notification))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = 3;
        let text_x = (0..40)
            .find(|&x| buffer[(x, row)].symbol() == "C")
            .expect("message rendered");
        assert_eq!(buffer[(text_x, row)].bg, crate::theme::notification::WARNING_BG);
    }
}
