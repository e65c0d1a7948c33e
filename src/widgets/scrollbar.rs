use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::ScrollState;

/// Draw a vertical scrollbar on the right border of `area`
///
/// `area` includes the borders; the bar skips the corner cells. Nothing is
/// drawn while the content fits the viewport.
pub fn render_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollState, color: Color) {
    if scroll.max_offset == 0 || scroll.viewport_height == 0 {
        return;
    }

    let track = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(2),
    };

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui places the thumb at the bottom when position == content_length - 1
    let max_offset = scroll.max_offset;
    let mut state = ScrollbarState::new(max_offset + 1)
        .position(scroll.offset.min(max_offset))
        .viewport_content_length(scroll.viewport_height as usize);

    frame.render_stateful_widget(scrollbar, track, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn right_column(scroll: ScrollState, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(6, height)).unwrap();
        terminal
            .draw(|frame| {
                render_scrollbar(frame, Rect::new(0, 0, 6, height), &scroll, Color::White)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| buffer[(5, y)].symbol().to_string())
            .collect()
    }

    fn scroll_state(content: usize, viewport: u16, offset: usize) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(content, viewport);
        scroll.offset = offset.min(scroll.max_offset);
        scroll
    }

    #[test]
    fn test_nothing_drawn_when_content_fits() {
        let column = right_column(scroll_state(5, 8, 0), 10);
        assert!(column.iter().all(|cell| cell == " "));
    }

    #[test]
    fn test_corners_left_alone() {
        let column = right_column(scroll_state(100, 8, 0), 10);
        assert_eq!(column[0], " ");
        assert_eq!(column[9], " ");
        assert!(column[1..9].iter().all(|cell| cell != " "));
    }

    #[test]
    fn test_thumb_moves_with_offset() {
        let top = right_column(scroll_state(100, 8, 0), 10);
        let bottom = right_column(scroll_state(100, 8, 92), 10);
        assert_ne!(top, bottom);
        assert_eq!(top[1], "█");
        assert_eq!(bottom[8], "█");
    }
}
