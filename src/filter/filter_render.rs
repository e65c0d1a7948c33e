use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::filter_menu_state::FilterRow;
use super::settings::{FilterDimension, Settings};
use crate::app::{App, Focus};
use crate::theme;
use crate::widgets::scrollbar;

const CURSOR_INDICATOR: &str = "▶ ";
const NO_INDICATOR: &str = "  ";

fn checkbox(checked: bool) -> Span<'static> {
    if checked {
        Span::styled("[x] ", Style::default().fg(theme::filter::CHECKED))
    } else {
        Span::styled("[ ] ", Style::default().fg(theme::filter::UNCHECKED))
    }
}

fn row_line(row: &FilterRow, settings: &Settings, selected: bool) -> Line<'static> {
    let indicator = if selected { CURSOR_INDICATOR } else { NO_INDICATOR };

    let spans = match row {
        FilterRow::HideProps => vec![
            Span::raw(indicator),
            checkbox(settings.hide_props),
            Span::styled("Hide Props", Style::default().fg(theme::filter::LABEL)),
        ],
        FilterRow::Entry {
            dimension,
            key,
            count,
        } => {
            let shown = settings.is_shown(*dimension, key);
            let label_color = if shown {
                theme::filter::LABEL
            } else {
                theme::filter::LABEL_HIDDEN
            };
            vec![
                Span::raw(indicator),
                Span::raw("  "),
                checkbox(shown),
                Span::styled(key.clone(), Style::default().fg(label_color)),
                Span::styled(
                    format!(" ({})", count),
                    Style::default().fg(theme::filter::COUNT),
                ),
            ]
        }
    };

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(theme::filter::CURSOR_BG))
    } else {
        line
    }
}

fn section_line(dimension: FilterDimension) -> Line<'static> {
    Line::from(vec![
        Span::raw(NO_INDICATOR),
        Span::styled(dimension.title(), theme::filter::SECTION),
    ])
}

/// Menu lines plus the line index of the cursor row
///
/// A blank line and a section title precede the first entry of each
/// dimension. Dimensions with no entries are left out.
fn build_lines(app: &App, rows: &[FilterRow]) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = vec![Line::from(vec![
        Span::raw(NO_INDICATOR),
        Span::styled(
            format!("{} items", app.stats.count),
            theme::filter::ITEM_COUNT,
        ),
    ])];
    let mut cursor_line = None;
    let mut current_section = None;

    for (index, row) in rows.iter().enumerate() {
        if let FilterRow::Entry { dimension, .. } = row
            && current_section != Some(*dimension)
        {
            current_section = Some(*dimension);
            lines.push(Line::from(""));
            lines.push(section_line(*dimension));
        }

        let selected = index == app.filter_menu.cursor;
        if selected {
            cursor_line = Some(lines.len());
        }
        lines.push(row_line(row, &app.settings, selected));
    }

    if app.stats.count == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Nothing to filter",
            Style::default().fg(theme::filter::EMPTY),
        )));
    }

    (lines, cursor_line)
}

pub fn render_menu(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::FilterMenu;
    let border_color = if focused {
        theme::filter::BORDER_FOCUSED
    } else {
        theme::filter::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::filter::BACKGROUND));

    let rows = app.filter_rows();
    app.filter_menu.clamp(rows.len());

    let (lines, cursor_line) = build_lines(app, &rows);

    let viewport_height = area.height.saturating_sub(2);
    app.filter_menu
        .scroll
        .update_bounds(lines.len(), viewport_height);
    if focused && let Some(line) = cursor_line {
        app.filter_menu.scroll.ensure_visible(line, line);
    }

    let window = app.filter_menu.scroll.visible_range(lines.len());
    let paragraph = Paragraph::new(lines[window].to_vec()).block(block);
    frame.render_widget(paragraph, area);

    scrollbar::render_scrollbar(frame, area, &app.filter_menu.scroll, border_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{test_app, test_loads};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(app: &App) -> (Vec<String>, Option<usize>) {
        let (lines, cursor) = build_lines(app, &app.filter_rows());
        (lines.iter().map(line_text).collect(), cursor)
    }

    #[test]
    fn test_menu_layout() {
        let app = test_app(test_loads());
        let (lines, cursor) = texts(&app);

        assert_eq!(lines[0], "  4 items");
        assert_eq!(lines[1], "▶ [ ] Hide Props");
        assert_eq!(cursor, Some(1));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "  Qualities");
        assert_eq!(lines[4], "    [x] Unique (1)");
        assert!(lines.contains(&"  Sockets".to_string()));
        assert!(lines.contains(&"    [x] 4 (1)".to_string()));
        assert!(lines.contains(&"  Sets".to_string()));
        assert!(lines.contains(&"    [x] Tal Rasha's Wrappings (1)".to_string()));
        assert!(lines.contains(&"  Types".to_string()));
    }

    #[test]
    fn test_unchecked_entries_and_hide_props() {
        let mut app = test_app(test_loads());
        app.settings.toggle_hide_props();
        app.settings.set_shown(FilterDimension::Sockets, "0", false);

        let (lines, _) = texts(&app);

        assert_eq!(lines[1], "▶ [x] Hide Props");
        assert!(lines.contains(&"    [ ] 0 (3)".to_string()));
    }

    #[test]
    fn test_cursor_line_skips_section_titles() {
        let mut app = test_app(test_loads());
        // HideProps, then the first Qualities entry
        app.filter_menu.cursor = 1;

        let (lines, cursor) = texts(&app);

        assert_eq!(cursor, Some(4));
        assert!(lines[4].starts_with("▶ "));
    }

    #[test]
    fn test_empty_stats() {
        let app = test_app(Vec::new());
        let (lines, _) = texts(&app);

        assert_eq!(
            lines,
            vec!["  0 items", "▶ [ ] Hide Props", "", "  Nothing to filter"]
        );
    }
}
