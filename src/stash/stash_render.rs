use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::file_load::FileLoad;
use super::item_lines::{detail_lines, name_style, name_text};
use super::stash_pane_state::StashRow;
use crate::app::{App, Focus};
use crate::error::StashError;
use crate::item::Item;
use crate::theme;
use crate::widgets::scrollbar;

const CURSOR_INDICATOR: &str = "▶ ";
const NO_INDICATOR: &str = "  ";

fn indicator(selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            CURSOR_INDICATOR,
            Style::default().fg(theme::stash::CURSOR_INDICATOR),
        )
    } else {
        Span::raw(NO_INDICATOR)
    }
}

fn highlight(line: Line<'static>, selected: bool) -> Line<'static> {
    if selected {
        line.style(Style::default().bg(theme::stash::CURSOR_BG))
    } else {
        line
    }
}

fn header_line(load: &FileLoad, collapsed: bool, selected: bool) -> Line<'static> {
    let marker = if collapsed { "▸ " } else { "▾ " };
    let toggle_hint = if collapsed { "Show" } else { "Hide" };
    let hint_style = Style::default().fg(theme::stash::HEADER_HINT);

    let mut spans = vec![
        indicator(selected),
        Span::styled(marker, theme::stash::HEADER),
        Span::styled(load.display_name(), theme::stash::HEADER),
    ];
    if load.error().is_none() {
        spans.push(Span::styled(
            format!(" ({} items)", load.items().len()),
            hint_style,
        ));
    }
    spans.push(Span::styled(format!(" [{}]", toggle_hint), hint_style));

    highlight(Line::from(spans), selected)
}

fn error_line(error: &StashError) -> Line<'static> {
    Line::from(Span::styled(
        format!("    Oh no! {}", error),
        Style::default().fg(theme::stash::LOAD_ERROR),
    ))
}

fn item_name_line(item: &Item, selected: bool) -> Line<'static> {
    let mut style = name_style(item);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    let line = Line::from(vec![
        indicator(selected),
        Span::styled(name_text(item), style),
    ]);
    highlight(line, selected)
}

/// Lines for the whole pane, plus the line span of the cursor row
fn build_lines(app: &App, rows: &[StashRow]) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let mut lines = Vec::new();
    let mut cursor_span = None;
    let hide_props = app.settings.hide_props;

    for (row_index, row) in rows.iter().enumerate() {
        let selected = row_index == app.stash_pane.cursor;
        let first = lines.len();

        match *row {
            StashRow::Header(stash) => {
                let load = &app.stashes[stash];
                lines.push(header_line(
                    load,
                    app.stash_pane.is_collapsed(stash),
                    selected,
                ));
                if let Some(error) = load.error() {
                    lines.push(error_line(error));
                }
            }
            StashRow::Item { stash, item } => {
                let item = &app.stashes[stash].items()[item];
                lines.push(item_name_line(item, selected));
                if !hide_props {
                    lines.extend(detail_lines(item));
                }
            }
        }

        if selected {
            cursor_span = Some((first, lines.len().saturating_sub(1)));
        }
    }

    (lines, cursor_span)
}

fn title(app: &App) -> Line<'static> {
    if let Some((done, total)) = app.loading_progress() {
        return Line::from(Span::styled(
            format!(" Loading {}/{} files... ", done, total),
            Style::default().fg(theme::stash::LOADING),
        ));
    }

    Line::from(Span::styled(
        format!(
            " Stashes ({}/{} items shown) ",
            app.visible_item_count(),
            app.stats.count
        ),
        Style::default().fg(theme::stash::TITLE),
    ))
}

fn empty_message(app: &App) -> &'static str {
    if app.is_loading() {
        "Loading stash files..."
    } else {
        "No stash files loaded"
    }
}

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::StashPane {
        theme::stash::BORDER_FOCUSED
    } else {
        theme::stash::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title(app))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::stash::BACKGROUND));

    let rows = app.stash_rows();
    app.stash_pane.clamp(rows.len());

    if rows.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!("  {}", empty_message(app)),
            Style::default().fg(theme::stash::EMPTY),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let (lines, cursor_span) = build_lines(app, &rows);

    let viewport_height = area.height.saturating_sub(2);
    app.stash_pane
        .scroll
        .update_bounds(lines.len(), viewport_height);
    if let Some((first, last)) = cursor_span {
        app.stash_pane.scroll.ensure_visible(first, last);
    }

    #[cfg(debug_assertions)]
    log::trace!(
        "render stash pane: {} rows, {} lines, scroll offset {}",
        rows.len(),
        lines.len(),
        app.stash_pane.scroll.offset
    );

    let window = app.stash_pane.scroll.visible_range(lines.len());
    let paragraph = Paragraph::new(lines[window].to_vec()).block(block);
    frame.render_widget(paragraph, area);

    scrollbar::render_scrollbar(frame, area, &app.stash_pane.scroll, border_color);
}
