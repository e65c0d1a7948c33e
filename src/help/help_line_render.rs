use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.help.visible {
        hints!["Esc/q/?" => "Close", "j/k" => "Scroll"]
    } else if app.focus == Focus::FilterMenu {
        hints!["F1/?" => "Help", "Tab" => "Stashes", "Enter" => "Toggle Filter", "p" => "Hide Props", "r" => "Reload", "q" => "Quit"]
    } else {
        hints!["F1/?" => "Help", "Tab" => "Filters", "Enter" => "Collapse", "y" => "Copy", "p" => "Hide Props", "r" => "Reload", "q" => "Quit"]
    }
}

fn styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let spans = styled_spans(&context_hints(app));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
