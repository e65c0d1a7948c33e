//! Text layout for a single item in the stash pane
//!
//! An item renders as a name line followed, unless props are hidden, by
//! indented detail lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::item::{Item, Stat, StatKind, StatValue, is_zero, number_text};
use crate::theme;

const DETAIL_INDENT: &str = "    ";

/// Name line text: name (or type), socket count and ethereal marker
pub fn name_text(item: &Item) -> String {
    let mut text = item.display_name().to_string();
    if let Some(sockets) = &item.sockets {
        text.push_str(&format!(" ({})", number_text(sockets)));
    }
    if item.is_ethereal {
        text.push_str(" [eth]");
    }
    text
}

/// Human-readable stat line, without the range suffix
pub fn format_stat(stat: &Stat) -> String {
    let mut parts: Vec<String> = Vec::new();

    match &stat.kind {
        StatKind::Proc { chance, .. } => {
            if let Some(chance) = chance {
                parts.push(format!("{}%", number_text(chance)));
            }
            parts.push("to".to_string());
            if let Some(skill) = &stat.skill {
                parts.push(skill.clone());
            }
            parts.push(stat.name.clone());
        }
        StatKind::Value(value) => {
            if let Some(value) = format_value(value) {
                parts.push(value);
            }
            parts.push(stat.name.clone());
            if let Some(skill) = &stat.skill {
                parts.push(skill.clone());
            }
        }
    }

    parts.join(" ")
}

/// Number shown before a value stat; a zero scalar shows nothing
fn format_value(value: &StatValue) -> Option<String> {
    match value {
        StatValue::Roll { min, max: Some(max) } => {
            Some(format!("{} - {}", number_text(min), number_text(max)))
        }
        StatValue::Roll { min, max: None } => Some(number_text(min)),
        StatValue::Scalar(v) if !is_zero(v) => Some(number_text(v)),
        StatValue::Scalar(_) | StatValue::Empty => None,
    }
}

fn range_suffix(stat: &Stat) -> Option<String> {
    stat.range.as_ref().map(|range| {
        format!(
            " [{} - {}]",
            number_text(&range.min),
            number_text(&range.max)
        )
    })
}

fn stat_line(stat: &Stat) -> Line<'static> {
    let color = if stat.is_corrupted() {
        theme::stash::CORRUPTED
    } else if stat.is_proc() {
        theme::stash::PROC
    } else {
        theme::stash::STAT
    };

    let mut spans = vec![
        Span::raw(DETAIL_INDENT),
        Span::styled(format_stat(stat), Style::default().fg(color)),
    ];
    if let Some(suffix) = range_suffix(stat) {
        spans.push(Span::styled(suffix, Style::default().fg(theme::stash::RANGE)));
    }
    Line::from(spans)
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(theme::stash::DETAIL),
        ),
        Span::styled(value, Style::default().fg(theme::stash::STAT_VALUE)),
    ])
}

/// Detail lines shown under the name line when props are visible
pub fn detail_lines(item: &Item) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled(
            item.item_type.clone(),
            Style::default().fg(theme::stash::ITEM_TYPE),
        ),
    ])];

    if let Some(defense) = item.defense.as_ref().filter(|d| !is_zero(d)) {
        lines.push(detail_line("Defense", number_text(defense)));
    }
    if let Some(set) = item.set_name() {
        lines.push(detail_line("Set", set.to_string()));
    }
    if let Some(runeword) = &item.runeword {
        lines.push(detail_line("Runeword", runeword.clone()));
    }
    if !item.socketed.is_empty() {
        let socketed: Vec<&str> = item
            .socketed
            .iter()
            .map(|s| s.item_type.as_str())
            .collect();
        lines.push(detail_line("Socketed", socketed.join(", ")));
    }

    lines.extend(item.stats.iter().map(stat_line));
    lines
}

/// Style of the name line, before cursor highlighting
pub fn name_style(item: &Item) -> Style {
    let style = Style::default().fg(theme::quality::color(item.quality));
    if item.is_ethereal {
        style.add_modifier(theme::stash::ETHEREAL_MODIFIER)
    } else {
        style
    }
}
