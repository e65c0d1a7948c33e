pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("F1 or ?", "Toggle this help"),
            ("Tab/Shift+Tab", "Switch focus (Stashes / Filters)"),
            ("p", "Toggle Hide Props"),
            ("r", "Reload stash files"),
            ("q/Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "STASHES",
        entries: &[
            ("j/k/↑/↓", "Move between stashes and items"),
            ("g/Home", "Jump to first row"),
            ("G/End", "Jump to last row"),
            ("PgUp/PgDn", "Move 10 rows"),
            ("Enter/Space", "Collapse or expand stash"),
            ("c/e", "Collapse all / expand all"),
            ("y", "Copy item (or whole stash) as JSON"),
        ],
    },
    HelpSection {
        title: "FILTERS",
        entries: &[
            ("j/k/↑/↓", "Move between filters"),
            ("g/G", "Jump to first/last filter"),
            ("PgUp/PgDn", "Move 10 rows"),
            ("Enter/Space", "Show or hide matching items"),
        ],
    },
    HelpSection {
        title: "HELP",
        entries: &[
            ("j/k/↑/↓", "Scroll"),
            ("g/G", "Jump to top/bottom"),
            ("Esc/q/?", "Close"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | Esc/q/?: close";
