use std::collections::HashMap;

/// One of the four independent dimensions items can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Quality,
    Sockets,
    Sets,
    Type,
}

impl FilterDimension {
    /// Menu order
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Quality,
        FilterDimension::Sockets,
        FilterDimension::Sets,
        FilterDimension::Type,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FilterDimension::Quality => "Qualities",
            FilterDimension::Sockets => "Sockets",
            FilterDimension::Sets => "Sets",
            FilterDimension::Type => "Types",
        }
    }
}

/// Filter toggles owned by the display layer.
///
/// Each map only records explicit decisions. A missing key means shown, and
/// only an explicit `false` hides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Hides per-item stat details; never hides the item itself
    pub hide_props: bool,
    pub hide_type: HashMap<String, bool>,
    pub hide_quality: HashMap<String, bool>,
    pub hide_sets: HashMap<String, bool>,
    pub hide_sockets: HashMap<String, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overrides(&self, dimension: FilterDimension) -> &HashMap<String, bool> {
        match dimension {
            FilterDimension::Quality => &self.hide_quality,
            FilterDimension::Sockets => &self.hide_sockets,
            FilterDimension::Sets => &self.hide_sets,
            FilterDimension::Type => &self.hide_type,
        }
    }

    fn overrides_mut(&mut self, dimension: FilterDimension) -> &mut HashMap<String, bool> {
        match dimension {
            FilterDimension::Quality => &mut self.hide_quality,
            FilterDimension::Sockets => &mut self.hide_sockets,
            FilterDimension::Sets => &mut self.hide_sets,
            FilterDimension::Type => &mut self.hide_type,
        }
    }

    /// Checkbox state for a value: checked unless explicitly hidden
    pub fn is_shown(&self, dimension: FilterDimension, key: &str) -> bool {
        self.overrides(dimension).get(key).copied().unwrap_or(true)
    }

    /// True only for an explicit `false` override
    pub fn hides(&self, dimension: FilterDimension, key: &str) -> bool {
        self.overrides(dimension).get(key) == Some(&false)
    }

    pub fn set_shown(&mut self, dimension: FilterDimension, key: &str, shown: bool) {
        self.overrides_mut(dimension).insert(key.to_string(), shown);
    }

    /// Flip a checkbox, returning the new shown state
    pub fn toggle(&mut self, dimension: FilterDimension, key: &str) -> bool {
        let shown = !self.is_shown(dimension, key);
        self.set_shown(dimension, key, shown);
        shown
    }

    pub fn toggle_hide_props(&mut self) {
        self.hide_props = !self.hide_props;
    }
}
