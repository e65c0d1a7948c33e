use super::tally::Tally;
use crate::filter::FilterDimension;
use crate::item::Item;
use crate::stash::FileLoad;

/// Aggregate counts over a set of items.
///
/// Always rebuilt from scratch by [`aggregate`], never patched in place by the
/// display layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub types: Tally,
    pub qualities: Tally,
    /// Only set-named items are counted here
    pub sets: Tally,
    pub sockets: Tally,
    pub count: usize,
}

impl Stats {
    /// Fold one item into the tables
    pub fn record(&mut self, item: &Item) {
        self.types.add(&item.item_type);
        self.qualities.add(item.quality.as_str());
        if let Some(set) = item.set_name() {
            self.sets.add(set);
        }
        self.sockets.add(&item.socket_key());
        self.count += 1;
    }

    /// Table backing a filter dimension
    pub fn table(&self, dimension: FilterDimension) -> &Tally {
        match dimension {
            FilterDimension::Quality => &self.qualities,
            FilterDimension::Sockets => &self.sockets,
            FilterDimension::Sets => &self.sets,
            FilterDimension::Type => &self.types,
        }
    }
}

/// Build stats for a sequence of items, in input order
pub fn aggregate<'a, I>(items: I) -> Stats
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().fold(Stats::default(), |mut stats, item| {
        stats.record(item);
        stats
    })
}

/// Build stats over every successfully loaded stash.
///
/// Failed loads contribute no items.
pub fn aggregate_loads(loads: &[FileLoad]) -> Stats {
    aggregate(loads.iter().flat_map(|load| load.items()))
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
