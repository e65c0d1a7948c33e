use super::settings::{FilterDimension, Settings};
use crate::item::Item;

/// Decide whether an item is filtered out.
///
/// Hidden when any one of its quality, socket count, set (if it has one) or
/// type is explicitly switched off. `hide_props` plays no part here.
pub fn is_hidden(item: &Item, settings: &Settings) -> bool {
    settings.hides(FilterDimension::Quality, item.quality.as_str())
        || settings.hides(FilterDimension::Sockets, &item.socket_key())
        || item
            .set_name()
            .is_some_and(|set| settings.hides(FilterDimension::Sets, set))
        || settings.hides(FilterDimension::Type, &item.item_type)
}

/// Items that survive the filter, with their index in `items`
pub fn visible_items<'a>(
    items: &'a [Item],
    settings: &'a Settings,
) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| !is_hidden(item, settings))
}
