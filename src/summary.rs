//! Plain-text report for `--summary`
//!
//! Lists every input with its load outcome, then the aggregate tables in
//! filter menu order.

use std::fmt::Write;

use crate::filter::FilterDimension;
use crate::stash::FileLoad;
use crate::stats::aggregate_loads;

pub fn render_summary(loads: &[FileLoad]) -> String {
    let mut out = String::new();

    for load in loads {
        match &load.result {
            Ok(items) => {
                let _ = writeln!(out, "{}: {} items", load.path.display(), items.len());
            }
            Err(err) => {
                let _ = writeln!(out, "{}: error: {}", load.path.display(), err);
            }
        }
    }

    let stats = aggregate_loads(loads);
    let _ = writeln!(out, "{} items", stats.count);

    for dimension in FilterDimension::ALL {
        let table = stats.table(dimension);
        if table.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", dimension.title());
        for (key, count) in table.iter() {
            let _ = writeln!(out, "  {}: {}", key, count);
        }
    }

    out
}
