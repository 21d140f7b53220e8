//! Stable row ordering.

use std::borrow::Cow;
use std::cmp::Ordering;

use log::trace;

use super::SortState;
use super::compare_values;
use crate::model::FieldPath;
use crate::model::Row;
use crate::model::Value;

/// Options for [`order_rows`].
///
/// # Example
///
/// ```
/// use advtable_lib::sort::OrderOptions;
///
/// let options = OrderOptions::default().with_pinned_last_row(true);
/// assert!(options.pin_last_row);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Keep the last row (a totals or summary row) out of the sort and always
    /// emit it last.
    ///
    /// Default: `false`
    pub pin_last_row: bool,
}

impl OrderOptions {
    /// Creates options that sort every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the last row is pinned.
    pub fn with_pinned_last_row(mut self, pin: bool) -> Self {
        self.pin_last_row = pin;
        self
    }
}

/// Returns the rows ordered for `state`, leaving `rows` untouched.
///
/// Unsorted state returns the input order. Otherwise rows are ordered by the
/// value at the state's key (a dotted path) using [`compare_values`]. The
/// ordering is stable, so rows with equal values keep their relative order,
/// and it tolerates columns that mix value types.
pub fn order_rows<'a, R: Row>(rows: &'a [R], state: &SortState, options: OrderOptions) -> Vec<&'a R> {
    let SortState::Sorted { key, direction } = state else {
        return rows.iter().collect();
    };

    let (body, footer) = match rows.split_last() {
        Some((last, rest)) if options.pin_last_row => (rest, Some(last)),
        _ => (rows, None),
    };

    let path = FieldPath::new(key.as_str());
    let keys: Vec<Option<Cow<'a, Value>>> = body.iter().map(|row| row.field(&path)).collect();

    let mut indices: Vec<usize> = (0..body.len()).collect();
    merge_sort_by(&mut indices, |&a, &b| {
        compare_values(keys[a].as_deref(), keys[b].as_deref(), *direction)
    });

    trace!(
        "ordered {} rows by '{}' {}{}",
        body.len(),
        key,
        direction,
        if footer.is_some() { " (last row pinned)" } else { "" }
    );

    indices
        .into_iter()
        .map(|i| &body[i])
        .chain(footer)
        .collect()
}

/// Stable top-down merge sort.
///
/// Mixed-type columns can make `compare` inconsistent, which the standard
/// library sorts are allowed to panic on. This one always terminates with
/// some permutation and never panics.
fn merge_sort_by<T: Copy, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut scratch = items.to_vec();
    sort_range(items, &mut scratch, &mut compare);
}

fn sort_range<T: Copy, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_range(left, left_scratch, compare);
        sort_range(right, right_scratch, compare);
    }

    scratch[..len].copy_from_slice(items);
    let (left, right) = scratch[..len].split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Take from the right only when strictly smaller, which keeps ties in
        // input order.
        let take_right = j < right.len()
            && (i >= left.len() || compare(&right[j], &left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}
