//! Sorting strategies.

use crate::href::HrefBuilder;
use crate::sort::SortState;

/// Callback notified with each newly resolved sort state.
pub type SortCallback = Box<dyn FnMut(&SortState)>;

/// Who owns a table's sort state and how activations are delivered.
///
/// Selected once per table. Every strategy shares the same resolver and
/// orderer; they only differ in where the resolved state goes.
#[derive(Default)]
pub enum SortStrategy {
    /// Headers are inert.
    #[default]
    None,
    /// The table owns the state and orders rows itself. `on_sort`, if given,
    /// is told about each new state.
    Automatic {
        state: SortState,
        on_sort: Option<SortCallback>,
    },
    /// The caller owns the state. Activations are reported through `on_sort`
    /// and take effect once the caller hands the state back with
    /// [`AdvancedTable::set_sort_state`](super::AdvancedTable::set_sort_state).
    /// Rows are rendered in the order the caller supplies.
    Controlled {
        state: SortState,
        on_sort: SortCallback,
    },
    /// The caller owns the state and headers link to the address that
    /// requests the next state. Rows are rendered in the order supplied.
    Url {
        state: SortState,
        href: Box<dyn HrefBuilder>,
    },
}

impl SortStrategy {
    /// Automatic sorting starting unsorted, without a callback.
    pub fn automatic() -> Self {
        Self::Automatic {
            state: SortState::Unsorted,
            on_sort: None,
        }
    }

    /// Automatic sorting that notifies `on_sort` on each change.
    pub fn automatic_with(on_sort: impl FnMut(&SortState) + 'static) -> Self {
        Self::Automatic {
            state: SortState::Unsorted,
            on_sort: Some(Box::new(on_sort)),
        }
    }

    /// Controlled sorting with the caller's current state.
    pub fn controlled(state: SortState, on_sort: impl FnMut(&SortState) + 'static) -> Self {
        Self::Controlled {
            state,
            on_sort: Box::new(on_sort),
        }
    }

    /// URL-driven sorting with the caller's current state.
    pub fn url(state: SortState, href: impl HrefBuilder + 'static) -> Self {
        Self::Url {
            state,
            href: Box::new(href),
        }
    }

    /// Returns the strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::None => "none",
            SortStrategy::Automatic { .. } => "automatic",
            SortStrategy::Controlled { .. } => "controlled",
            SortStrategy::Url { .. } => "url",
        }
    }

    /// Returns the current sort state; always unsorted for [`SortStrategy::None`].
    pub fn state(&self) -> &SortState {
        const UNSORTED: &SortState = &SortState::Unsorted;
        match self {
            SortStrategy::None => UNSORTED,
            SortStrategy::Automatic { state, .. }
            | SortStrategy::Controlled { state, .. }
            | SortStrategy::Url { state, .. } => state,
        }
    }

    /// Returns `true` unless sorting is disabled.
    pub fn is_sortable(&self) -> bool {
        !matches!(self, SortStrategy::None)
    }
}

impl std::fmt::Debug for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortStrategy")
            .field("kind", &self.name())
            .field("state", self.state())
            .finish()
    }
}
