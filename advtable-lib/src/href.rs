//! Href builders for URL-driven sorting.
//!
//! With the url strategy the table never orders rows itself. Each sortable
//! header instead links to the address that requests the next sort state, and
//! the page behind that address does the ordering.

use url::Url;

use crate::error::TableError;
use crate::sort::SortState;

/// Query parameter carrying the sort key.
pub const SORT_PARAM: &str = "sort";
/// Query parameter carrying the sort direction.
pub const DIRECTION_PARAM: &str = "direction";
/// Pagination parameter dropped on every re-sort.
pub const PAGE_PARAM: &str = "page";

/// Maps a prospective sort state to a navigable href.
///
/// Implemented for any `Fn(&SortState) -> String`, so a closure is enough for
/// custom routing:
///
/// ```
/// use advtable_lib::href::HrefBuilder;
/// use advtable_lib::sort::{Direction, SortState};
///
/// let builder = |state: &SortState| match state {
///     SortState::Unsorted => "/users".to_string(),
///     SortState::Sorted { key, direction } => format!("/users/by/{key}/{direction}"),
/// };
/// assert_eq!(
///     builder.build_href(&SortState::sorted("age", Direction::Desc)),
///     "/users/by/age/desc"
/// );
/// ```
pub trait HrefBuilder {
    /// Returns the href that requests `next`.
    fn build_href(&self, next: &SortState) -> String;
}

impl<F> HrefBuilder for F
where
    F: Fn(&SortState) -> String,
{
    fn build_href(&self, next: &SortState) -> String {
        self(next)
    }
}

/// Default href builder that rewrites the query string of the current location.
///
/// The location is injected rather than read from the environment. Built hrefs
/// are relative (`path?query`): `sort` and `direction` are set for a sorted
/// state and removed for an unsorted one, `page` is always removed, and every
/// other parameter is kept in order.
///
/// # Example
///
/// ```
/// use advtable_lib::href::{HrefBuilder, QueryHrefBuilder};
/// use advtable_lib::sort::{Direction, SortState};
///
/// let builder = QueryHrefBuilder::parse("https://example.com/users?q=ada&page=3").unwrap();
/// assert_eq!(
///     builder.build_href(&SortState::sorted("age", Direction::Desc)),
///     "/users?q=ada&sort=age&direction=desc"
/// );
/// assert_eq!(builder.build_href(&SortState::Unsorted), "/users?q=ada");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryHrefBuilder {
    location: Url,
}

impl QueryHrefBuilder {
    /// Creates a builder for the given current location.
    pub fn new(location: Url) -> Self {
        Self { location }
    }

    /// Parses the current location.
    pub fn parse(location: &str) -> Result<Self, TableError> {
        Url::parse(location)
            .map(Self::new)
            .map_err(|e| TableError::invalid_location(location, e))
    }

    /// Returns the current location.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Returns a builder for the location reached by following `href`.
    pub fn follow(&self, href: &str) -> Result<Self, TableError> {
        self.location
            .join(href)
            .map(Self::new)
            .map_err(|e| TableError::invalid_location(href, e))
    }

    /// Reads the sort state encoded in the current location's query.
    pub fn current_state(&self) -> SortState {
        let mut key = None;
        let mut direction = None;
        for (name, value) in self.location.query_pairs() {
            match &*name {
                SORT_PARAM if !value.is_empty() => key = Some(value.into_owned()),
                DIRECTION_PARAM => direction = value.parse().ok(),
                _ => {}
            }
        }
        SortState::new(key, direction)
    }
}

impl HrefBuilder for QueryHrefBuilder {
    fn build_href(&self, next: &SortState) -> String {
        let kept: Vec<(String, String)> = self
            .location
            .query_pairs()
            .filter(|(name, _)| !matches!(&**name, SORT_PARAM | DIRECTION_PARAM | PAGE_PARAM))
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.location.clone();
        url.set_fragment(None);
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.extend_pairs(kept);
            if let SortState::Sorted { key, direction } = next {
                pairs.append_pair(SORT_PARAM, key);
                pairs.append_pair(DIRECTION_PARAM, direction.as_str());
            }
        }

        match url.query() {
            Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
            _ => url.path().to_string(),
        }
    }
}
