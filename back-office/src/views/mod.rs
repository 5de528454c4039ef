//! 派生视图 - per-page derived views
//!
//! Pure functions from `(collection, search, selector)` to the filtered
//! record list and from the *unfiltered* collection to aggregate counts.
//! Nothing here is cached: every render recomputes from the current
//! collection, so derived values can never go stale.

pub mod inventory;
pub mod menu;
pub mod orders;
pub mod staff;
pub mod tables;

use std::str::FromStr;

use shared::error::AppError;

/// Wire literal the frontend sends for the unfiltered view
const SELECT_ALL: &str = "all";

/// Category/status selector for list filtering.
///
/// [`Selector::All`] (wire literal `"all"`) matches every record;
/// [`Selector::Only`] requires exact enum equality, never substring
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(want) => want == value,
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = AppError>,
{
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SELECT_ALL {
            Ok(Selector::All)
        } else {
            T::from_str(s).map(Selector::Only)
        }
    }
}

/// Case-insensitive substring match. The needle must already be
/// lowercased: callers fold the search term once per query, not once
/// per record field.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
