//! Pure filter engine shared by every browsable catalog.
//!
//! DESIGN: filtering is a conjunction of tagged predicates ([`Criterion`])
//! over any record type implementing [`Record`]. Each page owns a
//! [`FilterState`] and recomputes its visible subset on every change via
//! [`apply_filters`]; the same function backs the server's query endpoints,
//! so the two sides cannot disagree about what a filter means.
//!
//! The engine is deliberately a linear scan with no memoization. Catalogs
//! are tens of records; clarity wins.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Sentinel chip value meaning "do not narrow by this dimension".
pub const ALL: &str = "All";

/// Filterable dimensions of a catalog record.
///
/// Only [`category`](Record::category) is mandatory; catalogs without a
/// culture or search dimension keep the empty defaults, which makes an
/// active criterion on that dimension match nothing. That falls out of the
/// conjunction semantics rather than being special-cased.
pub trait Record {
    /// The record's single category value.
    fn category(&self) -> &str;

    /// Cultural tags the record carries.
    fn culture_tags(&self) -> &[String] {
        &[]
    }

    /// Text fields scanned by the free-text criterion.
    fn search_haystacks(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// One filter predicate, tagged by the dimension it inspects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criterion {
    /// Keep records whose category equals the value exactly.
    Category(String),
    /// Keep records whose culture tags contain the value.
    Culture(String),
    /// Keep records where any haystack contains the value,
    /// case-insensitively.
    Search(String),
}

impl Criterion {
    /// Whether this criterion is in its rest state and matches everything.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        match self {
            Self::Category(value) | Self::Culture(value) => value == ALL,
            Self::Search(term) => term.is_empty(),
        }
    }

    /// Whether `record` passes this criterion.
    #[must_use]
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.is_inactive() {
            return true;
        }
        match self {
            Self::Category(want) => record.category() == want,
            Self::Culture(want) => record.culture_tags().iter().any(|tag| tag == want),
            Self::Search(term) => {
                let needle = term.to_lowercase();
                record
                    .search_haystacks()
                    .iter()
                    .any(|hay| hay.to_lowercase().contains(&needle))
            }
        }
    }
}

/// UI-owned filter state for one catalog page.
///
/// The default is the identity filter: every record visible. Pages create
/// one of these per visit and drop it on navigation, so filters never leak
/// across pages or visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Active category chip, [`ALL`] when unset.
    pub category: String,
    /// Active culture chip, [`ALL`] when unset.
    pub culture: String,
    /// Free-text search term, verbatim as typed, empty when unset.
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_owned(),
            culture: ALL.to_owned(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// The criteria this state activates, in a fixed evaluation order.
    #[must_use]
    pub fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::Category(self.category.clone()),
            Criterion::Culture(self.culture.clone()),
            Criterion::Search(self.search.clone()),
        ]
    }

    /// Reset every dimension to its rest state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the state is the identity filter.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Chip labels for one filter dimension: the [`ALL`] sentinel followed by
/// the real options in their content-file order.
///
/// Content files never list the sentinel themselves; the UI prepends it
/// here so "no narrowing" is always the first, default chip.
#[must_use]
pub fn chip_options(options: &[String]) -> Vec<String> {
    std::iter::once(ALL.to_owned())
        .chain(options.iter().cloned())
        .collect()
}

/// Compute the visible subset of `records` under `state`.
///
/// Pure and order-preserving: the result borrows from `records`, keeps the
/// input's relative order, and contains exactly the records passing every
/// active criterion. An empty result is a normal outcome the caller renders
/// an affordance for, not an error.
#[must_use]
pub fn apply_filters<'a, R: Record>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let criteria = state.criteria();
    records
        .iter()
        .filter(|record| criteria.iter().all(|criterion| criterion.matches(*record)))
        .collect()
}
