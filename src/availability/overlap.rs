//! Overlap tests between inclusive date ranges.
//!
//! The SQL queries in `db::queries` filter bookings with the same
//! three-clause predicate as [`overlaps`], so an in-memory check and a
//! database check always agree.

use crate::dates::DateRange;

/// Whether `candidate` shares at least one calendar day with `existing`.
pub fn overlaps(candidate: &DateRange, existing: &DateRange) -> bool {
    let (s1, e1) = (candidate.start(), candidate.end());
    let (s2, e2) = (existing.start(), existing.end());

    (s1 <= s2 && e1 >= s2) || (s1 <= e2 && e1 >= e2) || (s1 >= s2 && e1 <= e2)
}

/// Negated-disjoint form of [`overlaps`]; must agree with it on every input.
pub fn overlaps_disjoint_form(candidate: &DateRange, existing: &DateRange) -> bool {
    !(candidate.end() < existing.start() || candidate.start() > existing.end())
}

/// Whether any existing range overlaps the candidate.
pub fn has_overlap<'a, I>(candidate: &DateRange, existing: I) -> bool
where
    I: IntoIterator<Item = &'a DateRange>,
{
    existing.into_iter().any(|range| overlaps(candidate, range))
}

/// Items whose range overlaps the candidate, in input order.
pub fn conflicting<'a, T, F>(candidate: &DateRange, items: &'a [T], range_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> DateRange,
{
    items
        .iter()
        .filter(|item| overlaps(candidate, &range_of(*item)))
        .collect()
}
