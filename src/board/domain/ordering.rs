//! Due-date ordering of column members.

use super::SortKey;

/// Orders column members by ascending due date.
///
/// Members with equal keys, including any number of members without a
/// concrete date, keep the relative order in which they were supplied.
/// Keys are computed once per member.
#[must_use]
pub fn order_by_due_date<T>(members: Vec<T>, mut sort_key: impl FnMut(&T) -> SortKey) -> Vec<T> {
    let mut keyed: Vec<(SortKey, T)> = members
        .into_iter()
        .map(|member| (sort_key(&member), member))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, member)| member).collect()
}
