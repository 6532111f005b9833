//! Exclusion-set selection state and reconciliation.
//!
//! Selection state is stored by exclusion: the persisted form field is the
//! set of deselected inbound ids, and inclusion is always derived from it.
//! When the user toggles checkboxes on a search-narrowed view, the new
//! inclusion list only describes the visible inbounds, so reconciliation
//! must carry exclusions on out-of-view inbounds forward untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::{filter_inbounds, SearchQuery};
use crate::inbound::{Inbound, InboundId};

/// The persisted set of deselected inbound ids.
///
/// Ordered and duplicate-free; membership lookups are what the projection
/// and reconciler need, order is kept so the persisted form field stays
/// deterministic. Serializes as a plain JSON array of UUIDs, the shape the
/// panel stores in form state.
///
/// # Examples
///
/// ```
/// use inbound_select::{ExclusionSet, InboundId};
///
/// let a = InboundId::new();
/// let set = ExclusionSet::from_ids([a, a]);
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(a));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<InboundId>", into = "Vec<InboundId>")]
pub struct ExclusionSet {
    ids: Vec<InboundId>,
}

impl ExclusionSet {
    /// Creates an empty exclusion set.
    #[must_use]
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Creates an exclusion set from ids, dropping duplicates while keeping
    /// the first occurrence's position.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = InboundId>) -> Self {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();
        Self { ids }
    }

    /// Returns true if the id is excluded.
    #[must_use]
    pub fn contains(&self, id: InboundId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterates the excluded ids in order.
    pub fn iter(&self) -> impl Iterator<Item = InboundId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the excluded ids as a slice.
    #[must_use]
    pub fn ids(&self) -> &[InboundId] {
        &self.ids
    }

    /// Returns the number of excluded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<InboundId>> for ExclusionSet {
    fn from(ids: Vec<InboundId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<ExclusionSet> for Vec<InboundId> {
    fn from(set: ExclusionSet) -> Self {
        set.ids
    }
}

impl FromIterator<InboundId> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = InboundId>>(iter: T) -> Self {
        Self::from_ids(iter)
    }
}

/// Projects the included ids out of a filtered view.
///
/// Returns the ids of `view` not present in `excluded`, in view order.
/// This is the derived "checked" state the checkbox list renders; nothing
/// about inclusion is ever persisted.
pub fn included_inbounds<'a>(
    view: impl IntoIterator<Item = &'a Inbound>,
    excluded: &ExclusionSet,
) -> Vec<InboundId> {
    view.into_iter()
        .map(|inbound| inbound.id)
        .filter(|id| !excluded.contains(*id))
        .collect()
}

/// Reconciles a view-scoped inclusion toggle into a new exclusion set.
///
/// `new_included` is the user's full inclusion statement for the inbounds
/// currently visible under `query`. Within that view the statement replaces
/// prior state outright: every visible inbound missing from `new_included`
/// becomes excluded. Outside the view, prior exclusions are carried forward
/// exactly as they were.
///
/// Ids in `new_included` that are not part of the view have no effect, and
/// prior exclusions referencing ids no longer present in `all` are dropped,
/// so the result only ever references ids of `all`. Output order follows
/// `all`: carried-over exclusions first, then the newly excluded view ids.
///
/// Pure: same inputs give the same output, and `excluded` is not modified.
///
/// # Examples
///
/// ```
/// use inbound_select::{
///     reconcile_exclusions, ExclusionSet, Inbound, SearchQuery,
/// };
///
/// let inbounds = vec![Inbound::new("a"), Inbound::new("b")];
/// let query = SearchQuery::new("");
/// // User keeps only "a" checked.
/// let next = reconcile_exclusions(
///     &inbounds,
///     &query,
///     &ExclusionSet::new(),
///     &[inbounds[0].id],
/// );
/// assert!(next.contains(inbounds[1].id));
/// assert!(!next.contains(inbounds[0].id));
/// ```
#[must_use]
pub fn reconcile_exclusions(
    all: &[Inbound],
    query: &SearchQuery,
    excluded: &ExclusionSet,
    new_included: &[InboundId],
) -> ExclusionSet {
    let visible: HashSet<InboundId> =
        filter_inbounds(all, query).map(|inbound| inbound.id).collect();
    let included: HashSet<InboundId> = new_included.iter().copied().collect();
    let excluded: HashSet<InboundId> = excluded.iter().collect();

    let preserved = all
        .iter()
        .filter(|inbound| !visible.contains(&inbound.id) && excluded.contains(&inbound.id))
        .map(|inbound| inbound.id);

    let newly_excluded = all
        .iter()
        .filter(|inbound| visible.contains(&inbound.id) && !included.contains(&inbound.id))
        .map(|inbound| inbound.id);

    ExclusionSet::from_ids(preserved.chain(newly_excluded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(tags: &[&str]) -> Vec<Inbound> {
        tags.iter().map(|tag| Inbound::new(*tag)).collect()
    }

    #[test]
    fn test_exclusion_set_dedup_keeps_first() {
        let a = InboundId::new();
        let b = InboundId::new();
        let set = ExclusionSet::from_ids([a, b, a, b]);
        assert_eq!(set.ids(), &[a, b]);
    }

    #[test]
    fn test_exclusion_set_serde_is_plain_array() {
        let set = ExclusionSet::from_ids([InboundId::new(), InboundId::new()]);
        let json = serde_json::to_value(set.clone()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);

        let decoded: ExclusionSet = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_exclusion_set_deserialize_dedups() {
        let id = InboundId::new();
        let json = serde_json::json!([id, id]);
        let decoded: ExclusionSet = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_included_inbounds_projection() {
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[1].id]);
        let included = included_inbounds(&inbounds, &excluded);
        assert_eq!(included, vec![inbounds[0].id, inbounds[2].id]);
    }

    #[test]
    fn test_included_inbounds_idempotent() {
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[0].id]);
        let first = included_inbounds(&inbounds, &excluded);
        let second = included_inbounds(&inbounds, &excluded);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reconcile_full_view_deselect() {
        // Universe a,b,c; c already excluded; user views all and keeps only a.
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("");

        let next = reconcile_exclusions(&inbounds, &query, &excluded, &[inbounds[0].id]);

        assert!(!next.contains(inbounds[0].id));
        assert!(next.contains(inbounds[1].id));
        assert!(next.contains(inbounds[2].id));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_reconcile_preserves_out_of_view_exclusions() {
        // Only "b" visible; c's exclusion must survive including b.
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("b");

        let next = reconcile_exclusions(&inbounds, &query, &excluded, &[inbounds[1].id]);

        assert_eq!(next.ids(), &[inbounds[2].id]);
    }

    #[test]
    fn test_reconcile_deselect_only_visible_item() {
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("b");

        let next = reconcile_exclusions(&inbounds, &query, &excluded, &[]);

        assert!(next.contains(inbounds[1].id));
        assert!(next.contains(inbounds[2].id));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_reconcile_ignores_out_of_view_included_ids() {
        // Including an id outside the view is a no-op on the result.
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("b");

        let with_stray = reconcile_exclusions(
            &inbounds,
            &query,
            &excluded,
            &[inbounds[1].id, inbounds[2].id, InboundId::new()],
        );
        let without_stray =
            reconcile_exclusions(&inbounds, &query, &excluded, &[inbounds[1].id]);

        assert_eq!(with_stray, without_stray);
    }

    #[test]
    fn test_reconcile_drops_stale_exclusions() {
        // An exclusion referencing an inbound no longer in the universe
        // disappears from the result.
        let inbounds = universe(&["a", "b"]);
        let stale = InboundId::new();
        let excluded = ExclusionSet::from_ids([stale, inbounds[1].id]);
        let query = SearchQuery::new("a");

        let next = reconcile_exclusions(&inbounds, &query, &excluded, &[inbounds[0].id]);

        assert!(!next.contains(stale));
        assert_eq!(next.ids(), &[inbounds[1].id]);
    }

    #[test]
    fn test_reconcile_is_pure() {
        let inbounds = universe(&["a", "b", "c"]);
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("");
        let included = [inbounds[0].id];

        let first = reconcile_exclusions(&inbounds, &query, &excluded, &included);
        let second = reconcile_exclusions(&inbounds, &query, &excluded, &included);

        assert_eq!(first, second);
        assert_eq!(excluded.ids(), &[inbounds[2].id]); // input untouched
    }

    #[test]
    fn test_reconcile_output_order_follows_universe() {
        let inbounds = universe(&["alpha", "beta", "gamma", "delta"]);
        // gamma excluded and out of view; user deselects alpha and delta.
        let excluded = ExclusionSet::from_ids([inbounds[2].id]);
        let query = SearchQuery::new("al"); // matches alpha only

        let next = reconcile_exclusions(&inbounds, &query, &excluded, &[]);

        // Carried-over gamma first, then newly excluded alpha in view order.
        assert_eq!(next.ids(), &[inbounds[2].id, inbounds[0].id]);
    }
}
