//! Search filtering over the inbound universe.
//!
//! A query narrows the full inbound list to the filtered view the user is
//! toggling. Matching is a case-insensitive substring test over the tag,
//! the protocol type label, and the port rendered as decimal text; nothing
//! else participates.

use crate::inbound::Inbound;

/// A normalized search query.
///
/// The raw text is trimmed and lowercased once at construction, so matching
/// individual inbounds stays allocation-light.
///
/// # Examples
///
/// ```
/// use inbound_select::{Inbound, SearchQuery};
///
/// let query = SearchQuery::new("  REALITY ");
/// let inbound = Inbound::new("VLESS TCP Reality");
/// assert!(query.matches(&inbound));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
}

impl SearchQuery {
    /// Creates a query from raw user input, trimming and lowercasing it.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: raw.trim().to_lowercase(),
        }
    }

    /// Returns true if the query is empty after trimming.
    ///
    /// An empty query matches every inbound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the normalized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns true if the inbound matches this query.
    ///
    /// Matches against the tag, the protocol type label, and the port's
    /// decimal representation; absent attributes count as empty strings.
    #[must_use]
    pub fn matches(&self, inbound: &Inbound) -> bool {
        if self.is_empty() {
            return true;
        }

        if inbound.tag.to_lowercase().contains(&self.normalized) {
            return true;
        }

        if let Some(protocol) = &inbound.protocol {
            if protocol.to_lowercase().contains(&self.normalized) {
                return true;
            }
        }

        if let Some(port) = inbound.port {
            if port.to_string().contains(&self.normalized) {
                return true;
            }
        }

        false
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Filters the inbound universe down to the view matching `query`.
///
/// Lazy and restartable: the returned iterator is `Clone`, so callers can
/// walk the view more than once without recomputing the query. Order follows
/// `inbounds` exactly.
///
/// # Examples
///
/// ```
/// use inbound_select::{filter_inbounds, Inbound, SearchQuery};
///
/// let inbounds = vec![
///     Inbound::new("VLESS").with_port(443),
///     Inbound::new("Trojan").with_port(8443),
/// ];
/// let query = SearchQuery::new("trojan");
/// let view: Vec<_> = filter_inbounds(&inbounds, &query).collect();
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].tag, "Trojan");
/// ```
pub fn filter_inbounds<'a>(
    inbounds: &'a [Inbound],
    query: &'a SearchQuery,
) -> impl Iterator<Item = &'a Inbound> + Clone + 'a {
    inbounds.iter().filter(move |inbound| query.matches(inbound))
}
