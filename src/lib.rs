//! # inbound-select - Selection state for VPN node management panels
//!
//! inbound-select implements the selection logic behind a node form's
//! inbound picker: the persisted state is an exclusion set, inclusion is
//! always derived, and toggles made on a search-narrowed view must never
//! disturb inbounds outside that view. It also models the downloadable
//! template picker flow: fetch a published list, select an entry, and run
//! a load callback behind a busy flag that is guaranteed to clear.
//!
//! ## Core Concepts
//!
//! - **Inbound**: a configured network listener, selectable per node
//! - **Exclusion set**: the persisted record of deselected inbound ids
//! - **Filtered view**: the search-narrowed subset currently visible
//! - **Reconciliation**: folding a view-scoped toggle back into the set
//!
//! ## Usage
//!
//! ```rust
//! use inbound_select::{
//!     filter_inbounds, included_inbounds, reconcile_exclusions,
//!     ExclusionSet, Inbound, SearchQuery,
//! };
//!
//! let inbounds = vec![
//!     Inbound::new("VLESS TCP").with_port(443),
//!     Inbound::new("Trojan WS").with_port(8443),
//! ];
//! let query = SearchQuery::new("vless");
//! let view: Vec<_> = filter_inbounds(&inbounds, &query).collect();
//!
//! // User unchecks everything in the narrowed view.
//! let excluded = reconcile_exclusions(&inbounds, &query, &ExclusionSet::new(), &[]);
//! assert!(excluded.contains(inbounds[0].id));
//! assert!(!excluded.contains(inbounds[1].id));
//!
//! // Inclusion is derived, never stored.
//! let included = included_inbounds(&inbounds, &excluded);
//! assert_eq!(included, vec![inbounds[1].id]);
//! # let _ = view;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;
pub mod inbound;
pub mod selection;
pub mod template;

// Re-export primary types at crate root for convenience
pub use error::{SelectError, SelectResult, SelectorError, TemplateError};
pub use filter::{filter_inbounds, SearchQuery};
pub use inbound::{Inbound, InboundId};
pub use selection::{included_inbounds, reconcile_exclusions, ExclusionSet};
pub use template::{
    load_template_list, DownloadableTemplate, EditorKind, FetchClient, FetchState, LoadGuard,
    TemplateKind, TemplateList, TemplateListConfig, TemplateSelector,
};
