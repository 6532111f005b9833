//! Inbound types and identity.
//!
//! An inbound is a configured network listener of the platform, selectable
//! per node. Stable inbound IDs are what the exclusion set references, so
//! identity must survive renames, protocol changes, and port moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique, stable inbound identifier.
///
/// Once created, an `InboundId` never changes. Exclusion sets persist these
/// ids, so they are the identity anchor for selection state.
///
/// # Examples
///
/// ```
/// use inbound_select::InboundId;
///
/// let id = InboundId::new();
/// assert!(!id.is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundId(Uuid);

impl InboundId {
    /// Creates a new random inbound ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an inbound ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true if this is a nil (all zeros) UUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Creates a nil inbound ID (for testing or sentinel values).
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for InboundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InboundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InboundId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<InboundId> for Uuid {
    fn from(id: InboundId) -> Self {
        id.0
    }
}

/// A selectable inbound of the platform.
///
/// The wire form matches the panel API: `uuid`, `tag`, `type`, `port`.
/// Protocol and port are optional; for search purposes an absent attribute
/// behaves like an empty string.
///
/// # Examples
///
/// ```
/// use inbound_select::Inbound;
///
/// let inbound = Inbound::new("VLESS TCP REALITY").with_port(443);
/// assert_eq!(inbound.tag, "VLESS TCP REALITY");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inbound {
    /// Globally unique identifier.
    #[serde(rename = "uuid")]
    pub id: InboundId,

    /// Display tag, the primary searchable attribute.
    pub tag: String,

    /// Protocol type label (e.g. "vless", "trojan").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub protocol: Option<String>,

    /// Listening port.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub port: Option<u16>,
}

impl Inbound {
    /// Creates a new inbound with the given tag and a random ID.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: InboundId::new(),
            tag: tag.into(),
            protocol: None,
            port: None,
        }
    }

    /// Creates a new inbound with a specific ID.
    ///
    /// Useful when reconstructing inbounds from API payloads or in tests
    /// that need deterministic identity.
    #[must_use]
    pub fn with_id(id: InboundId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            protocol: None,
            port: None,
        }
    }

    /// Sets the protocol type label.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Sets the listening port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

impl PartialEq for Inbound {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Inbound {}

impl std::hash::Hash for Inbound {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
