//! Downloadable template lists and the selection flow around them.
//!
//! The platform publishes lists of downloadable configuration templates as
//! remote JSON documents. This module owns the document's data model, the
//! loader that fetches and parses it, and the state machine a template
//! picker drives while the list is in flight.

mod loader;
mod selector;

pub use loader::{load_template_list, FetchClient};
pub use selector::{FetchState, LoadGuard, TemplateSelector};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a downloadable template.
///
/// The wire form is the platform's SCREAMING_SNAKE_CASE label. Remote lists
/// are published independently of this crate, so an unrecognized label
/// parses into [`TemplateKind::Other`] instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateKind {
    /// Stash client template.
    Stash,
    /// sing-box template.
    Singbox,
    /// Legacy sing-box template.
    SingboxLegacy,
    /// Mihomo (Clash Meta core) template.
    Mihomo,
    /// Xray JSON subscription template.
    XrayJson,
    /// Clash template.
    Clash,
    /// Xray core configuration template.
    XrayCore,
    /// A kind this crate does not know about.
    Other(String),
}

impl From<String> for TemplateKind {
    fn from(value: String) -> Self {
        let label = value.trim();
        match label.to_ascii_uppercase().as_str() {
            "STASH" => Self::Stash,
            "SINGBOX" => Self::Singbox,
            "SINGBOX_LEGACY" => Self::SingboxLegacy,
            "MIHOMO" => Self::Mihomo,
            "XRAY_JSON" => Self::XrayJson,
            "CLASH" => Self::Clash,
            "XRAY_CORE" => Self::XrayCore,
            _ => Self::Other(label.to_string()),
        }
    }
}

impl From<TemplateKind> for String {
    fn from(value: TemplateKind) -> Self {
        match value {
            TemplateKind::Stash => "STASH".to_string(),
            TemplateKind::Singbox => "SINGBOX".to_string(),
            TemplateKind::SingboxLegacy => "SINGBOX_LEGACY".to_string(),
            TemplateKind::Mihomo => "MIHOMO".to_string(),
            TemplateKind::XrayJson => "XRAY_JSON".to_string(),
            TemplateKind::Clash => "CLASH".to_string(),
            TemplateKind::XrayCore => "XRAY_CORE".to_string(),
            TemplateKind::Other(label) => label,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stash => write!(f, "STASH"),
            Self::Singbox => write!(f, "SINGBOX"),
            Self::SingboxLegacy => write!(f, "SINGBOX_LEGACY"),
            Self::Mihomo => write!(f, "MIHOMO"),
            Self::XrayJson => write!(f, "XRAY_JSON"),
            Self::Clash => write!(f, "CLASH"),
            Self::XrayCore => write!(f, "XRAY_CORE"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// One downloadable template entry from a published list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadableTemplate {
    /// Who published the template.
    pub author: String,

    /// Human-readable template name.
    pub name: String,

    /// Template kind, `type` on the wire.
    #[serde(rename = "type")]
    pub kind: TemplateKind,

    /// Where the template body can be downloaded from.
    pub url: String,
}

/// A published list of downloadable templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateList {
    /// The templates, in published order.
    pub templates: Vec<DownloadableTemplate>,
}

impl TemplateList {
    /// Returns the number of templates in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the list has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Which editor is asking for templates.
///
/// The subscription editor and the Xray core editor consume different
/// published lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    /// Subscription template editor.
    Subscription,
    /// Xray core configuration editor.
    XrayCore,
}

/// Where the published template lists live.
///
/// Passed explicitly to the loader so callers control the endpoints; the
/// defaults point at the public index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateListConfig {
    /// URL of the subscription template list document.
    pub subscription_list_url: String,

    /// URL of the Xray core template list document.
    pub xray_core_list_url: String,
}

impl TemplateListConfig {
    /// Returns the list URL for the given editor.
    #[must_use]
    pub fn url_for(&self, editor: EditorKind) -> &str {
        match editor {
            EditorKind::Subscription => &self.subscription_list_url,
            EditorKind::XrayCore => &self.xray_core_list_url,
        }
    }
}

impl Default for TemplateListConfig {
    fn default() -> Self {
        Self {
            subscription_list_url:
                "https://raw.githubusercontent.com/remnawave/templates/main/subscription-templates.json"
                    .to_string(),
            xray_core_list_url:
                "https://raw.githubusercontent.com/remnawave/templates/main/xray-core-templates.json"
                    .to_string(),
        }
    }
}
