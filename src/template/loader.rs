//! Fetching and parsing published template lists.

use crate::error::TemplateError;
use crate::template::{EditorKind, TemplateList, TemplateListConfig};

/// The remote-fetch primitive.
///
/// The HTTP client lives outside this crate; implementers wrap whatever
/// transport the host application uses and surface failures through
/// [`TemplateError::fetch`]. Fetches are single-shot: no retry, no timeout
/// beyond what the client itself enforces.
pub trait FetchClient {
    /// Fetches the document at `url` and returns its body as text.
    fn get(&self, url: &str) -> Result<String, TemplateError>;
}

/// Loads and parses the template list for the given editor.
///
/// Resolves the list URL from `config`, fetches the document once, and
/// parses it as a [`TemplateList`].
///
/// # Errors
///
/// Returns [`TemplateError::Fetch`] when the client fails and
/// [`TemplateError::Parse`] when the body is not a valid list document.
pub fn load_template_list(
    client: &impl FetchClient,
    config: &TemplateListConfig,
    editor: EditorKind,
) -> Result<TemplateList, TemplateError> {
    let body = client.get(config.url_for(editor))?;
    let list = serde_json::from_str(&body)?;
    Ok(list)
}
