//! Template picker state machine.
//!
//! A picker opens in `Loading`, settles into `Ready` or `Failed` when the
//! list fetch resolves, and then tracks one selected template plus a busy
//! flag while the selected template's load callback is in flight. The busy
//! flag must clear even when the callback fails, so the guarded API ties
//! clearing to scope exit.

use chrono::{DateTime, Utc};

use crate::error::{SelectorError, TemplateError};
use crate::template::{DownloadableTemplate, TemplateList};

/// Where the list fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// The list fetch has not resolved yet.
    Loading,
    /// The fetch failed; the only way out is dismissing and reopening.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
    /// The list arrived and templates can be selected.
    Ready {
        /// The fetched template list.
        list: TemplateList,
        /// When the fetch resolved.
        fetched_at: DateTime<Utc>,
    },
}

/// Drives a template picker through fetch, selection, and load.
///
/// # Examples
///
/// ```
/// use inbound_select::{TemplateList, TemplateSelector};
///
/// let mut selector = TemplateSelector::new();
/// assert!(selector.is_loading());
///
/// selector.resolve(Ok(TemplateList::default()));
/// assert!(selector.templates().is_some());
/// assert!(!selector.can_load()); // nothing selected yet
/// ```
#[derive(Debug)]
pub struct TemplateSelector {
    state: FetchState,
    selected: Option<usize>,
    busy: bool,
}

impl TemplateSelector {
    /// Creates a selector in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            selected: None,
            busy: false,
        }
    }

    /// Settles the pending fetch into `Ready` or `Failed`.
    ///
    /// Any previous selection is discarded; indices into an old list must
    /// not survive into a new one.
    pub fn resolve(&mut self, result: Result<TemplateList, TemplateError>) {
        self.selected = None;
        self.busy = false;
        self.state = match result {
            Ok(list) => FetchState::Ready {
                list,
                fetched_at: Utc::now(),
            },
            Err(err) => FetchState::Failed {
                message: err.to_string(),
            },
        };
    }

    /// Puts the selector back into `Loading` for a fresh fetch.
    ///
    /// This is the reopen path after a failure; there is no automatic retry.
    pub fn reload(&mut self) {
        self.selected = None;
        self.busy = false;
        self.state = FetchState::Loading;
    }

    /// Returns the current fetch state.
    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Returns true while the list fetch is unresolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Returns true if the list fetch failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, FetchState::Failed { .. })
    }

    /// Returns true once the list is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, FetchState::Ready { .. })
    }

    /// Returns the failure message, if the fetch failed.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Returns when the list was fetched, once ready.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            FetchState::Ready { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }

    /// Returns the fetched templates, once ready.
    #[must_use]
    pub fn templates(&self) -> Option<&[DownloadableTemplate]> {
        match &self.state {
            FetchState::Ready { list, .. } => Some(&list.templates),
            _ => None,
        }
    }

    /// Selects the template at `index`.
    ///
    /// # Errors
    ///
    /// Fails when the list is not ready, a load is in flight, or the index
    /// is out of range.
    pub fn select(&mut self, index: usize) -> Result<(), SelectorError> {
        if self.busy {
            return Err(SelectorError::LoadInProgress);
        }
        let templates = self.templates().ok_or(SelectorError::NotReady)?;
        if index >= templates.len() {
            return Err(SelectorError::SelectionOutOfRange {
                index,
                len: templates.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Clears the current selection.
    ///
    /// Kept as-is while a load is in flight; the loaded template must stay
    /// identifiable until the load settles.
    pub fn clear_selection(&mut self) {
        if !self.busy {
            self.selected = None;
        }
    }

    /// Returns the currently selected template.
    #[must_use]
    pub fn selected_template(&self) -> Option<&DownloadableTemplate> {
        let index = self.selected?;
        self.templates()?.get(index)
    }

    /// Returns true if the load action should be enabled: the list is
    /// ready, a template is selected, and no load is in flight.
    #[must_use]
    pub fn can_load(&self) -> bool {
        !self.busy && self.selected_template().is_some()
    }

    /// Returns true while the selected template's load is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks the load in flight and returns the template to load.
    ///
    /// Callers using this directly must pair it with [`finish_load`];
    /// prefer [`start_load`], which clears the flag on scope exit.
    ///
    /// [`finish_load`]: Self::finish_load
    /// [`start_load`]: Self::start_load
    ///
    /// # Errors
    ///
    /// Fails when the list is not ready, nothing is selected, or a load is
    /// already in flight.
    pub fn begin_load(&mut self) -> Result<DownloadableTemplate, SelectorError> {
        if self.busy {
            return Err(SelectorError::LoadInProgress);
        }
        if !self.is_ready() {
            return Err(SelectorError::NotReady);
        }
        let template = self
            .selected_template()
            .ok_or(SelectorError::NoSelection)?
            .clone();
        self.busy = true;
        Ok(template)
    }

    /// Clears the busy flag after a load finished, successfully or not.
    pub fn finish_load(&mut self) {
        self.busy = false;
    }

    /// Starts a load scoped to the returned guard.
    ///
    /// The guard carries the selected template and clears the busy flag
    /// when dropped, so the flag cannot stay stuck when the caller's load
    /// callback returns early with an error.
    ///
    /// # Errors
    ///
    /// Same conditions as [`begin_load`](Self::begin_load).
    pub fn start_load(&mut self) -> Result<LoadGuard<'_>, SelectorError> {
        let template = self.begin_load()?;
        Ok(LoadGuard {
            selector: self,
            template,
        })
    }
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-flight template load.
///
/// Dropping the guard clears the selector's busy flag.
#[derive(Debug)]
pub struct LoadGuard<'a> {
    selector: &'a mut TemplateSelector,
    template: DownloadableTemplate,
}

impl LoadGuard<'_> {
    /// Returns the template being loaded.
    #[must_use]
    pub fn template(&self) -> &DownloadableTemplate {
        &self.template
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.selector.finish_load();
    }
}
