//! The state behind the user interface.
//!
//! A [`Session`] owns the catalog, the form values, the selection and the
//! text currently shown in the output field. Every mutation goes through a
//! method here, and each one ends by rebuilding the displayed text, so the
//! display always reflects the latest input.

use snafu::prelude::*;
use tracing::{debug, warn};

use crate::{
    BoxedError,
    catalog::Catalog,
    clipboard::{COPIED_FEEDBACK, Clipboard, ClipboardCopyFailedSnafu, ClipboardError},
    link::{BuildLinkError, LinkBuilder},
    request::{RequestField, RequestParams},
    selection::SelectionSet,
};

/// Interactive state for building a link.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    builder: LinkBuilder,
    params: RequestParams,
    selection: SelectionSet,
    display: String,
}

impl Session {
    /// Creates a session with an empty selection.
    #[must_use]
    pub fn new(catalog: Catalog, builder: LinkBuilder, params: RequestParams) -> Self {
        let mut session = Self {
            catalog,
            builder,
            params,
            selection: SelectionSet::new(),
            display: String::new(),
        };
        session.refresh();
        session
    }

    /// The scope catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current form values.
    #[must_use]
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// The currently selected scopes.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The text of the output field: the link or the placeholder message.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Builds the link from the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty.
    pub fn link(&self) -> Result<String, BuildLinkError> {
        self.builder.build_link(&self.params, &self.selection)
    }

    /// Toggles the scope identifier `id`, returning whether it is now selected.
    ///
    /// Identifiers not in the catalog are still accepted.
    pub fn toggle_scope(&mut self, id: &str) -> bool {
        if self.catalog.find(id).is_none() {
            warn!(scope = id, "toggling scope that is not in the catalog");
        }
        let selected = self.selection.toggle(id);
        debug!(scope = id, selected, "toggled scope");
        self.refresh();
        selected
    }

    /// Toggles the catalog entry at the 1-based display position `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no entry at that position.
    pub fn toggle_entry(&mut self, index: usize) -> Result<bool, SessionError> {
        let id = self
            .catalog
            .entry_at(index)
            .context(EntryOutOfRangeSnafu {
                index,
                len: self.catalog.len(),
            })?
            .id()
            .to_string();
        Ok(self.toggle_scope(&id))
    }

    /// Deselects every scope.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        debug!("cleared selection");
        self.refresh();
    }

    /// Sets a form field.
    pub fn set_field(&mut self, field: RequestField, value: impl Into<String>) {
        self.params.set(field, value);
        debug!(%field, "updated field");
        self.refresh();
    }

    /// Empties a form field.
    pub fn clear_field(&mut self, field: RequestField) {
        self.set_field(field, String::new());
    }

    /// Copies the displayed text to `clipboard`.
    ///
    /// Returns the feedback text to show on success. Neither outcome changes
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::ClipboardCopyFailed`] if the backend fails.
    pub fn copy_link<C: Clipboard>(
        &self,
        mut clipboard: C,
    ) -> Result<&'static str, ClipboardError> {
        clipboard
            .set_text(&self.display)
            .map_err(BoxedError::from_err)
            .inspect_err(|e| warn!(error = %e, "failed to copy link"))
            .context(ClipboardCopyFailedSnafu)?;
        Ok(COPIED_FEEDBACK)
    }

    fn refresh(&mut self) {
        self.display = self.builder.render(&self.params, &self.selection);
        debug!(
            complete = self.display != crate::link::MISSING_REQUIRED_PLACEHOLDER,
            "refreshed link"
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Catalog::builtin(),
            LinkBuilder::default(),
            RequestParams::default(),
        )
    }
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum SessionError {
    /// No catalog entry exists at the requested position.
    #[snafu(display("No scope numbered {index}; the catalog has {len} entries"))]
    EntryOutOfRange {
        /// The requested 1-based position.
        index: usize,
        /// The number of entries in the catalog.
        len: usize,
    },
}
