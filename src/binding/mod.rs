//! Glue between a buffer-holding host widget and a remote sync layer.
//!
//! A [`Binding`] owns the widget plus a shadow copy of the last content the
//! sync layer has seen. Local changes are detected by diffing the widget
//! against the shadow once the host reports the content settled; remote
//! edits are validated, applied to the shadow, and pushed back to the widget
//! with every selection endpoint relocated independently.
//!
//! The binding is synchronous and single-threaded. The host is responsible
//! for strict turn-taking: it must not report a settle while a remote edit
//! is being applied, or the diff would run against a stale snapshot.

mod plain;
mod rope;

pub use plain::PlainWidget;
pub use rope::RopeWidget;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::cursor::{Selection, TransformCursor};
use crate::diff;
use crate::edit::{Edit, InvalidEdit};

/// The buffer-holding widget a [`Binding`] keeps in sync.
///
/// A host exposes its whole content as a string and its selection in
/// whichever coordinate system it natively uses; the binding never assumes
/// more about the widget than this.
pub trait HostWidget {
    /// The widget's native cursor coordinate type.
    type Cursor: TransformCursor;

    /// The widget's current content.
    fn content(&self) -> String;

    /// Replace the whole content.
    fn set_content(&mut self, text: &str);

    /// The current selection (equal endpoints for a plain caret).
    fn selection(&self) -> Selection<Self::Cursor>;

    /// Restore a selection after a content replacement.
    fn set_selection(&mut self, selection: Selection<Self::Cursor>);
}

/// Keeps one host widget synchronized with a remote document.
///
/// Detaching is dropping the binding; the widget is handed back through
/// [`Binding::into_widget`].
#[derive(Debug)]
pub struct Binding<W: HostWidget> {
    widget: W,
    /// Content as last seen by the sync layer, newline-normalized.
    shadow: String,
}

impl<W: HostWidget> Binding<W> {
    /// Attach to a widget, snapshotting its current content.
    pub fn attach(widget: W) -> Self {
        let shadow = normalize_newlines(&widget.content()).into_owned();
        Self { widget, shadow }
    }

    /// The content both sides currently agree on.
    pub fn content(&self) -> &str {
        &self.shadow
    }

    /// Borrow the attached widget.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutably borrow the attached widget (e.g. to feed it local input).
    pub const fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Detach, handing the widget back.
    pub fn into_widget(self) -> W {
        self.widget
    }

    /// Report that the host finished applying a local change.
    ///
    /// Hosts call this after their own update completes (queued on the run
    /// loop turn following the input event, or from an explicit
    /// "content settled" callback), never from inside the mutation itself.
    /// Returns the edits to forward to the sync layer, delete before insert;
    /// an unchanged buffer returns no edits.
    pub fn content_settled(&mut self) -> Vec<Edit> {
        let raw = self.widget.content();
        let current = normalize_newlines(&raw);
        let changes = diff::extract(&self.shadow, &current);
        if changes.is_empty() {
            trace!("content settled with no change");
            return Vec::new();
        }
        self.shadow = current.into_owned();
        let edits: Vec<Edit> = changes.edits().collect();
        debug!(count = edits.len(), "local change produced edits");
        edits
    }

    /// Apply one edit received from the sync layer.
    ///
    /// The selection is transformed endpoint-wise against the pre-edit
    /// content, then the new content and selection are pushed to the widget.
    ///
    /// # Errors
    /// Rejects the edit without touching the widget if its offsets do not
    /// fit the synchronized content.
    pub fn apply_remote(&mut self, edit: &Edit) -> Result<(), InvalidEdit> {
        edit.check(&self.shadow)?;
        let selection = self.widget.selection().transform(&self.shadow, edit);
        self.shadow = edit.apply(&self.shadow);
        self.widget.set_content(&self.shadow);
        self.widget.set_selection(selection);
        debug!(?edit, "applied remote edit");
        Ok(())
    }
}

/// Collapse host newline conventions to `\n`.
///
/// Hosts sourced from platform widgets may hand back `\r\n` pairs; offsets
/// on the wire always address the normalized form.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
