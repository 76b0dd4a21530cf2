//! Preview / save / publish hooks.
//!
//! The form never submits anything itself. Each button hands a snapshot of
//! the current draft to a [`DraftSink`]; hosts provide their own sink
//! through Dioxus context (`use_context_provider(|| SinkHandle::new(..))`),
//! otherwise [`TracingSink`] logs the snapshot.

use std::fmt;
use std::rc::Rc;

use super::draft::DraftSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    Preview,
    SaveDraft,
    Publish,
    SaveChanges,
}

impl DraftAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftAction::Preview => "preview",
            DraftAction::SaveDraft => "save_draft",
            DraftAction::Publish => "publish",
            DraftAction::SaveChanges => "save_changes",
        }
    }
}

impl fmt::Display for DraftAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait DraftSink {
    fn dispatch(&self, action: DraftAction, snapshot: &DraftSnapshot);
}

/// Logs every action with the JSON snapshot attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DraftSink for TracingSink {
    fn dispatch(&self, action: DraftAction, snapshot: &DraftSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(draft) => tracing::info!(%action, %draft, "event draft action"),
            Err(err) => tracing::warn!(%action, ?snapshot, %err, "event draft action (unserializable)"),
        }
    }
}

/// Cloneable handle so a sink can travel through context and props.
#[derive(Clone)]
pub struct SinkHandle(Rc<dyn DraftSink>);

impl SinkHandle {
    pub fn new(sink: impl DraftSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn tracing() -> Self {
        Self::new(TracingSink)
    }

    pub fn dispatch(&self, action: DraftAction, snapshot: &DraftSnapshot) {
        self.0.dispatch(action, snapshot);
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::tracing()
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SinkHandle(..)")
    }
}
