//! Local state of the manage-event screen: the draft plus the tab row.

use super::actions::{DraftAction, SinkHandle};
use super::draft::{DraftPatch, EventDraft, EventType};
use super::tabs::{FormTab, TabContent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    draft: EventDraft,
    active_tab: FormTab,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn active_tab(&self) -> FormTab {
        self.active_tab
    }

    /// Replaces the draft with a patched copy.
    pub fn patch(&mut self, patch: DraftPatch) {
        self.draft = self.draft.patched(patch);
    }

    pub fn set_event_type(&mut self, event_type: EventType) {
        self.patch(DraftPatch::event_type(event_type));
    }

    /// Read from the draft every time; there is no cached copy to go stale.
    pub fn is_venue(&self) -> bool {
        self.draft.is_venue()
    }

    /// Moves the tab indicator. The draft is left alone.
    pub fn select_tab(&mut self, tab: FormTab) {
        self.active_tab = tab;
    }

    pub fn content(&self) -> TabContent {
        self.active_tab.content()
    }

    /// Forwards a snapshot of the current draft to `sink`.
    pub fn trigger(&self, action: DraftAction, sink: &SinkHandle) {
        sink.dispatch(action, &self.draft.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::events::actions::DraftSink;
    use crate::events::draft::{DraftField, DraftSnapshot, Location};

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(DraftAction, DraftSnapshot)>>>);

    impl DraftSink for Recorder {
        fn dispatch(&self, action: DraftAction, snapshot: &DraftSnapshot) {
            self.0.borrow_mut().push((action, snapshot.clone()));
        }
    }

    #[test]
    fn trigger_forwards_current_draft_without_changing_it() {
        let recorder = Recorder::default();
        let sink = SinkHandle::new(recorder.clone());

        let mut form = FormState::new();
        form.patch(DraftPatch::text(DraftField::Title, "Demo night"));
        let before = form.clone();

        form.trigger(DraftAction::Publish, &sink);
        form.trigger(DraftAction::SaveDraft, &sink);

        assert_eq!(form, before);
        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, DraftAction::Publish);
        assert_eq!(calls[0].1.title, "Demo night");
        assert_eq!(calls[1].0, DraftAction::SaveDraft);
    }

    #[test]
    fn online_snapshot_never_carries_the_venue_address() {
        let recorder = Recorder::default();
        let sink = SinkHandle::new(recorder.clone());

        let mut form = FormState::new();
        form.patch(DraftPatch::text(DraftField::Address, "Mannerheimintie 1"));
        form.set_event_type(EventType::Online);
        form.patch(DraftPatch::text(DraftField::MeetingLink, "https://meet.example/x"));
        form.trigger(DraftAction::Preview, &sink);

        let calls = recorder.0.borrow();
        assert_eq!(
            calls[0].1.location,
            Location::Online {
                link: "https://meet.example/x".into()
            }
        );
    }

    #[test]
    fn sink_handles_compare_by_identity() {
        let a = SinkHandle::tracing();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, SinkHandle::tracing());
    }
}
