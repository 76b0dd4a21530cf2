//! Event management screens.

pub mod actions;
pub mod draft;
pub mod form;
pub mod tabs;

mod view;
pub use view::BasicEventInfo;

pub use actions::{DraftAction, DraftSink, SinkHandle, TracingSink};
pub use draft::{
    location_fields, DraftField, DraftPatch, DraftSnapshot, EventDraft, EventType, Location,
    LocationField,
};
pub use form::FormState;
pub use tabs::{FormTab, TabContent};
