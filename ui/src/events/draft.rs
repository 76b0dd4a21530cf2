//! The event draft edited on the "basic information" screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Online,
    #[default]
    Venue,
}

/// Text fields of the draft, one per input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    DateTime,
    Capacity,
    VenueName,
    Address,
    MeetingLink,
}

/// In-progress, unsaved event. Every field accepts any text; nothing is
/// validated here.
///
/// Venue details and the meeting link live side by side so switching the
/// event type never clears what the user typed for the other kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub capacity: String,
    pub event_type: EventType,
    pub venue_name: String,
    pub address: String,
    pub meeting_link: String,
}

/// Field-level override for [`EventDraft::patched`]. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub capacity: Option<String>,
    pub event_type: Option<EventType>,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub meeting_link: Option<String>,
}

impl DraftPatch {
    pub fn text(field: DraftField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            DraftField::Title => Self {
                title: value,
                ..Self::default()
            },
            DraftField::Description => Self {
                description: value,
                ..Self::default()
            },
            DraftField::DateTime => Self {
                date_time: value,
                ..Self::default()
            },
            DraftField::Capacity => Self {
                capacity: value,
                ..Self::default()
            },
            DraftField::VenueName => Self {
                venue_name: value,
                ..Self::default()
            },
            DraftField::Address => Self {
                address: value,
                ..Self::default()
            },
            DraftField::MeetingLink => Self {
                meeting_link: value,
                ..Self::default()
            },
        }
    }

    pub fn event_type(event_type: EventType) -> Self {
        Self {
            event_type: Some(event_type),
            ..Self::default()
        }
    }
}

/// Where the event happens. Only the active kind's details are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Location {
    Venue { name: String, address: String },
    Online { link: String },
}

/// The draft as handed to preview / save / publish hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub capacity: String,
    pub location: Location,
}

impl EventDraft {
    /// A new draft with `patch` applied on top of this one.
    pub fn patched(&self, patch: DraftPatch) -> Self {
        let DraftPatch {
            title,
            description,
            date_time,
            capacity,
            event_type,
            venue_name,
            address,
            meeting_link,
        } = patch;

        Self {
            title: title.unwrap_or_else(|| self.title.clone()),
            description: description.unwrap_or_else(|| self.description.clone()),
            date_time: date_time.unwrap_or_else(|| self.date_time.clone()),
            capacity: capacity.unwrap_or_else(|| self.capacity.clone()),
            event_type: event_type.unwrap_or(self.event_type),
            venue_name: venue_name.unwrap_or_else(|| self.venue_name.clone()),
            address: address.unwrap_or_else(|| self.address.clone()),
            meeting_link: meeting_link.unwrap_or_else(|| self.meeting_link.clone()),
        }
    }

    pub fn with_event_type(&self, event_type: EventType) -> Self {
        self.patched(DraftPatch::event_type(event_type))
    }

    pub fn is_venue(&self) -> bool {
        self.event_type == EventType::Venue
    }

    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::DateTime => &self.date_time,
            DraftField::Capacity => &self.capacity,
            DraftField::VenueName => &self.venue_name,
            DraftField::Address => &self.address,
            DraftField::MeetingLink => &self.meeting_link,
        }
    }

    pub fn location(&self) -> Location {
        match self.event_type {
            EventType::Venue => Location::Venue {
                name: self.venue_name.clone(),
                address: self.address.clone(),
            },
            EventType::Online => Location::Online {
                link: self.meeting_link.clone(),
            },
        }
    }

    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            title: self.title.clone(),
            description: self.description.clone(),
            date_time: self.date_time.clone(),
            capacity: self.capacity.clone(),
            location: self.location(),
        }
    }
}

/// Pieces rendered in the location card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    VenueName,
    Address,
    Map,
    MeetingLink,
}

/// The location inputs shown for `event_type`. The two groups never overlap.
pub fn location_fields(event_type: EventType) -> &'static [LocationField] {
    match event_type {
        EventType::Venue => &[
            LocationField::VenueName,
            LocationField::Address,
            LocationField::Map,
        ],
        EventType::Online => &[LocationField::MeetingLink],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty_venue_event() {
        let draft = EventDraft::default();
        assert_eq!(draft.event_type, EventType::Venue);
        assert!(draft.is_venue());
        assert!(draft.title.is_empty() && draft.address.is_empty());
    }

    #[test]
    fn patch_does_not_touch_the_source_record() {
        let draft = EventDraft::default();
        let next = draft.patched(DraftPatch::text(DraftField::Title, "Rust Helsinki"));
        assert_eq!(draft.title, "");
        assert_eq!(next.title, "Rust Helsinki");
    }

    #[test]
    fn capacity_accepts_any_text() {
        let draft = EventDraft::default().patched(DraftPatch::text(DraftField::Capacity, "lots"));
        assert_eq!(draft.capacity, "lots");
    }

    #[test]
    fn snapshot_serializes_tagged_location() {
        let draft = EventDraft::default()
            .patched(DraftPatch::text(DraftField::MeetingLink, "https://zoom.us/j/1"))
            .with_event_type(EventType::Online);
        let json = serde_json::to_value(draft.snapshot()).unwrap();
        assert_eq!(json["location"]["type"], "online");
        assert_eq!(json["location"]["link"], "https://zoom.us/j/1");
    }
}
