//! Panels of the manage-event screen.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormTab {
    #[default]
    EventDetails,
    Attendees,
    Settings,
}

/// What the body of the screen shows for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    EventDetails,
    /// Selectable in the tab row, but the panel has not been built.
    NotYetImplemented(FormTab),
}

impl FormTab {
    pub const ALL: [FormTab; 3] = [FormTab::EventDetails, FormTab::Attendees, FormTab::Settings];

    pub fn index(self) -> usize {
        match self {
            FormTab::EventDetails => 0,
            FormTab::Attendees => 1,
            FormTab::Settings => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn content(self) -> TabContent {
        match self {
            FormTab::EventDetails => TabContent::EventDetails,
            other => TabContent::NotYetImplemented(other),
        }
    }
}
