//! Display-switching hooks consumed by commands.
//!
//! Core never renders anything; it only tells the front end which list
//! should be visible after a command runs.

/// Entity list a front end can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPanel {
    Clients,
    Projects,
    Issues,
}

/// Front-end collaborator notified after mutations.
pub trait Ui {
    fn show_clients(&mut self);
    fn show_projects(&mut self);
    fn show_issues(&mut self);
}

/// `Ui` that remembers the last requested panel.
///
/// Used by the CLI and by tests to observe command side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingUi {
    active: Option<ListPanel>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ListPanel> {
        self.active
    }
}

impl Ui for RecordingUi {
    fn show_clients(&mut self) {
        self.active = Some(ListPanel::Clients);
    }

    fn show_projects(&mut self) {
        self.active = Some(ListPanel::Projects);
    }

    fn show_issues(&mut self) {
        self.active = Some(ListPanel::Issues);
    }
}
