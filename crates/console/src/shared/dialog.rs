//! Dialog orchestration for the management screens.
//!
//! One overlay at a time: the create/edit panel, the read-only detail view,
//! or the delete confirmation. Every transition into a non-idle state starts
//! from `Idle`, with one shortcut — the detail view may hand over directly
//! to the edit panel for the same record.

/// Which overlay a management screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState<Id> {
    Idle,
    Creating,
    Editing(Id),
    Viewing(Id),
    ConfirmingDelete(Id),
}

impl<Id: Copy> DialogState<Id> {
    pub fn is_idle(&self) -> bool {
        matches!(self, DialogState::Idle)
    }

    /// The record the active overlay targets, if any
    pub fn target(&self) -> Option<Id> {
        match self {
            DialogState::Editing(id)
            | DialogState::Viewing(id)
            | DialogState::ConfirmingDelete(id) => Some(*id),
            DialogState::Idle | DialogState::Creating => None,
        }
    }
}

/// Single-slot dialog state machine.
///
/// `open_*` methods return whether the transition was accepted; a rejected
/// call leaves the current overlay untouched. Closing is always allowed and
/// discards in-flight input — committing a mutation is the screen's job,
/// done before it closes the dialog.
#[derive(Debug)]
pub struct DialogController<Id> {
    state: DialogState<Id>,
}

impl<Id: Copy + Eq> DialogController<Id> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Idle,
        }
    }

    pub fn state(&self) -> DialogState<Id> {
        self.state
    }

    pub fn open_create(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.state = DialogState::Creating;
        true
    }

    pub fn open_edit(&mut self, id: Id) -> bool {
        match self.state {
            DialogState::Idle => {
                self.state = DialogState::Editing(id);
                true
            }
            // detail view offers an edit action for the record it shows
            DialogState::Viewing(viewed) if viewed == id => {
                self.state = DialogState::Editing(id);
                true
            }
            _ => false,
        }
    }

    pub fn open_view(&mut self, id: Id) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.state = DialogState::Viewing(id);
        true
    }

    pub fn open_delete_confirm(&mut self, id: Id) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.state = DialogState::ConfirmingDelete(id);
        true
    }

    /// Cancel/close from any state
    pub fn close(&mut self) {
        self.state = DialogState::Idle;
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.state, DialogState::Creating)
    }

    pub fn editing_target(&self) -> Option<Id> {
        match self.state {
            DialogState::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn deleting_target(&self) -> Option<Id> {
        match self.state {
            DialogState::ConfirmingDelete(id) => Some(id),
            _ => None,
        }
    }
}

impl<Id: Copy + Eq> Default for DialogController<Id> {
    fn default() -> Self {
        Self::new()
    }
}
