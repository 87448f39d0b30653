use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::SelectedValue;

/// How a confirmed touch selection behaves after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// The highlight disappears on release; every tap notifies.
    #[default]
    Momentary,
    /// The highlight stays; repeated taps on the same value notify once.
    Persistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(SelectedValue),
    Deselected,
}

/// Result of feeding one touch phase into the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOutcome {
    pub needs_redraw: bool,
    pub event: Option<SelectionEvent>,
}

impl SelectionOutcome {
    const fn redraw(needs_redraw: bool) -> Self {
        Self {
            needs_redraw,
            event: None,
        }
    }
}

/// Tracks the held value during a touch and decides when listeners hear about it.
///
/// `hit` arguments are the renderer's hit-test result at the pointer, or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionStateMachine {
    mode: SelectionMode,
    selected: SelectedValue,
    last_notified: SelectedValue,
}

impl SelectionStateMachine {
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear();
        }
    }

    #[must_use]
    pub fn selected(&self) -> SelectedValue {
        self.selected
    }

    pub fn on_press(&mut self, hit: Option<SelectedValue>) -> SelectionOutcome {
        let was_touched = self.selected.is_set();
        let previous = self.selected;
        self.selected = hit.unwrap_or_default();
        let is_touched = self.selected.is_set();
        trace!(was_touched, is_touched, "selection press");

        let mut outcome = SelectionOutcome::redraw(previous != self.selected);
        if self.mode == SelectionMode::Persistent && was_touched != is_touched {
            self.last_notified.clear();
            if was_touched {
                outcome.event = Some(SelectionEvent::Deselected);
            }
        }
        outcome
    }

    pub fn on_move(&mut self, hit: Option<SelectedValue>) -> SelectionOutcome {
        if !self.selected.is_set() || hit == Some(self.selected) {
            return SelectionOutcome::default();
        }
        self.selected.clear();
        SelectionOutcome::redraw(true)
    }

    pub fn on_release(&mut self, hit: Option<SelectedValue>) -> SelectionOutcome {
        if !self.selected.is_set() {
            return SelectionOutcome::default();
        }
        if hit != Some(self.selected) {
            self.selected.clear();
            return SelectionOutcome::redraw(true);
        }

        let value = self.selected;
        let mut outcome = SelectionOutcome::redraw(true);
        match self.mode {
            SelectionMode::Persistent => {
                if value != self.last_notified {
                    self.last_notified = value;
                    outcome.event = Some(SelectionEvent::Selected(value));
                }
            }
            SelectionMode::Momentary => {
                outcome.event = Some(SelectionEvent::Selected(value));
                self.selected.clear();
            }
        }
        outcome
    }

    pub fn on_cancel(&mut self) -> SelectionOutcome {
        if !self.selected.is_set() {
            return SelectionOutcome::default();
        }
        self.selected.clear();
        SelectionOutcome::redraw(true)
    }

    /// Programmatic selection. Returns `false` when nothing changed.
    pub fn select(&mut self, value: SelectedValue) -> bool {
        if self.selected == value && self.last_notified == value {
            return false;
        }
        self.selected = value;
        self.last_notified = value;
        true
    }

    /// Drops the held value and the notification memory.
    pub fn clear(&mut self) -> bool {
        let changed = self.selected.is_set() || self.last_notified.is_set();
        self.selected.clear();
        self.last_notified.clear();
        changed
    }
}
