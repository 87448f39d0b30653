use tracing::debug;

use crate::core::SelectedValue;
use crate::interaction::{SelectionMode, SelectionOutcome};
use crate::render::ChartRenderer;

use super::{ChartEngine, ChartEvent};

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn selected_value(&self) -> SelectedValue {
        self.selection.selected()
    }

    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Switching modes drops the current selection.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.interaction.selection_mode = mode;
        self.selection.set_mode(mode);
    }

    /// Selects a value programmatically and notifies the listener.
    ///
    /// Returns `true` when the selection changed. Selecting a cleared value
    /// behaves like [`ChartEngine::clear_selection`].
    pub fn select_value(&mut self, value: SelectedValue) -> bool {
        if !value.is_set() {
            return self.clear_selection();
        }
        if !self.selection.select(value) {
            return false;
        }
        debug!(?value, "value selected");
        self.emit(ChartEvent::ValueSelected(value));
        true
    }

    /// Drops the selection; notifies `ValueDeselected` only if one was held.
    pub fn clear_selection(&mut self) -> bool {
        let had_value = self.selection.selected().is_set();
        let changed = self.selection.clear();
        if had_value {
            self.emit(ChartEvent::ValueDeselected);
        }
        changed
    }

    pub(super) fn apply_selection_outcome(&mut self, outcome: SelectionOutcome) -> bool {
        if let Some(event) = outcome.event {
            self.emit(event.into());
        }
        outcome.needs_redraw
    }
}
