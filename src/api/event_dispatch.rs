use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{SelectedValue, Viewport};
use crate::interaction::SelectionEvent;
use crate::render::ChartRenderer;

use super::ChartEngine;

/// Notification delivered synchronously to the host listener.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// The current viewport moved; fires at most once per engine call.
    ViewportChanged(Viewport),
    ValueSelected(SelectedValue),
    ValueDeselected,
}

impl From<SelectionEvent> for ChartEvent {
    fn from(event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Selected(value) => Self::ValueSelected(value),
            SelectionEvent::Deselected => Self::ValueDeselected,
        }
    }
}

pub type ChartListener = Box<dyn FnMut(ChartEvent)>;

impl<R: ChartRenderer> ChartEngine<R> {
    /// Replaces the listener; `None` detaches it.
    pub fn set_listener(&mut self, listener: Option<ChartListener>) {
        self.listener = listener;
    }

    pub(super) fn emit(&mut self, event: ChartEvent) {
        trace!(?event, "chart event");
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }

    /// Emits `ViewportChanged` when the current viewport differs from `before`.
    pub(super) fn notify_viewport_if_changed(&mut self, before: Viewport) -> bool {
        let current = self.computator.current_viewport();
        if current == before {
            return false;
        }
        self.emit(ChartEvent::ViewportChanged(current));
        true
    }
}
