use serde::{Deserialize, Serialize};

/// Sub-element tag carried by a selection (for combo charts that mix kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectedValueKind {
    #[default]
    None,
    Line,
    Column,
}

/// Index pair identifying a touched value.
///
/// Meaning depends on the chart type: line `(line, point)`, column
/// `(column, subcolumn)`, pie and bubble `(index, index)`. A value is set iff
/// both indices are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedValue {
    pub first_index: i32,
    pub second_index: i32,
    #[serde(default)]
    pub kind: SelectedValueKind,
}

impl Default for SelectedValue {
    fn default() -> Self {
        Self::cleared()
    }
}

impl SelectedValue {
    #[must_use]
    pub const fn new(first_index: i32, second_index: i32, kind: SelectedValueKind) -> Self {
        Self {
            first_index,
            second_index,
            kind,
        }
    }

    #[must_use]
    pub const fn cleared() -> Self {
        Self::new(-1, -1, SelectedValueKind::None)
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.first_index >= 0 && self.second_index >= 0
    }

    pub fn clear(&mut self) {
        *self = Self::cleared();
    }
}
