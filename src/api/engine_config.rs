use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_ZOOM, TickValue, VisibleViewportMode, ZoomType};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DEFAULT_VIEWPORT_ANIMATION_MS, DEFAULT_ZOOM_ANIMATION_MS, FlingConfig, GestureConfig,
    SelectionMode, ZOOM_AMOUNT,
};

/// Scroll direction of an enclosing container that may take over drags the
/// chart cannot consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerScrollType {
    Horizontal,
    Vertical,
}

/// Switches for the touch-driven behaviors of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionBehavior {
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
    #[serde(default = "default_true")]
    pub zoom_enabled: bool,
    #[serde(default = "default_true")]
    pub value_touch_enabled: bool,
    #[serde(default)]
    pub selection_mode: SelectionMode,
    /// Drags and flings rotate the chart instead of moving the viewport.
    #[serde(default)]
    pub rotation_enabled: bool,
    #[serde(default)]
    pub container_scroll: Option<ContainerScrollType>,
}

impl Default for InteractionBehavior {
    fn default() -> Self {
        Self {
            scroll_enabled: true,
            zoom_enabled: true,
            value_touch_enabled: true,
            selection_mode: SelectionMode::default(),
            rotation_enabled: false,
            container_scroll: None,
        }
    }
}

/// Tick and label layout for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Pixel extent of one label along the axis; drives the auto tick budget.
    #[serde(default = "default_label_extent_px")]
    pub label_extent_px: f64,
    /// Pixels reserved outside the plot area for labels.
    #[serde(default)]
    pub margin_px: f64,
    /// Labels are drawn inside the plot area and reserve no margin.
    #[serde(default)]
    pub inside: bool,
    #[serde(default = "default_true")]
    pub grid_lines: bool,
    /// Caller-supplied ticks; empty means generated ticks.
    #[serde(default)]
    pub manual_values: Vec<TickValue>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            label_extent_px: default_label_extent_px(),
            margin_px: 0.0,
            inside: false,
            grid_lines: true,
            manual_values: Vec::new(),
        }
    }
}

impl AxisConfig {
    /// Enabled axis with generated ticks and the given label margin.
    #[must_use]
    pub fn auto(margin_px: f64) -> Self {
        Self {
            enabled: true,
            margin_px,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label_extent_px(mut self, label_extent_px: f64) -> Self {
        self.label_extent_px = label_extent_px;
        self
    }

    #[must_use]
    pub fn with_inside_labels(mut self, inside: bool) -> Self {
        self.inside = inside;
        self
    }

    #[must_use]
    pub fn with_manual_values(mut self, values: Vec<TickValue>) -> Self {
        self.manual_values = values;
        self
    }

    /// Margin this axis reserves outside the plot area.
    #[must_use]
    pub fn reserved_margin_px(&self) -> f64 {
        if self.enabled && !self.inside {
            self.margin_px
        } else {
            0.0
        }
    }

    fn validate(&self, name: &str) -> ChartResult<()> {
        if !self.label_extent_px.is_finite() || self.label_extent_px < 1.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} label_extent_px must be finite and >= 1"
            )));
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} margin_px must be finite and >= 0"
            )));
        }
        if self.manual_values.iter().any(|tick| !tick.value.is_finite()) {
            return Err(ChartError::InvalidConfig(format!(
                "{name} manual tick values must be finite"
            )));
        }
        Ok(())
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub zoom_type: ZoomType,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default)]
    pub interaction: InteractionBehavior,
    #[serde(default)]
    pub fling: FlingConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default = "default_double_tap_zoom_amount")]
    pub double_tap_zoom_amount: f64,
    #[serde(default = "default_zoom_animation_ms")]
    pub zoom_animation_ms: f64,
    #[serde(default = "default_viewport_animation_ms")]
    pub viewport_animation_ms: f64,
    #[serde(default)]
    pub visible_viewport_mode: VisibleViewportMode,
    #[serde(default)]
    pub x_axis: AxisConfig,
    #[serde(default)]
    pub y_axis: AxisConfig,
    /// Recompute the maximum viewport from renderer data on every data change.
    #[serde(default = "default_true")]
    pub viewport_calculation_enabled: bool,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            zoom_type: ZoomType::default(),
            max_zoom: default_max_zoom(),
            interaction: InteractionBehavior::default(),
            fling: FlingConfig::default(),
            gestures: GestureConfig::default(),
            double_tap_zoom_amount: default_double_tap_zoom_amount(),
            zoom_animation_ms: default_zoom_animation_ms(),
            viewport_animation_ms: default_viewport_animation_ms(),
            visible_viewport_mode: VisibleViewportMode::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            viewport_calculation_enabled: true,
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_zoom_type(mut self, zoom_type: ZoomType) -> Self {
        self.zoom_type = zoom_type;
        self
    }

    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionBehavior) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.interaction.selection_mode = mode;
        self
    }

    #[must_use]
    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    /// Configures the preview layout: scale math follows the maximum viewport
    /// and the current viewport is drawn as a window inside it.
    #[must_use]
    pub fn with_preview_mode(mut self, preview: bool) -> Self {
        self.visible_viewport_mode = if preview {
            VisibleViewportMode::PinnedToMaximum
        } else {
            VisibleViewportMode::FollowCurrent
        };
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_viewport_calculation(mut self, enabled: bool) -> Self {
        self.viewport_calculation_enabled = enabled;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(ChartError::InvalidConfig(
                "max_zoom must be finite and >= 1".to_owned(),
            ));
        }
        if !self.double_tap_zoom_amount.is_finite()
            || self.double_tap_zoom_amount <= 0.0
            || self.double_tap_zoom_amount >= 1.0
        {
            return Err(ChartError::InvalidConfig(
                "double_tap_zoom_amount must be finite and in (0, 1)".to_owned(),
            ));
        }
        for (name, duration) in [
            ("zoom_animation_ms", self.zoom_animation_ms),
            ("viewport_animation_ms", self.viewport_animation_ms),
        ] {
            if !duration.is_finite() || duration < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        self.fling.validate()?;
        self.gestures.validate()?;
        self.x_axis.validate("x_axis")?;
        self.y_axis.validate("y_axis")?;
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_label_extent_px() -> f64 {
    32.0
}

fn default_max_zoom() -> f64 {
    DEFAULT_MAX_ZOOM
}

fn default_double_tap_zoom_amount() -> f64 {
    ZOOM_AMOUNT
}

fn default_zoom_animation_ms() -> f64 {
    DEFAULT_ZOOM_ANIMATION_MS
}

fn default_viewport_animation_ms() -> f64 {
    DEFAULT_VIEWPORT_ANIMATION_MS
}
