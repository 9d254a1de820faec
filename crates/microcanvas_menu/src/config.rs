//! Menu layout configuration.
//!
//! Loaded once at startup, typically from a TOML file shipped with the
//! screen definition.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// Layout parameters for a selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu origin, X (pixels).
    pub origin_x: i32,
    /// Menu origin, Y (pixels).
    pub origin_y: i32,
    /// Vertical spacing between items (pixels). Also the number of unit
    /// steps in a single-step scroll animation.
    pub span_y: i32,
    /// Horizontal offset of item text from the origin (pixels).
    pub text_offset_x: i32,
    /// Whether to create the auxiliary cursor-index display widget.
    pub show_index: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            origin_x: 20,
            origin_y: 40,
            span_y: 20,
            text_offset_x: 10,
            show_index: false,
        }
    }
}

impl MenuConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidConfig`] on malformed TOML, and on a
    /// non-positive `span_y` (a scroll animation needs at least one unit
    /// step).
    pub fn from_toml_str(text: &str) -> MenuResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| MenuError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates layout constraints.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidConfig`] if `span_y < 1`.
    pub fn validate(&self) -> MenuResult<()> {
        if self.span_y < 1 {
            return Err(MenuError::InvalidConfig(format!(
                "span_y must be at least 1, got {}",
                self.span_y
            )));
        }
        Ok(())
    }

    /// The Y position of item `index` in the resting (cursor 0) layout.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn item_y(&self, index: usize) -> i32 {
        self.origin_y + index as i32 * self.span_y
    }

    /// The X position of item text.
    #[must_use]
    pub fn item_x(&self) -> i32 {
        self.origin_x + self.text_offset_x
    }
}
