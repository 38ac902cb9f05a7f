//! Layout configuration.

use serde::{Deserialize, Serialize};

/// What to do with rectangles that extend past the grid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipPolicy {
    /// Clamp top and bottom edges into `[0, 100]`.
    #[default]
    Clip,
    /// Leave out-of-window values for the renderer to deal with.
    PassThrough,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default)]
    pub clip: ClipPolicy,
}

impl LayoutOptions {
    pub fn with_clip(mut self, clip: ClipPolicy) -> Self {
        self.clip = clip;
        self
    }
}
