use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window clearing and frame pacing parameters.
pub struct DisplayOptions {
    /// Clear color, linear RGB.
    pub clear_color: [f32; 3],
    /// Frame-rate cap. 0 renders as fast as presentation allows.
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            // Overcast sky.
            clear_color: [0.25, 0.38, 0.47],
            target_fps: 0,
        }
    }
}
