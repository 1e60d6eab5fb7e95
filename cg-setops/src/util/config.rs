use serde::{Deserialize, Serialize};

/// Configuration of the minimum bounding circle construction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MbcConfig {
    /// Ceiling on the number of elimination rounds before the construction is abandoned.
    /// The rounds are also bounded by the size of the convex hull.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Compare the maximal angle against 90° with a floating point tolerance instead of exactly
    #[serde(default = "default_approx_right_angle")]
    pub approx_right_angle: bool,
}

fn default_max_iterations() -> usize {
    usize::MAX
}

fn default_approx_right_angle() -> bool {
    true
}

impl Default for MbcConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            approx_right_angle: true,
        }
    }
}
