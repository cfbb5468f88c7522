use crate::constants::VIEWPORT_MIN_WIDTH_PX;

/// Decides whether the scene is mounted at all for a given viewport width.
///
/// Narrow viewports render nothing and pay nothing. Hosts re-check on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGate {
    pub min_width_px: f64,
}

impl Default for ViewportGate {
    fn default() -> Self {
        Self {
            min_width_px: VIEWPORT_MIN_WIDTH_PX,
        }
    }
}

impl ViewportGate {
    pub fn allows(&self, width_px: f64) -> bool {
        width_px.is_finite() && width_px >= self.min_width_px
    }
}
