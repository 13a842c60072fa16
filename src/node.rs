use glam::Vec3;

/// Handle to the rendering node that displays the indicator.
///
/// The indicator only ever touches the node through these setters.
pub trait IndicatorNode {
    fn set_position(&mut self, position: Vec3);
    fn set_opacity(&mut self, opacity: f32);
    /// Material flag: pulsing on a confirmed surface, steady otherwise.
    fn set_pulsing(&mut self, pulsing: bool);
    /// Visual effect for losing the fix. Nothing to do by default.
    fn on_no_fix(&mut self) {}
}

/// In-memory node that keeps whatever was last pushed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedNode {
    pub position: Option<Vec3>,
    pub opacity: f32,
    pub pulsing: Option<bool>,
    pub no_fix_count: usize,
}

impl Default for DetachedNode {
    fn default() -> Self {
        Self {
            position: None,
            opacity: 0.0,
            pulsing: None,
            no_fix_count: 0,
        }
    }
}

impl IndicatorNode for DetachedNode {
    fn set_position(&mut self, position: Vec3) {
        self.position = Some(position);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_pulsing(&mut self, pulsing: bool) {
        self.pulsing = Some(pulsing);
    }

    fn on_no_fix(&mut self) {
        self.no_fix_count += 1;
    }
}
