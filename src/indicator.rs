use glam::Vec3;

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::node::IndicatorNode;
use crate::smoother::PositionSmoother;
use crate::types::{DisplayTransform, SurfaceAnchorId, TrackingState};
use crate::visibility::VisibilityController;
use crate::visited::VisitedSurfaceTracker;

/// Focus indicator driven once per rendering tick.
///
/// Owns the tracking state, the position smoother, the visited surfaces and
/// the opacity, and pushes their effects to the rendering node `N`. All calls
/// must come from the same serial context that mutates the host scene graph.
pub struct FocusIndicator<N: IndicatorNode> {
    node: N,
    state: TrackingState,
    smoother: PositionSmoother,
    visited: VisitedSurfaceTracker,
    visibility: VisibilityController,
}

impl<N: IndicatorNode> FocusIndicator<N> {
    pub fn new(node: N) -> FocusIndicator<N> {
        Self::build(node, &IndicatorConfig::default())
    }

    pub fn with_config(node: N, config: &IndicatorConfig) -> Result<FocusIndicator<N>> {
        config.validate()?;
        Ok(Self::build(node, config))
    }

    fn build(mut node: N, config: &IndicatorConfig) -> FocusIndicator<N> {
        let visibility = VisibilityController::new(config.initially_visible);
        node.set_opacity(visibility.opacity());
        FocusIndicator {
            node,
            state: TrackingState::NoFix,
            smoother: PositionSmoother::new(config.history_len, config.smoothing_factor),
            visited: VisitedSurfaceTracker::new(),
            visibility,
        }
    }

    /// Moves to `new`. Returns false, without any side effect, when `new`
    /// equals the current state.
    pub fn set_state(&mut self, new: TrackingState) -> bool {
        if new == self.state {
            log::trace!("state unchanged ({})", new.kind());
            return false;
        }
        log::debug!("focus state {} -> {}", self.state.kind(), new.kind());

        match new {
            TrackingState::NoFix => {
                // No positional update. The caller re-parents the node under the camera.
                self.node.on_no_fix();
            }
            TrackingState::PointFix { position, .. } => {
                self.place(position);
                self.node.set_pulsing(false);
            }
            TrackingState::SurfaceFix {
                position, surface, ..
            } => {
                self.visited.mark_visited(surface);
                self.place(position);
                self.node.set_pulsing(true);
            }
        }
        self.state = new;
        true
    }

    fn place(&mut self, position: Vec3) {
        let display = self.smoother.update(position);
        self.node.set_position(display);
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// Position payload of the current state, used as the hit-test continuity hint.
    pub fn last_known_position(&self) -> Option<Vec3> {
        self.state.position()
    }

    pub fn show(&mut self) {
        let opacity = self.visibility.show();
        self.node.set_opacity(opacity);
    }

    pub fn hide(&mut self) {
        let opacity = self.visibility.hide();
        self.node.set_opacity(opacity);
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn display_transform(&self) -> DisplayTransform {
        DisplayTransform {
            position: self.smoother.position(),
            opacity: self.visibility.opacity(),
        }
    }

    pub fn has_visited(&self, surface: SurfaceAnchorId) -> bool {
        self.visited.has_visited(surface)
    }

    pub fn visited(&self) -> &VisitedSurfaceTracker {
        &self.visited
    }

    pub fn smoother(&self) -> &PositionSmoother {
        &self.smoother
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }
}
