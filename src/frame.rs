use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::indicator::FocusIndicator;
use crate::node::IndicatorNode;
use crate::types::{CameraPose, SurfaceAnchorId, TrackingState};

/// Candidate position found by casting the screen-center ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    pub position: Vec3,
    #[serde(default)]
    pub surface: Option<SurfaceAnchorId>,
}

/// Screen-center hit test. `hint` is the indicator's last known position.
pub trait HitTester {
    fn hit_test(&mut self, hint: Option<Vec3>) -> Option<HitResult>;
}

impl<F> HitTester for F
where
    F: FnMut(Option<Vec3>) -> Option<HitResult>,
{
    fn hit_test(&mut self, hint: Option<Vec3>) -> Option<HitResult> {
        self(hint)
    }
}

/// Where the host should parent the indicator node after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attachment {
    /// Follow the camera rig, there is no world position.
    CameraRig,
    /// Sit in the world at the display position.
    World,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    pub attachment: Attachment,
    /// Whether there is a spot to place a virtual object on.
    pub placement_available: bool,
    pub state_changed: bool,
}

/// Tracking state for one hit test result.
pub fn tracking_state(hit: Option<&HitResult>, camera: Option<CameraPose>) -> TrackingState {
    match hit {
        None => TrackingState::NoFix,
        Some(HitResult {
            position,
            surface: Some(surface),
        }) => TrackingState::surface(*position, *surface, camera),
        Some(HitResult {
            position,
            surface: None,
        }) => TrackingState::point(*position, camera),
    }
}

/// Runs one rendering tick against the indicator.
///
/// The indicator is hidden while a virtual object is on screen, then the
/// hit tester is asked for a candidate near the last known position.
pub fn update_frame<N, H>(
    indicator: &mut FocusIndicator<N>,
    object_visible: bool,
    hit_tester: &mut H,
    camera: Option<CameraPose>,
) -> FrameOutcome
where
    N: IndicatorNode,
    H: HitTester + ?Sized,
{
    if object_visible {
        indicator.hide();
    } else {
        indicator.show();
    }

    let hit = hit_tester.hit_test(indicator.last_known_position());
    let state_changed = indicator.set_state(tracking_state(hit.as_ref(), camera));
    match hit {
        None => FrameOutcome {
            attachment: Attachment::CameraRig,
            placement_available: false,
            state_changed,
        },
        Some(_) => FrameOutcome {
            attachment: Attachment::World,
            placement_available: true,
            state_changed,
        },
    }
}
