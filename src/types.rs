use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Snapshot of the viewing camera at one tick, camera-to-world.
///
/// Every tick produces a fresh snapshot, so two poses taken at different
/// times never compare equal even if the device did not move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub timestamp_ns: i64,
    pub transform: Mat4,
}

impl CameraPose {
    pub fn new(timestamp_ns: i64, transform: Mat4) -> CameraPose {
        CameraPose {
            timestamp_ns,
            transform,
        }
    }

    /// Translation part of the camera-to-world transform.
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

/// Identity of a detected planar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceAnchorId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackingState {
    /// No stable position yet.
    #[default]
    NoFix,
    /// A loosely tracked point that is not on a known surface.
    PointFix {
        position: Vec3,
        camera: Option<CameraPose>,
    },
    /// A position resolved onto a detected plane.
    SurfaceFix {
        position: Vec3,
        surface: SurfaceAnchorId,
        camera: Option<CameraPose>,
    },
}

impl TrackingState {
    pub fn point(position: Vec3, camera: Option<CameraPose>) -> TrackingState {
        TrackingState::PointFix { position, camera }
    }

    pub fn surface(
        position: Vec3,
        surface: SurfaceAnchorId,
        camera: Option<CameraPose>,
    ) -> TrackingState {
        TrackingState::SurfaceFix {
            position,
            surface,
            camera,
        }
    }

    pub fn position(&self) -> Option<Vec3> {
        match self {
            TrackingState::NoFix => None,
            TrackingState::PointFix { position, .. } => Some(*position),
            TrackingState::SurfaceFix { position, .. } => Some(*position),
        }
    }

    pub fn camera(&self) -> Option<&CameraPose> {
        match self {
            TrackingState::NoFix => None,
            TrackingState::PointFix { camera, .. } => camera.as_ref(),
            TrackingState::SurfaceFix { camera, .. } => camera.as_ref(),
        }
    }

    pub fn surface_id(&self) -> Option<SurfaceAnchorId> {
        match self {
            TrackingState::SurfaceFix { surface, .. } => Some(*surface),
            _ => None,
        }
    }

    /// Stable label used in logs and traces.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackingState::NoFix => "no_fix",
            TrackingState::PointFix { .. } => "point_fix",
            TrackingState::SurfaceFix { .. } => "surface_fix",
        }
    }
}

/// Rendered position and opacity of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTransform {
    pub position: Vec3,
    pub opacity: f32,
}
