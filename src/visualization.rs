use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::types::SurfaceAnchorId;

/// Deterministic color per surface.
pub fn id_to_color(id: SurfaceAnchorId) -> (u8, u8, u8, u8) {
    let mut rng = ChaCha8Rng::seed_from_u64(id.0);
    let color_num = rng.random_range(0..2u32.pow(24));
    (
        ((color_num >> 16) % 256) as u8,
        ((color_num >> 8) % 256) as u8,
        (color_num % 256) as u8,
        255,
    )
}

#[cfg(feature = "visualization")]
pub use rerun_log::log_indicator;

#[cfg(feature = "visualization")]
mod rerun_log {
    use glam::Vec3;
    use rerun::{RecordingStream, TimeCell};

    use super::id_to_color;
    use crate::types::{DisplayTransform, TrackingState};

    const RAW_COLOR: (u8, u8, u8, u8) = (128, 128, 128, 255);
    const POINT_FIX_COLOR: (u8, u8, u8, u8) = (255, 200, 0, 255);

    /// Logs the raw candidate and the smoothed display position of one tick.
    pub fn log_indicator(
        recording: &RecordingStream,
        frame: i64,
        raw: Option<Vec3>,
        transform: &DisplayTransform,
        state: &TrackingState,
    ) -> Result<(), rerun::RecordingStreamError> {
        recording.set_time("frame", TimeCell::from_sequence(frame));
        if let Some(raw) = raw {
            recording.log(
                "indicator/raw",
                &rerun::Points3D::new([raw.to_array()])
                    .with_colors([RAW_COLOR])
                    .with_radii([rerun::Radius::new_scene_units(0.005)]),
            )?;
        }
        if transform.position.is_nan() {
            return Ok(());
        }
        let color = match state.surface_id() {
            Some(id) => id_to_color(id),
            None => POINT_FIX_COLOR,
        };
        let color = (color.0, color.1, color.2, (transform.opacity * 255.0) as u8);
        recording.log(
            "indicator/display",
            &rerun::Points3D::new([transform.position.to_array()])
                .with_colors([color])
                .with_labels([state.kind()])
                .with_radii([rerun::Radius::new_scene_units(0.02)]),
        )?;
        Ok(())
    }
}
