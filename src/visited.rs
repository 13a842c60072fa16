use std::collections::HashSet;

use crate::types::SurfaceAnchorId;

/// Surfaces the indicator has settled on. Grows for the life of the indicator.
#[derive(Debug, Clone, Default)]
pub struct VisitedSurfaceTracker {
    surfaces: HashSet<SurfaceAnchorId>,
}

impl VisitedSurfaceTracker {
    pub fn new() -> VisitedSurfaceTracker {
        VisitedSurfaceTracker::default()
    }

    /// Returns true if the surface was not visited before.
    pub fn mark_visited(&mut self, surface: SurfaceAnchorId) -> bool {
        let first = self.surfaces.insert(surface);
        if first {
            log::debug!("first visit of surface {:?}", surface);
        }
        first
    }

    pub fn has_visited(&self, surface: SurfaceAnchorId) -> bool {
        self.surfaces.contains(&surface)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Visited ids in ascending order.
    pub fn sorted_ids(&self) -> Vec<SurfaceAnchorId> {
        let mut ids: Vec<_> = self.surfaces.iter().copied().collect();
        ids.sort();
        ids
    }
}
