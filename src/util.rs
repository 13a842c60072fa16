use glam::Vec3;

/// `a + (b - a) * t` per component.
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Componentwise arithmetic mean, `None` for an empty slice.
pub fn average(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f32)
}

/// Drops the oldest elements so that at most `n` remain.
pub fn keep_last<T>(values: &mut Vec<T>, n: usize) {
    if values.len() > n {
        let excess = values.len() - n;
        values.drain(..excess);
    }
}
