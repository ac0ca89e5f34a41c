//! 68-point facial landmarks following the standard indexing convention
//! (jawline 0-16, brows 17-26, nose 27-35, eyes 36-47, mouth 48-67).

/// Number of points in the standard landmark set.
pub const LANDMARK_COUNT: usize = 68;

/// Outer corner of the left eye.
pub const LEFT_EYE_OUTER: usize = 36;
/// Outer corner of the right eye.
pub const RIGHT_EYE_OUTER: usize = 45;
/// Left outer edge of the nose.
pub const NOSE_LEFT_EDGE: usize = 31;
/// Right outer edge of the nose.
pub const NOSE_RIGHT_EDGE: usize = 35;

/// An ordered 68-point landmark set in frame pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLandmarks {
    points: [(f64, f64); LANDMARK_COUNT],
}

impl FaceLandmarks {
    pub fn new(points: [(f64, f64); LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Builds a landmark set from a slice; fails unless exactly 68 points
    /// are given.
    pub fn from_slice(points: &[(f64, f64)]) -> Result<Self, &'static str> {
        let points: [(f64, f64); LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| "expected exactly 68 landmark points")?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64); LANDMARK_COUNT] {
        &self.points
    }

    pub fn point(&self, index: usize) -> (f64, f64) {
        self.points[index]
    }

    /// Horizontal distance between the two outer eye corners.
    pub fn eye_span(&self) -> f64 {
        (self.points[LEFT_EYE_OUTER].0 - self.points[RIGHT_EYE_OUTER].0).abs()
    }

    /// Horizontal distance between the two outer nose edges.
    pub fn nose_span(&self) -> f64 {
        (self.points[NOSE_LEFT_EDGE].0 - self.points[NOSE_RIGHT_EDGE].0).abs()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Landmarks with the given eye corners and nose edges; all other
    /// points sit at the origin.
    pub fn landmarks_with_spans(
        eye_left_x: f64,
        eye_right_x: f64,
        nose_left_x: f64,
        nose_right_x: f64,
    ) -> FaceLandmarks {
        let mut pts = [(0.0, 0.0); LANDMARK_COUNT];
        pts[LEFT_EYE_OUTER] = (eye_left_x, 100.0);
        pts[RIGHT_EYE_OUTER] = (eye_right_x, 100.0);
        pts[NOSE_LEFT_EDGE] = (nose_left_x, 140.0);
        pts[NOSE_RIGHT_EDGE] = (nose_right_x, 140.0);
        FaceLandmarks::new(pts)
    }
}
