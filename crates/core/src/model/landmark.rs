use thiserror::Error;

/// Number of tracked points in one hand skeleton.
pub const LANDMARK_COUNT: usize = 21;

/// Hand landmark indices, fixed by anatomical convention.
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_TIP: usize = 16;
    pub const LITTLE_TIP: usize = 20;
}

/// A single tracked 2-D point on a detected hand, in frame-pixel space.
///
/// Smaller `y` means higher in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Landmark {
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected {LANDMARK_COUNT} hand landmarks, got {got}")]
    WrongCount { got: usize },
}

/// Exactly 21 ordered hand landmarks for a single frame.
///
/// Owned by the frame that produced it; classification borrows it and the
/// set is discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSet {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    #[must_use]
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a set from raw `(x, y)` pixel pairs.
    ///
    /// # Errors
    ///
    /// Returns `LandmarkError::WrongCount` unless exactly 21 points are given.
    pub fn from_points(points: &[(i32, i32)]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount { got: points.len() });
        }
        let mut set = [Landmark::default(); LANDMARK_COUNT];
        for (slot, &(x, y)) in set.iter_mut().zip(points) {
            *slot = Landmark::new(x, y);
        }
        Ok(Self { points: set })
    }

    #[must_use]
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    #[must_use]
    pub fn thumb_tip(&self) -> Landmark {
        self.points[landmark_index::THUMB_TIP]
    }

    #[must_use]
    pub fn index_tip(&self) -> Landmark {
        self.points[landmark_index::INDEX_TIP]
    }

    #[must_use]
    pub fn middle_tip(&self) -> Landmark {
        self.points[landmark_index::MIDDLE_TIP]
    }

    #[must_use]
    pub fn ring_tip(&self) -> Landmark {
        self.points[landmark_index::RING_TIP]
    }

    #[must_use]
    pub fn little_tip(&self) -> Landmark {
        self.points[landmark_index::LITTLE_TIP]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_requires_exactly_21() {
        let too_few = vec![(0, 0); 20];
        assert_eq!(
            LandmarkSet::from_points(&too_few).unwrap_err(),
            LandmarkError::WrongCount { got: 20 }
        );

        let too_many = vec![(0, 0); 22];
        assert!(LandmarkSet::from_points(&too_many).is_err());

        let exact = vec![(1, 2); 21];
        assert!(LandmarkSet::from_points(&exact).is_ok());
    }

    #[test]
    fn fingertip_accessors_follow_convention() {
        let mut points = vec![(0, 0); 21];
        points[landmark_index::THUMB_TIP] = (10, 40);
        points[landmark_index::INDEX_TIP] = (20, 80);
        points[landmark_index::MIDDLE_TIP] = (30, 120);
        points[landmark_index::RING_TIP] = (40, 160);
        points[landmark_index::LITTLE_TIP] = (50, 200);

        let set = LandmarkSet::from_points(&points).unwrap();
        assert_eq!(set.thumb_tip(), Landmark::new(10, 40));
        assert_eq!(set.index_tip(), Landmark::new(20, 80));
        assert_eq!(set.middle_tip(), Landmark::new(30, 120));
        assert_eq!(set.ring_tip(), Landmark::new(40, 160));
        assert_eq!(set.little_tip(), Landmark::new(50, 200));
    }
}
