//! Axis-aligned bounding boxes.

/// Box in world units, `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap on both axes; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(50.0, 100.0, 40.0, 30.0);
        let b = Aabb::new(60.0, 110.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_horizontally() {
        let a = Aabb::new(50.0, 100.0, 40.0, 30.0);
        let b = Aabb::new(200.0, 100.0, 60.0, 30.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_shared_x_range_only() {
        // Same columns, but the top segment ends above the box.
        let a = Aabb::new(50.0, 100.0, 40.0, 30.0);
        let top = Aabb::new(50.0, 0.0, 60.0, 90.0);
        assert!(!a.overlaps(&top));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_flat_box_overlaps_only_inside_span() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let flat = Aabb::new(0.0, 5.0, 10.0, 0.0);
        assert!(a.overlaps(&flat));
        let outside = Aabb::new(0.0, 10.0, 10.0, 0.0);
        assert!(!a.overlaps(&outside));
    }
}
