/// An axis-aligned face bounding box in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0) as f64 * self.height.max(0) as f64
    }

    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = (self.x + self.width).min(other.x + other.width);
        let iy2 = (self.y + self.height).min(other.y + other.height);

        let inter = (ix2 - ix1).max(0) as f64 * (iy2 - iy1).max(0) as f64;
        if inter == 0.0 {
            return 0.0;
        }

        inter / (self.area() + other.area() - inter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area() {
        assert_relative_eq!(BoundingBox::new(10, 10, 20, 30).area(), 600.0);
    }

    #[test]
    fn test_area_degenerate_is_zero() {
        assert_relative_eq!(BoundingBox::new(0, 0, -5, 10).area(), 0.0);
    }

    #[test]
    fn test_iou_identical() {
        let b = BoundingBox::new(0, 0, 10, 10);
        assert_relative_eq!(b.iou(&b), 1.0);
    }

    #[test]
    fn test_iou_disjoint() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(100, 100, 10, 10);
        assert_relative_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_half_overlap() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(5, 0, 10, 10);
        // Intersection 50, union 150
        assert_relative_eq!(a.iou(&b), 50.0 / 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_iou_symmetric() {
        let a = BoundingBox::new(0, 0, 20, 20);
        let b = BoundingBox::new(10, 10, 20, 20);
        assert_relative_eq!(a.iou(&b), b.iou(&a));
    }
}
