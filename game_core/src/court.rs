use glam::Vec2;

/// Axis-aligned bounding box, top-left anchored (y grows downward).
///
/// `min` is the top-left corner, `max` the bottom-right; the box covers the
/// half-open region `[min.x, max.x) x [min.y, max.y)`.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_top_left() {
        let b = Aabb::from_top_left(Vec2::new(50.0, 260.0), Vec2::new(10.0, 100.0));
        assert_eq!(b.min, Vec2::new(50.0, 260.0));
        assert_eq!(b.max, Vec2::new(60.0, 360.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 100.0);
    }
}
