use glam::{IVec3, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        AABB { min, max }
    }

    /// Box of an upright entity standing with its feet at `feet`.
    pub fn from_feet(feet: Vec3, half_width: f32, height: f32) -> Self {
        AABB::new(
            Vec3::new(feet.x - half_width, feet.y, feet.z - half_width),
            Vec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
        )
    }

    pub fn unit_cell(cell: IVec3) -> Self {
        let min = cell.as_vec3();
        AABB::new(min, min + Vec3::ONE)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        AABB::new(self.min + offset, self.max + offset)
    }

    /// Overlap test with open bounds: boxes that only share a face do not
    /// intersect.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
            && self.max.z > other.min.z
            && self.min.z < other.max.z
    }

    /// Ray parameter at which a ray enters the box (slab method). Negative
    /// when the origin is already inside. `None` if the ray misses.
    pub fn ray_entry(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }

        if t_exit >= t_enter.max(0.0) {
            Some(t_enter)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = AABB::unit_cell(IVec3::new(0, 0, 0));
        let b = AABB::unit_cell(IVec3::new(1, 0, 0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translated(Vec3::new(-0.01, 0.0, 0.0))));
    }

    #[test]
    fn feet_box_spans_height() {
        let b = AABB::from_feet(Vec3::new(1.0, 2.0, 3.0), 0.3, 1.8);
        assert_eq!(b.min, Vec3::new(0.7, 2.0, 2.7));
        assert_eq!(b.max, Vec3::new(1.3, 3.8, 3.3));
    }

    #[test]
    fn ray_entry_finds_the_near_face() {
        let cell = AABB::unit_cell(IVec3::new(0, 0, 0));
        let t = cell
            .ray_entry(Vec3::new(0.5, 3.0, 0.5), Vec3::new(0.0, -1.0, 0.0))
            .unwrap();
        assert!((t - 2.0).abs() < 1e-6);

        assert!(cell.ray_entry(Vec3::new(0.5, 3.0, 0.5), Vec3::Y).is_none());
        assert!(cell.ray_entry(Vec3::new(0.5, 0.5, 0.5), Vec3::X).unwrap() < 0.0);
    }
}
