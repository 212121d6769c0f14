//! Shoebox room and point types

use serde::{Deserialize, Serialize};

/// Point in room coordinates (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Shoebox room dimensions (width, depth, height) in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDims {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl RoomDims {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.width, self.depth, self.height]
    }

    /// Room volume (m^3)
    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    /// Total wall, floor and ceiling area (m^2)
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width * self.depth + self.width * self.height + self.depth * self.height)
    }

    /// Smallest of the three dimensions
    pub fn min_dim(&self) -> f64 {
        self.width.min(self.depth).min(self.height)
    }

    /// True if `p` is at least `margin` away from all six faces
    pub fn contains_with_margin(&self, p: &Point3, margin: f64) -> bool {
        self.as_array()
            .iter()
            .zip(p.as_array())
            .all(|(&dim, c)| c >= margin && c <= dim - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_eq!(a.distance(&b), 3.0);
        assert_eq!(b.distance(&a), 3.0);
    }

    #[test]
    fn test_room_volume_and_surface() {
        let room = RoomDims::new(2.0, 3.0, 4.0);
        assert_eq!(room.volume(), 24.0);
        assert_eq!(room.surface_area(), 52.0);
        assert_eq!(room.min_dim(), 2.0);
    }

    #[test]
    fn test_contains_with_margin() {
        let room = RoomDims::new(4.0, 4.0, 3.0);
        assert!(room.contains_with_margin(&Point3::new(1.0, 2.0, 2.0), 1.0));
        assert!(!room.contains_with_margin(&Point3::new(0.5, 2.0, 1.5), 1.0));
        assert!(!room.contains_with_margin(&Point3::new(2.0, 2.0, 2.5), 1.0));
    }
}
