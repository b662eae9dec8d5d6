use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One occupied unit cell on the axis-aligned integer lattice.
///
/// Persisted as a 3-element JSON array in `[x, y, z]` order, matching the
/// on-disk layout (`[[0,1,0],[1,1,0]]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent cell one step out from the given face.
    pub fn neighbor(self, face: Face) -> Self {
        let (dx, dy, dz) = face.offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// World-space center of this cell (unit cubes centered on lattice points).
    pub fn center(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<[i32; 3]> for BlockCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<BlockCoord> for [i32; 3] {
    fn from(coord: BlockCoord) -> Self {
        [coord.x, coord.y, coord.z]
    }
}

/// One of the six faces of a unit cube.
///
/// The index order is fixed: 0/1 are +X/-X, 2/3 are +Y/-Y, 4/5 are +Z/-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Face::PosX),
            1 => Some(Face::NegX),
            2 => Some(Face::PosY),
            3 => Some(Face::NegY),
            4 => Some(Face::PosZ),
            5 => Some(Face::NegZ),
            _ => None,
        }
    }

    /// Face hit by a triangle of a triangulated cube mesh: two triangles per
    /// face, so consecutive triangle indices pair up onto one face.
    pub fn from_triangle(triangle: usize) -> Option<Self> {
        u8::try_from(triangle / 2).ok().and_then(Self::from_index)
    }

    /// Classify a surface normal by its dominant axis.
    ///
    /// Picking hits on axis-aligned cubes report a world-space normal; for
    /// those this is exact. Returns `None` for a zero or non-finite normal.
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        if !normal.is_finite() || normal == Vec3::ZERO {
            return None;
        }
        let abs = normal.abs();
        if abs.x >= abs.y && abs.x >= abs.z {
            Some(if normal.x >= 0.0 { Face::PosX } else { Face::NegX })
        } else if abs.y >= abs.z {
            Some(if normal.y >= 0.0 { Face::PosY } else { Face::NegY })
        } else {
            Some(if normal.z >= 0.0 { Face::PosZ } else { Face::NegZ })
        }
    }

    /// Unit offset toward the neighbor cell on the other side of this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_offsets_are_total_and_fixed() {
        let expected = [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];
        for index in 0..6u8 {
            let face = Face::from_index(index).unwrap();
            assert_eq!(face.index(), index);
            assert_eq!(face.offset(), expected[index as usize]);
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn neighbors_from_origin_cover_all_six_directions() {
        let origin = BlockCoord::new(0, 0, 0);
        let neighbors: Vec<BlockCoord> =
            Face::ALL.iter().map(|f| origin.neighbor(*f)).collect();
        assert_eq!(
            neighbors,
            vec![
                BlockCoord::new(1, 0, 0),
                BlockCoord::new(-1, 0, 0),
                BlockCoord::new(0, 1, 0),
                BlockCoord::new(0, -1, 0),
                BlockCoord::new(0, 0, 1),
                BlockCoord::new(0, 0, -1),
            ]
        );
    }

    #[test]
    fn triangle_pairs_share_a_face() {
        assert_eq!(Face::from_triangle(0), Some(Face::PosX));
        assert_eq!(Face::from_triangle(1), Some(Face::PosX));
        assert_eq!(Face::from_triangle(4), Some(Face::PosY));
        assert_eq!(Face::from_triangle(5), Some(Face::PosY));
        assert_eq!(Face::from_triangle(11), Some(Face::NegZ));
        assert_eq!(Face::from_triangle(12), None);
    }

    #[test]
    fn normal_classification_picks_the_dominant_axis() {
        assert_eq!(Face::from_normal(Vec3::X), Some(Face::PosX));
        assert_eq!(Face::from_normal(Vec3::NEG_Y), Some(Face::NegY));
        assert_eq!(Face::from_normal(Vec3::new(0.1, 0.05, 0.95)), Some(Face::PosZ));
        assert_eq!(Face::from_normal(Vec3::new(-0.9, 0.1, 0.1)), Some(Face::NegX));
        assert_eq!(Face::from_normal(Vec3::ZERO), None);
        assert_eq!(Face::from_normal(Vec3::splat(f32::NAN)), None);
    }

    #[test]
    fn coord_serializes_as_a_flat_triple() {
        let coord = BlockCoord::new(2, 3, 4);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[2,3,4]");
        let back: BlockCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);
    }
}
