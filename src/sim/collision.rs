//! Overlap and world-boundary tests
//!
//! Every entity is an axis-aligned box centred on its position. Overlap is
//! strict: boxes that only touch along an edge do not intersect.

use super::entity::SpaceObject;

/// Check whether the boxes of two objects overlap on both axes
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: SpaceObject + ?Sized,
    B: SpaceObject + ?Sized,
{
    let (pa, ha) = (a.pos(), a.size() / 2.0);
    let (pb, hb) = (b.pos(), b.size() / 2.0);

    pa.x - ha.x < pb.x + hb.x
        && pa.x + ha.x > pb.x - hb.x
        && pa.y - ha.y < pb.y + hb.y
        && pa.y + ha.y > pb.y - hb.y
}

/// Which world edges an object has fully left
///
/// Flags are independent; an object past a corner reports two of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutOfBounds {
    pub right: bool,
    pub left: bool,
    pub bottom: bool,
    pub top: bool,
}

impl OutOfBounds {
    /// True if any edge has been crossed
    pub fn any(&self) -> bool {
        self.right || self.left || self.bottom || self.top
    }
}

/// Test an object against the world rectangle `[0, width] x [0, height]`
pub fn out_of_bounds<T>(obj: &T, world_width: f32, world_height: f32) -> OutOfBounds
where
    T: SpaceObject + ?Sized,
{
    let pos = obj.pos();
    let size = obj.size();
    OutOfBounds {
        right: pos.x > world_width + size.x,
        left: pos.x < -size.x,
        bottom: pos.y > world_height + size.y,
        top: pos.y < -size.y,
    }
}
