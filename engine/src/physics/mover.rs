//! Character Movers
//!
//! The locomotion computes a displacement per physics step; a [`CharacterMover`]
//! owns the avatar's actual position and resolves that displacement against
//! the world. Real collision lives with the host; [`FloorMover`] is a minimal
//! implementation for headless runs and tests: a flat floor inside a
//! rectangular room.

use glam::{Vec2, Vec3};

/// Collision-aware mover that owns the avatar position.
pub trait CharacterMover {
    /// Apply a world-space displacement for this step with collision resolution.
    ///
    /// Returns the displacement that was actually applied.
    fn move_by(&mut self, displacement: Vec3) -> Vec3;

    /// Current world-space position of the avatar's feet.
    fn position(&self) -> Vec3;
}

/// Axis-aligned room footprint on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl RoomBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Clamp an XZ point into the room.
    #[inline]
    pub fn clamp(&self, xz: Vec2) -> Vec2 {
        xz.clamp(self.min, self.max)
    }
}

/// Mover for a flat floor at `floor_y`, optionally walled in by `bounds`.
///
/// The avatar can never sink below the floor, and walls stop motion per axis
/// so sliding along a wall keeps the tangential component.
#[derive(Debug, Clone)]
pub struct FloorMover {
    position: Vec3,
    floor_y: f32,
    bounds: Option<RoomBounds>,
    grounded: bool,
}

impl FloorMover {
    /// Create a mover standing at `position`, snapped onto the floor if below it.
    pub fn new(position: Vec3, floor_y: f32) -> Self {
        Self {
            position: Vec3::new(position.x, position.y.max(floor_y), position.z),
            floor_y,
            bounds: None,
            grounded: position.y <= floor_y,
        }
    }

    /// Restrict movement to a rectangular room. The current position is clamped.
    pub fn with_bounds(mut self, bounds: RoomBounds) -> Self {
        let xz = bounds.clamp(Vec2::new(self.position.x, self.position.z));
        self.position.x = xz.x;
        self.position.z = xz.y;
        self.bounds = Some(bounds);
        self
    }

    /// Whether the last move ended on the floor.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    /// Teleport without collision.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = position.y <= self.floor_y;
    }
}

impl CharacterMover for FloorMover {
    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        let mut target = self.position + displacement;

        if target.y <= self.floor_y {
            target.y = self.floor_y;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        if let Some(bounds) = self.bounds {
            let xz = bounds.clamp(Vec2::new(target.x, target.z));
            target.x = xz.x;
            target.z = xz.y;
        }

        let applied = target - self.position;
        self.position = target;
        applied
    }

    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_horizontal_move() {
        let mut mover = FloorMover::new(Vec3::ZERO, 0.0);
        let applied = mover.move_by(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(applied, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(mover.position(), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_floor_stops_gravity() {
        let mut mover = FloorMover::new(Vec3::ZERO, 0.0);
        let applied = mover.move_by(Vec3::new(0.1, -0.2, 0.0));

        assert_eq!(applied, Vec3::new(0.1, 0.0, 0.0));
        assert_eq!(mover.position().y, 0.0);
        assert!(mover.is_grounded());
    }

    #[test]
    fn test_falls_until_floor() {
        let mut mover = FloorMover::new(Vec3::new(0.0, 0.5, 0.0), 0.0);
        assert!(!mover.is_grounded());

        mover.move_by(Vec3::new(0.0, -0.3, 0.0));
        assert!((mover.position().y - 0.2).abs() < 1e-6);
        assert!(!mover.is_grounded());

        mover.move_by(Vec3::new(0.0, -0.3, 0.0));
        assert_eq!(mover.position().y, 0.0);
        assert!(mover.is_grounded());
    }

    #[test]
    fn test_wall_slides() {
        let bounds = RoomBounds::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let mut mover = FloorMover::new(Vec3::new(0.9, 0.0, 0.0), 0.0).with_bounds(bounds);

        let applied = mover.move_by(Vec3::new(0.5, 0.0, 0.5));
        assert!((applied.x - 0.1).abs() < 1e-6);
        assert!((applied.z - 0.5).abs() < 1e-6);
        assert_eq!(mover.position().x, 1.0);
    }

    #[test]
    fn test_set_position_teleports() {
        let bounds = RoomBounds::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let mut mover = FloorMover::new(Vec3::ZERO, 0.0).with_bounds(bounds);
        assert!(mover.is_grounded());

        // No floor or wall resolution on a teleport
        mover.set_position(Vec3::new(5.0, 2.0, 0.0));
        assert_eq!(mover.position(), Vec3::new(5.0, 2.0, 0.0));
        assert!(!mover.is_grounded());

        // The next move is resolved again
        mover.move_by(Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(mover.position(), Vec3::new(1.0, 0.0, 0.0));
        assert!(mover.is_grounded());
    }

    #[test]
    fn test_bounds_normalize_corners() {
        let bounds = RoomBounds::new(Vec2::new(3.0, 3.0), Vec2::new(-3.0, -1.0));
        assert_eq!(bounds.min, Vec2::new(-3.0, -1.0));
        assert_eq!(bounds.max, Vec2::new(3.0, 3.0));
    }
}
