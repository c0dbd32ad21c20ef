//! Reflection of bodies against the cubic world boundary.

use crate::body::Body;
use crate::types::Axis;

/// Keep every body inside the cube `[-world_size, world_size]³`.
///
/// Each axis is handled on its own, so a body pushed into a corner reflects on
/// several axes in the same call. A body whose extent crosses a wall has that
/// velocity component negated and is clamped so it touches the wall from the
/// inside. Clamping compares `center` against `world_size - radius` directly,
/// which keeps a second application a no-op even under float rounding.
pub fn reflect_at_boundary(bodies: &mut [Body], world_size: f32) {
    for body in bodies.iter_mut() {
        for axis in Axis::ALL {
            reflect_axis(body, axis, world_size);
        }
    }
}

fn reflect_axis(body: &mut Body, axis: Axis, world_size: f32) {
    let upper = world_size - body.radius;
    let lower = -world_size + body.radius;
    let center = body.center.axis(axis);

    let clamped = if center > upper {
        upper
    } else if center < lower {
        lower
    } else {
        return;
    };

    *body.center.axis_mut(axis) = clamped;
    let v = body.velocity.axis_mut(axis);
    *v = -*v;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn inside_body_is_untouched() {
        let original = Body::new(0, Vec3::new(1.0, -2.0, 3.0), 1.0, Vec3::new(1.0, 1.0, 1.0), 1.0);
        let mut bodies = [original];
        reflect_at_boundary(&mut bodies, 10.0);
        assert_eq!(bodies[0], original);
    }

    #[test]
    fn upper_wall_reflects_and_clamps() {
        let mut bodies = [Body::new(0, Vec3::new(10.0, 0.0, 0.0), 1.0, Vec3::new(2.0, 0.5, 0.0), 1.0)];
        reflect_at_boundary(&mut bodies, 10.0);
        assert_eq!(bodies[0].center.x, 9.0);
        assert_eq!(bodies[0].velocity, Vec3::new(-2.0, 0.5, 0.0));
    }

    #[test]
    fn lower_wall_reflects_and_clamps() {
        let mut bodies = [Body::new(0, Vec3::new(0.0, -9.5, 0.0), 1.0, Vec3::new(0.0, -3.0, 0.0), 1.0)];
        reflect_at_boundary(&mut bodies, 10.0);
        assert_eq!(bodies[0].center.y, -9.0);
        assert_eq!(bodies[0].velocity.y, 3.0);
    }

    #[test]
    fn corner_reflects_on_every_axis() {
        let mut bodies = [Body::new(
            0,
            Vec3::new(12.0, -12.0, 12.0),
            0.5,
            Vec3::new(1.0, -1.0, 1.0),
            1.0,
        )];
        reflect_at_boundary(&mut bodies, 10.0);
        assert_eq!(bodies[0].center, Vec3::new(9.5, -9.5, 9.5));
        assert_eq!(bodies[0].velocity, Vec3::new(-1.0, 1.0, -1.0));
    }

    #[test]
    fn second_application_is_a_no_op() {
        let mut bodies = [Body::new(0, Vec3::new(10.0, 0.0, -10.0), 0.3, Vec3::new(4.0, 0.0, -4.0), 1.0)];
        reflect_at_boundary(&mut bodies, 10.0);
        let corrected = bodies[0];
        assert!(corrected.velocity.x < 0.0 && corrected.velocity.z > 0.0);
        reflect_at_boundary(&mut bodies, 10.0);
        assert_eq!(bodies[0], corrected);
    }
}
