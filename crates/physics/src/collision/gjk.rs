//! GJK overlap test specialised for pairs of spheres.
//!
//! The Minkowski difference `A - B` of two spheres is itself a sphere, so the
//! support function is analytic. The simplex is kept as a tagged state with
//! the newest vertex first; each state has its own reduction handler.

use crate::body::Body;
use crate::types::{Vec3, EPSILON};

/// Hard cap on support-point iterations. Hitting it counts as "no collision".
pub const MAX_ITERATIONS: usize = 20;

/// Relative slack for half-space tests. The origin lying on a simplex face
/// (within rounding) is treated as enclosed, matching the boundary-inclusive
/// overlap contract.
const FACE_TOLERANCE: f32 = 1e-5;

/// Why a GJK query stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GjkOutcome {
    /// The simplex encloses the origin: the spheres overlap or touch.
    Enclosed,
    /// A support point failed to pass the origin: the spheres are apart.
    Separated,
    /// A support point repeated an existing vertex; no further progress.
    Stalled,
    /// [`MAX_ITERATIONS`] was reached without a verdict.
    IterationCap,
}

impl GjkOutcome {
    #[must_use]
    pub const fn is_collision(self) -> bool {
        matches!(self, GjkOutcome::Enclosed)
    }
}

#[derive(Copy, Clone, Debug)]
enum Simplex {
    Point(Vec3),
    Line(Vec3, Vec3),
    Triangle(Vec3, Vec3, Vec3),
    Tetrahedron(Vec3, Vec3, Vec3, Vec3),
}

impl Simplex {
    /// Add `p` as the newest vertex.
    ///
    /// A tetrahedron is always reduced or accepted before the next push, so
    /// the fourth arm only keeps the match total.
    fn push(self, p: Vec3) -> Self {
        match self {
            Simplex::Point(a) => Simplex::Line(p, a),
            Simplex::Line(a, b) => Simplex::Triangle(p, a, b),
            Simplex::Triangle(a, b, c) | Simplex::Tetrahedron(a, b, c, _) => Simplex::Tetrahedron(p, a, b, c),
        }
    }

    fn has_vertex_near(&self, p: Vec3) -> bool {
        let near = |v: &Vec3| (*v - p).length() < EPSILON;
        match self {
            Simplex::Point(a) => near(a),
            Simplex::Line(a, b) => near(a) || near(b),
            Simplex::Triangle(a, b, c) => near(a) || near(b) || near(c),
            Simplex::Tetrahedron(a, b, c, d) => near(a) || near(b) || near(c) || near(d),
        }
    }
}

enum Evolution {
    Enclosed,
    Continue { simplex: Simplex, direction: Vec3 },
}

/// Support point of `A - B` in direction `d`.
///
/// A degenerate direction yields the center difference without normalizing.
fn support(a: &Body, b: &Body, d: Vec3) -> Vec3 {
    if d.is_degenerate() {
        return a.center - b.center;
    }
    let dir = d / d.length();
    (a.center + dir * a.radius) - (b.center - dir * b.radius)
}

fn triple_cross(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a.cross(b).cross(c)
}

/// True when the origin (seen from a vertex as `ao`) lies strictly on the
/// positive side of the plane with `normal`, beyond rounding slack.
fn outside(normal: Vec3, ao: Vec3) -> bool {
    normal.dot(ao) > FACE_TOLERANCE * normal.length() * ao.length()
}

fn evolve(simplex: Simplex) -> Evolution {
    match simplex {
        Simplex::Point(a) => Evolution::Continue { simplex, direction: -a },
        Simplex::Line(a, b) => line(a, b),
        Simplex::Triangle(a, b, c) => triangle(a, b, c),
        Simplex::Tetrahedron(a, b, c, d) => tetrahedron(a, b, c, d),
    }
}

fn line(a: Vec3, b: Vec3) -> Evolution {
    let ab = b - a;
    let ao = -a;
    let mut direction = triple_cross(ab, ao, ab);
    if direction.is_degenerate() {
        // Origin on the line through the segment.
        direction = ab.any_perpendicular();
    }
    Evolution::Continue { simplex: Simplex::Line(a, b), direction }
}

fn triangle(a: Vec3, b: Vec3, c: Vec3) -> Evolution {
    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if abc.is_degenerate() {
        return line(a, b);
    }
    if outside(ab.cross(abc), ao) {
        return line(a, b);
    }
    if outside(abc.cross(ac), ao) {
        return line(a, c);
    }

    if abc.dot(ao) > 0.0 {
        Evolution::Continue { simplex: Simplex::Triangle(a, b, c), direction: abc }
    } else {
        // Swap winding so the stored normal keeps facing the origin.
        Evolution::Continue { simplex: Simplex::Triangle(a, c, b), direction: -abc }
    }
}

fn tetrahedron(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Evolution {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    if outside(ab.cross(ac), ao) {
        return triangle(a, b, c);
    }
    if outside(ac.cross(ad), ao) {
        return triangle(a, c, d);
    }
    if outside(ad.cross(ab), ao) {
        return triangle(a, d, b);
    }
    Evolution::Enclosed
}

/// Run GJK on two spheres and report how it terminated.
#[must_use]
pub fn gjk_query(a: &Body, b: &Body) -> GjkOutcome {
    let mut direction = a.center - b.center;
    if direction.is_degenerate() {
        direction = Vec3::X;
    }

    let seed = support(a, b, direction);
    let mut simplex = Simplex::Point(seed);
    direction = -seed;

    for _ in 0..MAX_ITERATIONS {
        let p = support(a, b, direction);
        if p.dot(direction) < 0.0 {
            return GjkOutcome::Separated;
        }
        if simplex.has_vertex_near(p) {
            tracing::trace!(a = a.id, b = b.id, "gjk stalled on a repeated support point");
            return GjkOutcome::Stalled;
        }
        match evolve(simplex.push(p)) {
            Evolution::Enclosed => return GjkOutcome::Enclosed,
            Evolution::Continue { simplex: next, direction: next_direction } => {
                simplex = next;
                direction = next_direction;
            }
        }
    }

    tracing::warn!(a = a.id, b = b.id, "gjk hit the iteration cap; treating as no collision");
    GjkOutcome::IterationCap
}

/// True if the two spheres overlap or touch.
#[must_use]
pub fn gjk_intersect(a: &Body, b: &Body) -> bool {
    gjk_query(a, b).is_collision()
}
