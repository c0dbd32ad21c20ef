//! Velocity exchange between confirmed colliding pairs.
//!
//! The 1-D elastic collision formulas are applied component-wise to the full
//! velocity vectors. This ignores the contact normal, so oblique impacts are
//! only approximated: momentum is conserved but tangential motion is mixed
//! between the bodies as if every collision were head-on.

use super::CandidatePair;
use crate::body::Body;

/// Exchange velocities between two colliding bodies.
///
/// ```text
/// v_a' = ((m_a - m_b) / (m_a + m_b)) v_a + (2 m_b / (m_a + m_b)) v_b
/// v_b' = (2 m_a / (m_a + m_b)) v_a + ((m_b - m_a) / (m_a + m_b)) v_b
/// ```
///
/// Positions are left alone. Both masses must be positive; this is not
/// checked here.
pub fn resolve_pair(a: &mut Body, b: &mut Body) {
    let total = a.mass + b.mass;
    let va = a.velocity;
    let vb = b.velocity;

    a.velocity = va * ((a.mass - b.mass) / total) + vb * (2.0 * b.mass / total);
    b.velocity = va * (2.0 * a.mass / total) + vb * ((b.mass - a.mass) / total);
}

/// Apply [`resolve_pair`] to every confirmed pair, in order.
///
/// # Panics
///
/// Panics if a pair indexes past the end of `bodies`.
pub fn resolve_collisions(bodies: &mut [Body], pairs: &[CandidatePair]) {
    for pair in pairs {
        let (i, j) = pair.indices();
        let (head, tail) = bodies.split_at_mut(j);
        resolve_pair(&mut head[i], &mut tail[0]);
    }
}
