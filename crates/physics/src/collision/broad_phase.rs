//! Broad-phase candidate generation: sweep-and-prune and brute force.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::CandidatePair;
use crate::body::Body;
use crate::types::Axis;

/// One end of a body's interval on a single axis.
#[derive(Copy, Clone, Debug)]
struct Endpoint {
    value: f32,
    is_beginning: bool,
    owner: usize,
}

/// Ascending by value; on a tie a beginning sorts before an ending so that
/// intervals touching at a single point still count as overlapping.
fn endpoint_order(a: &Endpoint, b: &Endpoint) -> Ordering {
    a.value
        .partial_cmp(&b.value)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.is_beginning.cmp(&a.is_beginning))
}

/// Candidate pairs whose axis-aligned bounds overlap on all three axes.
///
/// Each axis is swept independently; a pair survives only if every sweep
/// emitted it. `pairs` is cleared and refilled in ascending canonical order.
pub fn sweep_and_prune(bodies: &[Body], pairs: &mut Vec<CandidatePair>) {
    pairs.clear();
    if bodies.len() < 2 {
        return;
    }

    let mut endpoints = Vec::with_capacity(bodies.len() * 2);
    let [x, y, z] = Axis::ALL.map(|axis| sweep_axis(bodies, axis, &mut endpoints));

    pairs.extend(x.into_iter().filter(|pair| y.contains(pair) && z.contains(pair)));
    pairs.sort_unstable();
}

/// Sweep one axis, returning every pair whose intervals overlap on it.
fn sweep_axis(bodies: &[Body], axis: Axis, endpoints: &mut Vec<Endpoint>) -> HashSet<CandidatePair> {
    endpoints.clear();
    for (owner, body) in bodies.iter().enumerate() {
        let (min, max) = body.interval(axis);
        endpoints.push(Endpoint { value: min, is_beginning: true, owner });
        endpoints.push(Endpoint { value: max, is_beginning: false, owner });
    }
    endpoints.sort_by(endpoint_order);

    let mut overlapping = HashSet::new();
    let mut active: Vec<usize> = Vec::new();
    for endpoint in endpoints.iter() {
        if endpoint.is_beginning {
            overlapping.extend(active.iter().map(|&other| CandidatePair::new(endpoint.owner, other)));
            active.push(endpoint.owner);
        } else if let Some(slot) = active.iter().position(|&id| id == endpoint.owner) {
            active.swap_remove(slot);
        }
    }
    overlapping
}

/// Candidate pairs from an exact sphere test on every pair, `O(n²)`.
///
/// Serves as the reference for [`sweep_and_prune`]: it never reports a pair
/// that is not actually touching.
pub fn brute_force(bodies: &[Body], pairs: &mut Vec<CandidatePair>) {
    pairs.clear();
    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push(CandidatePair::new(i, j));
            }
        }
    }
}
