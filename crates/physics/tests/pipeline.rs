use sphere_physics::profile::populate;
use sphere_physics::{
    detect_broad_phase, detect_narrow_phase, gjk_intersect, gjk_query, reflect_at_boundary, resolve_collisions,
    Body, BroadPhaseMethod, CandidatePair, GjkOutcome, PhysicsError, Vec3,
};

fn sphere(id: u32, center: Vec3, radius: f32, velocity: Vec3) -> Body {
    Body::new(id, center, radius, velocity, 1.0)
}

fn confirmed(bodies: &mut [Body], world_size: f32, method: BroadPhaseMethod) -> Vec<CandidatePair> {
    let mut pairs = Vec::new();
    detect_broad_phase(bodies, world_size, method, &mut pairs).unwrap();
    detect_narrow_phase(bodies, &mut pairs);
    pairs
}

fn run_step(bodies: &mut [Body], world_size: f32, method: BroadPhaseMethod) -> Vec<CandidatePair> {
    let pairs = confirmed(bodies, world_size, method);
    resolve_collisions(bodies, &pairs);
    pairs
}

#[test]
fn sweep_and_prune_agrees_with_brute_force() {
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let count = 20 + rng.usize(..180);
        let radius = 0.2 + rng.f32() * 2.0;
        let original = populate(count, radius, 1.0, 1.0, 15.0, &mut rng);

        let mut a = original.clone();
        let mut b = original.clone();
        let sap = confirmed(&mut a, 15.0, BroadPhaseMethod::SweepAndPrune);
        let brute = confirmed(&mut b, 15.0, BroadPhaseMethod::BruteForce);
        assert_eq!(sap, brute, "seed {seed}");
    }
}

#[test]
fn sweep_and_prune_never_misses_a_touching_pair() {
    let mut rng = fastrand::Rng::with_seed(77);
    let mut bodies = populate(300, 1.0, 1.0, 1.0, 12.0, &mut rng);
    let mut candidates = Vec::new();
    detect_broad_phase(&mut bodies, 12.0, BroadPhaseMethod::SweepAndPrune, &mut candidates).unwrap();
    for i in 0..bodies.len() {
        for j in i + 1..bodies.len() {
            if bodies[i].intersects(&bodies[j]) {
                assert!(candidates.contains(&CandidatePair::new(i, j)), "missed ({i}, {j})");
            }
        }
    }
}

#[test]
fn confirmed_pairs_really_overlap() {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut bodies = populate(400, 0.8, 1.0, 1.0, 10.0, &mut rng);
    for pair in confirmed(&mut bodies, 10.0, BroadPhaseMethod::SweepAndPrune) {
        let (i, j) = pair.indices();
        let gap = bodies[i].center.distance(bodies[j].center) - (bodies[i].radius + bodies[j].radius);
        assert!(gap <= 1e-4, "({i}, {j}) gap {gap}");
    }
}

#[test]
fn head_on_overlap_swaps_velocities_with_either_method() {
    for method in [BroadPhaseMethod::SweepAndPrune, BroadPhaseMethod::BruteForce] {
        let mut bodies = [
            sphere(0, Vec3::ZERO, 1.0, Vec3::new(1.0, 0.0, 0.0)),
            sphere(1, Vec3::new(1.5, 0.0, 0.0), 1.0, Vec3::new(-1.0, 0.0, 0.0)),
        ];
        let pairs = run_step(&mut bodies, 10.0, method);
        assert_eq!(pairs, vec![CandidatePair::new(0, 1)]);
        assert_eq!(bodies[0].velocity, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bodies[0].center, Vec3::ZERO);
    }
}

#[test]
fn separated_bodies_are_left_alone_with_either_method() {
    for method in [BroadPhaseMethod::SweepAndPrune, BroadPhaseMethod::BruteForce] {
        let mut bodies = [
            sphere(0, Vec3::ZERO, 1.0, Vec3::new(1.0, 0.0, 0.0)),
            sphere(1, Vec3::new(3.0, 0.0, 0.0), 1.0, Vec3::new(-1.0, 0.0, 0.0)),
        ];
        assert!(run_step(&mut bodies, 10.0, method).is_empty());
        assert_eq!(bodies[0].velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec3::new(-1.0, 0.0, 0.0));
    }
}

#[test]
fn tangent_spheres_collide() {
    let a = sphere(0, Vec3::new(-1.0, 4.0, 2.0), 1.0, Vec3::ZERO);
    let b = sphere(1, Vec3::new(1.0, 4.0, 2.0), 1.0, Vec3::ZERO);
    assert!(gjk_intersect(&a, &b));

    let mut bodies = [a, b];
    assert_eq!(
        confirmed(&mut bodies, 10.0, BroadPhaseMethod::SweepAndPrune),
        vec![CandidatePair::new(0, 1)]
    );
}

#[test]
fn gjk_terminates_on_separated_pairs() {
    let mut rng = fastrand::Rng::with_seed(13);
    for _ in 0..500 {
        let a = sphere(0, Vec3::new(rng.f32() * 10.0, rng.f32() * 10.0, rng.f32() * 10.0), 0.5, Vec3::ZERO);
        let b = sphere(1, Vec3::new(rng.f32() * 10.0, rng.f32() * 10.0, rng.f32() * 10.0), 0.5, Vec3::ZERO);
        let outcome = gjk_query(&a, &b);
        assert_ne!(outcome, GjkOutcome::IterationCap);
        if a.center.distance(b.center) > 1.0 + 1e-3 {
            assert!(!outcome.is_collision());
        }
        if a.center.distance(b.center) < 1.0 - 1e-3 {
            assert!(outcome.is_collision());
        }
    }
}

#[test]
fn response_conserves_momentum_across_many_pairs() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut bodies: Vec<Body> = populate(250, 1.2, 3.0, 1.0, 8.0, &mut rng)
        .into_iter()
        .map(|mut b| {
            b.mass = 0.5 + rng.f32() * 4.0;
            b
        })
        .collect();
    let mut pairs = Vec::new();
    detect_broad_phase(&mut bodies, 8.0, BroadPhaseMethod::SweepAndPrune, &mut pairs).unwrap();
    detect_narrow_phase(&bodies, &mut pairs);
    assert!(!pairs.is_empty());

    let momentum = |bodies: &[Body]| bodies.iter().fold(Vec3::ZERO, |acc, b| acc + b.momentum());
    let before = momentum(&bodies);
    resolve_collisions(&mut bodies, &pairs);
    let after = momentum(&bodies);
    assert!((before - after).length() < 1e-2 * before.length().max(1.0));
}

#[test]
fn reflection_is_idempotent() {
    let mut bodies = populate(100, 1.0, 2.0, 1.0, 30.0, &mut fastrand::Rng::with_seed(8));
    for (i, body) in bodies.iter_mut().enumerate() {
        body.center = body.center * if i % 2 == 0 { 1.2 } else { 0.5 };
    }
    reflect_at_boundary(&mut bodies, 20.0);
    let once = bodies.clone();
    reflect_at_boundary(&mut bodies, 20.0);
    assert_eq!(bodies, once);
    for body in &bodies {
        for v in body.center.to_array() {
            assert!(v.abs() <= 20.0 - body.radius + 1e-5);
        }
    }
}

#[test]
fn grid_method_fails_before_touching_bodies() {
    let original = vec![
        sphere(0, Vec3::new(25.0, 0.0, 0.0), 1.0, Vec3::new(1.0, 0.0, 0.0)),
        sphere(1, Vec3::new(24.5, 0.0, 0.0), 1.0, Vec3::new(-1.0, 0.0, 0.0)),
    ];
    let mut bodies = original.clone();
    let mut pairs = vec![CandidatePair::new(0, 1)];
    let err = detect_broad_phase(&mut bodies, 20.0, BroadPhaseMethod::Grid, &mut pairs).unwrap_err();
    assert!(matches!(err, PhysicsError::UnsupportedMethod(BroadPhaseMethod::Grid)));
    assert_eq!(bodies, original);
    assert!(pairs.is_empty());
}
