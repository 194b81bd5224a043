//! Procedural obstacle placement
//!
//! A rejection sampler. Each candidate gets a random whole-degree angle and a
//! random ring. It is kept only if it stays out of the ring-1 start zone and
//! keeps `spacing` degrees, on at least one side, from the obstacles already
//! on the *other* ring. Same-ring obstacles are never compared, so they may
//! overlap.
//!
//! Ring balance is not steered per candidate. Once a full set exists, the
//! whole set is thrown away and regenerated unless the ring-1 share lies
//! strictly inside `(min_ratio, max_ratio)`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Obstacle, Ring};
use crate::error::GenerationError;
use crate::settings::GeneratorConfig;

/// Where candidate angles and rings come from
pub trait PlacementSource {
    /// Candidate angle in whole degrees, `0..=359`
    fn next_angle(&mut self) -> u32;
    fn next_ring(&mut self) -> Ring;
}

/// Uniform random placement
#[derive(Debug, Clone)]
pub struct RandomPlacement<R> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacement<Pcg32> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> PlacementSource for RandomPlacement<R> {
    fn next_angle(&mut self) -> u32 {
        self.rng.random_range(0..360)
    }

    fn next_ring(&mut self) -> Ring {
        if self.rng.random_bool(0.5) {
            Ring::Inner
        } else {
            Ring::Outer
        }
    }
}

/// Generate a balanced obstacle set, in acceptance order
///
/// Retries forever unless `config.attempt_cap` is set, in which case the
/// total number of candidate draws is bounded.
pub fn generate_obstacles<S: PlacementSource>(
    config: &GeneratorConfig,
    source: &mut S,
) -> Result<Vec<Obstacle>, GenerationError> {
    let mut draws = 0u64;
    let mut sets = 0u64;

    loop {
        sets += 1;
        let placed = place_set(config, source, &mut draws, sets)?;

        let ratio = ring_share(placed.iter().map(|&(_, ring)| ring), Ring::Outer);
        if config.min_ratio < ratio && ratio < config.max_ratio {
            log::info!(
                "Generated {} obstacles after {} set(s), {} draws (ring 1 share {:.2})",
                placed.len(),
                sets,
                draws,
                ratio
            );
            return Ok(placed
                .into_iter()
                .map(|(angle, ring)| Obstacle::new(angle as f32, ring, config.speed))
                .collect());
        }

        log::debug!("Rejected obstacle set {}: ring 1 share {:.2}", sets, ratio);
    }
}

/// Fill one candidate set of `config.count` (angle, ring) placements
fn place_set<S: PlacementSource>(
    config: &GeneratorConfig,
    source: &mut S,
    draws: &mut u64,
    sets: u64,
) -> Result<Vec<(u32, Ring)>, GenerationError> {
    let start_zone_limit = config.start_zone_limit();
    let mut placed: Vec<(u32, Ring)> = Vec::with_capacity(config.count);
    let mut other_ring_angles: Vec<u32> = Vec::with_capacity(config.count);

    while placed.len() < config.count {
        if let Some(cap) = config.attempt_cap
            && *draws >= cap
        {
            return Err(GenerationError::Exhausted {
                draws: *draws,
                sets,
            });
        }
        *draws += 1;

        let angle = source.next_angle();
        let ring = source.next_ring();

        if ring == Ring::Outer && angle > start_zone_limit {
            log::trace!("Candidate {} on ring 1 too close to start", angle);
            continue;
        }

        other_ring_angles.clear();
        other_ring_angles.extend(
            placed
                .iter()
                .filter(|&&(_, r)| r != ring)
                .map(|&(a, _)| a),
        );

        if !clears_other_ring(angle, &other_ring_angles, config.spacing) {
            log::trace!(
                "Candidate {} on ring {} crowds the other ring",
                angle,
                ring.number()
            );
            continue;
        }

        placed.push((angle, ring));
    }

    Ok(placed)
}

/// Cross-ring spacing rule for a candidate angle
///
/// With no other-ring obstacles the candidate is free. Otherwise the nearest
/// other-ring angle strictly above and strictly below are found; a side with
/// no neighbour counts as blocked, and the candidate passes if either side
/// leaves a gap of at least `spacing`. Angles are compared linearly, without
/// wrapping at 360.
pub fn clears_other_ring(candidate: u32, other_ring: &[u32], spacing: u32) -> bool {
    if other_ring.is_empty() {
        return true;
    }

    let above = other_ring
        .iter()
        .filter(|&&a| a > candidate)
        .min()
        .map(|&a| a - candidate);
    let below = other_ring
        .iter()
        .filter(|&&a| a < candidate)
        .max()
        .map(|&a| candidate - a);

    above.is_some_and(|gap| gap >= spacing) || below.is_some_and(|gap| gap >= spacing)
}

/// Fraction of `rings` equal to `ring` (0 for an empty set)
pub fn ring_share(rings: impl Iterator<Item = Ring>, ring: Ring) -> f32 {
    let (matching, total) = rings.fold((0u32, 0u32), |(m, t), r| {
        (m + u32::from(r == ring), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        matching as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of (angle, ring) candidates
    struct ScriptedPlacement {
        candidates: VecDeque<(u32, Ring)>,
        pending_ring: Option<Ring>,
    }

    impl ScriptedPlacement {
        fn new(candidates: &[(u32, Ring)]) -> Self {
            Self {
                candidates: candidates.iter().copied().collect(),
                pending_ring: None,
            }
        }

        fn remaining(&self) -> usize {
            self.candidates.len()
        }
    }

    impl PlacementSource for ScriptedPlacement {
        fn next_angle(&mut self) -> u32 {
            let (angle, ring) = self
                .candidates
                .pop_front()
                .expect("script ran out of candidates");
            self.pending_ring = Some(ring);
            angle
        }

        fn next_ring(&mut self) -> Ring {
            self.pending_ring.take().expect("angle drawn before ring")
        }
    }

    fn config_with_count(count: usize) -> GeneratorConfig {
        GeneratorConfig {
            count,
            ..Default::default()
        }
    }

    fn angles(obstacles: &[Obstacle]) -> Vec<(u32, Ring)> {
        obstacles.iter().map(|o| (o.angle as u32, o.ring)).collect()
    }

    use Ring::{Inner, Outer};

    #[test]
    fn test_unbalanced_set_regenerated_from_scratch() {
        // First set: 8 of 9 on ring 1 (share 0.89) must be discarded whole
        let mut script = vec![(200, Inner)];
        script.extend((0..8).map(|i| (i * 10, Outer)));
        // Second set: 5 of 9 on ring 1
        let second: Vec<(u32, Ring)> = vec![
            (0, Outer),
            (10, Outer),
            (20, Outer),
            (30, Outer),
            (40, Outer),
            (100, Inner),
            (110, Inner),
            (120, Inner),
            (130, Inner),
        ];
        script.extend(second.iter().copied());

        let mut source = ScriptedPlacement::new(&script);
        let obstacles = generate_obstacles(&GeneratorConfig::default(), &mut source).unwrap();

        assert_eq!(angles(&obstacles), second);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_start_zone_only_blocks_ring_one() {
        let script = [(300, Outer), (281, Outer), (280, Outer), (350, Inner)];
        let mut source = ScriptedPlacement::new(&script);
        let obstacles = generate_obstacles(&config_with_count(2), &mut source).unwrap();
        assert_eq!(angles(&obstacles), vec![(280, Outer), (350, Inner)]);
    }

    #[test]
    fn test_cross_ring_spacing_rejects_crowded_candidates() {
        let script = [
            (100, Outer),
            (120, Inner), // 20 below, nothing above
            (80, Inner),  // 20 above, nothing below
            (150, Inner), // 50 below
        ];
        let mut source = ScriptedPlacement::new(&script);
        let obstacles = generate_obstacles(&config_with_count(2), &mut source).unwrap();
        assert_eq!(angles(&obstacles), vec![(100, Outer), (150, Inner)]);
    }

    #[test]
    fn test_same_ring_overlap_is_allowed() {
        let script = [(100, Outer), (100, Outer), (200, Inner)];
        let mut source = ScriptedPlacement::new(&script);
        let obstacles = generate_obstacles(&config_with_count(3), &mut source).unwrap();
        assert_eq!(
            angles(&obstacles),
            vec![(100, Outer), (100, Outer), (200, Inner)]
        );
    }

    #[test]
    fn test_output_keeps_acceptance_order() {
        // Rings stay interleaved as drawn, not grouped ring 2 first
        let script = [(50, Outer), (150, Inner), (10, Outer)];
        let mut source = ScriptedPlacement::new(&script);
        let obstacles = generate_obstacles(&config_with_count(3), &mut source).unwrap();
        assert_eq!(angles(&obstacles), script.to_vec());
    }

    #[test]
    fn test_clears_other_ring() {
        assert!(clears_other_ring(10, &[], 35));
        // One side wide enough
        assert!(clears_other_ring(100, &[90, 200], 35));
        assert!(clears_other_ring(100, &[50, 110], 35));
        // Both sides too tight
        assert!(!clears_other_ring(100, &[80, 120], 35));
        // Missing side counts as blocked
        assert!(!clears_other_ring(100, &[110], 35));
        assert!(!clears_other_ring(100, &[90], 35));
        // Exact gap is enough
        assert!(clears_other_ring(100, &[135], 35));
        // Equal angle is neither above nor below
        assert!(!clears_other_ring(100, &[100], 35));
        // Both sides are searched whatever order the other ring is listed in
        assert!(clears_other_ring(100, &[110, 20], 35));
        assert!(clears_other_ring(100, &[20, 110], 35));
    }

    #[test]
    fn test_attempt_cap_reports_exhaustion() {
        // Cross-ring spacing wider than the circle: once one ring has an
        // obstacle the other ring can never fill, so every set is unbalanced.
        let config = GeneratorConfig {
            spacing: 400,
            attempt_cap: Some(1000),
            ..Default::default()
        };
        let mut source = RandomPlacement::from_seed(3);
        let err = generate_obstacles(&config, &mut source).unwrap_err();
        assert!(matches!(err, GenerationError::Exhausted { draws: 1000, .. }));
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let config = GeneratorConfig::default();
        let a = generate_obstacles(&config, &mut RandomPlacement::from_seed(42)).unwrap();
        let b = generate_obstacles(&config, &mut RandomPlacement::from_seed(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ring_share() {
        assert_eq!(ring_share([Outer, Inner, Outer, Inner].into_iter(), Outer), 0.5);
        assert_eq!(ring_share(std::iter::empty(), Outer), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_generated_sets_hold_invariants(seed in any::<u64>()) {
            let config = GeneratorConfig::default();
            let obstacles = generate_obstacles(&config, &mut RandomPlacement::from_seed(seed)).unwrap();

            prop_assert_eq!(obstacles.len(), 9);

            let share = ring_share(obstacles.iter().map(|o| o.ring), Outer);
            prop_assert!(0.3 < share && share < 0.7);

            for (i, ob) in obstacles.iter().enumerate() {
                prop_assert_eq!(ob.speed, 1.0);
                prop_assert!(ob.angle >= 0.0 && ob.angle < 360.0);
                if ob.ring == Outer {
                    prop_assert!(ob.angle <= 280.0);
                }

                // Spacing held against everything placed before it
                let earlier: Vec<u32> = obstacles[..i]
                    .iter()
                    .filter(|o| o.ring != ob.ring)
                    .map(|o| o.angle as u32)
                    .collect();
                prop_assert!(clears_other_ring(ob.angle as u32, &earlier, 35));
            }
        }
    }
}
