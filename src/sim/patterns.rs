//! Hand-authored obstacle layouts
//!
//! Known-fair layouts, including faster two-degree-per-tick variants the
//! generator never produces. Selected with `GameConfig::pattern`.

use super::state::{Obstacle, Ring};

/// (angle in degrees, ring number, speed in degrees/tick)
type PatternEntry = (f32, u8, f32);

pub const PATTERNS: &[&[PatternEntry]] = &[
    &[
        (123.0, 2, 2.0),
        (58.0, 2, 2.0),
        (248.0, 2, 2.0),
        (306.0, 2, 2.0),
        (172.0, 1, 2.0),
        (77.0, 1, 2.0),
    ],
    &[
        (279.0, 2, 2.0),
        (258.0, 2, 2.0),
        (332.0, 2, 2.0),
        (122.0, 2, 2.0),
        (203.0, 1, 2.0),
        (155.0, 1, 2.0),
    ],
    &[
        (172.0, 2, 1.0),
        (290.0, 2, 1.0),
        (259.0, 2, 1.0),
        (84.0, 2, 1.0),
        (33.0, 2, 1.0),
        (121.0, 1, 1.0),
        (245.0, 1, 1.0),
        (100.0, 1, 1.0),
    ],
    &[
        (171.0, 2, 1.0),
        (118.0, 2, 1.0),
        (349.0, 2, 1.0),
        (292.0, 2, 1.0),
        (236.0, 1, 1.0),
        (98.0, 1, 1.0),
        (211.0, 1, 1.0),
        (272.0, 1, 1.0),
        (73.0, 1, 1.0),
    ],
];

/// Obstacles of pattern `index`, `None` if out of range
pub fn pattern_obstacles(index: usize) -> Option<Vec<Obstacle>> {
    let pattern = PATTERNS.get(index)?;
    Some(
        pattern
            .iter()
            .map(|&(angle, ring, speed)| {
                let ring = if ring == 1 { Ring::Outer } else { Ring::Inner };
                Obstacle::new(angle, ring, speed)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lookup() {
        let obstacles = pattern_obstacles(3).unwrap();
        assert_eq!(obstacles.len(), 9);
        assert_eq!(obstacles[0], Obstacle::new(171.0, Ring::Inner, 1.0));
        assert_eq!(obstacles[4].ring, Ring::Outer);
        assert!(pattern_obstacles(PATTERNS.len()).is_none());
    }

    #[test]
    fn test_patterns_keep_start_zone_clear() {
        for index in 0..PATTERNS.len() {
            for ob in pattern_obstacles(index).unwrap() {
                if ob.ring == Ring::Outer {
                    assert!(ob.angle <= 280.0, "pattern {index}: {ob:?}");
                }
            }
        }
    }
}
