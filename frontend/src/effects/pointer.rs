use crate::error::{Result, SiteError};

pub const DEFAULT_DAMPING: f64 = 0.18;

/// Where the indicator sits before the first pointer move: just off-screen.
pub const PARKED: Point = Point { x: -100.0, y: -100.0 };

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Fraction of the remaining distance covered on every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping(f64);

impl Damping {
    pub fn new(factor: f64) -> Result<Self> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Self(factor))
        } else {
            Err(SiteError::InvalidDamping(factor))
        }
    }

    pub fn factor(self) -> f64 {
        self.0
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self(DEFAULT_DAMPING)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub target: Point,
    pub current: Point,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            target: PARKED,
            current: PARKED,
        }
    }
}

impl PointerState {
    pub fn aim(&mut self, target: Point) {
        self.target = target;
    }

    /// One smoothing step. Returns the new displayed position.
    pub fn step(&mut self, damping: Damping) -> Point {
        let k = damping.factor();
        self.current.x += (self.target.x - self.current.x) * k;
        self.current.y += (self.target.y - self.current.y) * k;
        self.current
    }
}

/// Geometry of the trailing ring; hover swells it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub size: f64,
    pub opacity: f64,
}

impl RingStyle {
    pub fn for_hover(hover: bool) -> Self {
        if hover {
            Self { size: 48.0, opacity: 0.9 }
        } else {
            Self { size: 32.0, opacity: 0.6 }
        }
    }

    pub fn offset(self) -> f64 {
        self.size / 2.0
    }
}

pub const DOT_OFFSET: f64 = 6.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn approach(state: &mut PointerState, damping: Damping, target: Point, max_ticks: usize) -> usize {
        state.aim(target);
        let start = state.current;
        for tick in 1..=max_ticks {
            let before = state.current;
            let now = state.step(damping);

            // Each axis stays on its starting side of the target.
            for (s, b, n, t) in [(start.x, before.x, now.x, target.x), (start.y, before.y, now.y, target.y)] {
                if s <= t {
                    assert!(n <= t && n >= b, "overshoot on axis: {} -> {} past {}", b, n, t);
                } else {
                    assert!(n >= t && n <= b, "overshoot on axis: {} -> {} past {}", b, n, t);
                }
            }
            if state.current.distance(state.target) < 0.01 {
                return tick;
            }
        }
        max_ticks + 1
    }

    #[test]
    fn settles_on_target_without_overshoot() {
        let mut state = PointerState::default();
        let ticks = approach(&mut state, Damping::default(), Point::new(1920.0, 1080.0), 200);

        // 0.82^n * ~2300px < 0.01px
        assert!(ticks <= 70, "took {} ticks", ticks);
    }

    #[test]
    fn converges_after_any_sequence_of_moves() {
        let moves = [
            Point::new(40.0, 40.0),
            Point::new(900.0, 12.0),
            Point::new(-20.0, 640.0),
            Point::new(512.5, 384.25),
            Point::new(512.5, 384.25),
            Point::new(0.0, 0.0),
        ];
        for factor in [0.05, 0.18, 0.5, 0.99] {
            let damping = Damping::new(factor).unwrap();
            let mut state = PointerState::default();
            // A few frames between moves, then let the last one settle.
            for target in &moves[..moves.len() - 1] {
                state.aim(*target);
                for _ in 0..3 {
                    state.step(damping);
                }
            }
            let ticks = approach(&mut state, damping, moves[moves.len() - 1], 1_000);
            assert!(ticks <= 1_000, "damping {} never settled", factor);
        }
    }

    #[test]
    fn full_damping_jumps_straight_to_target() {
        let mut state = PointerState::default();
        state.aim(Point::new(10.0, 20.0));
        assert_eq!(state.step(Damping::new(1.0).unwrap()), Point::new(10.0, 20.0));
    }

    #[test]
    fn damping_outside_unit_interval_is_rejected() {
        for factor in [0.0, -0.3, 1.5, f64::NAN] {
            assert!(matches!(Damping::new(factor), Err(SiteError::InvalidDamping(_))));
        }
    }

    #[test]
    fn ring_swells_on_hover() {
        assert_eq!(RingStyle::for_hover(false).offset(), 16.0);
        assert_eq!(RingStyle::for_hover(true).offset(), 24.0);
        assert!(RingStyle::for_hover(true).opacity > RingStyle::for_hover(false).opacity);
    }
}
