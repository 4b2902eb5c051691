use rand::Rng;

/// Source of uniform draws used for scoring jitter and batch simulation.
pub trait RandomSource: Send + Sync {
    /// Draw a value in `[low, high]`.
    fn uniform(&self, low: f64, high: f64) -> f64;
}

/// Draws from the thread-local generator; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Always lands at the same relative position inside the requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom {
    position: f64,
}

impl FixedRandom {
    /// `position` is clamped to `[0, 1]`; 0 yields `low`, 1 yields `high`.
    pub fn at(position: f64) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
        }
    }

    /// Midpoint of every range, i.e. zero jitter.
    pub fn centered() -> Self {
        Self::at(0.5)
    }

    pub fn lowest() -> Self {
        Self::at(0.0)
    }

    pub fn highest() -> Self {
        Self::at(1.0)
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_inside_range() {
        let source = ThreadRandom;
        for _ in 0..500 {
            let value = source.uniform(-0.02, 0.02);
            assert!((-0.02..=0.02).contains(&value));
        }
        assert_eq!(source.uniform(0.3, 0.3), 0.3);
    }

    #[test]
    fn fixed_random_maps_position_into_range() {
        assert_eq!(FixedRandom::centered().uniform(-0.02, 0.02), 0.0);
        assert_eq!(FixedRandom::lowest().uniform(0.05, 0.95), 0.05);
        assert!((FixedRandom::highest().uniform(0.05, 0.95) - 0.95).abs() < 1e-12);
        assert_eq!(FixedRandom::at(7.0), FixedRandom::highest());
    }
}
