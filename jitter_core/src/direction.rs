use rand::Rng;

/// Which way a floating number may move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Only add the floating amount
    OnlyIncrease,
    /// Only subtract the floating amount
    OnlyReduced,
}

impl Direction {
    /// Pick a direction with a fair coin flip
    pub fn coin_flip(rng: &mut impl Rng) -> Self {
        if rng.gen::<bool>() {
            Direction::OnlyIncrease
        } else {
            Direction::OnlyReduced
        }
    }

    /// Move `number` by `magnitude` in this direction, wrapping on overflow
    pub fn shift(self, number: i32, magnitude: i32) -> i32 {
        match self {
            Direction::OnlyIncrease => number.wrapping_add(magnitude),
            Direction::OnlyReduced => number.wrapping_sub(magnitude),
        }
    }

    /// Move a float `number` by `magnitude` in this direction
    pub fn shift_f64(self, number: f64, magnitude: i32) -> f64 {
        match self {
            Direction::OnlyIncrease => number + f64::from(magnitude),
            Direction::OnlyReduced => number - f64::from(magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shift() {
        assert_eq!(Direction::OnlyIncrease.shift(100, 7), 107);
        assert_eq!(Direction::OnlyReduced.shift(100, 7), 93);
        assert_eq!(Direction::OnlyIncrease.shift(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_coin_flip_produces_both() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let flips: Vec<Direction> = (0..64).map(|_| Direction::coin_flip(&mut rng)).collect();
        assert!(flips.contains(&Direction::OnlyIncrease));
        assert!(flips.contains(&Direction::OnlyReduced));
    }
}
