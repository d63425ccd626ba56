//! Confetti ensemble generation.
//!
//! An ensemble is a pure value describing one celebration burst. The
//! renderer animates the pieces; the sequencer decides when the ensemble
//! expires. Nothing here touches time or screen state.

use rand::Rng;

/// Colors used when the configuration does not override the palette.
pub const DEFAULT_PALETTE: [&str; 5] = ["#00C896", "#ffffff", "#ffd700", "#ff6b6b", "#4ecdc4"];

/// One falling particle of a celebration burst.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Unique within the ensemble.
    pub id: u32,
    /// Horizontal spawn position as a percentage of the viewport, `[0, 100)`.
    pub x: f32,
    /// Hex color drawn from the palette.
    pub color: String,
    /// Animation start offset in seconds, `[0, 2)`.
    pub delay_secs: f32,
    /// Fall duration in seconds, `[2, 5)`.
    pub duration_secs: f32,
}

/// Generate an ensemble of `n` pieces with independently drawn kinematics.
///
/// `palette` must be non-empty; callers validate it at construction time.
pub fn generate(n: usize, palette: &[String], rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..n)
        .map(|i| ConfettiPiece {
            id: i as u32,
            x: rng.random_range(0.0..100.0),
            color: palette[rng.random_range(0..palette.len())].clone(),
            delay_secs: rng.random_range(0.0..2.0),
            duration_secs: rng.random_range(2.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn generates_exactly_n_pieces() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(50, &palette(), &mut rng).len(), 50);
        assert!(generate(0, &palette(), &mut rng).is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(8);
        let ensemble = generate(50, &palette(), &mut rng);
        for (i, piece) in ensemble.iter().enumerate() {
            assert_eq!(piece.id, i as u32);
        }
    }

    #[test]
    fn kinematics_within_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let palette = palette();
        for piece in generate(500, &palette, &mut rng) {
            assert!((0.0..100.0).contains(&piece.x), "x out of range: {}", piece.x);
            assert!(palette.contains(&piece.color), "unknown color {}", piece.color);
            assert!((0.0..2.0).contains(&piece.delay_secs));
            assert!((2.0..5.0).contains(&piece.duration_secs));
        }
    }
}
