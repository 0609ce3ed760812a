//! # Saccade - Motor Error
//!
//! Programmed saccades do not land where they aim. The realized landing
//! position deviates by a normally distributed motor error whose mean
//! pulls toward the optimal saccade distance (short saccades overshoot,
//! long ones undershoot) and whose spread grows with distance.
//!
//! The draw comes from the caller's seeded random source, so simulated
//! trials replay exactly. With the error model disabled the error is 0,
//! deterministically, and nothing is drawn.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::SaccadeConfig;

/// Motor error of one saccade, in letter positions.
///
/// Mean `(optimal - |distance|) * scaler`, sigma
/// `base_sigma + |distance| * sigma_scaler`, one normal draw. Exactly 0.0
/// for any distance when the error model is disabled.
pub fn saccade_error(saccade_distance: f32, config: &SaccadeConfig, rng: &mut impl Rng) -> f32 {
    if !config.use_error {
        return 0.0;
    }

    let error_mean = (config.optimal_distance - saccade_distance.abs()) * config.error_scaler;
    let error_sigma = config.error_sigma + saccade_distance.abs() * config.error_sigma_scaler;
    let z: f32 = rng.sample(StandardNormal);
    error_mean + error_sigma * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_disabled_error_is_exactly_zero() {
        let mut config = SaccadeConfig::default();
        config.use_error = false;
        let mut rng = StdRng::seed_from_u64(1);
        for distance in [-12.0, -3.0, 0.0, 5.0, 40.0] {
            assert_eq!(saccade_error(distance, &config, &mut rng), 0.0);
        }
    }

    #[test]
    fn test_error_is_seeded() {
        let config = SaccadeConfig::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            saccade_error(5.0, &config, &mut a),
            saccade_error(5.0, &config, &mut b)
        );
    }

    #[test]
    fn test_short_saccades_overshoot_on_average() {
        let config = SaccadeConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let short: f32 = (0..500)
            .map(|_| saccade_error(2.0, &config, &mut rng))
            .sum::<f32>()
            / 500.0;
        let long: f32 = (0..500)
            .map(|_| saccade_error(12.0, &config, &mut rng))
            .sum::<f32>()
            / 500.0;
        assert!(
            short > 0.0,
            "below the optimal distance the mean error is positive"
        );
        assert!(
            long < 0.0,
            "beyond the optimal distance the mean error is negative"
        );
    }

    #[test]
    fn test_error_uses_absolute_distance() {
        // a regression of -2 letters has the same error statistics as a
        // forward saccade of 2: only magnitude enters the model
        let config = SaccadeConfig::default();
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);
        assert_eq!(
            saccade_error(-2.0, &config, &mut a),
            saccade_error(2.0, &config, &mut b)
        );
    }
}
