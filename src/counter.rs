//! Count-up interpolation for the stats tiles.
//!
//! A counter runs from 0 to its target in a fixed number of steps over a
//! fixed duration. Values are floor-rounded per step and the final step
//! lands exactly on the target, so the displayed sequence is
//! non-decreasing and deterministic regardless of timer jitter.

/// Total animation length.
pub const DURATION_MS: u32 = 2000;
/// Ticks per animation.
pub const STEPS: u32 = 60;

pub fn tick_interval_ms() -> u32 {
    DURATION_MS / STEPS
}

/// Displayed value after `step` of [`STEPS`] ticks toward `target`.
pub fn value_at(target: u64, step: u32) -> u64 {
    if step >= STEPS {
        return target;
    }
    ((target as f64) * f64::from(step) / f64::from(STEPS)).floor() as u64
}

/// Thousands-separated rendering, matching the locale-formatted numbers
/// the stat tiles show.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic_and_lands_exactly() {
        for target in [0u64, 1, 150, 2000, 50_000, 250_000, 1_200_000, 999_999] {
            let mut previous = 0;
            for step in 0..=STEPS {
                let value = value_at(target, step);
                assert!(value >= previous, "target {target} step {step}");
                assert!(value <= target);
                previous = value;
            }
            assert_eq!(value_at(target, STEPS), target);
        }
    }

    #[test]
    fn overshooting_steps_stay_clamped() {
        assert_eq!(value_at(150, STEPS + 1), 150);
        assert_eq!(value_at(150, STEPS * 4), 150);
    }

    #[test]
    fn intermediate_values_floor() {
        // 150 / 60 = 2.5 per step.
        assert_eq!(value_at(150, 1), 2);
        assert_eq!(value_at(150, 2), 5);
        assert_eq!(value_at(150, 3), 7);
    }

    #[test]
    fn grouping_inserts_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(50_000), "50,000");
        assert_eq!(format_grouped(1_200_000), "1,200,000");
    }

    #[test]
    fn duration_divides_into_whole_ticks() {
        assert_eq!(tick_interval_ms() * STEPS, DURATION_MS);
    }
}
