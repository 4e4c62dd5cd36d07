//! Counter Animation Math
//!
//! Pure timing and interpolation helpers for the animated impact
//! statistics. The component drives a tick loop; everything numeric
//! lives here so it can be unit tested.

/// Full animation duration
pub const COUNT_DURATION_MS: u32 = 2_000;
/// Tick interval (~60fps)
pub const COUNT_TICK_MS: u32 = 16;

/// Ticks in a full animation run
pub fn total_ticks() -> u32 {
    COUNT_DURATION_MS / COUNT_TICK_MS
}

/// Per-tick increment that reaches `target` over the full duration
pub fn tick_increment(target: u64) -> f64 {
    target as f64 / f64::from(total_ticks())
}

/// Advance the accumulator by one tick, clamping at `target`.
/// Returns the new accumulator and whether the run is finished.
pub fn advance(current: f64, target: u64) -> (f64, bool) {
    let next = current + tick_increment(target);
    if next >= target as f64 {
        (target as f64, true)
    } else {
        (next, false)
    }
}

/// Displayed text for an accumulator value: floor, then grouping
pub fn display_value(current: f64) -> String {
    group_thousands(current.floor() as u64)
}

/// Group an integer with thousands separators (12500 -> "12,500")
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
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
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_480), "12,480");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_display_value_floors_before_grouping() {
        assert_eq!(display_value(99.9), "99");
        assert_eq!(display_value(1_000.2), "1,000");
        assert_eq!(display_value(0.0), "0");
    }

    #[test]
    fn test_advance_is_monotonic_and_bounded() {
        let target = 12_480u64;
        let mut current = 0.0;
        let mut ticks = 0u32;
        loop {
            let (next, done) = advance(current, target);
            assert!(next >= current, "accumulator went backwards at tick {ticks}");
            assert!(next <= target as f64, "accumulator overshot at tick {ticks}");
            current = next;
            ticks += 1;
            if done {
                break;
            }
        }
        // Floating point rounding may cost a tick either way, never more
        assert!(ticks >= total_ticks() - 1 && ticks <= total_ticks() + 1);
        assert_eq!(current, target as f64);
    }

    #[test]
    fn test_advance_finishes_immediately_for_zero_target() {
        let (value, done) = advance(0.0, 0);
        assert_eq!(value, 0.0);
        assert!(done);
    }

    #[test]
    fn test_small_targets_still_terminate() {
        // Increment below 1 per tick must still reach the target exactly
        let target = 27u64;
        let mut current = 0.0;
        for _ in 0..=total_ticks() + 1 {
            let (next, done) = advance(current, target);
            current = next;
            if done {
                break;
            }
        }
        assert_eq!(current, target as f64);
        assert_eq!(display_value(current), "27");
    }
}
