//! Line points, level boundaries, and gravity intervals.
//!
//! Scoring is level-multiplied: a clear of `n` rows pays
//! `line_scores[n] * level`. Crossing a 1000-point boundary raises the level
//! by exactly one, no matter how many boundaries one lock crosses.

use blockfall_types::GameConfig;

/// Points awarded for clearing `lines` rows at the given level.
pub fn line_points(lines: u32, level: u32, config: &GameConfig) -> u32 {
    if lines == 0 || lines as usize >= config.line_scores.len() {
        return 0;
    }
    config.line_scores[lines as usize] * level
}

/// The level after a score change. Increments by exactly 1 when the score
/// crossed a level boundary, regardless of how many boundaries were crossed.
/// Never decreases.
pub fn level_after(old_score: u32, new_score: u32, level: u32, config: &GameConfig) -> u32 {
    if new_score / config.level_step_points > old_score / config.level_step_points {
        level + 1
    } else {
        level
    }
}

/// Gravity tick interval for a level: `max(min, base - level * step)`.
pub fn gravity_interval_ms(level: u32, config: &GameConfig) -> u32 {
    config
        .base_gravity_ms
        .saturating_sub(level.saturating_mul(config.gravity_step_ms))
        .max(config.min_gravity_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_per_count() {
        let config = GameConfig::default();
        assert_eq!(line_points(1, 1, &config), 100);
        assert_eq!(line_points(2, 1, &config), 200);
        assert_eq!(line_points(3, 1, &config), 300);
        assert_eq!(line_points(4, 1, &config), 800);
    }

    #[test]
    fn test_line_points_scale_with_level() {
        let config = GameConfig::default();
        assert_eq!(line_points(1, 3, &config), 300);
        assert_eq!(line_points(4, 5, &config), 4000);
    }

    #[test]
    fn test_line_points_zero_or_excess() {
        let config = GameConfig::default();
        assert_eq!(line_points(0, 3, &config), 0);
        assert_eq!(line_points(5, 3, &config), 0);
    }

    #[test]
    fn test_level_increments_on_boundary() {
        let config = GameConfig::default();
        assert_eq!(level_after(950, 1050, 1, &config), 2);
        assert_eq!(level_after(950, 999, 1, &config), 1);
        assert_eq!(level_after(1000, 1900, 2, &config), 2);
    }

    #[test]
    fn test_double_boundary_crossing_is_single_increment() {
        let config = GameConfig::default();
        // 50 -> 2100 crosses two boundaries but the level rises by one.
        assert_eq!(level_after(50, 2100, 1, &config), 2);
    }

    #[test]
    fn test_gravity_interval_clamps_at_minimum() {
        let config = GameConfig::default();
        assert_eq!(gravity_interval_ms(1, &config), 900);
        assert_eq!(gravity_interval_ms(5, &config), 500);
        assert_eq!(gravity_interval_ms(9, &config), 100);
        assert_eq!(gravity_interval_ms(10, &config), 100);
        assert_eq!(gravity_interval_ms(1000, &config), 100);
    }
}
