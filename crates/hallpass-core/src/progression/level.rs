//! Level curve.
//!
//! Level `L` begins at `100 * L²` XP. Level 1 is the floor, so the first
//! 399 XP all count as level 1.

/// XP per squared level.
pub const XP_SCALE: u64 = 100;

/// `floor(sqrt(xp / 100))`, never below 1.
pub fn calculate_level(xp: u64) -> u32 {
    let level = isqrt(xp / XP_SCALE);
    u32::try_from(level).unwrap_or(u32::MAX).max(1)
}

/// XP at which `level` begins.
pub fn level_floor(level: u32) -> u64 {
    let l = u64::from(level);
    XP_SCALE.saturating_mul(l.saturating_mul(l))
}

/// XP at which the level after `level` begins.
pub fn calculate_xp_for_next_level(level: u32) -> u64 {
    level_floor(level.saturating_add(1))
}

/// Percentage (0..=100) of the way from `current_level` to the next one.
pub fn calculate_progress_to_next_level(xp: u64, current_level: u32) -> f64 {
    let floor = level_floor(current_level) as f64;
    let next = calculate_xp_for_next_level(current_level) as f64;
    let span = next - floor;
    if span <= 0.0 {
        return 100.0;
    }
    ((xp as f64 - floor) / span * 100.0).clamp(0.0, 100.0)
}

/// Integer square root, exact for every `u64`.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}
