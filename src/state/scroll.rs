/// Vertical offset, in pixels, past which the header collapses into its
/// compact state.
pub const COMPACT_SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_compact(vertical_offset: f64) -> bool {
    vertical_offset > COMPACT_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_at_top_and_on_the_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(10.0));
    }

    #[test]
    fn compact_past_the_threshold() {
        assert!(is_compact(11.0));
        assert!(is_compact(600.0));
    }

    #[test]
    fn toggles_both_ways() {
        assert!(is_compact(250.0));
        assert!(!is_compact(5.0));
        assert!(is_compact(11.0));
    }
}
