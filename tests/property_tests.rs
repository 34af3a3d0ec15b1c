//! Property-based tests for prefix_logger using proptest

use prefix_logger::prelude::*;
use proptest::prelude::*;

fn sample_event(level: LogLevel) -> LogEvent<'static> {
    LogEvent::new(level, "prop.rs", 7, String::new())
}

// ============================================================================
// Pattern Tests
// ============================================================================

proptest! {
    /// Literal-only patterns render exactly the input, whatever the event
    #[test]
    fn test_literal_patterns_render_verbatim(pattern in "[^%]{0,64}") {
        let plan = PrefixPattern::compile(&pattern).unwrap();
        let event = sample_event(LogLevel::Info);
        prop_assert_eq!(plan.render(&event), pattern);
    }

    /// Unknown selectors survive compilation and render as-is
    #[test]
    fn test_unknown_selectors_pass_through(c in "[abceghijkmopqrstuvwxyz]") {
        let pattern = format!("%{c}");
        let plan = PrefixPattern::compile(&pattern).unwrap();
        let event = sample_event(LogLevel::Debug);
        prop_assert_eq!(plan.render(&event), pattern);
    }

    /// Compilation never panics, whatever the input; a trailing bare '%' is
    /// the only rejected shape
    #[test]
    fn test_compile_never_panics(pattern in ".{0,64}") {
        let result = PrefixPattern::compile(&pattern);
        let dangling = pattern.chars().rev()
            .take_while(|&c| c == '%')
            .count() % 2 == 1;
        prop_assert_eq!(result.is_err(), dangling);
    }

    /// Rendering is deterministic for a fixed event
    #[test]
    fn test_render_is_deterministic(pattern in "[^%]{0,32}") {
        let plan = PrefixPattern::compile(&pattern).unwrap();
        let event = sample_event(LogLevel::Warn);
        prop_assert_eq!(plan.render(&event), plan.render(&event));
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Fatal),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

proptest! {
    /// LogLevel string conversions roundtrip
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with the ordinal encoding
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Ordinal conversion roundtrips through the config encoding
    #[test]
    fn test_log_level_ordinal_roundtrip(level in any_level()) {
        let ordinal = level as i64;
        prop_assert_eq!(LogLevel::from_ordinal(ordinal), Some(level));
    }

    /// `%l` always renders exactly five columns
    #[test]
    fn test_level_selector_width(level in any_level()) {
        let plan = PrefixPattern::compile("%l").unwrap();
        let rendered = plan.render(&sample_event(level));
        prop_assert_eq!(rendered.len(), 5);
        prop_assert!(rendered.trim_end().chars().all(|c| c.is_ascii_uppercase()));
    }
}
