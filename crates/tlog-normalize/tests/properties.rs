//! Property tests for cell normalization.

use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

use tlog_model::CellValue;
use tlog_normalize::{
    is_empty, normalize_incidence_code, normalize_route_key, parse_motivo, to_minutes,
    to_time_of_day,
};

proptest! {
    #[test]
    fn whitespace_text_is_empty(spaces in "[ \t\r\n]{0,12}") {
        prop_assert!(is_empty(&CellValue::Text(spaces)));
    }

    #[test]
    fn day_fraction_always_yields_a_time(fraction in 0.0f64..1.0) {
        prop_assert!(to_time_of_day(&CellValue::Number(fraction)).is_some());
    }

    #[test]
    fn day_fraction_minutes_stay_within_a_day(fraction in 0.0f64..1.0) {
        let minutes = to_minutes(&CellValue::Number(fraction)).unwrap_or(-1.0);
        prop_assert!((0.0..=1_440.0).contains(&minutes));
    }

    #[test]
    fn route_key_is_idempotent(route in "[A-Za-z0-9 \u{2013}\u{2014}-]{0,24}") {
        let once = normalize_route_key(&route);
        prop_assert_eq!(normalize_route_key(&once), once.clone());
    }

    #[test]
    fn incidence_code_is_at_most_three_chars(text in "\\PC{0,16}") {
        let code = normalize_incidence_code(&CellValue::Text(text));
        prop_assert!(code.chars().count() <= 3);
    }

    #[test]
    fn motivo_parser_is_total(text in "\\PC{0,24}", number in any::<f64>()) {
        let _ = parse_motivo(&CellValue::Text(text));
        let _ = parse_motivo(&CellValue::Number(number));
    }

    #[test]
    fn separated_pairs_round_trip(main in 0i64..100, sub in 0i64..1000, sep in "[|/-]") {
        let parsed = parse_motivo(&CellValue::Text(format!("{main}{sep}{sub}")));
        prop_assert_eq!(parsed.main, Some(main));
        prop_assert_eq!(parsed.sub, Some(sub));
    }
}
