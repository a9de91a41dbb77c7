//! Property-based tests for log parsing.
//!
//! These tests use proptest to generate log output and verify that the
//! parsing invariants hold for all of it.

#[cfg(test)]
mod proptest_tests {
    use crate::history::{parse_log, parse_log_line};
    use proptest::prelude::*;

    proptest! {
        /// Property: an id followed by a subject parses back to exactly that pair
        #[test]
        fn parse_log_line_splits_id_and_subject(
            id in "[0-9a-f]{7,12}",
            subject in "[A-Za-z0-9][A-Za-z0-9 .,:()-]{0,60}[A-Za-z0-9.)]",
        ) {
            let record = parse_log_line(&format!("{} {}", id, subject)).unwrap();
            prop_assert_eq!(record.id, id);
            prop_assert_eq!(record.subject, subject);
        }

        /// Property: a line holding only an id has an empty subject
        #[test]
        fn parse_log_line_id_only_has_empty_subject(id in "[0-9a-f]{7,40}") {
            let record = parse_log_line(&id).unwrap();
            prop_assert_eq!(record.id, id);
            prop_assert!(record.subject.is_empty());
        }

        /// Property: parsed ids never contain whitespace and are never empty
        #[test]
        fn parse_log_line_id_has_no_whitespace(line in ".*") {
            if let Some(record) = parse_log_line(&line) {
                prop_assert!(!record.id.is_empty());
                prop_assert!(!record.id.chars().any(char::is_whitespace));
            }
        }

        /// Property: parse_log never returns more than `limit` records
        #[test]
        fn parse_log_never_exceeds_limit(
            lines in proptest::collection::vec("[0-9a-f]{7}( [a-z ]{0,20})?", 0..50),
            limit in 0usize..40,
        ) {
            let output = lines.join("\n");
            prop_assert!(parse_log(&output, limit).len() <= limit);
        }

        /// Property: blank lines never produce records
        #[test]
        fn parse_log_skips_blank_lines(blanks in proptest::collection::vec("[ \t]*", 0..10)) {
            let output = blanks.join("\n");
            prop_assert!(parse_log(&output, usize::MAX).is_empty());
        }
    }
}
