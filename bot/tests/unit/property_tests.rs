//! Property-based tests for command parsing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use mcctl_bot::domain::{Command, extract_command};

proptest! {
    /// Any casing of a command name parses to that command.
    #[test]
    fn prop_any_casing_parses(idx in 0usize..Command::ALL.len(), mask in any::<u16>()) {
        let cmd = Command::ALL[idx];
        let mixed: String = cmd
            .name()
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << i) == 0 { c } else { c.to_ascii_uppercase() })
            .collect();
        prop_assert_eq!(mixed.parse::<Command>().expect("parse"), cmd);
    }

    /// Text that names no command is rejected and echoed verbatim.
    #[test]
    fn prop_unknown_text_is_echoed(text in "[A-Za-z0-9 _-]{1,24}") {
        let known = Command::ALL.iter().any(|c| c.name().eq_ignore_ascii_case(&text));
        prop_assume!(!known);
        let err = text.parse::<Command>().expect_err("expected Err");
        prop_assert_eq!(err.to_string(), format!("{text} is an invalid command."));
    }

    /// Whatever follows a slash comes back trimmed and non-empty.
    #[test]
    fn prop_extracted_command_is_trimmed(prefix in "[^/]{0,8}", body in "[a-z]{1,10}", pad in " {0,3}") {
        let text = format!("{prefix}/{pad}{body}{pad}");
        prop_assert_eq!(extract_command(&text), Some(body.as_str()));
    }
}
