//! Property tests for the argument tokenizer

use proptest::prelude::*;
use veldra_commands::tokenize;

proptest! {
    /// Tokenizing never panics, whatever the input
    #[test]
    fn never_panics(input in ".*") {
        let _ = tokenize(&input);
    }

    /// Quote and escape characters densely mixed with multibyte text still
    /// never panic, and every token is a substring-shaped piece of the input
    #[test]
    fn never_panics_on_quoting_near_multibyte(input in "[\"\\\\éß日 a-z]{0,20}") {
        for token in tokenize(&input) {
            prop_assert!(token.len() <= input.len());
        }
    }

    /// Plain space-separated words come back exactly
    #[test]
    fn plain_words_round_trip(words in proptest::collection::vec("[a-z0-9]{1,8}", 0..8)) {
        let line = words.join(" ");
        prop_assert_eq!(tokenize(&line), words);
    }

    /// Extra separating spaces never change the token sequence
    #[test]
    fn consecutive_spaces_are_separators(words in proptest::collection::vec("[a-z0-9]{1,8}", 0..8)) {
        let line = words.join("   ");
        prop_assert_eq!(tokenize(&format!("  {line} ")), words);
    }

    /// An unquoted token never contains a space
    #[test]
    fn unquoted_tokens_have_no_spaces(input in "[a-z ]{0,40}") {
        for token in tokenize(&input) {
            prop_assert!(!token.contains(' '));
        }
    }

    /// A quoted span survives as a single token with its spaces intact
    #[test]
    fn quoted_span_is_one_token(inner in "[a-z ]{0,20}", tail in "[a-z]{1,8}") {
        let line = format!("\"{inner}\" {tail}");
        let tokens = tokenize(&line);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0], &inner);
        prop_assert_eq!(&tokens[1], &tail);
    }
}
