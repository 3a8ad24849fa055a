//! Argument tokenizer
//!
//! Splits a raw argument string into tokens in a single left-to-right pass.
//! Double-quoted runs keep embedded spaces; a quote preceded by a backslash
//! does not terminate the run, and the escape marker is retained verbatim in
//! the token (unescaping is the handler's business, if it cares at all).
//!
//! Malformed quoting never fails the dispatch: an unterminated quote simply
//! extends the token to the end of the input.

/// Split an argument string into tokens
///
/// Rules, applied while scanning left to right:
/// - `"` opens a quoted token running to the next unescaped `"` (or end of
///   input); the token is the text strictly between the quotes. The
///   terminating quote and exactly one following character (the conventional
///   separating space) are skipped.
/// - any other non-space character opens an unquoted token running to the
///   next space or end of input.
/// - bare spaces separate tokens and are otherwise skipped.
///
/// Empty input yields an empty vector, not a single empty token.
pub fn tokenize(args: &str) -> Vec<String> {
    let bytes = args.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' => i += 1,
            b'"' => {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() {
                    // An escaped quote (preceded by a backslash) does not
                    // terminate the run. At end == start the previous byte is
                    // the opening quote, never a backslash.
                    if bytes[end] == b'"' && bytes[end - 1] != b'\\' {
                        break;
                    }
                    end += 1;
                }
                tokens.push(args[start..end].to_string());
                // Skip the terminator and the one separating character after
                // it. The separator may be multibyte, so advance by whole
                // characters, never bare bytes.
                let after = (end + 1).min(bytes.len());
                i = match args[after..].chars().next() {
                    Some(c) => after + c.len_utf8(),
                    None => bytes.len(),
                };
            }
            _ => {
                let start = i;
                while i < bytes.len() && bytes[i] != b' ' {
                    i += 1;
                }
                tokens.push(args[start..i].to_string());
            }
        }
    }

    tokens
}
