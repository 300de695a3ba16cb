use shesc::escape_bytes;

#[test]
fn bare_backslash_newline_pair_disappears() {
    assert_eq!(escape_bytes(b"a\\\nb"), b"ab");
}

#[test]
fn continuation_between_words_keeps_preceding_separator() {
    assert_eq!(escape_bytes(b"echo \\\nfoo"), b"echo foo");
}

#[test]
fn continuation_inside_double_quotes_disappears() {
    assert_eq!(escape_bytes(b"\"a\\\nb\""), b"\"ab\"");
}

#[test]
fn backslash_newline_inside_single_quotes_is_not_a_continuation() {
    assert_eq!(escape_bytes(b"'a\\\nb'"), b"'a\\'\nb''");
}

#[test]
fn repeated_continuations_join_one_word() {
    assert_eq!(escape_bytes(b"a\\\nb\\\nc\n"), b"abc\n");
}
