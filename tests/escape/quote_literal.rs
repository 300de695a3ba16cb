use shesc::{escape_bytes, quote_literal};

#[test]
fn plain_argument_is_wrapped_in_double_quotes() {
    assert_eq!(quote_literal(b"hello world"), b"\"hello world\"");
    assert_eq!(quote_literal(b""), b"\"\"");
}

#[test]
fn double_quote_escapable_bytes_get_a_backslash() {
    assert_eq!(
        quote_literal(b"say \"$HOME\" `id` \\"),
        b"\"say \\\"\\$HOME\\\" \\`id\\` \\\\\""
    );
}

#[test]
fn other_metacharacters_are_left_alone() {
    assert_eq!(quote_literal(b"a;b|c*'d'"), b"\"a;b|c*'d'\"");
}

#[test]
fn quoted_argument_passes_through_escaper_unchanged() {
    for arg in [
        &b"rm -rf / ; echo pwned"[..],
        b"$(curl evil) `id` ${x}",
        b"back\\slash \"quote\" 'single'",
        b"  spaced  \t out  ",
    ] {
        let quoted = quote_literal(arg);
        assert_eq!(escape_bytes(&quoted), quoted);
    }
}
