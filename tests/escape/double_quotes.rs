use shesc::escape_bytes;

#[test]
fn dollar_inside_double_quotes_is_escaped() {
    assert_eq!(escape_bytes(b"\"a$b\""), b"\"a\\$b\"");
}

#[test]
fn backtick_inside_double_quotes_is_escaped() {
    assert_eq!(escape_bytes(b"\"`id`\""), b"\"\\`id\\`\"");
}

#[test]
fn other_metacharacters_inside_double_quotes_are_kept() {
    assert_eq!(escape_bytes(b"\"a;b|c*d 'e'\""), b"\"a;b|c*d 'e'\"");
}

#[test]
fn recognized_double_quote_escapes_are_preserved() {
    assert_eq!(escape_bytes(b"\"\\\" \\\\ \\$ \\`\""), b"\"\\\" \\\\ \\$ \\`\"");
}

#[test]
fn backslash_before_ordinary_byte_stays_literal() {
    assert_eq!(escape_bytes(b"\"%s\\n\""), b"\"%s\\n\"");
    assert_eq!(escape_bytes(b"\"\\'\""), b"\"\\'\"");
}

#[test]
fn newline_force_closes_double_quote() {
    assert_eq!(escape_bytes(b"\"abc\ndef"), b"\"abc\"\ndef");
}

#[test]
fn unterminated_double_quote_is_closed_at_end() {
    assert_eq!(escape_bytes(b"say \"hi"), b"say \"hi\"");
}
