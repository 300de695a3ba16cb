use shesc::escape_bytes;

#[test]
fn semicolon_and_pipe_are_escaped() {
    assert_eq!(escape_bytes(b"a;b"), b"a\\;b");
    assert_eq!(escape_bytes(b"a|b"), b"a\\|b");
}

#[test]
fn every_bare_metacharacter_gets_a_backslash() {
    for byte in b"$<>{}()!&|=;*~#%`" {
        let input = [b'x', *byte, b'y'];
        assert_eq!(
            escape_bytes(&input),
            [b'x', b'\\', *byte, b'y'],
            "byte {:?}",
            *byte as char
        );
    }
}

#[test]
fn plain_word_bytes_pass_through() {
    let input = b"path/to-file_1.txt,a:b@c+d?[e]^f";
    assert_eq!(escape_bytes(input), input);
}

#[test]
fn command_substitution_is_neutralized() {
    assert_eq!(escape_bytes(b"$(rm -rf /)"), b"\\$\\(rm -rf /\\)");
    assert_eq!(escape_bytes(b"`id`"), b"\\`id\\`");
}

#[test]
fn redirections_and_background_are_neutralized() {
    assert_eq!(escape_bytes(b"cat </etc/passwd >x &"), b"cat \\</etc/passwd \\>x \\&");
}

#[test]
fn existing_backslash_escapes_are_preserved() {
    assert_eq!(escape_bytes(b"a\\;b"), b"a\\;b");
    assert_eq!(escape_bytes(b"a\\ b"), b"a\\ b");
    assert_eq!(escape_bytes(b"\\\\"), b"\\\\");
    assert_eq!(escape_bytes(b"\\x"), b"\\x");
}

#[test]
fn non_ascii_bytes_are_copied_verbatim() {
    let input = "caf\u{e9} \u{65e5}\u{672c}".as_bytes();
    assert_eq!(escape_bytes(input), input);
    assert_eq!(escape_bytes(&[0xff, 0x80, b'$']), [0xff, 0x80, b'\\', b'$']);
}
