use super::*;

fn check_split(src: &str, sep: &str, expected: Vec<&str>) {
    let parts = split_level(src, sep).unwrap();
    let expected: Vec<String> = expected.iter().map(|part| part.to_string()).collect();
    assert_eq!(expected, parts);
}

#[test]
fn no_separator() {
    check_split("in:my_vault", " AND ", vec!["in:my_vault"]);
}

#[test]
fn empty_source() {
    check_split("", " AND ", vec![""]);
}

#[test]
fn top_level_split() {
    check_split(
        "in:my_vault AND type:\"Login\" AND hello",
        " AND ",
        vec!["in:my_vault", "type:\"Login\"", "hello"],
    );
}

#[test]
fn separator_inside_parens_is_opaque() {
    check_split(
        "(a AND b) AND c",
        " AND ",
        vec!["(a AND b)", "c"],
    );
}

#[test]
fn separator_inside_quotes_is_opaque() {
    check_split(
        "in:collection:\"Rock AND Roll\" AND type:\"Login\"",
        " AND ",
        vec!["in:collection:\"Rock AND Roll\"", "type:\"Login\""],
    );
}

#[test]
fn parens_inside_quotes_are_opaque() {
    check_split(
        "in:folder:\"a ) b\" AND c",
        " AND ",
        vec!["in:folder:\"a ) b\"", "c"],
    );
}

#[test]
fn unbalanced_open_paren() {
    assert_eq!(None, split_level("(in:my_vault", " AND "));
}

#[test]
fn stray_closing_paren() {
    assert_eq!(None, split_level("in:my_vault)", " AND "));
}

#[test]
fn unterminated_quote() {
    assert_eq!(None, split_level("type:\"Login", " AND "));
}

#[test]
fn enclosed_strips_one_pair() {
    assert_eq!(Some("in:my_vault"), enclosed("(in:my_vault)"));
}

#[test]
fn enclosed_keeps_inner_pairs() {
    assert_eq!(Some("(a)"), enclosed("((a))"));
}

#[test]
fn enclosed_rejects_bare_token() {
    assert_eq!(None, enclosed("in:my_vault"));
}

#[test]
fn enclosed_rejects_early_close() {
    assert_eq!(None, enclosed("(a) OR (b)"));
}

#[test]
fn enclosed_rejects_unbalanced() {
    assert_eq!(None, enclosed("(a))"));
    assert_eq!(None, enclosed("((a)"));
}

#[test]
fn enclosed_quote_hides_paren() {
    assert_eq!(Some("in:folder:\"a ) b\""), enclosed("(in:folder:\"a ) b\")"));
}
