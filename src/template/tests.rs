// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write as _;

use super::{Template, TemplateEntry};
use crate::config::types::ValueSegments;
use crate::error::DotenvError;

fn keys(template: &Template) -> Vec<&str> {
    template.iter().map(|e| e.key.as_str()).collect()
}

#[test]
fn test_entry_forms() {
    let entries: Vec<_> = ["A=1", "B=", "C", "D=x=y", "=orphan", " "]
        .into_iter()
        .map(|line| TemplateEntry::parse(line, ValueSegments::First))
        .map(|e| (e.key, e.default))
        .collect();
    insta::assert_debug_snapshot!(entries, @r#"
    [
        (
            "A",
            Some(
                "1",
            ),
        ),
        (
            "B",
            Some(
                "",
            ),
        ),
        (
            "C",
            None,
        ),
        (
            "D",
            Some(
                "x",
            ),
        ),
        (
            "",
            Some(
                "orphan",
            ),
        ),
        (
            " ",
            None,
        ),
    ]
    "#);
}

#[test]
fn test_rest_segments_keep_extra_equals() {
    let entry = TemplateEntry::parse("URL=postgres://u:p@h/db?sslmode=require", ValueSegments::Rest);
    assert_eq!(entry.key, "URL");
    assert_eq!(
        entry.default.as_deref(),
        Some("postgres://u:p@h/db?sslmode=require")
    );

    let truncated =
        TemplateEntry::parse("URL=postgres://u:p@h/db?sslmode=require", ValueSegments::First);
    assert_eq!(truncated.default.as_deref(), Some("postgres://u:p@h/db?sslmode"));
}

#[test]
fn test_parse_skips_only_empty_lines() {
    let template = Template::parse("A=1\n\n  \nB\n", ValueSegments::First);
    assert_eq!(keys(&template), ["A", "  ", "B"]);
    assert_eq!(template.get("  "), Some(None));
}

#[test]
fn test_parse_keeps_carriage_returns() {
    let template = Template::parse("A=1\r\nB\r\n", ValueSegments::First);
    assert_eq!(template.get("A"), Some(Some("1\r")));
    assert_eq!(keys(&template), ["A", "B\r"]);
}

#[test]
fn test_duplicate_key_keeps_first_position_last_value() {
    let template = Template::parse("A=1\nB=2\nA=3\n", ValueSegments::First);
    assert_eq!(keys(&template), ["A", "B"]);
    assert_eq!(template.get("A"), Some(Some("3")));
}

#[test]
fn test_duplicate_bare_key_clears_default() {
    let template = Template::parse("A=1\nA\n", ValueSegments::First);
    assert_eq!(template.len(), 1);
    assert_eq!(template.get("A"), Some(None));
}

#[test]
fn test_get_undeclared_key() {
    let template = Template::parse("A=1", ValueSegments::First);
    assert_eq!(template.get("B"), None);
}

#[test]
fn test_empty_content() {
    assert!(Template::parse("", ValueSegments::First).is_empty());
    assert!(Template::parse("\n\n", ValueSegments::First).is_empty());
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"DB_HOST=localhost\nDB_PASS\n").unwrap();

    let template = Template::load(file.path(), ValueSegments::First).unwrap();
    assert_eq!(keys(&template), ["DB_HOST", "DB_PASS"]);
}

#[test]
fn test_load_invalid_utf8_is_lossy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"A=\xff\n").unwrap();

    let template = Template::load(file.path(), ValueSegments::First).unwrap();
    assert_eq!(template.get("A"), Some(Some("\u{fffd}")));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.env");

    let err = Template::load(&path, ValueSegments::First).unwrap_err();
    match err {
        DotenvError::Read { path: p, source } => {
            assert_eq!(p, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read error, got {other:?}"),
    }
}
