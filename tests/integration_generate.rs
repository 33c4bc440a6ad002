// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the library pipeline with an injected environment.

use envvars_to_dotenv::cli::{Invocation, parse_from};
use envvars_to_dotenv::cmd::generate::generate;
use envvars_to_dotenv::config::Settings;
use envvars_to_dotenv::env::Env;

fn run(template: &str, env: &[(&str, &str)]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("template");
    let output = dir.path().join("out");
    std::fs::write(&input, template).unwrap();

    let Invocation::Run(options) = parse_from([
        format!("--input={}", input.display()),
        format!("--output={}", output.display()),
    ])
    .unwrap() else {
        panic!("expected Run");
    };
    let env: Env = env.iter().copied().collect();
    generate(&options, &Settings::default(), &env).unwrap();
    std::fs::read_to_string(output).unwrap()
}

#[test]
fn generate_env_overrides_default() {
    assert_eq!(run("A=1\nB=2\n", &[("A", "X")]), "A=X\nB=2\n");
}

#[test]
fn generate_empty_env_value_falls_back() {
    assert_eq!(run("A=1\n", &[("A", "")]), "A=1\n");
}

#[test]
fn generate_duplicate_key_last_wins() {
    assert_eq!(run("A=1\nA=2\n", &[]), "A=2\n");
}

#[test]
fn generate_bare_key_is_undefined() {
    assert_eq!(run("NOVAL\n", &[]), "NOVAL=undefined\n");
}

#[test]
fn generate_truncates_after_second_equals() {
    assert_eq!(run("Q=a=b\n", &[]), "Q=a\n");
}

#[test]
fn generate_realistic_template() {
    let template = "\
NODE_ENV=development
PORT=3000
DATABASE_URL
API_KEY=
";
    let out = run(
        template,
        &[
            ("NODE_ENV", "production"),
            ("DATABASE_URL", "postgres://db/app"),
            ("UNRELATED", "x"),
        ],
    );
    insta::assert_snapshot!(out, @r"
    NODE_ENV=production
    PORT=3000
    DATABASE_URL=postgres://db/app
    API_KEY=
    ");
}
