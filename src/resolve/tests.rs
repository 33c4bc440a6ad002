// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Source, resolve};
use crate::config::types::{EmptyValuePolicy, ValueSegments};
use crate::env::Env;
use crate::template::Template;

fn pairs(template: &str, env: &[(&str, &str)], policy: EmptyValuePolicy) -> Vec<(String, Option<String>, Source)> {
    let template = Template::parse(template, ValueSegments::First);
    let env: Env = env.iter().copied().collect();
    resolve(&template, &env, policy)
        .iter()
        .map(|r| (r.key.clone(), r.value.clone(), r.source))
        .collect()
}

#[test]
fn test_env_overrides_default() {
    let resolved = pairs("A=1\nB=2\n", &[("A", "X")], EmptyValuePolicy::Fallback);
    assert_eq!(
        resolved,
        [
            ("A".to_string(), Some("X".to_string()), Source::Environment),
            ("B".to_string(), Some("2".to_string()), Source::Default),
        ]
    );
}

#[test]
fn test_empty_env_value_falls_back() {
    let resolved = pairs("A=1\n", &[("A", "")], EmptyValuePolicy::Fallback);
    assert_eq!(
        resolved,
        [("A".to_string(), Some("1".to_string()), Source::Default)]
    );
}

#[test]
fn test_empty_env_value_overrides_when_configured() {
    let resolved = pairs("A=1\n", &[("A", "")], EmptyValuePolicy::Override);
    assert_eq!(
        resolved,
        [("A".to_string(), Some(String::new()), Source::Environment)]
    );
}

#[test]
fn test_bare_key_without_env_is_missing() {
    let resolved = pairs("NOVAL\n", &[], EmptyValuePolicy::Fallback);
    assert_eq!(resolved, [("NOVAL".to_string(), None, Source::Missing)]);
}

#[test]
fn test_bare_key_with_env() {
    let resolved = pairs("TOKEN\n", &[("TOKEN", "s3cr3t")], EmptyValuePolicy::Fallback);
    assert_eq!(
        resolved,
        [("TOKEN".to_string(), Some("s3cr3t".to_string()), Source::Environment)]
    );
}

#[test]
fn test_env_only_variables_are_not_emitted() {
    let resolved = pairs("A=1\n", &[("B", "2")], EmptyValuePolicy::Fallback);
    assert_eq!(resolved.len(), 1);
}

#[test]
fn test_counts_by_source() {
    let template = Template::parse("A=1\nB=2\nC\n", ValueSegments::First);
    let env: Env = [("A", "x")].into_iter().collect();
    let mapping = resolve(&template, &env, EmptyValuePolicy::Fallback);

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.count(Source::Environment), 1);
    assert_eq!(mapping.count(Source::Default), 1);
    assert_eq!(mapping.count(Source::Missing), 1);
}

#[test]
fn test_resolve_with_plain_map() {
    let template = Template::parse("HOME_DIR=/tmp\n", ValueSegments::First);
    let mut env = std::collections::BTreeMap::new();
    env.insert("HOME_DIR".to_string(), "/home/ci".to_string());

    let mapping = resolve(&template, &env, EmptyValuePolicy::Fallback);
    let first = mapping.iter().next().unwrap();
    assert_eq!(first.value.as_deref(), Some("/home/ci"));
}
