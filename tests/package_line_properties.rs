//! Property-based tests for package line rewriting
//!
//! These tests verify invariants that should hold for all inputs:
//! - Only the package line changes; every other line is byte-for-byte kept
//! - Declarations outside the legacy prefix are never touched
//! - Rewriting into a non-legacy package is idempotent

use proptest::prelude::*;
use repackage::PackagePattern;

/// Dotted package tail such as `domain.model`
fn package_tail() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..4).prop_map(|parts| parts.join("."))
}

/// Java-ish body lines that never start with `package`
fn body_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ a-zA-Z0-9_{}();=.*/]{0,40}", 0..12).prop_map(|lines| {
        lines
            .into_iter()
            .filter(|l| !l.starts_with("package"))
            .collect()
    })
}

fn legacy_pattern() -> PackagePattern {
    PackagePattern::new("org.lareferencia", &["backend", "core"]).unwrap()
}

proptest! {
    #[test]
    fn prop_only_package_line_changes(
        segment in prop::sample::select(vec!["backend", "core"]),
        tail in package_tail(),
        target in package_tail(),
        body in body_lines(),
    ) {
        let header = format!("package org.lareferencia.{}.{};", segment, tail);
        let content = format!("{}\n{}\n", header, body.join("\n"));
        let target = format!("com.example.{}", target);

        let rewritten = legacy_pattern().rewrite(&content, &target).unwrap();

        let expected = format!("package {};\n{}\n", target, body.join("\n"));
        prop_assert_eq!(rewritten, expected);
    }

    #[test]
    fn prop_other_prefixes_untouched(
        segment in "[a-z]{1,10}".prop_filter("legacy segment", |s| s != "backend" && s != "core"),
        tail in package_tail(),
    ) {
        let content = format!("package org.lareferencia.{}.{};\n\nclass A {{}}\n", segment, tail);
        prop_assert!(legacy_pattern().rewrite(&content, "com.example.x").is_none());
    }

    #[test]
    fn prop_rewrite_is_idempotent(
        tail in package_tail(),
        target in package_tail(),
        body in body_lines(),
    ) {
        let content = format!("package org.lareferencia.backend.{};\n{}\n", tail, body.join("\n"));
        let target = format!("org.lareferencia.platform.{}", target);
        let pattern = legacy_pattern();

        let once = pattern.rewrite(&content, &target).unwrap();
        prop_assert!(pattern.rewrite(&once, &target).is_none());
    }
}
