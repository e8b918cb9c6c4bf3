use regex::Regex;

use crate::config::RewriteConfig;
use crate::errors::{Error, Result};

/// Matcher for legacy package declarations.
///
/// Matches, at the start of any line, `package <root>.<segment>.<rest>;`
/// where `<segment>` is one of the configured legacy segments and `<rest>`
/// runs up to the first semicolon. Comments are not excluded.
#[derive(Debug, Clone)]
pub struct PackagePattern {
    regex: Regex,
}

/// A rewritten source file and the legacy package it used to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRewrite<'a> {
    pub old_package: &'a str,
    pub content: String,
}

impl PackagePattern {
    pub fn new<S: AsRef<str>>(legacy_root: &str, legacy_segments: &[S]) -> Result<Self> {
        if legacy_segments.is_empty() {
            return Err(Error::config("legacy_segments must list at least one segment"));
        }

        let alternatives = legacy_segments
            .iter()
            .map(|s| regex::escape(s.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(
            r"(?m)^package\s+(?P<old>{}\.(?:{})\.[^;]+);",
            regex::escape(legacy_root),
            alternatives
        );

        Ok(Self {
            regex: Regex::new(&source)?,
        })
    }

    pub fn from_config(config: &RewriteConfig) -> Result<Self> {
        Self::new(&config.legacy_root, config.legacy_segments.as_slice())
    }

    /// Replace the first legacy declaration with `package <new_package>;`.
    ///
    /// Returns `None` when there is no match or the replacement leaves the
    /// content byte-for-byte identical.
    pub fn rewrite_declaration<'a>(
        &self,
        content: &'a str,
        new_package: &str,
    ) -> Option<PackageRewrite<'a>> {
        let caps = self.regex.captures(content)?;
        let declaration = caps.get(0)?;
        let old_package = caps.name("old")?.as_str();

        let mut rewritten = String::with_capacity(content.len() + new_package.len());
        rewritten.push_str(&content[..declaration.start()]);
        rewritten.push_str("package ");
        rewritten.push_str(new_package);
        rewritten.push(';');
        rewritten.push_str(&content[declaration.end()..]);

        if rewritten == content {
            return None;
        }
        Some(PackageRewrite {
            old_package,
            content: rewritten,
        })
    }

    /// [`Self::rewrite_declaration`] without the replaced package name.
    pub fn rewrite(&self, content: &str, new_package: &str) -> Option<String> {
        self.rewrite_declaration(content, new_package)
            .map(|rewrite| rewrite.content)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn default_pattern() -> PackagePattern {
        PackagePattern::new("org.lareferencia", &["backend", "core"]).unwrap()
    }

    #[test]
    fn test_rewrites_backend_declaration() {
        let content = "package org.lareferencia.backend.domain.Foo;\n\npublic class Foo {}\n";
        let rewritten = default_pattern()
            .rewrite(content, "org.lareferencia.core.domain")
            .unwrap();
        assert_eq!(
            rewritten,
            "package org.lareferencia.core.domain;\n\npublic class Foo {}\n"
        );
    }

    #[test]
    fn test_rewrites_core_declaration() {
        let content = "package org.lareferencia.core.foo.bar;\nclass A {}\n";
        let rewritten = default_pattern().rewrite(content, "com.example.bar").unwrap();
        assert_eq!(rewritten, "package com.example.bar;\nclass A {}\n");
    }

    #[test]
    fn test_ignores_other_second_segments() {
        let content = "package org.lareferencia.shared.util;\n";
        assert!(default_pattern().rewrite(content, "x.y").is_none());
    }

    #[test]
    fn test_requires_a_segment_after_legacy_token() {
        assert!(default_pattern()
            .rewrite("package org.lareferencia.core;\n", "x.y")
            .is_none());
    }

    #[test]
    fn test_must_start_a_line() {
        let content = "  package org.lareferencia.core.a;\n";
        assert!(default_pattern().rewrite(content, "x.y").is_none());
    }

    #[test]
    fn test_only_first_match_replaced_even_in_comment() {
        let content = indoc! {"
            /*
            package org.lareferencia.backend.old;
            */
            package org.lareferencia.backend.real;
        "};
        let rewritten = default_pattern().rewrite(content, "new.pkg").unwrap();
        assert_eq!(
            rewritten,
            indoc! {"
                /*
                package new.pkg;
                */
                package org.lareferencia.backend.real;
            "}
        );
    }

    #[test]
    fn test_identical_replacement_is_not_a_change() {
        let content = "package org.lareferencia.core.domain;\n";
        assert!(default_pattern()
            .rewrite(content, "org.lareferencia.core.domain")
            .is_none());
    }

    #[test]
    fn test_replacement_is_literal() {
        let content = "package org.lareferencia.core.a;\n";
        let rewritten = default_pattern().rewrite(content, "odd.$1.pkg").unwrap();
        assert_eq!(rewritten, "package odd.$1.pkg;\n");
    }

    #[test]
    fn test_dots_in_root_are_literal() {
        let content = "package orgXlareferencia.core.a;\n";
        assert!(default_pattern().rewrite(content, "x").is_none());
    }

    #[test]
    fn test_rewrite_declaration_reports_old_package() {
        let content = "// header\npackage org.lareferencia.backend.worker.harvesting;\n";
        let rewrite = default_pattern()
            .rewrite_declaration(content, "org.lareferencia.core.worker.harvesting")
            .unwrap();
        assert_eq!(
            rewrite,
            PackageRewrite {
                old_package: "org.lareferencia.backend.worker.harvesting",
                content: "// header\npackage org.lareferencia.core.worker.harvesting;\n"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_crlf_line_endings_preserved() {
        let content = "package org.lareferencia.core.a;\r\nclass A {}\r\n";
        let rewritten = default_pattern().rewrite(content, "b.c").unwrap();
        assert_eq!(rewritten, "package b.c;\r\nclass A {}\r\n");
    }

    #[test]
    fn test_empty_segments_rejected() {
        let segments: [&str; 0] = [];
        assert!(PackagePattern::new("org.lareferencia", &segments).is_err());
    }

    #[test]
    fn test_custom_segments() {
        let pattern = PackagePattern::new("com.acme", &["legacy"]).unwrap();
        let rewritten = pattern.rewrite("package com.acme.legacy.io;\n", "com.acme.io");
        assert_eq!(rewritten.as_deref(), Some("package com.acme.io;\n"));
    }
}
