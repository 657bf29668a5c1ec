//! Line-pattern extraction for Kotlin sources.
//!
//! This is deliberately not a parser. It recognizes a handful of line
//! shapes used by constructor-injected classes:
//!
//! ```kotlin
//! package com.example.shop.checkout.service
//!
//! interface CartRepository
//!
//! class CheckoutService @Inject constructor(
//!     private val carts: CartRepository,
//!     private val clock: Clock?,
//!     private val handlers: List<PaymentHandler>,
//! ) {
//! ```
//!
//! A class header opens at `class X @Inject` or `open class X` and every
//! following line contributes at most one dependency until a line ending in
//! `{` closes it. False positives and misses are expected.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::DeclarationRecord;

const INTERFACE_PREFIX: &str = "interface ";

static INJECT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class (\w+) @Inject").expect("static pattern"));
static OPEN_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"open class (\w+)").expect("static pattern"));
static INTERFACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"interface (\w+)").expect("static pattern"));

/// Extraction settings for one run.
#[derive(Debug, Clone, Copy)]
pub struct KotlinPatterns<'a> {
    /// Namespace declaration prefix, e.g. `package com.example.shop.`
    pub package_prefix: &'a str,
    /// Generic containers whose type argument is not a dependency
    pub extern_containers: &'a [String],
}

/// Everything extracted from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDeclarations {
    /// Group from the namespace declaration, if one was found
    pub group: Option<String>,
    /// Declarations in source order
    pub declarations: Vec<DeclarationRecord>,
}

/// Extract the group and declarations from Kotlin source text.
#[must_use]
pub fn extract(path: &Path, content: &str, patterns: &KotlinPatterns<'_>) -> FileDeclarations {
    let mut out = FileDeclarations::default();
    let mut header: Option<(String, Vec<String>)> = None;

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(patterns.package_prefix) {
            out.group = Some(group_segment(rest).to_string());
        } else if line.starts_with(INTERFACE_PREFIX) {
            if let Some(caps) = INTERFACE.captures(line) {
                push(&mut out, DeclarationRecord::interface(&caps[1], path));
            }
        } else if let Some((name, deps)) = header.as_mut() {
            if line.ends_with('{') {
                let name = std::mem::take(name);
                let deps = std::mem::take(deps);
                header = None;
                push(&mut out, DeclarationRecord::new(name, path, deps));
            } else if let Some(dep) = dependency_of(line, patterns.extern_containers) {
                deps.push(dep);
            }
        } else if let Some(caps) = INJECT_CLASS
            .captures(line)
            .or_else(|| OPEN_CLASS.captures(line))
        {
            header = Some((caps[1].to_string(), Vec::new()));
        }
    }

    if let Some((name, deps)) = header {
        push(&mut out, DeclarationRecord::new(name, path, deps));
    }
    out
}

fn push(out: &mut FileDeclarations, record: DeclarationRecord) {
    if !record.name.trim().is_empty() {
        out.declarations.push(record);
    }
}

/// First segment of the text following the package prefix.
fn group_segment(rest: &str) -> &str {
    rest.split('.').next().unwrap_or(rest)
}

/// Dependency type named on a constructor parameter line, if any.
///
/// `name: Type?` and `name: Type = default` yield `Type`; a qualified
/// `a.b.Type` becomes `a_b_Type`. `name: Container<Type>` yields `Type`
/// unless the container is listed as extern.
fn dependency_of(line: &str, extern_containers: &[String]) -> Option<String> {
    if line.starts_with("//") || line.starts_with(')') {
        return None;
    }
    let colon = line.find(':')?;
    let after = &line[colon + 1..];

    let dep = if let Some(lt) = after.find('<') {
        let container = after[..lt].trim();
        if extern_containers.iter().any(|c| c == container) {
            return None;
        }
        let inner = &after[lt + 1..];
        let end = inner.find('>').unwrap_or(inner.len());
        inner[..end].trim().to_string()
    } else {
        let end = after.find([',', '?', '=']).unwrap_or(after.len());
        after[..end].trim().replace('.', "_")
    };

    (!dep.is_empty()).then_some(dep)
}
