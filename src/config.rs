//! Declarative TOML route tables.
//!
//! A route tree can be declared entirely in TOML instead of code. Every
//! table under `[routes]` is a node with a `path` template, optional
//! `defaults` overriding the auto-derived placeholder tokens, and nested
//! `children` tables:
//!
//! ```toml
//! [routes.shop]
//! path = "/shop"
//!
//! [routes.shop.children.category]
//! path = "/:categoryId"
//! defaults = { categoryId = "all" }
//! ```
//!
//! Environment variables can be referenced in the TOML using the
//! `{{ VAR_NAME }}` syntax and are substituted before parsing, so
//! deployment-specific prefixes never have to live in the file itself.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::{Error, Params, Result, Route, RouteMap};

/// Matches handlebars-style environment variable references like
/// `{{ VAR_NAME }}`, with optional whitespace around the name. Names must be
/// uppercase letters, digits, or underscores (standard env var naming).
static HANDLEBAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Z0-9_]+)\s*\}\}").unwrap());

/// Replaces `{{ VAR_NAME }}` references with environment variable values.
///
/// A variable that is not set substitutes as an empty string and logs a
/// warning.
///
/// ```rust
/// use route_conf::replace_handlebars_with_env;
///
/// let out = replace_handlebars_with_env("prefix: {{ NOT_SET_ANYWHERE_12345 }}");
/// assert_eq!(out, "prefix: ");
/// ```
pub fn replace_handlebars_with_env(input: &str) -> String {
    HANDLEBAR
        .replace_all(input, |caps: &Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!(
                    variable = %var_name,
                    "environment variable not found, substituting with empty string"
                );
                String::new()
            })
        })
        .to_string()
}

// ============================================================================
// TOML schema
// ============================================================================

#[derive(Debug, Deserialize)]
struct RouteTable {
    #[serde(default)]
    routes: BTreeMap<String, RouteSpec>,
}

/// One declared node: a path template, optional default overrides, nested
/// children.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteSpec {
    path: String,
    #[serde(default)]
    defaults: BTreeMap<String, String>,
    #[serde(default)]
    children: BTreeMap<String, RouteSpec>,
}

impl RouteSpec {
    /// Converts a declared node into a [`Route`] definition. `name` is the
    /// dotted position in the table, used only for error messages.
    fn into_route(self, name: &str) -> Result<Route> {
        if self.path.trim().is_empty() {
            return Err(Error::config(format!(
                "route `{name}` has an empty path template"
            )));
        }

        let mut route = Route::template(&self.path);
        if !self.defaults.is_empty() {
            route = route.defaults(Params::from_iter(self.defaults));
        }
        for (child_name, child_spec) in self.children {
            let dotted = format!("{name}.{child_name}");
            let child = child_spec.into_route(&dotted)?;
            route = route.child(child_name, child);
        }
        Ok(route)
    }
}

// ============================================================================
// Loading
// ============================================================================

impl RouteMap {
    /// Builds a route map from a TOML route table.
    ///
    /// `{{ VAR_NAME }}` references are substituted from the environment
    /// before parsing. Invalid TOML, unknown keys, and empty `path`
    /// templates raise a configuration error.
    ///
    /// ```rust
    /// use route_conf::RouteMap;
    ///
    /// let urls = RouteMap::from_toml(r#"
    ///     [routes.referral]
    ///     path = "/referral/:referralId"
    /// "#).unwrap();
    ///
    /// assert_eq!(urls["referral"].get().unwrap(), "/referral/:referralId");
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let substituted = replace_handlebars_with_env(text);
        let table: RouteTable = toml::from_str(&substituted)?;

        let mut definitions = Vec::with_capacity(table.routes.len());
        for (name, spec) in table.routes {
            let route = spec.into_route(&name)?;
            definitions.push((name, route));
        }
        RouteMap::from_definitions(definitions)
    }

    /// Builds a route map from a TOML file on disk.
    ///
    /// An unreadable file raises a configuration error.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::config(format!(
                "cannot read route table `{}`: {err}",
                path.display()
            ))
        })?;
        Self::from_toml(&text)
    }
}

// ============================================================================
// Tests
// ============================================================================
