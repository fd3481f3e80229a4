//! Argument and default-value maps for parameterized route fragments.
//!
//! A [`Params`] value serves two roles. Attached to a route definition it
//! declares the *defaults*: one placeholder token per parameter, by
//! convention the parameter name prefixed with `:` (so `referralId` defaults
//! to `":referralId"`). Passed to [`Resolved::get_with`](crate::Resolved::get_with)
//! it carries the caller's *arguments* for a single render.
//!
//! Before a fragment renderer runs, the caller's arguments are merged over
//! the declared defaults field by field with [`Params::merged_over`]. A
//! parameter the caller omits therefore renders its declared token, and
//! fields the renderer never looks at are simply ignored.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// An ordered map of parameter name to string value.
///
/// Iteration order is the lexicographic order of parameter names, which
/// keeps rendered output and debug listings deterministic.
///
/// # Examples
///
/// ```rust
/// use route_conf::Params;
///
/// let defaults = Params::from([("categoryId", ":categoryId")]);
/// let args = Params::new().with("categoryId", "memes");
///
/// let merged = args.merged_over(&defaults);
/// assert_eq!(merged.get("categoryId"), Some("memes"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, consuming and returning the map for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Inserts a parameter, replacing any existing value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value of a parameter, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value of a parameter, or a segment evaluation error if
    /// the map does not contain it.
    ///
    /// Intended for use inside fragment renderers that have no sensible
    /// fallback for a missing field:
    ///
    /// ```rust
    /// use route_conf::{Params, Result, Route};
    ///
    /// let strict = Route::new(|p: &Params| -> Result<String> {
    ///     Ok(format!("/orders/{}", p.require("orderId")?))
    /// });
    /// ```
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| Error::missing_parameter(name))
    }

    /// Returns true if the map contains no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a new map containing `defaults` with every field of `self`
    /// written over it.
    ///
    /// This is the explicit fallback policy of the crate: fields present in
    /// `self` win, fields present only in `defaults` survive, and nothing
    /// else changes. Unknown fields in `self` are carried through and
    /// ignored by renderers that do not reference them.
    pub fn merged_over(&self, defaults: &Params) -> Params {
        let mut merged = defaults.clone();
        for (name, value) in &self.0 {
            merged.0.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
