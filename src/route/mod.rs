//! Route definitions: the declarative input side of the builder.
//!
//! A [`Route`] pairs a fragment renderer with its declared parameter
//! defaults and an ordered map of named children. Definitions are authored
//! once and handed to [`routes`](crate::routes) (or built from TOML via
//! [`RouteMap::from_toml`](crate::RouteMap::from_toml)), which transforms
//! them into the resolved, renderable tree.
//!
//! Three ways to author a fragment, from most to least general:
//!
//! ```rust
//! use route_conf::{Params, Result, Route};
//!
//! // A closure over the merged parameters.
//! let item = Route::new(|p: &Params| -> Result<String> {
//!     Ok(format!("/item/{}", p.require("itemId")?))
//! })
//! .defaults([("itemId", ":itemId")]);
//!
//! // A template string; placeholder defaults are derived automatically.
//! let item = Route::template("/item/:itemId");
//!
//! // A constant fragment.
//! let preview = Route::fixed("/preview");
//! ```

mod template;

pub use template::template_placeholders;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{Params, Result};

/// A fragment renderer: a pure function from merged parameters to this
/// node's own path fragment, excluding ancestors.
pub type FragmentFn = dyn Fn(&Params) -> Result<String> + Send + Sync;

/// One node of a declarative route definition tree.
///
/// A definition holds a fragment renderer, the declared defaults that apply
/// when a caller omits an argument, and named child definitions. The tree is
/// inert until resolved by [`routes`](crate::routes).
#[derive(Clone)]
pub struct Route {
    pub(crate) render: Arc<FragmentFn>,
    pub(crate) defaults: Params,
    pub(crate) children: BTreeMap<String, Route>,
}

impl Route {
    /// Creates a definition from a fragment renderer.
    ///
    /// The renderer receives the caller's arguments already merged over the
    /// declared defaults, so it can reference any declared parameter
    /// unconditionally. [`Params::require`] turns a reference to an
    /// undeclared, unsupplied parameter into a segment evaluation error.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Params) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            defaults: Params::new(),
            children: BTreeMap::new(),
        }
    }

    /// Creates a definition whose fragment is a constant string.
    ///
    /// ```rust
    /// use route_conf::Route;
    ///
    /// let shop = Route::fixed("/shop");
    /// ```
    pub fn fixed(fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        Self::new(move |_| Ok(fragment.clone()))
    }

    /// Creates a definition from a template string with `:name` placeholders.
    ///
    /// Every placeholder is declared as a parameter whose default is its own
    /// token, so the unparameterized render returns the template verbatim:
    ///
    /// ```rust
    /// use route_conf::{Params, Route, routes};
    ///
    /// let urls = routes([("referral", Route::template("/referral/:referralId"))]).unwrap();
    /// assert_eq!(urls["referral"].get().unwrap(), "/referral/:referralId");
    /// assert_eq!(
    ///     urls["referral"].get_with(&Params::from([("referralId", "1")])).unwrap(),
    ///     "/referral/1"
    /// );
    /// ```
    pub fn template(template: impl Into<String>) -> Self {
        let (render, defaults) = template::compile(template.into());
        Self {
            render,
            defaults,
            children: BTreeMap::new(),
        }
    }

    /// Declares default parameter values, merged over any already declared.
    ///
    /// For template routes this overrides the auto-derived placeholder
    /// tokens field by field; placeholders not named here keep their tokens.
    #[must_use]
    pub fn defaults(mut self, defaults: impl Into<Params>) -> Self {
        self.defaults = defaults.into().merged_over(&self.defaults);
        self
    }

    /// Attaches a named child definition.
    #[must_use]
    pub fn child(mut self, name: impl Into<String>, child: Route) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Returns the declared defaults.
    pub fn declared_defaults(&self) -> &Params {
        &self.defaults
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("defaults", &self.defaults)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Constructs a route definition from a fragment renderer.
///
/// Free-function spelling of [`Route::new`], convenient when declaring whole
/// tables inline:
///
/// ```rust
/// use route_conf::{route, routes};
///
/// let urls = routes([("root", route(|_| Ok("/".to_string())))]).unwrap();
/// assert_eq!(urls["root"].get().unwrap(), "/");
/// ```
pub fn route<F>(render: F) -> Route
where
    F: Fn(&Params) -> Result<String> + Send + Sync + 'static,
{
    Route::new(render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_renders_constant() {
        let def = Route::fixed("/shop");
        assert_eq!((def.render)(&Params::new()).unwrap(), "/shop");
    }

    #[test]
    fn test_closure_sees_merged_defaults() {
        let def = Route::new(|p: &Params| Ok(format!("/item/{}", p.require("itemId")?)))
            .defaults([("itemId", ":itemId")]);
        let merged = Params::new().merged_over(&def.defaults);
        assert_eq!((def.render)(&merged).unwrap(), "/item/:itemId");
    }

    #[test]
    fn test_defaults_merge_over_existing() {
        let def = Route::template("/item/:itemId/:variantId").defaults([("itemId", "42")]);
        assert_eq!(def.declared_defaults().get("itemId"), Some("42"));
        assert_eq!(def.declared_defaults().get("variantId"), Some(":variantId"));
    }

    #[test]
    fn test_children_are_name_ordered() {
        let def = Route::fixed("/shop")
            .child("coupons", Route::fixed("/coupons"))
            .child("category", Route::template("/:categoryId"));
        let names: Vec<&String> = def.children.keys().collect();
        assert_eq!(names, vec!["category", "coupons"]);
    }

    #[test]
    fn test_route_free_fn() {
        let def = route(|_| Ok("/register".to_string()));
        assert_eq!((def.render)(&Params::new()).unwrap(), "/register");
    }

    #[test]
    fn test_debug_does_not_require_renderer_debug() {
        let def = Route::template("/:id").child("leaf", Route::fixed("/leaf"));
        let rendered = format!("{def:?}");
        assert!(rendered.contains("defaults"));
        assert!(rendered.contains("leaf"));
    }
}
