//! Resolved route trees and path rendering.
//!
//! [`routes`] transforms a named set of [`Route`] definitions into a
//! [`RouteMap`] of [`Resolved`] nodes. Resolution is eager: every node's
//! fragment is rendered once with its declared defaults, and that
//! unparameterized form becomes the parent path its children are joined
//! onto. After construction the tree is immutable; to change routes, build a
//! new map from a new definition tree.
//!
//! Rendering a path later with [`Resolved::get_with`] re-renders only that
//! node's own fragment. Arguments never reach ancestors (their fragments
//! were fixed at build time) or descendants (they render independently when
//! their own `get` runs).

use std::collections::BTreeMap;
use std::ops::Index;
use std::sync::Arc;

use crate::route::FragmentFn;
use crate::{Params, Result, Route};

// ============================================================================
// Path joining
// ============================================================================

/// Joins a parent path and a fragment with `/`, normalizing the result:
/// duplicate separators collapse, trailing separators drop, and the empty
/// path renders as `/`.
///
/// Fragments may be written with or without a leading slash; `"/shop"`
/// joined with either `"/coupons"` or `"coupons"` yields `"/shop/coupons"`.
pub(crate) fn join_paths(parent: &str, fragment: &str) -> String {
    let segments: Vec<&str> = parent
        .split('/')
        .chain(fragment.split('/'))
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + fragment.len() + 1);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

// ============================================================================
// Resolved nodes
// ============================================================================

/// One node of a built route tree.
///
/// A resolved node owns the fully-resolved path of its ancestors as a plain
/// string, a shared handle to its fragment renderer, its declared defaults,
/// and its resolved children. It is immutable and safe to share across
/// threads.
///
/// Child nodes are reached by name:
///
/// ```rust
/// use route_conf::{Route, routes};
///
/// let urls = routes([(
///     "shop",
///     Route::fixed("/shop").child("coupons", Route::fixed("/coupons")),
/// )])
/// .unwrap();
///
/// assert_eq!(urls["shop"]["coupons"].get().unwrap(), "/shop/coupons");
/// assert!(urls["shop"].child("missing").is_none());
/// ```
pub struct Resolved {
    parent_path: String,
    render: Arc<FragmentFn>,
    defaults: Params,
    children: BTreeMap<String, Resolved>,
}

impl Resolved {
    /// Builds one node and, recursively, its children.
    ///
    /// The node's own fragment is rendered here with defaults only; the
    /// joined result seeds the children's parent path. A renderer failure
    /// aborts the whole build with the original error.
    pub(crate) fn build(definition: &Route, parent_path: &str, name: &str) -> Result<Self> {
        let own_fragment = (definition.render)(&definition.defaults)?;
        let full_path = join_paths(parent_path, &own_fragment);
        tracing::debug!(route = name, path = %full_path, "resolved route");

        let mut children = BTreeMap::new();
        for (child_name, child_definition) in &definition.children {
            children.insert(
                child_name.clone(),
                Resolved::build(child_definition, &full_path, child_name)?,
            );
        }

        Ok(Self {
            parent_path: parent_path.to_string(),
            render: Arc::clone(&definition.render),
            defaults: definition.defaults.clone(),
            children,
        })
    }

    /// Renders the full path from the root to this node using declared
    /// defaults only.
    ///
    /// Parameterized fragments render their placeholder tokens:
    ///
    /// ```rust
    /// use route_conf::{Route, routes};
    ///
    /// let urls = routes([("referral", Route::template("/referral/:referralId"))]).unwrap();
    /// assert_eq!(urls["referral"].get().unwrap(), "/referral/:referralId");
    /// ```
    pub fn get(&self) -> Result<String> {
        self.get_with(&Params::new())
    }

    /// Renders the full path from the root to this node, merging `args` over
    /// the declared defaults before rendering this node's own fragment.
    ///
    /// Arguments apply to this node only. Parameters omitted from `args`
    /// fall back to their declared defaults, and fields this node's renderer
    /// never references are ignored, so passing an irrelevant args map is
    /// identical to passing none:
    ///
    /// ```rust
    /// use route_conf::{Params, Route, routes};
    ///
    /// let urls = routes([("root", Route::fixed("/"))]).unwrap();
    /// let args = Params::from([("dummy", "dummy")]);
    /// assert_eq!(urls["root"].get_with(&args).unwrap(), "/");
    /// ```
    pub fn get_with(&self, args: &Params) -> Result<String> {
        let merged = args.merged_over(&self.defaults);
        let own_fragment = (self.render)(&merged)?;
        let path = join_paths(&self.parent_path, &own_fragment);
        tracing::trace!(path = %path, "rendered route path");
        Ok(path)
    }

    /// Returns the named child node, if present.
    pub fn child(&self, name: &str) -> Option<&Resolved> {
        self.children.get(name)
    }

    /// Iterates over `(name, node)` child pairs in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Resolved)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Index<&str> for Resolved {
    type Output = Resolved;

    /// Returns the named child node.
    ///
    /// # Panics
    ///
    /// Panics if no child with that name exists. Use [`Resolved::child`] for
    /// a fallible lookup.
    fn index(&self, name: &str) -> &Resolved {
        self.children
            .get(name)
            .unwrap_or_else(|| panic!("no child route named `{name}`"))
    }
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("parent_path", &self.parent_path)
            .field("defaults", &self.defaults)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RouteMap
// ============================================================================

/// A named set of independent resolved route trees.
///
/// Each entry is its own root, built with an empty parent-path accumulator.
/// Built once, read forever; see [`routes`] and
/// [`RouteMap::from_toml`](crate::RouteMap::from_toml).
#[derive(Debug)]
pub struct RouteMap {
    roots: BTreeMap<String, Resolved>,
}

impl RouteMap {
    pub(crate) fn from_definitions<I, K>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Route)>,
        K: Into<String>,
    {
        let mut roots = BTreeMap::new();
        for (name, definition) in definitions {
            let name = name.into();
            let resolved = Resolved::build(&definition, "", &name)?;
            roots.insert(name, resolved);
        }
        Ok(Self { roots })
    }

    /// Returns the named top-level tree, if present.
    pub fn get(&self, name: &str) -> Option<&Resolved> {
        self.roots.get(name)
    }

    /// Iterates over `(name, root)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resolved)> {
        self.roots.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of top-level trees.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the map holds no trees.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl Index<&str> for RouteMap {
    type Output = Resolved;

    /// Returns the named top-level tree.
    ///
    /// # Panics
    ///
    /// Panics if no tree with that name exists. Use [`RouteMap::get`] for a
    /// fallible lookup.
    fn index(&self, name: &str) -> &Resolved {
        self.roots
            .get(name)
            .unwrap_or_else(|| panic!("no route named `{name}`"))
    }
}

/// Builds a named set of independent route trees.
///
/// Each definition becomes its own root. A renderer failing during
/// construction aborts the whole call; trees built by other `routes` calls
/// are unaffected.
///
/// ```rust
/// use route_conf::{Route, routes};
///
/// let urls = routes([
///     ("root", Route::fixed("/")),
///     ("register", Route::fixed("/register")),
/// ])
/// .unwrap();
///
/// assert_eq!(urls["root"].get().unwrap(), "/");
/// assert_eq!(urls["register"].get().unwrap(), "/register");
/// ```
pub fn routes<I, K>(tree: I) -> Result<RouteMap>
where
    I: IntoIterator<Item = (K, Route)>,
    K: Into<String>,
{
    RouteMap::from_definitions(tree)
}

// ============================================================================
// Introspection
// ============================================================================

/// Renders every node's zero-argument path, keyed by dotted node names.
///
/// Read-only diagnostics: nothing in the map is mutated. Keys are the
/// top-level name followed by child names joined with `.`, sorted.
///
/// ```rust
/// use route_conf::{Route, debug_route_map, routes};
///
/// let urls = routes([(
///     "shop",
///     Route::fixed("/shop").child("category", Route::template("/:categoryId")),
/// )])
/// .unwrap();
///
/// let listing = debug_route_map(&urls).unwrap();
/// assert_eq!(listing["shop"], "/shop");
/// assert_eq!(listing["shop.category"], "/shop/:categoryId");
/// ```
pub fn debug_route_map(map: &RouteMap) -> Result<BTreeMap<String, String>> {
    fn walk(node: &Resolved, name: &str, out: &mut BTreeMap<String, String>) -> Result<()> {
        out.insert(name.to_string(), node.get()?);
        for (child_name, child) in node.children() {
            walk(child, &format!("{name}.{child_name}"), out)?;
        }
        Ok(())
    }

    let mut out = BTreeMap::new();
    for (name, root) in map.iter() {
        walk(root, name, &mut out)?;
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
