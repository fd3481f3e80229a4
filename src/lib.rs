//! # route-conf
//!
//! A declarative route-path builder. Define a tree of named, possibly
//! parameterized route definitions, in code or in TOML, and get back a
//! mirrored tree of resolved nodes that render the full path for any node,
//! substituting parameter placeholders with supplied argument values or
//! falling back to declared placeholder tokens (`:paramName`).
//!
//! This crate renders path strings only. It does not URL-encode, match
//! incoming paths, or dispatch requests.
//!
//! # Quick Start
//!
//! ```rust
//! use route_conf::{Result, Route, routes};
//!
//! fn main() -> Result<()> {
//!     let urls = routes([
//!         ("root", Route::fixed("/")),
//!         ("referral", Route::template("/referral/:referralId")),
//!         (
//!             "shop",
//!             Route::fixed("/shop")
//!                 .child("category", Route::template("/:categoryId"))
//!                 .child("coupons", Route::fixed("/coupons")),
//!         ),
//!     ])?;
//!
//!     assert_eq!(urls["referral"].get()?, "/referral/:referralId");
//!     assert_eq!(
//!         urls["referral"].get_with(&[("referralId", "1")].into())?,
//!         "/referral/1"
//!     );
//!     assert_eq!(urls["shop"]["coupons"].get()?, "/shop/coupons");
//!     Ok(())
//! }
//! ```
//!
//! Or declare the same table in TOML:
//!
//! ```rust
//! use route_conf::RouteMap;
//!
//! let urls = RouteMap::from_toml(r#"
//!     [routes.root]
//!     path = "/"
//!
//!     [routes.shop]
//!     path = "/shop"
//!
//!     [routes.shop.children.category]
//!     path = "/:categoryId"
//! "#).unwrap();
//!
//! assert_eq!(urls["shop"]["category"].get().unwrap(), "/shop/:categoryId");
//! ```
//!
//! # How Paths Resolve
//!
//! The tree is built once, eagerly. Each node's position in the path space is
//! fixed at build time from the *unparameterized* form of its ancestors'
//! fragments: building a node renders its fragment with declared defaults
//! only, and that string becomes the parent path handed to its children.
//! Calling [`Resolved::get_with`] later re-renders only that node's own
//! fragment with the caller's arguments merged over the declared defaults.
//! Ancestors keep their build-time form and descendants are untouched.
//!
//! # Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | `route` | Route definitions and fragment renderers ([`Route`]) |
//! | `tree` | Resolved trees and path rendering ([`RouteMap`], [`Resolved`]) |
//! | `params` | Argument and default maps ([`Params`]) |
//! | `config` | Declarative TOML route tables |
//! | `error` | Error types ([`Error`], [`ErrorKind`]) |
//!
//! # Error Handling
//!
//! The crate uses a custom [`Result`] type. A fragment renderer that fails
//! aborts the specific `get` call with the original error (or the entire
//! build, if it fails while the tree is being constructed). Nothing is
//! retried and sibling trees are unaffected.
//!
//! # Concurrency
//!
//! Everything is pure and synchronous. A built [`RouteMap`] is immutable and
//! `Send + Sync`; any number of threads may call `get` concurrently without
//! coordination.

mod config;
mod error;
mod params;
mod route;
mod tree;

pub use config::*;
pub use error::*;
pub use params::*;
pub use route::*;
pub use tree::*;

pub type Result<T> = std::result::Result<T, Error>;
