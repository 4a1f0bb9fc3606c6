//! # Hash Router
//!
//! Client-side route matching and location tracking for single-page apps:
//!
//! - **Pattern Compilation** - `/users/:id/*` compiled once into tagged segments
//! - **Segment Matching** - literal, param and trailing wildcard segments
//! - **Location Sources** - hash-based and in-memory, with RAII subscriptions
//! - **Scoped Routers** - built lazily, once per scope, never global
//! - **Routes & Switch** - first-match selection over ordered routes
//! - **Links** - plain clicks navigate, modified clicks stay with the platform
//!
//! # Quick Start
//!
//! ```
//! use hash_router::{HashLocation, Link, Activation, RouterOptions, RouterScope};
//!
//! let scope = RouterScope::with_options(
//!     RouterOptions::new()
//!         .source(|| HashLocation::with_address("https://example.com/#/users/42"))
//!         .base("#"),
//! );
//! let router = scope.router();
//!
//! let user = router.route("/users/:id");
//! assert_eq!(user.get("id"), Some("42"));
//!
//! let home = Link::new("/");
//! assert_eq!(home.href(router), "#/");
//! assert!(home.activate(router, &mut Activation::primary()));
//! assert_eq!(router.current(), "/");
//! ```
//!
//! # Pattern Grammar
//!
//! | Segment | Meaning |
//! |---------|---------|
//! | `users` | must equal the path segment exactly |
//! | `:id`   | captures one path segment as `id` |
//! | `*`     | last segment only: captures the rest of the path under [`REST_PARAM`] |
//!
//! Leading and trailing slashes are ignored. A `*` that is not last is
//! matched as literal text. Matching with no pattern always succeeds.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `cache` (default) - LRU cache of compiled patterns

#![cfg_attr(docsrs, feature(doc_cfg))]

// Logging abstraction
pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;

// Core matching
pub mod matcher;
pub mod params;
pub mod pattern;

// Location tracking and routing
pub mod link;
pub mod location;
pub mod route;
pub mod router;
pub mod scope;

pub mod error;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, PatternCache};
pub use error::ParamError;
pub use link::{Activation, Link, Modifiers, MouseButton};
pub use location::{
    hash_for, location_from_hash, HashLocation, Listener, ListenerSet, Location, LocationSource,
    MemoryLocation, Subscription,
};
pub use matcher::{match_compiled, MatchResult, Matcher, SegmentMatcher};
pub use params::RouteParams;
pub use pattern::{split_segments, CompiledPattern, Segment, PARAM_MARKER, REST_PARAM, WILDCARD};
pub use route::{Route, RouteBuilder, Switch};
pub use router::{Navigator, Router, RouterOptions};
pub use scope::{RouterScope, ScopeRegistry};
