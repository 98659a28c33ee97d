//! A path-matching trie that maps `/`-separated paths to values.
//!
//! ```rust
//! use routetree::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.insert("/home", "Welcome!")?;
//! router.insert("/users/:id", "A User")?;
//!
//! let matched = router.at("/home")?;
//! assert_eq!(*matched.value, "Welcome!");
//! assert!(matched.params.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Paths
//!
//! A path is split on `/` into segments. One leading and one trailing `/`
//! are ignored, as are empty segments, so `/a//b/` and `a/b` are the same
//! path.
//!
//! A segment starting with `:` is a named parameter. Its bind-name is the
//! text after the `:`.
//!
//! ```text
//! Path: /users/:id
//! ```
//!
//! # Conflicts
//!
//! Children of a node are kept in insertion order. Once a node has a
//! parameter child, no other child may be added next to it:
//!
//! ```rust
//! use routetree::Router;
//!
//! let mut router = Router::new();
//! router.insert("/user/:id", 1).unwrap();
//!
//! assert!(router.insert("/user/id", 2).is_err());
//! assert!(router.insert("/user/:name", 3).is_err());
//! ```
//!
//! A parameter may not be added next to a literal with the same text as its
//! bind-name either, so `/user/:id` conflicts with an existing `/user/id`.
//!
//! # Matching
//!
//! By default lookups select a child only when its segment equals the path
//! segment exactly. Every parameter child scanned along the way binds its
//! name to the path segment, whether it is selected or not:
//!
//! ```rust
//! use routetree::{MatchError, Router};
//!
//! let mut router = Router::new();
//! router.insert("/user/:id", 1).unwrap();
//!
//! let matched = router.at("/user/:id").unwrap();
//! assert_eq!(matched.params.get("id"), Some(":id"));
//!
//! let err = router.at("/user/123").unwrap_err();
//! assert!(matches!(err, MatchError::NotFound { .. }));
//! assert_eq!(err.params().get("id"), Some("123"));
//! ```
//!
//! [`MatchMode::Capture`] lets a parameter child absorb any segment that no
//! literal sibling equals. See [`Config`].

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod router;
mod tree;

pub use error::{InsertError, MatchError};
pub use params::{Params, ParamsIter};
pub use path::{param_name, split, Segment, PARAM_MARKER, ROOT, SEPARATOR};
pub use router::{Config, MatchMode, Router, MAX_DUMP_DEPTH};
pub use tree::{Match, Node};
