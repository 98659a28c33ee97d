use crate::Params;

use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
///
/// ```
/// use routetree::{InsertError, Router};
///
/// let mut router = Router::new();
/// router.insert("/user/:id", "user").unwrap();
///
/// // once a level has a parameter, nothing else may be added next to it
/// assert_eq!(
///     router.insert("/user/id", "other"),
///     Err(InsertError::Conflict {
///         segment: "id".into(),
///         with: ":id".into(),
///     })
/// );
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// Attempted to add a segment next to a parameter sibling, or a parameter
    /// whose bind-name collides with an existing sibling.
    #[error("conflict with existing route segment: {with} vs {segment}")]
    Conflict {
        /// The segment that was being inserted.
        segment: String,
        /// The existing sibling segment it collided with.
        with: String,
    },
}

/// A failed match attempt.
///
/// Both variants carry the parameters bound before the walk stopped.
///
/// ```
/// use routetree::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("/home", "Welcome!")?;
///
/// // no routes match
/// if let Err(err) = router.at("/foobar") {
///     assert!(matches!(err, MatchError::NotFound { .. }));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MatchError {
    /// No child at some level equals the current segment.
    #[error("route not found")]
    NotFound {
        /// The parameters bound before the failing segment.
        params: Params,
    },
    /// Every segment matched, but no value was registered at the final node.
    #[error("route found but no resource associated")]
    NoResource {
        /// The parameters bound during the walk.
        params: Params,
    },
}

impl MatchError {
    /// The parameters bound before the lookup failed.
    pub fn params(&self) -> &Params {
        match self {
            MatchError::NotFound { params } | MatchError::NoResource { params } => params,
        }
    }

    /// Consumes the error, returning the bound parameters.
    pub fn into_params(self) -> Params {
        match self {
            MatchError::NotFound { params } | MatchError::NoResource { params } => params,
        }
    }
}
