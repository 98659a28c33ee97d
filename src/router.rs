use crate::tree::{Match, Node};
use crate::{InsertError, MatchError};

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// The deepest tree [`Router::dump`] will serialize, counting the root.
pub const MAX_DUMP_DEPTH: usize = 256;

/// How a lookup selects the child to descend into at each level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A child is selected only when its segment equals the path segment.
    ///
    /// Every parameter child scanned before the selected one binds its name
    /// to the path segment, so a route registered as `/user/:id` is only
    /// reachable through the literal path `/user/:id`.
    #[default]
    Literal,
    /// A child whose segment equals the path segment is preferred. Otherwise
    /// the parameter child, if any, is selected and only it binds.
    Capture,
}

/// Router configuration.
///
/// ```rust
/// use routetree::{Config, MatchMode, Router};
///
/// let mut router = Router::with_config(Config {
///     match_mode: MatchMode::Capture,
///     ..Config::default()
/// });
/// router.insert("/user/:id", "user").unwrap();
///
/// let matched = router.at("/user/42").unwrap();
/// assert_eq!(matched.params.get("id"), Some("42"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The child selection rule used by lookups.
    pub match_mode: MatchMode,

    /// Indents the output of [`Router::dump`].
    pub pretty_dump: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Literal,
            pretty_dump: true,
        }
    }
}

/// A path router that maps `/`-separated paths to values.
///
/// Segments starting with `:` are named parameters.
///
/// ```rust
/// use routetree::Router;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("/home", "Welcome!")?;
/// router.insert("/users/:id", "A User")?;
///
/// let matched = router.at("/users/:id")?;
/// assert_eq!(matched.params.get("id"), Some(":id"));
/// assert_eq!(*matched.value, "A User");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router<T> {
    root: Node<T>,
    config: Config,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> Router<T> {
    /// Construct a new, empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new, empty router with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::root(),
            config,
        }
    }

    /// The configuration this router was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The root node of the route tree.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Insert a route into the router.
    ///
    /// Inserting a literal path that is already registered replaces its value.
    ///
    /// ```rust
    /// # use routetree::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/home", "Welcome!")?;
    /// router.insert("/users/:id", "A User")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, route: impl Into<String>, value: T) -> Result<(), InsertError> {
        let route = route.into();

        match self.root.insert(&route, value) {
            Ok(()) => {
                debug!("registered route {}", route);
                Ok(())
            }
            Err(err) => {
                debug!("rejected route {}: {}", route, err);
                Err(err)
            }
        }
    }

    /// Tries to find a value in the router matching the given path.
    ///
    /// ```rust
    /// # use routetree::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/home", "Welcome!")?;
    ///
    /// let matched = router.at("/home").unwrap();
    /// assert_eq!(*matched.value, "Welcome!");
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&self, path: &str) -> Result<Match<&T>, MatchError> {
        self.root.at(path, self.config.match_mode)
    }

    /// Tries to find a value in the router matching the given path,
    /// returning a mutable reference.
    ///
    /// ```rust
    /// # use routetree::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/", 1)?;
    ///
    /// *router.at_mut("/")?.value += 1;
    /// assert_eq!(*router.at("/")?.value, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn at_mut(&mut self, path: &str) -> Result<Match<&mut T>, MatchError> {
        self.root.at_mut(path, self.config.match_mode)
    }

    /// Merge a given router into current one.
    ///
    /// Routes are re-inserted in the order a pre-order walk of `other` visits
    /// them. Returns the first conflict; routes after it are not merged.
    ///
    /// ```rust
    /// # use routetree::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut root = Router::new();
    /// root.insert("/home", "Welcome!")?;
    ///
    /// let mut child = Router::new();
    /// child.insert("/users/:id", "A User")?;
    ///
    /// root.merge(child)?;
    /// assert!(root.at("/users/:id").is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, other: Self) -> Result<(), InsertError> {
        for (route, value) in other.root.into_routes() {
            self.insert(route, value)?;
        }

        Ok(())
    }

    /// Writes a JSON rendering of the route tree to `writer`.
    ///
    /// Serialization recurses once per tree level, so trees deeper than
    /// [`MAX_DUMP_DEPTH`] are not written. That case and write failures are
    /// logged and otherwise ignored.
    pub fn dump<W: Write>(&self, mut writer: W)
    where
        T: Serialize,
    {
        let depth = self.root.depth();
        if depth > MAX_DUMP_DEPTH {
            warn!(
                "route tree is {} levels deep, refusing to dump more than {}",
                depth, MAX_DUMP_DEPTH
            );
            return;
        }

        let result = if self.config.pretty_dump {
            serde_json::to_writer_pretty(&mut writer, &self.root)
        } else {
            serde_json::to_writer(&mut writer, &self.root)
        };

        let result = result
            .map_err(io::Error::from)
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush());

        if let Err(err) = result {
            warn!("failed to dump route tree: {}", err);
        }
    }
}
