/// The path separator.
pub const SEPARATOR: char = '/';

/// The marker character that turns a segment into a named parameter.
pub const PARAM_MARKER: char = ':';

/// The token that every split path starts with.
pub const ROOT: &str = "/";

/// Splits a raw path into its segment tokens.
///
/// The returned sequence always begins with the [`ROOT`] token. One leading
/// and one trailing separator are stripped, and empty segments produced by
/// repeated separators are discarded.
///
/// ```rust
/// use routetree::split;
///
/// assert_eq!(split(""), ["/"]);
/// assert_eq!(split("/user/:id/"), ["/", "user", ":id"]);
/// assert_eq!(split("a//b"), ["/", "a", "b"]);
/// ```
pub fn split(path: &str) -> Vec<&str> {
    if path.is_empty() || path == ROOT {
        return vec![ROOT];
    }

    let path = path.strip_prefix(SEPARATOR).unwrap_or(path);
    let path = path.strip_suffix(SEPARATOR).unwrap_or(path);

    let mut tokens = vec![ROOT];
    tokens.extend(path.split(SEPARATOR).filter(|segment| !segment.is_empty()));
    tokens
}

/// The classification of a single segment token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A segment matched by exact string equality.
    Literal(&'a str),
    /// A named parameter, holding the bind-name with the marker stripped.
    Param(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a token as a literal or a named parameter.
    pub fn classify(token: &'a str) -> Segment<'a> {
        match param_name(token) {
            Some(name) => Segment::Param(name),
            None => Segment::Literal(token),
        }
    }

    /// Returns `true` if this segment is a named parameter.
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }

    /// The token with its parameter marker stripped, if any.
    pub fn name(&self) -> &'a str {
        match *self {
            Segment::Literal(name) | Segment::Param(name) => name,
        }
    }

    /// Returns `true` if a new sibling with this segment may not be added next
    /// to `existing`.
    ///
    /// A parameter sibling blocks everything. Otherwise a parameter token is
    /// rejected when its bind-name equals the existing segment's text.
    pub fn conflicts_with(&self, existing: &Segment<'_>) -> bool {
        if !self.is_param() && !existing.is_param() {
            return false;
        }

        self.name() == existing.name() || existing.is_param()
    }
}

/// Returns the bind-name of a parameter token, or `None` for a literal.
pub fn param_name(token: &str) -> Option<&str> {
    token.strip_prefix(PARAM_MARKER)
}
