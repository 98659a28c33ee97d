use std::{fmt, iter, mem, slice};

/// A single path parameter, consisting of a bind-name and a value.
#[derive(PartialEq, Eq, Default, Clone)]
struct Param {
    key: String,
    value: String,
}

impl Param {
    const EMPTY: Param = Param {
        key: String::new(),
        value: String::new(),
    };
}

/// The parameters bound during a lookup.
///
/// Parameters are kept in the order their names were first bound. Binding a
/// name that is already present replaces its value in place.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = routetree::Router::new();
/// # router.insert("/users/:id", true)?;
/// let matched = router.at("/users/:id")?;
///
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// assert_eq!(matched.params.get("id"), Some(":id"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Params {
    kind: ParamsKind,
}

// Most paths bind only a handful of parameters.
const SMALL: usize = 3;

#[derive(Clone)]
enum ParamsKind {
    Small([Param; SMALL], usize),
    Large(Vec<Param>),
}

impl Params {
    pub(crate) fn new() -> Self {
        Self {
            kind: ParamsKind::Small([Param::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns `true` if no parameter was bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value bound to the given name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.slice()
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the bound names and values.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.slice().iter(),
        }
    }

    fn slice(&self) -> &[Param] {
        match &self.kind {
            ParamsKind::Small(arr, len) => &arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    fn slice_mut(&mut self) -> &mut [Param] {
        match &mut self.kind {
            ParamsKind::Small(arr, len) => &mut arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    /// Binds `key` to `value`, replacing any earlier binding of `key`.
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        #[cold]
        fn drain_to_vec(len: usize, elem: Param, arr: &mut [Param; SMALL]) -> Vec<Param> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        if let Some(param) = self.slice_mut().iter_mut().find(|param| param.key == key) {
            param.value.clear();
            param.value.push_str(value);
            return;
        }

        let param = Param {
            key: key.to_owned(),
            value: value.to_owned(),
        };

        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.slice() == other.slice()
    }
}

impl Eq for Params {}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'ps> IntoIterator for &'ps Params {
    type Item = (&'ps str, &'ps str);
    type IntoIter = ParamsIter<'ps>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the names and values of bound [parameters](crate::Params).
pub struct ParamsIter<'ps> {
    inner: slice::Iter<'ps, Param>,
}

impl<'ps> Iterator for ParamsIter<'ps> {
    type Item = (&'ps str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {}

impl iter::FusedIterator for ParamsIter<'_> {}
