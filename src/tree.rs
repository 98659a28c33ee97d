use crate::path::{self, Segment};
use crate::{InsertError, MatchError, MatchMode, Params};

use serde::Serialize;
use std::{fmt, mem};

/// A node in the route tree.
///
/// Each node matches one path segment. Children are kept in insertion order
/// and are never reordered, so lookups always scan them in that order.
///
/// Walks over the tree use an explicit stack, so a route with any number of
/// segments can be cloned, merged and dropped. Serialization recurses once
/// per level; see [`Router::dump`](crate::Router::dump).
#[derive(Serialize)]
pub struct Node<T> {
    #[serde(rename = "Resource")]
    value: Option<T>,
    #[serde(rename = "IsQueryParam")]
    is_param: bool,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Nodes")]
    children: Vec<Node<T>>,
}

/// A successful match consisting of the registered value
/// and the parameters bound along the way.
#[derive(Debug)]
pub struct Match<V> {
    /// The value stored under the matched node.
    pub value: V,
    /// The parameters bound during the walk.
    pub params: Params,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Node::new(path::ROOT)
    }

    fn new(segment: &str) -> Self {
        Node {
            value: None,
            is_param: Segment::classify(segment).is_param(),
            segment: segment.to_owned(),
            children: Vec::new(),
        }
    }

    /// The literal text or parameter token this node matches.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns `true` if this node's segment is a named parameter.
    pub fn is_param(&self) -> bool {
        self.is_param
    }

    /// The value registered at this node, if a path terminates here.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The children of this node, in insertion order.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    // The bind-name of this node, if it is a parameter.
    fn param_name(&self) -> Option<&str> {
        if self.is_param {
            path::param_name(&self.segment)
        } else {
            None
        }
    }

    /// Registers `value` under `route`.
    ///
    /// Nodes created for earlier segments are kept if a later segment
    /// conflicts.
    pub(crate) fn insert(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        let mut current = self;

        for token in path::split(route) {
            let index = match current.find_child(token)? {
                Some(index) => index,
                None => {
                    current.children.push(Node::new(token));
                    current.children.len() - 1
                }
            };

            current = &mut current.children[index];
        }

        // a repeated registration overwrites the previous value
        current.value = Some(value);
        Ok(())
    }

    // Finds the child equal to `token`, checking every sibling scanned on the
    // way for a conflict.
    fn find_child(&self, token: &str) -> Result<Option<usize>, InsertError> {
        let incoming = Segment::classify(token);

        for (index, child) in self.children.iter().enumerate() {
            if incoming.conflicts_with(&Segment::classify(&child.segment)) {
                return Err(InsertError::Conflict {
                    segment: token.to_owned(),
                    with: child.segment.clone(),
                });
            }

            if child.segment == token {
                return Ok(Some(index));
            }
        }

        Ok(None)
    }

    /// Tries to find a value in the tree that matches `path`.
    pub(crate) fn at(&self, path: &str, mode: MatchMode) -> Result<Match<&T>, MatchError> {
        let mut current = self;
        let mut params = Params::new();

        for token in path::split(path) {
            match current.select(token, mode, &mut params) {
                Some(index) => current = &current.children[index],
                None => return Err(MatchError::NotFound { params }),
            }
        }

        match current.value.as_ref() {
            Some(value) => Ok(Match { value, params }),
            None => Err(MatchError::NoResource { params }),
        }
    }

    /// Tries to find a value in the tree that matches `path`, returning a
    /// mutable reference to it.
    pub(crate) fn at_mut(
        &mut self,
        path: &str,
        mode: MatchMode,
    ) -> Result<Match<&mut T>, MatchError> {
        let mut current = self;
        let mut params = Params::new();

        for token in path::split(path) {
            match current.select(token, mode, &mut params) {
                Some(index) => current = &mut current.children[index],
                None => return Err(MatchError::NotFound { params }),
            }
        }

        match current.value.as_mut() {
            Some(value) => Ok(Match { value, params }),
            None => Err(MatchError::NoResource { params }),
        }
    }

    // Picks the child to descend into for `token`, binding parameters into
    // `params` as the mode dictates.
    fn select(&self, token: &str, mode: MatchMode, params: &mut Params) -> Option<usize> {
        match mode {
            MatchMode::Literal => {
                for (index, child) in self.children.iter().enumerate() {
                    // every parameter scanned binds, selected or not
                    if let Some(name) = child.param_name() {
                        params.insert(name, token);
                    }

                    if child.segment == token {
                        trace!("segment {:?} matched", token);
                        return Some(index);
                    }
                }

                trace!("no child of {:?} equals {:?}", self.segment, token);
                None
            }
            MatchMode::Capture => {
                let index = self
                    .children
                    .iter()
                    .position(|child| child.segment == token)
                    .or_else(|| self.children.iter().position(|child| child.is_param))?;

                if let Some(name) = self.children[index].param_name() {
                    params.insert(name, token);
                }

                trace!("segment {:?} selected {:?}", token, self.children[index].segment);
                Some(index)
            }
        }
    }

    /// Consumes the tree, returning every registered route in the order a
    /// pre-order walk visits it.
    pub(crate) fn into_routes(mut self) -> Vec<(String, T)> {
        let mut routes = Vec::new();
        let mut tokens = Vec::new();

        // `None` marks the point where a node's subtree is finished
        let mut stack = mem::take(&mut self.children)
            .into_iter()
            .rev()
            .map(Some)
            .collect::<Vec<_>>();

        while let Some(entry) = stack.pop() {
            let mut node = match entry {
                Some(node) => node,
                None => {
                    tokens.pop();
                    continue;
                }
            };

            tokens.push(mem::take(&mut node.segment));

            if let Some(value) = node.value.take() {
                // the first token is always the root token
                let route = format!("{}{}", path::ROOT, tokens[1..].join("/"));
                routes.push((route, value));
            }

            stack.push(None);
            stack.extend(mem::take(&mut node.children).into_iter().rev().map(Some));
        }

        routes
    }

    /// The number of levels below and including this node.
    pub(crate) fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(1, self)];

        while let Some((depth, node)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (depth + 1, child)));
        }

        deepest
    }

    fn shallow_clone(&self) -> Self
    where
        T: Clone,
    {
        Node {
            value: self.value.clone(),
            is_param: self.is_param,
            segment: self.segment.clone(),
            children: Vec::new(),
        }
    }
}

// Attaches every open node deeper than `depth` to its parent.
fn close<T>(open: &mut Vec<Node<T>>, depth: usize) {
    while open.len() > depth.max(1) {
        if let Some(child) = open.pop() {
            if let Some(parent) = open.last_mut() {
                parent.children.push(child);
            }
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut order = Vec::new();
        let mut pending = vec![(0, self)];

        while let Some((depth, node)) = pending.pop() {
            order.push((depth, node));
            pending.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }

        // nodes on the path from the root to the last visited node
        let mut open: Vec<Node<T>> = Vec::new();
        for (depth, node) in order {
            close(&mut open, depth);
            open.push(node.shallow_clone());
        }

        close(&mut open, 1);
        open.pop().unwrap_or_else(|| self.shallow_clone())
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);

        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("segment", &self.segment)
            .field("is_param", &self.is_param)
            .field("value", &self.value)
            .field(
                "children",
                &self.children.iter().map(Node::segment).collect::<Vec<_>>(),
            )
            .finish()
    }
}
