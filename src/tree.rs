//! Arena-based position tree.
//!
//! Positions are addressed by [`Index`] handles into a generational arena,
//! which gives stable node identity for direct-report edits while the tree
//! exclusively owns every node.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{OrgError, OrgResult};
use crate::position::Position;

/// Tree node wrapping one position.
#[derive(Debug)]
struct OrgNode {
    position: Position,
    /// Parent node, `None` only for the root
    parent: Option<Index>,
    /// Direct reports, in insertion order
    children: Vec<Index>,
}

/// An owned tree of positions with a single root.
///
/// Children are kept as an ordered sequence, so search and rendering order
/// follow insertion order deterministically.
#[derive(Debug, Default)]
pub struct OrgTree {
    arena: Arena<OrgNode>,
    root: Option<Index>,
}

impl OrgTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a position, attached under `parent` or installed as the root
    /// when `parent` is `None`.
    ///
    /// Errors with [`OrgError::RootAlreadyDefined`] on a second root and
    /// [`OrgError::PositionNotFound`] on a stale parent handle.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, position: Position, parent: Option<Index>) -> OrgResult<Index> {
        match parent {
            Some(parent_idx) => {
                if !self.arena.contains(parent_idx) {
                    return Err(OrgError::PositionNotFound);
                }
                let node_idx = self.arena.insert(OrgNode {
                    position,
                    parent: Some(parent_idx),
                    children: Vec::new(),
                });
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.push(node_idx);
                }
                Ok(node_idx)
            }
            None => {
                if let Some(root_idx) = self.root {
                    let title = self
                        .get(root_idx)
                        .map(|p| p.title().to_string())
                        .unwrap_or_default();
                    return Err(OrgError::RootAlreadyDefined(title));
                }
                let node_idx = self.arena.insert(OrgNode {
                    position,
                    parent: None,
                    children: Vec::new(),
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    /// Re-parents an existing position under `parent`.
    ///
    /// Returns `Ok(false)` when the edge already exists (no change).
    /// Errors when either handle is stale, when the move would close a cycle,
    /// or when `child` is the root.
    #[instrument(level = "trace", skip(self))]
    pub fn add_direct_report(&mut self, parent: Index, child: Index) -> OrgResult<bool> {
        if !self.arena.contains(parent) || !self.arena.contains(child) {
            return Err(OrgError::PositionNotFound);
        }
        if self.root == Some(child) {
            return Err(OrgError::RootDisplaced);
        }
        if child == parent || self.is_ancestor(child, parent) {
            let title = self
                .get(child)
                .map(|p| p.title().to_string())
                .unwrap_or_default();
            return Err(OrgError::CycleDetected(title));
        }
        if let Some(parent_node) = self.arena.get(parent) {
            if parent_node.children.contains(&child) {
                return Ok(false);
            }
        }

        self.detach(child);
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
        Ok(true)
    }

    /// Unlinks `child` from `parent` and drops the child subtree.
    ///
    /// Returns whether a removal occurred; a missing or stale child is a
    /// no-op, never an error.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_direct_report(&mut self, parent: Index, child: Index) -> bool {
        let is_child = self
            .arena
            .get(parent)
            .map(|node| node.children.contains(&child))
            .unwrap_or(false);
        if !is_child {
            return false;
        }

        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
        for idx in self.subtree_indices(child) {
            let _ = self.arena.remove(idx);
        }
        true
    }

    pub fn get(&self, idx: Index) -> Option<&Position> {
        self.arena.get(idx).map(|node| &node.position)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Position> {
        self.arena.get_mut(idx).map(|node| &mut node.position)
    }

    /// Read-only view of a node's direct reports, in insertion order.
    pub fn direct_reports(&self, idx: Index) -> &[Index] {
        self.arena
            .get(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator over `(handle, depth, position)`, children visited
    /// in insertion order.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter::new(self)
    }

    /// Height of the tree; 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.calculate_depth(root),
            None => 0,
        }
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        match self.arena.get(idx) {
            Some(node) => {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Whether `candidate` lies on the parent chain of `idx` (or is `idx`).
    fn is_ancestor(&self, candidate: Index, idx: Index) -> bool {
        let mut current = Some(idx);
        while let Some(cur) = current {
            if cur == candidate {
                return true;
            }
            current = self.arena.get(cur).and_then(|node| node.parent);
        }
        false
    }

    fn detach(&mut self, child: Index) {
        let old_parent = self.arena.get(child).and_then(|node| node.parent);
        if let Some(old_parent_idx) = old_parent {
            if let Some(old_parent_node) = self.arena.get_mut(old_parent_idx) {
                old_parent_node.children.retain(|&c| c != child);
            }
        }
    }

    fn subtree_indices(&self, start: Index) -> Vec<Index> {
        let mut indices = Vec::new();
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                indices.push(idx);
                stack.extend(node.children.iter().copied());
            }
        }
        indices
    }
}

pub struct TreeIter<'a> {
    tree: &'a OrgTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIter<'a> {
    fn new(tree: &'a OrgTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, 0));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (Index, usize, &'a Position);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        let node = self.tree.arena.get(idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((idx, depth, &node.position))
    }
}
