//! Organization: tree ownership, employee id generation, search and hiring.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use generational_arena::Index;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::employee::{Employee, Name};
use crate::errors::{OrgError, OrgResult};
use crate::position::Position;
use crate::tree::OrgTree;

/// The owning root entity of one complete position tree.
///
/// All mutation goes through `&mut self`, so at most one hire can be in
/// flight per organization; sharing one across threads requires external
/// synchronization. The id counter is atomic regardless (matching the
/// original process-wide generator), so a lock-shared organization still
/// issues unique, increasing ids.
#[derive(Debug)]
pub struct Organization {
    tree: OrgTree,
    /// Employee ids start at 1 so 0 stays free as a sentinel downstream.
    employee_ids: AtomicU32,
}

impl Organization {
    /// Builds an organization from a shape-defining closure.
    ///
    /// The closure receives an empty [`OrgTree`] and must install a root;
    /// concrete company shapes live entirely in their callers:
    ///
    /// ```
    /// use orgchart::{Organization, Position};
    ///
    /// let org = Organization::new(|chart| {
    ///     let ceo = chart.insert_node(Position::new("CEO"), None)?;
    ///     chart.insert_node(Position::new("CTO"), Some(ceo))?;
    ///     Ok(())
    /// })
    /// .unwrap();
    /// assert_eq!(org.find_position("CTO").len(), 1);
    /// ```
    ///
    /// Errors with [`OrgError::MissingRoot`] if the closure leaves the tree
    /// empty.
    pub fn new<F>(define: F) -> OrgResult<Self>
    where
        F: FnOnce(&mut OrgTree) -> OrgResult<()>,
    {
        let mut tree = OrgTree::new();
        define(&mut tree)?;
        Self::from_tree(tree)
    }

    /// Wraps an already-built tree; errors if it has no root.
    pub fn from_tree(tree: OrgTree) -> OrgResult<Self> {
        if tree.root().is_none() {
            return Err(OrgError::MissingRoot);
        }
        Ok(Self {
            tree,
            employee_ids: AtomicU32::new(1),
        })
    }

    /// Hires `person` into the first unfilled position titled `title`.
    ///
    /// Matching positions are collected by a pre-order walk (node first,
    /// then direct reports in insertion order) and scanned in that order;
    /// the first vacant one receives a new employee with a freshly issued
    /// id. Returns `None` when no position carries the title or every match
    /// is already filled; state, including the id counter, is untouched in
    /// that case.
    ///
    /// When several positions share a title, traversal order alone decides
    /// which is filled; there is no way to target a specific parent's
    /// sub-position. Callers needing that must pick a handle via
    /// [`OrgTree::direct_reports`] and fill it themselves.
    #[instrument(level = "debug", skip(self))]
    pub fn hire(&mut self, person: Name, title: &str) -> Option<Index> {
        let possibilities = self.find_position(title);
        if possibilities.is_empty() {
            debug!(title, "no position with this title");
            return None;
        }

        let vacant = possibilities
            .into_iter()
            .find(|&idx| self.tree.get(idx).map(|p| !p.is_filled()).unwrap_or(false));
        match vacant {
            Some(idx) => {
                // counter moves only on this success path
                let id = self.employee_ids.fetch_add(1, Ordering::SeqCst);
                if let Some(position) = self.tree.get_mut(idx) {
                    position.set_occupant(Some(Employee::new(id, person)));
                }
                debug!(title, id, "position filled");
                Some(idx)
            }
            None => {
                debug!(title, "all matching positions are filled");
                None
            }
        }
    }

    /// Collects every position whose title exactly equals `title`
    /// (case-sensitive), in pre-order. Multiple matches are normal: several
    /// managers may each own a position with the same title.
    #[instrument(level = "debug", skip(self))]
    pub fn find_position(&self, title: &str) -> Vec<Index> {
        let mut result = Vec::new();
        if let Some(root) = self.tree.root() {
            self.collect_matches(root, title, &mut result);
        }
        result
    }

    fn collect_matches(&self, idx: Index, title: &str, result: &mut Vec<Index>) {
        if let Some(position) = self.tree.get(idx) {
            if position.title() == title {
                result.push(idx);
            }
        }
        for &child in self.tree.direct_reports(idx) {
            self.collect_matches(child, title, result);
        }
    }

    /// Clears a position's occupant, returning the departing employee.
    /// The only Filled→Vacant transition; hiring never triggers it.
    #[instrument(level = "debug", skip(self))]
    pub fn vacate(&mut self, idx: Index) -> Option<Employee> {
        self.tree.get_mut(idx)?.set_occupant(None)
    }

    pub fn position(&self, idx: Index) -> Option<&Position> {
        self.tree.get(idx)
    }

    pub fn tree(&self) -> &OrgTree {
        &self.tree
    }

    /// Mutable tree access for structural edits after construction.
    pub fn tree_mut(&mut self) -> &mut OrgTree {
        &mut self.tree
    }

    /// The id the next successful hire will receive.
    pub fn next_employee_id(&self) -> u32 {
        self.employee_ids.load(Ordering::SeqCst)
    }

    /// Box-drawing rendering for terminal display, one leaf per direct
    /// report. The canonical `+-` format lives in the `Display` impl.
    pub fn to_tree(&self) -> Tree<String> {
        match self.tree.root() {
            Some(root) => self.branch(root),
            None => Tree::new(String::new()),
        }
    }

    fn branch(&self, idx: Index) -> Tree<String> {
        let label = self
            .tree
            .get(idx)
            .map(|p| p.to_string())
            .unwrap_or_default();
        let leaves: Vec<_> = self
            .tree
            .direct_reports(idx)
            .iter()
            .map(|&child| self.branch(child))
            .collect();
        Tree::new(label).with_leaves(leaves)
    }
}

/// One line per position, depth-first in direct-report order, each line
/// `"{tab * depth}+-{position}"` with a trailing newline.
impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, depth, position) in self.tree.iter() {
            writeln!(f, "{}+-{}", "\t".repeat(depth), position)?;
        }
        Ok(())
    }
}
