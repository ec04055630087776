//! Arena-backed search tree over partial tilings
//!
//! Nodes live in a single vector and refer to each other by [`NodeId`], so
//! parent links cost nothing to follow and create no ownership cycles. The
//! tree only grows during a run; backtracking moves a cursor, and dead
//! branches are annotated as non-viable rather than removed.

use crate::algorithm::tiling::Tiling;
use crate::io::error::{Result, TilingError, invariant_violation};

/// Stable index of a node in its [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One partial tiling in the search tree
#[derive(Debug, Clone)]
pub struct SearchNode {
    parent: Option<NodeId>,
    tiling: Tiling,
    children: Vec<NodeId>,
    expanded: bool,
    viable: bool,
    depth: usize,
}

impl SearchNode {
    /// Parent node, `None` for the root
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Tiling held by this node
    pub const fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    /// Children created when the node was expanded
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Children have been generated
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Not yet proven unable to reach a complete tiling
    pub const fn is_viable(&self) -> bool {
        self.viable
    }

    /// Distance from the root
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

/// Append-only arena of search nodes
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a tree containing only the root
    pub fn new(root: Tiling) -> Self {
        Self {
            nodes: vec![SearchNode {
                parent: None,
                tiling: root,
                children: Vec::new(),
                expanded: false,
                viable: true,
                depth: 0,
            }],
        }
    }

    /// Identifier of the root node
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the id does not belong to this tree.
    pub fn get(&self, id: NodeId) -> Result<&SearchNode> {
        self.nodes.get(id.0).ok_or_else(|| unknown_node(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut SearchNode> {
        self.nodes.get_mut(id.0).ok_or_else(|| unknown_node(id))
    }

    /// Tiling held by a node
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the id does not belong to this tree.
    pub fn tiling(&self, id: NodeId) -> Result<&Tiling> {
        self.get(id).map(SearchNode::tiling)
    }

    /// Parent of a node
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the id does not belong to this tree.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.get(id).map(SearchNode::parent)
    }

    /// Wrap `tilings` as children of `id` and mark it expanded
    ///
    /// Children for which `is_viable` returns `false` start out non-viable.
    /// Returns the ids of the new children in order.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `id` is unknown or already expanded.
    pub fn expand(
        &mut self,
        id: NodeId,
        tilings: Vec<Tiling>,
        mut is_viable: impl FnMut(&Tiling) -> bool,
    ) -> Result<Vec<NodeId>> {
        let parent = self.get(id)?;
        if parent.expanded {
            return Err(invariant_violation(
                "expand node",
                &format!("node {} was already expanded", id.0),
            ));
        }
        let depth = parent.depth + 1;

        let first = self.nodes.len();
        for tiling in tilings {
            let viable = is_viable(&tiling);
            self.nodes.push(SearchNode {
                parent: Some(id),
                tiling,
                children: Vec::new(),
                expanded: false,
                viable,
                depth,
            });
        }
        let children: Vec<NodeId> = (first..self.nodes.len()).map(NodeId).collect();

        let node = self.get_mut(id)?;
        node.children.clone_from(&children);
        node.expanded = true;
        Ok(children)
    }

    /// Children of `id` that are still viable
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the id does not belong to this tree.
    pub fn viable_children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.get(id)?;
        let mut viable = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            if self.get(child)?.viable {
                viable.push(child);
            }
        }
        Ok(viable)
    }

    /// Record that a node cannot lead to a complete tiling
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the id does not belong to this tree.
    pub fn mark_non_viable(&mut self, id: NodeId) -> Result<()> {
        self.get_mut(id)?.viable = false;
        Ok(())
    }

    /// Walk parent links from `id` up to the root, starting with `id`
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if a node on the path is unknown.
    pub fn ancestry(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut path = vec![id];
        let mut current = self.get(id)?.parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.get(parent)?.parent;
        }
        Ok(path)
    }
}

fn unknown_node(id: NodeId) -> TilingError {
    invariant_violation("search tree lookup", &format!("unknown node {}", id.0))
}
