//! Per-verse marker trees.
//!
//! A tree is an arena of nodes. Node [`ROOT`] is the synthetic verse root
//! and carries no marker; every other node carries exactly one classified
//! marker and has exactly one parent.

mod builder;
mod display;

pub use builder::TreeBuilder;
pub use display::MarkerTreeDisplay;

use crate::category::Tier;
use crate::depth::ParentPointers;
use crate::marker::Marker;

/// Index of a node inside its [`MarkerTree`].
pub type NodeId = usize;

/// The synthetic root of every tree.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode {
    marker: Option<Marker<Tier>>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTree {
    nodes: Vec<TreeNode>,
}

impl Default for MarkerTree {
    fn default() -> Self {
        MarkerTree {
            nodes: vec![TreeNode {
                marker: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }
}

impl MarkerTree {
    /// A tree holding only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node that is not yet attached anywhere.
    pub(crate) fn add_detached(&mut self, marker: Marker<Tier>) -> NodeId {
        self.nodes.push(TreeNode {
            marker: Some(marker),
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Append `child` to `parent`'s children.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child].parent.is_none(), "node {} attached twice", child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// The marker at `id`; `None` for the root.
    pub fn marker(&self, id: NodeId) -> Option<&Marker<Tier>> {
        self.nodes[id].marker.as_ref()
    }

    /// Display label: the marker code, or `"root"`.
    pub fn label(&self, id: NodeId) -> &str {
        self.marker(id).map_or("root", |marker| marker.code.as_str())
    }

    /// Number of marker nodes (the root is not counted).
    pub fn marker_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.marker_count() == 0
    }

    /// Node ids in pre-order, root first.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![ROOT],
        }
    }

    /// Markers in pre-order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker<Tier>> + '_ {
        self.preorder().filter_map(move |id| self.marker(id))
    }

    /// Number of marker levels below the root; zero for an empty tree.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(self.children(id).iter().map(|&child| (child, depth + 1)));
        }
        max
    }

    /// Flatten into parent-pointer form.
    ///
    /// Tokens are the marker nodes in pre-order (the same order as
    /// [`markers`](Self::markers)); children of the root point at the sentinel.
    pub fn to_parent_pointers(&self) -> ParentPointers {
        let order: Vec<NodeId> = self.preorder().filter(|&id| id != ROOT).collect();

        let mut token_of = vec![None; self.nodes.len()];
        for (token, &id) in order.iter().enumerate() {
            token_of[id] = Some(token);
        }

        let heads = order
            .iter()
            .map(|&id| self.parent(id).and_then(|parent| token_of[parent]))
            .collect();
        ParentPointers::from_tree_heads(heads)
    }
}

/// Pre-order walk over a [`MarkerTree`], children in insertion order.
pub struct Preorder<'a> {
    tree: &'a MarkerTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}
