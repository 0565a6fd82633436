use super::{MarkerTree, NodeId, ROOT};
use crate::category::{Classifier, Tier};
use crate::marker::Marker;

/// Nodes of one tier waiting for a higher-tier marker to claim them.
#[derive(Debug)]
struct TierStack {
    pending: Vec<NodeId>,
}

impl TierStack {
    fn new() -> Self {
        TierStack { pending: Vec::new() }
    }

    fn push(&mut self, id: NodeId) {
        self.pending.push(id);
    }

    /// Move every pending node under `parent`, most recently pushed first.
    fn drain_into(&mut self, tree: &mut MarkerTree, parent: NodeId) {
        while let Some(child) = self.pending.pop() {
            tree.attach(parent, child);
        }
    }

    /// Hang whatever is left directly off the root, in push order.
    fn release_to_root(&mut self, tree: &mut MarkerTree) {
        for child in self.pending.drain(..) {
            tree.attach(ROOT, child);
        }
    }
}

/// Groups a verse's markers into a [`MarkerTree`] by tier precedence.
///
/// Secondaries take the pending tertiaries, primaries take the pending
/// tertiaries and secondaries, and terminators hang off the root and take
/// the pending primaries. Anything never claimed ends up on the root.
///
/// ```
/// use layered_taamim::TreeBuilder;
///
/// let tree = TreeBuilder::default().build(&["14", "65", "92"]);
/// let labels: Vec<&str> = tree.markers().map(|m| m.code.as_str()).collect();
/// assert_eq!(labels, vec!["92", "65", "14"]);
/// assert_eq!(tree.depth(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    classifier: Classifier,
}

impl TreeBuilder {
    pub fn new(classifier: Classifier) -> Self {
        TreeBuilder { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Build the tree for one verse. Unclassified codes are skipped.
    pub fn build<S: AsRef<str>>(&self, codes: &[S]) -> MarkerTree {
        let mut tree = MarkerTree::new();
        let mut stacks = PendingStacks::new();

        for code in codes {
            let code = code.as_ref().trim();
            let tier = match self.classifier.tier(code) {
                Some(tier) => tier,
                None => continue,
            };

            let id = tree.add_detached(Marker::new(code, tier));
            if tier == Tier::Terminator {
                tree.attach(ROOT, id);
            }
            stacks.claim(tier, &mut tree, id);
            if tier != Tier::Terminator {
                stacks.get_mut(tier).push(id);
            }
        }

        stacks.release_to_root(&mut tree);
        tree
    }
}

/// One [`TierStack`] per tier that can be pending (everything below
/// Terminator).
#[derive(Debug)]
struct PendingStacks {
    // indexed by `Tier::rank() - 1`
    stacks: [TierStack; 3],
}

impl PendingStacks {
    fn new() -> Self {
        PendingStacks {
            stacks: [TierStack::new(), TierStack::new(), TierStack::new()],
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut TierStack {
        &mut self.stacks[tier.rank() - 1]
    }

    /// Drain the stacks `tier` claims into `parent`.
    fn claim(&mut self, tier: Tier, tree: &mut MarkerTree, parent: NodeId) {
        for &lower in tier.claims() {
            self.get_mut(lower).drain_into(tree, parent);
        }
    }

    /// Unclaimed nodes go to the root, highest tier first.
    fn release_to_root(&mut self, tree: &mut MarkerTree) {
        for stack in self.stacks.iter_mut() {
            stack.release_to_root(tree);
        }
    }
}
