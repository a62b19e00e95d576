//! Word-association tree.
//!
//! The tree variant of suffix expansion: instead of flattening branches
//! into strings, every distinct continuation of the seed character becomes a
//! node. Nodes live in an arena owned by the tree; children lists are the
//! only ownership relation and the parent link is a plain index.

use crate::charset::CharFilter;
use crate::error::{MiningError, MiningResult};
use crate::expand::group_by_next;
use crate::scope::ScopeIndex;

/// Index of a node inside its [`AssociationTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A 2D point in drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One character of the association tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationNode {
    /// The character this node stands for.
    pub data: char,
    /// Children in first-seen order.
    pub children: Vec<NodeId>,
    /// Position assigned by the layout.
    pub position: Option<Point>,
    /// Direction assigned by the layout, in radians.
    pub rotation: Option<f64>,
    /// Parent node; `None` for the root.
    pub parent: Option<NodeId>,
}

impl AssociationNode {
    const fn new(data: char, parent: Option<NodeId>) -> Self {
        Self {
            data,
            children: Vec::new(),
            position: None,
            rotation: None,
            parent,
        }
    }
}

/// Every continuation of a seed character, as a tree.
#[derive(Debug, Clone)]
pub struct AssociationTree {
    nodes: Vec<AssociationNode>,
}

impl AssociationTree {
    /// Build the tree rooted at `seed` from its scopes in `index`.
    ///
    /// Each group of scopes sharing a next character becomes a child; the
    /// builder descends into a child only when more than one scope continues
    /// through it.
    #[tracing::instrument(skip(index, filter))]
    pub fn build(index: &ScopeIndex<'_>, seed: char, filter: &CharFilter) -> MiningResult<Self> {
        let entry = index.get(seed).ok_or(MiningError::MissingSeed(seed))?;
        let mut tree = Self {
            nodes: vec![AssociationNode::new(seed, None)],
        };
        let root = tree.root();
        tree.grow(&entry.scopes, root, filter);
        tracing::debug!(nodes = tree.len(), "association tree built");
        Ok(tree)
    }

    fn grow(&mut self, scopes: &[&[char]], parent: NodeId, filter: &CharFilter) {
        for (c, tails) in group_by_next(scopes, filter).groups {
            let child = self.push_child(parent, c);
            if tails.len() > 1 {
                self.grow(&tails, child, filter);
            }
        }
    }

    fn push_child(&mut self, parent: NodeId, data: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(AssociationNode::new(data, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The seed node.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &AssociationNode {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut AssociationNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in depth-first order, each node before its children.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }

    /// Characters from the root down to `id`, inclusive.
    pub fn path_text(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            chars.push(self.node(node).data);
            current = self.node(node).parent;
        }
        chars.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_for(text: &str, depth: usize, seed: char) -> MiningResult<AssociationTree> {
        let buffer: Vec<char> = text.chars().collect();
        let filter = CharFilter::default();
        let index = ScopeIndex::build(&buffer, depth, &filter);
        AssociationTree::build(&index, seed, &filter)
    }

    fn children_text(tree: &AssociationTree, id: NodeId) -> String {
        tree.node(id)
            .children
            .iter()
            .map(|&c| tree.node(c).data)
            .collect()
    }

    #[test]
    fn missing_seed_errors() {
        let err = tree_for("春风又绿江南岸", 4, '秋').unwrap_err();
        assert_eq!(err, MiningError::MissingSeed('秋'));
    }

    #[test]
    fn excluded_seed_is_missing() {
        assert!(tree_for("春，风", 4, '，').is_err());
    }

    #[test]
    fn single_occurrence_builds_one_branch_step() {
        // One scope: the child is created but not expanded further.
        let tree = tree_for("春风又绿", 4, '春').unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(children_text(&tree, tree.root()), "风");
    }

    #[test]
    fn shared_continuations_are_expanded() {
        let tree = tree_for("春风又，春风雨，春水", 4, '春').unwrap();
        let root = tree.root();
        assert_eq!(children_text(&tree, root), "风水");
        let wind = tree.node(root).children[0];
        assert_eq!(children_text(&tree, wind), "又雨");
        assert_eq!(tree.node(wind).parent, Some(root));
    }

    #[test]
    fn empty_scopes_do_not_create_nodes() {
        let tree = tree_for("春春", 4, '春').unwrap();
        // First 春 has scope "春", second has an empty scope.
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn leaf_paths_occur_after_seed() {
        let text = "白日依山尽，黄河入海流。白日放歌须纵酒，白首相知犹按剑。白日依山";
        let tree = tree_for(text, 6, '白').unwrap();
        for id in tree.depth_first() {
            if tree.node(id).children.is_empty() {
                let path = tree.path_text(id);
                assert!(text.contains(&path), "{path} not in text");
            }
        }
    }

    #[test]
    fn depth_first_visits_parents_first() {
        let tree = tree_for("春风又，春风雨，春水", 4, '春').unwrap();
        let order = tree.depth_first();
        assert_eq!(order.len(), tree.len());
        assert_eq!(order[0], tree.root());
        let texts: Vec<String> = order.iter().map(|&id| tree.path_text(id)).collect();
        assert_eq!(texts, vec!["春", "春风", "春风又", "春风雨", "春水"]);
    }
}
