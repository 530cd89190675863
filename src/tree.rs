//! Tree data structures for minimax search
//!
//! The game tree lives in a single arena: nodes are stored contiguously and
//! refer to their children by [`NodeId`]. There are no parent links, so the
//! tree has a single owner and can be traversed without reference counting.

use std::fmt;

use crate::board::{Board, Mark};
use crate::terminal::Score;

/// Index of a node in a [`GameTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0
    pub const ROOT: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a node in the game tree
///
/// Each node holds a board snapshot, the ids of the boards reachable with
/// one move (in row-major order of the cell played) and, once the tree has
/// been evaluated, the minimax score of the position for the player to win.
#[derive(Debug, Clone)]
pub struct GameTreeNode {
    /// The board at this node
    pub board: Board,

    /// Children, one per empty cell of `board`
    pub children: Vec<NodeId>,

    /// True if the game is over at this node
    pub terminal: bool,

    /// Minimax score, fixed at construction for terminal nodes
    pub score: Option<Score>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl GameTreeNode {
    /// Creates a terminal node with a fixed score
    pub fn leaf(board: Board, score: Score, depth: usize) -> Self {
        GameTreeNode {
            board,
            children: Vec::new(),
            terminal: true,
            score: Some(score),
            depth,
        }
    }

    /// Creates an unscored node whose children are added afterwards
    pub fn internal(board: Board, depth: usize) -> Self {
        GameTreeNode {
            board,
            children: Vec::new(),
            terminal: false,
            score: None,
            depth,
        }
    }

    /// The mark that moves at this node
    pub fn player_to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-allocated game tree
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<GameTreeNode>,
}

impl GameTree {
    /// Creates a tree holding only `root`
    pub fn with_root(root: GameTreeNode) -> Self {
        GameTree { nodes: vec![root] }
    }

    /// Creates a tree with no nodes, to be filled by the builder
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        GameTree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a node without linking it to a parent
    pub(crate) fn push(&mut self, node: GameTreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds `node` as the last child of `parent`
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn push_child(&mut self, parent: NodeId, node: GameTreeNode) -> NodeId {
        let id = self.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn root(&self) -> &GameTreeNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Returns the node with the given id
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &GameTreeNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut GameTreeNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the children of `id` in stored order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &GameTreeNode)> + '_ {
        self.nodes[id.0]
            .children
            .iter()
            .map(move |&child| (child, &self.nodes[child.0]))
    }

    /// Iterates over every node of the tree
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameTreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Finds the child of `id` whose board equals `board`
    pub fn find_child(&self, id: NodeId, board: &Board) -> Option<NodeId> {
        self.children(id)
            .find(|(_, child)| child.board == *board)
            .map(|(child_id, _)| child_id)
    }

    /// Returns an indented listing of the tree down to `max_depth` levels
    /// below the root
    pub fn visualize(&self, max_depth: usize) -> String {
        let mut output = String::new();
        self.visualize_node(NodeId::ROOT, None, max_depth, &mut output);
        output
    }

    fn visualize_node(
        &self,
        id: NodeId,
        parent: Option<&Board>,
        levels_left: usize,
        output: &mut String,
    ) {
        let node = self.get(id);
        let indent = "  ".repeat(node.depth);
        let label = match parent.and_then(|board| board.diff(&node.board)) {
            Some(mv) => format!("{} {}", node.board.to_move().opponent(), mv),
            None => "Root".to_string(),
        };
        let score = node
            .score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "?".to_string());

        output.push_str(&format!(
            "{}{} (score: {}, children: {}{})\n",
            indent,
            label,
            score,
            node.children.len(),
            if node.terminal { ", terminal" } else { "" }
        ));

        if levels_left == 0 {
            return;
        }
        for &child in &node.children {
            self.visualize_node(child, Some(&node.board), levels_left - 1, output);
        }
    }
}
