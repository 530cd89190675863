use arboriter_minimax::{
    Board, GameTree, GameTreeBuilder, GameTreeNode, Mark, MinimaxError, MinimaxEvaluator, Move,
    MoveSelector, Score,
};

/// A root on the empty board whose children play the first cells in
/// row-major order with the given scores
fn scored_tree(scores: &[Score]) -> GameTree {
    let root = Board::new();
    let mut tree = GameTree::with_root(GameTreeNode::internal(root, 0));
    for (index, &score) in scores.iter().enumerate() {
        let child = root.play(Move::from_index(index)).unwrap();
        tree.push_child(tree.root_id(), GameTreeNode::leaf(child, score, 1));
    }
    tree
}

#[test]
fn test_ties_go_to_the_first_best_child() {
    let tree = scored_tree(&[Score::Draw, Score::Win, Score::Win, Score::Loss]);
    let selector = MoveSelector::new();

    let best = selector.best_child(&tree, tree.root_id()).unwrap();
    assert_eq!(best, tree.root().children[1]);
    assert_eq!(
        selector.select_move(&tree, tree.root_id()).unwrap(),
        Move::new(0, 1)
    );
}

#[test]
fn test_all_equal_scores_pick_first_child() {
    let tree = scored_tree(&[Score::Draw, Score::Draw, Score::Draw]);

    assert_eq!(
        MoveSelector::new().select_move(&tree, tree.root_id()).unwrap(),
        Move::new(0, 0)
    );
}

#[test]
fn test_later_strictly_better_child_wins() {
    let tree = scored_tree(&[Score::Loss, Score::Loss, Score::Draw, Score::Loss, Score::Win]);

    assert_eq!(
        MoveSelector::new().select_move(&tree, tree.root_id()).unwrap(),
        Move::new(1, 1)
    );
}

#[test]
fn test_childless_node_has_no_moves() {
    let tree = scored_tree(&[]);
    let result = MoveSelector::new().select_move(&tree, tree.root_id());

    assert!(matches!(result, Err(MinimaxError::NoLegalMoves)));
}

#[test]
fn test_unscored_child_is_rejected() {
    let mut tree = scored_tree(&[Score::Draw]);
    let unscored = tree.push_child(
        tree.root_id(),
        GameTreeNode::internal(Board::new().play(Move::new(2, 2)).unwrap(), 1),
    );

    let result = MoveSelector::new().select_move(&tree, tree.root_id());
    assert!(matches!(result, Err(MinimaxError::UnscoredNode(id)) if id == unscored));
}

#[test]
fn test_identical_child_board_has_no_delta() {
    let mut tree = GameTree::with_root(GameTreeNode::internal(Board::new(), 0));
    tree.push_child(
        tree.root_id(),
        GameTreeNode::leaf(Board::new(), Score::Win, 1),
    );

    let result = MoveSelector::new().select_move(&tree, tree.root_id());
    assert!(matches!(result, Err(MinimaxError::NoBoardDelta)));
}

#[test]
fn test_takes_immediate_win() {
    // X to move with O threatening the top row; X wins on the diagonal
    let board = [(1, 1), (0, 0), (2, 2), (0, 1), (2, 0), (1, 0)]
        .iter()
        .fold(Board::new(), |b, &(r, c)| b.play(Move::new(r, c)).unwrap());
    let mut tree = GameTreeBuilder::new(Mark::X).build(board);
    MinimaxEvaluator::new(Mark::X).evaluate(&mut tree).unwrap();

    let mv = MoveSelector::new().select_move(&tree, tree.root_id()).unwrap();
    let after = board.play(mv).unwrap();
    assert_eq!(arboriter_minimax::winner(&after), Some(Mark::X));
}
