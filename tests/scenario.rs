use bst::Tree;
use rstest::{fixture, rstest};

#[fixture]
fn tree() -> Tree {
    "3 12 1 -12 2 5 4 6".parse().unwrap()
}

#[rstest]
#[case::breadth_first(|t: &Tree| t.breadth_first().collect::<Vec<_>>(), [3, 1, 12, -12, 2, 5, 4, 6])]
#[case::inorder(|t: &Tree| t.inorder().collect::<Vec<_>>(), [-12, 1, 2, 3, 4, 5, 6, 12])]
#[case::preorder(|t: &Tree| t.preorder().collect::<Vec<_>>(), [3, 1, -12, 2, 12, 5, 4, 6])]
#[case::postorder(|t: &Tree| t.postorder().collect::<Vec<_>>(), [-12, 2, 1, 4, 6, 5, 12, 3])]
fn traversal_order(tree: Tree, #[case] walk: fn(&Tree) -> Vec<i64>, #[case] expected: [i64; 8]) {
    assert_eq!(walk(&tree), expected);
}

#[rstest]
#[case(5, true)]
#[case(7, false)]
#[case(3, true)]
#[case(-12, true)]
#[case(-11, false)]
#[case(13, false)]
fn search(tree: Tree, #[case] key: i64, #[case] found: bool) {
    assert_eq!(tree.search(key), found);
}

#[rstest]
fn invert_reverses_inorder(mut tree: Tree) {
    tree.invert();
    assert_eq!(
        tree.inorder().collect::<Vec<_>>(),
        [12, 6, 5, 4, 3, 2, 1, -12]
    );

    tree.invert();
    assert_eq!(tree.inorder().collect::<Vec<_>>(), [-12, 1, 2, 3, 4, 5, 6, 12]);
}

#[rstest]
fn shape(tree: Tree) {
    assert_eq!(tree.len(), 8);
    assert_eq!(tree.height(), 4);

    let root = tree.root().unwrap();
    assert_eq!(root.data(), 3);
    assert!(!root.is_leaf());
    assert!(root.left().unwrap().left().unwrap().is_leaf());
}

#[rstest]
fn empty_tree_is_inert() {
    let mut tree: Tree = "".parse().unwrap();
    tree.invert();

    assert!(tree.is_empty());
    assert!(!tree.search(3));
    assert_eq!(tree.breadth_first().count(), 0);
    assert_eq!(tree.inorder().count(), 0);
    assert_eq!(tree.preorder().count(), 0);
    assert_eq!(tree.postorder().count(), 0);
}
