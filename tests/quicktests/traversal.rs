use bst::Tree;

use std::collections::HashSet;

fn build(xs: &[i16]) -> Tree {
    xs.iter().copied().map(i64::from).collect()
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i16>) -> bool {
        let tree = build(&xs);

        let mut expected: Vec<i64> = xs.into_iter().map(i64::from).collect();
        expected.sort_unstable();
        tree.inorder().collect::<Vec<_>>() == expected
    }
}

quickcheck::quickcheck! {
    fn every_traversal_visits_each_node_once(xs: Vec<i16>) -> bool {
        let tree = build(&xs);

        let mut expected: Vec<i64> = xs.iter().copied().map(i64::from).collect();
        expected.sort_unstable();

        [
            tree.breadth_first().collect::<Vec<_>>(),
            tree.preorder().collect(),
            tree.postorder().collect(),
        ]
        .into_iter()
        .all(|mut keys| {
            keys.sort_unstable();
            keys == expected
        }) && tree.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn postorder_is_reversed_mirror_preorder(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        let mut mirror = tree.clone();
        mirror.invert();

        let mut postorder: Vec<_> = tree.postorder().collect();
        postorder.reverse();
        postorder == mirror.preorder().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn invert_is_involutive(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        let mut twice = tree.clone();
        twice.invert();
        twice.invert();

        twice == tree
    }
}

quickcheck::quickcheck! {
    fn inverted_inorder_is_descending(xs: Vec<i16>) -> bool {
        let mut tree = build(&xs);
        let mut expected: Vec<_> = tree.inorder().collect();
        expected.reverse();

        tree.invert();
        tree.inorder().collect::<Vec<_>>() == expected
    }
}

quickcheck::quickcheck! {
    fn breadth_first_matches_level_walk(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        let (keys, levels) = level_walk(&tree);

        tree.breadth_first().collect::<Vec<_>>() == keys && tree.height() == levels
    }
}

quickcheck::quickcheck! {
    fn search_finds_exactly_inserted(xs: Vec<i16>, others: Vec<i16>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(i64::from(*x)))
            && others
                .iter()
                .all(|o| tree.search(i64::from(*o)) == added.contains(o))
    }
}

/// Walks the public `Node` accessors one level at a time, returning the keys in the order they
/// were reached along with how many levels there were.
fn level_walk(tree: &Tree) -> (Vec<i64>, usize) {
    let mut keys = Vec::new();
    let mut levels = 0;
    let mut level: Vec<_> = tree.root().into_iter().collect();
    while !level.is_empty() {
        keys.extend(level.iter().map(|node| node.data()));
        level = level
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
        levels += 1;
    }

    (keys, levels)
}
