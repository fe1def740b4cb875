use llrb::{inf, Bound, Inf, Llrb, LlrbError, Node};

fn inorder<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        inorder(n.left(), out);
        out.push(n.item().clone());
        inorder(n.right(), out);
    }
}

fn items<T: Clone, C: Fn(&T, &T) -> bool>(tree: &Llrb<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    inorder(tree.root(), &mut out);
    out
}

#[test]
fn llrb_balanced_insert_matrix() {
    let mut tree = Llrb::new();
    for x in [4, 2, 6, 1, 3, 5, 7] {
        let (replaced, _) = tree.replace_or_insert(x);
        assert_eq!(replaced, None);
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.len(), 7);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&7));
    assert_eq!(tree.get(&4), Some(&4));
    assert!(tree.has(&7));
    assert!(!tree.has(&8));
    assert_eq!(tree.get(&0), None);
    assert_eq!(items(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn llrb_insert_rank_matrix() {
    let mut tree = Llrb::new();
    assert_eq!(tree.replace_or_insert(5), (None, 0));
    assert_eq!(tree.replace_or_insert(1), (None, 0));
    assert_eq!(tree.replace_or_insert(9), (None, 2));
    assert_eq!(tree.replace_or_insert(7), (None, 2));
    assert_eq!(tree.insert_no_replace(3), 1);
    tree.assert_valid().unwrap();
}

#[test]
fn llrb_ranks_follow_inorder_position_matrix() {
    let mut tree = Llrb::new();
    let mut model: Vec<i32> = Vec::new();
    for i in 0..300 {
        let x = (i * 7919) % 1009;
        let (replaced, pos) = tree.replace_or_insert(x);
        if replaced.is_none() {
            let at = model.partition_point(|&y| y < x);
            model.insert(at, x);
        }
        assert_eq!(model[pos], x);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), model.len());
    for (i, x) in model.iter().enumerate() {
        assert_eq!(tree.rank(x), Some(i));
        assert_eq!(tree.get_at(i), Some(x));
    }
    assert_eq!(tree.get_at(model.len()), None);
    assert_eq!(tree.rank(&-1), None);
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    key: u32,
    tag: &'static str,
}

fn by_key(a: &Entry, b: &Entry) -> bool {
    a.key < b.key
}

fn e(key: u32, tag: &'static str) -> Entry {
    Entry { key, tag }
}

#[test]
fn llrb_replace_semantics_matrix() {
    let mut tree = Llrb::with_comparator(by_key);
    for k in [10, 20, 30, 40] {
        tree.replace_or_insert(e(k, "old"));
    }

    let (replaced, pos) = tree.replace_or_insert(e(20, "new"));
    assert_eq!(replaced, Some(e(20, "old")));
    assert_eq!(pos, 1);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.get(&e(20, "")), Some(&e(20, "new")));

    let (replaced, pos) = tree.replace_or_insert(e(40, "newer"));
    assert_eq!(replaced, Some(e(40, "old")));
    assert_eq!(pos, 3);
    tree.assert_valid().unwrap();
}

#[test]
fn llrb_no_replace_semantics_matrix() {
    let mut tree = Llrb::with_comparator(by_key);
    tree.insert_no_replace(e(1, "a"));
    tree.insert_no_replace(e(2, "a"));
    tree.insert_no_replace(e(3, "a"));

    let pos = tree.insert_no_replace(e(2, "b"));
    assert_eq!(pos, 2);
    assert_eq!(tree.len(), 4);
    tree.assert_valid().unwrap();

    let all = items(&tree);
    assert_eq!(
        all.iter().map(|x| (x.key, x.tag)).collect::<Vec<_>>(),
        vec![(1, "a"), (2, "a"), (2, "b"), (3, "a")]
    );

    for _ in 0..20 {
        tree.insert_no_replace(e(2, "c"));
    }
    assert_eq!(tree.len(), 24);
    tree.assert_valid().unwrap();
}

#[test]
fn llrb_bulk_matrix() {
    let mut tree = Llrb::new();
    tree.replace_or_insert_bulk([3, 1, 2, 3, 1]);
    assert_eq!(tree.len(), 3);
    tree.insert_no_replace_bulk(vec![2, 2, 4]);
    assert_eq!(tree.len(), 6);
    assert_eq!(items(&tree), vec![1, 2, 2, 2, 3, 4]);
    tree.assert_valid().unwrap();
}

#[test]
fn llrb_sentinel_bounds_matrix() {
    assert_eq!(inf(0), Err(LlrbError::ZeroSign));

    let mut tree = Llrb::<i32>::new();
    assert_eq!(tree.count_less(Bound::Inf(inf(1).unwrap())), 0);
    tree.replace_or_insert_bulk([10, 20, 30]);

    assert_eq!(tree.count_less(Inf::Neg.into()), 0);
    assert_eq!(tree.count_less(Inf::Pos.into()), 3);
    assert_eq!(tree.count_less(Bound::Item(&20)), 1);
    assert_eq!(tree.count_less(Bound::Item(&25)), 2);
    assert_eq!(tree.count_less(Bound::Item(&5)), 0);
}

fn rebuild(node: Option<&Node<i32>>) -> Option<Box<Node<i32>>> {
    let n = node?;
    Some(Node::from_parts(
        *n.item(),
        rebuild(n.left()),
        rebuild(n.right()),
        n.is_black(),
    ))
}

#[test]
fn llrb_root_access_matrix() {
    let mut tree = Llrb::new();
    tree.replace_or_insert_bulk(0..50);

    let copy = rebuild(tree.root());
    let mut loaded = Llrb::new();
    assert!(loaded.set_root(copy).is_none());
    assert_eq!(loaded.len(), 50);
    loaded.assert_valid().unwrap();
    assert_eq!(items(&loaded), (0..50).collect::<Vec<_>>());

    loaded.replace_or_insert(50);
    assert_eq!(loaded.delete(&0), Some((0, 0)));
    loaded.assert_valid().unwrap();

    let old = tree.set_root(None);
    assert_eq!(old.map(|n| n.size()), Some(50));
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
}

#[test]
fn llrb_clear_and_print_matrix() {
    let mut tree = Llrb::<i32>::new();
    assert_eq!(tree.print(), "∅");
    tree.replace_or_insert_bulk([2, 1]);
    let out = tree.print();
    assert!(out.starts_with("Node black [1|0] { 2 }"));
    assert!(out.contains("L=Node red [0|0] { 1 }"));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.root().map(|n| n.size()), None);
    tree.assert_valid().unwrap();
}
