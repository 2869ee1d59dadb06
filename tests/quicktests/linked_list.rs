use ordered_tree::LinkedList;
use quickcheck_macros::quickcheck;

use crate::Op;

fn list_of<E: Clone>(xs: &[E]) -> LinkedList<E> {
    let mut list = LinkedList::new();
    for x in xs {
        list.push_back(x.clone());
    }
    list
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut list = LinkedList::new();
    let mut model = Vec::new();

    for op in &ops {
        match op {
            Op::Insert(e) => {
                list.push_back(*e);
                model.push(*e);
            }
            Op::Remove(e) => {
                list.remove(e);
                if let Some(pos) = model.iter().position(|m| m == e) {
                    model.remove(pos);
                }
            }
        }
    }

    list.to_vec() == model && list.len() == model.len()
}

#[quickcheck]
fn get_matches_vec(xs: Vec<i8>) -> bool {
    let list = list_of(&xs);

    (0..xs.len()).all(|i| list.get(i) == Ok(&xs[i])) && list.get(xs.len()).is_err()
}

#[quickcheck]
fn index_of_finds_first(xs: Vec<i8>, x: i8) -> bool {
    let list = list_of(&xs);

    list.index_of(&x) == xs.iter().position(|e| *e == x)
}

#[quickcheck]
fn display_matches_vec_debug(xs: Vec<i8>) -> bool {
    let list = list_of(&xs);

    list.to_string() == format!("{:?}", xs)
}

#[quickcheck]
fn sort_is_stable_and_complete(xs: Vec<(i8, u8)>) -> bool {
    // Only order by the first half so the stability of the second half is visible.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct ByKey(i8, u8);
    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for ByKey {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let keyed: Vec<_> = xs.iter().map(|(k, v)| ByKey(*k, *v)).collect();
    let mut list = list_of(&keyed);
    list.sort();

    let mut expected = keyed;
    expected.sort();
    list.to_vec() == expected
}
