use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::ForwardList;

/// exchange the contents of two lists, see `ForwardList::swap`
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

/// walk both lists in step. the first pair of elements that differ decides;
/// if one list runs out first it is the smaller one.
fn lexicographically_less<T: PartialOrd>(lhs: &ForwardList<T>, rhs: &ForwardList<T>) -> bool {
    let mut lhs = lhs.iter();
    let mut rhs = rhs.iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(l), Some(r)) => {
                if l < r {
                    return true;
                }
                if r < l {
                    return false;
                }
            }
            (None, Some(_)) => return true,
            (_, None) => return false,
        }
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

// `<` is the primitive; `partial_cmp` and the other comparisons are derived
// from it and `==` so that partially ordered elements agree on every operator
impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if lexicographically_less(self, other) {
            Some(Ordering::Less)
        } else if lexicographically_less(other, self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographically_less(self, other)
    }

    fn le(&self, other: &Self) -> bool {
        lexicographically_less(self, other) || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        lexicographically_less(other, self)
    }

    fn ge(&self, other: &Self) -> bool {
        lexicographically_less(other, self) || other == self
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn comparisons_match_the_lexicographic_laws(
            a in vec(0u8..4, 0..6),
            b in vec(0u8..4, 0..6),
        ) {
            let la: ForwardList<u8> = a.iter().copied().collect();
            let lb: ForwardList<u8> = b.iter().copied().collect();

            prop_assert_eq!(la == lb, a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y));
            prop_assert_eq!(la < lb, a < b);
            prop_assert_eq!(la <= lb, (la < lb) || (la == lb));
            prop_assert_eq!(la > lb, lb < la);
            prop_assert_eq!(la >= lb, lb <= la);
            prop_assert_eq!(la.partial_cmp(&lb), Some(a.cmp(&b)));
        }
    }
}
