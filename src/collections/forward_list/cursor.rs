use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{ForwardList, Link, Node};

mod private {
    pub trait Sealed {}
}

/// the access capability carried by a `Cursor`. only `Mutable` cursors may be
/// used to obtain `&mut T` through `ForwardList::get_mut`
pub trait Access: private::Sealed {
    #[doc(hidden)]
    const NAME: &'static str;
}

/// marker for cursors that may hand out mutable references
pub enum Mutable {}

/// marker for cursors that only hand out shared references
pub enum ReadOnly {}

impl private::Sealed for Mutable {}
impl private::Sealed for ReadOnly {}

impl Access for Mutable {
    const NAME: &'static str = "Mutable";
}

impl Access for ReadOnly {
    const NAME: &'static str = "ReadOnly";
}

/// where a cursor currently points
pub(super) enum Position<T> {
    /// the sentinel slot in front of the first element
    BeforeBegin,
    /// a live element node
    Node(NonNull<Node<T>>),
    /// past-the-end, references nothing
    End,
}

impl<T> Position<T> {
    pub(super) fn from_link(link: Link<T>) -> Self {
        match link {
            Some(node) => Self::Node(node),
            None => Self::End,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::BeforeBegin, Self::BeforeBegin) | (Self::End, Self::End) => true,
            (Self::Node(lhs), Self::Node(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeBegin => f.write_str("BeforeBegin"),
            Self::Node(node) => f.debug_tuple("Node").field(&node.as_ptr()).finish(),
            Self::End => f.write_str("End"),
        }
    }
}

/// a non-owning handle to a position in a `ForwardList`: the sentinel in
/// front of the first element, an element, or past-the-end.
///
/// cursors do not borrow the list they came from, so they can be handed
/// back to `ForwardList::insert_after` and `ForwardList::erase_after`. the
/// price is that nothing tracks their validity: a cursor is invalidated as
/// soon as the node it references is removed, and every operation that
/// follows one is `unsafe`.
///
/// element cursors are equal only when they reference the same node. the
/// sentinel is not tracked by address, so the before-begin cursors of any two
/// lists compare equal.
pub struct Cursor<T, A: Access = ReadOnly> {
    pos: Position<T>,
    _access: PhantomData<A>,
}

/// a cursor that may be used to mutate the element it points at
pub type CursorMut<T> = Cursor<T, Mutable>;

impl<T, A: Access> Cursor<T, A> {
    pub(super) const fn new(pos: Position<T>) -> Self {
        Self {
            pos,
            _access: PhantomData,
        }
    }

    pub(super) fn position(&self) -> Position<T> {
        self.pos
    }

    /// returns true if this is the past-the-end position
    pub fn is_end(&self) -> bool {
        self.pos == Position::End
    }

    /// returns true if this is the sentinel position in front of the first
    /// element
    pub fn is_before_begin(&self) -> bool {
        self.pos == Position::BeforeBegin
    }

    /// drop the ability to mutate through this cursor
    pub fn as_const(self) -> Cursor<T, ReadOnly> {
        Cursor::new(self.pos)
    }

    /// move the cursor forward one position. the sentinel advances to the
    /// first element (or past-the-end if `list` is empty) and the last
    /// element advances to past-the-end.
    ///
    /// # Safety
    /// the cursor must be valid for `list`: it was produced by `list` (or by a
    /// list that has since been swapped with it) and the node it references
    /// has not been removed. advancing past-the-end is a contract violation
    /// caught by a debug assertion.
    pub unsafe fn move_next(&mut self, list: &ForwardList<T>) {
        self.pos = match self.pos {
            Position::BeforeBegin => list.first_position(),
            Position::Node(node) => Position::from_link((*node.as_ptr()).next),
            Position::End => {
                debug_assert!(false, "advanced a past-the-end cursor");
                Position::End
            }
        };
    }

    /// by-value form of `move_next`
    ///
    /// # Safety
    /// see `move_next`
    pub unsafe fn next(mut self, list: &ForwardList<T>) -> Self {
        self.move_next(list);
        self
    }
}

impl<T> From<Cursor<T, Mutable>> for Cursor<T, ReadOnly> {
    fn from(cursor: Cursor<T, Mutable>) -> Self {
        cursor.as_const()
    }
}

impl<T, A: Access> Clone for Cursor<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Copy for Cursor<T, A> {}

// equality only looks at the referenced node, never at the access flavor
impl<T, A: Access, B: Access> PartialEq<Cursor<T, B>> for Cursor<T, A> {
    fn eq(&self, other: &Cursor<T, B>) -> bool {
        self.pos == other.pos
    }
}

impl<T, A: Access> Eq for Cursor<T, A> {}

impl<T, A: Access> fmt::Debug for Cursor<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("access", &A::NAME)
            .field("position", &self.pos)
            .finish()
    }
}

#[cfg(test)]
mod cursor_tests {
    use super::*;

    #[test]
    fn end_cursors_compare_equal() {
        let list: ForwardList<u32> = [1].into();
        assert_eq!(list.end(), list.end());
        assert_eq!(list.end_mut(), list.end());
        assert!(list.end().is_end());
    }

    #[test]
    fn begin_equals_end_on_empty_list() {
        let list = ForwardList::<u32>::new();
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.begin_mut(), list.end());
    }

    #[test]
    fn before_begin_is_not_begin_or_end() {
        let list: ForwardList<u32> = [1].into();
        assert!(list.before_begin().is_before_begin());
        assert_ne!(list.before_begin(), list.begin());
        assert_ne!(list.before_begin(), list.end());
    }

    #[test]
    fn before_begin_cursors_of_different_lists_compare_equal() {
        let a: ForwardList<u32> = [1].into();
        let b: ForwardList<u32> = [1].into();
        assert_eq!(a.before_begin(), b.before_begin());
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn mutable_and_read_only_cursors_compare_by_node() {
        let list: ForwardList<u32> = [1, 2].into();
        let begin_mut = list.begin_mut();
        let begin = list.begin();
        assert_eq!(begin_mut, begin);
        assert_eq!(begin, begin_mut);

        let converted: Cursor<u32> = begin_mut.into();
        assert_eq!(converted, begin);
    }

    #[test]
    fn cursors_into_different_nodes_are_not_equal() {
        let list: ForwardList<u32> = [7, 7].into();
        let first = list.begin();
        let second = unsafe { first.next(&list) };
        // same value, different nodes
        assert_ne!(first, second);
        assert_eq!(unsafe { list.get(first) }, unsafe { list.get(second) });
    }

    #[test]
    fn cursor_walks_sentinel_to_end() {
        let list: ForwardList<u32> = [1, 2, 3].into();
        let mut cursor = list.before_begin();
        let mut seen = Vec::new();

        unsafe {
            cursor.move_next(&list);
            while cursor != list.end() {
                seen.push(*list.get(cursor));
                cursor.move_next(&list);
            }
        }

        assert_eq!(seen, [1, 2, 3]);
        assert!(cursor.is_end());
    }

    #[test]
    fn sentinel_of_empty_list_advances_to_end() {
        let list = ForwardList::<u32>::new();
        let cursor = unsafe { list.before_begin().next(&list) };
        assert_eq!(cursor, list.end());
    }

    #[test]
    fn copies_of_a_cursor_are_independent() {
        let list: ForwardList<u32> = [1, 2].into();
        let original = list.begin();
        let mut copy = original;
        unsafe { copy.move_next(&list) };

        assert_eq!(unsafe { *list.get(original) }, 1);
        assert_eq!(unsafe { *list.get(copy) }, 2);
    }

    #[test]
    fn cursor_can_mutate_elements() {
        let mut list: ForwardList<u32> = [41, 72].into();
        let mut cursor = list.begin_mut();
        unsafe {
            *list.get_mut(cursor) += 1;
            cursor.move_next(&list);
            *list.get_mut(cursor) += 1;
        }
        assert_eq!(list, [42, 73].into());
    }

    #[test]
    fn cursors_follow_nodes_across_swap() {
        let mut a: ForwardList<u32> = [1, 2].into();
        let mut b: ForwardList<u32> = [9].into();
        let second = unsafe { a.begin().next(&a) };

        a.swap(&mut b);

        assert_eq!(unsafe { *b.get(second) }, 2);
        let erased_next = unsafe { b.erase_after(b.begin()) };
        assert_eq!(erased_next, b.end());
        assert_eq!(b, [1].into());
    }

    #[test]
    fn debug_output_names_flavor_and_position() {
        let list = ForwardList::<u32>::new();
        let rendered = format!("{:?}", list.before_begin_mut());
        assert!(rendered.contains("Mutable"));
        assert!(rendered.contains("BeforeBegin"));
        assert!(format!("{:?}", list.end()).contains("End"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn advancing_past_the_end_asserts() {
        let list = ForwardList::<u32>::new();
        let mut cursor = list.end();
        unsafe { cursor.move_next(&list) };
    }
}
