//! a singly-linked list that owns its nodes. elements can be pushed and
//! popped at the front, and inserted or erased directly after any known
//! position, all in constant time.

mod cmp;
mod cursor;

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

cfg_if::cfg_if! {
    if #[cfg(feature = "no-std")] {
        use alloc::boxed::Box;
    } else {
        use std::boxed::Box;
    }
}

pub use cmp::swap;
use cursor::Position;
pub use cursor::{Access, Cursor, CursorMut, Mutable, ReadOnly};

type Link<T> = Option<NonNull<Node<T>>>;

/// one element of the list along with the link to its successor
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// the before-first anchor. it only carries the link to the first node, so
/// `T` never needs an "empty" value
struct Sentinel<T> {
    next: Link<T>,
}

/// a singly-linked list with owned nodes
pub struct ForwardList<T> {
    /// always present, even in empty lists
    sentinel: Sentinel<T>,
    /// the number of nodes reachable from the sentinel
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// create an empty list
    pub const fn new() -> Self {
        Self {
            sentinel: Sentinel { next: None },
            len: 0,
            marker: PhantomData,
        }
    }

    /// get the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// returns true if the length of the list is 0
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// immutably borrow the first element, or None if the list is empty
    pub fn front(&self) -> Option<&T> {
        // SAFETY: every node reachable from the sentinel is owned by `self`
        self.sentinel
            .next
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// mutably borrow the first element, or None if the list is empty
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.sentinel
            .next
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// push a value to the front of this list
    pub fn push_front(&mut self, value: T) {
        // SAFETY: the sentinel is always a valid anchor
        unsafe { self.link_after(Position::BeforeBegin, value) };
    }

    /// remove and drop the first element.
    ///
    /// # Panics
    /// if the list is empty
    pub fn pop_front(&mut self) {
        assert!(!self.is_empty(), "pop_front called on an empty list");
        drop(self.take_front());
    }

    /// remove the first element and hand it back, or None if the list is
    /// empty
    pub fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: the list is not empty so the sentinel has a successor
            unsafe { Some(self.unlink_after(Position::BeforeBegin)) }
        }
    }

    /// insert `value` directly after `pos` and return a cursor to the new
    /// element. `pos` may be the sentinel, which inserts at the front.
    ///
    /// # Safety
    /// `pos` must be a live, non past-the-end position of this list. a cursor
    /// to a node that was erased, or one produced by another list, is
    /// undefined behavior. debug builds verify membership.
    pub unsafe fn insert_after<P: Into<Cursor<T>>>(&mut self, pos: P, value: T) -> CursorMut<T> {
        let pos = pos.into().position();
        debug_assert!(self.owns(pos), "cursor does not point into this list");
        let node = self.link_after(pos, value);
        Cursor::new(Position::Node(node))
    }

    /// erase the element directly after `pos` and return a cursor to the
    /// element that now follows `pos`, which is past-the-end if the erased
    /// element was the last one.
    ///
    /// # Safety
    /// `pos` must be a live position of this list with an element after it.
    /// debug builds verify membership; erasing after the last element panics.
    pub unsafe fn erase_after<P: Into<Cursor<T>>>(&mut self, pos: P) -> CursorMut<T> {
        let pos = pos.into().position();
        debug_assert!(!self.is_empty(), "erase_after called on an empty list");
        debug_assert!(self.owns(pos), "cursor does not point into this list");
        drop(self.unlink_after(pos));
        Cursor::new(Position::from_link(*self.next_link_mut(pos)))
    }

    /// drop every element, leaving the list empty
    pub fn clear(&mut self) {
        while let Some(node) = self.sentinel.next {
            // SAFETY: the node is reachable from the sentinel and therefore
            // owned by us. it is unlinked before its value is dropped
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.sentinel.next = node.next;
            self.len -= 1;
        }
    }

    /// exchange the contents of two lists without touching any node. cursors
    /// into either list keep pointing at the same nodes, which now belong to
    /// the other list.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.sentinel.next, &mut other.sentinel.next);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// a read-only cursor to the first element
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(self.first_position())
    }

    /// a mutable cursor to the first element. the cursor borrows nothing;
    /// mutation through it still goes through `get_mut`, which takes
    /// `&mut self`
    pub fn begin_mut(&self) -> CursorMut<T> {
        Cursor::new(self.first_position())
    }

    /// the read-only past-the-end cursor
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(Position::End)
    }

    /// the mutable past-the-end cursor
    pub fn end_mut(&self) -> CursorMut<T> {
        Cursor::new(Position::End)
    }

    /// a read-only cursor to the sentinel in front of the first element
    pub fn before_begin(&self) -> Cursor<T> {
        Cursor::new(Position::BeforeBegin)
    }

    /// a mutable cursor to the sentinel in front of the first element
    pub fn before_begin_mut(&self) -> CursorMut<T> {
        Cursor::new(Position::BeforeBegin)
    }

    /// borrow the element `pos` points at.
    ///
    /// # Safety
    /// `pos` must reference a live element of this list. the sentinel and
    /// past-the-end positions panic.
    pub unsafe fn get<P: Into<Cursor<T>>>(&self, pos: P) -> &T {
        match pos.into().position() {
            Position::Node(node) => {
                debug_assert!(self.owns(Position::Node(node)));
                &(*node.as_ptr()).value
            }
            Position::BeforeBegin | Position::End => {
                panic!("dereferenced a cursor that does not point at an element")
            }
        }
    }

    /// mutably borrow the element `pos` points at.
    ///
    /// # Safety
    /// see `get`
    pub unsafe fn get_mut(&mut self, pos: CursorMut<T>) -> &mut T {
        match pos.position() {
            Position::Node(node) => {
                debug_assert!(self.owns(Position::Node(node)));
                &mut (*node.as_ptr()).value
            }
            Position::BeforeBegin | Position::End => {
                panic!("dereferenced a cursor that does not point at an element")
            }
        }
    }

    /// returns true if any element equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    /// return an immutable iterator for this list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.sentinel.next,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// return a mutable iterator for this list
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.sentinel.next,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// return a cursor that borrows this list, starting at the sentinel
    pub fn cursor(&mut self) -> ForwardListCursor<'_, T> {
        ForwardListCursor {
            list: self,
            curr: Position::BeforeBegin,
        }
    }

    fn first_position(&self) -> Position<T> {
        Position::from_link(self.sentinel.next)
    }

    /// walk the chain looking for `pos`. only used by debug assertions
    fn owns(&self, pos: Position<T>) -> bool {
        match pos {
            Position::BeforeBegin | Position::End => true,
            Position::Node(target) => {
                let mut curr = self.sentinel.next;
                while let Some(node) = curr {
                    if node == target {
                        return true;
                    }
                    curr = unsafe { (*node.as_ptr()).next };
                }
                false
            }
        }
    }

    /// the link slot that follows `pos`
    /// # Safety
    /// `pos` must be the sentinel or a live node of this list
    unsafe fn next_link_mut(&mut self, pos: Position<T>) -> &mut Link<T> {
        match pos {
            Position::BeforeBegin => &mut self.sentinel.next,
            Position::Node(node) => &mut (*node.as_ptr()).next,
            Position::End => panic!("a past-the-end cursor has nothing after it"),
        }
    }

    /// allocate a node for `value` and splice it in after `pos`
    /// # Safety
    /// `pos` must be the sentinel or a live node of this list
    // Before: (pos) -> (pos.next)
    // After: (pos) -> (n) -> (pos.next)
    unsafe fn link_after(&mut self, pos: Position<T>, value: T) -> NonNull<Node<T>> {
        let slot = self.next_link_mut(pos);
        let node = Box::new(Node { value, next: *slot });
        let node = NonNull::from(Box::leak(node));
        *slot = Some(node);
        self.len += 1;
        node
    }

    /// unlink the node after `pos`, free it and return its value
    /// # Safety
    /// `pos` must be the sentinel or a live node of this list
    // Before: (pos) -> (n) -> (n.next)
    // After: (pos) -> (n.next)
    unsafe fn unlink_after(&mut self, pos: Position<T>) -> T {
        let slot = self.next_link_mut(pos);
        let Some(node) = *slot else {
            panic!("nothing to erase after the last element");
        };
        let node = Box::from_raw(node.as_ptr());
        *slot = node.next;
        self.len -= 1;
        node.value
    }

    /// build a fresh chain from `values` in a scratch list and only adopt it
    /// once every value is in place. if the iterator panics, `self` is left
    /// exactly as it was.
    fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut scratch = Self::new();
        let mut pos = Position::BeforeBegin;
        for value in values {
            // SAFETY: `pos` is the sentinel or the node we just linked
            pos = Position::Node(unsafe { scratch.link_after(pos, value) });
        }
        self.swap(&mut scratch);
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        list.assign(self.iter().cloned());
        list
    }

    // copy-then-swap: a panicking `T::clone` leaves `self` untouched
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.assign(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// append at the back, walking once to find the last node
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut pos = Position::BeforeBegin;
        while let Some(node) = unsafe { *self.next_link_mut(pos) } {
            pos = Position::Node(node);
        }
        for value in iter {
            pos = Position::Node(unsafe { self.link_after(pos, value) });
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for 'a so the node stays alive
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is mutably borrowed for 'a and each node is
            // handed out once
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// an owning iterator, popping elements off the front
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// a cursor that borrows the list it walks. since nothing else can touch the
/// list while it is alive, its position is always valid and every operation
/// is safe. it can never remove the node it is standing on, only the one
/// after it.
pub struct ForwardListCursor<'a, T> {
    list: &'a mut ForwardList<T>,
    curr: Position<T>,
}

impl<'a, T> ForwardListCursor<'a, T> {
    /// get the data of the current node or None if the cursor is at the
    /// sentinel or past-the-end
    pub fn curr_data(&self) -> Option<&T> {
        match self.curr {
            Position::Node(node) => Some(unsafe { &(*node.as_ptr()).value }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// get the data of the current node or None if the cursor is at the
    /// sentinel or past-the-end
    pub fn curr_data_mut(&mut self) -> Option<&mut T> {
        match self.curr {
            Position::Node(node) => Some(unsafe { &mut (*node.as_ptr()).value }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// peek at the element after the current position
    pub fn peek_next(&self) -> Option<&T> {
        let next = match self.curr {
            Position::BeforeBegin => self.list.sentinel.next,
            Position::Node(node) => unsafe { (*node.as_ptr()).next },
            Position::End => None,
        };
        next.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// move the cursor forward one element. past-the-end is terminal, moving
    /// from there does nothing
    pub fn move_next(&mut self) {
        self.curr = match self.curr {
            Position::BeforeBegin => self.list.first_position(),
            Position::Node(node) => Position::from_link(unsafe { (*node.as_ptr()).next }),
            Position::End => Position::End,
        };
    }

    /// insert a value after the current position, increasing the size of the
    /// list by 1. the cursor will not move.
    ///
    /// # Panics
    /// if the cursor is past-the-end
    pub fn insert_after_curr(&mut self, value: T) {
        assert!(
            self.curr != Position::End,
            "cannot insert after the past-the-end position"
        );
        // SAFETY: `curr` is the sentinel or a live node of the borrowed list
        unsafe { self.list.link_after(self.curr, value) };
    }

    /// remove the element after the current position and return it, or None
    /// if there is no such element. the cursor will not move.
    pub fn remove_after_curr(&mut self) -> Option<T> {
        if self.curr == Position::End {
            return None;
        }
        // SAFETY: `curr` is the sentinel or a live node of the borrowed list
        unsafe {
            if self.list.next_link_mut(self.curr).is_none() {
                return None;
            }
            Some(self.list.unlink_after(self.curr))
        }
    }

    /// a raw read-only cursor at the current position. it stays usable after
    /// this borrowing cursor is dropped, as long as its node is not removed
    pub fn position(&self) -> Cursor<T> {
        Cursor::new(self.curr)
    }
}


#[cfg(test)]
mod iter_test {
    use super::*;

    #[test]
    fn basic_iter_test() {
        let nums = [73, 42, 114, 901];
        let list: ForwardList<u32> = nums.into();

        for (value, num) in list.iter().zip(nums.iter()) {
            assert_eq!(value, num);
        }
    }

    #[test]
    fn iter_terminates_properly_single_element() {
        let list: ForwardList<u32> = [42].into();

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&42));

        for _i in 0..10 {
            assert!(iter.next().is_none());
        }
    }

    #[test]
    fn iter_reports_exact_size() {
        let list: ForwardList<u32> = [1, 2, 3].into();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        let cloned = iter.clone();
        assert_eq!(cloned.copied().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn basic_iter_mut_test() {
        let mut list: ForwardList<u32> = [1, 2, 3].into();
        for value in list.iter_mut() {
            *value *= 10;
        }
        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list, [11, 21, 31].into());
    }

    #[test]
    fn into_iter_yields_owned_values() {
        let list: ForwardList<String> = ["a".to_string(), "b".to_string()].into();
        let values: Vec<String> = list.into_iter().collect();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn into_iter_drops_unconsumed_values() {
        let list: ForwardList<String> = ["a".to_string(), "b".to_string()].into();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().as_deref(), Some("a"));
        drop(iter);
    }

    #[test]
    fn for_loop_over_reference() {
        let list: ForwardList<u32> = [1, 2, 3].into();
        let mut sum = 0;
        for value in &list {
            sum += *value;
        }
        assert_eq!(sum, 6);
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use std::collections::VecDeque;

    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_derive::Arbitrary;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};
    use rand::Rng;

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn forward_list_state_machine_test(
            sequential
            100..500
            =>
            ForwardList<u32>
        );
    }

    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        /// insert after the position at this index, 0 being the sentinel
        InsertAfter(usize, u32),
        /// erase after the position at this index, 0 being the sentinel
        EraseAfter(usize),
        Clear,
        CloneAndSwap,
    }

    pub struct ForwardListStateMachine;

    impl ReferenceStateMachine for ForwardListStateMachine {
        type State = VecDeque<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(VecDeque::new()).boxed()
        }

        fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
            let len = state.len();
            if len == 0 {
                prop_oneof![
                    3 => any::<u32>().prop_map(Transition::PushFront),
                    3 => any::<u32>().prop_map(|v| Transition::InsertAfter(0, v)),
                    1 => Just(Transition::Clear),
                    1 => Just(Transition::CloneAndSwap),
                ]
                .boxed()
            } else {
                prop_oneof![
                    3 => any::<u32>().prop_map(Transition::PushFront),
                    2 => Just(Transition::PopFront),
                    3 => (0..=len, any::<u32>()).prop_map(|(i, v)| Transition::InsertAfter(i, v)),
                    2 => (0..len).prop_map(Transition::EraseAfter),
                    1 => Just(Transition::Clear),
                    1 => Just(Transition::CloneAndSwap),
                ]
                .boxed()
            }
        }

        fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
            match transition {
                Transition::PopFront => !state.is_empty(),
                Transition::InsertAfter(index, _) => *index <= state.len(),
                Transition::EraseAfter(index) => *index < state.len(),
                _ => true,
            }
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PushFront(value) => state.push_front(*value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfter(index, value) => state.insert(*index, *value),
                Transition::EraseAfter(index) => {
                    state.remove(*index);
                }
                Transition::Clear => state.clear(),
                Transition::CloneAndSwap => {}
            }
            state
        }
    }

    /// a mutable cursor `index` positions past the sentinel
    fn cursor_at(list: &mut ForwardList<u32>, index: usize) -> CursorMut<u32> {
        let mut cursor = list.before_begin_mut();
        for _ in 0..index {
            unsafe { cursor.move_next(list) };
        }
        cursor
    }

    impl StateMachineTest for ForwardList<u32> {
        type SystemUnderTest = Self;
        type Reference = ForwardListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            Self::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => state.pop_front(),
                Transition::InsertAfter(index, value) => {
                    let pos = cursor_at(&mut state, index);
                    let inserted = unsafe { state.insert_after(pos, value) };
                    assert_eq!(unsafe { *state.get(inserted) }, value);
                }
                Transition::EraseAfter(index) => {
                    let pos = cursor_at(&mut state, index);
                    let next = unsafe { state.erase_after(pos) };
                    assert_eq!(next, unsafe { pos.next(&state) });
                }
                Transition::Clear => state.clear(),
                Transition::CloneAndSwap => {
                    let mut copy = state.clone();
                    swap(&mut state, &mut copy);
                    assert_eq!(state, copy);
                }
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());
            assert_eq!(state.iter().count(), ref_state.len());

            for (value, ref_value) in state.iter().zip(ref_state.iter()) {
                assert_eq!(value, ref_value);
            }
        }
    }

    #[derive(Arbitrary, Debug)]
    enum Operation {
        PushFront(u32),
        PopFront,
        InsertAfter(u32),
        EraseAfter,
        Clear,
    }

    fn apply_operation(list: &mut ForwardList<u32>, reference: &mut Vec<u32>, op: &Operation) {
        match op {
            Operation::PushFront(value) => {
                list.push_front(*value);
                reference.insert(0, *value);
            }
            Operation::PopFront => {
                if !reference.is_empty() {
                    list.pop_front();
                    reference.remove(0);
                }
            }
            Operation::InsertAfter(value) => {
                let index = rand::thread_rng().gen_range(0..=reference.len());
                let pos = cursor_at(list, index);
                unsafe { list.insert_after(pos, *value) };
                reference.insert(index, *value);
            }
            Operation::EraseAfter => {
                if !reference.is_empty() {
                    let index = rand::thread_rng().gen_range(0..reference.len());
                    let pos = cursor_at(list, index);
                    unsafe { list.erase_after(pos) };
                    reference.remove(index);
                }
            }
            Operation::Clear => {
                list.clear();
                reference.clear();
            }
        }
    }

    proptest! {
        #[test]
        fn values_round_trip_through_construction(values in vec(any::<u32>(), 0..64)) {
            let list: ForwardList<u32> = values.iter().copied().collect();
            prop_assert_eq!(list.len(), values.len());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
        }

        #[test]
        fn copies_never_observe_each_others_mutations(
            values in vec(any::<u32>(), 0..32),
            ops in vec(any::<Operation>(), 0..64),
        ) {
            let mut original: ForwardList<u32> = values.iter().copied().collect();
            let mut copy = original.clone();
            let mut reference = values.clone();

            for op in ops.iter() {
                apply_operation(&mut copy, &mut reference, op);
            }

            prop_assert_eq!(original.iter().copied().collect::<Vec<_>>(), values.clone());
            prop_assert_eq!(copy.iter().copied().collect::<Vec<_>>(), reference.clone());

            // and the other way around: the copy is unaffected by the original
            let mut original_reference = values;
            for op in ops.iter() {
                apply_operation(&mut original, &mut original_reference, op);
            }

            prop_assert_eq!(original.iter().copied().collect::<Vec<_>>(), original_reference);
            prop_assert_eq!(copy.iter().copied().collect::<Vec<_>>(), reference);
        }

        #[test]
        fn clone_from_target_is_independent_of_its_source(
            values in vec(any::<u32>(), 0..32),
            previous in vec(any::<u32>(), 0..32),
            ops in vec(any::<Operation>(), 0..64),
        ) {
            let mut source: ForwardList<u32> = values.iter().copied().collect();
            let mut target: ForwardList<u32> = previous.iter().copied().collect();
            target.clone_from(&source);
            prop_assert_eq!(target.iter().copied().collect::<Vec<_>>(), values.clone());

            let mut target_reference = values.clone();
            for op in ops.iter() {
                apply_operation(&mut target, &mut target_reference, op);
            }
            prop_assert_eq!(source.iter().copied().collect::<Vec<_>>(), values.clone());

            let mut source_reference = values;
            for op in ops.iter() {
                apply_operation(&mut source, &mut source_reference, op);
            }
            prop_assert_eq!(source.iter().copied().collect::<Vec<_>>(), source_reference);
            prop_assert_eq!(target.iter().copied().collect::<Vec<_>>(), target_reference);
        }

        #[test]
        fn double_swap_restores_both_lists(
            a in vec(any::<u32>(), 0..16),
            b in vec(any::<u32>(), 0..16),
        ) {
            let mut lhs: ForwardList<u32> = a.iter().copied().collect();
            let mut rhs: ForwardList<u32> = b.iter().copied().collect();
            swap(&mut lhs, &mut rhs);
            swap(&mut lhs, &mut rhs);
            prop_assert_eq!(lhs.iter().copied().collect::<Vec<_>>(), a);
            prop_assert_eq!(rhs.iter().copied().collect::<Vec<_>>(), b);
        }
    }
}
