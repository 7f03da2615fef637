// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out [`Stack`][Stack] built on a singly linked chain of
//! nodes.
//!
//! # Storage
//!
//! Each value pushed onto a [`Stack`][Stack] gets its own node, which links
//! to the node pushed before it. Rather than giving every node its own heap
//! allocation, the nodes live in an arena owned by the stack and link to
//! each other by slot index. A popped node's slot goes on a free list and is
//! reused by the next push, so a stack which goes up and down a lot settles
//! into doing no allocation at all.
//!
//! Because links are indices into storage the stack owns, there's no way for
//! a node to be reached after it's been released, released twice, or leaked.
//! Dropping a stack releases all of its nodes in one go, without recursing
//! down the chain, so even very deep stacks drop safely.
//!
//! # Failure
//!
//! Operations which can fail return a [`StackError`][StackError] and leave
//! the stack untouched:
//!
//!   * [`Stack::push()`][Stack::push] fails with
//!     [`StackError::AllocationFailure`][AllocationFailure] if storage for a
//!     new node can't be obtained.
//!   * [`Stack::pop()`][Stack::pop] fails with
//!     [`StackError::EmptyStack`][EmptyStack] if there's nothing to pop.
//!
//! Lookups which find nothing, including
//! [`Stack::search_by_index()`][Stack::search_by_index] with an index past
//! the base of the stack, just return `None`.
//!
//! # Thread Safety
//!
//! [`Stack`][Stack] does no locking of its own. It can be moved between
//! threads like any other owned value, but sharing one between threads needs
//! external synchronisation, such as a `Mutex`.
//!
//! # Logging
//!
//! The stack emits [`tracing`][tracing] events: `trace` for every push and
//! pop, `debug` when storage is released in bulk, and `warn` when an
//! allocation fails. Nothing is logged unless you install a subscriber.
//!
//! # Example
//!
//! ```rust
//! # use nodestack::{Stack, StackError};
//! let mut stack = Stack::new();
//! for i in 0..1000 {
//!     stack.push(i)?;
//! }
//! assert_eq!(1000, stack.len());
//! assert_eq!(Some(&999), stack.search_by_index(0));
//!
//! // Values come back out in reverse order.
//! for i in (0..1000).rev() {
//!     assert_eq!(Ok(i), stack.pop());
//! }
//! assert!(stack.is_empty());
//! assert_eq!(Err(StackError::EmptyStack), stack.pop());
//! # Ok::<(), StackError>(())
//! ```
//!
//! [Stack]: struct.Stack.html
//! [Stack::push]: struct.Stack.html#method.push
//! [Stack::pop]: struct.Stack.html#method.pop
//! [Stack::search_by_index]: struct.Stack.html#method.search_by_index
//! [StackError]: enum.StackError.html
//! [AllocationFailure]: enum.StackError.html#variant.AllocationFailure
//! [EmptyStack]: enum.StackError.html#variant.EmptyStack
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

use static_assertions::assert_impl_all;

mod counter;
mod error;
mod node;
mod pool;
mod stack;
mod types;

pub use self::error::StackError;
pub use self::stack::{IntoIter, Iter, Stack};

assert_impl_all!(Stack<i64>: Send, Sync, Clone, Default, std::fmt::Debug);
assert_impl_all!(StackError: std::error::Error, Send, Sync);

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill_drop(push_count: usize, pop_count: usize) {
        let counter = AtomicUsize::new(0);
        {
            let mut stack = Stack::new();
            for _ in 0..push_count {
                assert!(stack.push(DropTest::new(&counter)).is_ok());
            }
            assert_eq!(push_count, counter.load(Ordering::SeqCst));
            for _ in 0..pop_count {
                let popped = stack.pop();
                assert!(popped.is_ok());
            }
            assert_eq!(
                push_count.saturating_sub(pop_count),
                counter.load(Ordering::SeqCst)
            );
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_full() {
        fill_drop(2048, 0);
    }

    #[test]
    fn dropping_partially_popped() {
        fill_drop(2048, 1024);
    }

    #[test]
    fn dropping_fully_popped() {
        fill_drop(128, 128);
    }

    #[test]
    fn popped_value_outlives_its_node() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        stack.push(DropTest::new(&counter)).unwrap();
        stack.push(DropTest::new(&counter)).unwrap();
        let popped = stack.pop().unwrap();
        assert_eq!(2, counter.load(Ordering::SeqCst));
        // Refilling the vacated slot must not touch the popped value.
        stack.push(DropTest::new(&counter)).unwrap();
        assert_eq!(3, counter.load(Ordering::SeqCst));
        drop(popped);
        assert_eq!(2, counter.load(Ordering::SeqCst));
        drop(stack);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn destroy_releases_each_node_once() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        for _ in 0..100 {
            stack.push(DropTest::new(&counter)).unwrap();
        }
        stack.pop().unwrap();
        assert_eq!(99, counter.load(Ordering::SeqCst));
        stack.destroy();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(stack.is_empty());
        stack.destroy();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_release() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        stack.push(DropTest::new(&counter)).unwrap();
        for _ in 0..10 {
            assert!(stack.peek().is_some());
        }
        assert_eq!(1, counter.load(Ordering::SeqCst));
        assert!(stack.pop().is_ok());
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn into_iter_drops_what_it_does_not_yield() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        for _ in 0..10 {
            stack.push(DropTest::new(&counter)).unwrap();
        }
        let mut iter = stack.into_iter();
        drop(iter.next());
        assert_eq!(9, counter.load(Ordering::SeqCst));
        drop(iter);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn option_of_stack_size_equals_stack_size() {
        use std::mem::size_of;
        assert_eq!(size_of::<Stack<usize>>(), size_of::<Option<Stack<usize>>>());
    }
}
