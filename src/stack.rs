// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::convert::TryInto;
use std::fmt::{Debug, Display, Error, Formatter};
use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::counter::Counter;
use crate::error::StackError;
use crate::node::Node;
use crate::pool::NodePool;
use crate::types::Link;

/// A last in, first out stack of `A`.
///
/// Elements are kept in a singly linked chain of nodes, running from the
/// most recently pushed element (the top) down to the oldest one (the
/// base). The nodes themselves live in an arena owned by the stack, and
/// slots freed by [`pop()`][pop] are reused by later pushes.
///
/// Every node is released exactly once: either by [`pop()`][pop], by
/// [`destroy()`][destroy], or when the stack is dropped.
///
/// # Examples
///
/// ```rust
/// # use nodestack::Stack;
/// let mut stack = Stack::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// stack.push(3)?;
/// assert_eq!(vec![&3, &2, &1], stack.iter().collect::<Vec<_>>());
///
/// assert_eq!(Ok(3), stack.pop());
/// assert_eq!(Some(&2), stack.peek());
/// assert_eq!(2, stack.len());
/// # Ok::<(), nodestack::StackError>(())
/// ```
///
/// [pop]: #method.pop
/// [destroy]: #method.destroy
#[derive(Clone)]
pub struct Stack<A> {
    pool: NodePool<A>,
    top: Link,
    len: usize,
}

impl<A> Stack<A> {
    /// Construct an empty stack.
    ///
    /// This doesn't allocate until the first push.
    pub const fn new() -> Self {
        Self {
            pool: NodePool::new(),
            top: None,
            len: 0,
        }
    }

    /// Construct an empty stack with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nodestack::Stack;
    /// let stack: Stack<i64> = Stack::with_capacity(1024)?;
    /// assert!(stack.is_empty());
    /// assert!(stack.capacity() >= 1024);
    /// # Ok::<(), nodestack::StackError>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        let mut stack = Self::new();
        stack.reserve(capacity)?;
        Ok(stack)
    }

    /// Push a value onto the top of the stack.
    ///
    /// If storage for the new node can't be allocated, this returns
    /// [`StackError::AllocationFailure`][AllocationFailure] and the stack is
    /// left as it was.
    ///
    /// [AllocationFailure]: enum.StackError.html#variant.AllocationFailure
    pub fn push(&mut self, value: A) -> Result<(), StackError> {
        let index = match self.pool.alloc(value, self.top) {
            Ok(index) => index,
            Err(err) => {
                warn!(len = self.len.count(), error = %err, "stack node allocation failed");
                return Err(err.into());
            }
        };
        self.top = Some(index);
        self.len.inc();
        trace!(len = self.len.count(), "push");
        Ok(())
    }

    /// Remove the top value from the stack and return it.
    ///
    /// Popping an empty stack returns
    /// [`StackError::EmptyStack`][EmptyStack] and changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nodestack::{Stack, StackError};
    /// let mut stack = Stack::new();
    /// assert_eq!(Err(StackError::EmptyStack), stack.pop());
    /// stack.push(42)?;
    /// assert_eq!(Ok(42), stack.pop());
    /// assert!(stack.is_empty());
    /// # Ok::<(), StackError>(())
    /// ```
    ///
    /// [EmptyStack]: enum.StackError.html#variant.EmptyStack
    pub fn pop(&mut self) -> Result<A, StackError> {
        let released = match self.top {
            Some(index) => self.pool.release(index),
            None => None,
        };
        let node = match released {
            Some(node) => node,
            None => {
                debug_assert_eq!(0, self.len.count());
                trace!("pop on empty stack");
                return Err(StackError::EmptyStack);
            }
        };
        let (value, next) = node.into_parts();
        self.top = next;
        self.len.dec();
        trace!(len = self.len.count(), "pop");
        Ok(value)
    }

    /// Get a reference to the top value, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&A> {
        self.top_node().map(Node::value_as_ref)
    }

    /// Alias for [`peek()`][peek].
    ///
    /// [peek]: #method.peek
    pub fn top(&self) -> Option<&A> {
        self.peek()
    }

    /// Get a mutable reference to the top value, or `None` if the stack is
    /// empty.
    pub fn peek_mut(&mut self) -> Option<&mut A> {
        let index = self.top?;
        self.pool.get_mut(index).map(Node::value_as_mut)
    }

    /// Test whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len.count() == 0, self.top.is_none());
        self.len.count() == 0
    }

    /// Get the number of values on the stack.
    pub fn len(&self) -> usize {
        self.len.count()
    }

    /// Find the value nearest the top which is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nodestack::Stack;
    /// let mut stack = Stack::new();
    /// stack.try_extend(vec![5, 10, 15])?;
    /// assert_eq!(Some(&10), stack.search_by_value(&10));
    /// assert_eq!(None, stack.search_by_value(&20));
    /// # Ok::<(), nodestack::StackError>(())
    /// ```
    pub fn search_by_value(&self, value: &A) -> Option<&A>
    where
        A: PartialEq,
    {
        self.iter().find(|item| *item == value)
    }

    /// Find how far below the top the nearest value equal to `value` sits,
    /// where the top itself is at position `0`.
    pub fn position(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Get the value `index` steps below the top.
    ///
    /// Index `0` is the top of the stack. Any index which is negative or not
    /// less than [`len()`][len] yields `None`.
    ///
    /// This walks the chain from the top, so it takes time proportional to
    /// `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nodestack::Stack;
    /// let mut stack = Stack::new();
    /// stack.try_extend(vec![1, 2, 3])?;
    /// assert_eq!(Some(&3), stack.search_by_index(0));
    /// assert_eq!(Some(&1), stack.search_by_index(2));
    /// assert_eq!(None, stack.search_by_index(3));
    /// assert_eq!(None, stack.search_by_index(-1));
    /// # Ok::<(), nodestack::StackError>(())
    /// ```
    ///
    /// [len]: #method.len
    pub fn search_by_index<I>(&self, index: I) -> Option<&A>
    where
        I: TryInto<usize>,
    {
        let index = index.try_into().ok()?;
        if index >= self.len() {
            return None;
        }
        self.iter().nth(index)
    }

    /// Walk the stack from the top down to the base.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            pool: &self.pool,
            next: self.top,
            remaining: self.len.count(),
        }
    }

    /// Alias for [`iter()`][iter]: visit every value from the top down to
    /// the base without changing anything.
    ///
    /// [iter]: #method.iter
    pub fn traverse(&self) -> Iter<'_, A> {
        self.iter()
    }

    /// Release every value on the stack, leaving it empty.
    ///
    /// All of the stack's storage goes back to the allocator. Calling this
    /// on an empty stack does nothing.
    pub fn destroy(&mut self) {
        let released = self.pool.clear();
        self.top = None;
        let counted = self.len.reset();
        debug_assert_eq!(counted, released);
        if released > 0 {
            debug!(released, "destroyed stack");
        }
    }

    /// Make room for at least `additional` more values without
    /// reallocating.
    pub fn reserve(&mut self, additional: usize) -> Result<(), StackError> {
        self.pool.reserve(additional).map_err(|err| {
            warn!(additional, error = %err, "stack reservation failed");
            StackError::from(err)
        })
    }

    /// Get the number of values the stack can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Get the number of released node slots waiting to be reused.
    pub fn free_slots(&self) -> usize {
        self.pool.free_slots()
    }

    /// Give unused storage back to the allocator.
    pub fn shrink_to_fit(&mut self) {
        let dropped = self.pool.shrink_to_fit();
        if dropped > 0 {
            debug!(dropped, len = self.len.count(), "shrunk stack");
        }
    }

    /// Push every value from `iter` in order, so the last one ends up on
    /// top.
    ///
    /// Stops at the first allocation failure. Values pushed before the
    /// failure stay on the stack.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), StackError>
    where
        I: IntoIterator<Item = A>,
    {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0)?;
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    fn top_node(&self) -> Option<&Node<A>> {
        self.top.and_then(|index| self.pool.get(index))
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PartialEq for Stack<A>
where
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A> Eq for Stack<A> where A: Eq {}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> Display for Stack<A>
where
    A: Display,
{
    /// Write every value from the top down, separated by spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nodestack::Stack;
    /// let mut stack = Stack::new();
    /// stack.try_extend(vec![5, 10, 15])?;
    /// assert_eq!("15 10 5", stack.to_string());
    /// # Ok::<(), nodestack::StackError>(())
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// A borrowing iterator over a [`Stack`][Stack], from the top down.
///
/// [Stack]: struct.Stack.html
pub struct Iter<'a, A> {
    pool: &'a NodePool<A>,
    next: Link,
    remaining: usize,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pool.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value_as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            pool: self.pool,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, A> Debug for Iter<'a, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Iter[{} remaining]", self.remaining)
    }
}

impl<'a, A> IntoIterator for &'a Stack<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A consuming iterator which pops a [`Stack`][Stack] until it's empty.
///
/// [Stack]: struct.Stack.html
#[derive(Debug)]
pub struct IntoIter<A>(Stack<A>);

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}

impl<A> FusedIterator for IntoIter<A> {}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
