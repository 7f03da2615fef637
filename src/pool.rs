// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::TryReserveError;

use crate::node::{Node, Slot};
use crate::types::{Link, NodeIndex};

/// The storage arena behind a [`Stack`][crate::Stack].
///
/// Nodes live in a vector of slots and refer to each other by index, so a
/// released node can never be reached through a stale pointer. Released
/// slots go onto a free list and are handed out again by the next
/// allocation before the slot vector is grown.
///
/// The free list always has spare capacity for every slot in the arena, so
/// releasing a node never allocates and can't fail.
pub(crate) struct NodePool<A> {
    slots: Vec<Slot<A>>,
    free: Vec<NodeIndex>,
}

impl<A> NodePool<A> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Make sure the next `additional` allocations won't need to grow any
    /// storage.
    ///
    /// Nothing observable changes if this fails.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let spare = self.free.len();
        if additional <= spare {
            return Ok(());
        }
        let needed = additional - spare;
        let wanted = self.slots.len().saturating_add(needed);
        self.free.try_reserve(wanted - self.free.len())?;
        self.slots.try_reserve(needed)?;
        Ok(())
    }

    /// Store a new node and return the index of its slot.
    ///
    /// On failure the arena is left untouched and `value` is dropped.
    pub(crate) fn alloc(&mut self, value: A, next: Link) -> Result<NodeIndex, TryReserveError> {
        self.reserve(1)?;
        let node = Node::new(value, next);
        if let Some(index) = self.free.pop() {
            debug_assert!(self.slots[index].is_vacant());
            self.slots[index] = Slot::Occupied(node);
            Ok(index)
        } else {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied(node));
            Ok(index)
        }
    }

    /// Remove the node at `index`, putting its slot back on the free list.
    ///
    /// Returns `None` if there's no live node at `index`, so a slot can
    /// never be released twice.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Option<Node<A>> {
        let node = self.slots.get_mut(index)?.take()?;
        debug_assert!(self.free.len() < self.free.capacity());
        self.free.push(index);
        Some(node)
    }

    pub(crate) fn get(&self, index: NodeIndex) -> Option<&Node<A>> {
        self.slots.get(index).and_then(Slot::as_node)
    }

    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node<A>> {
        self.slots.get_mut(index).and_then(Slot::as_node_mut)
    }

    /// Number of live nodes.
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of vacant slots waiting on the free list.
    pub(crate) fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Number of nodes the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Give trailing vacant slots and any excess capacity back to the
    /// allocator. Returns the number of slots dropped.
    pub(crate) fn shrink_to_fit(&mut self) -> usize {
        let before = self.slots.len();
        while self.slots.last().map_or(false, Slot::is_vacant) {
            self.slots.pop();
        }
        let len = self.slots.len();
        self.free.retain(|&index| index < len);
        self.slots.shrink_to_fit();
        self.free.shrink_to(len);
        before - len
    }

    /// Drop every live node along with all of the arena's storage.
    ///
    /// Returns the number of nodes released.
    pub(crate) fn clear(&mut self) -> usize {
        let released = self.occupied();
        self.slots = Vec::new();
        self.free = Vec::new();
        released
    }
}

impl<A> Clone for NodePool<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        let slots = self.slots.clone();
        let mut free = Vec::with_capacity(slots.len());
        free.extend_from_slice(&self.free);
        Self { slots, free }
    }
}
