// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::types::Link;

/// One element of the chain, plus the link to the node below it.
#[derive(Clone, Debug)]
pub(crate) struct Node<A> {
    pub(crate) value: A,
    pub(crate) next: Link,
}

impl<A> Node<A> {
    pub(crate) fn new(value: A, next: Link) -> Self {
        Node { value, next }
    }

    pub(crate) fn into_parts(self) -> (A, Link) {
        (self.value, self.next)
    }

    pub(crate) fn value_as_ref(&self) -> &A {
        &self.value
    }

    pub(crate) fn value_as_mut(&mut self) -> &mut A {
        &mut self.value
    }
}

/// A cell in the node arena.
#[derive(Clone, Debug)]
pub(crate) enum Slot<A> {
    Occupied(Node<A>),
    Vacant,
}

impl<A> Slot<A> {
    pub(crate) fn as_node(&self) -> Option<&Node<A>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    pub(crate) fn as_node_mut(&mut self) -> Option<&mut Node<A>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    /// Vacate the slot, handing back whatever node it held.
    pub(crate) fn take(&mut self) -> Option<Node<A>> {
        match std::mem::replace(self, Slot::Vacant) {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    pub(crate) fn is_vacant(&self) -> bool {
        matches!(self, Slot::Vacant)
    }
}
