// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::TryReserveError;

use thiserror::Error;

/// The ways a [`Stack`][Stack] operation can fail.
///
/// Every failure leaves the stack exactly as it was before the call, so the
/// caller is free to retry, fall back, or carry on using the stack.
///
/// Looking up an index outside the stack is not an error: it simply yields
/// `None`.
///
/// [Stack]: struct.Stack.html
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Storage for a new node couldn't be obtained.
    #[error("failed to allocate a stack node: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// The operation needs at least one element, but the stack is empty.
    #[error("the stack is empty")]
    EmptyStack,
}
