// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Position of a node's slot inside a `NodePool`.
pub(crate) type NodeIndex = usize;

/// An owning link to the next node down the chain, `None` at the base.
pub(crate) type Link = Option<NodeIndex>;
