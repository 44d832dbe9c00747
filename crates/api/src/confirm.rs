// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Confirmation gating for destructive operations.
//!
//! Deletions must pass through a gate before they reach the store. The
//! interactive frontends prompt the user; non-interactive callers use
//! `AutoApprove`.

/// Decides whether a destructive operation may proceed.
pub trait ConfirmationGate {
    /// Returns whether the described operation is approved.
    fn confirm(&self, description: &str) -> bool;
}

/// A gate that approves every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl ConfirmationGate for AutoApprove {
    fn confirm(&self, _description: &str) -> bool {
        true
    }
}
