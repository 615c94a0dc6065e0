//! Owner gate and pause switch.
//!
//! Each engine embeds one [`Governance`].  Admin operations call
//! [`ensure_owner`](Governance::ensure_owner); user operations call
//! [`ensure_active`](Governance::ensure_active).  The router and the
//! messenger have independent instances, so pausing one never affects the
//! other.

use crate::context::CallContext;
use crate::domain::Identity;
use crate::error::RouterError;

/// Owner identity and pause flag for one subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Governance {
    owner: Identity,
    paused: bool,
}

impl Governance {
    /// Creates governance state owned by `owner`.
    #[must_use]
    pub const fn new(owner: Identity, paused: bool) -> Self {
        Self { owner, paused }
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Whether the subsystem is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fails unless the caller is the owner.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Unauthorized`] for any other caller.
    pub fn ensure_owner(&self, ctx: &CallContext) -> crate::error::Result<()> {
        if ctx.caller != self.owner {
            tracing::debug!(caller = %ctx.caller, "rejected non-owner admin call");
            return Err(RouterError::Unauthorized);
        }
        Ok(())
    }

    /// Fails while the subsystem is paused.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Paused`].
    pub fn ensure_active(&self) -> crate::error::Result<()> {
        if self.paused {
            return Err(RouterError::Paused);
        }
        Ok(())
    }

    /// Sets the pause flag. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Unauthorized`] for a non-owner caller.
    pub fn set_paused(&mut self, ctx: &CallContext, paused: bool) -> crate::error::Result<()> {
        self.ensure_owner(ctx)?;
        self.paused = paused;
        Ok(())
    }

    /// Hands ownership to `new_owner` and returns the previous owner.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Unauthorized`] for a non-owner caller.
    /// - [`RouterError::InvalidConfiguration`] if `new_owner` is the zero
    ///   identity.
    pub fn transfer_ownership(
        &mut self,
        ctx: &CallContext,
        new_owner: Identity,
    ) -> crate::error::Result<Identity> {
        self.ensure_owner(ctx)?;
        if new_owner.is_zero() {
            return Err(RouterError::InvalidConfiguration("owner cannot be the zero identity"));
        }
        Ok(core::mem::replace(&mut self.owner, new_owner))
    }
}
