multiversx_sc::imports!();

use crate::errors::*;
use crate::oracle;
use crate::types::PendingTransfer;

/// Snapshot of the role state for the current call, checked through
/// capability predicates instead of ad-hoc storage reads.
pub struct AccessContext<M: ManagedTypeApi> {
    pub caller: ManagedAddress<M>,
    pub owner: ManagedAddress<M>,
    pub controller: ManagedAddress<M>,
    pub pending_owner: Option<ManagedAddress<M>>,
    pub paused: bool,
}

impl<M: ManagedTypeApi> AccessContext<M> {
    pub fn is_owner(&self) -> bool {
        self.caller == self.owner
    }

    pub fn is_controller(&self) -> bool {
        self.caller == self.controller
    }

    pub fn is_pending_owner(&self) -> bool {
        self.pending_owner.as_ref() == Some(&self.caller)
    }

    pub fn is_active(&self) -> bool {
        !self.paused
    }
}

// ============================================================
// AccessGate — owner, controller, pause flag, ownership handoff
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule: oracle::VotingPowerOracleModule {
    fn init_access(&self, authority: &ManagedAddress) {
        self.owner().set(authority);
        self.controller().set(authority);
        self.paused().set(false);
    }

    fn access_context(&self) -> AccessContext<Self::Api> {
        let pending_owner = if self.pending_transfer().is_empty() {
            None
        } else {
            Some(self.pending_transfer().get().candidate)
        };

        AccessContext {
            caller: self.blockchain().get_caller(),
            owner: self.owner().get(),
            controller: self.controller().get(),
            pending_owner,
            paused: self.paused().get(),
        }
    }

    /// Context for endpoints gated on voting being active.
    fn require_active(&self) -> AccessContext<Self::Api> {
        let ctx = self.access_context();
        require!(ctx.is_active(), ERR_VOTING_PAUSED);
        ctx
    }

    // ========================================================
    // ENDPOINT: setController
    // ========================================================

    #[endpoint(setController)]
    fn set_controller(&self, new_controller: ManagedAddress) {
        let ctx = self.access_context();
        require!(ctx.is_owner(), ERR_NOT_AUTHORIZED);
        require!(!new_controller.is_zero(), ERR_INVALID_ADDRESS);

        self.controller().set(&new_controller);
        self.controller_changed_event(&ctx.controller, &new_controller);
    }

    // ========================================================
    // ENDPOINTS: pauseVoting / resumeVoting (controller only)
    // ========================================================

    #[endpoint(pauseVoting)]
    fn pause_voting(&self) {
        let ctx = self.access_context();
        require!(ctx.is_controller(), ERR_NOT_AUTHORIZED);
        require!(!ctx.paused, ERR_ALREADY_PAUSED);

        self.paused().set(true);
        self.voting_paused_event(&ctx.caller);
    }

    #[endpoint(resumeVoting)]
    fn resume_voting(&self) {
        let ctx = self.access_context();
        require!(ctx.is_controller(), ERR_NOT_AUTHORIZED);
        require!(ctx.paused, ERR_NOT_PAUSED);

        self.paused().set(false);
        self.voting_resumed_event(&ctx.caller);
    }

    // ========================================================
    // ENDPOINTS: two-step ownership handoff
    // The candidate must hold governance tokens both when the
    // transfer is started and when it is accepted.
    // ========================================================

    #[endpoint(transferOwnershipWithToken)]
    fn transfer_ownership_with_token(&self, new_owner: ManagedAddress) {
        let ctx = self.access_context();
        require!(ctx.is_owner(), ERR_NOT_AUTHORIZED);
        require!(
            !new_owner.is_zero() && new_owner != ctx.owner,
            ERR_INVALID_ADDRESS
        );
        require!(self.holds_governance_token(&new_owner), ERR_TOKEN_REQUIRED);

        let pending = PendingTransfer {
            candidate: new_owner.clone(),
            initiated_at: self.blockchain().get_block_timestamp(),
        };
        self.pending_transfer().set(&pending);

        self.ownership_transfer_started_event(&ctx.owner, &new_owner);
    }

    #[endpoint(acceptOwnership)]
    fn accept_ownership(&self) {
        let ctx = self.access_context();
        require!(ctx.pending_owner.is_some(), ERR_NO_PENDING_TRANSFER);
        require!(ctx.is_pending_owner(), ERR_NOT_AUTHORIZED);
        require!(self.holds_governance_token(&ctx.caller), ERR_TOKEN_REQUIRED);

        self.owner().set(&ctx.caller);
        self.pending_transfer().clear();

        self.ownership_transferred_event(&ctx.owner, &ctx.caller);
    }

    #[endpoint(cancelOwnershipTransfer)]
    fn cancel_ownership_transfer(&self) {
        let ctx = self.access_context();
        require!(ctx.is_owner(), ERR_NOT_AUTHORIZED);
        let candidate = match ctx.pending_owner {
            Some(candidate) => candidate,
            None => sc_panic!(ERR_NO_PENDING_TRANSFER),
        };

        self.pending_transfer().clear();
        self.ownership_transfer_canceled_event(&ctx.owner, &candidate);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (candidate, timestamp the transfer was started), if any
    #[view(getPendingOwner)]
    fn get_pending_owner(&self) -> OptionalValue<MultiValue2<ManagedAddress, u64>> {
        if self.pending_transfer().is_empty() {
            return OptionalValue::None;
        }
        let pending = self.pending_transfer().get();
        OptionalValue::Some((pending.candidate, pending.initiated_at).into())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("controllerChanged")]
    fn controller_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] new_controller: &ManagedAddress,
    );

    #[event("votingPaused")]
    fn voting_paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("votingResumed")]
    fn voting_resumed_event(&self, #[indexed] by: &ManagedAddress);

    #[event("ownershipTransferStarted")]
    fn ownership_transfer_started_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] candidate: &ManagedAddress,
    );

    #[event("ownershipTransferCanceled")]
    fn ownership_transfer_canceled_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] candidate: &ManagedAddress,
    );

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("pendingTransfer")]
    fn pending_transfer(&self) -> SingleValueMapper<PendingTransfer<Self::Api>>;
}
