multiversx_sc::imports!();

use crate::types::CommitmentHash;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] creator: &ManagedAddress,
        #[indexed] end_time: u64,
        #[indexed] quorum: &BigUint,
        commitment_hash: &CommitmentHash<Self::Api>,
    );

    #[event("votingOpened")]
    fn voting_opened_event(&self, #[indexed] name: &ManagedBuffer);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        power: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] yes_votes: &BigUint,
        #[indexed] no_votes: &BigUint,
    );

    #[event("proposalResult")]
    fn proposal_result_event(&self, #[indexed] name: &ManagedBuffer, #[indexed] passed: bool);

    #[event("proposalClosed")]
    fn proposal_closed_event(&self, #[indexed] name: &ManagedBuffer);

    /// Keeps the final description and commitment for audit after erasure.
    #[event("proposalDeleted")]
    fn proposal_deleted_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] commitment_hash: &CommitmentHash<Self::Api>,
        description: &ManagedBuffer,
    );

    #[event("proposalRenamed")]
    fn proposal_renamed_event(
        &self,
        #[indexed] old_name: &ManagedBuffer,
        #[indexed] new_name: &ManagedBuffer,
    );
}
