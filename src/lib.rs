#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod errors;
pub mod events;
pub mod oracle;
pub mod types;
pub mod voter_ledger;
pub mod winners;

use errors::*;
use types::{CommitmentHash, Proposal, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Allowed-voter lists must be shorter than this; the authority fills the last slot
pub const MAX_VOTERS: usize = 10;

/// Quorum: yes + no must reach 51% of the total snapshotted power
pub const QUORUM_PERCENTAGE: u64 = 51;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Governance:
    oracle::VotingPowerOracleModule
    + access::AccessModule
    + voter_ledger::VoterLedgerModule
    + winners::WinnerRegistryModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, governance_token: TokenIdentifier) {
        require!(
            governance_token.is_valid_esdt_identifier(),
            "Invalid governance token"
        );

        let deployer = self.blockchain().get_caller();
        self.governance_token().set(&governance_token);
        self.init_access(&deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Snapshots the voting power of every allowed voter plus
    // the authority, and fixes the quorum for the proposal's life.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        duration_seconds: u64,
        commitment_hash: CommitmentHash<Self::Api>,
        allowed_voters: MultiValueEncoded<ManagedAddress>,
    ) {
        let ctx = self.require_active();
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(
            !self.is_winner(&commitment_hash),
            ERR_DUPLICATE_COMMITMENT
        );

        let allowed_voters = allowed_voters.to_vec();
        require!(allowed_voters.len() < MAX_VOTERS, ERR_TOO_MANY_VOTERS);

        // An existing ledger means the name is in flight (or executed)
        require!(
            !self.has_ledger(&name) && self.proposals(&name).is_empty(),
            ERR_NAME_IN_USE
        );

        let now = self.blockchain().get_block_timestamp();
        let end_time = match now.checked_add(duration_seconds) {
            Some(end_time) => end_time,
            None => sc_panic!(ERR_DEADLINE_OVERFLOW),
        };
        let total_power = self.snapshot_voters(&name, &allowed_voters, &ctx.owner);
        let quorum = (&total_power * QUORUM_PERCENTAGE) / 100u64;

        let proposal = Proposal {
            description,
            state: ProposalState::Initialized,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            end_time,
            quorum,
            commitment_hash,
        };

        self.proposals(&name).set(&proposal);
        self.proposal_names().insert(name.clone());

        self.proposal_created_event(
            &name,
            &ctx.caller,
            end_time,
            &proposal.quorum,
            &proposal.commitment_hash,
        );
    }

    // ========================================================
    // ENDPOINT: openVoting
    // ========================================================

    #[endpoint(openVoting)]
    fn open_voting(&self, name: ManagedBuffer) {
        self.require_active();

        let mut proposal = self.require_proposal(&name);
        require!(
            proposal.state == ProposalState::Initialized,
            ERR_INVALID_STATE
        );

        proposal.state = ProposalState::Open;
        self.proposals(&name).set(&proposal);

        self.voting_opened_event(&name);
    }

    // ========================================================
    // ENDPOINT: vote
    // Casts up to the caller's snapshot power. Whatever is not
    // requested is forfeited, not carried over.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, name: ManagedBuffer, support: bool, power: BigUint) {
        let ctx = self.require_active();

        let mut proposal = self.require_proposal(&name);
        require!(proposal.state == ProposalState::Open, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        require!(now <= proposal.end_time, ERR_EXPIRED);

        self.consume_voting_power(&name, &ctx.caller, &power);

        if support {
            proposal.yes_votes += &power;
        } else {
            proposal.no_votes += &power;
        }
        self.proposals(&name).set(&proposal);

        self.vote_cast_event(&name, &ctx.caller, support, &power);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // After the deadline, with quorum reached: yes > no passes and
    // records the commitment as a winner, anything else closes.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, name: ManagedBuffer) {
        let mut proposal = self.require_proposal(&name);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_expired(now), ERR_NOT_YET_EXPIRED);
        require!(proposal.state == ProposalState::Open, ERR_INVALID_STATE);
        require!(
            proposal.total_votes() >= proposal.quorum,
            ERR_QUORUM_NOT_REACHED
        );

        // Ties fail
        let passed = proposal.yes_votes > proposal.no_votes;
        if passed {
            proposal.state = ProposalState::Executed;
            self.record_winner(&name, &proposal.commitment_hash);
        } else {
            proposal.state = ProposalState::Closed;
        }
        self.proposals(&name).set(&proposal);

        self.proposal_executed_event(&name, &proposal.yes_votes, &proposal.no_votes);
        self.proposal_result_event(&name, passed);
    }

    // ========================================================
    // ENDPOINT: closeProposal
    // Anyone can force-close an expired Open proposal, e.g. one
    // that never reached quorum.
    // ========================================================

    #[endpoint(closeProposal)]
    fn close_proposal(&self, name: ManagedBuffer) {
        let mut proposal = self.require_proposal(&name);
        require!(proposal.state == ProposalState::Open, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_expired(now), ERR_NOT_YET_EXPIRED);

        proposal.state = ProposalState::Closed;
        self.proposals(&name).set(&proposal);

        self.proposal_closed_event(&name);
    }

    // ========================================================
    // ENDPOINT: deleteProposal
    // Erases a Closed proposal and its whole voter ledger. The
    // name becomes reusable. Winner entries are untouched.
    // ========================================================

    #[endpoint(deleteProposal)]
    fn delete_proposal(&self, name: ManagedBuffer) {
        let proposal = self.require_proposal(&name);
        require!(proposal.state == ProposalState::Closed, ERR_INVALID_STATE);

        self.clear_ledger(&name);
        self.proposals(&name).clear();
        self.proposal_names().swap_remove(&name);

        self.proposal_deleted_event(&name, &proposal.commitment_hash, &proposal.description);
    }

    // ========================================================
    // ENDPOINT: renameProposal
    // Only before voting opens. Record and voter ledger move
    // together under the new name.
    // ========================================================

    #[endpoint(renameProposal)]
    fn rename_proposal(&self, old_name: ManagedBuffer, new_name: ManagedBuffer) {
        let proposal = self.require_proposal(&old_name);
        require!(
            proposal.state == ProposalState::Initialized,
            ERR_INVALID_STATE
        );
        require!(!new_name.is_empty(), ERR_EMPTY_NAME);
        require!(
            self.proposals(&new_name).is_empty() && !self.has_ledger(&new_name),
            ERR_NAME_IN_USE
        );

        self.proposals(&new_name).set(&proposal);
        self.proposals(&old_name).clear();
        self.relocate_ledger(&old_name, &new_name);

        self.proposal_names().swap_remove(&old_name);
        self.proposal_names().insert(new_name.clone());

        self.proposal_renamed_event(&old_name, &new_name);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, name: &ManagedBuffer) -> Proposal<Self::Api> {
        require!(!self.proposals(name).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(name).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// The proposal record together with the global pause flag.
    #[view(getProposal)]
    fn get_proposal(&self, name: ManagedBuffer) -> MultiValue2<Proposal<Self::Api>, bool> {
        let proposal = self.require_proposal(&name);
        (proposal, self.paused().get()).into()
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, name: ManagedBuffer) -> ProposalState {
        if self.proposals(&name).is_empty() {
            return ProposalState::NonExistent;
        }
        self.proposals(&name).get().state
    }

    #[view(getProposalNames)]
    fn get_proposal_names(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for name in self.proposal_names().iter() {
            result.push(name);
        }
        result
    }

    /// Open proposals whose deadline has not passed yet.
    #[view(getActiveProposals)]
    fn get_active_proposals(
        &self,
    ) -> MultiValueEncoded<MultiValue2<ManagedBuffer, Proposal<Self::Api>>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for name in self.proposal_names().iter() {
            let proposal = self.proposals(&name).get();
            if proposal.state == ProposalState::Open && now <= proposal.end_time {
                result.push((name, proposal).into());
            }
        }
        result
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(
        &self,
    ) -> MultiValue6<TokenIdentifier, ManagedAddress, ManagedAddress, bool, u32, u64> {
        (
            self.governance_token().get(),
            self.owner().get(),
            self.controller().get(),
            self.paused().get(),
            MAX_VOTERS as u32,
            QUORUM_PERCENTAGE,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(&self, name: &ManagedBuffer) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalNames")]
    fn proposal_names(&self) -> UnorderedSetMapper<ManagedBuffer>;
}
