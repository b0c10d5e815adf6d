multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Fixed-size commitment identifying a proposal's real-world payload.
pub type CommitmentHash<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal State — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// No record under this name: never created, or deleted.
    NonExistent,
    /// Created with a snapshotted voter ledger. Can still be renamed.
    Initialized,
    /// Accepting votes until the deadline.
    Open,
    /// Passed with quorum and yes > no. Commitment recorded as winner. Terminal.
    Executed,
    /// Failed, tied, or force-closed after the deadline. Can be deleted.
    Closed,
}

// ============================================================
// Proposal — the core governance record, keyed by name
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    pub state: ProposalState,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    /// Absolute deadline: creation timestamp + requested duration
    pub end_time: u64,
    /// 51% of total snapshotted power, fixed at creation
    pub quorum: BigUint<M>,
    pub commitment_hash: CommitmentHash<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> BigUint<M> {
        &self.yes_votes + &self.no_votes
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.end_time
    }
}

// ============================================================
// Voter Entry — one eligible identity on one proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoterEntry<M: ManagedTypeApi> {
    /// Power captured at creation. Never changes afterwards.
    pub snapshot_power: BigUint<M>,
    /// Power actually cast. Zero until voted, never above the snapshot.
    pub power_used: BigUint<M>,
    pub has_voted: bool,
}

impl<M: ManagedTypeApi> VoterEntry<M> {
    pub fn new(snapshot_power: BigUint<M>) -> Self {
        VoterEntry {
            snapshot_power,
            power_used: BigUint::zero(),
            has_voted: false,
        }
    }
}

// ============================================================
// Pending Transfer — first half of the ownership handoff
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PendingTransfer<M: ManagedTypeApi> {
    pub candidate: ManagedAddress<M>,
    pub initiated_at: u64,
}
