multiversx_sc::imports!();

use crate::types::CommitmentHash;

// ============================================================
// WinnerRegistry — append-only set of commitment hashes that
// belong to passed proposals. Entries are never removed.
// ============================================================

#[multiversx_sc::module]
pub trait WinnerRegistryModule {
    fn record_winner(&self, name: &ManagedBuffer, commitment_hash: &CommitmentHash<Self::Api>) {
        if self.winners().insert(commitment_hash.clone()) {
            self.winner_added_event(commitment_hash, name);
        }
    }

    #[view(isWinner)]
    fn is_winner(&self, commitment_hash: &CommitmentHash<Self::Api>) -> bool {
        self.winners().contains(commitment_hash)
    }

    #[view(getWinnerCount)]
    fn get_winner_count(&self) -> u32 {
        self.winners().len() as u32
    }

    #[event("winnerAdded")]
    fn winner_added_event(
        &self,
        #[indexed] commitment_hash: &CommitmentHash<Self::Api>,
        #[indexed] name: &ManagedBuffer,
    );

    #[storage_mapper("winners")]
    fn winners(&self) -> UnorderedSetMapper<CommitmentHash<Self::Api>>;
}
