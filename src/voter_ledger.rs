multiversx_sc::imports!();

use crate::errors::*;
use crate::types::VoterEntry;
use crate::{access, oracle};

/// Token base units per point of voting power (18 decimals)
pub const POWER_UNIT: u64 = 1_000_000_000_000_000_000;

/// Authority override: the owner always votes with this fixed power
pub const AUTHORITY_VOTING_POWER: u64 = 20;

// ============================================================
// VoterLedger — per-proposal eligibility, snapshot power,
// consumed power and remaining-voter count
// ============================================================

#[multiversx_sc::module]
pub trait VoterLedgerModule: oracle::VotingPowerOracleModule + access::AccessModule {
    /// `floor(balance / 10^18) + 1`, except for the owner, who always
    /// gets `AUTHORITY_VOTING_POWER` regardless of holdings.
    #[view(getVotingPower)]
    fn get_voting_power(&self, identity: &ManagedAddress) -> BigUint {
        if *identity == self.owner().get() {
            return BigUint::from(AUTHORITY_VOTING_POWER);
        }

        self.balance_of(identity).get() / POWER_UNIT + 1u64
    }

    /// Grants eligibility to each distinct voter and freezes their power.
    /// The authority is appended when missing. Returns the total power.
    fn snapshot_voters(
        &self,
        name: &ManagedBuffer,
        allowed_voters: &ManagedVec<ManagedAddress>,
        authority: &ManagedAddress,
    ) -> BigUint {
        let mut total_power = BigUint::zero();

        for voter in allowed_voters.iter() {
            total_power += self.grant_eligibility(name, &voter);
        }
        if !self.voters(name).contains(authority) {
            total_power += self.grant_eligibility(name, authority);
        }

        let voter_count = self.voters(name).len() as u32;
        self.voters_remaining(name).set(voter_count);

        total_power
    }

    /// Returns the snapshotted power, or zero for an address already granted.
    fn grant_eligibility(&self, name: &ManagedBuffer, voter: &ManagedAddress) -> BigUint {
        if !self.voters(name).insert(voter.clone()) {
            return BigUint::zero();
        }

        let power = self.get_voting_power(voter);
        self.voter_entry(name, voter)
            .set(VoterEntry::new(power.clone()));
        power
    }

    /// Consumes `power` from the voter's snapshot. Unused power is forfeited.
    fn consume_voting_power(&self, name: &ManagedBuffer, voter: &ManagedAddress, power: &BigUint) {
        let eligible = self.voters(name).contains(voter);
        let mut entry = if eligible {
            self.voter_entry(name, voter).get()
        } else {
            VoterEntry::new(BigUint::zero())
        };

        require!(!entry.has_voted, ERR_ALREADY_VOTED);
        require!(eligible, ERR_NOT_ELIGIBLE);
        require!(*power <= entry.snapshot_power, ERR_POWER_EXCEEDED);

        entry.has_voted = true;
        entry.power_used = power.clone();
        self.voter_entry(name, voter).set(&entry);
        self.voters_remaining(name).update(|remaining| *remaining -= 1);
    }

    fn has_ledger(&self, name: &ManagedBuffer) -> bool {
        !self.voters(name).is_empty()
    }

    /// Moves every voter sub-record from `old_name` to `new_name`.
    fn relocate_ledger(&self, old_name: &ManagedBuffer, new_name: &ManagedBuffer) {
        let voters = self.collect_voters(old_name);
        for voter in voters.iter() {
            let entry = self.voter_entry(old_name, &voter).get();
            self.voter_entry(old_name, &voter).clear();
            self.voter_entry(new_name, &voter).set(&entry);
            self.voters(old_name).swap_remove(&voter);
            self.voters(new_name).insert(voter.clone_value());
        }

        let remaining = self.voters_remaining(old_name).get();
        self.voters_remaining(new_name).set(remaining);
        self.voters_remaining(old_name).clear();
    }

    fn clear_ledger(&self, name: &ManagedBuffer) {
        let voters = self.collect_voters(name);
        for voter in voters.iter() {
            self.voter_entry(name, &voter).clear();
            self.voters(name).swap_remove(&voter);
        }
        self.voters_remaining(name).clear();
    }

    fn collect_voters(&self, name: &ManagedBuffer) -> ManagedVec<ManagedAddress> {
        let mut result = ManagedVec::new();
        for voter in self.voters(name).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (voter count, snapshot power, power used, voters remaining)
    #[view(getVoterInfo)]
    fn get_voter_info(
        &self,
        name: ManagedBuffer,
        voter: ManagedAddress,
    ) -> MultiValue4<u32, BigUint, BigUint, u32> {
        let voter_count = self.voters(&name).len() as u32;
        let (snapshot_power, power_used) = if self.voter_entry(&name, &voter).is_empty() {
            (BigUint::zero(), BigUint::zero())
        } else {
            let entry = self.voter_entry(&name, &voter).get();
            (entry.snapshot_power, entry.power_used)
        };
        let remaining = self.voters_remaining(&name).get();

        (voter_count, snapshot_power, power_used, remaining).into()
    }

    #[view(hasVoted)]
    fn has_voted(&self, name: ManagedBuffer, voter: ManagedAddress) -> bool {
        !self.voter_entry(&name, &voter).is_empty() && self.voter_entry(&name, &voter).get().has_voted
    }

    #[view(getVoters)]
    fn get_voters(&self, name: ManagedBuffer) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(&name).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self, name: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voterEntry")]
    fn voter_entry(
        &self,
        name: &ManagedBuffer,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoterEntry<Self::Api>>;

    #[storage_mapper("votersRemaining")]
    fn voters_remaining(&self, name: &ManagedBuffer) -> SingleValueMapper<u32>;
}
