#![allow(dead_code)]

use multiversx_sc::types::{Address, BigUint, ManagedByteArray, MultiValueEncoded};
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_buffer, managed_token_id,
    rust_biguint, whitebox_legacy::*,
};
use token_governance::{
    oracle::VotingPowerOracleModule, types::ProposalState, voter_ledger::VoterLedgerModule,
    winners::WinnerRegistryModule, Governance,
};

pub const WASM_PATH: &str = "output/token-governance.wasm";
pub const GOV_TOKEN: &[u8] = b"GOV-abcdef";
pub const ONE_TOKEN: u64 = 1_000_000_000_000_000_000;

pub const START_TIME: u64 = 1_000;
pub const DURATION: u64 = 100;
pub const END_TIME: u64 = START_TIME + DURATION;

pub type GovernanceObj = token_governance::ContractObj<DebugApi>;
pub type GovernanceBuilder = fn() -> GovernanceObj;

pub fn commitment(byte: u8) -> ManagedByteArray<DebugApi, 32> {
    ManagedByteArray::new_from_bytes(&[byte; 32])
}

pub struct GovernanceSetup {
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    /// Has 2 governance tokens locked: snapshot power 3
    pub alice: Address,
    /// Has no governance tokens locked: snapshot power 1
    pub bob: Address,
    pub outsider: Address,
    pub sc: ContractObjWrapper<GovernanceObj, GovernanceBuilder>,
}

impl GovernanceSetup {
    pub fn new() -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let alice = b_mock.create_user_account(&rust_zero);
        let bob = b_mock.create_user_account(&rust_zero);
        let outsider = b_mock.create_user_account(&rust_zero);

        let sc = b_mock.create_sc_account(
            &rust_zero,
            Some(&owner),
            token_governance::contract_obj as GovernanceBuilder,
            WASM_PATH,
        );

        b_mock
            .execute_tx(&owner, &sc, &rust_zero, |sc| {
                sc.init(managed_token_id!(GOV_TOKEN));
            })
            .assert_ok();

        b_mock.set_block_timestamp(START_TIME);

        let mut setup = GovernanceSetup {
            b_mock,
            owner,
            alice,
            bob,
            outsider,
            sc,
        };
        let alice = setup.alice.clone();
        setup.lock_tokens(&alice, 2 * ONE_TOKEN);
        setup
    }

    /// Funds `holder`'s wallet with `amount` and locks all of it in the contract.
    pub fn lock_tokens(&mut self, holder: &Address, amount: u64) {
        self.b_mock
            .set_esdt_balance(holder, GOV_TOKEN, &rust_biguint!(amount));
        self.deposit_tokens(holder, GOV_TOKEN, amount).assert_ok();
    }

    pub fn deposit_tokens(&mut self, holder: &Address, token_id: &[u8], amount: u64) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            holder,
            &self.sc,
            token_id,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.deposit_tokens();
            },
        )
    }

    pub fn withdraw_tokens(&mut self, holder: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(holder, &self.sc, &rust_biguint!(0), |sc| {
                sc.withdraw_tokens(BigUint::from(amount));
            })
    }

    pub fn create_proposal(
        &mut self,
        caller: &Address,
        name: &[u8],
        hash_byte: u8,
        voters: &[Address],
    ) -> TxResult {
        self.create_proposal_with_duration(caller, name, hash_byte, DURATION, voters)
    }

    pub fn create_proposal_with_duration(
        &mut self,
        caller: &Address,
        name: &[u8],
        hash_byte: u8,
        duration: u64,
        voters: &[Address],
    ) -> TxResult {
        let voters = voters.to_vec();
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                let mut allowed = MultiValueEncoded::new();
                for voter in voters.iter() {
                    allowed.push(managed_address!(voter));
                }
                sc.create_proposal(
                    managed_buffer!(name),
                    managed_buffer!(b"fund the community garden"),
                    duration,
                    commitment(hash_byte),
                    allowed,
                );
            })
    }

    /// Creates `name` with alice and bob as voters and opens it.
    pub fn create_open_proposal(&mut self, name: &[u8], hash_byte: u8) {
        let owner = self.owner.clone();
        let voters = [self.alice.clone(), self.bob.clone()];
        self.create_proposal(&owner, name, hash_byte, &voters)
            .assert_ok();
        self.open_voting(&owner, name).assert_ok();
    }

    pub fn open_voting(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.open_voting(managed_buffer!(name));
            })
    }

    pub fn vote(&mut self, caller: &Address, name: &[u8], support: bool, power: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.vote(managed_buffer!(name), support, BigUint::from(power));
            })
    }

    pub fn execute_proposal(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.execute_proposal(managed_buffer!(name));
            })
    }

    pub fn close_proposal(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.close_proposal(managed_buffer!(name));
            })
    }

    pub fn delete_proposal(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.delete_proposal(managed_buffer!(name));
            })
    }

    pub fn rename_proposal(&mut self, caller: &Address, old_name: &[u8], new_name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.rename_proposal(managed_buffer!(old_name), managed_buffer!(new_name));
            })
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    // ── Queries ──

    pub fn state(&mut self, name: &[u8]) -> ProposalState {
        let mut state = ProposalState::NonExistent;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                state = sc.get_proposal_state(managed_buffer!(name));
            })
            .assert_ok();
        state
    }

    /// (yes votes, no votes, quorum, end time)
    pub fn tallies(&mut self, name: &[u8]) -> (u64, u64, u64, u64) {
        let mut tallies = (0, 0, 0, 0);
        self.b_mock
            .execute_query(&self.sc, |sc| {
                let (proposal, _paused) = sc.get_proposal(managed_buffer!(name)).into_tuple();
                tallies = (
                    proposal.yes_votes.to_u64().unwrap(),
                    proposal.no_votes.to_u64().unwrap(),
                    proposal.quorum.to_u64().unwrap(),
                    proposal.end_time,
                );
            })
            .assert_ok();
        tallies
    }

    /// (voter count, snapshot power, power used, voters remaining)
    pub fn voter_info(&mut self, name: &[u8], voter: &Address) -> (u32, u64, u64, u32) {
        let mut info = (0, 0, 0, 0);
        self.b_mock
            .execute_query(&self.sc, |sc| {
                let (count, snapshot, used, remaining) = sc
                    .get_voter_info(managed_buffer!(name), managed_address!(voter))
                    .into_tuple();
                info = (
                    count,
                    snapshot.to_u64().unwrap(),
                    used.to_u64().unwrap(),
                    remaining,
                );
            })
            .assert_ok();
        info
    }

    pub fn has_voted(&mut self, name: &[u8], voter: &Address) -> bool {
        let mut voted = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                voted = sc.has_voted(managed_buffer!(name), managed_address!(voter));
            })
            .assert_ok();
        voted
    }

    pub fn is_winner(&mut self, hash_byte: u8) -> bool {
        let mut winner = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                winner = sc.is_winner(&commitment(hash_byte));
            })
            .assert_ok();
        winner
    }

    pub fn locked_balance(&mut self, holder: &Address) -> u64 {
        let mut balance = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                balance = sc
                    .balance_of(&managed_address!(holder))
                    .get()
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn voting_power(&mut self, identity: &Address) -> u64 {
        let mut power = 0;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                power = sc
                    .get_voting_power(&managed_address!(identity))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        power
    }
}
