multiversx_sc::imports!();

use crate::errors::*;

// ============================================================
// Token ledger — governance tokens locked in the contract.
// `balanceOf` reads this ledger, which is always local to the
// contract's shard, so holdings of any account are visible.
// ============================================================

#[multiversx_sc::module]
pub trait VotingPowerOracleModule {
    // ========================================================
    // ENDPOINT: depositTokens
    // ========================================================

    #[payable("*")]
    #[endpoint(depositTokens)]
    fn deposit_tokens(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();

        require!(
            payment.token_identifier == self.governance_token().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        self.balance_of(&caller).update(|b| *b += &payment.amount);
        self.tokens_deposited_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: withdrawTokens
    // Snapshots already taken are not affected.
    // ========================================================

    #[endpoint(withdrawTokens)]
    fn withdraw_tokens(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            amount <= self.balance_of(&caller).get(),
            ERR_INSUFFICIENT_BALANCE
        );

        self.balance_of(&caller).update(|b| *b -= &amount);

        let token_id = self.governance_token().get();
        self.send().direct_esdt(&caller, &token_id, 0, &amount);
        self.tokens_withdrawn_event(&caller, &amount);
    }

    fn holds_governance_token(&self, identity: &ManagedAddress) -> bool {
        self.balance_of(identity).get() > 0u64
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tokensDeposited")]
    fn tokens_deposited_event(&self, #[indexed] holder: &ManagedAddress, amount: &BigUint);

    #[event("tokensWithdrawn")]
    fn tokens_withdrawn_event(&self, #[indexed] holder: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getGovernanceToken)]
    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(balanceOf)]
    #[storage_mapper("lockedBalance")]
    fn balance_of(&self, identity: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
