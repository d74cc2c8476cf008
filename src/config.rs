multiversx_sc::imports!();

use crate::types::Role;

// ============================================================
// Configuration — stake/threshold/window parameters
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule: crate::roles::RolesModule {
    // ========================================================
    // ENDPOINT: setMinimumStake
    // Admin only. No upper bound; affects future joins only.
    // ========================================================

    #[endpoint(setMinimumStake)]
    fn set_minimum_stake(&self, amount: BigUint) {
        self.require_role(Role::Admin, &self.blockchain().get_caller());
        self.minimum_stake().set(&amount);
        self.minimum_stake_updated_event(&amount);
    }

    // ========================================================
    // ENDPOINT: setMaxDuration
    // Operator only. A duration of 1 expires every standing
    // initiate on the next scan — the emergency-drain lever.
    // ========================================================

    #[endpoint(setMaxDuration)]
    fn set_max_duration(&self, duration: u64) {
        self.require_role(Role::Operator, &self.blockchain().get_caller());
        require!(duration > 0, "duration must be positive");
        self.maximum_time().set(duration);
        self.maximum_time_updated_event(duration);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("minimumStakeUpdated")]
    fn minimum_stake_updated_event(&self, #[indexed] amount: &BigUint);

    #[event("maximumTimeUpdated")]
    fn maximum_time_updated_event(&self, #[indexed] duration: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(minimumStake)]
    #[storage_mapper("minimumStake")]
    fn minimum_stake(&self) -> SingleValueMapper<BigUint>;

    #[view(maximumTime)]
    #[storage_mapper("maximumTime")]
    fn maximum_time(&self) -> SingleValueMapper<u64>;

    #[view(cohortAddress)]
    #[storage_mapper("cohortAddress")]
    fn cohort_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(stakeToken)]
    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(shareThreshold)]
    #[storage_mapper("shareThreshold")]
    fn share_threshold(&self) -> SingleValueMapper<BigUint>;
}
