#![no_std]

multiversx_sc::imports!();

pub mod cohort_proxy;
pub mod config;
pub mod registry;
pub mod rite_of_moloch_proxy;
pub mod roles;
pub mod types;

use types::{InitiateStatus, Role};

// ============================================================
// Constants
// ============================================================

/// Admission window applied at deployment: one week in seconds.
/// Operators retune it with setMaxDuration.
const DEFAULT_MAXIMUM_TIME: u64 = 604_800;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait RiteOfMoloch:
    roles::RolesModule + config::ConfigModule + registry::RegistryModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        cohort_address: ManagedAddress,
        stake_token: EgldOrEsdtTokenIdentifier,
        share_threshold: BigUint,
        minimum_stake: BigUint,
    ) {
        require!(stake_token.is_valid(), "invalid stake asset");

        self.cohort_address().set(&cohort_address);
        self.stake_token().set(&stake_token);
        self.share_threshold().set(&share_threshold);
        self.minimum_stake().set(&minimum_stake);
        self.maximum_time().set(DEFAULT_MAXIMUM_TIME);

        // The deployer starts out holding both roles.
        let deployer = self.blockchain().get_caller();
        self.role_members(Role::Admin).insert(deployer.clone());
        self.role_members(Role::Operator).insert(deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEW: getSacrifices
    // One pass over the dense list; every expired Active record
    // is reported with its current 0-based position. The two
    // returned arrays are index-aligned.
    // ========================================================

    #[view(getSacrifices)]
    fn get_sacrifices(&self) -> MultiValue2<ManagedVec<ManagedAddress>, ManagedVec<usize>> {
        let now = self.blockchain().get_block_timestamp();
        let mut failed_initiates = ManagedVec::new();
        let mut positions = ManagedVec::new();

        for (i, address) in self.initiates().iter().enumerate() {
            let record = self.initiate_record(&address).get();
            if record.status == InitiateStatus::Active && self.is_expired(&record, now) {
                failed_initiates.push(address);
                positions.push(i);
            }
        }

        (failed_initiates, positions).into()
    }

    // ========================================================
    // ENDPOINT: sacrifice
    // A member submits a scan snapshot back. The batch is
    // processed in descending position order no matter how the
    // caller ordered it; any stale entry fails the whole call.
    // The forfeited stake goes to the executing member, paid
    // out only after every removal has been committed.
    // ========================================================

    #[endpoint(sacrifice)]
    fn sacrifice(
        &self,
        failed_initiates: ManagedVec<ManagedAddress>,
        positions: ManagedVec<usize>,
    ) {
        let caller = self.blockchain().get_caller();
        require!(self.has_threshold_shares(&caller), "You must be a member!");
        require!(
            failed_initiates.len() == positions.len(),
            "length mismatch"
        );

        let order = self.descending_order(&positions);

        let mut total_forfeited = BigUint::zero();
        for idx in order.iter() {
            let address = failed_initiates.get(idx).clone_value();
            let position = positions.get(idx);
            let stake = self.remove_initiate(position, &address, InitiateStatus::Sacrificed);
            self.sacrifice_event(&address, &stake);
            total_forfeited += stake;
        }

        if total_forfeited > 0u64 {
            self.send()
                .direct(&caller, &self.stake_token().get(), 0, &total_forfeited);
        }
    }

    // ========================================================
    // ENDPOINT: claimStake
    // The graduation path: an initiate who has acquired the
    // cohort's threshold shares reclaims their own stake. No
    // expiry requirement — graduating beats the clock.
    // ========================================================

    #[endpoint(claimStake)]
    fn claim_stake(&self) {
        let caller = self.blockchain().get_caller();
        let record_mapper = self.initiate_record(&caller);
        require!(!record_mapper.is_empty(), "not an initiate");
        let record = record_mapper.get();
        require!(record.status == InitiateStatus::Active, "not an initiate");
        require!(self.has_threshold_shares(&caller), "You must be a member!");

        let stake = self.remove_initiate(record.position, &caller, InitiateStatus::Completed);
        self.claim_event(&caller, &stake);

        self.send()
            .direct(&caller, &self.stake_token().get(), 0, &stake);
    }

    // ========================================================
    // INTERNAL: membership oracle check
    // ========================================================

    fn has_threshold_shares(&self, address: &ManagedAddress) -> bool {
        let cohort = self.cohort_address().get();
        let shares: BigUint = self
            .tx()
            .to(&cohort)
            .typed(cohort_proxy::CohortProxy)
            .get_voting_shares(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        shares >= self.share_threshold().get()
    }

    // ========================================================
    // INTERNAL: batch ordering
    // Removing low positions first shifts every later position
    // in the same batch; sorting descending removes from the
    // tail inward so earlier removals cannot invalidate later
    // ones. Duplicate positions end up adjacent and the second
    // occurrence fails the stale-index check during removal.
    // ========================================================

    fn descending_order(&self, positions: &ManagedVec<usize>) -> ManagedVec<usize> {
        let mut order = ManagedVec::new();
        for i in 0..positions.len() {
            let current = positions.get(i);
            let mut placed = false;
            let mut reordered = ManagedVec::new();
            for j in order.iter() {
                if !placed && positions.get(j) < current {
                    reordered.push(i);
                    placed = true;
                }
                reordered.push(j);
            }
            if !placed {
                reordered.push(i);
            }
            order = reordered;
        }
        order
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("sacrifice")]
    fn sacrifice_event(&self, #[indexed] initiate: &ManagedAddress, stake: &BigUint);

    #[event("claim")]
    fn claim_event(&self, #[indexed] initiate: &ManagedAddress, stake: &BigUint);
}
