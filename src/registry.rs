multiversx_sc::imports!();

use crate::types::{Initiate, InitiateStatus};

// ============================================================
// Initiation registry — the dense initiate list and the
// swap-and-remove discipline that keeps it consistent
// ============================================================

#[multiversx_sc::module]
pub trait RegistryModule: crate::config::ConfigModule + crate::roles::RolesModule {
    // ========================================================
    // ENDPOINT: joinInitiation
    // Any caller sponsors an initiate. The attached payment is
    // the escrowed stake and must match the configured asset
    // and the current minimum exactly.
    // ========================================================

    #[payable("*")]
    #[endpoint(joinInitiation)]
    fn join_initiation(&self, initiate: ManagedAddress) {
        let record_mapper = self.initiate_record(&initiate);
        if !record_mapper.is_empty() {
            match record_mapper.get().status {
                InitiateStatus::Active => sc_panic!("already joined"),
                InitiateStatus::Sacrificed => {
                    sc_panic!("You were sacrificed in a Dark Ritual!")
                }
                // Graduates may be sponsored again.
                InitiateStatus::Completed => {}
            }
        }

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.stake_token().get(), "wrong stake asset");
        require!(
            amount == self.minimum_stake().get(),
            "stake does not match minimum"
        );

        // Dense list: the new record's position is the pre-append length.
        let position = self.initiates().len();
        self.initiates().push(&initiate);

        let record = Initiate {
            joined_at: self.blockchain().get_block_timestamp(),
            stake_amount: amount.clone(),
            position,
            status: InitiateStatus::Active,
        };
        self.initiate_record(&initiate).set(&record);

        self.initiation_event(&initiate, &amount);
    }

    // ========================================================
    // INTERNAL: swap-and-remove
    // The caller-supplied position is never trusted: it must
    // still hold the expected address and an Active record, so
    // a stale snapshot fails loudly instead of corrupting the
    // list or removing the wrong entry.
    // ========================================================

    fn remove_initiate(
        &self,
        position: usize,
        expected: &ManagedAddress,
        new_status: InitiateStatus,
    ) -> BigUint {
        let len = self.initiates().len();
        require!(position < len, "stale index");
        require!(
            self.initiates().get(position + 1) == *expected,
            "stale index"
        );

        let mut record = self.initiate_record(expected).get();
        require!(record.status == InitiateStatus::Active, "stale index");

        if new_status == InitiateStatus::Sacrificed {
            let now = self.blockchain().get_block_timestamp();
            require!(self.is_expired(&record, now), "not expired");
        }

        // Move the last element into the vacated slot and keep its
        // stored position in sync. VecMapper indices are 1-based.
        if position + 1 != len {
            let moved = self.initiates().get(len);
            self.initiate_record(&moved)
                .update(|r| r.position = position);
        }
        self.initiates().swap_remove(position + 1);

        let stake = record.stake_amount.clone();
        record.status = new_status;
        self.initiate_record(expected).set(&record);

        stake
    }

    /// Strict window check: a record expires only once `maximumTime`
    /// has fully lapsed.
    fn is_expired(&self, record: &Initiate<Self::Api>, now: u64) -> bool {
        now - record.joined_at > self.maximum_time().get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getInitiate)]
    fn get_initiate(&self, address: ManagedAddress) -> OptionalValue<Initiate<Self::Api>> {
        let record_mapper = self.initiate_record(&address);
        if record_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(record_mapper.get())
        }
    }

    #[view(initiationStart)]
    fn initiation_start(&self, initiate: ManagedAddress) -> u64 {
        let record_mapper = self.initiate_record(&initiate);
        if record_mapper.is_empty() {
            0
        } else {
            record_mapper.get().joined_at
        }
    }

    #[view(getInitiateCount)]
    fn get_initiate_count(&self) -> usize {
        self.initiates().len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initiation")]
    fn initiation_event(&self, #[indexed] new_initiate: &ManagedAddress, stake: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Dense list of Active initiates. Invariant: for every Active
    /// record, `initiates[record.position]` is the record's address.
    #[storage_mapper("initiates")]
    fn initiates(&self) -> VecMapper<ManagedAddress>;

    /// Records outlive removal so the rejoin policy and the
    /// `initiationStart` view can consult past lifecycles.
    #[storage_mapper("initiateRecord")]
    fn initiate_record(&self, address: &ManagedAddress) -> SingleValueMapper<Initiate<Self::Api>>;
}
