multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Roles — capability sets for the gated configuration surface
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// May manage roles and retune the minimum stake.
    Admin,
    /// May retune the admission window.
    Operator,
}

// ============================================================
// Initiate Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InitiateStatus {
    /// Stake escrowed, admission window running.
    Active,
    /// Window lapsed and a member forfeited the stake. Terminal:
    /// a sacrificed address may never rejoin.
    Sacrificed,
    /// Graduated — stake refunded. The address may rejoin later.
    Completed,
}

// ============================================================
// Initiate — one record per sponsored address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Initiate<M: ManagedTypeApi> {
    /// Block timestamp at sponsorship.
    pub joined_at: u64,
    /// Amount escrowed at join time (the minimum stake of that moment).
    pub stake_amount: BigUint<M>,
    /// 0-based index into the dense initiate list. Only meaningful while
    /// Active, and only until the next removal touches this slot.
    pub position: usize,
    pub status: InitiateStatus,
}
