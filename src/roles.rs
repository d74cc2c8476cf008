multiversx_sc::imports!();

use crate::types::Role;

// ============================================================
// Role registry — ADMIN and OPERATOR principal sets
// ============================================================

#[multiversx_sc::module]
pub trait RolesModule {
    // ========================================================
    // ENDPOINT: grantRole
    // Admin only. Granting an already-held role is a no-op.
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin, &self.blockchain().get_caller());
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, &account);
        }
    }

    // ========================================================
    // ENDPOINT: revokeRole
    // Admin only. Revoking an absent role is a no-op.
    // ========================================================

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin, &self.blockchain().get_caller());
        if self.role_members(role).swap_remove(&account) {
            self.role_revoked_event(role, &account);
        }
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: ManagedAddress) -> bool {
        self.role_members(role).contains(&account)
    }

    /// Guard called at the top of every role-gated endpoint,
    /// before any state change.
    fn require_role(&self, role: Role, account: &ManagedAddress) {
        require!(self.role_members(role).contains(account), "unauthorized role");
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roleGranted")]
    fn role_granted_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);

    #[event("roleRevoked")]
    fn role_revoked_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
