#![no_std]

mod storage;

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, Symbol,
};

use rental_lib::{is_zero_address, AssetLedgerClient, UsageRight};
use storage::*;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the required relationship to the asset.
    Unauthorized = 3,
    /// Attempt to overwrite an active, locked right.
    AlreadyLocked = 4,
    /// Query on an asset with no active right.
    NoActiveUser = 5,
    /// Balance query on the null address.
    ZeroAddressQuery = 6,
    /// Termination attempted without both approvals.
    NotReady = 7,
}

#[contract]
pub struct UserRights;

#[contractimpl]
impl UserRights {
    /// Initialize contract with admin and the ownership ledger it trusts
    /// (one-time setup).
    pub fn init_contract(env: Env, admin: Address, asset_ledger: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
        set_asset_ledger(&env, &asset_ledger);
    }

    /// Re-point the contract at a new ownership ledger (admin only).
    pub fn set_asset_ledger(env: Env, asset_ledger: Address) {
        let admin = get_admin(&env)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        admin.require_auth();
        set_asset_ledger(&env, &asset_ledger);
    }

    /// Grant or overwrite the usage right of an asset.
    ///
    /// `caller` must be the asset's current owner or an approved operator per
    /// the ledger. An existing right that is still active and locked cannot
    /// be overwritten; it has to be released through the termination flow
    /// first. Both termination approvals are reset by every grant.
    pub fn set_user(
        env: Env,
        asset_id: u64,
        caller: Address,
        user: Option<Address>,
        expires: u64,
        is_borrowed: bool,
    ) {
        caller.require_auth();

        let ledger = Self::ledger_client(&env);
        if !ledger.is_approved_or_owner(&caller, &asset_id) {
            panic_with_error!(&env, Error::Unauthorized);
        }

        let now = env.ledger().timestamp();
        let previous = get_usage_right(&env, asset_id).unwrap_or_else(UsageRight::cleared);

        if previous.is_active(now) && previous.is_borrowed {
            panic_with_error!(&env, Error::AlreadyLocked);
        }

        if let Some(previous_user) = previous.active_user(now) {
            decrement_user_balance(&env, &previous_user);
        }

        let right = UsageRight {
            user: user.clone(),
            expires,
            is_borrowed,
            owner_termination_approved: false,
            user_termination_approved: false,
        };

        if let Some(new_user) = right.active_user(now) {
            increment_user_balance(&env, &new_user);
        }

        set_usage_right(&env, asset_id, &right);

        env.events().publish(
            (Symbol::new(&env, "update_user"),),
            (asset_id, user, expires),
        );
    }

    /// Current holder of the asset's usage right. Read-only; expiry is
    /// evaluated lazily against the ledger clock, nothing is mutated.
    pub fn user_of(env: Env, asset_id: u64) -> Address {
        let right = get_usage_right(&env, asset_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NoActiveUser));

        match right.active_user(env.ledger().timestamp()) {
            Some(user) => user,
            None => panic_with_error!(&env, Error::NoActiveUser),
        }
    }

    /// Number of usage rights held by `address`, as maintained by the
    /// mutating operations. A right that passively expires is not reflected
    /// here until the next mutation touches its asset.
    pub fn user_balance_of(env: Env, address: Address) -> u32 {
        if is_zero_address(&env, &address) {
            panic_with_error!(&env, Error::ZeroAddressQuery);
        }
        get_user_balance(&env, &address)
    }

    /// Stored expiry timestamp for the asset's right, 0 when no right was
    /// ever granted.
    pub fn user_expires(env: Env, asset_id: u64) -> u64 {
        get_usage_right(&env, asset_id)
            .map(|right| right.expires)
            .unwrap_or(0)
    }

    /// Stored lock flag for the asset's right.
    pub fn user_is_borrowed(env: Env, asset_id: u64) -> bool {
        get_usage_right(&env, asset_id)
            .map(|right| right.is_borrowed)
            .unwrap_or(false)
    }

    /// Raw stored record, including lock and approval flags.
    pub fn get_usage_right(env: Env, asset_id: u64) -> Option<UsageRight> {
        get_usage_right(&env, asset_id)
    }

    /// Record one side's consent to early termination of a locked right.
    ///
    /// The owner sets the owner-side flag, the current user sets the
    /// user-side flag. Idempotent; a no-op (but not a failure) when the
    /// right is not locked.
    pub fn set_borrow_termination(env: Env, asset_id: u64, caller: Address) {
        caller.require_auth();

        let owner = Self::ledger_client(&env).owner_of(&asset_id);
        let mut right = get_usage_right(&env, asset_id).unwrap_or_else(UsageRight::cleared);

        let is_owner = caller == owner;
        let is_user = right.user == Some(caller.clone());
        if !is_owner && !is_user {
            panic_with_error!(&env, Error::Unauthorized);
        }

        if !right.is_borrowed {
            return;
        }

        let newly_set = if is_owner {
            !right.owner_termination_approved
        } else {
            !right.user_termination_approved
        };
        if !newly_set {
            return;
        }

        if is_owner {
            right.owner_termination_approved = true;
        } else {
            right.user_termination_approved = true;
        }
        set_usage_right(&env, asset_id, &right);

        env.events().publish(
            (Symbol::new(&env, "termination_approved"),),
            (asset_id, caller),
        );
    }

    /// Release a locked right early once both parties have consented.
    /// Only the asset's current owner may execute the release.
    pub fn terminate_borrow(env: Env, asset_id: u64, caller: Address) {
        caller.require_auth();

        let right = get_usage_right(&env, asset_id).unwrap_or_else(UsageRight::cleared);
        if !right.termination_ready() {
            panic_with_error!(&env, Error::NotReady);
        }

        let owner = Self::ledger_client(&env).owner_of(&asset_id);
        if caller != owner {
            panic_with_error!(&env, Error::Unauthorized);
        }

        if let Some(user) = right.active_user(env.ledger().timestamp()) {
            decrement_user_balance(&env, &user);
        }
        set_usage_right(&env, asset_id, &UsageRight::cleared());

        env.events()
            .publish((Symbol::new(&env, "borrow_terminated"),), (asset_id,));
    }

    /// Transfer-completion callback, invoked by the ownership ledger after
    /// each completed transfer of `asset_id`.
    ///
    /// A locked right survives the sale untouched; an unlocked right is
    /// cleared. Never fails for a legitimate ledger invocation, so it cannot
    /// revert the enclosing transfer.
    pub fn on_transfer(env: Env, asset_id: u64) {
        let ledger = get_asset_ledger(&env)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        ledger.require_auth();

        let right = match get_usage_right(&env, asset_id) {
            Some(right) => right,
            None => return,
        };

        if right.is_borrowed {
            // The new owner inherits an asset encumbered by the lease.
            return;
        }
        if right == UsageRight::cleared() {
            return;
        }

        if let Some(user) = right.active_user(env.ledger().timestamp()) {
            decrement_user_balance(&env, &user);
        }
        set_usage_right(&env, asset_id, &UsageRight::cleared());

        env.events().publish(
            (Symbol::new(&env, "update_user"),),
            (asset_id, None::<Address>, 0u64),
        );
    }

    fn ledger_client(env: &Env) -> AssetLedgerClient<'_> {
        let ledger = get_asset_ledger(env)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
        AssetLedgerClient::new(env, &ledger)
    }
}
