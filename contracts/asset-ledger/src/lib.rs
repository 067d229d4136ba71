#![no_std]

mod storage;
#[cfg(test)]
mod test;

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, Symbol,
};

use rental_lib::{is_zero_address, TransferHookClient};
use storage::*;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AssetNotFound = 3,
    Unauthorized = 4,
    ZeroAddress = 5,
}

#[contract]
pub struct AssetLedger;

#[contractimpl]
impl AssetLedger {
    /// Initialize contract with admin (one-time setup).
    pub fn init_contract(env: Env, admin: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
    }

    /// Register the contract notified after each completed transfer
    /// (admin only). Transfers executed before a hook is set skip the
    /// notification.
    pub fn set_transfer_hook(env: Env, hook: Address) {
        let admin = get_admin(&env)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        admin.require_auth();
        set_transfer_hook(&env, &hook);
    }

    /// Mint a new asset to `to`, returning its sequential id.
    pub fn mint(env: Env, to: Address) -> u64 {
        to.require_auth();

        if is_zero_address(&env, &to) {
            panic_with_error!(&env, Error::ZeroAddress);
        }

        let asset_id = increment_asset_counter(&env);
        set_owner(&env, asset_id, &to);
        increment_balance(&env, &to);

        env.events()
            .publish((Symbol::new(&env, "mint"),), (asset_id, to));

        asset_id
    }

    /// Current owner of an asset.
    pub fn owner_of(env: Env, asset_id: u64) -> Address {
        get_owner(&env, asset_id)
            .unwrap_or_else(|| panic_with_error!(&env, Error::AssetNotFound))
    }

    /// Number of assets owned by `address`.
    pub fn balance_of(env: Env, address: Address) -> u32 {
        if is_zero_address(&env, &address) {
            panic_with_error!(&env, Error::ZeroAddress);
        }
        get_balance(&env, &address)
    }

    /// Total assets minted so far.
    pub fn total_assets(env: Env) -> u64 {
        get_asset_counter(&env)
    }

    /// Grant or revoke the per-asset approval. `caller` must be the owner or
    /// one of the owner's operators.
    pub fn approve(env: Env, asset_id: u64, caller: Address, approved: Option<Address>) {
        caller.require_auth();

        let owner = Self::owner_of(env.clone(), asset_id);
        if caller != owner && !is_operator(&env, &owner, &caller) {
            panic_with_error!(&env, Error::Unauthorized);
        }

        match &approved {
            Some(address) => set_approved(&env, asset_id, address),
            None => clear_approved(&env, asset_id),
        }

        env.events()
            .publish((Symbol::new(&env, "approve"),), (asset_id, owner, approved));
    }

    /// Grant or revoke operator status over every asset of `caller`.
    pub fn set_approval_for_all(env: Env, caller: Address, operator: Address, approved: bool) {
        caller.require_auth();
        set_operator(&env, &caller, &operator, approved);

        env.events().publish(
            (Symbol::new(&env, "approval_for_all"),),
            (caller, operator, approved),
        );
    }

    /// Whether `spender` may act on the asset: owner, per-asset approval, or
    /// operator for the owner. Fails if the asset does not exist.
    pub fn is_approved_or_owner(env: Env, spender: Address, asset_id: u64) -> bool {
        let owner = Self::owner_of(env.clone(), asset_id);
        spender == owner
            || get_approved(&env, asset_id) == Some(spender.clone())
            || is_operator(&env, &owner, &spender)
    }

    /// Transfer an asset to `to`. `caller` must be the owner, the approved
    /// address, or an operator. The transfer hook is invoked after the new
    /// owner is recorded and before this call returns.
    pub fn transfer(env: Env, asset_id: u64, caller: Address, to: Address) {
        caller.require_auth();

        let owner = Self::owner_of(env.clone(), asset_id);
        if !Self::is_approved_or_owner(env.clone(), caller, asset_id) {
            panic_with_error!(&env, Error::Unauthorized);
        }
        if is_zero_address(&env, &to) {
            panic_with_error!(&env, Error::ZeroAddress);
        }

        decrement_balance(&env, &owner);
        set_owner(&env, asset_id, &to);
        increment_balance(&env, &to);
        clear_approved(&env, asset_id);

        env.events()
            .publish((Symbol::new(&env, "transfer"),), (asset_id, owner, to));

        if let Some(hook) = get_transfer_hook(&env) {
            TransferHookClient::new(&env, &hook).on_transfer(&asset_id);
        }
    }
}
