use soroban_sdk::{contracttype, Address, Env};

use rental_lib::UsageRight;

/// TTL constants (in ledgers).
///
/// Soroban ledgers close roughly every 5 seconds, so:
/// * `RIGHT_TTL_THRESHOLD` ≈ 30 days of ledger time before auto-bump.
/// * `RIGHT_TTL_EXTEND`    ≈ 60 days, keeps records and balances readable
///   well past typical lease terms.
const RIGHT_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const RIGHT_TTL_EXTEND: u32 = 1_036_800; // ~60 days

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Address of the ownership ledger contract
    AssetLedger,
    /// Usage-right record by asset id
    UsageRight(u64),
    /// Count of active usage rights by holder, maintained at mutation time
    UserBalance(Address),
}

/* ---------------- ADMIN ---------------- */

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/* ---------------- ASSET LEDGER ---------------- */

pub fn set_asset_ledger(env: &Env, ledger: &Address) {
    env.storage().instance().set(&DataKey::AssetLedger, ledger);
}

pub fn get_asset_ledger(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AssetLedger)
}

/* ---------------- USAGE RIGHTS ---------------- */

pub fn set_usage_right(env: &Env, asset_id: u64, right: &UsageRight) {
    let key = DataKey::UsageRight(asset_id);
    env.storage().persistent().set(&key, right);
    env.storage()
        .persistent()
        .extend_ttl(&key, RIGHT_TTL_THRESHOLD, RIGHT_TTL_EXTEND);
}

pub fn get_usage_right(env: &Env, asset_id: u64) -> Option<UsageRight> {
    env.storage().persistent().get(&DataKey::UsageRight(asset_id))
}

/* ---------------- USER BALANCES ---------------- */

pub fn get_user_balance(env: &Env, address: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UserBalance(address.clone()))
        .unwrap_or(0)
}

pub fn increment_user_balance(env: &Env, address: &Address) {
    let key = DataKey::UserBalance(address.clone());
    let balance = get_user_balance(env, address) + 1;
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, RIGHT_TTL_THRESHOLD, RIGHT_TTL_EXTEND);
}

pub fn decrement_user_balance(env: &Env, address: &Address) {
    let key = DataKey::UserBalance(address.clone());
    let balance = get_user_balance(env, address).saturating_sub(1);
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, RIGHT_TTL_THRESHOLD, RIGHT_TTL_EXTEND);
}
