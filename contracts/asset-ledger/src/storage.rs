use soroban_sdk::{contracttype, Address, Env};

/// TTL constants (in ledgers), same horizon as the rental layer.
const ASSET_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const ASSET_TTL_EXTEND: u32 = 1_036_800; // ~60 days

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Contract notified after each completed transfer
    TransferHook,
    /// Monotonic asset id counter
    AssetCounter,
    /// Owner by asset id
    Owner(u64),
    /// Owned-asset count by address
    Balance(Address),
    /// Per-asset approved address
    Approved(u64),
    /// Operator approval: (owner, operator)
    Operator(Address, Address),
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

/* ---------------- TRANSFER HOOK ---------------- */

pub fn set_transfer_hook(env: &Env, hook: &Address) {
    env.storage().instance().set(&DataKey::TransferHook, hook);
}

pub fn get_transfer_hook(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::TransferHook)
}

/* ---------------- ASSET COUNTER ---------------- */

pub fn get_asset_counter(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::AssetCounter).unwrap_or(0)
}

pub fn increment_asset_counter(env: &Env) -> u64 {
    let counter = get_asset_counter(env)
        .checked_add(1)
        .expect("asset counter overflow");
    env.storage().instance().set(&DataKey::AssetCounter, &counter);
    counter
}

/* ---------------- OWNERSHIP ---------------- */

pub fn set_owner(env: &Env, asset_id: u64, owner: &Address) {
    let key = DataKey::Owner(asset_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, ASSET_TTL_THRESHOLD, ASSET_TTL_EXTEND);
}

pub fn get_owner(env: &Env, asset_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(asset_id))
}

/* ---------------- BALANCES ---------------- */

pub fn get_balance(env: &Env, address: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(address.clone()))
        .unwrap_or(0)
}

pub fn increment_balance(env: &Env, address: &Address) {
    let key = DataKey::Balance(address.clone());
    let balance = get_balance(env, address) + 1;
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, ASSET_TTL_THRESHOLD, ASSET_TTL_EXTEND);
}

pub fn decrement_balance(env: &Env, address: &Address) {
    let key = DataKey::Balance(address.clone());
    let balance = get_balance(env, address).saturating_sub(1);
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, ASSET_TTL_THRESHOLD, ASSET_TTL_EXTEND);
}

/* ---------------- APPROVALS ---------------- */

pub fn set_approved(env: &Env, asset_id: u64, approved: &Address) {
    let key = DataKey::Approved(asset_id);
    env.storage().persistent().set(&key, approved);
    env.storage()
        .persistent()
        .extend_ttl(&key, ASSET_TTL_THRESHOLD, ASSET_TTL_EXTEND);
}

pub fn get_approved(env: &Env, asset_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(asset_id))
}

pub fn clear_approved(env: &Env, asset_id: u64) {
    env.storage().persistent().remove(&DataKey::Approved(asset_id));
}

pub fn set_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, ASSET_TTL_THRESHOLD, ASSET_TTL_EXTEND);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}
