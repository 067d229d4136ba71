use soroban_sdk::{contractclient, Address, Env};

/// Narrow view of the ownership ledger consumed by the rental layer.
///
/// The rental contract never inspects ledger storage directly; every
/// owner / operator relationship is resolved through these two calls.
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedgerInterface {
    /// Current owner of an asset. Fails if the asset does not exist.
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Whether `spender` is the owner of the asset, holds its per-asset
    /// approval, or is an operator for the owner.
    fn is_approved_or_owner(env: Env, spender: Address, asset_id: u64) -> bool;
}

/// Callback implemented by the rental layer.
///
/// Invoked by the ledger exactly once per completed ownership transfer,
/// after the new owner is recorded and before the transfer call returns.
/// Must not fail for a legitimate ledger invocation.
#[contractclient(name = "TransferHookClient")]
pub trait TransferHookInterface {
    fn on_transfer(env: Env, asset_id: u64);
}
