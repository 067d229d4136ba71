#![no_std]
pub mod interfaces;
pub mod types;

pub use interfaces::*;
pub use types::*;

use soroban_sdk::{Address, Env, String};

/// Strkey of the all-zero ed25519 public key, used as the null-address
/// sentinel for balance queries and mint targets.
pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Returns `true` when `address` is the null-address sentinel.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}
