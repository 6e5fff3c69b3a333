use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Topics `["init"]`, data is the contract version.
pub fn initialized(e: &Env, version: u32) {
    e.events().publish((symbol_short!("init"),), version);
}

/// Topics `["anchor", contributor, id]`, data is the anchored hash.
pub fn anchored(e: &Env, contributor: &Address, id: u64, data_hash: &BytesN<32>) {
    e.events().publish(
        (symbol_short!("anchor"), contributor.clone(), id),
        data_hash.clone(),
    );
}

/// Topics `["verify", id]`, data is whether the candidate hash matched.
pub fn verified(e: &Env, id: u64, verified: bool) {
    e.events().publish((symbol_short!("verify"), id), verified);
}
