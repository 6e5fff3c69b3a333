//! Storage accessors for the anchoring ledger.
//!
//! Every read and write of contract state goes through this module so the
//! entrypoints in `lib.rs` never touch `DataKey` directly.
//!
//! The lifecycle flag, id counter and configuration scalars live in instance
//! storage. Records, hash index entries and contributor counters live in
//! persistent storage, one entry each, so the cost of a call does not grow
//! with the size of the ledger.

use soroban_sdk::{Address, BytesN, Env};

use crate::storage_types::{AnchorRecord, DataKey};
use crate::{CONTRACT_VERSION, DEFAULT_MIN_FEE};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

fn bump_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

/// Writes the lifecycle flag, the id counter and both configuration scalars.
pub fn initialize(e: &Env, min_fee: u64, version: u32) {
    let storage = e.storage().instance();
    storage.set(&DataKey::NextId, &1u64);
    storage.set(&DataKey::MinFee, &min_fee);
    storage.set(&DataKey::Version, &version);
    storage.set(&DataKey::Initialized, &true);
    bump_instance(e);
}

pub fn next_id(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextId).unwrap_or(1)
}

pub fn total_records(e: &Env) -> u64 {
    next_id(e) - 1
}

pub fn min_fee(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::MinFee)
        .unwrap_or(DEFAULT_MIN_FEE)
}

pub fn version(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::Version)
        .unwrap_or(CONTRACT_VERSION)
}

pub fn has_hash(e: &Env, data_hash: &BytesN<32>) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::HashIndex(data_hash.clone()))
}

pub fn id_for_hash(e: &Env, data_hash: &BytesN<32>) -> Option<u64> {
    let key = DataKey::HashIndex(data_hash.clone());
    let id = e.storage().persistent().get(&key)?;
    bump_persistent(e, &key);
    Some(id)
}

pub fn read_record(e: &Env, id: u64) -> Option<AnchorRecord> {
    let key = DataKey::Record(id);
    let record = e.storage().persistent().get(&key)?;
    bump_persistent(e, &key);
    Some(record)
}

/// Overwrites an existing record. Only `verify_data` uses this, to bump the
/// verification counter.
pub fn update_record(e: &Env, record: &AnchorRecord) {
    let key = DataKey::Record(record.id);
    e.storage().persistent().set(&key, record);
    bump_persistent(e, &key);
}

/// Inserts a fresh record together with its hash index entry and advances
/// the id counter. Callers must have run every validation check first.
pub fn insert_record(e: &Env, record: &AnchorRecord) {
    let persistent = e.storage().persistent();

    let record_key = DataKey::Record(record.id);
    persistent.set(&record_key, record);
    bump_persistent(e, &record_key);

    let index_key = DataKey::HashIndex(record.data_hash.clone());
    persistent.set(&index_key, &record.id);
    bump_persistent(e, &index_key);

    let count_key = DataKey::ContributorCount(record.contributor.clone());
    let current: u32 = persistent.get(&count_key).unwrap_or(0);
    persistent.set(&count_key, &(current + 1));
    bump_persistent(e, &count_key);

    e.storage()
        .instance()
        .set(&DataKey::NextId, &(record.id + 1));
    bump_instance(e);
}

pub fn contributor_count(e: &Env, contributor: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::ContributorCount(contributor.clone()))
        .unwrap_or(0)
}
