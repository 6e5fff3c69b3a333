#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String};

mod events;
mod fees;
mod ledger;
mod storage_types;

pub use fees::{FeeCollector, MinimumFee};
pub use storage_types::{AnchorRecord, SystemMetrics, SystemStats, VerificationResult};

pub const CONTRACT_VERSION: u32 = 1;
pub const DEFAULT_MIN_FEE: u64 = 1_000;
/// Upper bound on the encoded length of a metadata URI, in bytes.
pub const MAX_METADATA_URI_LEN: u32 = 256;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    DataAlreadyExists = 101,
    InsufficientFee = 102,
    NotFound = 103,
    NotInitialized = 104,
    AlreadyInitialized = 105,
    MetadataUriTooLong = 106,
}

#[contract]
pub struct DataAnchoringContract;

#[contractimpl]
impl DataAnchoringContract {
    /// Initialize the ledger. Can only be called once; any caller may do it.
    pub fn initialize_contract(e: Env) -> Result<bool, Error> {
        if ledger::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }

        ledger::initialize(&e, DEFAULT_MIN_FEE, CONTRACT_VERSION);
        events::initialized(&e, CONTRACT_VERSION);
        Ok(true)
    }

    /// Anchor a content hash with a metadata pointer and return its new id.
    ///
    /// # Arguments
    /// * `contributor` - The anchoring address, must authorize the call
    /// * `data_hash` - SHA256 fingerprint of the off-chain payload
    /// * `metadata_uri` - Pointer to the payload, at most 256 bytes of UTF-8
    /// * `fee` - Amount the contributor pays, checked against the minimum fee
    ///
    /// Checks run in a fixed order and the first failure wins: duplicate
    /// hash, then fee, then URI length. Nothing is written unless all pass.
    pub fn anchor_data(
        e: Env,
        contributor: Address,
        data_hash: BytesN<32>,
        metadata_uri: String,
        fee: u64,
    ) -> Result<u64, Error> {
        if !ledger::is_initialized(&e) {
            return Err(Error::NotInitialized);
        }
        contributor.require_auth();

        let policy = MinimumFee::new(ledger::min_fee(&e));
        validate_anchor(&e, &policy, &data_hash, &metadata_uri, fee)?;

        let id = ledger::next_id(&e);
        let record = AnchorRecord {
            id,
            contributor: contributor.clone(),
            data_hash: data_hash.clone(),
            metadata_uri,
            fee_paid: fee,
            block_height: e.ledger().sequence(),
            anchored_at: e.ledger().timestamp(),
            verification_count: 0,
        };
        ledger::insert_record(&e, &record);

        events::anchored(&e, &contributor, id, &data_hash);
        Ok(id)
    }

    /// Check `candidate_hash` against the record stored under `id`.
    ///
    /// A mismatch is a successful call with `verified = false`; only an
    /// unknown id is an error. Every call bumps the record's verification
    /// count.
    pub fn verify_data(
        e: Env,
        id: u64,
        candidate_hash: BytesN<32>,
    ) -> Result<VerificationResult, Error> {
        if !ledger::is_initialized(&e) {
            return Err(Error::NotInitialized);
        }
        let mut record = ledger::read_record(&e, id).ok_or(Error::NotFound)?;

        let verified = hashes_match(&record.data_hash.to_array(), &candidate_hash.to_array());
        record.verification_count = record.verification_count.saturating_add(1);
        ledger::update_record(&e, &record);

        events::verified(&e, id, verified);
        Ok(VerificationResult {
            contributor: record.contributor,
            verified,
        })
    }

    pub fn get_verification_metadata(e: Env, id: u64) -> Option<AnchorRecord> {
        ledger::read_record(&e, id)
    }

    /// Resolve a record through the hash index.
    pub fn get_verification_by_hash(e: Env, data_hash: BytesN<32>) -> Option<AnchorRecord> {
        let id = ledger::id_for_hash(&e, &data_hash)?;
        ledger::read_record(&e, id)
    }

    pub fn verification_exists(e: Env, id: u64) -> bool {
        id >= 1 && id < ledger::next_id(&e)
    }

    pub fn get_system_stats(e: Env) -> SystemStats {
        SystemStats {
            total_records: ledger::total_records(&e),
            contract_version: ledger::version(&e),
        }
    }

    /// Aggregates are summed over every stored record on each call.
    pub fn get_detailed_system_metrics(e: Env) -> SystemMetrics {
        let next_id = ledger::next_id(&e);
        let mut total_fees_collected: u128 = 0;
        let mut total_verifications: u64 = 0;

        for id in 1..next_id {
            if let Some(record) = ledger::read_record(&e, id) {
                total_fees_collected += record.fee_paid as u128;
                total_verifications =
                    total_verifications.saturating_add(record.verification_count);
            }
        }

        SystemMetrics {
            total_records: next_id - 1,
            contract_version: ledger::version(&e),
            min_fee: ledger::min_fee(&e),
            total_fees_collected,
            total_verifications,
        }
    }

    pub fn get_min_fee(e: Env) -> u64 {
        ledger::min_fee(&e)
    }

    pub fn is_initialized(e: Env) -> bool {
        ledger::is_initialized(&e)
    }

    /// Number of records anchored by `contributor`.
    pub fn get_contributor_count(e: Env, contributor: Address) -> u32 {
        ledger::contributor_count(&e, &contributor)
    }
}

fn validate_anchor(
    e: &Env,
    fees: &impl FeeCollector,
    data_hash: &BytesN<32>,
    metadata_uri: &String,
    fee: u64,
) -> Result<(), Error> {
    if ledger::has_hash(e, data_hash) {
        return Err(Error::DataAlreadyExists);
    }
    if !fees.accepts(fee) {
        return Err(Error::InsufficientFee);
    }
    // `String::len` is the UTF-8 byte length.
    if metadata_uri.len() > MAX_METADATA_URI_LEN {
        return Err(Error::MetadataUriTooLong);
    }
    Ok(())
}

// No early exit, so timing does not reveal the length of the matching prefix.
fn hashes_match(stored: &[u8; 32], candidate: &[u8; 32]) -> bool {
    let mut diff = 0u8;
    for (a, b) in stored.iter().zip(candidate.iter()) {
        diff |= a ^ b;
    }
    diff == 0
}
