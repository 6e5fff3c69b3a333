use soroban_sdk::{contracttype, Address, BytesN, String};

/// An anchored content hash. Immutable once written, apart from
/// `verification_count`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnchorRecord {
    pub id: u64,
    pub contributor: Address,
    pub data_hash: BytesN<32>,
    pub metadata_uri: String,
    pub fee_paid: u64,
    pub block_height: u32,
    pub anchored_at: u64,
    pub verification_count: u64,
}

/// Outcome of `verify_data`. A mismatch is reported here, never as an error.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationResult {
    pub contributor: Address,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SystemStats {
    pub total_records: u64,
    pub contract_version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SystemMetrics {
    pub total_records: u64,
    pub contract_version: u32,
    pub min_fee: u64,
    pub total_fees_collected: u128,
    pub total_verifications: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    NextId,
    MinFee,
    Version,
    Record(u64),
    HashIndex(BytesN<32>),
    ContributorCount(Address),
}
