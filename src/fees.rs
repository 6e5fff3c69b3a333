/// Decides whether an asserted fee is acceptable for anchoring.
///
/// Settlement of the fee happens outside the contract; implementations only
/// answer the acceptance question.
pub trait FeeCollector {
    fn accepts(&self, amount: u64) -> bool;
}

/// Accepts any amount at or above a fixed floor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MinimumFee {
    pub min_fee: u64,
}

impl MinimumFee {
    pub fn new(min_fee: u64) -> Self {
        Self { min_fee }
    }
}

impl FeeCollector for MinimumFee {
    fn accepts(&self, amount: u64) -> bool {
        amount >= self.min_fee
    }
}
