//! Bulk disbursement request types shared by the disburser and the actions that feed it.

use codec::{Decode, DecodeAll, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_arithmetic::traits::{CheckedAdd, Zero};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Which transfer path moves the funds. Both produce identical balances and
/// identical failures; they differ only in execution cost.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum DisbursementStrategy {
  /// Pulls the declared total once, then pays each recipient without touching the approval.
  #[default]
  Optimized,
  /// One delegated transfer per recipient.
  Reference,
}

/// `(beneficiaries, amounts)` carried by a fired trigger's payload.
#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub struct DisbursementPayload<AccountId, Balance> {
  pub beneficiaries: Vec<AccountId>,
  pub amounts: Vec<Balance>,
}

impl<AccountId: Encode + Decode, Balance: Encode + Decode + CheckedAdd + Zero + Copy>
  DisbursementPayload<AccountId, Balance>
{
  pub fn new(beneficiaries: Vec<AccountId>, amounts: Vec<Balance>) -> Self {
    Self {
      beneficiaries,
      amounts,
    }
  }

  /// SCALE bytes handed to `set_triggered`.
  pub fn encode_payload(&self) -> Vec<u8> {
    self.encode()
  }

  /// Decode a payload, rejecting trailing bytes.
  pub fn decode_payload(bytes: &[u8]) -> Result<Self, codec::Error> {
    Self::decode_all(&mut &bytes[..])
  }

  /// Sum of all amounts, `None` on overflow.
  pub fn checked_total(&self) -> Option<Balance> {
    checked_total(&self.amounts)
  }
}

/// Sum `amounts` without wrapping. `None` means the sum does not fit `Balance`.
pub fn checked_total<Balance: CheckedAdd + Zero + Copy>(amounts: &[Balance]) -> Option<Balance> {
  amounts
    .iter()
    .try_fold(Balance::zero(), |acc, amount| acc.checked_add(amount))
}
