//! Ecosystem constants shared by the trigger and disbursement pallets.
//!
//! Pallet identifiers derive the keyless accounts that act on behalf of a pallet:
//! the trigger registry's account is the invoker an action sees, and the
//! disburser's account is the delegate a payer approves.

/// Balance type alias for consistency across the workspace
pub type Balance = u128;

/// Asset identifier used by the token ledger (`pallet-assets`)
pub type AssetId = u32;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()`.
pub mod pallet_ids {
  /// Trigger registry pallet ID (invoker of fired actions)
  pub const TRIGGER_REGISTRY_PALLET_ID: &[u8; 8] = b"trigreg0";

  /// Disburser pallet ID (delegate approved by payers, staging account)
  pub const DISBURSER_PALLET_ID: &[u8; 8] = b"disburs0";
}

/// Default bounds used by runtimes and mocks.
pub mod params {
  /// Largest recipient list a single disbursement accepts.
  pub const MAX_RECIPIENTS: u32 = 512;

  /// Longest descriptive label (type, phase, title, source, ...) in bytes.
  pub const MAX_LABEL_LENGTH: u32 = 64;

  /// Longest opaque payload a trigger may carry, in bytes.
  ///
  /// Large enough for a `MAX_RECIPIENTS` payload of 32-byte accounts and u128 amounts.
  pub const MAX_PAYLOAD_LENGTH: u32 = 32 * 1024;
}
