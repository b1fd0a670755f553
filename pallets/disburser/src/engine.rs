//! Transfer engines behind the two disbursement strategies.
//!
//! Both engines receive an already validated request (matching lengths, amounts summing
//! to `total`, allowance and balance covering `total`) and run inside the caller's storage
//! layer, so any error leaves no trace.

use crate::{Config, LOG_TARGET, WeightInfo};
use core::marker::PhantomData;
use frame::deps::frame_support::{
  storage::with_storage_layer,
  traits::{
    fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate, approvals::Mutate as _},
    tokens::Preservation,
  },
};
use frame::prelude::*;

/// Moves a validated disbursement and reports the weight it used.
pub trait DisbursementEngine<AccountId> {
  fn transfer_all(
    asset: u32,
    payer: &AccountId,
    delegate: &AccountId,
    recipients: &[AccountId],
    amounts: &[u128],
    total: u128,
  ) -> Result<Weight, DispatchError>;
}

/// One delegated `transfer_from` per recipient.
///
/// Zero amounts are not sent to the ledger: they move nothing and would otherwise fail on
/// an approval the previous entries already used up.
pub struct ReferenceEngine<T>(PhantomData<T>);

impl<T: Config> DisbursementEngine<T::AccountId> for ReferenceEngine<T> {
  fn transfer_all(
    asset: u32,
    payer: &T::AccountId,
    delegate: &T::AccountId,
    recipients: &[T::AccountId],
    amounts: &[u128],
    _total: u128,
  ) -> Result<Weight, DispatchError> {
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
      if *amount == 0 {
        continue;
      }
      T::Assets::transfer_from(asset, payer, delegate, recipient, *amount)?;
    }
    Ok(T::WeightInfo::disburse_reference(recipients.len() as u32))
  }
}

/// Pulls `total` into the pallet account with a single delegated transfer, then pays every
/// recipient from there.
///
/// Staging only runs when it cannot change the outcome of the reference path: no
/// intermediate balance may drop below the asset's minimum and get swept as dust. Requests
/// that would are handed to [`ReferenceEngine`] unchanged. So are requests whose staging
/// fails on the pallet account itself (frozen, blocked, no provider); the failed attempt is
/// rolled back first and the reference path decides the outcome.
pub struct OptimizedEngine<T>(PhantomData<T>);

impl<T: Config> OptimizedEngine<T> {
  /// Whether staging yields exactly the balances the reference path would.
  pub fn can_stage(asset: u32, payer: &T::AccountId, amounts: &[u128], total: u128) -> bool {
    let min_balance = T::Assets::minimum_balance(asset);
    let payer_rest = T::Assets::balance(asset, payer).saturating_sub(total);
    let payer_survives = payer_rest == 0 || payer_rest >= min_balance;
    let amounts_above_min = amounts
      .iter()
      .all(|amount| *amount == 0 || *amount >= min_balance);
    payer_survives && amounts_above_min
  }

  fn stage(
    asset: u32,
    payer: &T::AccountId,
    delegate: &T::AccountId,
    recipients: &[T::AccountId],
    amounts: &[u128],
    total: u128,
  ) -> DispatchResult {
    if total == 0 {
      return Ok(());
    }
    T::Assets::transfer_from(asset, payer, delegate, delegate, total)?;
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
      if *amount == 0 {
        continue;
      }
      T::Assets::transfer(asset, delegate, recipient, *amount, Preservation::Expendable)?;
    }
    Ok(())
  }
}

impl<T: Config> DisbursementEngine<T::AccountId> for OptimizedEngine<T> {
  fn transfer_all(
    asset: u32,
    payer: &T::AccountId,
    delegate: &T::AccountId,
    recipients: &[T::AccountId],
    amounts: &[u128],
    total: u128,
  ) -> Result<Weight, DispatchError> {
    if !Self::can_stage(asset, payer, amounts, total) {
      log::warn!(
        target: LOG_TARGET,
        "asset {} disbursement would leave dust, using per-recipient transfers",
        asset,
      );
      return ReferenceEngine::<T>::transfer_all(asset, payer, delegate, recipients, amounts, total);
    }

    let staged = with_storage_layer(|| Self::stage(asset, payer, delegate, recipients, amounts, total));
    if let Err(error) = staged {
      log::warn!(
        target: LOG_TARGET,
        "asset {} staging through the pallet account failed ({:?}), using per-recipient transfers",
        asset,
        error,
      );
      return ReferenceEngine::<T>::transfer_all(asset, payer, delegate, recipients, amounts, total);
    }
    Ok(T::WeightInfo::disburse(recipients.len() as u32))
  }
}
