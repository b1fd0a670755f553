//! Disburser Pallet
//!
//! Moves one fungible asset from a payer to many recipients in a single atomic call.
//!
//! The payer approves this pallet's account as delegate on the token ledger and then calls
//! either `disburse` (optimized path) or `disburse_reference` (one delegated transfer per
//! recipient). Both paths validate the request the same way and leave identical balances;
//! only their weight differs.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod engine;
pub use engine::{DisbursementEngine, OptimizedEngine, ReferenceEngine};

pub mod weights;
pub use weights::WeightInfo;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use frame::prelude::{DispatchError, Weight};
use primitives::DisbursementStrategy;

pub const LOG_TARGET: &str = "runtime::disburser";

/// Bulk disbursement as consumed by other pallets (e.g. a disbursing action).
pub trait BulkDisburse<AccountId, AssetId, Balance> {
  /// Pay `amounts[i]` of `asset` from `payer` to `recipients[i]`, all or nothing.
  ///
  /// Returns the weight actually consumed.
  fn disburse(
    strategy: DisbursementStrategy,
    payer: &AccountId,
    asset: AssetId,
    recipients: &[AccountId],
    amounts: &[Balance],
    declared_total: Balance,
  ) -> Result<Weight, DispatchError>;

  /// Upper bound of `disburse` for the largest accepted recipient list.
  fn max_disburse_weight() -> Weight;
}

impl<AccountId, AssetId, Balance> BulkDisburse<AccountId, AssetId, Balance> for () {
  fn disburse(
    _: DisbursementStrategy,
    _: &AccountId,
    _: AssetId,
    _: &[AccountId],
    _: &[Balance],
    _: Balance,
  ) -> Result<Weight, DispatchError> {
    Err(DispatchError::Other("BulkDisburse not configured"))
  }

  fn max_disburse_weight() -> Weight {
    Weight::zero()
  }
}

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Create an asset, fund `payer` with `amount` of it and approve `delegate` for `amount`.
  fn setup_approved_payer(
    payer: &AccountId,
    delegate: &AccountId,
    amount: u128,
  ) -> Result<u32, DispatchError>;
}

#[frame::pallet]
pub mod pallet {
  use super::{DisbursementEngine, LOG_TARGET, OptimizedEngine, ReferenceEngine, WeightInfo};
  use frame::deps::{
    frame_support::{
      PalletId,
      storage::with_storage_layer,
      traits::fungibles::{
        Inspect as FungiblesInspect, Mutate as FungiblesMutate,
        approvals::{Inspect as ApprovalInspect, Mutate as ApprovalMutate},
      },
    },
    sp_runtime::traits::AccountIdConversion,
  };
  use frame::prelude::*;
  use primitives::{DisbursementStrategy, checked_total};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Token ledger holding the disbursed assets (usually `pallet-assets`)
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = u128>
      + FungiblesMutate<Self::AccountId>
      + ApprovalInspect<Self::AccountId>
      + ApprovalMutate<Self::AccountId>;

    /// Derives the delegate account payers approve and the staging account of the optimized path
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Largest recipient list accepted by a single disbursement
    #[pallet::constant]
    type MaxRecipients: Get<u32>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Running total paid out per asset
  #[pallet::storage]
  #[pallet::getter(fn total_disbursed)]
  pub type TotalDisbursed<T: Config> = StorageMap<_, Blake2_128Concat, u32, u128, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// `total` of `asset` was paid from `payer` to `recipients` accounts.
    Disbursed {
      payer: T::AccountId,
      asset: u32,
      recipients: u32,
      total: u128,
      strategy: DisbursementStrategy,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Recipient and amount lists differ in length.
    LengthMismatch,
    /// Amounts do not sum to the declared total (or the sum overflows).
    TotalMismatch,
    /// The payer has not approved this pallet for the declared total.
    InsufficientAllowance,
    /// The payer does not hold the declared total.
    InsufficientBalance,
    /// More recipients than `MaxRecipients`.
    TooManyRecipients,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Disburse through the optimized path.
    ///
    /// Charged as the reference path up front; the difference is refunded when the
    /// optimized path runs.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::disburse_reference(recipients.len() as u32))]
    pub fn disburse(
      origin: OriginFor<T>,
      asset: u32,
      recipients: BoundedVec<T::AccountId, T::MaxRecipients>,
      amounts: BoundedVec<u128, T::MaxRecipients>,
      declared_total: u128,
    ) -> DispatchResultWithPostInfo {
      let payer = ensure_signed(origin)?;
      let used = Self::do_disburse(
        DisbursementStrategy::Optimized,
        &payer,
        asset,
        &recipients,
        &amounts,
        declared_total,
      )?;
      Ok(Some(used).into())
    }

    /// Disburse with one delegated transfer per recipient.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::disburse_reference(recipients.len() as u32))]
    pub fn disburse_reference(
      origin: OriginFor<T>,
      asset: u32,
      recipients: BoundedVec<T::AccountId, T::MaxRecipients>,
      amounts: BoundedVec<u128, T::MaxRecipients>,
      declared_total: u128,
    ) -> DispatchResultWithPostInfo {
      let payer = ensure_signed(origin)?;
      let used = Self::do_disburse(
        DisbursementStrategy::Reference,
        &payer,
        asset,
        &recipients,
        &amounts,
        declared_total,
      )?;
      Ok(Some(used).into())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Delegate account payers approve; also holds staged funds on the optimized path.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Validate and execute a disbursement inside its own storage layer.
    ///
    /// Nothing is written unless every transfer succeeds.
    pub fn do_disburse(
      strategy: DisbursementStrategy,
      payer: &T::AccountId,
      asset: u32,
      recipients: &[T::AccountId],
      amounts: &[u128],
      declared_total: u128,
    ) -> Result<Weight, DispatchError> {
      with_storage_layer(|| -> Result<Weight, DispatchError> {
        let delegate = Self::account_id();
        let total = Self::ensure_valid_request(payer, &delegate, asset, recipients, amounts, declared_total)?;
        let used = match strategy {
          DisbursementStrategy::Optimized => OptimizedEngine::<T>::transfer_all(
            asset, payer, &delegate, recipients, amounts, total,
          )?,
          DisbursementStrategy::Reference => ReferenceEngine::<T>::transfer_all(
            asset, payer, &delegate, recipients, amounts, total,
          )?,
        };
        TotalDisbursed::<T>::mutate(asset, |paid| *paid = paid.saturating_add(total));
        log::debug!(
          target: LOG_TARGET,
          "disbursed {} of asset {} to {} recipients via {:?}",
          total,
          asset,
          recipients.len(),
          strategy,
        );
        Self::deposit_event(Event::Disbursed {
          payer: payer.clone(),
          asset,
          recipients: recipients.len() as u32,
          total,
          strategy,
        });
        Ok(used)
      })
    }

    /// Checks shared by every strategy, in a fixed order so both report the same failure.
    fn ensure_valid_request(
      payer: &T::AccountId,
      delegate: &T::AccountId,
      asset: u32,
      recipients: &[T::AccountId],
      amounts: &[u128],
      declared_total: u128,
    ) -> Result<u128, DispatchError> {
      ensure!(
        recipients.len() <= T::MaxRecipients::get() as usize,
        Error::<T>::TooManyRecipients
      );
      ensure!(recipients.len() == amounts.len(), Error::<T>::LengthMismatch);
      let total = checked_total(amounts).ok_or(Error::<T>::TotalMismatch)?;
      ensure!(total == declared_total, Error::<T>::TotalMismatch);
      ensure!(
        T::Assets::allowance(asset, payer, delegate) >= total,
        Error::<T>::InsufficientAllowance
      );
      ensure!(
        T::Assets::balance(asset, payer) >= total,
        Error::<T>::InsufficientBalance
      );
      Ok(total)
    }
  }

  impl<T: Config> crate::BulkDisburse<T::AccountId, u32, u128> for Pallet<T> {
    fn disburse(
      strategy: DisbursementStrategy,
      payer: &T::AccountId,
      asset: u32,
      recipients: &[T::AccountId],
      amounts: &[u128],
      declared_total: u128,
    ) -> Result<Weight, DispatchError> {
      Self::do_disburse(strategy, payer, asset, recipients, amounts, declared_total)
    }

    fn max_disburse_weight() -> Weight {
      T::WeightInfo::disburse_reference(T::MaxRecipients::get())
    }
  }

  /// Gives the pallet account a provider so it can hold staged funds of any asset
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
