//! Action Dispatcher Pallet
//!
//! Actions are registered targets addressed by an [`ActionId`]. Executing an action hands it
//! a trigger id and an opaque payload and records who invoked it.
//!
//! - [`ActionKind::Record`] only records the call. The payload is never inspected.
//! - [`ActionKind::Disburse`] reads the payload as SCALE encoded `(beneficiaries, amounts)` and
//!   pays them from the action owner through the disburser. The owner approves the disburser
//!   account beforehand.
//!
//! An action may be restricted to a single `allowed_caller`; without one anybody may execute
//! it. `Disburse` actions move the owner's funds and always carry an `allowed_caller`, usually
//! the trigger registry account.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use frame::prelude::{DispatchError, Weight};
use primitives::{ActionId, TriggerId};

pub const LOG_TARGET: &str = "runtime::action-dispatcher";

/// Entry point used by trigger registries to run an action.
pub trait ActionExecutor<AccountId> {
  /// Execute `action` for `trigger_id` on behalf of `invoker`. Returns the weight consumed.
  fn execute(
    invoker: &AccountId,
    action: ActionId,
    trigger_id: TriggerId,
    payload: &[u8],
  ) -> Result<Weight, DispatchError>;

  /// Upper bound of `execute` for any action and payload.
  fn max_execution_weight() -> Weight;
}

impl<AccountId> ActionExecutor<AccountId> for () {
  fn execute(_: &AccountId, _: ActionId, _: TriggerId, _: &[u8]) -> Result<Weight, DispatchError> {
    Err(DispatchError::Other("ActionExecutor not configured"))
  }

  fn max_execution_weight() -> Weight {
    Weight::zero()
  }
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::prelude::*;
  use pallet_disburser::BulkDisburse;
  use primitives::{ActionId, DisbursementPayload, DisbursementStrategy, TriggerId};

  /// What an action does with the payload it receives.
  #[derive(
    Clone,
    Copy,
    Debug,
    Decode,
    DecodeWithMemTracking,
    Encode,
    Eq,
    PartialEq,
    TypeInfo,
    MaxEncodedLen,
  )]
  pub enum ActionKind {
    /// Record the call only.
    Record,
    /// Pay the encoded beneficiaries from the owner's approved balance of `asset`.
    Disburse {
      asset: u32,
      strategy: DisbursementStrategy,
    },
  }

  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct ActionInfo<AccountId> {
    pub owner: AccountId,
    pub kind: ActionKind,
    /// Only this account may execute the action when set
    pub allowed_caller: Option<AccountId>,
  }

  pub type ActionInfoOf<T> = ActionInfo<<T as frame_system::Config>::AccountId>;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Bulk payments for `Disburse` actions
    type Disburser: BulkDisburse<Self::AccountId, u32, u128>;

    /// Longest payload an action accepts, in bytes
    #[pallet::constant]
    type MaxPayloadLength: Get<u32>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  #[pallet::getter(fn next_action_id)]
  pub type NextActionId<T> = StorageValue<_, ActionId, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn actions)]
  pub type Actions<T: Config> = StorageMap<_, Blake2_128Concat, ActionId, ActionInfoOf<T>, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    ActionCreated {
      action_id: ActionId,
      owner: T::AccountId,
    },
    AllowedCallerSet {
      action_id: ActionId,
      allowed_caller: Option<T::AccountId>,
    },
    /// An action ran for `trigger_id`, invoked by `invoker`.
    ActionExecuted {
      trigger_id: TriggerId,
      payload: BoundedVec<u8, T::MaxPayloadLength>,
      invoker: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No action with this id
    ActionNotFound,
    /// The action is restricted to another caller
    UnauthorizedCaller,
    /// Only the owner may change the action
    NotOwner,
    /// Payload exceeds `MaxPayloadLength`
    PayloadTooLarge,
    /// Payload is not an encoded `(beneficiaries, amounts)` pair
    MalformedPayload,
    /// Payload amounts do not fit a balance when summed
    PayloadTotalOverflow,
    /// Action id space exhausted
    ActionIdOverflow,
    /// `Disburse` actions must be restricted to an allowed caller
    UnrestrictedDisburse,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register an action owned by the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_action())]
    pub fn create_action(
      origin: OriginFor<T>,
      kind: ActionKind,
      allowed_caller: Option<T::AccountId>,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::ensure_restricted(&kind, &allowed_caller)?;
      let action_id = NextActionId::<T>::get();
      let next_id = action_id
        .checked_add(1)
        .ok_or(Error::<T>::ActionIdOverflow)?;

      Actions::<T>::insert(
        action_id,
        ActionInfo {
          owner: owner.clone(),
          kind,
          allowed_caller,
        },
      );
      NextActionId::<T>::put(next_id);

      Self::deposit_event(Event::ActionCreated { action_id, owner });
      Ok(())
    }

    /// Restrict the action to `allowed_caller`, or open it again with `None`.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_allowed_caller())]
    pub fn set_allowed_caller(
      origin: OriginFor<T>,
      action_id: ActionId,
      allowed_caller: Option<T::AccountId>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Actions::<T>::try_mutate(action_id, |maybe_action| -> DispatchResult {
        let action = maybe_action.as_mut().ok_or(Error::<T>::ActionNotFound)?;
        ensure!(action.owner == who, Error::<T>::NotOwner);
        Self::ensure_restricted(&action.kind, &allowed_caller)?;
        action.allowed_caller = allowed_caller.clone();
        Ok(())
      })?;

      Self::deposit_event(Event::AllowedCallerSet {
        action_id,
        allowed_caller,
      });
      Ok(())
    }

    /// Execute an action directly; the signer is the recorded invoker.
    #[pallet::call_index(2)]
    #[pallet::weight(
      T::WeightInfo::execute(payload.len() as u32)
        .saturating_add(T::Disburser::max_disburse_weight())
    )]
    pub fn execute(
      origin: OriginFor<T>,
      action_id: ActionId,
      trigger_id: TriggerId,
      payload: BoundedVec<u8, T::MaxPayloadLength>,
    ) -> DispatchResultWithPostInfo {
      let invoker = ensure_signed(origin)?;
      let used = Self::do_execute(&invoker, action_id, trigger_id, &payload)?;
      Ok(Some(used).into())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Anybody could pick the recipients of an open `Disburse` action.
    fn ensure_restricted(
      kind: &ActionKind,
      allowed_caller: &Option<T::AccountId>,
    ) -> DispatchResult {
      if matches!(kind, ActionKind::Disburse { .. }) {
        ensure!(allowed_caller.is_some(), Error::<T>::UnrestrictedDisburse);
      }
      Ok(())
    }

    pub fn do_execute(
      invoker: &T::AccountId,
      action_id: ActionId,
      trigger_id: TriggerId,
      payload: &[u8],
    ) -> Result<Weight, DispatchError> {
      let action = Actions::<T>::get(action_id).ok_or(Error::<T>::ActionNotFound)?;
      if let Some(allowed) = &action.allowed_caller {
        ensure!(allowed == invoker, Error::<T>::UnauthorizedCaller);
      }
      let payload: BoundedVec<u8, T::MaxPayloadLength> = payload
        .to_vec()
        .try_into()
        .map_err(|_| Error::<T>::PayloadTooLarge)?;

      let mut used = T::WeightInfo::execute(payload.len() as u32);
      if let ActionKind::Disburse { asset, strategy } = action.kind {
        used = used.saturating_add(Self::disburse_payload(&action.owner, asset, strategy, &payload)?);
      }

      log::debug!(
        target: LOG_TARGET,
        "action {} executed for trigger {} ({} payload bytes)",
        action_id,
        trigger_id,
        payload.len(),
      );
      Self::deposit_event(Event::ActionExecuted {
        trigger_id,
        payload,
        invoker: invoker.clone(),
      });
      Ok(used)
    }

    fn disburse_payload(
      owner: &T::AccountId,
      asset: u32,
      strategy: DisbursementStrategy,
      payload: &[u8],
    ) -> Result<Weight, DispatchError> {
      let request = DisbursementPayload::<T::AccountId, u128>::decode_payload(payload)
        .map_err(|_| Error::<T>::MalformedPayload)?;
      let total = request
        .checked_total()
        .ok_or(Error::<T>::PayloadTotalOverflow)?;
      T::Disburser::disburse(
        strategy,
        owner,
        asset,
        &request.beneficiaries,
        &request.amounts,
        total,
      )
    }
  }

  impl<T: Config> crate::ActionExecutor<T::AccountId> for Pallet<T> {
    fn execute(
      invoker: &T::AccountId,
      action: ActionId,
      trigger_id: TriggerId,
      payload: &[u8],
    ) -> Result<Weight, DispatchError> {
      Self::do_execute(invoker, action, trigger_id, payload)
    }

    fn max_execution_weight() -> Weight {
      T::WeightInfo::execute(T::MaxPayloadLength::get())
        .saturating_add(T::Disburser::max_disburse_weight())
    }
  }
}
