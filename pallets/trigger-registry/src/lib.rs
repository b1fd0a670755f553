//! Trigger Registry Pallet
//!
//! Holds unconditional anticipatory-action triggers. Each trigger names the action it fires;
//! firing marks the trigger as triggered and hands the supplied payload to that action, with
//! this pallet's account as the invoker. A trigger fires at most once.
//!
//! Registration does not check that the action exists; a missing or misconfigured action
//! surfaces when the trigger fires, and the firing is rolled back.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::trigger-registry";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Create an action that `invoker` may execute with any payload.
  fn setup_action(
    invoker: &AccountId,
  ) -> Result<primitives::ActionId, polkadot_sdk::sp_runtime::DispatchError>;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::{
    frame_support::{PalletId, traits::EnsureOrigin},
    sp_runtime::traits::AccountIdConversion,
  };
  use frame::prelude::*;
  use pallet_action_dispatcher::ActionExecutor;
  use primitives::{ActionId, FIRST_TRIGGER_ID, TriggerId};

  pub type Label<T> = BoundedVec<u8, <T as Config>::MaxLabelLength>;
  pub type Payload<T> = BoundedVec<u8, <T as Config>::MaxPayloadLength>;

  /// Fields supplied when registering a trigger.
  #[derive(
    CloneNoBound,
    DebugNoBound,
    Decode,
    DecodeWithMemTracking,
    Encode,
    EqNoBound,
    PartialEqNoBound,
    TypeInfo,
    MaxEncodedLen,
  )]
  #[scale_info(skip_type_params(MaxLabelLength))]
  pub struct TriggerParams<MaxLabelLength: Get<u32>> {
    pub trigger_type: BoundedVec<u8, MaxLabelLength>,
    pub phase: BoundedVec<u8, MaxLabelLength>,
    pub title: BoundedVec<u8, MaxLabelLength>,
    pub source: BoundedVec<u8, MaxLabelLength>,
    pub river_basin: BoundedVec<u8, MaxLabelLength>,
    /// Commitment to the expected payload parameters; informational
    pub params_hash: [u8; 32],
    pub is_mandatory: bool,
    /// Action fired with the payload
    pub action: ActionId,
  }

  /// A registered trigger.
  #[derive(
    CloneNoBound,
    DebugNoBound,
    Decode,
    DecodeWithMemTracking,
    Encode,
    EqNoBound,
    PartialEqNoBound,
    TypeInfo,
    MaxEncodedLen,
  )]
  #[scale_info(skip_type_params(MaxLabelLength))]
  pub struct Trigger<MaxLabelLength: Get<u32>> {
    pub trigger_type: BoundedVec<u8, MaxLabelLength>,
    pub phase: BoundedVec<u8, MaxLabelLength>,
    pub title: BoundedVec<u8, MaxLabelLength>,
    pub source: BoundedVec<u8, MaxLabelLength>,
    pub river_basin: BoundedVec<u8, MaxLabelLength>,
    pub params_hash: [u8; 32],
    pub is_mandatory: bool,
    /// Set once on firing, never cleared
    pub is_triggered: bool,
    pub action: ActionId,
  }

  impl<MaxLabelLength: Get<u32>> From<TriggerParams<MaxLabelLength>> for Trigger<MaxLabelLength> {
    fn from(params: TriggerParams<MaxLabelLength>) -> Self {
      Self {
        trigger_type: params.trigger_type,
        phase: params.phase,
        title: params.title,
        source: params.source,
        river_basin: params.river_basin,
        params_hash: params.params_hash,
        is_mandatory: params.is_mandatory,
        is_triggered: false,
        action: params.action,
      }
    }
  }

  pub type TriggerParamsOf<T> = TriggerParams<<T as Config>::MaxLabelLength>;
  pub type TriggerOf<T> = Trigger<<T as Config>::MaxLabelLength>;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Origin allowed to register, update and fire triggers
    type ManagerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Executes the action named by a fired trigger
    type Actions: ActionExecutor<Self::AccountId>;

    /// Derives the account actions see as the invoker
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    #[pallet::constant]
    type MaxLabelLength: Get<u32>;

    #[pallet::constant]
    type MaxPayloadLength: Get<u32>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::type_value]
  pub fn DefaultNextTriggerId() -> TriggerId {
    FIRST_TRIGGER_ID
  }

  #[pallet::storage]
  #[pallet::getter(fn next_trigger_id)]
  pub type NextTriggerId<T> = StorageValue<_, TriggerId, ValueQuery, DefaultNextTriggerId>;

  #[pallet::storage]
  #[pallet::getter(fn triggers)]
  pub type Triggers<T: Config> = StorageMap<_, Blake2_128Concat, TriggerId, TriggerOf<T>, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    TriggerRegistered {
      trigger_id: TriggerId,
    },
    TriggerUpdated {
      trigger_id: TriggerId,
      phase: Label<T>,
      is_mandatory: bool,
    },
    /// Trigger fired; `payload` is handed to `action` right after this event.
    TriggerExecuted {
      trigger_id: TriggerId,
      action: ActionId,
      payload: Payload<T>,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No trigger with this id
    NotFound,
    /// The trigger already fired
    AlreadyTriggered,
    /// Trigger id space exhausted
    TriggerIdOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::register_trigger())]
    pub fn register_trigger(origin: OriginFor<T>, params: TriggerParamsOf<T>) -> DispatchResult {
      T::ManagerOrigin::ensure_origin(origin)?;

      let trigger_id = NextTriggerId::<T>::get();
      let next_id = trigger_id
        .checked_add(1)
        .ok_or(Error::<T>::TriggerIdOverflow)?;

      Triggers::<T>::insert(trigger_id, TriggerOf::<T>::from(params));
      NextTriggerId::<T>::put(next_id);

      Self::deposit_event(Event::TriggerRegistered { trigger_id });
      Ok(())
    }

    /// Replace the phase label and mandatory flag of a trigger that has not fired.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::update_trigger())]
    pub fn update_trigger(
      origin: OriginFor<T>,
      trigger_id: TriggerId,
      phase: Label<T>,
      is_mandatory: bool,
    ) -> DispatchResult {
      T::ManagerOrigin::ensure_origin(origin)?;

      Triggers::<T>::try_mutate(trigger_id, |maybe_trigger| -> DispatchResult {
        let trigger = maybe_trigger.as_mut().ok_or(Error::<T>::NotFound)?;
        ensure!(!trigger.is_triggered, Error::<T>::AlreadyTriggered);
        trigger.phase = phase.clone();
        trigger.is_mandatory = is_mandatory;
        Ok(())
      })?;

      Self::deposit_event(Event::TriggerUpdated {
        trigger_id,
        phase,
        is_mandatory,
      });
      Ok(())
    }

    /// Fire a trigger: mark it triggered and execute its action with `payload`.
    ///
    /// Any action failure reverts the firing.
    #[pallet::call_index(2)]
    #[pallet::weight(
      T::WeightInfo::set_triggered(payload.len() as u32)
        .saturating_add(T::Actions::max_execution_weight())
    )]
    pub fn set_triggered(
      origin: OriginFor<T>,
      trigger_id: TriggerId,
      payload: Payload<T>,
    ) -> DispatchResultWithPostInfo {
      T::ManagerOrigin::ensure_origin(origin)?;

      let action = Triggers::<T>::try_mutate(trigger_id, |maybe_trigger| {
        let trigger = maybe_trigger.as_mut().ok_or(Error::<T>::NotFound)?;
        ensure!(!trigger.is_triggered, Error::<T>::AlreadyTriggered);
        trigger.is_triggered = true;
        Ok::<_, DispatchError>(trigger.action)
      })?;

      Self::deposit_event(Event::TriggerExecuted {
        trigger_id,
        action,
        payload: payload.clone(),
      });

      let action_weight = T::Actions::execute(&Self::account_id(), action, trigger_id, &payload)?;
      log::debug!(
        target: LOG_TARGET,
        "trigger {} fired action {}",
        trigger_id,
        action,
      );

      let used = T::WeightInfo::set_triggered(payload.len() as u32).saturating_add(action_weight);
      Ok(Some(used).into())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Invoker identity presented to actions.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }
  }
}
