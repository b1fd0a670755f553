//! Condition Trigger Pallet
//!
//! Triggers that activate when a reported observation satisfies a stored threshold
//! comparison, read as `observed <operator> value`. Activation only flips the trigger's own
//! flag; no action is dispatched. A trigger activates at most once.
//!
//! Values are compared, never combined, so any ordered type works as the threshold. Runtimes
//! mirroring an EVM token width use `U256`; the test runtime uses `u128`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::condition-trigger";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<Value> {
  /// A threshold and an observation satisfying `GreaterOrEqual` against it.
  fn threshold_and_observation() -> (Value, Value);
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::frame_support::traits::EnsureOrigin;
  use frame::prelude::*;
  use primitives::{ComparisonOperator, FIRST_TRIGGER_ID, TriggerId};

  pub type Label<T> = BoundedVec<u8, <T as Config>::MaxLabelLength>;

  /// Fields supplied when adding a trigger.
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
  #[scale_info(skip_type_params(T))]
  pub struct ConditionParams<T: Config> {
    /// Threshold the observation is compared against
    pub value: T::Value,
    pub operator: ComparisonOperator,
    pub source: Label<T>,
    pub source_sub_type: Label<T>,
    /// Human readable restatement of the condition; never evaluated
    pub expression: Label<T>,
  }

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
  #[scale_info(skip_type_params(T))]
  pub struct ConditionTrigger<T: Config> {
    pub value: T::Value,
    pub operator: ComparisonOperator,
    pub source: Label<T>,
    pub source_sub_type: Label<T>,
    pub expression: Label<T>,
    /// Set once on activation, never cleared
    pub is_triggered: bool,
  }

  impl<T: Config> From<ConditionParams<T>> for ConditionTrigger<T> {
    fn from(params: ConditionParams<T>) -> Self {
      Self {
        value: params.value,
        operator: params.operator,
        source: params.source,
        source_sub_type: params.source_sub_type,
        expression: params.expression,
        is_triggered: false,
      }
    }
  }

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Threshold and observation type
    type Value: Parameter + Member + Ord + MaxEncodedLen;

    /// Origin allowed to add triggers
    type ManagerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Origin allowed to report observations
    type ReporterOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    #[pallet::constant]
    type MaxLabelLength: Get<u32>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::Value>;
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
  pub type Triggers<T: Config> =
    StorageMap<_, Blake2_128Concat, TriggerId, ConditionTrigger<T>, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    TriggerAdded {
      trigger_id: TriggerId,
    },
    /// The observation satisfied the condition.
    TriggerActivated {
      trigger_id: TriggerId,
      observed_value: T::Value,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No trigger with this id
    NotFound,
    /// The trigger already activated
    AlreadyTriggered,
    /// The observation does not satisfy the condition
    ConditionNotMet,
    /// Trigger id space exhausted
    TriggerIdOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::add_trigger())]
    pub fn add_trigger(origin: OriginFor<T>, params: ConditionParams<T>) -> DispatchResult {
      T::ManagerOrigin::ensure_origin(origin)?;

      let trigger_id = NextTriggerId::<T>::get();
      let next_id = trigger_id
        .checked_add(1)
        .ok_or(Error::<T>::TriggerIdOverflow)?;

      Triggers::<T>::insert(trigger_id, ConditionTrigger::<T>::from(params));
      NextTriggerId::<T>::put(next_id);

      Self::deposit_event(Event::TriggerAdded { trigger_id });
      Ok(())
    }

    /// Report an observation for a trigger; activates it when the condition holds.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_trigger())]
    pub fn set_trigger(
      origin: OriginFor<T>,
      trigger_id: TriggerId,
      observed_value: T::Value,
    ) -> DispatchResult {
      T::ReporterOrigin::ensure_origin(origin)?;

      Triggers::<T>::try_mutate(trigger_id, |maybe_trigger| -> DispatchResult {
        let trigger = maybe_trigger.as_mut().ok_or(Error::<T>::NotFound)?;
        ensure!(!trigger.is_triggered, Error::<T>::AlreadyTriggered);
        ensure!(
          trigger.operator.evaluate(&observed_value, &trigger.value),
          Error::<T>::ConditionNotMet
        );
        trigger.is_triggered = true;
        Ok(())
      })?;

      log::debug!(target: LOG_TARGET, "condition trigger {} activated", trigger_id);
      Self::deposit_event(Event::TriggerActivated {
        trigger_id,
        observed_value,
      });
      Ok(())
    }
  }
}
