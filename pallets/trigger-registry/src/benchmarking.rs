extern crate alloc;

use crate::*;
use alloc::vec;
use frame::prelude::{BoundedVec, Get};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::EnsureOrigin;
use primitives::{ActionId, TriggerId, ecosystem::params::MAX_PAYLOAD_LENGTH};

fn full_label<T: Config>() -> Label<T> {
  BoundedVec::truncate_from(vec![b'x'; T::MaxLabelLength::get() as usize])
}

fn params<T: Config>(action: ActionId) -> TriggerParamsOf<T> {
  TriggerParams {
    trigger_type: full_label::<T>(),
    phase: full_label::<T>(),
    title: full_label::<T>(),
    source: full_label::<T>(),
    river_basin: full_label::<T>(),
    params_hash: [1u8; 32],
    is_mandatory: true,
    action,
  }
}

fn registered<T: Config>(action: ActionId) -> Result<TriggerId, BenchmarkError> {
  let origin = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
  let trigger_id = NextTriggerId::<T>::get();
  Pallet::<T>::register_trigger(origin, params::<T>(action))?;
  Ok(trigger_id)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn register_trigger() -> Result<(), BenchmarkError> {
    let origin = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let trigger_id = NextTriggerId::<T>::get();

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, params::<T>(0));

    assert!(Triggers::<T>::contains_key(trigger_id));
    Ok(())
  }

  #[benchmark]
  fn update_trigger() -> Result<(), BenchmarkError> {
    let trigger_id = registered::<T>(0)?;
    let origin = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, trigger_id, full_label::<T>(), false);

    assert_eq!(Triggers::<T>::get(trigger_id).map(|t| t.is_mandatory), Some(false));
    Ok(())
  }

  /// Fires a trigger whose action only records the payload.
  #[benchmark]
  fn set_triggered(p: Linear<0, MAX_PAYLOAD_LENGTH>) -> Result<(), BenchmarkError> {
    let action = T::BenchmarkHelper::setup_action(&Pallet::<T>::account_id())?;
    let trigger_id = registered::<T>(action)?;
    let origin = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    // runtimes may bound payloads below the swept range
    let len = p.min(T::MaxPayloadLength::get());
    let payload: Payload<T> = BoundedVec::truncate_from(vec![7u8; len as usize]);

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, trigger_id, payload);

    assert_eq!(Triggers::<T>::get(trigger_id).map(|t| t.is_triggered), Some(true));
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
