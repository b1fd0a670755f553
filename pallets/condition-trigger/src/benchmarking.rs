extern crate alloc;

use crate::*;
use alloc::vec;
use frame::prelude::{BoundedVec, Get};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::EnsureOrigin;
use primitives::{ComparisonOperator, TriggerId};

fn full_label<T: Config>() -> Label<T> {
  BoundedVec::truncate_from(vec![b'x'; T::MaxLabelLength::get() as usize])
}

fn params<T: Config>(value: T::Value) -> ConditionParams<T> {
  ConditionParams {
    value,
    operator: ComparisonOperator::GreaterOrEqual,
    source: full_label::<T>(),
    source_sub_type: full_label::<T>(),
    expression: full_label::<T>(),
  }
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn add_trigger() -> Result<(), BenchmarkError> {
    let origin = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let (threshold, _) = T::BenchmarkHelper::threshold_and_observation();
    let trigger_id = NextTriggerId::<T>::get();

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, params::<T>(threshold));

    assert!(Triggers::<T>::contains_key(trigger_id));
    Ok(())
  }

  #[benchmark]
  fn set_trigger() -> Result<(), BenchmarkError> {
    let manager = T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let (threshold, observed) = T::BenchmarkHelper::threshold_and_observation();
    let trigger_id: TriggerId = NextTriggerId::<T>::get();
    Pallet::<T>::add_trigger(manager, params::<T>(threshold))?;
    let origin = T::ReporterOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, trigger_id, observed);

    assert_eq!(Triggers::<T>::get(trigger_id).map(|t| t.is_triggered), Some(true));
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
