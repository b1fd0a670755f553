extern crate alloc;

use crate::*;
use alloc::vec;
use frame::prelude::{BoundedVec, Get};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{ActionId, ecosystem::params::MAX_PAYLOAD_LENGTH};

fn record_action<T: Config>(owner: &T::AccountId) -> Result<ActionId, BenchmarkError> {
  let action_id = NextActionId::<T>::get();
  Pallet::<T>::create_action(RawOrigin::Signed(owner.clone()).into(), ActionKind::Record, None)?;
  Ok(action_id)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_action() {
    let caller: T::AccountId = whitelisted_caller();
    let action_id = NextActionId::<T>::get();

    #[extrinsic_call]
    create_action(RawOrigin::Signed(caller.clone()), ActionKind::Record, Some(caller.clone()));

    assert!(Actions::<T>::contains_key(action_id));
  }

  #[benchmark]
  fn set_allowed_caller() -> Result<(), BenchmarkError> {
    let caller: T::AccountId = whitelisted_caller();
    let action_id = record_action::<T>(&caller)?;
    let allowed: T::AccountId = account("allowed", 0, 0);

    #[extrinsic_call]
    set_allowed_caller(RawOrigin::Signed(caller), action_id, Some(allowed.clone()));

    assert_eq!(
      Actions::<T>::get(action_id).and_then(|action| action.allowed_caller),
      Some(allowed)
    );
    Ok(())
  }

  #[benchmark]
  fn execute(p: Linear<0, MAX_PAYLOAD_LENGTH>) -> Result<(), BenchmarkError> {
    let caller: T::AccountId = whitelisted_caller();
    let action_id = record_action::<T>(&caller)?;
    let len = p.min(T::MaxPayloadLength::get());
    let payload: BoundedVec<u8, T::MaxPayloadLength> =
      BoundedVec::truncate_from(vec![7u8; len as usize]);

    #[extrinsic_call]
    execute(RawOrigin::Signed(caller), action_id, 1, payload);

    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
