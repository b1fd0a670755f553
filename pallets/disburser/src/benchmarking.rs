extern crate alloc;

use crate::*;
use alloc::{vec, vec::Vec};
use frame::prelude::BoundedVec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::ecosystem::params::MAX_RECIPIENTS;

const SEED: u32 = 0;
const AMOUNT: u128 = 100;

type Lists<T> = (
  BoundedVec<<T as polkadot_sdk::frame_system::Config>::AccountId, <T as Config>::MaxRecipients>,
  BoundedVec<u128, <T as Config>::MaxRecipients>,
);

fn recipient_lists<T: Config>(count: u32) -> Result<Lists<T>, BenchmarkError> {
  let recipients: Vec<T::AccountId> = (0..count).map(|i| account("recipient", i, SEED)).collect();
  let recipients = recipients
    .try_into()
    .map_err(|_| BenchmarkError::Stop("recipients exceed MaxRecipients"))?;
  let amounts = vec![AMOUNT; count as usize]
    .try_into()
    .map_err(|_| BenchmarkError::Stop("amounts exceed MaxRecipients"))?;
  Ok((recipients, amounts))
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn disburse(r: Linear<1, MAX_RECIPIENTS>) -> Result<(), BenchmarkError> {
    let payer: T::AccountId = whitelisted_caller();
    let total = AMOUNT.saturating_mul(u128::from(r));
    let asset =
      T::BenchmarkHelper::setup_approved_payer(&payer, &Pallet::<T>::account_id(), total)?;
    let (recipients, amounts) = recipient_lists::<T>(r)?;

    #[extrinsic_call]
    disburse(RawOrigin::Signed(payer), asset, recipients, amounts, total);

    assert_eq!(TotalDisbursed::<T>::get(asset), total);
    Ok(())
  }

  #[benchmark]
  fn disburse_reference(r: Linear<1, MAX_RECIPIENTS>) -> Result<(), BenchmarkError> {
    let payer: T::AccountId = whitelisted_caller();
    let total = AMOUNT.saturating_mul(u128::from(r));
    let asset =
      T::BenchmarkHelper::setup_approved_payer(&payer, &Pallet::<T>::account_id(), total)?;
    let (recipients, amounts) = recipient_lists::<T>(r)?;

    #[extrinsic_call]
    disburse_reference(RawOrigin::Signed(payer), asset, recipients, amounts, total);

    assert_eq!(TotalDisbursed::<T>::get(asset), total);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
