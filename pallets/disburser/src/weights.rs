#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn disburse(recipients: u32) -> Weight;
  fn disburse_reference(recipients: u32) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  /// One approval read and one pull into the staging account, then a plain
  /// transfer per recipient.
  fn disburse(recipients: u32) -> Weight {
    let r = u64::from(recipients);
    Weight::from_parts(
      30_000_000u64.saturating_add(r.saturating_mul(14_000_000)),
      4000u64.saturating_add(r.saturating_mul(2603)),
    )
    .saturating_add(T::DbWeight::get().reads(6u64.saturating_add(r)))
    .saturating_add(T::DbWeight::get().writes(5u64.saturating_add(r)))
  }

  /// A delegated transfer per recipient: approval, payer and recipient touched every time.
  fn disburse_reference(recipients: u32) -> Weight {
    let r = u64::from(recipients);
    Weight::from_parts(
      20_000_000u64.saturating_add(r.saturating_mul(22_000_000)),
      3600u64.saturating_add(r.saturating_mul(3700)),
    )
    .saturating_add(T::DbWeight::get().reads(4u64.saturating_add(r.saturating_mul(3))))
    .saturating_add(T::DbWeight::get().writes(1u64.saturating_add(r.saturating_mul(3))))
  }
}

impl WeightInfo for () {
  fn disburse(recipients: u32) -> Weight {
    let r = u64::from(recipients);
    Weight::from_parts(
      30_000_000u64.saturating_add(r.saturating_mul(14_000_000)),
      4000u64.saturating_add(r.saturating_mul(2603)),
    )
    .saturating_add(RocksDbWeight::get().reads_writes(6u64.saturating_add(r), 5u64.saturating_add(r)))
  }
  fn disburse_reference(recipients: u32) -> Weight {
    let r = u64::from(recipients);
    Weight::from_parts(
      20_000_000u64.saturating_add(r.saturating_mul(22_000_000)),
      3600u64.saturating_add(r.saturating_mul(3700)),
    )
    .saturating_add(RocksDbWeight::get().reads_writes(4u64.saturating_add(r.saturating_mul(3)), 1u64.saturating_add(r.saturating_mul(3))))
  }
}
