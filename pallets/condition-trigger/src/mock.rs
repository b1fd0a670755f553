use crate as pallet_condition_trigger;
use polkadot_sdk::frame_support::{
  BoundedVec, construct_runtime, derive_impl,
  traits::{ConstU32, SortedMembers},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{ComparisonOperator, ecosystem::params::MAX_LABEL_LENGTH};

pub const REPORTER: u64 = 1;
pub const STRANGER: u64 = 2;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    ConditionTrigger: pallet_condition_trigger,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

pub struct Reporters;
impl SortedMembers<u64> for Reporters {
  fn sorted_members() -> Vec<u64> {
    vec![REPORTER]
  }
}

impl pallet_condition_trigger::Config for Test {
  type Value = u128;
  type ManagerOrigin = frame_system::EnsureRoot<u64>;
  type ReporterOrigin = frame_system::EnsureSignedBy<Reporters, u64>;
  type MaxLabelLength = ConstU32<MAX_LABEL_LENGTH>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ConditionBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct ConditionBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u128> for ConditionBenchmarkHelper {
  fn threshold_and_observation() -> (u128, u128) {
    (5, 6)
  }
}

pub fn label(text: &str) -> BoundedVec<u8, ConstU32<MAX_LABEL_LENGTH>> {
  text.as_bytes().to_vec().try_into().expect("test labels fit MaxLabelLength")
}

/// River level condition `observed <operator> value` as reported by a hydrological station.
pub fn river_level(value: u128, operator: ComparisonOperator) -> crate::ConditionParams<Test> {
  crate::ConditionParams {
    value,
    operator,
    source: label("DHM"),
    source_sub_type: label("water_level_m"),
    expression: label(&format!("water_level_m {} {}", operator.symbol(), value)),
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
