use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a trigger by its registry.
pub type TriggerId = u64;

/// Identifier of a registered action (the target a fired trigger dispatches to).
pub type ActionId = u32;

/// First identifier handed out by a trigger registry. Ids grow by one per registration.
pub const FIRST_TRIGGER_ID: TriggerId = 1;

/// Scalar comparison applied between a reported observation and a stored threshold.
///
/// The operator is always read as `observed <op> threshold`, so a trigger with
/// `GreaterOrEqual` and threshold `5` fires for observations `5, 6, ...`.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum ComparisonOperator {
  /// `observed >= threshold`
  #[default]
  GreaterOrEqual,
  /// `observed <= threshold`
  LessOrEqual,
  /// `observed > threshold`
  Greater,
  /// `observed < threshold`
  Less,
  /// `observed == threshold`
  Equal,
}

/// Returned when a byte string is not one of the known operator symbols.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownOperator;

impl ComparisonOperator {
  pub const ALL: [ComparisonOperator; 5] = [
    ComparisonOperator::GreaterOrEqual,
    ComparisonOperator::LessOrEqual,
    ComparisonOperator::Greater,
    ComparisonOperator::Less,
    ComparisonOperator::Equal,
  ];

  /// Evaluate `observed <op> threshold`.
  pub fn evaluate<V: Ord>(&self, observed: &V, threshold: &V) -> bool {
    match self {
      ComparisonOperator::GreaterOrEqual => observed >= threshold,
      ComparisonOperator::LessOrEqual => observed <= threshold,
      ComparisonOperator::Greater => observed > threshold,
      ComparisonOperator::Less => observed < threshold,
      ComparisonOperator::Equal => observed == threshold,
    }
  }

  /// Human readable symbol, as written in a trigger's `expression`.
  pub fn symbol(&self) -> &'static str {
    match self {
      ComparisonOperator::GreaterOrEqual => ">=",
      ComparisonOperator::LessOrEqual => "<=",
      ComparisonOperator::Greater => ">",
      ComparisonOperator::Less => "<",
      ComparisonOperator::Equal => "==",
    }
  }
}

impl TryFrom<&[u8]> for ComparisonOperator {
  type Error = UnknownOperator;

  fn try_from(symbol: &[u8]) -> Result<Self, Self::Error> {
    Self::ALL
      .into_iter()
      .find(|op| op.symbol().as_bytes() == symbol)
      .ok_or(UnknownOperator)
  }
}
