mod algorithm;
mod evaluator;
mod hyperparams;
mod rule;

pub use algorithm::*;
pub use evaluator::*;
pub use hyperparams::*;
pub use rule::{Condition, Rule};

pub(crate) use rule::RuleKey;
