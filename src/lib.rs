//!
//! # Rule induction
//! `linfa-rules` aims to provide pure Rust implementations
//! of rule induction algorithms for categorical data.
//!
//! # The big picture
//!
//! `linfa-rules` is a crate in the [linfa](https://github.com/rust-ml/linfa) ecosystem,
//! an effort to create a toolkit for classical Machine Learning implemented in pure Rust, akin to Python's scikit-learn.
//!
//! A rule set is a short, ordered list of statements such as `IF outlook = overcast THEN yes`.
//! Each rule is a conjunction of equality tests on categorical features together with the class
//! it predicts. Rules are learned by sequential covering: candidate rules are generated from the
//! observations no rule explains yet, a candidate is accepted only if every observation of the
//! full dataset satisfying it carries the same label, and the observations it covers are removed
//! from further search.
//!
//! # Current state
//!
//! `linfa-rules` currently provides an [implementation](RuleSet) of sequential covering with
//! rules of one and two conditions. Predictions are made by the first matching rule, falling
//! back to a default label.
//!
//! # Example
//!
//! ```rust
//! use linfa::prelude::*;
//! use linfa_rules::RuleSet;
//! use ndarray::array;
//!
//! let records = array![
//!     ["sunny", "high"],
//!     ["sunny", "normal"],
//!     ["overcast", "high"],
//!     ["rainy", "high"],
//! ];
//! let targets = array!["no", "yes", "yes", "no"];
//! let dataset = Dataset::new(records, targets).with_feature_names(vec!["outlook", "humidity"]);
//!
//! let rules = RuleSet::params()
//!     .max_rules(4)
//!     .default_label("unknown")
//!     .fit(&dataset)
//!     .unwrap();
//!
//! for rule in &rules {
//!     println!("{} ({} observations)", rule, rule.coverage());
//! }
//!
//! let prediction = rules.predict(&array![["overcast", "normal"], ["snowy", "low"]]);
//! assert_eq!(prediction, array!["yes", "unknown"]);
//! ```

mod error;
mod sequential_covering;

pub use error::{Result, RulesError};
pub use sequential_covering::*;
