#[macro_use]
extern crate lazy_static;

pub mod chain;
pub mod condition;
pub mod constants;
pub mod select;
pub mod utils;

pub use chain::{if_cond, PendingCondition, PendingDecision, PendingDecisionLazy};
pub use condition::{parse_condition, ParseConditionError};
pub use select::{select, select_lazy};
pub use utils::TernaryOperator;
