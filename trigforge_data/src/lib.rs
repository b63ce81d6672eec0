//! Shared data model for Trigforge trigger content.

pub mod statements;
pub mod trigger;
pub mod values;

pub use statements::{Action, Arg, Condition, Statement, StatementSchema};
pub use trigger::Trigger;
pub use values::{
    AiScript, Alliance, Count, Operation, Player, Quantifier, Resource, State, SwitchAction, Unit,
    UnitOrder, Visibility,
};
