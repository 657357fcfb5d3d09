/*
[INPUT]:  Token-gate configuration and owned-token records
[OUTPUT]: Role grants derived from on-chain token ownership
[POS]:    Gate layer - token-ownership role gate
[UPDATE]: When gate configuration or resolution semantics change
*/

pub mod entity;
pub mod options;
pub mod resolver;

pub use entity::{TokenGateEntity, TokenGateMetadata, TokenGateProperties};
pub use options::{TokenGateOptions, TokenGateRole};
pub use resolver::{AnyPlan, PlanAllowList, PlanPolicy, TokenGateResolver};
