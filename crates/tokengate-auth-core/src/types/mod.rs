/*
[INPUT]:  Raw credential and identity fields
[OUTPUT]: Validated value types and shared enums
[POS]:    Data layer - leaf value validators
[UPDATE]: When identity or credential types are added
*/

pub mod credentials;
pub mod enums;
pub mod identity;
pub(crate) mod validators;

pub use credentials::*;
pub use enums::*;
pub use identity::*;
pub use validators::MIN_PASSWORD_LENGTH;
