/*
[INPUT]:  Enrollment requests, security codes, provider responses
[OUTPUT]: Second-factor states and typed response records
[POS]:    Second-factor layer - enrollment, verification and revocation
[UPDATE]: When lifecycle states or provider operations change
*/

pub mod lifecycle;
pub mod provider;
pub mod responses;
pub mod state;

pub use lifecycle::SecondFactorLifecycle;
pub use provider::{MockSecondFactorProvider, SecondFactorProvider};
pub use responses::{CreateFactorResponse, DeleteFactorResponse, VerifyFactorResponse};
pub use state::SecondFactorState;
