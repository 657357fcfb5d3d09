/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public authentication-core crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod error;
pub mod gate;
pub mod two_factor;
pub mod types;
pub mod wallet;

pub use config::{
    AuthConfiguration,
    CommonOptions,
    CookieOptions,
    OperatorOptions,
    SessionOptions,
    TokenOptions,
    TwoFactorOptions,
    Web2Options,
    Web3Options,
};

pub use error::{AuthError, Result};

pub use gate::{
    AnyPlan,
    PlanAllowList,
    PlanPolicy,
    TokenGateEntity,
    TokenGateMetadata,
    TokenGateOptions,
    TokenGateProperties,
    TokenGateResolver,
    TokenGateRole,
};

pub use two_factor::{
    CreateFactorResponse,
    DeleteFactorResponse,
    MockSecondFactorProvider,
    SecondFactorLifecycle,
    SecondFactorProvider,
    SecondFactorState,
    VerifyFactorResponse,
};

// Re-export all value types
pub use types::*;

pub use wallet::{
    AuthToken,
    Authenticate,
    HandshakePayload,
    Login,
    SignInSignedData,
    SignedData,
    SignedPayload,
};
