/*
[INPUT]:  Configuration documents (JSON, or YAML via the CLI)
[OUTPUT]: Validated AuthConfiguration and its sections
[POS]:    Configuration layer - startup policy for gate and second factor
[UPDATE]: When configuration sections are added or restructured
*/

pub mod auth;
pub mod common;
pub mod web;

pub use auth::AuthConfiguration;
pub use common::{CommonOptions, CookieOptions, OperatorOptions, SessionOptions, TokenOptions};
pub use web::{TwoFactorOptions, Web2Options, Web3Options};
