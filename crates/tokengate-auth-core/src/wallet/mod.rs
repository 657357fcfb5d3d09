/*
[INPUT]:  Token facts, server/user signatures, routing metadata
[OUTPUT]: Validated wallet handshake and sign-in requests
[POS]:    Wallet layer - signed-payload authentication exchange
[UPDATE]: When the handshake or sign-in wire shape changes
*/

pub mod handshake;
mod serde_helpers;
pub mod signin;
pub mod token;

pub use handshake::{Authenticate, HandshakePayload, SignedData};
pub use signin::{Login, SignInSignedData, SignedPayload};
pub use token::AuthToken;
