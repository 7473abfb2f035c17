//! # API Module
//!
//! This module provides the HTTP endpoints served by sprofcli's local
//! callback server during authentication.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth callback request from Spotify's
//!   authorization server. This endpoint completes the PKCE flow by
//!   exchanging the authorization code for an access token, pairing it with
//!   the code verifier stored for the current attempt.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into Axum's routing system by
//! [`crate::server`]. The callback handler shares the PKCE session slot with
//! the auth command through an `Extension` layer.
//!
//! ## Security Considerations
//!
//! - Uses the OAuth 2.0 PKCE flow, so no client secret is exposed
//! - Only one authorization attempt is tracked at a time (one verifier slot)
//! - Exchange failures are reported to the browser without persisting state

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
