//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! sprofcli: OAuth 2.0 PKCE authentication and the read-only fetches for the
//! authenticated user's profile and liked tracks. It is the integration layer
//! between the CLI commands and Spotify's services and handles all HTTP
//! communication and response decoding.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Profile (current user)
//!     └── Tracks (saved/liked tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//!   flow: verifier/challenge generation, browser hand-off, local callback,
//!   and the code-for-token exchange.
//! - [`profile`] - Fetches the current user's profile (`/me`).
//! - [`tracks`] - Fetches the user's liked tracks (`/me/tracks`) with
//!   limit/offset pagination.
//!
//! ## Error Handling
//!
//! Non-success HTTP statuses are surfaced as errors before any body is
//! decoded; response bodies are decoded into typed structures from
//! [`crate::types`]. There is no retry logic: every request is one-shot and
//! failures propagate to the caller.
//!
//! ## Security Considerations
//!
//! - **No Secrets Storage**: Client secrets are not stored or transmitted
//! - **Token Security**: Access tokens are stored in the local data directory
//! - **HTTPS Only**: All API communication uses HTTPS
//! - **Limited Scope**: Requests only necessary permissions from users

pub mod auth;
pub mod profile;
pub mod tracks;
