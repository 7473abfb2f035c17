//! # CLI Module
//!
//! This module provides the command-line interface layer for sprofcli, a
//! Spotify API client for inspecting the authenticated user's account. It
//! implements all user-facing commands and coordinates between the Spotify
//! integration layer, token management, and terminal output.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security and persists the obtained token
//!
//! ### Account Queries
//!
//! - [`profile`] - Fetches and displays the authenticated user's profile
//! - [`tracks`] - Fetches and displays the user's liked tracks as a table
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token Cache)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command performs the same token gate before touching the network:
//! load the cached token, verify it is unexpired, and otherwise direct the
//! user to run `sprofcli auth`. There is no automatic re-authentication and
//! no retry; every command invocation is a one-shot transition.
//!
//! ## Progress and User Experience
//!
//! Long-running fetches provide progress feedback through indicatif bars,
//! and results are rendered either as labeled fields (profile) or as a
//! formatted table (tracks). Errors carry actionable guidance.

mod auth;
mod profile;
mod tracks;

pub use auth::auth;
pub use profile::profile;
pub use tracks::load_saved_tracks;
pub use tracks::tracks;
