//! Integration tests for slack-interactivity.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p slack-interactivity-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `core_payload_decoding` - Full realistic payloads for all five
//!   interaction kinds, decoded through the public API
//! - `core_decode_errors` - Rejection behavior: discriminator handling,
//!   missing fields, type mismatches, and field path assembly
//!
//! The fixtures follow the shapes Slack documents for its interactivity
//! payloads, including the extra fields the decoder is expected to ignore.
