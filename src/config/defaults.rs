// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Image transition timing and image lookup root
//! - **Contact**: Submission endpoint and request timeout

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default duration of the slide between two gallery images (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 450;

/// Minimum transition duration. Zero disables the animation and its guard.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration.
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Directory that image references in the catalog are relative to.
pub const DEFAULT_IMAGE_ROOT: &str = "public";

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Endpoint receiving contact form submissions.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:3000/api/contact";

/// Default request timeout for a contact submission (seconds).
pub const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 15;

/// Minimum contact timeout (seconds).
pub const MIN_CONTACT_TIMEOUT_SECS: u64 = 1;

/// Maximum contact timeout (seconds).
pub const MAX_CONTACT_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_default_is_within_bounds() {
        assert!((MIN_TRANSITION_MS..=MAX_TRANSITION_MS).contains(&DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn contact_timeout_default_is_within_bounds() {
        assert!(
            (MIN_CONTACT_TIMEOUT_SECS..=MAX_CONTACT_TIMEOUT_SECS)
                .contains(&DEFAULT_CONTACT_TIMEOUT_SECS)
        );
    }
}
