// SPDX-License-Identifier: MPL-2.0
//! Hands external links (web pages, `mailto:`) to the desktop.

/// Opens `url` with the system's default handler.
///
/// Failures are logged and otherwise ignored; the page stays usable.
pub fn open_url(url: &str) {
    match open::that(url) {
        Ok(()) => tracing::debug!(url, "opened external link"),
        Err(error) => tracing::warn!(url, %error, "failed to open external link"),
    }
}
