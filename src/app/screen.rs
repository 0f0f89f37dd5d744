// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Pages reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Media,
    Contact,
}
