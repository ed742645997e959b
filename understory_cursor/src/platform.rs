// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform guard: whether the environment should get a synthetic cursor at all.

/// Input capabilities reported by the host environment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    /// The environment exposes touch input.
    pub touch: bool,
}

impl InputCapabilities {
    /// Whether a synthetic cursor should be shown.
    ///
    /// Touch-capable environments get no proxy and keep their native cursor.
    pub const fn supports_custom_cursor(self) -> bool {
        !self.touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_disables_custom_cursor() {
        assert!(InputCapabilities::default().supports_custom_cursor());
        assert!(!InputCapabilities { touch: true }.supports_custom_cursor());
    }
}
