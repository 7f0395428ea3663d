//! Cleanup gate
//!
//! Decides once per configuration whether the cleanup reconciler may delete
//! anything at all.

use crate::domain::entities::SyncContext;
use crate::domain::value_objects::path::is_within;

/// Why cleanup is off, if it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanGate {
    Enabled,
    /// Host explicitly disabled "empty output directory"
    DisabledByHost,
    /// Asset directory is not nested under the theme root
    OutsideThemeRoot,
}

impl CleanGate {
    /// `empty_out_dir` is the host's own setting; `None` means the host default (on).
    pub fn evaluate(empty_out_dir: Option<bool>, context: &SyncContext) -> Self {
        if empty_out_dir == Some(false) {
            CleanGate::DisabledByHost
        } else if !is_within(&context.asset_dir, &context.theme_root) {
            CleanGate::OutsideThemeRoot
        } else {
            CleanGate::Enabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CleanGate::Enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_enables_cleanup() {
        let ctx = SyncContext::new("/theme/src", "/theme", "assets");
        assert_eq!(CleanGate::evaluate(None, &ctx), CleanGate::Enabled);
        assert!(CleanGate::evaluate(Some(true), &ctx).is_enabled());
    }

    #[test]
    fn host_can_disable_cleanup() {
        let ctx = SyncContext::new("/theme/src", "/theme", "assets");
        assert_eq!(CleanGate::evaluate(Some(false), &ctx), CleanGate::DisabledByHost);
    }

    #[test]
    fn asset_dir_outside_theme_disables_cleanup() {
        let ctx = SyncContext::new("/theme/src", "/theme", "/elsewhere/assets");
        assert_eq!(CleanGate::evaluate(None, &ctx), CleanGate::OutsideThemeRoot);

        let ctx = SyncContext::new("/theme/src", "/theme", "../shared");
        assert!(!CleanGate::evaluate(None, &ctx).is_enabled());
    }

    #[test]
    fn asset_dir_equal_to_theme_root_disables_cleanup() {
        let ctx = SyncContext::new("/theme/src", "/theme", ".");
        assert_eq!(CleanGate::evaluate(None, &ctx), CleanGate::OutsideThemeRoot);
    }
}
