//! Target resolver
//!
//! Turns declared rules into resolved rules: absolute paths, compiled globs,
//! defaults filled in. Never touches the file system.
//!
//! Fails only on configuration errors (a glob used as destination). An
//! ineffective `clean_match` is disabled with a warning instead.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{ResolvedRule, Rule, SyncContext};
use crate::domain::ports::SyncEvent;
use crate::domain::value_objects::path::{absolutize, is_within, to_slash};
use crate::domain::value_objects::{
    is_dynamic_pattern, is_generic_clean_pattern, GlobPattern, PatternSet,
};
use crate::error::{SyncError, SyncResult};

/// Output of target resolution
#[derive(Debug, Clone)]
pub struct ResolvedTargets {
    pub context: SyncContext,
    /// In declaration order
    pub rules: Vec<Arc<ResolvedRule>>,
    /// Advisory warnings raised while resolving
    pub warnings: Vec<SyncEvent>,
}

/// Resolve `rules` against `context`.
pub fn resolve_targets(rules: &[Rule], context: &SyncContext) -> SyncResult<ResolvedTargets> {
    let mut resolved = Vec::with_capacity(rules.len());
    let mut warnings = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        let dest = match &rule.dest {
            Some(dest) => {
                let raw = to_slash(dest);
                if is_dynamic_pattern(&raw) {
                    return Err(SyncError::DynamicDestination {
                        rule: rule.src.clone(),
                        dest: raw,
                    });
                }
                absolutize(&context.theme_root, dest)
            }
            None => context.asset_dir.clone(),
        };

        let src = GlobPattern::anchored(&context.source_root, &rule.src)?;
        let ignore = PatternSet::anchored(&context.source_root, &rule.ignore)?;
        let clean_match = match &rule.clean_match {
            Some(pattern) => resolve_clean_match(rule, pattern, &dest, context, &mut warnings)?,
            None => None,
        };

        resolved.push(Arc::new(ResolvedRule {
            index,
            label: rule.src.clone(),
            src,
            dest,
            rename: rule.rename.clone(),
            ignore,
            clean_match,
            copy: rule.copy,
        }));
    }

    Ok(ResolvedTargets {
        context: context.clone(),
        rules: resolved,
        warnings,
    })
}

fn resolve_clean_match(
    rule: &Rule,
    pattern: &str,
    dest: &Path,
    context: &SyncContext,
    warnings: &mut Vec<SyncEvent>,
) -> SyncResult<Option<GlobPattern>> {
    if dest == context.asset_dir {
        warnings.push(SyncEvent::warning(format!(
            "clean_match '{}' on target '{}' ignored: destination is the asset directory",
            pattern, rule.src
        )));
        return Ok(None);
    }

    if !is_within(dest, &context.theme_root) {
        warnings.push(SyncEvent::warning_at(
            format!(
                "clean_match '{}' on target '{}' ignored: destination is outside the theme root",
                pattern, rule.src
            ),
            dest,
        ));
        return Ok(None);
    }

    if is_generic_clean_pattern(pattern) {
        warnings.push(SyncEvent::warning(format!(
            "clean_match '{}' on target '{}' ignored: pattern is too generic",
            pattern, rule.src
        )));
        return Ok(None);
    }

    let glob = GlobPattern::anchored(dest, pattern)?;
    if !is_within(glob.base_dir(), dest) && glob.base_dir() != dest {
        warnings.push(SyncEvent::warning(format!(
            "clean_match '{}' on target '{}' ignored: pattern escapes the destination",
            pattern, rule.src
        )));
        return Ok(None);
    }

    Ok(Some(glob))
}
