use std::path::Path;

use anyhow::Result;
use serde_json::json;

use themesync::domain::value_objects::Rename;
use themesync::infrastructure::events::event_to_json;
use themesync::{resolve_targets, ResolvedRule, SyncEvent};

use super::common::{config_warning_event, load_config};

fn rename_label(rename: &Option<Rename>) -> Option<String> {
    match rename {
        Some(Rename::Fixed(name)) => Some(name.clone()),
        Some(Rename::Computed(_)) => Some("<computed>".to_string()),
        None => None,
    }
}

fn rule_to_json(rule: &ResolvedRule) -> serde_json::Value {
    json!({
        "index": rule.index,
        "src": rule.src.as_str(),
        "dest": rule.dest.display().to_string(),
        "rename": rename_label(&rule.rename),
        "ignore": rule.ignore.patterns(),
        "clean_match": rule.clean_match.as_ref().map(|p| p.as_str()),
        "dereference": rule.copy.dereference,
        "overwrite": rule.copy.overwrite,
        "preserve_timestamps": rule.copy.preserve_timestamps,
    })
}

fn warning_line(event: &SyncEvent) -> String {
    match event {
        SyncEvent::Warning {
            message,
            path: Some(path),
        } => format!("{} ({})", message, path.display()),
        SyncEvent::Warning { message, .. } => message.clone(),
        other => other.kind().to_string(),
    }
}

/// Print what the config resolves to. Reads the config file only.
pub fn cmd_resolve(config_path: &Path, json: bool) -> Result<()> {
    let loaded = load_config(config_path, false)?;
    let context = loaded.context();
    let resolved = resolve_targets(&loaded.config.to_rules(), &context)?;

    let warnings: Vec<SyncEvent> = loaded
        .warnings
        .iter()
        .map(config_warning_event)
        .chain(resolved.warnings.iter().cloned())
        .collect();

    if json {
        let output = json!({
            "event": "resolve",
            "theme_root": context.theme_root.display().to_string(),
            "source_root": context.source_root.display().to_string(),
            "asset_dir": context.asset_dir.display().to_string(),
            "rules": resolved.rules.iter().map(|r| rule_to_json(r)).collect::<Vec<_>>(),
            "warnings": warnings.iter().map(event_to_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("theme root:  {}", context.theme_root.display());
    println!("source root: {}", context.source_root.display());
    println!("asset dir:   {}", context.asset_dir.display());
    println!();

    if resolved.rules.is_empty() {
        println!("no targets configured");
    }
    for rule in &resolved.rules {
        println!("[{}] {}", rule.index, rule.label);
        println!("    src:  {}", rule.src.as_str());
        println!("    dest: {}", rule.dest.display());
        if let Some(rename) = rename_label(&rule.rename) {
            println!("    rename: {}", rename);
        }
        if !rule.ignore.is_empty() {
            println!("    ignore: {}", rule.ignore.patterns().join(", "));
        }
        if let Some(pattern) = &rule.clean_match {
            println!("    clean_match: {}", pattern.as_str());
        }
    }

    for warning in &warnings {
        eprintln!("warning: {}", warning_line(warning));
    }

    Ok(())
}
