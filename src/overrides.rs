//! Forced values and gap-filling defaults applied to raw options.
//!
//! Order matters and is fixed:
//!
//! 1. Mandatory overrides replace whatever the user set.
//! 2. Conditional defaults fill keys the user left out.
//! 3. The target depends on the build mode: development always compiles to
//!    the newest target, production keeps a user target and otherwise uses a
//!    conservative one.
//! 4. Legacy keys are dropped.

use serde_json::Value;

use crate::types::RawOptions;

/// Target forced outside production builds.
pub const DEVELOPMENT_TARGET: &str = "esnext";

/// Target used for production builds that do not set one.
pub const PRODUCTION_DEFAULT_TARGET: &str = "es2017";

/// JSX mode used when none is configured.
pub const DEFAULT_JSX: &str = "react";

/// Keys removed before conversion.
pub const LEGACY_KEYS: &[&str] = &["mod"];

/// Options the pipeline relies on, regardless of user input.
pub fn mandatory_overrides() -> [(&'static str, Value); 5] {
    [
        ("moduleResolution", Value::from("node")),
        ("module", Value::from("commonjs")),
        ("importHelpers", Value::Bool(true)),
        ("experimentalDecorators", Value::Bool(true)),
        ("allowJs", Value::Bool(true)),
    ]
}

/// Apply every rule to `options` and return the result.
///
/// Takes ownership, so callers that want to keep their input pass a clone.
pub fn apply(mut options: RawOptions, production: bool) -> RawOptions {
    for (key, value) in mandatory_overrides() {
        options.insert(key.to_string(), value);
    }

    if !is_set(&options, "jsx") {
        options.insert("jsx".into(), Value::from(DEFAULT_JSX));
    }

    if !production {
        options.insert("target".into(), Value::from(DEVELOPMENT_TARGET));
    } else if !is_set(&options, "target") {
        options.insert("target".into(), Value::from(PRODUCTION_DEFAULT_TARGET));
    }

    for key in LEGACY_KEYS {
        options.remove(*key);
    }

    options
}

/// Absent, `null`, `false` and `""` all count as unset.
fn is_set(options: &RawOptions, key: &str) -> bool {
    match options.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawOptions {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn mandatory_overrides_replace_user_values() {
        let options = apply(
            raw(json!({
                "module": "esnext",
                "moduleResolution": "classic",
                "importHelpers": false,
                "experimentalDecorators": false,
                "allowJs": false
            })),
            true,
        );
        assert_eq!(options["module"], "commonjs");
        assert_eq!(options["moduleResolution"], "node");
        assert_eq!(options["importHelpers"], true);
        assert_eq!(options["experimentalDecorators"], true);
        assert_eq!(options["allowJs"], true);
    }

    #[test]
    fn jsx_default_only_when_unset() {
        assert_eq!(apply(RawOptions::new(), true)["jsx"], DEFAULT_JSX);
        let kept = apply(raw(json!({ "jsx": "preserve" })), true);
        assert_eq!(kept["jsx"], "preserve");
    }

    #[test]
    fn empty_jsx_counts_as_unset() {
        let options = apply(raw(json!({ "jsx": "" })), true);
        assert_eq!(options["jsx"], DEFAULT_JSX);
    }

    #[test]
    fn development_forces_latest_target() {
        let options = apply(raw(json!({ "target": "es5" })), false);
        assert_eq!(options["target"], DEVELOPMENT_TARGET);
    }

    #[test]
    fn production_keeps_user_target() {
        let options = apply(raw(json!({ "target": "es5" })), true);
        assert_eq!(options["target"], "es5");
    }

    #[test]
    fn production_defaults_target() {
        let options = apply(RawOptions::new(), true);
        assert_eq!(options["target"], PRODUCTION_DEFAULT_TARGET);
    }

    #[test]
    fn legacy_key_removed() {
        let options = apply(raw(json!({ "mod": "amd", "strict": true })), false);
        assert!(!options.contains_key("mod"));
        assert_eq!(options["strict"], true);
    }

    #[test]
    fn unrelated_keys_untouched() {
        let options = apply(raw(json!({ "outDir": "dist", "lib": ["dom"] })), false);
        assert_eq!(options["outDir"], "dist");
        assert_eq!(options["lib"], json!(["dom"]));
    }
}
