//! Typed option schema for the crush minification preset.
//!
//! The preset is a bundle of minification plugins, each addressable by name.
//! A plugin can be toggled wholesale (`"mangle": true`) or configured through
//! a nested option map (`"mangle": {"eval": true}`). This crate defines the
//! nested configuration object the transform engine consumes, together with
//! its JSON serialization and schema.
//!
//! The CLI front-end (`crush-cli`) builds a [`PresetConfig`] from command-line
//! flags; engines deserialize the same shape from their own entry points. A
//! field that was never configured serializes to nothing at all, so the engine
//! only ever sees what the user actually asked for.

mod settings;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use settings::{DeadcodeOptions, MangleOptions, PluginSetting, TypeConstructorOptions};

/// Nested preset configuration - one field per plugin namespace.
///
/// Field names serialize in camelCase, matching the plugin names the engine
/// registers (`builtIns`, `typeConstructors`, ...). The `keepFnName` and
/// `keepClassName` proxies apply across every plugin that understands them
/// rather than belonging to a single namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booleans: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_ins: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consecutive_adds: Option<bool>,

    /// Dead-code elimination. Configurable via [`DeadcodeOptions`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadcode: Option<PluginSetting<DeadcodeOptions>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluate: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_comparisons: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guards: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinity: Option<bool>,

    /// Scope-aware variable renaming. Configurable via [`MangleOptions`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mangle: Option<PluginSetting<MangleOptions>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_expressions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_vars: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_literals: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_literals: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regexp_constructors: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_console: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_debugger: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_undefined: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_comparisons: Option<bool>,

    /// Literal constructor folding (`new Array()` -> `[]`, ...).
    /// Configurable per constructed type via [`TypeConstructorOptions`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_constructors: Option<PluginSetting<TypeConstructorOptions>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub undefined_to_void: Option<bool>,

    /// Proxy: keep function names across every plugin that renames or drops them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_fn_name: Option<bool>,

    /// Proxy: keep class names across every plugin that renames or drops them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_class_name: Option<bool>,
}

impl PresetConfig {
    /// Generate the JSON Schema for the preset configuration.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(PresetConfig);
        serde_json::to_value(schema).expect("Schema serialization should never fail")
    }

    /// Generate an example configuration, serialized as pretty JSON.
    pub fn example_config() -> String {
        serde_json::to_string_pretty(&Self {
            mangle: Some(PluginSetting::Options(MangleOptions {
                top_level: Some(true),
                blacklist: vec!["require".to_string()],
                ..Default::default()
            })),
            deadcode: Some(PluginSetting::Toggle(true)),
            simplify: Some(true),
            keep_fn_name: Some(true),
            ..Default::default()
        })
        .expect("Example config serialization should never fail")
    }
}
