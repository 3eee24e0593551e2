//! Per-plugin option types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a plugin namespace is configured.
///
/// A namespace can be switched on or off wholesale, or carry a nested option
/// map. Serialization is untagged: `Toggle(true)` becomes `true`, while
/// `Options(...)` becomes the inner map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PluginSetting<T> {
    /// Enable or disable the whole namespace, leaving its options at their
    /// engine defaults.
    Toggle(bool),
    /// Configure individual options inside the namespace.
    Options(T),
}

/// Options for the `mangle` plugin (scope-aware variable renaming).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MangleOptions {
    /// Mangle scopes reachable from `eval`/`with` (unsafe unless the code
    /// never relies on names inside those scopes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_fn_name: Option<bool>,

    /// Also mangle top-level bindings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_class_name: Option<bool>,

    /// Names the mangler must never rename.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,
}

/// Options for the `deadcode` plugin (dead-code elimination).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DeadcodeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_fn_name: Option<bool>,

    /// Keep unused function arguments (some code inspects `arguments.length`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_fn_args: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_class_name: Option<bool>,
}

/// Options for the `typeConstructors` plugin (literal constructor folding).
///
/// Each field gates folding for one constructed type, e.g. `string: false`
/// leaves `String(x)` calls untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeConstructorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plugin_setting_toggle_untagged() {
        let setting: PluginSetting<MangleOptions> = PluginSetting::Toggle(true);
        assert_eq!(serde_json::to_value(&setting).unwrap(), json!(true));

        let back: PluginSetting<MangleOptions> = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(back, PluginSetting::Toggle(false));
    }

    #[test]
    fn test_plugin_setting_options_untagged() {
        let setting = PluginSetting::Options(DeadcodeOptions {
            keep_fn_args: Some(true),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&setting).unwrap(),
            json!({"keepFnArgs": true})
        );

        let back: PluginSetting<DeadcodeOptions> =
            serde_json::from_value(json!({"keepFnName": false})).unwrap();
        assert_eq!(
            back,
            PluginSetting::Options(DeadcodeOptions {
                keep_fn_name: Some(false),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_mangle_blacklist_skipped_when_empty() {
        let options = MangleOptions {
            top_level: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"topLevel": true})
        );
    }

    #[test]
    fn test_mangle_blacklist_serializes_in_order() {
        let options = MangleOptions {
            blacklist: vec!["b".to_string(), "a".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"blacklist": ["b", "a"]})
        );
    }
}
