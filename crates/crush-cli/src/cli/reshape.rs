//! Reshaping: flat flag map -> CLI run arguments + typed preset config.
//!
//! CLI-only keys (stdin, help, version, the output targets) land in
//! [`RunArgs`]; everything else lands in [`PresetConfig`]. The preset config
//! has no field for CLI concerns, so nothing CLI-only can ever leak to the
//! engine.

use crush_preset::{
    DeadcodeOptions, MangleOptions, PluginSetting, PresetConfig, TypeConstructorOptions,
};
use tracing::debug;

use crate::cli::scanner::{FlagKey, ScannedArgs};

/// Flags that configure the run itself rather than the preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    pub files: Vec<String>,
    pub stdin: bool,
    pub help: bool,
    /// Declared and validated, but not acted upon yet.
    pub version: bool,
    pub out_file: Option<String>,
    pub out_dir: Option<String>,
}

/// Split the compacted flag map into run arguments and the nested preset
/// configuration.
///
/// When a namespace carries both a whole-namespace toggle and configured
/// sub-options, the sub-options win: the namespace serializes as the nested
/// option map and the toggle is absorbed. Either insertion order produces the
/// same result.
pub fn reshape(scanned: &ScannedArgs) -> (RunArgs, PresetConfig) {
    let mut run = RunArgs {
        files: scanned.files.clone(),
        ..Default::default()
    };
    let mut config = PresetConfig::default();

    let mut mangle_toggle = None;
    let mut mangle = MangleOptions::default();
    let mut deadcode_toggle = None;
    let mut deadcode = DeadcodeOptions::default();
    let mut type_constructors_toggle = None;
    let mut type_constructors = TypeConstructorOptions::default();

    for (key, value) in &scanned.flags {
        match key {
            FlagKey::Flat(name) => match name.as_str() {
                "stdin" => run.stdin = value.as_bool().unwrap_or(false),
                "help" => run.help = value.as_bool().unwrap_or(false),
                "version" => run.version = value.as_bool().unwrap_or(false),
                "out-file" => run.out_file = value.as_text().map(str::to_string),
                "out-dir" => run.out_dir = value.as_text().map(str::to_string),
                "mangle" => mangle_toggle = value.as_bool(),
                "deadcode" => deadcode_toggle = value.as_bool(),
                "typeConstructors" => type_constructors_toggle = value.as_bool(),
                other => assign_toggle(&mut config, other, value.as_bool()),
            },
            FlagKey::Scoped { namespace, leaf } => match (namespace.as_str(), leaf.as_str()) {
                ("deadcode", "keepFnName") => deadcode.keep_fn_name = value.as_bool(),
                ("deadcode", "keepFnArgs") => deadcode.keep_fn_args = value.as_bool(),
                ("deadcode", "keepClassName") => deadcode.keep_class_name = value.as_bool(),
                ("mangle", "eval") => mangle.eval = value.as_bool(),
                ("mangle", "keepFnName") => mangle.keep_fn_name = value.as_bool(),
                ("mangle", "topLevel") => mangle.top_level = value.as_bool(),
                ("mangle", "keepClassName") => mangle.keep_class_name = value.as_bool(),
                ("mangle", "blacklist") => mangle.blacklist = value.as_list().to_vec(),
                ("typeConstructors", "array") => type_constructors.array = value.as_bool(),
                ("typeConstructors", "boolean") => type_constructors.boolean = value.as_bool(),
                ("typeConstructors", "number") => type_constructors.number = value.as_bool(),
                ("typeConstructors", "object") => type_constructors.object = value.as_bool(),
                ("typeConstructors", "string") => type_constructors.string = value.as_bool(),
                // The validator reports these before any dispatch.
                _ => debug!(flag = %key, "flag has no preset counterpart"),
            },
        }
    }

    config.mangle = namespace_setting(mangle_toggle, mangle);
    config.deadcode = namespace_setting(deadcode_toggle, deadcode);
    config.type_constructors = namespace_setting(type_constructors_toggle, type_constructors);

    (run, config)
}

/// Fold a namespace toggle and its collected sub-options into one setting.
/// Sub-options win over a simultaneous whole-namespace toggle.
fn namespace_setting<T: Default + PartialEq>(
    toggle: Option<bool>,
    options: T,
) -> Option<PluginSetting<T>> {
    if options != T::default() {
        Some(PluginSetting::Options(options))
    } else {
        toggle.map(PluginSetting::Toggle)
    }
}

fn assign_toggle(config: &mut PresetConfig, name: &str, value: Option<bool>) {
    let slot = match name {
        "booleans" => &mut config.booleans,
        "builtIns" => &mut config.built_ins,
        "consecutiveAdds" => &mut config.consecutive_adds,
        "evaluate" => &mut config.evaluate,
        "flipComparisons" => &mut config.flip_comparisons,
        "guards" => &mut config.guards,
        "infinity" => &mut config.infinity,
        "memberExpressions" => &mut config.member_expressions,
        "mergeVars" => &mut config.merge_vars,
        "numericLiterals" => &mut config.numeric_literals,
        "propertyLiterals" => &mut config.property_literals,
        "regexpConstructors" => &mut config.regexp_constructors,
        "removeConsole" => &mut config.remove_console,
        "removeDebugger" => &mut config.remove_debugger,
        "removeUndefined" => &mut config.remove_undefined,
        "replace" => &mut config.replace,
        "simplify" => &mut config.simplify,
        "simplifyComparisons" => &mut config.simplify_comparisons,
        "undefinedToVoid" => &mut config.undefined_to_void,
        "keepFnName" => &mut config.keep_fn_name,
        "keepClassName" => &mut config.keep_class_name,
        _ => {
            debug!(flag = name, "flag has no preset counterpart");
            return;
        }
    };
    *slot = value;
}
