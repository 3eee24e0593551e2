//! Static catalog of every flag the crush CLI recognizes.
//!
//! The catalog is the schema for the whole front-end: the scanner derives its
//! boolean/array/valued flag sets from it, and the validator derives the
//! permitted-name set from it. Names are globally unique across all tables,
//! and scoped options carry exactly one namespace level.

/// Plugin namespaces the preset exposes. Each is addressable on the CLI as a
/// standalone boolean switch (`--mangle`, `--deadcode`, ...).
pub const PLUGINS: [&str; 22] = [
    "booleans",
    "builtIns",
    "consecutiveAdds",
    "deadcode",
    "evaluate",
    "flipComparisons",
    "guards",
    "infinity",
    "mangle",
    "memberExpressions",
    "mergeVars",
    "numericLiterals",
    "propertyLiterals",
    "regexpConstructors",
    "removeConsole",
    "removeDebugger",
    "removeUndefined",
    "replace",
    "simplify",
    "simplifyComparisons",
    "typeConstructors",
    "undefinedToVoid",
];

/// Proxy flags that apply across every plugin that understands them rather
/// than belonging to a single namespace.
pub const PROXIES: [&str; 2] = ["keepFnName", "keepClassName"];

/// A sub-option scoped under a plugin namespace, addressed on the CLI as
/// `--namespace.leaf`.
///
/// Stored as a (namespace, leaf) pair so nothing downstream ever has to split
/// a dot-joined string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubOpt {
    pub namespace: &'static str,
    pub leaf: &'static str,
}

impl SubOpt {
    const fn new(namespace: &'static str, leaf: &'static str) -> Self {
        Self { namespace, leaf }
    }

    /// The CLI spelling of this sub-option (`"mangle.eval"`).
    pub fn flag(&self) -> String {
        format!("{}.{}", self.namespace, self.leaf)
    }
}

/// Boolean sub-options of the `deadcode` plugin.
pub const DEADCODE_BOOL_OPTS: [SubOpt; 3] = [
    SubOpt::new("deadcode", "keepFnName"),
    SubOpt::new("deadcode", "keepFnArgs"),
    SubOpt::new("deadcode", "keepClassName"),
];

/// Boolean sub-options of the `mangle` plugin.
pub const MANGLE_BOOL_OPTS: [SubOpt; 4] = [
    SubOpt::new("mangle", "eval"),
    SubOpt::new("mangle", "keepFnName"),
    SubOpt::new("mangle", "topLevel"),
    SubOpt::new("mangle", "keepClassName"),
];

/// Array-valued sub-options of the `mangle` plugin.
pub const MANGLE_ARRAY_OPTS: [SubOpt; 1] = [SubOpt::new("mangle", "blacklist")];

/// Boolean sub-options of the `typeConstructors` plugin.
pub const TYPE_CONSTRUCTOR_OPTS: [SubOpt; 5] = [
    SubOpt::new("typeConstructors", "array"),
    SubOpt::new("typeConstructors", "boolean"),
    SubOpt::new("typeConstructors", "number"),
    SubOpt::new("typeConstructors", "object"),
    SubOpt::new("typeConstructors", "string"),
];

/// Boolean flags that exist only to serve the CLI, never the preset.
pub const CLI_BOOL_OPTS: [&str; 3] = ["stdin", "help", "version"];

/// Valued flags that exist only to serve the CLI (output targets).
pub const CLI_VALUE_OPTS: [&str; 2] = ["out-file", "out-dir"];

/// Long-form CLI flag to its single-character short alias.
pub const ALIASES: [(&str, &str); 2] = [("out-file", "o"), ("out-dir", "d")];

/// Expand the alias table into a flat sequence of both forms, so each is
/// individually checkable by the validator.
pub fn alias_forms() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().flat_map(|&(long, short)| [long, short])
}

/// Resolve a short alias to its long form, if it is one.
pub fn resolve_alias(short: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|&&(_, s)| s == short)
        .map(|&(long, _)| long)
}

/// Whether `name` is a flat boolean switch (plugin, proxy, or CLI boolean).
pub fn is_boolean_flag(name: &str) -> bool {
    PLUGINS.contains(&name) || PROXIES.contains(&name) || CLI_BOOL_OPTS.contains(&name)
}

/// Whether `(namespace, leaf)` names a boolean sub-option.
pub fn is_boolean_sub_opt(namespace: &str, leaf: &str) -> bool {
    DEADCODE_BOOL_OPTS
        .iter()
        .chain(&MANGLE_BOOL_OPTS)
        .chain(&TYPE_CONSTRUCTOR_OPTS)
        .any(|opt| opt.namespace == namespace && opt.leaf == leaf)
}

/// Whether `(namespace, leaf)` names an array-valued sub-option.
pub fn is_array_sub_opt(namespace: &str, leaf: &str) -> bool {
    MANGLE_ARRAY_OPTS
        .iter()
        .any(|opt| opt.namespace == namespace && opt.leaf == leaf)
}

/// Whether `name` is a valued CLI flag (long form).
pub fn is_value_flag(name: &str) -> bool {
    CLI_VALUE_OPTS.contains(&name)
}
