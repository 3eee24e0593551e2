//! Allow-list validation of scanned flags.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::cli::catalog;
use crate::cli::scanner::{FlagKey, FlagValue};

/// Return every flag key not present in the catalog, in order of first
/// appearance. An empty result means the whole invocation is valid.
///
/// The permitted set is the union of plugin namespaces, proxy flags, scoped
/// boolean and array sub-options, CLI booleans, CLI valued flags, and both
/// forms of every alias. Positional arguments never enter the flag map, so
/// they are exempt by construction.
pub fn invalid_options(flags: &IndexMap<FlagKey, FlagValue>) -> Vec<String> {
    let mut permitted: HashSet<String> = HashSet::new();
    permitted.extend(catalog::PLUGINS.iter().map(|s| s.to_string()));
    permitted.extend(catalog::PROXIES.iter().map(|s| s.to_string()));
    permitted.extend(catalog::DEADCODE_BOOL_OPTS.iter().map(|o| o.flag()));
    permitted.extend(catalog::MANGLE_BOOL_OPTS.iter().map(|o| o.flag()));
    permitted.extend(catalog::MANGLE_ARRAY_OPTS.iter().map(|o| o.flag()));
    permitted.extend(catalog::TYPE_CONSTRUCTOR_OPTS.iter().map(|o| o.flag()));
    permitted.extend(catalog::CLI_BOOL_OPTS.iter().map(|s| s.to_string()));
    permitted.extend(catalog::CLI_VALUE_OPTS.iter().map(|s| s.to_string()));
    permitted.extend(catalog::alias_forms().map(|s| s.to_string()));

    let invalid: Vec<String> = flags
        .keys()
        .map(ToString::to_string)
        .filter(|name| !permitted.contains(name))
        .collect();

    if !invalid.is_empty() {
        debug!(?invalid, "rejecting unknown options");
    }
    invalid
}
