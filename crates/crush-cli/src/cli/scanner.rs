//! Catalog-driven token scanner.
//!
//! Walks raw argv tokens and produces a flat, insertion-ordered flag map plus
//! the positional file list. The scanner never rejects anything: unknown
//! flags are recorded verbatim so the validator can report them all at once.
//!
//! Presence in the map is the "explicitly passed" marker. A flag the user
//! never typed has no entry at all, so downstream code can tell `--no-mangle`
//! (entry with value `false`) from "mangle was never mentioned" (no entry).

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::cli::catalog;

/// A flag name, split into its namespace and leaf at scan time.
///
/// `--mangle.eval` becomes `Scoped { namespace: "mangle", leaf: "eval" }`;
/// nothing downstream ever splits a dot-joined string again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlagKey {
    Flat(String),
    Scoped { namespace: String, leaf: String },
}

impl FlagKey {
    /// Split a raw flag name at its first dot, if any.
    pub fn parse(name: &str) -> Self {
        match name.split_once('.') {
            Some((namespace, leaf)) => Self::Scoped {
                namespace: namespace.to_string(),
                leaf: leaf.to_string(),
            },
            None => Self::Flat(name.to_string()),
        }
    }

    pub fn flat(name: &str) -> Self {
        Self::Flat(name.to_string())
    }

    pub fn scoped(namespace: &str, leaf: &str) -> Self {
        Self::Scoped {
            namespace: namespace.to_string(),
            leaf: leaf.to_string(),
        }
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(name) => f.write_str(name),
            Self::Scoped { namespace, leaf } => write!(f, "{namespace}.{leaf}"),
        }
    }
}

/// A parsed flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            Self::List(items) => items,
            _ => &[],
        }
    }
}

/// Result of one scan: the flag map (insertion-ordered) and the positional
/// file arguments, both in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScannedArgs {
    pub flags: IndexMap<FlagKey, FlagValue>,
    pub files: Vec<String>,
}

/// Scan raw argv tokens (program name already stripped) into a [`ScannedArgs`].
///
/// Rules, in the catalog's terms:
/// - boolean flags: `--name` is true, `--no-name` is false, `--name=false`
///   is false, any other `=value` is true
/// - array sub-options: `--ns.leaf v` or `--ns.leaf=v`; values are
///   comma-split and repeated occurrences accumulate in order
/// - valued CLI flags: `--out-file v`, `--out-file=v`, or an alias spelling
///   (`-o v`, `--o v`); every spelling populates the long-form key
/// - `--` ends flag parsing; everything after is positional
/// - anything else starting with a dash is recorded verbatim for the
///   validator to reject
pub fn scan(args: &[String]) -> ScannedArgs {
    let mut scanned = ScannedArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();

        if arg == "--" {
            scanned.files.extend(args[i + 1..].iter().cloned());
            break;
        }

        if let Some(body) = arg.strip_prefix("--") {
            let (name, inline) = split_inline(body);
            let lookahead = args.get(i + 1).map(String::as_str);
            if apply_long(&mut scanned.flags, name, inline, lookahead) {
                i += 1;
            }
        } else if is_short_flag(arg) {
            let (name, inline) = split_inline(&arg[1..]);
            let lookahead = args.get(i + 1).map(String::as_str);
            if apply_long(&mut scanned.flags, name, inline, lookahead) {
                i += 1;
            }
        } else {
            scanned.files.push(args[i].clone());
        }

        i += 1;
    }

    debug!(
        flags = scanned.flags.len(),
        files = scanned.files.len(),
        "scanned argv"
    );
    scanned
}

/// Drop entries carrying an empty value sequence, leaving only what the user
/// actually specified. `--mangle.blacklist` with no value contributes nothing.
pub fn compact(mut scanned: ScannedArgs) -> ScannedArgs {
    scanned
        .flags
        .retain(|_, value| !matches!(value, FlagValue::List(items) if items.is_empty()));
    scanned
}

/// How the catalog classifies a scanned key.
enum Kind {
    Boolean,
    Valued,
    ArraySub,
    Unknown,
}

fn classify(key: &FlagKey) -> Kind {
    match key {
        FlagKey::Flat(name) if catalog::is_boolean_flag(name) => Kind::Boolean,
        FlagKey::Flat(name) if catalog::is_value_flag(name) => Kind::Valued,
        FlagKey::Scoped { namespace, leaf } if catalog::is_boolean_sub_opt(namespace, leaf) => {
            Kind::Boolean
        }
        FlagKey::Scoped { namespace, leaf } if catalog::is_array_sub_opt(namespace, leaf) => {
            Kind::ArraySub
        }
        _ => Kind::Unknown,
    }
}

/// Apply one long-form flag to the map. Returns true when the lookahead token
/// was consumed as this flag's value.
fn apply_long(
    flags: &mut IndexMap<FlagKey, FlagValue>,
    name: &str,
    inline: Option<&str>,
    lookahead: Option<&str>,
) -> bool {
    // Aliases bind in every spelling: --o and -o both populate out-file.
    let name = catalog::resolve_alias(name).unwrap_or(name);

    // --no-name negates a cataloged boolean; for anything else "no-..." is
    // just an unknown name.
    if let Some(positive) = name.strip_prefix("no-") {
        let key = FlagKey::parse(positive);
        if matches!(classify(&key), Kind::Boolean) {
            flags.insert(key, FlagValue::Bool(false));
            return false;
        }
    }

    let key = FlagKey::parse(name);
    match classify(&key) {
        Kind::Boolean => {
            flags.insert(key, FlagValue::Bool(inline != Some("false")));
            false
        }
        Kind::Valued => match value_for(inline, lookahead) {
            (Some(value), consumed) => {
                flags.insert(key, FlagValue::Text(value.to_string()));
                consumed
            }
            (None, _) => {
                warn!(flag = %key, "ignoring flag: no value supplied");
                false
            }
        },
        Kind::ArraySub => {
            let (raw, consumed) = value_for(inline, lookahead);
            let entry = flags
                .entry(key)
                .or_insert_with(|| FlagValue::List(Vec::new()));
            if let (FlagValue::List(items), Some(raw)) = (entry, raw) {
                items.extend(raw.split(',').filter(|p| !p.is_empty()).map(str::to_string));
            }
            consumed
        }
        Kind::Unknown => {
            record_unknown(flags, key, inline);
            false
        }
    }
}

/// Pick a flag's value: inline `=value` first, otherwise the next token if it
/// does not itself look like a flag. The boolean is true when the lookahead
/// was taken.
fn value_for<'a>(inline: Option<&'a str>, lookahead: Option<&'a str>) -> (Option<&'a str>, bool) {
    match inline {
        Some(value) => (Some(value), false),
        None => match lookahead.filter(|t| !looks_like_flag(t)) {
            Some(next) => (Some(next), true),
            None => (None, false),
        },
    }
}

fn record_unknown(flags: &mut IndexMap<FlagKey, FlagValue>, key: FlagKey, inline: Option<&str>) {
    let value = match inline {
        Some(v) => FlagValue::Text(v.to_string()),
        None => FlagValue::Bool(true),
    };
    flags.insert(key, value);
}

fn split_inline(body: &str) -> (&str, Option<&str>) {
    match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    }
}

/// A dash followed by something other than digits. Bare `-` (stdin
/// convention) and negative numbers stay positional.
fn looks_like_flag(token: &str) -> bool {
    token.len() > 1
        && token.starts_with('-')
        && !token[1..].chars().all(|c| c.is_ascii_digit())
}

fn is_short_flag(arg: &str) -> bool {
    looks_like_flag(arg) && !arg.starts_with("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_boolean_flag_true() {
        let scanned = scan(&args(&["--mangle"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("mangle")),
            Some(&FlagValue::Bool(true))
        );
    }

    #[test]
    fn test_boolean_negation() {
        let scanned = scan(&args(&["--no-simplify"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("simplify")),
            Some(&FlagValue::Bool(false))
        );
    }

    #[test]
    fn test_boolean_inline_false() {
        let scanned = scan(&args(&["--mangle=false"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("mangle")),
            Some(&FlagValue::Bool(false))
        );
    }

    #[test]
    fn test_scoped_flag_splits_once() {
        let scanned = scan(&args(&["--mangle.eval"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::scoped("mangle", "eval")),
            Some(&FlagValue::Bool(true))
        );
    }

    #[test]
    fn test_scoped_negation() {
        let scanned = scan(&args(&["--no-typeConstructors.string"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::scoped("typeConstructors", "string")),
            Some(&FlagValue::Bool(false))
        );
    }

    #[test]
    fn test_boolean_flag_does_not_eat_positional() {
        let scanned = scan(&args(&["--deadcode", "app.js"]));
        assert_eq!(scanned.files, vec!["app.js"]);
    }

    #[test]
    fn test_array_flag_comma_split_and_accumulation() {
        let scanned = scan(&args(&[
            "--mangle.blacklist=a,b",
            "--mangle.blacklist",
            "c",
        ]));
        assert_eq!(
            scanned.flags.get(&FlagKey::scoped("mangle", "blacklist")),
            Some(&FlagValue::List(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn test_array_flag_without_value_compacts_away() {
        let scanned = compact(scan(&args(&["--mangle.blacklist", "--simplify"])));
        assert!(
            !scanned
                .flags
                .contains_key(&FlagKey::scoped("mangle", "blacklist"))
        );
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("simplify")),
            Some(&FlagValue::Bool(true))
        );
    }

    #[test]
    fn test_valued_flag_next_token_and_inline() {
        let scanned = scan(&args(&["--out-file", "min.js"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-file")),
            Some(&FlagValue::Text("min.js".to_string()))
        );
        assert!(scanned.files.is_empty());

        let scanned = scan(&args(&["--out-dir=dist"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-dir")),
            Some(&FlagValue::Text("dist".to_string()))
        );
    }

    #[test]
    fn test_short_alias_populates_long_key() {
        let scanned = scan(&args(&["-o", "min.js", "-d=dist"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-file")),
            Some(&FlagValue::Text("min.js".to_string()))
        );
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-dir")),
            Some(&FlagValue::Text("dist".to_string()))
        );
    }

    #[test]
    fn test_double_dash_alias_spelling_resolves() {
        let scanned = scan(&args(&["--o", "min.js", "app.js"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-file")),
            Some(&FlagValue::Text("min.js".to_string()))
        );
        assert!(!scanned.flags.contains_key(&FlagKey::flat("o")));
        assert_eq!(scanned.files, vec!["app.js"]);

        let scanned = scan(&args(&["--d=dist"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("out-dir")),
            Some(&FlagValue::Text("dist".to_string()))
        );
    }

    #[test]
    fn test_valued_flag_without_value_is_dropped() {
        // No usable value: the next token is a flag, or there is none.
        let scanned = scan(&args(&["--out-file", "--mangle"]));
        assert!(!scanned.flags.contains_key(&FlagKey::flat("out-file")));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("mangle")),
            Some(&FlagValue::Bool(true))
        );

        let scanned = scan(&args(&["app.js", "--out-dir"]));
        assert!(!scanned.flags.contains_key(&FlagKey::flat("out-dir")));
        assert_eq!(scanned.files, vec!["app.js"]);
    }

    #[test]
    fn test_unknown_flags_recorded_verbatim() {
        let scanned = scan(&args(&["--wat", "--level=5", "-z"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("wat")),
            Some(&FlagValue::Bool(true))
        );
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("level")),
            Some(&FlagValue::Text("5".to_string()))
        );
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("z")),
            Some(&FlagValue::Bool(true))
        );
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let scanned = scan(&args(&["--mangle", "--", "--not-a-flag", "b.js"]));
        assert_eq!(scanned.files, vec!["--not-a-flag", "b.js"]);
        assert_eq!(scanned.flags.len(), 1);
    }

    #[test]
    fn test_positionals_keep_order() {
        let scanned = scan(&args(&["a.js", "--simplify", "b.js", "c.js"]));
        assert_eq!(scanned.files, vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn test_bare_dash_and_negative_number_are_positional() {
        let scanned = scan(&args(&["-", "-5"]));
        assert_eq!(scanned.files, vec!["-", "-5"]);
        assert!(scanned.flags.is_empty());
    }

    #[test]
    fn test_last_occurrence_wins_first_position_kept() {
        let scanned = scan(&args(&["--mangle", "--wat", "--no-mangle"]));
        assert_eq!(
            scanned.flags.get(&FlagKey::flat("mangle")),
            Some(&FlagValue::Bool(false))
        );
        let keys: Vec<String> = scanned.flags.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["mangle", "wat"]);
    }
}
