//! Raw options to typed [`CompilerOptions`].
//!
//! Every raw entry is checked on its own against the typed schema, so one bad
//! value costs only that entry. `serde_ignored` reports names the schema does
//! not know. Both cases become [`Diagnostic`]s; conversion itself never fails.
//!
//! Path-valued options are anchored to the base path and normalized.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path::join_normalized;
use crate::types::RawOptions;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $canonical:literal $(| $alias:literal)*,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Case-insensitive, aliases included.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($canonical $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(format!(
                        "'{s}' is not one of: {}",
                        [$($canonical),+].join(", ")
                    )),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// `target`: the language level emitted code conforms to.
    ScriptTarget {
        Es3 => "es3",
        Es5 => "es5",
        Es2015 => "es2015" | "es6",
        Es2016 => "es2016",
        Es2017 => "es2017",
        Es2018 => "es2018",
        Es2019 => "es2019",
        Es2020 => "es2020",
        Es2021 => "es2021",
        Es2022 => "es2022",
        Es2023 => "es2023",
        Es2024 => "es2024",
        EsNext => "esnext",
    }
}

option_enum! {
    /// `module`: the module system of emitted code.
    ModuleKind {
        None => "none",
        CommonJs => "commonjs",
        Amd => "amd",
        Umd => "umd",
        System => "system",
        Es2015 => "es2015" | "es6",
        Es2020 => "es2020",
        Es2022 => "es2022",
        EsNext => "esnext",
        Node16 => "node16",
        Node18 => "node18",
        NodeNext => "nodenext",
        Preserve => "preserve",
    }
}

option_enum! {
    /// `moduleDetection`: which files are treated as modules.
    ModuleDetectionKind {
        Auto => "auto",
        Legacy => "legacy",
        Force => "force",
    }
}

option_enum! {
    /// `moduleResolution`: how import specifiers are looked up.
    ModuleResolutionKind {
        Classic => "classic",
        Node10 => "node10" | "node",
        Node16 => "node16",
        NodeNext => "nodenext",
        Bundler => "bundler",
    }
}

option_enum! {
    /// `jsx`: how JSX syntax is emitted.
    JsxEmit {
        Preserve => "preserve",
        React => "react",
        ReactNative => "react-native",
        ReactJsx => "react-jsx",
        ReactJsxDev => "react-jsxdev",
    }
}

/// Validated compiler options. Unset options are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    // Language and environment
    pub target: Option<ScriptTarget>,
    pub lib: Option<Vec<String>>,
    pub jsx: Option<JsxEmit>,
    pub jsx_factory: Option<String>,
    pub jsx_fragment_factory: Option<String>,
    pub jsx_import_source: Option<String>,
    pub experimental_decorators: Option<bool>,
    pub emit_decorator_metadata: Option<bool>,
    pub use_define_for_class_fields: Option<bool>,
    pub module_detection: Option<ModuleDetectionKind>,
    pub no_lib: Option<bool>,

    // Modules
    pub module: Option<ModuleKind>,
    pub module_resolution: Option<ModuleResolutionKind>,
    pub base_url: Option<PathBuf>,
    pub paths: Option<BTreeMap<String, Vec<String>>>,
    pub root_dir: Option<PathBuf>,
    pub root_dirs: Option<Vec<PathBuf>>,
    pub type_roots: Option<Vec<PathBuf>>,
    pub types: Option<Vec<String>>,
    pub module_suffixes: Option<Vec<String>>,
    pub custom_conditions: Option<Vec<String>>,
    pub allow_umd_global_access: Option<bool>,
    pub allow_importing_ts_extensions: Option<bool>,
    pub rewrite_relative_import_extensions: Option<bool>,
    pub resolve_package_json_exports: Option<bool>,
    pub resolve_package_json_imports: Option<bool>,
    pub resolve_json_module: Option<bool>,
    pub allow_arbitrary_extensions: Option<bool>,
    pub no_resolve: Option<bool>,

    // JavaScript support
    pub allow_js: Option<bool>,
    pub check_js: Option<bool>,
    pub max_node_module_js_depth: Option<u32>,

    // Emit
    pub declaration: Option<bool>,
    pub declaration_map: Option<bool>,
    pub emit_declaration_only: Option<bool>,
    pub source_map: Option<bool>,
    pub inline_source_map: Option<bool>,
    pub inline_sources: Option<bool>,
    pub out_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub declaration_dir: Option<PathBuf>,
    pub remove_comments: Option<bool>,
    pub no_emit: Option<bool>,
    pub no_emit_on_error: Option<bool>,
    pub no_emit_helpers: Option<bool>,
    pub import_helpers: Option<bool>,
    pub downlevel_iteration: Option<bool>,
    pub source_root: Option<String>,
    pub map_root: Option<String>,
    pub new_line: Option<String>,
    pub strip_internal: Option<bool>,
    pub preserve_const_enums: Option<bool>,

    // Interop constraints
    pub isolated_modules: Option<bool>,
    pub verbatim_module_syntax: Option<bool>,
    pub isolated_declarations: Option<bool>,
    pub erasable_syntax_only: Option<bool>,
    pub allow_synthetic_default_imports: Option<bool>,
    pub es_module_interop: Option<bool>,
    pub preserve_symlinks: Option<bool>,
    pub force_consistent_casing_in_file_names: Option<bool>,

    // Type checking
    pub strict: Option<bool>,
    pub no_implicit_any: Option<bool>,
    pub strict_null_checks: Option<bool>,
    pub strict_function_types: Option<bool>,
    pub strict_bind_call_apply: Option<bool>,
    pub strict_property_initialization: Option<bool>,
    pub strict_builtin_iterator_return: Option<bool>,
    pub no_implicit_this: Option<bool>,
    pub use_unknown_in_catch_variables: Option<bool>,
    pub always_strict: Option<bool>,
    pub no_unused_locals: Option<bool>,
    pub no_unused_parameters: Option<bool>,
    pub exact_optional_property_types: Option<bool>,
    pub no_implicit_returns: Option<bool>,
    pub no_fallthrough_cases_in_switch: Option<bool>,
    pub no_unchecked_indexed_access: Option<bool>,
    pub no_unchecked_side_effect_imports: Option<bool>,
    pub no_implicit_override: Option<bool>,
    pub no_property_access_from_index_signature: Option<bool>,
    pub allow_unused_labels: Option<bool>,
    pub allow_unreachable_code: Option<bool>,

    // Completeness and projects
    pub skip_default_lib_check: Option<bool>,
    pub skip_lib_check: Option<bool>,
    pub incremental: Option<bool>,
    pub composite: Option<bool>,
    pub ts_build_info_file: Option<PathBuf>,
}

impl CompilerOptions {
    fn anchor_paths(&mut self, base_path: &Path) {
        let anchor = |p: &mut PathBuf| *p = join_normalized(base_path, &*p);

        for single in [
            &mut self.base_url,
            &mut self.root_dir,
            &mut self.out_dir,
            &mut self.out_file,
            &mut self.declaration_dir,
            &mut self.ts_build_info_file,
        ] {
            if let Some(p) = single {
                anchor(p);
            }
        }
        for list in [&mut self.type_roots, &mut self.root_dirs] {
            if let Some(items) = list {
                items.iter_mut().for_each(|p| anchor(p));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownOption,
    InvalidValue,
}

/// A non-fatal finding about one raw option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub key: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownOption => write!(f, "Unknown compiler option '{}'", self.key),
            DiagnosticKind::InvalidValue => {
                write!(f, "Invalid value for '{}': {}", self.key, self.message)
            }
        }
    }
}

/// Typed options plus everything that was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub options: CompilerOptions,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert raw options, resolving path options against `base_path`.
pub fn convert_compiler_options(raw: &RawOptions, base_path: &Path) -> Conversion {
    let mut accepted = Map::new();
    let mut diagnostics = Vec::new();

    for (key, value) in raw {
        match check_entry(key, value) {
            Ok(true) => {
                accepted.insert(key.clone(), value.clone());
            }
            Ok(false) => diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnknownOption,
                key: key.clone(),
                message: format!("'{key}' is not a known compiler option"),
            }),
            Err(e) => diagnostics.push(Diagnostic {
                kind: DiagnosticKind::InvalidValue,
                key: key.clone(),
                message: e.to_string(),
            }),
        }
    }

    let mut options = match serde_json::from_value::<CompilerOptions>(Value::Object(accepted)) {
        Ok(options) => options,
        Err(e) => {
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::InvalidValue,
                key: "<merged>".into(),
                message: e.to_string(),
            });
            CompilerOptions::default()
        }
    };
    options.anchor_paths(base_path);

    Conversion {
        options,
        diagnostics,
    }
}

/// `Ok(false)` when the schema has no such option.
fn check_entry(key: &str, value: &Value) -> Result<bool, serde_json::Error> {
    let mut single = Map::new();
    single.insert(key.to_string(), value.clone());

    let mut known = true;
    let _: CompilerOptions = serde_ignored::deserialize(Value::Object(single), |_| known = false)?;
    Ok(known)
}
