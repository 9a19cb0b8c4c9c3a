// build.rs

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_LANG: &str = "en";

fn main() {
    // --- 1. Pick the language: `lang_*` features first, then SPOTCTL_LANG, then English ---
    let mut active_langs: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    active_langs.sort();

    let lang = match active_langs.first() {
        Some(first) => {
            if active_langs.len() > 1 {
                println!(
                    "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                    active_langs, first
                );
            }
            first.clone()
        }
        None => env::var("SPOTCTL_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
    };

    println!("cargo:rustc-env=SPOTCTL_LANG_EFFECTIVE={}", lang);

    // --- 2. Rerun triggers ---
    println!("cargo:rerun-if-env-changed=SPOTCTL_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    // --- 3. English is the base every other language is merged onto ---
    let fallback_path = format!("locales/{}.toml", FALLBACK_LANG);
    let fallback_content = fs::read_to_string(&fallback_path)
        .unwrap_or_else(|e| panic!("Failed to read fallback language file {}: {}", fallback_path, e));
    let mut translations: BTreeMap<String, String> = toml::from_str(&fallback_content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", fallback_path, e));

    if lang != FALLBACK_LANG {
        let lang_path = format!("locales/{}.toml", lang);
        match fs::read_to_string(&lang_path) {
            Ok(content) => {
                let specific: BTreeMap<String, String> = toml::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", lang_path, e));
                for key in specific.keys().filter(|k| !translations.contains_key(*k)) {
                    println!(
                        "cargo:warning=Key '{}' in {} has no English counterpart.",
                        key, lang_path
                    );
                }
                translations.extend(specific);
            }
            Err(_) => println!(
                "cargo:warning=Language file '{}' not found. Falling back to '{}'.",
                lang_path, FALLBACK_LANG
            ),
        }
    }

    // --- 4. Generate the `t!` macro ---
    let mut macro_code = String::from(
        "/// Expands to the message for a locale key as a string literal.\n#[macro_export]\nmacro_rules! t {\n",
    );
    for (key, value) in &translations {
        let escaped_value = value.replace('\\', "\\\\").replace('"', "\\\"");
        macro_code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped_value));
    }
    // Unknown keys fail the build instead of printing a raw key at runtime.
    macro_code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    macro_code.push('}');

    // --- 5. Write it to OUT_DIR ---
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR is not set: {}", e));
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, macro_code)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", dest_path.display(), e));
}
