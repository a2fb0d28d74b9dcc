use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct ThemeSound {
    file: String,
    disabled: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ThemeColors {
    system: Vec<u32>,
    theme: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ThemeHeader {
    id: String,
    name: String,
    color: ThemeColors,
    sound: ThemeSound,
}

fn theme_paths(root: &Path) -> Vec<PathBuf> {
    ["default", "hi-tech"]
        .iter()
        .map(|name| root.join("themes").join(format!("{name}.toml")))
        .collect()
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut ids = BTreeSet::new();
    let mut themes = Vec::<serde_json::Value>::new();

    for path in theme_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let header: ThemeHeader = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if header.id.trim().is_empty() || header.name.trim().is_empty() {
            panic!("theme in {} needs a non-empty id and name", path.display());
        }
        if header.color.system.len() != 7 || header.color.theme.len() != 7 {
            panic!(
                "palette size mismatch in {}: expected 7 system and 7 theme entries",
                path.display()
            );
        }
        if header.sound.file.trim().is_empty() {
            panic!("theme `{}` has no sound file", header.id);
        }
        if header.sound.disabled.iter().any(|cue| cue.trim().is_empty()) {
            panic!("theme `{}` disables an empty cue name", header.id);
        }
        if !ids.insert(header.id.clone()) {
            panic!("duplicate theme id `{}` in {}", header.id, path.display());
        }

        let value: toml::Value = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        themes.push(serde_json::to_value(value).expect("convert theme toml to json"));
    }

    let json = serde_json::to_string_pretty(&themes).expect("serialize theme catalog");
    let generated = format!(
        "/// Build-time generated built-in theme catalog JSON.\n\
pub const BUILTIN_THEME_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
