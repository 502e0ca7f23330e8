//! Build script for generating the static FAQ dataset from faq.json
//!
//! Reads `src/domain/a002_faq/faq.json` and writes `faq_gen.rs` into `OUT_DIR`
//! with a `&'static [FaqEntry]` constant, so the dataset is validated at build time.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const FAQ_JSON: &str = "src/domain/a002_faq/faq.json";

fn main() {
    println!("cargo:rerun-if-changed={}", FAQ_JSON);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output_rs = Path::new(&out_dir).join("faq_gen.rs");

    if let Err(e) = generate_faq(Path::new(FAQ_JSON), &output_rs) {
        panic!("Failed to generate FAQ dataset from {}: {}", FAQ_JSON, e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct FaqJson {
    entries: Vec<FaqEntryJson>,
}

#[derive(Debug, Deserialize)]
struct FaqEntryJson {
    id: String,
    category: LocalizedJson,
    question: LocalizedJson,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct LocalizedJson {
    mk: String,
    en: String,
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_faq(json_path: &Path, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let faq: FaqJson = serde_json::from_str(&json_content)?;

    validate(&faq)?;

    let code = generate_rust_code(&faq);
    fs::write(output_path, code)?;

    Ok(())
}

fn validate(faq: &FaqJson) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for entry in &faq.entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(format!("duplicate FAQ id '{}'", entry.id));
        }
        if entry.question.mk.trim().is_empty() || entry.question.en.trim().is_empty() {
            return Err(format!("FAQ '{}' has an empty question", entry.id));
        }
    }
    Ok(())
}

fn generate_rust_code(faq: &FaqJson) -> String {
    let mut code = String::new();

    // Header
    code.push_str(&format!(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM faq.json - DO NOT EDIT MANUALLY\n\
         // Generated: {}\n\
         // ============================================================================\n\n",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    ));

    code.push_str("pub static FAQ_ENTRIES: &[FaqEntry] = &[\n");
    for entry in &faq.entries {
        code.push_str(&format!(
            "    FaqEntry {{\n\
             \x20       id: {:?},\n\
             \x20       category: {},\n\
             \x20       question: {},\n\
             \x20       icon: {:?},\n\
             \x20   }},\n",
            entry.id,
            localized(&entry.category),
            localized(&entry.question),
            entry.icon,
        ));
    }
    code.push_str("];\n");

    code
}

fn localized(text: &LocalizedJson) -> String {
    format!("LocalizedText {{ mk: {:?}, en: {:?} }}", text.mk, text.en)
}
