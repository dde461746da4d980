use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct TitleData {
    honorific_prefixes: Vec<String>,
}

#[derive(Deserialize)]
struct GenerationData {
    lineage_suffixes: Vec<String>,
}

#[derive(Deserialize)]
struct NameData {
    surname_particles: Vec<String>,
}

#[derive(Deserialize)]
struct CredentialData {
    professional_suffixes: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/title_data.json")?;
    let titles: TitleData = serde_json::from_str(&json)?;
    write_set(
        &output.join("honorific_prefixes.rs"),
        &lowercased("honorific_prefixes", &titles.honorific_prefixes)?,
    )?;

    let json = read_file(&input, "build/generation_data.json")?;
    let gens: GenerationData = serde_json::from_str(&json)?;
    write_set(
        &output.join("lineage_suffixes.rs"),
        &lowercased("lineage_suffixes", &gens.lineage_suffixes)?,
    )?;

    let json = read_file(&input, "build/name_data.json")?;
    let names: NameData = serde_json::from_str(&json)?;
    write_set(
        &output.join("surname_particles.rs"),
        &lowercased("surname_particles", &names.surname_particles)?,
    )?;

    // Scan order matters for credentials, so these become a plain slice
    // rather than a hash set. Matching is ASCII case-insensitive.
    let json = read_file(&input, "build/credential_data.json")?;
    let creds: CredentialData = serde_json::from_str(&json)?;
    let creds = lowercased("professional_suffixes", &creds.professional_suffixes)?;
    if let Some(bad) = creds.iter().find(|c| !c.is_ascii()) {
        return Err(format!("professional suffix {:?} is not ASCII", bad).into());
    }
    write_slice(&output.join("professional_suffixes.rs"), &creds)?;

    Ok(())
}

// Lookups lowercase their key first, so the tables must already be lowercase
fn lowercased(table: &str, entries: &[String]) -> Result<Vec<String>> {
    let mut result = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_empty() || *entry != entry.to_lowercase() {
            return Err(format!("{}: entry {:?} must be non-empty lowercase", table, entry).into());
        }
        if !result.contains(entry) {
            result.push(entry.clone());
        }
    }
    Ok(result)
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_slice(output: &Path, entries: &[String]) -> Result<()> {
    fs::write(output, format!("&[{}]", quoted_comma_separated(entries)))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
