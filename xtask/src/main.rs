//! Developer tasks (schema generation, fixture conformance, explanation coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use orgguard_types::{FindingKind, SCHEMA_REPORT_V1, explain};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(orgguard_types::OrgguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(orgguard_settings::OrgguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "orgguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "orgguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_schema_ids() {
    println!("{}", SCHEMA_REPORT_V1);
    println!("orgguard.config.v1");
}

/// Lowercase ASCII token: starts with a letter, then letters, digits or `_`.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Dotted token, e.g. `org.salary_band`.
fn is_valid_check_id(s: &str) -> bool {
    s.split('.').count() >= 2 && s.split('.').all(is_valid_token)
}

fn is_valid_fingerprint(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Hygiene problems in one report value, beyond what the schema covers.
fn report_hygiene(name: &str, value: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();

    if value.get("schema").and_then(|v| v.as_str()) != Some(SCHEMA_REPORT_V1) {
        errors.push(format!("{}: schema must be {}", name, SCHEMA_REPORT_V1));
    }

    let findings = value
        .get("findings")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, finding) in findings.iter().enumerate() {
        let check_id = finding.get("check_id").and_then(|v| v.as_str()).unwrap_or("");
        if !is_valid_check_id(check_id) {
            errors.push(format!(
                "{}: findings[{}].check_id '{}' is not a valid check id",
                name, i, check_id
            ));
        }

        let code = finding.get("code").and_then(|v| v.as_str()).unwrap_or("");
        if !is_valid_token(code) {
            errors.push(format!(
                "{}: findings[{}].code '{}' is not a valid token",
                name, i, code
            ));
        }

        if let Some(fp) = finding.get("fingerprint").and_then(|v| v.as_str())
            && !is_valid_fingerprint(fp)
        {
            errors.push(format!(
                "{}: findings[{}].fingerprint is not a lowercase sha256 hex digest",
                name, i
            ));
        }
    }

    let emitted = value
        .get("data")
        .and_then(|d| d.get("findings_emitted"))
        .and_then(|v| v.as_u64());
    if emitted != Some(findings.len() as u64) {
        errors.push(format!(
            "{}: data.findings_emitted does not match the number of findings",
            name
        ));
    }

    let data = value.get("data");
    if let Some(totals) = data.and_then(|d| d.get("code_totals")).and_then(|v| v.as_object()) {
        let sum: u64 = totals.values().filter_map(|v| v.as_u64()).sum();
        let total = data
            .and_then(|d| d.get("findings_total"))
            .and_then(|v| v.as_u64());
        if total != Some(sum) {
            errors.push(format!(
                "{}: data.code_totals does not add up to data.findings_total",
                name
            ));
        }
    }

    errors
}

/// Validate every fixture's expected report against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema_value =
        serde_json::to_value(generate_report_schema()).context("Failed to convert schema")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;
    println!("✓ {} schema compiles", SCHEMA_REPORT_V1);

    let dir = fixtures_dir()?;
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("expected.report.json").exists())
        .collect();
    entries.sort();

    if entries.is_empty() {
        bail!("No expected.report.json fixtures found in {}", dir.display());
    }

    let mut errors = Vec::new();
    for fixture in &entries {
        let name = fixture
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let path = fixture.join("expected.report.json");
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

        let before = errors.len();
        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }
        errors.extend(report_hygiene(&name, &value));

        if errors.len() == before {
            println!("  ✓ {} validates", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", entries.len());
    Ok(())
}

/// Every check id and code the engine can emit must have an explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let mut missing = Vec::new();

    let emitted = FindingKind::ALL
        .iter()
        .flat_map(|kind| [kind.check_id(), kind.code()]);
    for id in emitted {
        if explain::lookup_explanation(id).is_none() {
            missing.push(id);
        }
    }
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        if explain::lookup_explanation(id).is_none() && !missing.contains(id) {
            missing.push(*id);
        }
    }

    if !missing.is_empty() {
        eprintln!("Missing explanations:");
        for id in &missing {
            eprintln!("  - {}", id);
        }
        bail!("{} identifiers lack explanations", missing.len());
    }

    println!("✓ All check ids and codes have explanations.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture reports against the report schema");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "print-schema-ids" => {
            print_schema_ids();
            Ok(())
        }
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        other => {
            print_help();
            bail!("unknown xtask command: {other}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_rules() {
        assert!(is_valid_token("manager_underpaid"));
        assert!(is_valid_token("a1"));
        assert!(!is_valid_token("Manager"));
        assert!(!is_valid_token("1abc"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("with-dash"));
    }

    #[test]
    fn check_id_rules() {
        assert!(is_valid_check_id("org.salary_band"));
        assert!(is_valid_check_id("tool.runtime"));
        assert!(!is_valid_check_id("salary_band"));
        assert!(!is_valid_check_id("org..band"));
    }

    #[test]
    fn hygiene_accepts_a_well_formed_report() {
        let report = json!({
            "schema": "orgguard.report.v1",
            "findings": [{
                "check_id": "org.salary_band",
                "code": "manager_underpaid",
                "fingerprint": "28e4e634d5567f835db5cf218aca4ad297cc4cb724c4e9c8375e8f0dca93b4ca"
            }],
            "data": { "findings_emitted": 1 }
        });
        assert!(report_hygiene("ok", &report).is_empty());
    }

    #[test]
    fn hygiene_flags_bad_fields() {
        let report = json!({
            "schema": "other",
            "findings": [{
                "check_id": "Org",
                "code": "Bad-Code",
                "fingerprint": "xyz"
            }],
            "data": { "findings_emitted": 3 }
        });
        let errors = report_hygiene("bad", &report);
        assert_eq!(errors.len(), 5, "{errors:#?}");
    }

    #[test]
    fn hygiene_flags_code_totals_that_disagree_with_the_total() {
        let report = json!({
            "schema": "orgguard.report.v1",
            "findings": [],
            "data": {
                "findings_emitted": 0,
                "findings_total": 3,
                "code_totals": { "manager_underpaid": 1, "reporting_cycle": 1 }
            }
        });
        let errors = report_hygiene("totals", &report);
        assert_eq!(
            errors,
            ["totals: data.code_totals does not add up to data.findings_total"]
        );
    }

    #[test]
    fn schemas_serialize_with_trailing_newline() {
        for spec in schema_specs() {
            let json = serialize_schema(&(spec.generate)()).expect("serialize");
            assert!(json.ends_with("}\n"), "{}", spec.filename);
        }
    }

    #[test]
    fn explanations_cover_every_finding_kind() {
        explain_coverage().expect("coverage");
    }
}
