use anyhow::Result;
use serde_json::{Value, json};

use crate::CliTest;

const USER_ROUTER: &str = r#"{
    "operations": [
        {
            "procedure": "user.create",
            "path": "/users",
            "input": {
                "type": "object",
                "fields": {
                    "name": { "type": "string" },
                    "address": {
                        "type": "object",
                        "fields": { "street": { "type": "string" } }
                    }
                }
            }
        },
        {
            "procedure": "health.check",
            "path": "/health",
            "input": { "type": "void" }
        }
    ]
}"#;

#[test]
fn extract_json_outputs_catalog() -> Result<()> {
    let test = CliTest::with_router(USER_ROUTER)?;

    let output = test.extract_command().arg("--json").output()?;
    assert!(output.status.success());

    let catalog: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        catalog,
        json!({
            "user-create": {
                "name": { "type": "string", "optional": false },
                "address": { "type": "object", "optional": false, "component": "address" },
            },
            "address": {
                "street": { "type": "string", "optional": false },
            }
        })
    );

    Ok(())
}

#[test]
fn extract_report_summarizes_components() -> Result<()> {
    let test = CliTest::with_router(USER_ROUTER)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("user-create"));
    assert!(stdout.contains("address: object, -> address"));
    assert!(stdout.contains("2 components extracted from 2 operations"));

    Ok(())
}

#[test]
fn malformed_operation_fails_with_its_key() -> Result<()> {
    let test = CliTest::with_router(
        r#"{
            "operations": [
                {
                    "procedure": "user.rename",
                    "path": "/users/{id}/name",
                    "input": { "type": "string" }
                }
            ]
        }"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("user-rename"));
    assert!(stderr.contains("must be an object"));

    Ok(())
}

#[test]
fn missing_router_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn deterministic_output_across_runs() -> Result<()> {
    let test = CliTest::with_router(USER_ROUTER)?;

    let first = test.extract_command().arg("--json").output()?;
    let second = test.extract_command().arg("--json").output()?;
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}
