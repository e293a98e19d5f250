use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    let config_path = test.root().join(".translintrc.json");
    assert!(config_path.exists());

    // The generated file must parse back as a valid config
    let content = std::fs::read_to_string(config_path)?;
    let parsed: serde_json::Value = serde_json::from_str(&content)?;
    assert!(parsed.get("localesRoot").is_some());
    assert!(parsed.get("primaryLocale").is_some());
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    Ok(())
}
