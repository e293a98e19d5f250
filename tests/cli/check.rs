use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
    "includes": ["src"],
    "localesRoot": "./locales"
}"#;

#[test]
fn test_clean_project_exits_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file(
        "src/pages/HomePage.jsx",
        "function HomePage() {\n  return <h1>{t('home.title')}</h1>;\n}\n",
    )?;
    test.write_file("locales/en.json", r#"{"home": {"title": "Welcome"}}"#)?;
    test.write_file("locales/ko.json", r#"{"home": {"title": "환영합니다"}}"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_hardcoded_text_fails_with_location() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file(
        "src/pages/HomePage.jsx",
        "function HomePage() {\n  return <Text>Click here to continue</Text>;\n}\n",
    )?;
    test.write_file("locales/en.json", "{}")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("Click here to continue"));
    assert!(out.contains("hardcoded-text"));
    assert!(out.contains("HomePage.jsx:2:"));
    Ok(())
}

#[test]
fn test_locale_gap_reported_per_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;
    test.write_file("locales/en.json", r#"{"home": {"title": "Welcome"}}"#)?;
    test.write_file("locales/ko.json", r#"{"home": {}}"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("home.title"));
    assert!(out.contains("locale-gap"));
    assert!(out.contains("missing in: ko"));
    Ok(())
}

#[test]
fn test_missing_key_reported_per_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file(
        "src/pages/QuizPage.jsx",
        "const label = t('quiz.start');\n",
    )?;
    test.write_file("locales/en.json", "{}")?;
    test.write_file("locales/ko.json", "{}")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("quiz.start"));
    assert!(out.contains("missing-key"));
    assert!(out.contains("not defined in locale \"en\""));
    assert!(out.contains("not defined in locale \"ko\""));
    Ok(())
}

#[test]
fn test_all_issues_reported_in_one_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file(
        "src/pages/HomePage.jsx",
        "function HomePage() {\n  return (\n    <div>\n      <h1>Welcome back</h1>\n      <p>{t('home.subtitle')}</p>\n    </div>\n  );\n}\n",
    )?;
    test.write_file("locales/en.json", r#"{"home": {"extra": "Extra"}}"#)?;
    test.write_file("locales/ko.json", "{}")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));

    // One run surfaces the complete defect list across all three rules
    let out = stdout(&output);
    assert!(out.contains("hardcoded-text"));
    assert!(out.contains("missing-key"));
    assert!(out.contains("locale-gap"));
    Ok(())
}

#[test]
fn test_broken_locale_file_aborts_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;
    test.write_file("locales/en.json", "{ not json")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("en.json"));
    Ok(())
}

#[test]
fn test_missing_locales_dir_aborts_with_hint() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("localesRoot"));
    Ok(())
}

#[test]
fn test_missing_primary_locale_aborts_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;
    // The reference locale (en) has no file; completeness cannot be gated
    test.write_file("locales/ko.json", r#"{"home": {"title": "환영"}}"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("primaryLocale"));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".translintrc.json",
        r#"{
            "includes": ["src"],
            "ignores": ["**/generated/**"],
            "localesRoot": "./locales"
        }"#,
    )?;
    test.write_file(
        "src/generated/TypesPage.tsx",
        "const x = <div>Please ignore this text.</div>;\n",
    )?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;
    test.write_file("locales/en.json", "{}")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}

#[test]
fn test_rule_filtering() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file(
        "src/pages/HomePage.jsx",
        "function HomePage() {\n  return <h1>Welcome back</h1>;\n}\n",
    )?;
    // No locales directory: hardcoded-only runs must not require one

    let output = test.command().args(["check", "hardcoded"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("hardcoded-text"));
    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translintrc.json", CONFIG)?;
    test.write_file("src/pages/HomePage.jsx", "export default null;\n")?;
    test.write_file("locales/en.json", "{}")?;
    test.write_file("locales/ko.json", r#"{"only": {"in": "korean"}}"#)?;

    // With ko as primary, the gap flips direction: en lacks "only.in"
    let output = test
        .command()
        .args(["check", "--primary-locale", "ko"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("only.in"));
    assert!(out.contains("missing in: en"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("check"));
    assert!(stdout(&output).contains("init"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
