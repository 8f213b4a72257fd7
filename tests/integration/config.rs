use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_default_config_file_is_used() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "plain.md", "text");
    project.write_user_config("copy_command = \"\"\n");

    // Empty copy command disables copying; env overrides are unset here
    project
        .command()
        .args(["pick", "plain"])
        .env_remove("PROOMPT_COPY_COMMAND")
        .assert()
        .success()
        .stdout("text");

    assert!(project.clipboard().is_none());
}

#[test]
fn test_environment_overrides_config_file() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "alpha.md", "A");
    project.add_prompt(project.project_prompts(), "beta.md", "B");
    project.write_user_config("picker = \"grep alpha\"\n");

    project
        .command()
        .args(["pick", "--no-copy"])
        .env("PROOMPT_PICKER", "grep beta")
        .assert()
        .success()
        .stdout("B");

    project
        .command()
        .args(["pick", "--no-copy"])
        .env_remove("PROOMPT_PICKER")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn test_explicit_config_flag() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "alpha.md", "A");
    let config = project.add_prompt(project.root(), "custom.toml", "picker = \"head -n 1\"\n");

    project
        .command()
        .args(["--config", config.to_str().unwrap(), "pick", "--no-copy"])
        .env_remove("PROOMPT_PICKER")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let project = TestProject::new();

    project
        .command()
        .args(["list", "-c", "/nonexistent/proompt.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let project = TestProject::new();

    project
        .command()
        .args(["-v", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"))
        .stderr(predicate::str::contains("DEBUG"));
}
