use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_rm_by_name() {
    let project = TestProject::new();
    let path = project.add_prompt(project.directory_prompts(), "old.md", "x");

    project
        .command()
        .args(["rm", "old"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed prompt: old (directory)"));

    assert!(!path.exists());
}

#[test]
fn test_rm_reveals_shadowed_prompt() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "review.md", "project");
    let user_copy = project.add_prompt(project.user_prompts(), "review.md", "user");

    project.command().args(["rm", "review"]).assert().success();

    assert!(user_copy.exists());
    project
        .command()
        .args(["show", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: user"));
}

#[test]
fn test_rm_via_picker() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "alpha.md", "a");
    let beta = project.add_prompt(project.project_prompts(), "beta.md", "b");

    project
        .command()
        .arg("rm")
        .env("PROOMPT_PICKER", "grep beta")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed prompt: beta (project)"));

    assert!(!beta.exists());
}

#[test]
fn test_rm_missing_prompt() {
    let project = TestProject::new();

    project
        .command()
        .args(["rm", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt 'ghost' not found"));
}

#[test]
fn test_rm_without_prompts() {
    let project = TestProject::new();

    project
        .command()
        .arg("rm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No prompts found"));
}
