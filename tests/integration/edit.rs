use predicates::prelude::*;
use std::fs;

use crate::common::TestProject;

#[test]
fn test_edit_existing_prompt() {
    let project = TestProject::new();
    let path = project.add_prompt(project.project_prompts(), "review.md", "Review this");

    project
        .command()
        .args(["edit", "review"])
        .env("EDITOR", "sed -i.bak s/this/that/")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited prompt: review (project)"));

    assert_eq!(fs::read_to_string(path).unwrap(), "Review that");
}

#[test]
fn test_edit_creates_user_prompt() {
    let project = TestProject::new();
    let source = project.add_prompt(project.root(), "template.txt", "Hello ${NAME:-World}");

    project
        .command()
        .args(["edit", "greet", "--user"])
        .env("EDITOR", format!("cp '{}'", source.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited prompt: greet (user)"));

    let created = project.user_prompts().join("greet.md");
    assert_eq!(fs::read_to_string(created).unwrap(), "Hello ${NAME:-World}");
}

#[test]
fn test_edit_creates_project_local_prompt_when_location_exists() {
    let project = TestProject::new();
    fs::create_dir_all(project.project_local_prompts()).unwrap();

    project
        .command()
        .args(["edit", "secret", "--project-local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited prompt: secret (project-local)"));

    assert!(project.project_local_prompts().join("secret.md").is_file());
}

#[test]
fn test_edit_unresolvable_location_fails() {
    let project = TestProject::new();

    project
        .command()
        .args(["edit", "notes", "--directory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid location: directory"));

    assert!(!project.directory_prompts().exists());
}

#[test]
fn test_edit_missing_prompt_requires_location() {
    let project = TestProject::new();

    project
        .command()
        .args(["edit", "notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use a location flag"));
}

#[test]
fn test_edit_existing_prompt_rejects_location() {
    let project = TestProject::new();
    project.add_prompt(project.user_prompts(), "notes.md", "x");

    project
        .command()
        .args(["edit", "notes", "--user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists at user"));
}

#[test]
fn test_edit_location_flags_conflict() {
    let project = TestProject::new();

    project.command().args(["edit", "notes", "--user", "--project"]).assert().failure().code(2);
}

#[test]
fn test_edit_failing_editor() {
    let project = TestProject::new();
    project.add_prompt(project.user_prompts(), "notes.md", "x");

    project
        .command()
        .args(["edit", "notes"])
        .env("EDITOR", "false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Editor failed"));
}
