use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_list_empty() {
    let project = TestProject::new();

    project
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"));
}

#[test]
fn test_list_project_and_user_locations() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "shared.txt", "p");
    project.add_prompt(project.project_local_prompts(), "private.md", "l");
    project.add_prompt(project.user_prompts(), "mine.md", "u");

    project
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 prompt(s):"))
        .stdout(predicate::str::contains("(project)"))
        .stdout(predicate::str::contains("(project-local)"))
        .stdout(predicate::str::contains("(user)"));
}

#[test]
fn test_list_directory_location() {
    let project = TestProject::new();
    // ./prompts also makes the working directory the project root, so the
    // same directory is reported once, as `directory`
    project.add_prompt(project.directory_prompts(), "here.md", "d");
    project.add_prompt(project.project_prompts(), "above.md", "p");

    project
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 prompt(s):"))
        .stdout(predicate::str::contains("(directory)"))
        .stdout(predicate::str::contains("above").not());
}

#[test]
fn test_list_higher_location_shadows_lower() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "review.md", "project");
    project.add_prompt(project.user_prompts(), "review.md", "user");

    let output = project.command().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "review");
    assert_eq!(items[0]["source"], "project");
}

#[test]
fn test_list_ignores_other_files_and_subdirectories() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "keep.MD", "x");
    project.add_prompt(project.project_prompts(), "notes.json", "{}");
    project.add_prompt(project.project_prompts().join("nested"), "deep.md", "x");

    project
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 prompt(s):"))
        .stdout(predicate::str::contains("keep"))
        .stdout(predicate::str::contains("deep").not());
}

#[test]
fn test_list_yaml_format() {
    let project = TestProject::new();
    project.add_prompt(project.user_prompts(), "mine.md", "u");

    project
        .command()
        .args(["list", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: mine"))
        .stdout(predicate::str::contains("source: user"));
}
