use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_show_prompt() {
    let project = TestProject::new();
    let path = project.add_prompt(project.project_prompts(), "greet.md", "Hello ${NAME:-World}");

    project
        .command()
        .args(["show", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: greet"))
        .stdout(predicate::str::contains("Source: project"))
        .stdout(predicate::str::contains(format!("Path: {}", path.display())))
        .stdout(predicate::str::contains("Hello ${NAME:-World}"));
}

#[test]
fn test_show_raw() {
    let project = TestProject::new();
    project.add_prompt(project.user_prompts(), "greet.txt", "raw body\n");

    project.command().args(["show", "greet", "--raw"]).assert().success().stdout("raw body\n");
}

#[test]
fn test_show_missing_prompt() {
    let project = TestProject::new();

    project
        .command()
        .args(["show", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Prompt 'ghost' not found"));
}
