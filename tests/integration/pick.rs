use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_pick_without_placeholders() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "plain.md", "Costs $$5\n");

    project
        .command()
        .args(["pick", "plain"])
        // Editor must not run for prompts without placeholders
        .env("EDITOR", "false")
        .assert()
        .success()
        .stdout("Costs $$5\n");

    assert_eq!(project.clipboard().as_deref(), Some("Costs $$5\n"));
}

#[test]
fn test_pick_uses_defaults_when_document_is_saved_unchanged() {
    let project = TestProject::new();
    project.add_prompt(project.user_prompts(), "greet.md", "Hello ${NAME:-World}! $$${COST:-3}");

    project.command().args(["pick", "greet"]).assert().success().stdout("Hello World! $3");

    assert_eq!(project.clipboard().as_deref(), Some("Hello World! $3"));
}

#[test]
fn test_pick_substitutes_edited_values() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "greet.md", "Hello ${NAME:-World}, meet ${OTHER}.");
    let editor = project.script(
        "fill-in.sh",
        r#"sed -i.bak -e 's/^NAME: World$/NAME: Ada/' -e "s/^OTHER: ''$/OTHER: Grace/" "$1" && rm -f "$1.bak""#,
    );

    project
        .command()
        .args(["pick", "greet", "--no-copy"])
        .env("EDITOR", editor)
        .assert()
        .success()
        .stdout("Hello Ada, meet Grace.");

    assert!(project.clipboard().is_none());
}

#[test]
fn test_pick_via_picker() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "alpha.md", "A");
    project.add_prompt(project.user_prompts(), "beta.md", "B");

    project
        .command()
        .arg("pick")
        .env("PROOMPT_PICKER", "grep beta")
        .assert()
        .success()
        .stdout("B");
}

#[test]
fn test_pick_empty_document_aborts() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "greet.md", "Hello ${NAME}");

    project
        .command()
        .args(["pick", "greet"])
        .env("EDITOR", "cp /dev/null")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("aborted"));

    assert!(project.clipboard().is_none());
}

#[test]
fn test_pick_clipboard_failure_is_a_warning() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "plain.md", "text");

    project
        .command()
        .args(["pick", "plain"])
        .env("PROOMPT_COPY_COMMAND", "false")
        .assert()
        .success()
        .stdout("text")
        .stderr(predicate::str::contains("failed to copy to clipboard"));
}

#[test]
fn test_pick_cancelled_picker() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "alpha.md", "A");

    project
        .command()
        .arg("pick")
        .env("PROOMPT_PICKER", "false")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_pick_default_containing_dollars() {
    let project = TestProject::new();
    project.add_prompt(project.project_prompts(), "cost.md", "Cost ${PRICE:-$$5}, paid $$2");

    project.command().args(["pick", "cost"]).assert().success().stdout("Cost $5, paid $2");
}
