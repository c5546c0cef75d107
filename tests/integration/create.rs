use crate::helpers::{binary, workspace};
use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn it_creates_a_basic_project_with_defaults() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--template", "basic", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert!(dir.exists("demo-app/src/server.js"));
    assert!(dir.exists("demo-app/src/routes/index.js"));
    assert!(dir.exists("demo-app/src/controllers/userController.js"));
    assert!(dir.exists("demo-app/.env"));
    assert!(dir.exists("demo-app/.gitignore"));
    assert!(dir
        .read("demo-app/package.json")
        .contains("\"name\": \"demo-app\""));
    assert!(dir.read("demo-app/README.md").starts_with("# demo-app"));
}

#[test]
fn it_creates_the_declared_empty_folders_too() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("demo-app/src/middleware").is_dir());
    assert!(dir.path().join("demo-app/src/utils").is_dir());
}

#[test]
fn it_defaults_to_the_basic_template() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("demo-app/src/config/index.js"));
    assert!(!dir.exists("demo-app/src/models"));
    assert!(!dir.exists("demo-app/Dockerfile"));
}

#[test]
fn it_fails_when_the_directory_already_exists() {
    let dir = workspace();
    let args = ["create", "demo-app", "--template", "basic", "--yes"];

    binary()
        .args(args)
        .current_dir(dir.path())
        .assert()
        .success();
    let manifest_before = dir.read("demo-app/package.json");

    binary()
        .args(args)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists").from_utf8());

    assert_eq!(dir.read("demo-app/package.json"), manifest_before);
}

#[test]
fn it_rejects_an_invalid_project_name_before_writing_anything() {
    let dir = workspace();

    binary()
        .args(["create", "demo&app", "--yes"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid project name").from_utf8());

    assert_eq!(dir.entry_count(), 0);
}

#[test]
fn it_rejects_an_unknown_template_before_writing_anything() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--template", "nonexistent", "--yes"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Template `nonexistent` not found").from_utf8());

    assert_eq!(dir.entry_count(), 0);
}

#[test]
fn it_creates_an_express_project_with_database_wiring() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--template", "express", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("demo-app/src/models/User.js"));
    assert!(dir
        .read("demo-app/src/config/database.js")
        .contains("mongodb://localhost:27017/demo-app"));
    assert!(dir
        .read("demo-app/.env")
        .contains("MONGODB_URI=mongodb://localhost:27017/demo-app"));
}

#[test]
fn it_creates_the_typed_variants() {
    let dir = workspace();

    binary()
        .args(["create", "typed-app", "--template", "typescript-basic", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("typed-app/tsconfig.json"));
    assert!(dir.exists("typed-app/src/types/index.ts"));
    assert!(dir.read("typed-app/package.json").contains("\"build\": \"tsc\""));

    binary()
        .args(["create", "typed-db-app", "--template", "typescript-express", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("typed-db-app/src/models/User.ts"));
    assert!(dir
        .read("typed-db-app/src/config/database.ts")
        .contains("mongodb://localhost:27017/typed-db-app"));
}

#[test]
fn it_needs_a_terminal_without_yes() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a terminal").from_utf8());

    assert_eq!(dir.entry_count(), 0);
}
