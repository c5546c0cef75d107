use crate::helpers::{binary, workspace};
use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn it_adds_docker_configuration_on_request() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--template", "basic", "--yes", "--docker"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Added Docker configuration").from_utf8());

    assert!(dir.exists("demo-app/Dockerfile"));
    assert!(dir.exists("demo-app/.dockerignore"));
    assert!(dir.exists("demo-app/docker-compose.yml"));

    let manifest: serde_json::Value =
        serde_json::from_str(&dir.read("demo-app/package.json")).unwrap();
    let scripts = manifest["scripts"].as_object().unwrap();
    assert_eq!(scripts["start"], "node src/server.js");
    assert_eq!(scripts["docker:build"], "docker build -t demo-app .");
    assert_eq!(scripts["docker:run"], "docker run -p 3000:3000 demo-app");
    assert_eq!(scripts["docker:up"], "docker-compose up");
    assert_eq!(scripts["docker:down"], "docker-compose down");
}

#[test]
fn it_uses_the_same_build_file_for_every_template() {
    let dir = workspace();

    for (name, template) in [("js-app", "express"), ("ts-app", "typescript-express")] {
        binary()
            .args(["create", name, "--template", template, "--yes", "--docker"])
            .current_dir(dir.path())
            .assert()
            .success();
    }

    assert_eq!(
        dir.read("js-app/Dockerfile"),
        dir.read("ts-app/Dockerfile")
    );
    assert!(dir.read("js-app/Dockerfile").starts_with("FROM node:18-alpine"));
}

#[test]
fn it_leaves_docker_out_by_default() {
    let dir = workspace();

    binary()
        .args(["create", "demo-app", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.exists("demo-app/Dockerfile"));
    assert!(!dir.exists("demo-app/.dockerignore"));
    assert!(!dir.exists("demo-app/docker-compose.yml"));
    assert!(!dir.read("demo-app/package.json").contains("docker:build"));
}
