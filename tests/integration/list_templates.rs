use crate::helpers::binary;
use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn it_lists_every_template_with_its_display_name() {
    binary()
        .arg("list-templates")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("basic - Basic REST API")
                .and(predicates::str::contains("express - Express + MongoDB"))
                .and(predicates::str::contains(
                    "typescript-basic - TypeScript Basic REST API",
                ))
                .and(predicates::str::contains(
                    "typescript-express - TypeScript Express + MongoDB",
                ))
                .from_utf8(),
        );
}

#[test]
fn it_shows_usage_without_arguments() {
    binary()
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage").from_utf8());
}
