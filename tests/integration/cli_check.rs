use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn check_passes_for_shipped_catalog() {
    let env = TestEnv::new();

    env.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 23 bridges checked"));
}

#[test]
fn check_json_is_empty_list() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--json", "check"])
        .assert()
        .success()
        .stdout("[]\n");
}
