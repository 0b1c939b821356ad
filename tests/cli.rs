use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn interactive_session_outputs_period_and_frequencies() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.write_stdin("12\n5\n");

    cmd.assert()
        .success()
        .stdout(str::contains("Please select a deck size:"))
        .stdout(str::contains(
            "Please select a cut size less than the deck size to shuffle with:",
        ))
        .stdout(str::contains("Finished with 5 of 5 cards"))
        .stdout(str::contains(
            "Shuffles required to return to original state: 12",
        ))
        .stdout(str::contains("Unique Frequency list: "))
        .stdout(str::contains("[2, 4, 6]"));
}

#[test]
fn invalid_entries_are_reprompted() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.write_stdin("deck\n1\n12\nfive\n0\n30\n5\n");

    cmd.assert()
        .success()
        .stdout(str::contains("Please enter integer values for a deck size:"))
        .stdout(str::contains(
            "Please enter a value greater than 1 for a deck size:",
        ))
        .stdout(str::contains("Please enter integer values for a cut size:"))
        .stdout(str::contains(
            "Please enter a value greater than 0 for a cut size:",
        ))
        .stdout(str::contains(
            "Please enter a value less than the deck size for the cut:",
        ))
        .stdout(str::contains(
            "Shuffles required to return to original state: 12",
        ));
}

#[test]
fn arguments_skip_the_prompts() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.arg("52").arg("26");

    cmd.assert()
        .success()
        .stdout(str::contains("Please select a deck size:").not())
        .stdout(str::contains(
            "Shuffles required to return to original state: 52",
        ))
        .stdout(str::contains("[52]"));
}

#[test]
fn large_cut_is_reduced_to_the_moving_part() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.arg("6").arg("4");

    cmd.assert()
        .success()
        .stdout(str::contains("Finished with 2 of 2 cards"))
        .stdout(str::contains(
            "Shuffles required to return to original state: 4",
        ));
}

#[test]
fn long_runs_report_progress() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.arg("500").arg("250");

    cmd.assert()
        .success()
        .stdout(str::contains("Finished with 100 of 250 cards"))
        .stdout(str::contains("Finished with 200 of 250 cards"))
        .stdout(str::contains("Finished with 250 of 250 cards"));
}

#[test]
fn invalid_arguments_fail_fast() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.arg("12").arg("12");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid cut size(12)"));
}

#[test]
fn closed_input_aborts_without_results() {
    let mut cmd = Command::cargo_bin("shuffle-period").unwrap();
    cmd.write_stdin("");

    cmd.assert()
        .failure()
        .stdout(str::contains("Shuffles required").not())
        .stderr(str::contains("Input aborted"));
}
