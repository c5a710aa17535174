//! Sessions against the compiled menu binary: scripted choices piped to
//! stdin, assertions on the printed transcript and the exit status.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

/// Runs one menu session with `input` as the whole of stdin and returns the
/// exit status together with everything the binary printed.
fn run_menu(input: &str) -> (ExitStatus, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strategy_sort"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn the menu binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write the scripted choices");
    let output = child
        .wait_with_output()
        .expect("failed to collect the session transcript");
    let stdout = String::from_utf8(output.stdout).expect("transcript is not UTF-8");
    (output.status, stdout)
}

#[test]
fn non_numeric_choice_exits_without_sorting() {
    let (status, stdout) = run_menu("abc\n");

    assert!(!status.success());
    assert!(stdout.contains("Invalid choice. Exiting."));
    assert!(!stdout.contains("Sorted records:"));
}

#[test]
fn out_of_range_algorithm_choice_reports_the_code() {
    let (status, stdout) = run_menu("3\n");

    assert!(!status.success());
    assert!(stdout.contains(
        "invalid algorithm choice 3, expected 1 (insertion sort) or 2 (selection sort). Exiting."
    ));
    assert!(!stdout.contains("Sorted records:"));
}

#[test]
fn out_of_range_criteria_choice_reports_the_code() {
    let (status, stdout) = run_menu("1\n9\n");

    assert!(!status.success());
    assert!(stdout.contains(
        "invalid sorting criteria choice 9, expected 1 (name) or 2 (id). Exiting."
    ));
    assert!(!stdout.contains("Sorted records:"));
}

#[test]
fn valid_choices_print_the_sorted_records() {
    let (status, stdout) = run_menu("2\n2\n");

    assert!(stdout.contains(
        "Choose sorting algorithm (1 >> Insertion Sort, 2 >> Selection Sort): "
    ));
    assert!(stdout.contains("Choose sorting criteria (1 for Name, 2 for ID): "));
    assert!(stdout.contains(
        "Sorted records:\nName: Mohamed, ID: 1\nName: Ali, ID: 2\nName: Ahmed, ID: 3\n"
    ));
    // End of input reads as a bad choice, which is how a session ends.
    assert!(!status.success());
}

#[test]
fn menu_repeats_and_resorts_the_same_records() {
    let (status, stdout) = run_menu("2\n2\n1\n1\n");

    assert!(stdout.contains(
        "Sorted records:\nName: Mohamed, ID: 1\nName: Ali, ID: 2\nName: Ahmed, ID: 3\n"
    ));
    assert!(stdout.contains(
        "Sorted records:\nName: Ahmed, ID: 3\nName: Ali, ID: 2\nName: Mohamed, ID: 1\n"
    ));
    assert!(!status.success());
}
