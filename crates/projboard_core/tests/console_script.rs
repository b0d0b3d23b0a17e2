use projboard_core::{Console, ConsoleError, ProjectStatus};
use std::io::Write;

#[test]
fn script_adds_lists_and_drags_projects() {
    let mut console = Console::new(Vec::new());
    console
        .run_script(
            r#"
# set up two projects
add "Board" "build the board" 3
add "Docs" "write the docs" 1
drag #1 finished
drag #1 finished
list
"#,
        )
        .expect("script should run");

    let store = console.board().store().clone();
    let snapshot = store.snapshot();
    assert_eq!(snapshot[0].status, ProjectStatus::Finished);
    assert_eq!(snapshot[1].status, ProjectStatus::Active);

    let output = String::from_utf8(console.into_output()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("added #1 "));
    assert!(lines[1].starts_with("added #2 "));
    assert_eq!(lines[2], "drag #1 -> finished: finished");
    assert_eq!(lines[3], "drag #1 -> finished: finished");
    assert_eq!(
        &lines[4..],
        &[
            "ACTIVE PROJECTS",
            "  #2 Docs - 1 person assigned - write the docs",
            "FINISHED PROJECTS",
            "  #1 Board - 3 people assigned - build the board",
        ]
    );
}

#[test]
fn field_commands_and_failed_submit_print_alert() {
    let mut console = Console::new(Vec::new());
    console
        .run_script("title X\ndescription short\npeople 2\nsubmit\ntitle Longer\ndescription longer text\nsubmit\nlist\n")
        .expect("script should run");

    let output = String::from_utf8(console.into_output()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "alert: Invalid input. Please retry!");
    assert!(lines[1].starts_with("added #1 "));
    assert_eq!(lines[3], "  #1 Longer - 2 people assigned - longer text");
    assert_eq!(lines[5], "  (empty)");
}

#[test]
fn dragover_and_leave_report_affordance() {
    let mut console = Console::new(Vec::new());
    console
        .run_script("dragover finished text/plain\nleave finished\ndragover active text/html\n")
        .expect("script should run");

    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "dragover finished: accepted (Highlighted)",
            "leave finished: Idle",
            "dragover active: rejected (Idle)",
        ]
    );
}

#[test]
fn dragging_unknown_uuid_is_reported_and_ignored() {
    let mut console = Console::new(Vec::new());
    console
        .run_script("drag 11111111-2222-4333-8444-555555555555 finished\n")
        .expect("unknown uuid is not a console error");

    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(
        output.trim_end(),
        "drag 11111111-2222-4333-8444-555555555555 -> finished: unknown"
    );
}

#[test]
fn errors_carry_line_numbers() {
    let mut console = Console::new(Vec::new());
    let err = console
        .run_script("list\nexplode now\n")
        .expect_err("unknown command must fail");
    assert!(matches!(err, ConsoleError::UnknownCommand { line: 2, .. }));

    let err = Console::new(Vec::new())
        .run_script("drag #3 finished\n")
        .expect_err("unknown reference must fail");
    assert_eq!(err.to_string(), "line 1: unknown project reference `#3`");

    let err = Console::new(Vec::new())
        .run_script("add \"only title\"\n")
        .expect_err("missing argument must fail");
    assert!(matches!(
        err,
        ConsoleError::MissingArgument {
            argument: "description",
            ..
        }
    ));

    let err = Console::new(Vec::new())
        .run_script("leave sideways\n")
        .expect_err("invalid status must fail");
    assert!(matches!(err, ConsoleError::InvalidStatus { line: 1, .. }));
}

#[test]
fn script_from_file_runs_the_same() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "add \"From file\" \"loaded from disk\" 2").expect("write script");
    let script = std::fs::read_to_string(file.path()).expect("read script");

    let mut console = Console::new(Vec::new());
    console.run_script(&script).expect("script should run");
    assert_eq!(console.board().store().len(), 1);
}
