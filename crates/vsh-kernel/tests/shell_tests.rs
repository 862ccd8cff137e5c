//! End-to-end shell flows: boot from a description file, run commands.

use std::io::Write;

use tempfile::NamedTempFile;

use vsh_kernel::{Eval, ExecResult, Shell};

fn write_description(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp description");
    file.write_all(contents.as_bytes())
        .expect("write description");
    file
}

async fn run(shell: &mut Shell, line: &str) -> ExecResult {
    match shell.eval_line(line).await {
        Eval::Done(result) => result,
        other => panic!("expected Done for `{line}`, got {other:?}"),
    }
}

#[tokio::test]
async fn boots_from_description_and_lists_decoded_file() {
    let file = write_description(
        "path;type;content\n\
         /a;dir;\n\
         /a/b;file;aGVsbG8=\n",
    );
    let mut shell = Shell::from_description(file.path()).expect("load");

    let result = run(&mut shell, "ls /a").await;
    assert_eq!(result.out, "b");

    // the loader decoded the base64 payload
    let du = run(&mut shell, "du /a").await;
    assert_eq!(du.out, "2");
}

#[tokio::test]
async fn load_failure_produces_no_shell() {
    // child listed before its parent
    let file = write_description(
        "path;type\n\
         /a/b;file\n\
         /a;dir\n",
    );
    assert!(Shell::from_description(file.path()).is_err());
}

#[tokio::test]
async fn missing_description_file_is_an_io_error() {
    let path = std::env::temp_dir().join("vsh-no-such-description");
    assert!(Shell::from_description(&path).is_err());
}

#[tokio::test]
async fn motd_is_surfaced_after_load() {
    let file = write_description(
        "path;type;content\n\
         /motd;file;d2VsY29tZQ==\n",
    );
    let shell = Shell::from_description(file.path()).expect("load");
    assert_eq!(shell.motd(), Some("welcome".into()));
}

#[tokio::test]
async fn mv_rename_moves_content_and_unlists_source() {
    let file = write_description(
        "path;type;content\n\
         /a;dir;\n\
         /a/b;file;aGVsbG8=\n",
    );
    let mut shell = Shell::from_description(file.path()).expect("load");

    let result = run(&mut shell, "mv /a/b /c").await;
    assert!(result.ok());

    assert_eq!(run(&mut shell, "ls /a").await.out, "");
    assert_eq!(run(&mut shell, "ls /c").await.out, "c");

    let err = run(&mut shell, "ls /a/b").await;
    assert_eq!(err.err, "ls: /a/b: No such file or directory");
}

#[tokio::test]
async fn du_counts_root_plus_two_files_plus_empty_dir() {
    let file = write_description(
        "path;type;content\n\
         /one;file;\n\
         /two;file;\n\
         /empty;dir;\n",
    );
    let mut shell = Shell::from_description(file.path()).expect("load");
    assert_eq!(run(&mut shell, "du /").await.out, "4");
}

#[tokio::test]
async fn second_mkdir_reports_file_exists_and_keeps_one_entry() {
    let mut shell = Shell::new();
    assert!(run(&mut shell, "mkdir /x").await.ok());

    let second = run(&mut shell, "mkdir /x").await;
    assert_eq!(second.err, "mkdir: /x: File exists");

    assert_eq!(run(&mut shell, "ls /").await.out, "x/");
}

#[tokio::test]
async fn relative_navigation_and_prompt_path_stay_in_step() {
    let mut shell = Shell::new();
    run(&mut shell, "mkdir /projects").await;
    run(&mut shell, "mkdir /projects/vsh").await;

    run(&mut shell, "cd projects").await;
    assert_eq!(shell.current_path(), "/projects");

    run(&mut shell, "cd vsh").await;
    assert_eq!(shell.current_path(), "/projects/vsh");

    run(&mut shell, "cd ..").await;
    assert_eq!(shell.current_path(), "/projects");

    run(&mut shell, "cd ~").await;
    assert_eq!(shell.current_path(), "/");
}

#[tokio::test]
async fn quoted_names_travel_through_the_whole_stack() {
    let mut shell = Shell::new();
    assert!(run(&mut shell, "mkdir \"my docs\"").await.ok());
    assert_eq!(run(&mut shell, "ls /").await.out, "my docs/");
    assert!(run(&mut shell, "cd 'my docs'").await.ok());
    assert_eq!(shell.current_path(), "/my docs");
}

#[tokio::test]
async fn echo_joins_arguments() {
    let mut shell = Shell::new();
    let result = run(&mut shell, "echo hello   world").await;
    assert_eq!(result.out, "hello world");
}

#[tokio::test]
async fn bad_command_does_not_poison_the_session() {
    let mut shell = Shell::new();
    assert!(!run(&mut shell, "cd /nope").await.ok());
    // the shell keeps going afterwards
    assert!(run(&mut shell, "mkdir /ok").await.ok());
    assert_eq!(run(&mut shell, "ls").await.out, "ok/");
}
