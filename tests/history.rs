use common::Session;
use common::commit_ids;
use common::script::Script;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

mod common;

/// Two commits on `main`: `f = a`, then `f = b`
struct TwoCommits {
    session: Session,
    c1: String,
    c2: String,
}

#[fixture]
fn two_commits() -> TwoCommits {
    let mut session = Session::new();
    let output = session.run(
        &Script::new()
            .commit_file("f", "a", "m1")
            .commit_file("f", "b", "m2")
            .build(),
    );
    let ids = commit_ids(&output);

    TwoCommits {
        session,
        c1: ids[0].clone(),
        c2: ids[1].clone(),
    }
}

#[rstest]
fn diff_reports_modified_file(mut two_commits: TwoCommits) {
    let output = two_commits
        .session
        .run(&format!("diff {} {}\n", two_commits.c1, two_commits.c2));

    assert_eq!(
        output,
        "=== Added Files ===\n\n=== Removed Files ===\n\n=== Modified Files ===\nf\n"
    );
}

#[rstest]
fn diff_content_shows_both_versions(mut two_commits: TwoCommits) {
    let output = two_commits
        .session
        .run(&format!("diff-content {} {}\n", two_commits.c1, two_commits.c2));

    assert_eq!(
        output,
        "=== Content Differences ===\n\nFile: f\n--- Old Content ---\na\n--- New Content ---\nb\n"
    );
}

#[rstest]
fn diff_of_a_commit_with_itself_is_empty(mut two_commits: TwoCommits) {
    let c2 = two_commits.c2.clone();
    let output = two_commits
        .session
        .run(&format!("diff {c2} HEAD\ndiff-content {c2} @\n"));

    assert_eq!(
        output,
        "=== Added Files ===\n\n=== Removed Files ===\n\n=== Modified Files ===\n\
         === Content Differences ===\nNo content differences found.\n"
    );
}

#[rstest]
fn diff_filter_restricts_categories(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .commit_file("g", "new", "m3")
            .line(format!("diff {} HEAD --filter A", two_commits.c1))
            .build(),
    );
    let diff = output.split_once("=== Added Files ===\n").unwrap().1;

    assert_eq!(
        diff,
        "g\n\n=== Removed Files ===\n\n=== Modified Files ===\n"
    );
}

#[rstest]
fn unknown_commit_ids_are_reported(mut two_commits: TwoCommits) {
    let output = two_commits
        .session
        .run(&format!("diff {} 0000000\nshow nope\n", two_commits.c1));

    assert_eq!(
        output,
        "error: commit '0000000' not found\nerror: commit 'nope' not found\n"
    );
}

#[rstest]
fn checkout_old_commit_restores_its_snapshot(mut two_commits: TwoCommits) {
    let c1 = two_commits.c1.clone();
    let output = two_commits
        .session
        .run(&format!("checkout {c1}\nread f\nlog\n"));

    assert!(output.starts_with(&format!("Checked out to commit {c1}\n=== f ===\na\n")));
    assert_eq!(
        two_commits.session.repository().head().unwrap().message(),
        "m2"
    );
}

#[rstest]
fn checkout_head_discards_local_changes(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .edit("f", "scratch")
            .write("junk", "x")
            .add("junk")
            .line("checkout HEAD")
            .line("status --short")
            .line("read f")
            .build(),
    );

    assert!(output.ends_with("Checked out to HEAD (latest commit).\n=== f ===\nb\n"));
}

#[test]
fn checkout_without_commits_is_rejected() {
    let mut session = Session::new();
    let output = session.run("checkout HEAD\n");

    assert_eq!(output, "error: no commits yet\n");
}

#[rstest]
fn show_prints_the_full_snapshot(mut two_commits: TwoCommits) {
    let c1 = two_commits.c1.clone();
    let output = two_commits.session.run(&format!("show {c1}\n"));
    let (header, files) = output.split_once("\n\n").unwrap();

    assert!(header.starts_with(&format!("=== Snapshot of commit {c1} ===\nDate: ")));
    assert_eq!(files, "File: f\na\n--------------------------------\n");
}

#[test]
fn branch_before_first_commit_is_rejected() {
    let mut session = Session::new();
    let output = session.run("branch dev\nlist-branches\n");

    assert_eq!(
        output,
        "error: no commits yet, cannot create a branch\n=== Branches ===\nmain *\n"
    );
}

#[rstest]
fn new_branch_points_at_head(mut two_commits: TwoCommits) {
    let output = two_commits
        .session
        .run("branch dev\nbranch dev\nlist-branches\nlog\n");

    assert!(output.starts_with(&format!(
        "Branch 'dev' created at commit {}\nerror: branch 'dev' already exists\n=== Branches ===\ndev\nmain *\n",
        two_commits.c2
    )));
    assert!(output.contains(&format!("Commit {} (dev, main)\n", two_commits.c2)));
}

#[rstest]
#[case("bad~name")]
#[case("..")]
#[case("HEAD")]
#[case("topic.lock")]
fn invalid_branch_names_are_rejected(mut two_commits: TwoCommits, #[case] name: &str) {
    let output = two_commits.session.run(&format!("branch {name}\n"));

    assert!(output.starts_with("error: invalid branch name"), "{output}");
    assert_eq!(two_commits.session.repository().branches().len(), 1);
}

#[rstest]
fn staged_changes_block_switching_until_committed(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .line("branch dev")
            .write("g", "new")
            .add("g")
            .line("switch dev")
            .commit("m3")
            .line("switch dev")
            .line("show-working")
            .build(),
    );

    assert!(output.contains(
        "error: you have staged changes; commit them before switching branches\n"
    ));
    assert!(output.contains("Switched to branch 'dev'.\n"));
    assert!(output.ends_with(
        "=== Working Directory ===\n\nFile: f\nb\n--------------------------------\n"
    ));
}

#[rstest]
fn unstaged_modifications_block_switching(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .line("branch dev")
            .edit("f", "dirty")
            .line("switch dev")
            .build(),
    );

    assert!(output.ends_with(
        "error: you have unstaged modifications in f; commit or discard them before switching branches\n"
    ));
    assert_eq!(
        two_commits.session.repository().current_branch().as_ref(),
        "main"
    );
}

#[rstest]
fn branches_keep_independent_histories(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .line("branch dev")
            .line("switch dev")
            .commit_file("f", "dev work", "on dev")
            .line("switch main")
            .line("read f")
            .line("switch dev")
            .line("read f")
            .build(),
    );

    assert!(output.contains("[dev] Commit "));
    assert!(output.contains("Switched to branch 'main'.\n=== f ===\nb\n"));
    assert!(output.ends_with("Switched to branch 'dev'.\n=== f ===\ndev work\n"));
}

#[rstest]
fn commits_on_other_branches_cannot_be_named(mut two_commits: TwoCommits) {
    let output = two_commits.session.run(
        &Script::new()
            .line("branch dev")
            .line("switch dev")
            .commit_file("f", "dev work", "on dev")
            .line("switch main")
            .build(),
    );
    let dev_commit = commit_ids(&output).pop().unwrap();

    let output = two_commits
        .session
        .run(&format!("show {dev_commit}\ncheckout {dev_commit}\n"));

    assert_eq!(
        output,
        format!("error: commit '{dev_commit}' not found\nerror: commit '{dev_commit}' not found\n")
    );
}

#[test]
fn switching_to_a_missing_branch_is_not_found() {
    let mut session = Session::new();
    let output = session.run("switch nowhere\n");

    assert_eq!(output, "error: branch 'nowhere' not found\n");
}
