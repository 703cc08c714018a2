use super::*;

#[test]
fn reporter_starts_idle() {
    let reporter = LoadingReporter::new();
    assert!(!reporter.is_loading_untracked());
}

#[test]
fn begin_and_finish_toggle_flag() {
    let reporter = LoadingReporter::new();
    reporter.begin();
    assert!(reporter.is_loading_untracked());
    reporter.finish();
    assert!(!reporter.is_loading_untracked());
}

#[test]
fn copies_share_the_same_flag() {
    let page = LoadingReporter::new();
    let form = page;
    form.report(true);
    assert!(page.is_loading_untracked());
}
