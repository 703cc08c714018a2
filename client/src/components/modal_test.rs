use super::*;

#[test]
fn escape_closes_modal() {
    assert!(is_close_key("Escape"));
    assert!(is_close_key("Esc"));
}

#[test]
fn other_keys_do_not_close_modal() {
    for key in ["Enter", "Tab", " ", "e"] {
        assert!(!is_close_key(key), "{key:?}");
    }
}
