//! Integration smoke tests for `grade_tracker`

use grade_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
