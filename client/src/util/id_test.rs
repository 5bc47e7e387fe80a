use super::*;

#[test]
fn next_id_counts_up_from_zero() {
    let scope = IdScope::default();
    assert_eq!(scope.next_id(), ":c0:");
    assert_eq!(scope.next_id(), ":c1:");
    assert_eq!(scope.next_id(), ":c2:");
}

#[test]
fn cloned_scopes_share_the_counter() {
    let scope = IdScope::default();
    let other = scope.clone();
    assert_eq!(scope.next_id(), ":c0:");
    assert_eq!(other.next_id(), ":c1:");
}

#[test]
fn separate_scopes_are_independent() {
    let a = IdScope::default();
    let b = IdScope::default();
    assert_eq!(a.next_id(), ":c0:");
    assert_eq!(b.next_id(), ":c0:");
}
