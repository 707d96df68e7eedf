use line_status::utils::id::request_id;
use std::collections::HashSet;

#[test]
fn test_request_id_format() {
    let id = request_id();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn test_request_ids_differ() {
    let ids: HashSet<String> = (0..100).map(|_| request_id()).collect();
    assert_eq!(ids.len(), 100);
}
