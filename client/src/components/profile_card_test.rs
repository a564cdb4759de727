use super::*;

#[test]
fn profile_rows_skip_missing_fields() {
    let user = UserRecord {
        username: "jdoe".to_owned(),
        email: "jdoe@farm.test".to_owned(),
        role: Some("FARMER".to_owned()),
        ..UserRecord::default()
    };
    let rows = profile_rows(&user);
    let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Username", "Email", "Role"]);
    assert_eq!(rows[2].1, "FARMER");
}

#[test]
fn profile_rows_skip_blank_required_fields() {
    let user = UserRecord { email: "only@farm.test".to_owned(), ..UserRecord::default() };
    assert_eq!(profile_rows(&user), vec![("Email", "only@farm.test".to_owned())]);
}

#[test]
fn row_keys_change_with_values() {
    let before = UserRecord { username: "jdoe".to_owned(), ..UserRecord::default() };
    let after = UserRecord { username: "john".to_owned(), role: Some("FARMER".to_owned()), ..UserRecord::default() };

    let old_keys: Vec<_> = profile_rows(&before).iter().map(row_key).collect();
    let new_keys: Vec<_> = profile_rows(&after).iter().map(row_key).collect();
    assert_eq!(old_keys, vec![("Username", "jdoe".to_owned())]);
    assert_eq!(new_keys, vec![("Username", "john".to_owned()), ("Role", "FARMER".to_owned())]);
}
