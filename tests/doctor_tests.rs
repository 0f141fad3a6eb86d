// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::{commands::doctor, db};
use rusqlite::Connection;

#[test]
fn clean_database_has_no_issues() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO expenses(id, category, amount, date) VALUES (1, 'Rent', '900', '2025-01-01');
        INSERT INTO profile_fields(key, value) VALUES ('income.monthlyNet', '4000');
        INSERT INTO profile_fields(key, value) VALUES ('goals.vacation', 'Lisbon');
        "#,
    )
    .unwrap();
    assert!(doctor::find_issues(&conn).unwrap().is_empty());
}

#[test]
fn flags_rows_the_calculator_would_skip() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO expenses(id, category, amount, date) VALUES (1, 'Yachts', '10', '');
        INSERT INTO expenses(id, category, amount, date) VALUES (2, 'Rent', 'abc', '2025-02-30');
        INSERT INTO expenses(id, category, amount, date) VALUES (3, 'Rent', '0', '2025-02-03');
        INSERT INTO profile_fields(key, value) VALUES ('assets.cash', 'lots');
        INSERT INTO profile_fields(key, value) VALUES ('assets.boat', '1');
        "#,
    )
    .unwrap();
    let kinds: Vec<&str> = doctor::find_issues(&conn)
        .unwrap()
        .iter()
        .map(|i| i.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "expense_undated",
            "expense_unknown_category",
            "expense_bad_date",
            "expense_bad_amount",
            "expense_non_positive",
            "profile_unknown_field",
            "profile_not_a_number",
        ]
    );
}
