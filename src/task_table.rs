//! Task List Table
//!
//! Row ordering for the main view. Rows are inserted at the top, so a
//! loaded array ends up displayed last-to-first.

use crate::error::{ApiError, ApiResult};

/// Insert one row above all others
pub fn insert_top(rows: &mut Vec<String>, name: String) {
    rows.insert(0, name);
}

/// Insert every loaded name at the top, in arrival order. Names already
/// in the table (created while the load was in flight) are kept once.
pub fn insert_loaded(rows: &mut Vec<String>, loaded: Option<Vec<String>>) {
    for name in loaded.unwrap_or_default() {
        if !contains(rows, &name) {
            insert_top(rows, name);
        }
    }
}

pub fn contains(rows: &[String], name: &str) -> bool {
    rows.iter().any(|row| row == name)
}

/// Only names shown in the table may be deleted
pub fn check_deletable(rows: &[String], name: &str) -> ApiResult<()> {
    if contains(rows, name) {
        Ok(())
    } else {
        Err(ApiError::Invalid(format!("No task list named \"{}\"", name)))
    }
}

/// Drop every row named `name`; returns how many were removed
pub fn remove(rows: &mut Vec<String>, name: &str) -> usize {
    let before = rows.len();
    rows.retain(|row| row != name);
    before - rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_loaded_rows_display_reversed() {
        let mut rows = Vec::new();
        insert_loaded(&mut rows, Some(names(&["a", "b", "c"])));
        assert_eq!(rows, names(&["c", "b", "a"]));
    }

    #[test]
    fn test_null_data_leaves_table_empty() {
        let mut rows = Vec::new();
        insert_loaded(&mut rows, None);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_created_row_goes_first() {
        let mut rows = names(&["c", "b"]);
        insert_top(&mut rows, "new".into());
        assert_eq!(rows, names(&["new", "c", "b"]));
    }

    #[test]
    fn test_load_keeps_rows_created_meanwhile() {
        let mut rows = names(&["fresh"]);
        insert_loaded(&mut rows, Some(names(&["a", "fresh", "b"])));
        assert_eq!(rows, names(&["b", "a", "fresh"]));
    }

    #[test]
    fn test_only_listed_names_are_deletable() {
        let rows = names(&["work", "home"]);
        assert!(check_deletable(&rows, "home").is_ok());
        assert_eq!(
            check_deletable(&rows, "gym"),
            Err(ApiError::Invalid("No task list named \"gym\"".into()))
        );
    }

    #[test]
    fn test_contains_and_remove() {
        let mut rows = names(&["work", "home", "work"]);
        assert!(contains(&rows, "home"));
        assert!(!contains(&rows, "gym"));

        assert_eq!(remove(&mut rows, "gym"), 0);
        assert_eq!(remove(&mut rows, "work"), 2);
        assert_eq!(rows, names(&["home"]));
    }
}
