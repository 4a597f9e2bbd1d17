//! Form Validation
//!
//! Checks run before a request is sent.

use crate::error::{ApiError, ApiResult};
use crate::models::Task;

/// Username and password for signing in. Existing accounts are
/// accepted as the server knows them.
pub fn login_credentials(username: &str, password: &str) -> ApiResult<()> {
    if username.trim().is_empty() {
        return Err(ApiError::Invalid("invalid username".into()));
    }
    if password.is_empty() {
        return Err(ApiError::Invalid("invalid password".into()));
    }
    Ok(())
}

/// Username and password for a new account
pub fn register_credentials(username: &str, password: &str) -> ApiResult<()> {
    login_credentials(username, password)?;
    // ':' separates the pair inside the Basic header
    if username.contains(':') {
        return Err(ApiError::Invalid("username may not contain ':'".into()));
    }
    Ok(())
}

/// Task-list name from the create/delete inputs
pub fn task_list_name(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

/// (month, day, year) from `MM/DD/YYYY`
pub fn parse_date(date: &str) -> Option<(u32, u32, u32)> {
    let mut parts = date.trim().split('/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) || year == 0 {
        return None;
    }
    (day >= 1 && day <= days_in_month(month, year)).then_some((month, day, year))
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Field rules of a task before creation
pub fn task(task: &Task) -> ApiResult<()> {
    if task.name.trim().is_empty() {
        return Err(ApiError::Invalid("Task name is required".into()));
    }

    match (task.start_date.is_empty(), task.end_date.is_empty()) {
        (true, true) => Ok(()),
        (false, false) => {
            let start = parse_date(&task.start_date)
                .ok_or_else(|| ApiError::Invalid("Start date must be MM/DD/YYYY".into()))?;
            let end = parse_date(&task.end_date)
                .ok_or_else(|| ApiError::Invalid("End date must be MM/DD/YYYY".into()))?;
            let key = |(m, d, y): (u32, u32, u32)| (y, m, d);
            if key(start) > key(end) {
                return Err(ApiError::Invalid("Start date is after end date".into()));
            }
            Ok(())
        }
        _ => Err(ApiError::Invalid("Start and end date go together".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_credentials() {
        assert!(login_credentials("alice@example.com", "pw").is_ok());
        assert!(login_credentials("a:b", "pw").is_ok());
        assert!(login_credentials("", "pw").is_err());
        assert!(login_credentials("alice", "").is_err());
    }

    #[test]
    fn test_register_credentials() {
        assert!(register_credentials("alice@example.com", "pw").is_ok());
        assert_eq!(
            register_credentials("a:b", "pw"),
            Err(ApiError::Invalid("username may not contain ':'".into()))
        );
        assert!(register_credentials("", "pw").is_err());
        assert!(register_credentials("alice", "").is_err());
    }

    #[test]
    fn test_task_list_name() {
        assert_eq!(task_list_name("  MyTasklist "), Some("MyTasklist"));
        assert_eq!(task_list_name("   "), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("02/29/2024"), Some((2, 29, 2024)));
        assert_eq!(parse_date("02/29/2023"), None);
        assert_eq!(parse_date("13/01/2024"), None);
        assert_eq!(parse_date("2024-01-01"), None);
        assert_eq!(parse_date("1/2/2024/5"), None);
    }

    #[test]
    fn test_task_dates() {
        let mut t = Task { name: "report".into(), ..Default::default() };
        assert!(task(&t).is_ok());

        t.start_date = "01/05/2024".into();
        assert!(task(&t).is_err(), "start without end");

        t.end_date = "01/04/2024".into();
        assert!(task(&t).is_err(), "start after end");

        t.end_date = "12/31/2024".into();
        assert!(task(&t).is_ok());

        t.start_date = "12/31/2023".into();
        t.end_date = "01/01/2024".into();
        assert!(task(&t).is_ok(), "year boundary");
    }

    #[test]
    fn test_task_name_required() {
        let t = Task::default();
        assert_eq!(task(&t), Err(ApiError::Invalid("Task name is required".into())));
    }
}
