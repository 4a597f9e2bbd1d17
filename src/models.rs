//! Wire Models
//!
//! Request and response bodies of the task-list API.

use serde::{Deserialize, Serialize};

/// Envelope every endpoint answers with
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub msg: Option<String>,
    pub token: String,
}

/// `GET /v1/task_lists`; `data` is `null` for a user with no lists
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TaskListsResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTaskList<'a> {
    pub name: &'a str,
    pub visibility: &'a str,
}

impl<'a> NewTaskList<'a> {
    pub fn private(name: &'a str) -> Self {
        Self { name, visibility: "private" }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedTaskList {
    pub name: String,
}

/// Register body; the display name is optional
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RegisterBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Task priority; absent means none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriorityRepr", into = "u8")]
pub enum Priority {
    VeryUrgent,
    Urgent,
    Normal,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::VeryUrgent, Priority::Urgent, Priority::Normal];

    pub fn label(self) -> &'static str {
        match self {
            Priority::VeryUrgent => "Very urgent",
            Priority::Urgent => "Urgent",
            Priority::Normal => "Normal",
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        match p {
            Priority::VeryUrgent => 1,
            Priority::Urgent => 2,
            Priority::Normal => 3,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Priority::VeryUrgent),
            2 => Ok(Priority::Urgent),
            3 => Ok(Priority::Normal),
            other => Err(format!("unknown priority {}", other)),
        }
    }
}

/// Priority as it arrives: the server stores form values, so both `2`
/// and `"2"` show up
#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Num(u8),
    Text(String),
}

impl TryFrom<PriorityRepr> for Priority {
    type Error = String;

    fn try_from(repr: PriorityRepr) -> Result<Self, Self::Error> {
        match repr {
            PriorityRepr::Num(v) => Priority::try_from(v),
            PriorityRepr::Text(s) => {
                let v: u8 = s.trim().parse().map_err(|_| format!("unknown priority {:?}", s))?;
                Priority::try_from(v)
            }
        }
    }
}

/// Task progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "To Do")]
    ToDo,
    Doing,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::ToDo, Status::Doing, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::Doing => "Doing",
            Status::Done => "Done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Status::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// A task inside a task list. Empty fields are left off the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// `GET /v1/task_lists/{list}/tasks/{task}` may wrap the task or return it bare
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TaskResponse {
    Wrapped { data: Task },
    Bare(Task),
}

impl TaskResponse {
    pub fn into_task(self) -> Task {
        match self {
            TaskResponse::Wrapped { data } => data,
            TaskResponse::Bare(task) => task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_lists_null_data() {
        let resp: TaskListsResponse = serde_json::from_str(r#"{"msg":"success","data":null}"#).unwrap();
        assert_eq!(resp.data, None);

        let resp: TaskListsResponse = serde_json::from_str(r#"{"msg":"success"}"#).unwrap();
        assert_eq!(resp.data, None);

        let resp: TaskListsResponse = serde_json::from_str(r#"{"data":["work","home"]}"#).unwrap();
        assert_eq!(resp.data, Some(vec!["work".to_string(), "home".to_string()]));
    }

    #[test]
    fn test_login_response_requires_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"msg":"success","token":"t0k"}"#).unwrap();
        assert_eq!(resp.token, "t0k");
        assert!(serde_json::from_str::<LoginResponse>(r#"{"msg":"failed user login"}"#).is_err());
    }

    #[test]
    fn test_new_task_list_body() {
        let body = serde_json::to_value(NewTaskList::private("MyTasklist")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "MyTasklist", "visibility": "private"}));
    }

    #[test]
    fn test_register_body_omits_missing_name() {
        assert_eq!(serde_json::to_string(&RegisterBody::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&RegisterBody { name: Some("Alice") }).unwrap(),
            r#"{"name":"Alice"}"#
        );
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            name: "buy milk".into(),
            start_date: "01/02/2024".into(),
            end_date: "01/03/2024".into(),
            priority: Some(Priority::Urgent),
            status: Some(Status::ToDo),
            ..Default::default()
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "buy milk",
                "startDate": "01/02/2024",
                "endDate": "01/03/2024",
                "priority": 2,
                "status": "To Do"
            })
        );
    }

    #[test]
    fn test_task_response_shapes() {
        let wrapped: TaskResponse =
            serde_json::from_str(r#"{"msg":"success","data":{"name":"a","status":"Done"}}"#).unwrap();
        assert_eq!(wrapped.into_task().status, Some(Status::Done));

        let bare: TaskResponse = serde_json::from_str(r#"{"name":"b","priority":3}"#).unwrap();
        assert_eq!(bare.into_task().priority, Some(Priority::Normal));

        assert!(serde_json::from_str::<Task>(r#"{"name":"c","priority":7}"#).is_err());
    }

    #[test]
    fn test_priority_sent_as_text() {
        let task: Task = serde_json::from_str(r#"{"name":"b","priority":"2"}"#).unwrap();
        assert_eq!(task.priority, Some(Priority::Urgent));

        let bare: TaskResponse = serde_json::from_str(r#"{"name":"b","priority":"1"}"#).unwrap();
        assert_eq!(bare.into_task().priority, Some(Priority::VeryUrgent));

        assert!(serde_json::from_str::<Task>(r#"{"name":"c","priority":"high"}"#).is_err());
    }
}
