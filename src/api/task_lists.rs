//! Task List Endpoints

use super::{decode, name_segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{ApiMessage, CreatedTaskList, NewTaskList, TaskListsResponse};

pub const TASK_LISTS: &str = "/v1/task_lists";
pub const CREATE: &str = "/v1/task_lists/create";

pub fn task_list_path(name: &str) -> ApiResult<String> {
    Ok(format!("{}/{}", TASK_LISTS, name_segment(name)?))
}

impl ApiClient {
    /// Names of the caller's lists; `None` when the server sends `data: null`
    pub async fn list_task_lists(&self, auth: &str) -> ApiResult<Option<Vec<String>>> {
        let body = self.send("list task lists", self.get(TASK_LISTS, auth)).await?;
        let resp: TaskListsResponse = decode(&body)?;
        Ok(resp.data)
    }

    /// Create a private list and return the name the server stored
    pub async fn create_task_list(&self, auth: &str, name: &str) -> ApiResult<String> {
        let req = self.post(CREATE, auth).json(&NewTaskList::private(name));
        let body = self.send("create task list", req).await?;
        let created: CreatedTaskList = decode(&body)?;
        Ok(created.name)
    }

    pub async fn delete_task_list(&self, auth: &str, name: &str) -> ApiResult<ApiMessage> {
        let path = task_list_path(name)?;
        let body = self.send("delete task list", self.delete(&path, auth)).await?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::ApiConfig;
    use crate::error::ApiError;

    /// Path the browser would actually request for `name`
    fn resolved_path(name: &str) -> ApiResult<String> {
        let url = ApiConfig::default().url(&task_list_path(name)?);
        Ok(reqwest::Url::parse(&url).unwrap().path().to_string())
    }

    #[test]
    fn test_task_list_path() {
        assert_eq!(task_list_path("work").unwrap(), "/v1/task_lists/work");
        assert_eq!(task_list_path("to do/later").unwrap(), "/v1/task_lists/to%20do%2Flater");
    }

    #[test]
    fn test_names_stay_inside_task_lists() {
        assert_eq!(resolved_path("a\\b").unwrap(), "/v1/task_lists/a%5Cb");
        assert_eq!(resolved_path("x/../..").unwrap(), "/v1/task_lists/x%2F..%2F..");
        assert_eq!(resolved_path("..").unwrap_err(), ApiError::Invalid("\"..\" is not a valid name".into()));
        assert!(resolved_path(".").is_err());
    }
}
