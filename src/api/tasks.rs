//! Task Endpoints
//!
//! Tasks live under `/v1/task_lists/{list}/tasks/`.

use super::task_lists::task_list_path;
use super::{decode, name_segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{ApiMessage, Task, TaskResponse};

pub fn create_task_path(list: &str) -> ApiResult<String> {
    Ok(format!("{}/tasks/create", task_list_path(list)?))
}

pub fn task_path(list: &str, task: &str) -> ApiResult<String> {
    Ok(format!("{}/tasks/{}", task_list_path(list)?, name_segment(task)?))
}

impl ApiClient {
    pub async fn create_task(&self, auth: &str, list: &str, task: &Task) -> ApiResult<ApiMessage> {
        let req = self.post(&create_task_path(list)?, auth).json(task);
        let body = self.send("create task", req).await?;
        decode(&body)
    }

    pub async fn get_task(&self, auth: &str, list: &str, task: &str) -> ApiResult<Task> {
        let body = self.send("get task", self.get(&task_path(list, task)?, auth)).await?;
        let resp: TaskResponse = decode(&body)?;
        Ok(resp.into_task())
    }
}
