use serde::Deserialize;

/// Body of `POST /tasks` and `PUT /tasks/:id`. Fields are checked by the service.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
}
