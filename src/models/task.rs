use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    #[serde(default)]
    pub task_description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: String,
    pub user_id: i64,
    #[serde(default)]
    pub task_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_round_trips_camel_case() {
        let json = r#"{
            "id": 9,
            "taskName": "Ship release",
            "taskDescription": "Cut and tag",
            "createdAt": "2024-05-01T10:00:00Z",
            "dueDate": "2024-05-08T10:00:00Z",
            "status": "IN_PROGRESS",
            "userId": 4,
            "taskType": "TEAM"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.task_name, "Ship release");
        assert_eq!(task.user_id, 4);

        let out = serde_json::to_value(&task).unwrap();
        assert_eq!(out["taskName"], "Ship release");
        assert_eq!(out["dueDate"], "2024-05-08T10:00:00Z");
    }

    #[test]
    fn test_personal_task_without_optionals() {
        let json = r#"{
            "id": 12,
            "taskName": "Water plants",
            "createdAt": "2024-05-01T10:00:00Z",
            "status": "TODO",
            "userId": 4
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.task_description.is_none());
        assert!(task.due_date.is_none());
        assert!(task.task_type.is_none());
    }
}
