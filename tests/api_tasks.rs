#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskdeck::api::{ApiError, TaskApi};
    use taskdeck::libs::task::{Task, TaskFilter};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> TaskApi {
        TaskApi::with_base_url(format!("{}/api/tasks", server.uri()))
    }

    fn sample_task(id: Option<i64>, completed: bool) -> Task {
        Task {
            id,
            title: "Water plants".to_string(),
            description: "Balcony only".to_string(),
            priority: "Medium".to_string(),
            due_date: "2026-08-26".to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_filter_query_and_parses_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(query_param("filter", "completed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Water plants", "description": "", "priority": "Low", "due_date": "", "completed": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = api_for(&server).fetch(TaskFilter::Completed).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(1));
        assert!(tasks[0].completed);
    }

    #[tokio::test]
    async fn test_create_posts_body_without_id_and_returns_created() {
        let server = MockServer::start().await;
        let new_task = sample_task(None, false);

        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(json!({
                "title": "Water plants",
                "description": "Balcony only",
                "priority": "Medium",
                "due_date": "2026-08-26",
                "completed": false
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 8,
                "title": "Water plants",
                "description": "Balcony only",
                "priority": "Medium",
                "due_date": "2026-08-26",
                "completed": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = api_for(&server).create(&new_task).await.unwrap();
        assert_eq!(created.id, Some(8));
    }

    #[tokio::test]
    async fn test_update_puts_full_object_to_id_path() {
        let server = MockServer::start().await;
        let task = sample_task(Some(8), true);

        Mock::given(method("PUT"))
            .and(path("/api/tasks/8"))
            .and(body_json(json!({
                "id": 8,
                "title": "Water plants",
                "description": "Balcony only",
                "priority": "Medium",
                "due_date": "2026-08-26",
                "completed": true
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).update(8, &task).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_targets_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).delete(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch(TaskFilter::All).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch(TaskFilter::All).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 1 is never listening
        let api = TaskApi::with_base_url("http://127.0.0.1:1/api/tasks");

        let err = api.fetch(TaskFilter::All).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
