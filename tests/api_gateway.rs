#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use taskmate::api::{ApiClient, ApiError};
    use taskmate::libs::token::{TokenStore, TOKEN_FILE};
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str, token: Option<&str>) -> (ApiClient, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::with_path(temp_dir.path().join(TOKEN_FILE));
        if let Some(token) = token {
            store.set(Some(token)).unwrap();
        }
        (ApiClient::with_parts(uri, store), temp_dir)
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), Some("tok123"));
        let body: Value = client.get("api/tasks").await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), None);
        let _: Value = client.get("api/tasks").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_error_body_detail_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Title is required"})))
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), Some("tok123"));
        let err = client
            .post::<Value, Value>("api/tasks", Some(&json!({"title": ""})))
            .await
            .unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.detail, "Title is required");
    }

    #[tokio::test]
    async fn test_non_string_detail_maps_to_validation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "detail": [{"loc": ["body", "title"], "msg": "field required", "type": "value_error"}]
            })))
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), Some("tok123"));
        let err = client.post::<Value, Value>("api/tasks", Some(&json!({}))).await.unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_err.detail, "Validation error");
    }

    #[tokio::test]
    async fn test_unparseable_error_body_maps_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), Some("tok123"));
        let err = client.get::<Value>("api/tasks").await.unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.detail, "An error occurred");
    }

    #[tokio::test]
    async fn test_204_no_content_yields_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/t1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (client, _dir) = client(&server.uri(), Some("tok123"));
        let result: Result<(), _> = client.delete("api/tasks/t1").await;
        assert!(result.is_ok());
    }
}
