#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;
    use taskmate::api::{auth::Credentials, ApiClient, ApiError, Auth};
    use taskmate::libs::token::{TokenStore, TOKEN_FILE};
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn auth_client(uri: &str) -> (Auth, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = TokenStore::with_path(temp_dir.path().join(TOKEN_FILE));
        (Auth::with_client(ApiClient::with_parts(uri, store)), temp_dir)
    }

    fn auth_response(token: &str, email: &str) -> serde_json::Value {
        json!({
            "access_token": token,
            "token_type": "bearer",
            "user": {"id": "u1", "email": email, "created_at": "2026-08-20T10:00:00Z"}
        })
    }

    #[tokio::test]
    async fn test_signin_stores_token_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signin"))
            .and(body_json(json!({"email": "user@example.com", "password": "password123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_response("jwt.abc", "user@example.com")))
            .mount(&server)
            .await;

        let (mut auth, dir) = auth_client(&server.uri());
        assert!(!auth.is_authenticated());

        let response = auth
            .signin(&Credentials {
                email: "user@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.email, "user@example.com");
        assert_eq!(response.token_type, "bearer");
        assert!(auth.is_authenticated());

        // The session survives process restarts through the cookie file.
        let reloaded = TokenStore::with_path(dir.path().join(TOKEN_FILE));
        assert_eq!(reloaded.get(), Some("jwt.abc"));
    }

    #[tokio::test]
    async fn test_signin_401_surfaces_unauthorized_and_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signin"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})))
            .mount(&server)
            .await;

        let (mut auth, dir) = auth_client(&server.uri());
        let err = auth
            .signin(&Credentials {
                email: "user@example.com".to_string(),
                password: "wrongpassword".to_string(),
            })
            .await
            .unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
        assert!(!auth.is_authenticated());
        assert!(!dir.path().join(TOKEN_FILE).exists());
    }

    #[tokio::test]
    async fn test_signup_auto_logs_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(201).set_body_json(auth_response("jwt.new", "new@example.com")))
            .mount(&server)
            .await;

        let (mut auth, _dir) = auth_client(&server.uri());
        auth.signup(&Credentials {
            email: "new@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_signout_clears_token_even_when_server_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/logout"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TokenStore::with_path(temp_dir.path().join(TOKEN_FILE));
        store.set(Some("jwt.old")).unwrap();
        let mut auth = Auth::with_client(ApiClient::with_parts(&server.uri(), store));
        assert!(auth.is_authenticated());

        // The logout notification failure is swallowed.
        auth.signout().await.unwrap();

        assert!(!auth.is_authenticated());
        assert!(!temp_dir.path().join(TOKEN_FILE).exists());
    }
}
