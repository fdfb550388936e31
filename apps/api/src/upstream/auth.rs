use serde::Serialize;
use serde_json::Value;

use super::{body_message, check, read_json, UpstreamClient, UpstreamError};
use crate::models::profile::{AuthSession, ProfileSection, UserProfile};
use crate::session::Session;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl UpstreamClient {
    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, UpstreamError> {
        let url = Self::url(&self.endpoints.auth, &["api", "auth", "login"])?;
        let response = self
            .client
            .post(url)
            .json(&Credentials { email, password })
            .send()
            .await?;
        let response = check(response, "Login failed. Please try again.").await?;
        read_json(response).await
    }

    /// POST /api/auth/register. Returns the service's confirmation text.
    pub async fn register(&self, profile: &UserProfile, password: &str) -> Result<String, UpstreamError> {
        let mut body = serde_json::to_value(profile)?;
        if let Value::Object(map) = &mut body {
            map.insert("password".to_string(), Value::String(password.to_string()));
        }
        let url = Self::url(&self.endpoints.auth, &["api", "auth", "register"])?;
        let response = self.client.post(url).json(&body).send().await?;
        let response = check(response, "Registration failed. Please try again.").await?;
        let text = response.text().await?;
        Ok(body_message(&text).unwrap_or_else(|| "User registered successfully!".to_string()))
    }

    /// POST /api/auth/fetch-profile
    pub async fn fetch_profile(&self, email: &str, password: &str) -> Result<UserProfile, UpstreamError> {
        let url = Self::url(&self.endpoints.auth, &["api", "auth", "fetch-profile"])?;
        let response = self
            .client
            .post(url)
            .json(&Credentials { email, password })
            .send()
            .await?;
        let response = check(response, "Failed to fetch profile").await?;
        read_json(response).await
    }

    /// PUT /api/auth/profile/{email}/{section}
    pub async fn update_profile_section(
        &self,
        session: &Session,
        email: &str,
        section: ProfileSection,
        profile: &UserProfile,
    ) -> Result<String, UpstreamError> {
        let url = Self::url(
            &self.endpoints.auth,
            &["api", "auth", "profile", email, section.path_segment()],
        )?;
        let response = self
            .client
            .put(url)
            .bearer_auth(session.token())
            .json(profile)
            .send()
            .await?;
        let response = check(response, "Failed to update profile").await?;
        let text = response.text().await?;
        Ok(body_message(&text).unwrap_or_else(|| "Profile updated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::upstream::tests::client_for;

    #[tokio::test]
    async fn test_login_returns_session() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(json!({"email": "ada@x.io", "password": "pw"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Login Successful","token":"jwt-123"}"#)
            .create_async()
            .await;

        let session = client_for(&server.url()).login("ada@x.io", "pw").await.unwrap();
        assert_eq!(session.token, "jwt-123");
        assert_eq!(session.message.as_deref(), Some("Login Successful"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_failure_carries_plain_text_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body("Invalid credentials!")
            .create_async()
            .await;

        let err = client_for(&server.url()).login("ada@x.io", "bad").await.unwrap_err();
        match err {
            UpstreamError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials!");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_failure_without_body_uses_fallback() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server.url()).login("a", "b").await.unwrap_err();
        assert!(err.to_string().contains("Login failed. Please try again."));
    }

    #[tokio::test]
    async fn test_register_sends_profile_with_password() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::PartialJson(json!({
                "email": "ada@x.io",
                "fullName": "Ada",
                "password": "pw"
            })))
            .with_status(201)
            .with_body("User registered successfully!")
            .create_async()
            .await;

        let profile = UserProfile {
            email: "ada@x.io".to_string(),
            full_name: Some("Ada".to_string()),
            ..Default::default()
        };
        let message = client_for(&server.url()).register(&profile, "pw").await.unwrap();
        assert_eq!(message, "User registered successfully!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_reads_json_or_empty_confirmation() {
        let mut server = Server::new_async().await;
        let profile = UserProfile {
            email: "ada@x.io".to_string(),
            ..Default::default()
        };

        let json_mock = server
            .mock("POST", "/api/auth/register")
            .with_status(201)
            .with_body(r#"{"message":"Welcome aboard"}"#)
            .create_async()
            .await;
        let message = client_for(&server.url()).register(&profile, "pw").await.unwrap();
        assert_eq!(message, "Welcome aboard");
        json_mock.remove_async().await;

        server
            .mock("POST", "/api/auth/register")
            .with_status(201)
            .create_async()
            .await;
        let message = client_for(&server.url()).register(&profile, "pw").await.unwrap();
        assert_eq!(message, "User registered successfully!");
    }

    #[tokio::test]
    async fn test_update_section_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/auth/profile/ada@x.io/personal-info")
            .match_header("authorization", "Bearer jwt-123")
            .with_status(200)
            .with_body("Personal info updated")
            .create_async()
            .await;

        let profile = UserProfile {
            email: "ada@x.io".to_string(),
            phone: Some("555".to_string()),
            ..Default::default()
        };
        let message = client_for(&server.url())
            .update_profile_section(
                &Session::new("jwt-123"),
                "ada@x.io",
                ProfileSection::PersonalInfo,
                &profile,
            )
            .await
            .unwrap();
        assert_eq!(message, "Personal info updated");
        mock.assert_async().await;
    }
}
