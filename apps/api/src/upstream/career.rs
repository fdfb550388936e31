use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::{check, read_json, UpstreamClient, UpstreamError, Upload};

#[derive(Deserialize)]
struct CareerPathResponse {
    #[serde(default)]
    career_path: Option<String>,
}

#[derive(Deserialize)]
struct EvaluationResponse {
    #[serde(default)]
    response: Option<String>,
}

fn file_part(upload: Upload) -> Result<Part, UpstreamError> {
    Ok(Part::bytes(upload.bytes.to_vec())
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?)
}

fn non_blank(text: Option<String>, source: &'static str) -> Result<String, UpstreamError> {
    text.filter(|t| !t.trim().is_empty())
        .ok_or(UpstreamError::EmptyContent(source))
}

impl UpstreamClient {
    /// POST /career-recommend/ with the resume as `file`. Returns the raw
    /// narrative; parsing happens in the narrative module.
    pub async fn career_narrative(&self, resume: Upload) -> Result<String, UpstreamError> {
        let url = Self::url(&self.endpoints.career, &["career-recommend", ""])?;
        let form = Form::new().part("file", file_part(resume)?);
        let response = self.client.post(url).multipart(form).send().await?;
        let response = check(response, "Failed to get career recommendations").await?;
        let body: CareerPathResponse = read_json(response).await?;
        non_blank(body.career_path, "career recommendation service")
    }

    /// POST /percentage_match with `resume` and `job_description`.
    pub async fn evaluation_narrative(
        &self,
        resume: Upload,
        job_description: &str,
    ) -> Result<String, UpstreamError> {
        let url = Self::url(&self.endpoints.evaluation, &["percentage_match"])?;
        let form = Form::new()
            .part("resume", file_part(resume)?)
            .text("job_description", job_description.to_string());
        let response = self.client.post(url).multipart(form).send().await?;
        let response = check(response, "Failed to evaluate resume").await?;
        let body: EvaluationResponse = read_json(response).await?;
        non_blank(body.response, "resume evaluation service")
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use mockito::{Matcher, Server};

    use super::*;
    use crate::upstream::tests::client_for;

    fn pdf() -> Upload {
        Upload {
            file_name: "resume.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4 fake"),
        }
    }

    #[tokio::test]
    async fn test_career_narrative_returns_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/career-recommend/")
            .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
            .match_body(Matcher::Regex(r#"name="file"; filename="resume.pdf""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"career_path":"A career path in **Data Science** suits you."}"#)
            .create_async()
            .await;

        let text = client_for(&server.url()).career_narrative(pdf()).await.unwrap();
        assert!(text.contains("Data Science"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_career_error_payload_is_not_parsed() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/career-recommend/")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"vector store unavailable"}"#)
            .create_async()
            .await;

        let err = client_for(&server.url()).career_narrative(pdf()).await.unwrap_err();
        assert!(matches!(
            err,
            UpstreamError::Api { status: 500, ref message } if message == "vector store unavailable"
        ));
    }

    #[tokio::test]
    async fn test_blank_career_path_is_empty_content() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/career-recommend/")
            .with_status(200)
            .with_body(r#"{"career_path":"  "}"#)
            .create_async()
            .await;

        let err = client_for(&server.url()).career_narrative(pdf()).await.unwrap_err();
        assert!(matches!(err, UpstreamError::EmptyContent(_)));
    }

    #[tokio::test]
    async fn test_evaluation_sends_job_description() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/percentage_match")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="resume""#.to_string()),
                Matcher::Regex(r#"name="job_description""#.to_string()),
                Matcher::Regex("Senior Rust engineer".to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"response":"Percentage Match: 81%"}"#)
            .create_async()
            .await;

        let text = client_for(&server.url())
            .evaluation_narrative(pdf(), "Senior Rust engineer")
            .await
            .unwrap();
        assert_eq!(text, "Percentage Match: 81%");
        mock.assert_async().await;
    }
}
