use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;

use crate::config;

pub const FORM_NAME_FIELD: &str = "form-name";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("form host answered with status {0}")]
    Status(u16),
}

/// One form post for the static form host: a `form-name` discriminator
/// followed by the fields in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSubmission {
    form_name: &'static str,
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new(form_name: &'static str) -> Self {
        FormSubmission {
            form_name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn form_name(&self) -> &'static str {
        self.form_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        std::iter::once((FORM_NAME_FIELD, self.form_name))
            .chain(self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Posts the submission. The response body is ignored; a transport error or
/// a non-2xx status is a failure.
pub async fn submit(submission: &FormSubmission) -> Result<(), SubmitError> {
    info!("Submitting {} form", submission.form_name());
    let response = Request::post(config::get_form_endpoint())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(submission.encode())
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        let err = SubmitError::Status(response.status());
        error!("{} form rejected: {}", submission.form_name(), err);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_name_comes_first() {
        let body = FormSubmission::new("contact")
            .field("name", "Ada")
            .field("email", "ada@example.com")
            .encode();
        assert_eq!(body, "form-name=contact&name=Ada&email=ada%40example.com");
    }

    #[test]
    fn values_are_percent_encoded() {
        let body = FormSubmission::new("briefs").field("budget", "< $1k & more").encode();
        assert_eq!(body, "form-name=briefs&budget=%3C%20%241k%20%26%20more");
    }

    #[test]
    fn lookup_by_key() {
        let submission = FormSubmission::new("briefs").field("service_id", "ui-ux");
        assert_eq!(submission.get("service_id"), Some("ui-ux"));
        assert_eq!(submission.get("phone"), None);
        assert_eq!(submission.form_name(), "briefs");
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(SubmitError::Status(500).to_string(), "form host answered with status 500");
        assert_eq!(
            SubmitError::Network("offline".into()).to_string(),
            "request could not be sent: offline"
        );
    }
}
