use anyhow::Context as _;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::domain::repository::CdnClient;
use crate::domain::types::CdnFile;
use crate::error::ApiError;

/// Pass-through client for the hosted image CDN (Cloudinary-style API:
/// `POST <base>/auto/upload` multipart, `POST <base>/auto/destroy`).
#[derive(Clone)]
pub struct ReqwestCdnClient {
    http: reqwest::Client,
    base_url: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    format: Option<String>,
    resource_type: Option<String>,
    bytes: Option<i64>,
}

impl ReqwestCdnClient {
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.cdn_base_url.is_none() {
            tracing::warn!("CDN_BASE_URL not set, file uploads disabled");
        }
        Self {
            http: reqwest::Client::new(),
            base_url: config.cdn_base_url.clone(),
            api_key: config.cdn_api_key.clone(),
            api_secret: config.cdn_api_secret.clone(),
        }
    }

    fn base_url(&self) -> Result<&str, ApiError> {
        self.base_url
            .as_deref()
            .ok_or_else(|| ApiError::InvalidState("file uploads are not configured".to_owned()))
    }

    fn auth_form(&self, form: reqwest::multipart::Form) -> reqwest::multipart::Form {
        let mut form = form;
        if let Some(key) = &self.api_key {
            form = form.text("api_key", key.clone());
        }
        if let Some(secret) = &self.api_secret {
            form = form.text("api_secret", secret.clone());
        }
        form
    }
}

impl CdnClient for ReqwestCdnClient {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<CdnFile, ApiError> {
        let url = format!("{}/auto/upload", self.base_url()?);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = self.auth_form(reqwest::multipart::Form::new().part("file", part));

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("cdn upload request")?
            .error_for_status()
            .context("cdn upload status")?;
        let body: UploadResponse = resp.json().await.context("cdn upload body")?;

        Ok(CdnFile {
            url: body.secure_url,
            public_id: body.public_id,
            format: body.format,
            resource_type: body.resource_type,
            bytes: body.bytes,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/auto/destroy", self.base_url()?);
        let form = self.auth_form(
            reqwest::multipart::Form::new().text("public_id", public_id.to_owned()),
        );
        self.http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("cdn destroy request")?
            .error_for_status()
            .context("cdn destroy status")?;
        Ok(())
    }
}
