use crate::error::{ApiError, Result};
use serde::Serialize;
use serde_json::Value;

/// A file attached to a multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    /// Form field the file is sent under (e.g. `image`, `logo`)
    pub field: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk into an upload
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read upload {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(field, file_name, bytes))
    }
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text(String),
    File(FileUpload),
}

/// Multipart form payload, kept independent of the HTTP stack until sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    fields: Vec<(String, FormField)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormField::Text(value.into())));
        self
    }

    pub fn file(mut self, upload: FileUpload) -> Self {
        self.fields.push((upload.field.clone(), FormField::File(upload)));
        self
    }

    /// Flatten a serializable entity into text fields.
    ///
    /// Strings go in as-is, numbers and booleans as their display form,
    /// arrays and objects as JSON text. Nulls are skipped.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Request(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ApiError::Request("multipart payload must serialize to an object".into()));
        };

        let mut form = Self::new();
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            form = form.text(key, text);
        }
        Ok(form)
    }

    pub fn fields(&self) -> &[(String, FormField)] {
        &self.fields
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(key, field)| match field {
            FormField::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_files(&self) -> bool {
        self.fields.iter().any(|(_, f)| matches!(f, FormField::File(_)))
    }

    pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, field) in self.fields {
            form = match field {
                FormField::Text(text) => form.text(name, text),
                FormField::File(upload) => {
                    let mut part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
                    if let Some(mime) = upload.mime {
                        part = part
                            .mime_str(&mime)
                            .map_err(|e| ApiError::Request(format!("bad mime type {mime:?}: {e}")))?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Request body: JSON or multipart, chosen by type
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    /// JSON when there is nothing to upload, multipart with the entity's
    /// fields plus the files otherwise
    pub fn for_entity<T: Serialize>(value: &T, uploads: &[FileUpload]) -> Result<Self> {
        if uploads.is_empty() {
            return Self::json(value);
        }

        let form = uploads
            .iter()
            .cloned()
            .fold(MultipartForm::from_serialize(value)?, MultipartForm::file);
        Ok(RequestBody::Multipart(form))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

impl From<MultipartForm> for RequestBody {
    fn from(form: MultipartForm) -> Self {
        RequestBody::Multipart(form)
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}
