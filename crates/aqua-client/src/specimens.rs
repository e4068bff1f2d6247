//! Specimen resource service.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use aqua_core::cursor::PageCursor;
use aqua_core::models::{Page, Specimen, SpecimenFilter, SpecimenInput};
use aqua_core::{Error, Result, SpecimenApi};

use crate::http::ApiClient;

/// CRUD against `/algae/`.
///
/// Create and update choose their encoding from the payload: multipart when
/// an image attachment is present, JSON otherwise.
pub struct SpecimenService {
    api: Arc<ApiClient>,
}

impl SpecimenService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn item_path(id: i64) -> String {
        format!("/algae/{}/", id)
    }

    /// Build the multipart form for an input with an attachment.
    ///
    /// `location_ids` is a repeated field, one part per id.
    fn multipart_form(input: &SpecimenInput) -> Result<Form> {
        let mut form = Form::new().text("scientific_name", input.scientific_name.clone());
        let optional = [
            ("common_name", &input.common_name),
            ("class_name", &input.class_name),
            ("order", &input.order),
            ("family", &input.family),
            ("genus", &input.genus),
            ("species", &input.species),
            ("description", &input.description),
            ("collector", &input.collector),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                form = form.text(field, value.clone());
            }
        }
        for id in &input.location_ids {
            form = form.text("location_ids", id.to_string());
        }
        if let Some(date) = input.collection_date {
            form = form.text("collection_date", date.to_string());
        }
        if let Some(attachment) = &input.image {
            let part = Part::bytes(attachment.bytes.clone())
                .file_name(attachment.file_name.clone())
                .mime_str(&attachment.mime_type)
                .map_err(|e| Error::InvalidInput(format!("invalid image MIME type: {}", e)))?;
            form = form.part("image", part);
        }
        Ok(form)
    }

    async fn send(&self, id: Option<i64>, input: &SpecimenInput) -> Result<Specimen> {
        input.validate()?;
        match (id, input.has_image()) {
            (None, true) => {
                self.api
                    .post_multipart("/algae/", Self::multipart_form(input)?)
                    .await
            }
            (None, false) => self.api.post_json("/algae/", input).await,
            (Some(id), true) => {
                self.api
                    .put_multipart(&Self::item_path(id), Self::multipart_form(input)?)
                    .await
            }
            (Some(id), false) => self.api.put_json(&Self::item_path(id), input).await,
        }
    }
}

#[async_trait]
impl SpecimenApi for SpecimenService {
    #[instrument(skip(self, filter), fields(subsystem = "client", component = "specimens", op = "list"))]
    async fn list(
        &self,
        filter: &SpecimenFilter,
        cursor: Option<PageCursor>,
    ) -> Result<Page<Specimen>> {
        let start = Instant::now();
        let mut query = filter.query_pairs();
        if let Some(cursor) = cursor {
            query.push(("page", cursor.page().to_string()));
        }
        let page: Page<Specimen> = self.api.get_json("/algae/", &query).await?;
        debug!(
            result_count = page.results.len(),
            total = page.count,
            duration_ms = start.elapsed().as_millis() as u64,
            "Specimen list fetched"
        );
        Ok(page)
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "specimens", op = "get"))]
    async fn get(&self, id: i64) -> Result<Specimen> {
        self.api.get_json(&Self::item_path(id), &[]).await
    }

    #[instrument(skip(self, input), fields(subsystem = "client", component = "specimens", op = "create", multipart = input.has_image()))]
    async fn create(&self, input: &SpecimenInput) -> Result<Specimen> {
        self.send(None, input).await
    }

    #[instrument(skip(self, input), fields(subsystem = "client", component = "specimens", op = "update", multipart = input.has_image()))]
    async fn update(&self, id: i64, input: &SpecimenInput) -> Result<Specimen> {
        self.send(Some(id), input).await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "specimens", op = "delete"))]
    async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&Self::item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_core::models::ImageAttachment;

    fn input_with_image() -> SpecimenInput {
        SpecimenInput {
            scientific_name: "Ulva lactuca".to_string(),
            location_ids: vec![1, 2],
            image: Some(ImageAttachment {
                file_name: "thallus.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                bytes: vec![0xFF, 0xD8],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_item_path() {
        assert_eq!(SpecimenService::item_path(42), "/algae/42/");
    }

    #[test]
    fn test_multipart_form_builds_for_image_input() {
        assert!(SpecimenService::multipart_form(&input_with_image()).is_ok());
    }

    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let mut input = input_with_image();
        input.image.as_mut().unwrap().mime_type = "not a mime".to_string();
        assert!(matches!(
            SpecimenService::multipart_form(&input),
            Err(Error::InvalidInput(_))
        ));
    }
}
