use crate::{dto::products::MetaResponse, entity::Meta};

use super::render_timestamp;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetaMapper;

impl MetaMapper {
    pub fn to_response(&self, meta: Option<&Meta>) -> Option<MetaResponse> {
        let meta = meta?;

        Some(MetaResponse {
            created_at: meta.created_at.as_ref().map(render_timestamp),
            updated_at: meta.updated_at.as_ref().map(render_timestamp),
            barcode: meta.barcode.clone(),
            qr_code: meta.qr_code.clone(),
        })
    }
}
