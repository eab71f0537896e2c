use crate::{
    dto::products::{DimensionsRequest, DimensionsResponse},
    entity::Dimensions,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct DimensionsMapper;

impl DimensionsMapper {
    pub fn to_entity(&self, request: Option<&DimensionsRequest>) -> Option<Dimensions> {
        let request = request?;

        Some(Dimensions {
            width: request.width,
            height: request.height,
            depth: request.depth,
        })
    }

    pub fn to_response(&self, dimensions: Option<&Dimensions>) -> Option<DimensionsResponse> {
        let dimensions = dimensions?;

        Some(DimensionsResponse {
            width: dimensions.width,
            height: dimensions.height,
            depth: dimensions.depth,
        })
    }
}
