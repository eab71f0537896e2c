use crate::{dto::products::ReviewResponse, entity::Review};

use super::render_timestamp;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReviewMapper;

impl ReviewMapper {
    pub fn to_response(&self, review: Option<&Review>) -> Option<ReviewResponse> {
        review.map(review_response)
    }

    pub fn to_response_list(&self, reviews: Option<&[Review]>) -> Option<Vec<ReviewResponse>> {
        reviews.map(|reviews| reviews.iter().map(review_response).collect())
    }
}

fn review_response(review: &Review) -> ReviewResponse {
    ReviewResponse {
        rating: review.rating,
        comment: review.comment.clone(),
        date: review.date.as_ref().map(render_timestamp),
        reviewer_name: review.reviewer_name.clone(),
        reviewer_email: review.reviewer_email.clone(),
    }
}
