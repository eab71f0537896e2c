use crate::{
    dto::categories::{CategoryRequest, CategoryResponse},
    entity::Category,
};

#[derive(Debug, Clone)]
pub struct CategoryMapper {
    url_prefix: String,
}

impl CategoryMapper {
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
        }
    }

    pub fn to_entity(&self, request: Option<&CategoryRequest>) -> Option<Category> {
        let request = request?;

        Some(Category {
            id: None,
            slug: request.slug.clone(),
            name: request.name.clone(),
        })
    }

    pub fn to_response(&self, category: Option<&Category>) -> Option<CategoryResponse> {
        category.map(|category| self.category_response(category))
    }

    pub fn to_response_list(&self, categories: Option<&[Category]>) -> Option<Vec<CategoryResponse>> {
        categories.map(|categories| {
            categories
                .iter()
                .map(|category| self.category_response(category))
                .collect()
        })
    }

    fn category_response(&self, category: &Category) -> CategoryResponse {
        CategoryResponse {
            id: category.id,
            slug: category.slug.clone(),
            name: category.name.clone(),
            url: category
                .slug
                .as_ref()
                .map(|slug| format!("{}/{}", self.url_prefix, slug)),
        }
    }
}

impl Default for CategoryMapper {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CATEGORY_URL_PREFIX)
    }
}
