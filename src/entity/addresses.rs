use super::users::User;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub id: Option<i64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub user: Option<User>,
}

impl Address {
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
