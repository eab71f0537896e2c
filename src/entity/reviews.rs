use chrono::NaiveDateTime;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Review {
    pub id: Option<i64>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
}
