use chrono::NaiveDateTime;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Meta {
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
}
