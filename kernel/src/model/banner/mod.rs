use crate::model::id::BannerId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Banner {
    pub banner_id: BannerId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub coupon_code: Option<String>,
    pub discount_rate: Option<i32>,
    pub is_active: bool,
}
