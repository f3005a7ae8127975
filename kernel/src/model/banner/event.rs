use crate::model::id::BannerId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBanner {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub coupon_code: Option<String>,
    pub discount_rate: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug)]
pub struct UpdateBanner {
    pub banner_id: BannerId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_rate: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, new)]
pub struct DeleteBanner {
    pub banner_id: BannerId,
}
