use kernel::model::{banner::Banner, id::BannerId};

#[derive(sqlx::FromRow)]
pub struct BannerRow {
    pub banner_id: BannerId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub coupon_code: Option<String>,
    pub discount_rate: Option<i32>,
    pub is_active: bool,
}

impl From<BannerRow> for Banner {
    fn from(value: BannerRow) -> Self {
        let BannerRow {
            banner_id,
            title,
            description,
            image_url,
            coupon_code,
            discount_rate,
            is_active,
        } = value;
        Banner {
            banner_id,
            title,
            description,
            image_url,
            coupon_code,
            discount_rate,
            is_active,
        }
    }
}
