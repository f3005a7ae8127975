use derive_new::new;
use garde::Validate;
use kernel::model::{
    banner::{
        event::{CreateBanner, UpdateBanner},
        Banner,
    },
    id::BannerId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(length(min = 1))]
    pub image_url: String,
    #[garde(skip)]
    pub coupon_code: Option<String>,
    #[garde(inner(range(min = 0, max = 100)))]
    pub discount_rate: Option<i32>,
    #[garde(skip)]
    #[serde(default)]
    pub is_active: bool,
}

impl From<CreateBannerRequest> for CreateBanner {
    fn from(value: CreateBannerRequest) -> Self {
        let CreateBannerRequest {
            title,
            description,
            image_url,
            coupon_code,
            discount_rate,
            is_active,
        } = value;
        Self {
            title,
            description,
            image_url,
            coupon_code,
            discount_rate,
            is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerRequest {
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub image_url: Option<String>,
    #[garde(skip)]
    pub coupon_code: Option<String>,
    #[garde(inner(range(min = 0, max = 100)))]
    pub discount_rate: Option<i32>,
    #[garde(skip)]
    pub is_active: Option<bool>,
}

#[derive(new)]
pub struct UpdateBannerRequestWithBannerId(BannerId, UpdateBannerRequest);

impl From<UpdateBannerRequestWithBannerId> for UpdateBanner {
    fn from(value: UpdateBannerRequestWithBannerId) -> Self {
        let UpdateBannerRequestWithBannerId(
            banner_id,
            UpdateBannerRequest {
                title,
                description,
                image_url,
                coupon_code,
                discount_rate,
                is_active,
            },
        ) = value;
        UpdateBanner {
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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannersResponse {
    pub items: Vec<BannerResponse>,
}

impl From<Vec<Banner>> for BannersResponse {
    fn from(value: Vec<Banner>) -> Self {
        Self {
            items: value.into_iter().map(BannerResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub banner_id: BannerId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub coupon_code: Option<String>,
    pub discount_rate: Option<i32>,
    pub is_active: bool,
}

impl From<Banner> for BannerResponse {
    fn from(value: Banner) -> Self {
        let Banner {
            banner_id,
            title,
            description,
            image_url,
            coupon_code,
            discount_rate,
            is_active,
        } = value;
        Self {
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
