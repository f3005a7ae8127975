use crate::model::banner::{
    BannerResponse, BannersResponse, CreateBannerRequest, UpdateBannerRequest,
    UpdateBannerRequestWithBannerId,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{banner::event::DeleteBanner, id::BannerId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_banner(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBannerRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()?;

    let banner_id = registry.banner_repository().create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "bannerId": banner_id })),
    ))
}

pub async fn show_banner_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BannersResponse>> {
    registry
        .banner_repository()
        .find_all()
        .await
        .map(BannersResponse::from)
        .map(Json)
}

pub async fn show_active_banner(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BannerResponse>> {
    registry
        .banner_repository()
        .find_active()
        .await?
        .map(BannerResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound("掲載中のバナーが見つかりませんでした。".into())
        })
}

pub async fn update_banner(
    Path(banner_id): Path<BannerId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBannerRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .banner_repository()
        .update(UpdateBannerRequestWithBannerId::new(banner_id, req).into())
        .await?;
    Ok(StatusCode::OK)
}

pub async fn delete_banner(
    Path(banner_id): Path<BannerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .banner_repository()
        .delete(DeleteBanner::new(banner_id))
        .await?;
    Ok(StatusCode::OK)
}
