use crate::model::offering::{
    CreateTestRequest, ListTestsQuery, SlotsRemainingResponse, TestResponse, TestsResponse,
    UpdateTestRequest, UpdateTestRequestWithTestId,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{id::TestId, offering::event::DeleteTestOffering};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_test(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTestRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()?;

    let test_id = registry.offering_repository().create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "testId": test_id })),
    ))
}

pub async fn show_test_list(
    Query(query): Query<ListTestsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TestsResponse>> {
    registry
        .offering_repository()
        .find_all(query.into())
        .await
        .map(TestsResponse::from)
        .map(Json)
}

pub async fn show_test(
    Path(test_id): Path<TestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TestResponse>> {
    registry
        .offering_repository()
        .find_by_id(test_id)
        .await?
        .map(TestResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "検査メニュー（{}）が見つかりませんでした。",
                test_id
            ))
        })
}

// 旧フロント向けの直接デクリメント。
// 予約フローと同じ SlotLedger::reserve に委譲し、枠の更新経路を一本化している
pub async fn reserve_slot(
    Path(test_id): Path<TestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotsRemainingResponse>> {
    let slots = registry.slot_ledger().reserve(test_id).await?;
    Ok(Json(SlotsRemainingResponse { slots }))
}

pub async fn update_test(
    Path(test_id): Path<TestId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTestRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .offering_repository()
        .update(UpdateTestRequestWithTestId::new(test_id, req).into())
        .await?;
    Ok(StatusCode::OK)
}

pub async fn delete_test(
    Path(test_id): Path<TestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .offering_repository()
        .delete(DeleteTestOffering::new(test_id))
        .await?;
    Ok(StatusCode::OK)
}
