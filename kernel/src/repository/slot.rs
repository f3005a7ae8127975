use crate::model::id::TestId;
use async_trait::async_trait;
use shared::error::AppResult;

/// 検査メニューの空き枠（slots）の唯一の更新経路。
///
/// どの経路からの操作であっても、
/// 「slots = 元の定員 −（pending / complete な予約数）」
/// が常に成り立つことをこのコンポーネントが保証する。
#[async_trait]
pub trait SlotLedger: Send + Sync {
    /// 枠を 1 つ確保し、残数を返す。
    /// slots == 0 なら CapacityExhausted、メニューが無ければ EntityNotFound。
    async fn reserve(&self, test_id: TestId) -> AppResult<i32>;
    /// キャンセル時に枠を 1 つ戻し、残数を返す。
    async fn release(&self, test_id: TestId) -> AppResult<i32>;
    /// 現在の残数を返す（読み取りのみ）。
    async fn peek(&self, test_id: TestId) -> AppResult<i32>;
}
