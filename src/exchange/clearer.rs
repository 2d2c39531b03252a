// ==========================================
// 材料成本工具 - 成本数据清除器
// ==========================================
// 职责: 在用户明确确认后，把成本条目偏好重置为默认值（空对象）
// 说明: 不支持按条目的部分清除
// ==========================================

use crate::exchange::confirm::{ConfirmRequest, ConfirmationProvider};
use crate::exchange::error::ExchangeResult;
use crate::settings::settings_store::SettingsStore;

// ==========================================
// CostDataClearer - 成本数据清除器
// ==========================================
pub struct CostDataClearer<'a> {
    confirm: &'a dyn ConfirmationProvider,
}

impl<'a> CostDataClearer<'a> {
    pub fn new(confirm: &'a dyn ConfirmationProvider) -> Self {
        Self { confirm }
    }

    /// 清除全部成本数据
    ///
    /// # 返回
    /// - Ok(true): 用户确认，偏好已重置为默认空映射
    /// - Ok(false): 用户拒绝，空操作
    /// - Err: 偏好存储写入失败
    pub fn clear(&self, settings: &dyn SettingsStore) -> ExchangeResult<bool> {
        if !self.confirm.confirm(&ConfirmRequest::ClearAll) {
            tracing::info!("用户取消清除操作");
            return Ok(false);
        }

        settings.reset_cost_entries()?;
        tracing::info!("已清除全部耗材成本数据");
        Ok(true)
    }
}
