// ==========================================
// 材料成本工具 - 确认决策接口
// ==========================================
// 职责: 把"询问用户"这一决策点从合并/变更逻辑中分离，
//       使核心逻辑可在无显示环境下测试
// 实现者: 主机对话框适配层；测试中使用 AlwaysConfirm/AlwaysDecline
// ==========================================

use crate::i18n::t_with_args;

// ==========================================
// ConfirmRequest - 确认请求
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmRequest {
    /// 文件货币单位与当前设置不一致（导入前询问，整个导入只问一次）
    CurrencyMismatch {
        file_currency: String,
        configured_currency: String,
    },
    /// 清除全部成本数据
    ClearAll,
}

impl ConfirmRequest {
    /// 用户可见的本地化确认提示文案
    pub fn prompt(&self) -> String {
        match self {
            ConfirmRequest::CurrencyMismatch {
                file_currency,
                configured_currency,
            } => t_with_args(
                "confirm.currency_mismatch",
                &[
                    ("file", file_currency.as_str()),
                    ("configured", configured_currency.as_str()),
                ],
            ),
            ConfirmRequest::ClearAll => crate::i18n::t("confirm.clear_all"),
        }
    }
}

// ==========================================
// ConfirmationProvider Trait
// ==========================================
pub trait ConfirmationProvider: Send + Sync {
    /// 向用户请求确认
    ///
    /// # 返回
    /// - true: 用户同意继续
    /// - false: 用户拒绝（调用方按"主动中止"处理，非错误）
    fn confirm(&self, request: &ConfirmRequest) -> bool;
}

/// 始终同意（无头环境/测试）
pub struct AlwaysConfirm;

impl ConfirmationProvider for AlwaysConfirm {
    fn confirm(&self, _request: &ConfirmRequest) -> bool {
        true
    }
}

/// 始终拒绝（无头环境/测试）
pub struct AlwaysDecline;

impl ConfirmationProvider for AlwaysDecline {
    fn confirm(&self, _request: &ConfirmRequest) -> bool {
        false
    }
}
