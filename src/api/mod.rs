// ==========================================
// 材料成本工具 - API 层
// ==========================================
// 职责: 提供菜单命令级业务接口,供宿主应用调用
// ==========================================

pub mod cost_data_api;
pub mod error;

// 重导出核心类型
pub use cost_data_api::{CostDataApi, ExchangeResponse};
pub use error::{ApiError, ApiResult};
