// ==========================================
// 材料成本工具 - 交换层
// ==========================================
// 职责: 成本数据与 CSV 文件之间的导入/导出/清除
// 流程: 目录/偏好 → 选择过滤 → 合并 → CSV 写出（导出）
//       CSV 读取 → 行校验 → 合并 → 偏好（导入）
// ==========================================

pub mod clearer;
pub mod confirm;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod selector;

// 重导出核心类型
pub use clearer::CostDataClearer;
pub use confirm::{AlwaysConfirm, AlwaysDecline, ConfirmRequest, ConfirmationProvider};
pub use error::{ExchangeError, ExchangeResult};
pub use exporter::CsvExporter;
pub use importer::CsvImporter;
pub use selector::ExportSelector;
