// ==========================================
// 材料成本工具 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含导入/导出逻辑
// ==========================================

pub mod material;
pub mod types;

// 重导出核心类型
pub use material::{
    parse_cost_entry_map, serialize_cost_entry_map, CostEntry, CostEntryMap, MaterialRecord,
};
pub use types::{ActivePrinter, ExportSummary, ImportSummary, SelectionMode};
