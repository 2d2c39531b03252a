// ==========================================
// 材料成本工具 - 材料目录接口
// ==========================================
// 职责: 定义材料目录访问接口（不包含实现）
// 实现者: SqliteMaterialCatalog
// ==========================================

use crate::catalog::error::CatalogResult;
use crate::domain::material::MaterialRecord;
use crate::domain::types::ActivePrinter;

// ==========================================
// MaterialCatalog Trait
// ==========================================
// 用途: 材料注册表主接口
// 说明: 打印机兼容材料解析收敛为单一能力接口，
//       不在调用方做运行时特性探测分支
pub trait MaterialCatalog: Send + Sync {
    /// 枚举所有已知材料（含非 base 变体，is_base_variant 标记由目录计算）
    ///
    /// # 返回
    /// - Ok(Vec<MaterialRecord>): 材料记录列表
    /// - Err: 目录访问错误
    fn materials(&self) -> CatalogResult<Vec<MaterialRecord>>;

    /// 当前激活的打印机
    ///
    /// # 返回
    /// - Ok(Some(ActivePrinter)): 存在激活打印机
    /// - Ok(None): 无激活打印机
    fn active_printer(&self) -> CatalogResult<Option<ActivePrinter>>;

    /// 解析与指定打印机兼容的材料
    ///
    /// # 参数
    /// - printer: 激活打印机（须满足 can_match_materials）
    ///
    /// # 返回
    /// - Ok(Vec<MaterialRecord>): 线径匹配的材料列表
    ///
    /// # 匹配规则
    /// - 打印机材料变体记录上的线径优先；
    ///   无按打印机材料树时回退材料记录自身的近似线径
    /// - 与打印机第一挤出机配置线径做浮点相等比较
    fn materials_compatible_with(
        &self,
        printer: &ActivePrinter,
    ) -> CatalogResult<Vec<MaterialRecord>>;
}
