// ==========================================
// 材料成本工具 - 导出选择器
// ==========================================
// 职责: 按选择模式确定参与导出的材料集合
// 红线: 所有模式都只选 base 变体（一个物理材料一行）
// ==========================================

use crate::catalog::material_catalog::MaterialCatalog;
use crate::domain::material::MaterialRecord;
use crate::domain::types::SelectionMode;
use crate::exchange::error::ExchangeResult;
use crate::settings::settings_store::SettingsStore;
use std::collections::HashSet;

// ==========================================
// ExportSelector - 导出选择器
// ==========================================
pub struct ExportSelector<'a> {
    catalog: &'a dyn MaterialCatalog,
    settings: &'a dyn SettingsStore,
}

impl<'a> ExportSelector<'a> {
    pub fn new(catalog: &'a dyn MaterialCatalog, settings: &'a dyn SettingsStore) -> Self {
        Self { catalog, settings }
    }

    /// 按模式选择材料
    ///
    /// # 返回
    /// - Ok(Some(Vec<MaterialRecord>)): 选中的材料集合（可能为空，空集合不是错误）
    /// - Ok(None): 静默跳过——仅 PrinterCompatible 模式下无激活打印机/
    ///   无挤出机线径/打印机声明不支持耗材时出现，不产生文件
    /// - Err: 目录或偏好存储访问失败
    pub fn select(&self, mode: SelectionMode) -> ExchangeResult<Option<Vec<MaterialRecord>>> {
        let selected = match mode {
            SelectionMode::All => Some(self.base_materials()?),

            SelectionMode::Favorites => {
                // 收藏列表为空时导出空集合，不是错误
                let favorites: HashSet<String> =
                    self.settings.favorite_material_ids()?.into_iter().collect();
                Some(
                    self.base_materials()?
                        .into_iter()
                        .filter(|m| favorites.contains(&m.guid))
                        .collect(),
                )
            }

            SelectionMode::PrinterCompatible => {
                let printer = match self.catalog.active_printer()? {
                    Some(p) => p,
                    None => {
                        tracing::debug!("无激活打印机，跳过打印机兼容导出");
                        return Ok(None);
                    }
                };
                if !printer.can_match_materials() {
                    tracing::debug!(
                        printer_id = %printer.printer_id,
                        "打印机无挤出机线径或不支持耗材，跳过打印机兼容导出"
                    );
                    return Ok(None);
                }
                Some(
                    self.catalog
                        .materials_compatible_with(&printer)?
                        .into_iter()
                        .filter(|m| m.is_base_variant)
                        .collect(),
                )
            }

            SelectionMode::Configured => {
                let entries = self.settings.cost_entries()?;
                Some(
                    self.base_materials()?
                        .into_iter()
                        .filter(|m| entries.contains_key(&m.guid))
                        .collect(),
                )
            }
        };

        Ok(selected)
    }

    /// 所有 base 变体材料
    fn base_materials(&self) -> ExchangeResult<Vec<MaterialRecord>> {
        Ok(self
            .catalog
            .materials()?
            .into_iter()
            .filter(|m| m.is_base_variant)
            .collect())
    }
}
