// ==========================================
// 地震测线布设计算 - 测线配置文件
// ==========================================
// 格式: JSON，{ "input_data": [ {测线条目}, ... ], "palette": [...] }
// 职责: 读取配置,解析为强类型布设请求
// 说明: 数值范围校验由引擎层统一执行,此处只做字段完整性检查
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::palette::DisplayPalette;
use crate::domain::params::{
    AcquisitionParams, FixedSpreadParams, PlanRequest, RollAlongParams, SurveyParameters,
};
use crate::domain::receiver::{ReceiverGroupInventory, ReceiverGroupRecord};
use crate::domain::types::AcquisitionMode;
use crate::importer::InventoryImporter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// ==========================================
// 配置文件结构
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfigFile {
    pub input_data: Vec<SurveyEntryConfig>,

    /// 显示标记色板 (可选，缺省使用默认色板)
    #[serde(default)]
    pub palette: Option<DisplayPalette>,
}

/// 单条测线配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyEntryConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub mode: AcquisitionMode,

    pub shot_spacing: f64,
    pub phone_spacing: f64,
    pub annotation_spacing: f64,

    // ===== 滚动排列 =====
    #[serde(default)]
    pub first_phone_position: Option<f64>,
    #[serde(default)]
    pub line_length: Option<f64>,

    // ===== 固定排列 =====
    #[serde(default)]
    pub lead_shots: Option<u32>,
    #[serde(default)]
    pub line_offset: Option<f64>,

    // ===== 检波器组来源 (三选一) =====
    /// 清单文件路径 (CSV / Excel)，相对路径以配置文件目录为基准
    #[serde(default)]
    pub line_inventory: Option<PathBuf>,

    /// 内联清单
    #[serde(default)]
    pub inventory: Option<Vec<InventoryEntryConfig>>,

    /// 按规格计数 (如 4 组 24 道 + 2 组 16 道)
    #[serde(default)]
    pub strings: Option<Vec<StringCountConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntryConfig {
    pub group_size: u32,
    #[serde(default)]
    pub display_tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringCountConfig {
    pub count: u32,
    pub size: u32,
}

// ==========================================
// 加载与解析
// ==========================================

impl SurveyConfigFile {
    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: SurveyConfigFile = serde_json::from_str(raw)?;
        if config.input_data.is_empty() {
            return Err(ConfigError::NoEntries);
        }
        Ok(config)
    }

    pub fn palette(&self) -> DisplayPalette {
        self.palette.clone().unwrap_or_default()
    }

    /// 解析全部条目为布设请求
    ///
    /// # 参数
    /// - base_dir: 清单文件相对路径的基准目录
    pub fn resolve_all(&self, base_dir: &Path) -> ConfigResult<Vec<PlanRequest>> {
        let palette = self.palette();
        self.input_data
            .iter()
            .enumerate()
            .map(|(entry, cfg)| cfg.resolve(entry, base_dir, &palette))
            .collect()
    }
}

impl SurveyEntryConfig {
    fn survey(&self) -> SurveyParameters {
        SurveyParameters {
            shot_spacing: self.shot_spacing,
            phone_spacing: self.phone_spacing,
            annotation_spacing: self.annotation_spacing,
        }
    }

    /// 解析观测系统参数
    pub fn acquisition_params(&self, entry: usize) -> ConfigResult<AcquisitionParams> {
        let missing = |field| ConfigError::MissingField { entry, field };

        let params = match self.mode {
            AcquisitionMode::RollAlong => AcquisitionParams::RollAlong(RollAlongParams {
                survey: self.survey(),
                first_phone_position: self
                    .first_phone_position
                    .ok_or_else(|| missing("first_phone_position"))?,
                line_length: self.line_length.ok_or_else(|| missing("line_length"))?,
            }),
            AcquisitionMode::FixedSpread => AcquisitionParams::FixedSpread(FixedSpreadParams {
                survey: self.survey(),
                lead_shots: self.lead_shots.ok_or_else(|| missing("lead_shots"))?,
                line_offset: self.line_offset.unwrap_or(0.0),
            }),
        };
        Ok(params)
    }

    /// 解析检波器组清单 (三种来源必须且只能指定一种)
    pub fn resolve_inventory(
        &self,
        entry: usize,
        base_dir: &Path,
        palette: &DisplayPalette,
    ) -> ConfigResult<ReceiverGroupInventory> {
        let sources = [
            self.line_inventory.is_some(),
            self.inventory.is_some(),
            self.strings.is_some(),
        ];
        if sources.iter().filter(|&&s| s).count() != 1 {
            return Err(ConfigError::InventorySource {
                entry,
                message: "line_inventory / inventory / strings 必须且只能指定一个".to_string(),
            });
        }

        if let Some(path) = &self.line_inventory {
            let full_path = if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            };
            debug!(entry, path = %full_path.display(), "读取检波器组清单文件");
            let importer = InventoryImporter::new(palette.clone());
            return Ok(importer.import_file(&full_path)?);
        }

        let records: Vec<ReceiverGroupRecord> = match (&self.inventory, &self.strings) {
            (Some(items), _) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let tag = item
                        .display_tag
                        .clone()
                        .unwrap_or_else(|| palette.tag_for(i).to_string());
                    ReceiverGroupRecord::new(item.group_size, tag)
                })
                .collect(),
            (None, Some(strings)) => strings
                .iter()
                .flat_map(|s| std::iter::repeat(s.size).take(s.count as usize))
                .enumerate()
                .map(|(i, size)| ReceiverGroupRecord::new(size, palette.tag_for(i)))
                .collect(),
            (None, None) => Vec::new(),
        };

        Ok(ReceiverGroupInventory::new(records)?)
    }

    pub fn resolve(
        &self,
        entry: usize,
        base_dir: &Path,
        palette: &DisplayPalette,
    ) -> ConfigResult<PlanRequest> {
        let params = self.acquisition_params(entry)?;
        let inventory = self.resolve_inventory(entry, base_dir, palette)?;

        Ok(PlanRequest {
            name: self.name.clone(),
            inventory,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roll_along_entry_with_inline_inventory() {
        let config = SurveyConfigFile::from_json_str(
            r#"{
                "input_data": [{
                    "shot_spacing": 2, "phone_spacing": 1, "annotation_spacing": 10,
                    "first_phone_position": 0, "line_length": 25,
                    "inventory": [{"group_size": 10, "display_tag": "orange"}]
                }]
            }"#,
        )
        .unwrap();

        let requests = config.resolve_all(Path::new(".")).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].params.mode(), AcquisitionMode::RollAlong);
        assert_eq!(requests[0].inventory.records()[0].display_tag, "orange");
    }

    #[test]
    fn test_strings_expand_in_order_with_palette() {
        let config = SurveyConfigFile::from_json_str(
            r#"{
                "input_data": [{
                    "mode": "fixed_spread",
                    "shot_spacing": 4, "phone_spacing": 6, "annotation_spacing": 10,
                    "lead_shots": 8,
                    "strings": [{"count": 4, "size": 24}, {"count": 2, "size": 16}]
                }]
            }"#,
        )
        .unwrap();

        let requests = config.resolve_all(Path::new(".")).unwrap();
        let inventory = &requests[0].inventory;
        assert_eq!(inventory.group_sizes(), vec![24, 24, 24, 24, 16, 16]);
        assert_eq!(inventory.records()[5].display_tag, "yellow");
        assert!(matches!(
            requests[0].params,
            AcquisitionParams::FixedSpread(FixedSpreadParams { line_offset, .. }) if line_offset == 0.0
        ));
    }

    #[test]
    fn test_missing_mode_field_is_reported() {
        let config = SurveyConfigFile::from_json_str(
            r#"{"input_data": [{
                "shot_spacing": 2, "phone_spacing": 1, "annotation_spacing": 10,
                "first_phone_position": 0,
                "inventory": [{"group_size": 10}]
            }]}"#,
        )
        .unwrap();

        let err = config.resolve_all(Path::new(".")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                entry: 0,
                field: "line_length"
            }
        ));
    }

    #[test]
    fn test_multiple_inventory_sources_rejected() {
        let entry = SurveyEntryConfig {
            inventory: Some(vec![InventoryEntryConfig {
                group_size: 10,
                display_tag: None,
            }]),
            strings: Some(vec![StringCountConfig { count: 1, size: 10 }]),
            ..Default::default()
        };
        let err = entry
            .resolve_inventory(3, Path::new("."), &DisplayPalette::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InventorySource { entry: 3, .. }));
    }

    #[test]
    fn test_empty_input_data_rejected() {
        let err = SurveyConfigFile::from_json_str(r#"{"input_data": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoEntries));
    }
}
