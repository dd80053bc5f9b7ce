// ==========================================
// 地震测线布设计算 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 观测系统 (Acquisition Mode)
// ==========================================
// 序列化格式: snake_case (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionMode {
    #[serde(alias = "reflection")]
    RollAlong, // 滚动排列
    #[serde(alias = "refraction")]
    FixedSpread, // 固定排列双边放炮
}

impl AcquisitionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisitionMode::RollAlong => "roll_along",
            AcquisitionMode::FixedSpread => "fixed_spread",
        }
    }
}

// 配置条目未写 mode 时的缺省观测系统
impl Default for AcquisitionMode {
    fn default() -> Self {
        AcquisitionMode::RollAlong
    }
}

impl fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_deserialize_aliases() {
        let mode: AcquisitionMode = serde_json::from_str("\"refraction\"").unwrap();
        assert_eq!(mode, AcquisitionMode::FixedSpread);
        let mode: AcquisitionMode = serde_json::from_str("\"reflection\"").unwrap();
        assert_eq!(mode, AcquisitionMode::RollAlong);
        assert!(serde_json::from_str::<AcquisitionMode>("\"split\"").is_err());
    }

    #[test]
    fn test_mode_serde_snake_case() {
        let json = serde_json::to_string(&AcquisitionMode::FixedSpread).unwrap();
        assert_eq!(json, "\"fixed_spread\"");
        assert_eq!(AcquisitionMode::default(), AcquisitionMode::RollAlong);
    }
}
