// ==========================================
// 地震测线布设计算 - 检波器组展开
// ==========================================
// 职责: 将单个检波器组的所有重复展开为检波器绝对位置
// 输入: 组规模 + 初始位置 + 重复次数 + 间距 + 排列长度
// 输出: 长度恰为 group_size * repetitions 的位置序列
// ==========================================

/// 单个检波器组的一次展开
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiverGroupInstance {
    pub group_size: u32,
    pub initial_position: f64,
    pub repetitions: u32,
    pub phone_spacing: f64,
    pub string_aperture: f64,
}

impl ReceiverGroupInstance {
    pub fn new(
        group_size: u32,
        initial_position: f64,
        repetitions: u32,
        phone_spacing: f64,
        string_aperture: f64,
    ) -> Self {
        Self {
            group_size,
            initial_position,
            repetitions,
            phone_spacing,
            string_aperture,
        }
    }

    /// 单次排列 (不滚动)
    pub fn single_pass(group_size: u32, initial_position: f64, phone_spacing: f64) -> Self {
        Self::new(group_size, initial_position, 1, phone_spacing, 0.0)
    }

    pub fn receiver_count(&self) -> usize {
        self.group_size as usize * self.repetitions as usize
    }

    /// 展开全部检波器位置
    ///
    /// 第 r 次重复的起点为 `initial_position + r * string_aperture`，
    /// 组内按 `phone_spacing` 等距排列
    pub fn positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.receiver_count());
        for roll in 0..self.repetitions {
            let start = self.initial_position + f64::from(roll) * self.string_aperture;
            positions.extend((0..self.group_size).map(|j| start + f64::from(j) * self.phone_spacing));
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_length_is_exact() {
        let instance = ReceiverGroupInstance::new(24, 32.0, 3, 6.0, 672.0);
        assert_eq!(instance.positions().len(), 72);
        assert_eq!(instance.receiver_count(), 72);
    }

    #[test]
    fn test_positions_advance_by_aperture_per_roll() {
        let instance = ReceiverGroupInstance::new(3, 5.0, 2, 1.0, 10.0);
        assert_eq!(
            instance.positions(),
            vec![5.0, 6.0, 7.0, 15.0, 16.0, 17.0]
        );
    }

    #[test]
    fn test_zero_repetitions_yields_nothing() {
        let instance = ReceiverGroupInstance::new(8, 0.0, 0, 2.0, 16.0);
        assert!(instance.positions().is_empty());
    }

    #[test]
    fn test_single_pass() {
        let instance = ReceiverGroupInstance::single_pass(4, 32.0, 6.0);
        assert_eq!(instance.positions(), vec![32.0, 38.0, 44.0, 50.0]);
    }
}
