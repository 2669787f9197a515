/// 序列化深度
///
/// 每个实体只有一个 `from_graph` 入口，由调用方显式传入深度。
/// 嵌套的关联实体一律按 `Simple` 展开，因此递归深度至多为一层。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeDepth {
    /// 仅实体自身字段
    Simple,
    /// 自身字段 + 公开关联（不含交易历史）
    Public,
    /// 全部关联
    Full,
}

impl SerializeDepth {
    /// 是否展开关联集合
    pub fn includes_relations(self) -> bool {
        self != SerializeDepth::Simple
    }

    /// 是否展开交易历史
    pub fn includes_history(self) -> bool {
        self == SerializeDepth::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_flags() {
        assert!(!SerializeDepth::Simple.includes_relations());
        assert!(SerializeDepth::Public.includes_relations());
        assert!(!SerializeDepth::Public.includes_history());
        assert!(SerializeDepth::Full.includes_history());
    }
}
