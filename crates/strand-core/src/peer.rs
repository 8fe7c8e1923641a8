use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// 对端节点标识。
///
/// # 契约说明
/// - 内容为传输层协商得到的稳定字符串表示（如多地址哈希的文本形式），
///   本工作区不解析其内部结构，只作为键值与诊断标签使用。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId(Cow<'static, str>);

impl PeerId {
    /// 以任意可转换为 `Cow` 的字符串构造对端标识。
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// 以字符串切片形式读取标识内容。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PeerId {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for PeerId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// 能力（协议）标识，形如 `/proto/a`。
///
/// # 设计动机（Why）
/// - 能力集合随增量交换频繁比较与排序，使用独立 newtype 避免与普通
///   字符串混用；
/// - 直接参与增量消息的序列化，因此派生 `serde` 透明表示。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(Cow<'static, str>);

impl CapabilityId {
    /// 以任意可转换为 `Cow` 的字符串构造能力标识。
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// 以字符串切片形式读取标识内容。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for CapabilityId {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for CapabilityId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}
