use alloc::{borrow::Cow, boxed::Box};
use core::error::Error;
use core::fmt;

/// `CoreError` 表示 strand 工作区跨层共享的稳定错误域。
///
/// # 设计背景（Why）
/// - 状态机、指纹工具与增量交换在不同层次产生的故障需要合流为统一的
///   错误码，以便日志与告警系统执行精确分类；
/// - 契约层需兼容 `no_std + alloc` 场景，因此基于 [`core::error::Error`]
///   而非 `std` 专属类型。
///
/// # 契约说明（What）
/// - `code`：稳定 `'static` 字符串，遵循 `<域>.<语义>` 约定，见 [`codes`]；
/// - `message`：面向排障人员的自然语言描述，避免包含敏感信息；
/// - `cause`：可选底层原因，通过 `source()` 暴露完整链路。
///
/// # 风险提示（Trade-offs）
/// - 消息采用 `Cow` 保存，静态文案零分配，动态描述付出一次堆分配。
#[derive(Debug)]
pub struct CoreError {
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl CoreError {
    /// 构造核心错误。`code` 应取自 [`codes`] 模块。
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 附带底层原因并返回新的核心错误。
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取人类可读描述。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 获取底层原因（若存在）。
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// 稳定错误码清单。
///
/// # 命名约定
/// - 采用 `<域>.<语义>` 形式；错误码一经发布即视为对外契约，只增不改。
pub mod codes {
    /// 底层通道拆除失败。仅用于诊断记录，关闭路径不会向调用方传播。
    pub const TRANSPORT_TEARDOWN: &str = "transport.teardown_failed";
    /// 请求的摘要算法未编译进当前构建。
    pub const FINGERPRINT_UNAVAILABLE: &str = "fingerprint.algorithm_unavailable";
    /// 能力增量消息格式非法或帧不完整。
    pub const IDENTIFY_DECODE: &str = "identify.decode";
    /// 能力增量消息超出帧预算。
    pub const IDENTIFY_OVERSIZED: &str = "identify.budget_exceeded";
    /// 对端使用了本实现不支持的增量协议版本。
    pub const IDENTIFY_UNSUPPORTED: &str = "identify.unsupported_protocol";
}
