use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use strand_core::{CapabilityId, CoreError, error::codes};

/// 当前增量协议：交换裸增量消息。
pub const PROTOCOL_DELTA_CURRENT: &str = "/p2p/id/delta/1.1.0";
/// 遗留增量协议：增量消息包裹在身份信封中交换。
pub const PROTOCOL_DELTA_LEGACY: &str = "/p2p/id/delta/1.0.0";
/// 单条增量消息负载的硬上限（2 KiB）。
pub const DELTA_MESSAGE_MAX: usize = 2 * 1024;

/// 对端能力集的一次增量变更。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// 新增的能力。
    #[serde(default)]
    pub added: Vec<CapabilityId>,
    /// 移除的能力。
    #[serde(default)]
    pub removed: Vec<CapabilityId>,
}

/// 遗留协议的信封：`delta` 字段允许缺失。
#[derive(Debug, Deserialize)]
struct LegacyEnvelope {
    #[serde(default)]
    delta: Option<Delta>,
}

/// 增量消息线格式的实现层错误，映射进 [`CoreError`] 前的中间形态。
#[derive(Debug, Error)]
pub enum DeltaWireError {
    /// 长度前缀或负载读取失败（含流提前结束）。
    #[error("i/o failure while reading delta frame: {0}")]
    Io(#[from] std::io::Error),
    /// 声明的负载长度超出帧预算。
    #[error("declared frame length {declared} exceeds the {limit} byte budget")]
    Oversized { declared: usize, limit: usize },
    /// 负载不是合法的增量消息。
    #[error("frame payload is not a valid delta message: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn map_wire_error(err: DeltaWireError) -> CoreError {
    let code = match &err {
        DeltaWireError::Oversized { .. } => codes::IDENTIFY_OVERSIZED,
        DeltaWireError::Io(_) | DeltaWireError::Malformed(_) => codes::IDENTIFY_DECODE,
    };
    CoreError::new(code, err.to_string()).with_cause(err)
}

/// 从入站流读取一条长度定界的增量消息。
///
/// # 教案式说明
/// - **Why**：两个协议版本共用同一帧格式，差异只在负载形态（裸消息
///   vs. 信封包裹），集中在此处分派可避免处理器重复解码逻辑；
/// - **How**：先读 4 字节大端长度前缀，超出 [`DELTA_MESSAGE_MAX`] 的
///   声明在读取负载之前即拒绝；随后读满负载并按协议版本解析 JSON；
/// - **What**：当前协议恒返回 `Ok(Some(_))`；遗留信封缺失 `delta`
///   字段时返回 `Ok(None)`，表示一次空更新（不触发注册表与事件）；
///   未知协议标识返回 [`codes::IDENTIFY_UNSUPPORTED`]。
pub async fn read_delta<R>(io: &mut R, protocol: &str) -> Result<Option<Delta>, CoreError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    match protocol {
        PROTOCOL_DELTA_CURRENT => {
            let body = read_frame(io).await.map_err(map_wire_error)?;
            let delta: Delta = serde_json::from_slice(&body)
                .map_err(DeltaWireError::from)
                .map_err(map_wire_error)?;
            Ok(Some(delta))
        }
        PROTOCOL_DELTA_LEGACY => {
            let body = read_frame(io).await.map_err(map_wire_error)?;
            let envelope: LegacyEnvelope = serde_json::from_slice(&body)
                .map_err(DeltaWireError::from)
                .map_err(map_wire_error)?;
            Ok(envelope.delta)
        }
        other => Err(CoreError::new(
            codes::IDENTIFY_UNSUPPORTED,
            format!("peer does not speak a supported delta protocol: {other}"),
        )),
    }
}

/// 将增量消息编码为一帧，供推送侧写入出站流。
pub fn encode_delta(delta: &Delta) -> Result<Bytes, CoreError> {
    let body = serde_json::to_vec(delta)
        .map_err(DeltaWireError::from)
        .map_err(map_wire_error)?;
    if body.len() > DELTA_MESSAGE_MAX {
        return Err(map_wire_error(DeltaWireError::Oversized {
            declared: body.len(),
            limit: DELTA_MESSAGE_MAX,
        }));
    }
    let mut frame = BytesMut::with_capacity(4 + body.len());
    frame.put_u32(body.len() as u32);
    frame.put_slice(&body);
    Ok(frame.freeze())
}

async fn read_frame<R>(io: &mut R) -> Result<Vec<u8>, DeltaWireError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut prefix = [0u8; 4];
    io.read_exact(&mut prefix).await?;
    let declared = u32::from_be_bytes(prefix) as usize;
    if declared > DELTA_MESSAGE_MAX {
        return Err(DeltaWireError::Oversized {
            declared,
            limit: DELTA_MESSAGE_MAX,
        });
    }
    let mut body = vec![0u8; declared];
    io.read_exact(&mut body).await?;
    Ok(body)
}
