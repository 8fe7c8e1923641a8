use std::sync::Arc;

use tokio::io::AsyncRead;

use strand_core::{CapabilityRegistry, CoreError, EventPublisher, PeerCapabilitiesUpdated, PeerId};

use crate::delta::{Delta, read_delta};

/// 入站增量流的最小抽象。
///
/// # 契约说明（What）
/// - 字节源：按 [`AsyncRead`] 暴露帧数据；
/// - `protocol`：流协商得到的协议标识，决定负载形态；
/// - `remote_peer`：流所属连接的远端对端；
/// - `abort`：立即中止本条流（reset 语义）；中止自身的失败由实现方
///   消化，本组件不再关心该流。
pub trait DeltaStream: AsyncRead + Unpin + Send {
    /// 流协商得到的协议标识。
    fn protocol(&self) -> &str;
    /// 流所属连接的远端对端。
    fn remote_peer(&self) -> PeerId;
    /// 立即中止本条流。
    fn abort(&mut self);
}

/// 能力增量交换的消费侧处理器。
///
/// # 教案式注释
///
/// ## 意图（Why）
/// - 将「读一条消息 → 更新注册表 → 发布一条事件」的固定流程封装为
///   可注入依赖的服务对象，注册表与事件总线均为外部拥有的服务，通过
///   `strand-core` 的窄接口访问。
///
/// ## 逻辑（How）
/// - 任何解码失败：中止流并记录 `warn` 诊断，不重试、不影响其他流；
/// - 注册表或发布环节失败：仅记录诊断——消息已被成功消费，语义上
///   不存在可重试的半程状态。
///
/// ## 契约（What）
/// - `handle_stream` 消费整条入站流；每条合法非空增量恰好发布一条
///   [`PeerCapabilitiesUpdated`] 事件，其集合与消息内容一致。
#[derive(Debug)]
pub struct DeltaService<R, P> {
    registry: Arc<R>,
    publisher: Arc<P>,
}

impl<R, P> DeltaService<R, P>
where
    R: CapabilityRegistry,
    P: EventPublisher,
{
    /// 以外部拥有的注册表与事件总线构造处理器。
    pub fn new(registry: Arc<R>, publisher: Arc<P>) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    /// 处理一条入站增量流。
    pub async fn handle_stream<S: DeltaStream>(&self, mut stream: S) {
        let protocol = stream.protocol().to_owned();
        let peer = stream.remote_peer();

        let delta = match read_delta(&mut stream, &protocol).await {
            Ok(Some(delta)) => delta,
            Ok(None) => {
                tracing::debug!(peer = %peer, "legacy delta envelope carried no update");
                return;
            }
            Err(err) => {
                tracing::warn!(
                    peer = %peer,
                    protocol = %protocol,
                    error = %err,
                    "failed to read capability delta"
                );
                stream.abort();
                return;
            }
        };

        if let Err(err) = self.consume_delta(&peer, &delta) {
            tracing::warn!(peer = %peer, error = %err, "capability delta could not be applied");
        }
    }

    /// 将增量写入注册表并发布变更事件。
    fn consume_delta(&self, peer: &PeerId, delta: &Delta) -> Result<(), CoreError> {
        self.registry.add_capabilities(peer, &delta.added)?;
        self.registry.remove_capabilities(peer, &delta.removed)?;
        self.publisher.publish(PeerCapabilitiesUpdated {
            peer: peer.clone(),
            added: delta.added.clone(),
            removed: delta.removed.clone(),
        });
        Ok(())
    }
}
