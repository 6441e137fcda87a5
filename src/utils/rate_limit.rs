//! 请求节流
//!
//! VK 的限制针对请求频率而不是请求内容，所以每次 execute
//! 调用后都固定暂停一次，成功失败一视同仁。

use std::time::Duration;
use tokio::time::sleep;

/// 固定间隔节流器
///
/// 调度规则：同一时刻最多一个在途请求，相邻请求之间
/// 至少间隔 `interval`。配合顺序执行的批次即可成立。
pub struct RateLimiter {
    interval: Duration,
}

impl RateLimiter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// 在两次调用之间暂停固定间隔
    pub async fn pause(&self) {
        sleep(self.interval).await; // 避免请求过快
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_pause_waits_at_least_interval() {
        let limiter = RateLimiter::new(20);
        let start = Instant::now();

        tokio_test::block_on(async {
            limiter.pause().await;
            limiter.pause().await;
        });

        assert!(
            start.elapsed() >= Duration::from_millis(40),
            "两次暂停应该至少等待 40ms"
        );
    }
}
