//! 微信 deep link への受け渡し
//!
//! コピー成功の通知をユーザーが見られるよう、固定の待ち時間を置いてから
//! 遷移を試みる。起動できたかどうかは観測できないので結果は捨てる。

use crate::ports::outbound::ChefNotifier;
use std::time::Duration;

/// 微信の URI スキーム
pub const WEIXIN_DEEP_LINK: &str = "weixin://";

/// 通知を見せてから遷移するまでの待ち時間
const HANDOFF_DELAY: Duration = Duration::from_millis(1500);

/// weixin:// を開く ChefNotifier 実装
pub struct WeixinNotifier {
    delay: Duration,
}

impl WeixinNotifier {
    pub fn new() -> Self {
        Self {
            delay: HANDOFF_DELAY,
        }
    }
}

impl Default for WeixinNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChefNotifier for WeixinNotifier {
    fn notify(&self) {
        std::thread::sleep(self.delay);
        let _ = open::that(WEIXIN_DEEP_LINK);
    }
}
