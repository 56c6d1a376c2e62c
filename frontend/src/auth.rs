//! 认证模块
//!
//! 把核心库的 `AuthGate` 装进信号，通过 Context 在组件间共享。
//! 接口客户端与闸门读写同一个 `SessionStore`，没有额外的全局状态。

use crate::web::{FetchClient, LocalStorage};
use appsite_admin::{AdminApi, AuthGate, AuthView, ConsoleConfig, SessionStore, log_info};
use leptos::prelude::*;

/// 浏览器端使用的接口客户端
pub type ConsoleApi = AdminApi<FetchClient, LocalStorage>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证闸门（令牌的内存副本 + 持久化存储）
    pub gate: RwSignal<AuthGate<LocalStorage>>,
    /// 接口客户端
    api: StoredValue<ConsoleApi>,
    /// 运行时配置
    pub config: StoredValue<ConsoleConfig>,
}

impl AuthContext {
    /// 创建认证上下文
    ///
    /// 会话令牌只在这里从 LocalStorage 读取一次。
    pub fn new(config: ConsoleConfig) -> Self {
        let store = SessionStore::with_key(LocalStorage, config.token_key);
        let api = AdminApi::from_config(FetchClient, store, &config);

        Self {
            gate: RwSignal::new(AuthGate::open(store)),
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// 当前应渲染的顶层视图
    pub fn view_memo(&self) -> Memo<AuthView> {
        let gate = self.gate;
        Memo::new(move |_| gate.with(|g| g.view()))
    }

    pub fn api(&self) -> ConsoleApi {
        self.api.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录成功：持久化令牌并切换到主布局
pub fn sign_in(ctx: &AuthContext, token: String) {
    ctx.gate.update(|gate| gate.sign_in(token));
}

/// 注销并清除令牌
///
/// 视图切换由 `App` 对闸门的监听自动完成。
pub fn logout(ctx: &AuthContext) {
    log_info!("[Auth] logout requested");
    ctx.gate.update(|gate| gate.sign_out());
}
