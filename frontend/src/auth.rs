//! 认证模块
//!
//! 把核心库的 [`AuthStore`] 包装成 Leptos 上下文。组件只通过 `phase`
//! 信号读取状态，写入一律经由 store 的方法完成。

use crate::web::BrowserHttpClient;
use gloo_storage::{LocalStorage as BrowserStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rolegate::{AuthPhase, AuthStore, ClientConfig, HttpSessionGateway};

/// 只记住上次成功登录的邮箱，方便自动填充；密码和角色从不落盘
const STORAGE_EMAIL_KEY: &str = "rolegate_email";

pub type BrowserAuthStore = AuthStore<HttpSessionGateway<BrowserHttpClient>>;

/// 认证上下文
///
/// `Copy`，可以在闭包之间随意传递。store 本身不是 `Send` 的，
/// 因此放在本地存储的 `StoredValue` 里。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub phase: ReadSignal<AuthPhase>,
    store: StoredValue<BrowserAuthStore, LocalStorage>,
}

impl AuthContext {
    /// 创建新的认证上下文，store 的每次状态转换都会同步到 `phase` 信号
    pub fn new(config: ClientConfig) -> Self {
        let (phase, set_phase) = signal(AuthPhase::Loading);

        let store = AuthStore::new(HttpSessionGateway::new(config, BrowserHttpClient));
        store.subscribe(move |next| set_phase.set(next.clone()));

        Self {
            phase,
            store: StoredValue::new_local(store),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn phase_signal(&self) -> Signal<AuthPhase> {
        self.phase.into()
    }

    pub fn store(&self) -> BrowserAuthStore {
        self.store.with_value(|store| store.clone())
    }

    /// 发起（或加入进行中的）状态检查
    pub fn ensure_loaded(&self) {
        let store = self.store();
        spawn_local(async move {
            store.initialize().await;
        });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 每次整页加载只查询一次；组件树卸载后，迟到的结果被丢弃。
pub fn init_auth(ctx: &AuthContext) {
    ctx.ensure_loaded();

    let store = ctx.store;
    on_cleanup(move || {
        let _ = store.try_with_value(|store| store.unmount());
    });
}

/// 上次成功登录使用的邮箱
pub fn remembered_email() -> Option<String> {
    BrowserStorage::get::<String>(STORAGE_EMAIL_KEY).ok()
}

pub fn remember_email(email: &str) {
    if let Err(e) = BrowserStorage::set(STORAGE_EMAIL_KEY, email.trim()) {
        log::debug!("failed to remember email: {}", e);
    }
}
