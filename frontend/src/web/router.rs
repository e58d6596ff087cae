//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次渲染都经过守卫：当前路由 + 认证状态 -> 放行 / 等待 / 重定向。

use leptos::prelude::*;
use rolegate::{AppRoute, AuthPhase, GuardDecision, RoleAccessPolicy, View, authorize};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，不留下历史记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 认证状态以信号形式注入，路由服务本身不依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 守卫对当前路由的判定
    decision: Memo<GuardDecision>,
}

impl RouterService {
    fn new(phase: Signal<AuthPhase>, policy: RoleAccessPolicy) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        let decision =
            Memo::new(move |_| authorize(&current_route.get(), &phase.get(), &policy));

        Self {
            current_route,
            set_route,
            decision,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn decision(&self) -> Memo<GuardDecision> {
        self.decision
    }

    /// 导航到指定路径
    ///
    /// 先推入 History 再更新路由，是否放行由守卫在渲染时决定。
    /// 目标就是当前路由时不产生新的历史记录。
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        if self.current_route.with_untracked(|current| *current == target) {
            return;
        }
        push_history_state(&target.to_path());
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 守卫判定为重定向时替换地址栏并切换路由；判定为等待时触发状态检查
    fn setup_guard_effects(&self, on_pending: Callback<()>) {
        let decision = self.decision;
        let current_route = self.current_route;
        let set_route = self.set_route;

        Effect::new(move |_| match decision.get() {
            GuardDecision::Redirect(target) => {
                log::info!(
                    "[Router] {} -> {}",
                    current_route.get_untracked(),
                    target
                );
                replace_history_state(&target.to_path());
                set_route.set(target);
            }
            GuardDecision::Pending => on_pending.run(()),
            GuardDecision::Admit(_) => {}
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(
    phase: Signal<AuthPhase>,
    policy: RoleAccessPolicy,
    on_pending: Callback<()>,
) -> RouterService {
    let router = RouterService::new(phase, policy);

    router.init_popstate_listener();
    router.setup_guard_effects(on_pending);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    phase: Signal<AuthPhase>,
    /// 访问策略
    policy: RoleAccessPolicy,
    /// 守卫处于等待状态时调用，用于确保状态检查已经发出
    on_pending: Callback<()>,
    children: Children,
) -> impl IntoView {
    provide_router(phase, policy, on_pending);

    children()
}

/// 路由出口组件
///
/// 只有守卫放行时才渲染视图，等待和重定向期间显示中性的占位。
#[component]
pub fn RouterOutlet(
    /// 视图匹配函数：接收守卫选定的视图，返回对应组件
    matcher: fn(View) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.decision().get() {
        GuardDecision::Admit(view) => matcher(view),
        GuardDecision::Pending | GuardDecision::Redirect(_) => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
