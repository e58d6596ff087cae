//! rolegate 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `rolegate` 核心库：会话状态、路由模型与守卫（与 DOM 无关）
//! - `web::router`: 路由服务，每次渲染都经过守卫
//! - `auth`: 认证上下文，包装核心库的状态提供者
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod dashboard;
    pub mod login;
    mod role_select;
    pub mod signup;
    mod user_directory;

    pub(crate) use role_select::RoleSelect;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::RoleDashboard;
use crate::components::login::SignInPage;
use crate::components::signup::SignUpPage;

use leptos::prelude::*;
use rolegate::config::BACKEND_URL_VAR;
use rolegate::{ClientConfig, RoleAccessPolicy, View};

// 浏览器 API 封装模块
pub(crate) mod web {
    mod http;
    pub mod router;

    pub use http::BrowserHttpClient;
}

use web::router::{Router, RouterOutlet};

/// 构建时注入的后端地址，未设置时使用同源
fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| match key {
        BACKEND_URL_VAR => option_env!("BACKEND_URL").map(str::to_string),
        _ => None,
    })
    .unwrap_or_else(|e| {
        log::error!("{}, falling back to same-origin requests", e);
        ClientConfig::default()
    })
}

/// 视图匹配函数
///
/// 守卫放行后只会得到这三种视图，所有角色面板共用一个组件。
fn view_matcher(view: View) -> AnyView {
    match view {
        View::SignIn => view! { <SignInPage /> }.into_any(),
        View::SignUp => view! { <SignUpPage /> }.into_any(),
        View::Dashboard { section, viewer } => {
            view! { <RoleDashboard section=section viewer=viewer /> }.into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(client_config());
    provide_context(auth_ctx);

    // 2. 页面加载时查询一次会话状态
    init_auth(&auth_ctx);

    // 3. 认证状态以信号注入路由服务
    let phase = auth_ctx.phase_signal();
    let on_pending = Callback::new(move |_: ()| auth_ctx.ensure_loaded());

    view! {
        <Router phase=phase policy=RoleAccessPolicy::standard() on_pending=on_pending>
            <RouterOutlet matcher=view_matcher />
        </Router>
    }
}
