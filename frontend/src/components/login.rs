use crate::auth::{remember_email, remembered_email, use_auth};
use crate::components::RoleSelect;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rolegate::{LoginForm, Role};

/// 整页跳转到后端的 Google 登录入口，控制权不会回到这里
pub(crate) fn begin_google_login(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("failed to start google login: {:?}", e);
        }
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(remembered_email().unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let role = RwSignal::new(Role::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let form = LoginForm::new(email.get(), password.get(), role.get());
        // 校验失败时不发请求
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        let store = auth.store();
        spawn_local(async move {
            match store.login(&form).await {
                Ok(session) => {
                    // 状态已切换为已认证，守卫会把当前页替换为该角色的面板
                    log::info!("signed in as {}", session.role);
                    remember_email(&form.email);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_msg.set(Some(e.user_message()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_google = move |_| {
        let url = auth.store().google_login_url(role.get());
        begin_google_login(&url);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Sign in"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email Address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <RoleSelect id="role" role=role />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <button type="button" class="btn btn-outline" on:click=on_google>
                            "Continue with Google"
                        </button>
                        <p class="text-sm text-center mt-2">
                            "No account? "
                            <Link to="/signup" class="link link-primary">"Sign up"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
