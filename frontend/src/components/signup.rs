mod form_state;

use crate::auth::use_auth;
use crate::components::RoleSelect;
use crate::components::login::begin_google_login;
use crate::web::router::{Link, use_router};
use form_state::FormState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册成功后返回登录页前的停留时间
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] autocomplete: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let label_for = id.clone();
    view! {
        <div class="form-control">
            <label class="label" for=label_for>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                autocomplete=autocomplete
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered"
            />
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let state = FormState::new();

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let form = state.to_form();
        if let Err(e) = form.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        let store = auth.store();
        spawn_local(async move {
            match store.register(form).await {
                Ok(()) => {
                    set_success_msg.set(Some("Account created successfully!".to_string()));
                    state.reset();
                    Timeout::new(REDIRECT_DELAY_MS, move || router.navigate("/")).forget();
                }
                Err(e) => {
                    log::warn!("sign up failed: {}", e);
                    set_error_msg.set(Some(e.user_message()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_google = move |_| {
        let url = auth.store().google_login_url(state.role.get());
        begin_google_login(&url);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Sign Up"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || success_msg.get().is_some()>
                            <div role="status" class="alert alert-success text-sm py-2">
                                <span>{move || success_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <TextField id="fullName" label="Full Name" input_type="text" autocomplete="name" value=state.full_name />
                        <TextField id="email" label="Email Address" input_type="email" autocomplete="email" value=state.email />
                        <TextField id="password" label="Password" input_type="password" autocomplete="new-password" value=state.password />
                        <TextField id="confirmPassword" label="Confirm Password" input_type="password" autocomplete="new-password" value=state.confirm_password />
                        <RoleSelect id="signup-role" role=state.role />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                "Sign Up"
                            </button>
                        </div>
                        <button type="button" class="btn btn-outline" on:click=on_google>
                            "Sign up with Google"
                        </button>
                        <p class="text-sm text-center mt-2">
                            "Already have an account? "
                            <Link to="/" class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
