use crate::auth::use_auth;
use crate::components::user_directory::UserDirectoryPanel;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rolegate::{AppRoute, Role};

/// 各角色面板的标题与占位卡片
struct DashboardLayout {
    title: &'static str,
    cards: &'static [(&'static str, &'static str)],
}

fn dashboard_layout(section: Role) -> DashboardLayout {
    match section {
        Role::Admin => DashboardLayout {
            title: "Admin Dashboard",
            cards: &[
                ("Roles", "Review role assignments."),
                ("System", "Service health at a glance."),
            ],
        },
        Role::Manager => DashboardLayout {
            title: "Manager Dashboard",
            cards: &[
                ("Team", "See who is on shift."),
                ("Reports", "Weekly summaries."),
            ],
        },
        Role::Worker => DashboardLayout {
            title: "Worker Dashboard",
            cards: &[
                ("Tasks", "Assigned work for today."),
                ("Schedule", "Upcoming shifts."),
            ],
        },
        Role::Customer => DashboardLayout {
            title: "Customer Dashboard",
            cards: &[
                ("Orders", "Track your orders."),
                ("Profile", "Manage your details."),
            ],
        },
    }
}

/// 统一的角色面板
///
/// `section` 是被访问的面板，`viewer` 是当前用户的角色（管理员可以查看任何面板）。
#[component]
pub fn RoleDashboard(section: Role, viewer: Role) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let layout = dashboard_layout(section);

    let (logout_error, set_logout_error) = signal(Option::<String>::None);

    let display_name = move || {
        auth.phase.with(|phase| {
            phase
                .session()
                .and_then(|s| s.profile.as_ref())
                .map(|p| p.name().to_string())
                .unwrap_or_default()
        })
    };

    let sub_path = move || match router.current_route().get() {
        AppRoute::Dashboard { rest, .. } if !rest.is_empty() => Some(rest),
        _ => None,
    };

    let on_logout = move |_| {
        let store = auth.store();
        spawn_local(async move {
            // 无论成功与否本地会话都已清除，守卫负责跳回登录页
            if let Err(e) = store.logout().await {
                set_logout_error.set(Some(e.user_message()));
            }
        });
    };

    let on_probe = move |_| {
        let store = auth.store();
        spawn_local(async move { store.probe().await });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Show when=move || logout_error.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class="alert alert-error shadow-lg">
                            <span>{move || logout_error.get().unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">{layout.title}</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {display_name} " · " {viewer.label()}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        {cfg!(debug_assertions).then(|| view! {
                            <button on:click=on_probe class="btn btn-ghost btn-sm">"Check session"</button>
                        })}
                        <button on:click=on_logout class="btn btn-outline btn-error">"Log out"</button>
                    </div>
                </div>

                <Show when=move || sub_path().is_some()>
                    <div class="text-sm breadcrumbs">
                        <span>{section.as_str()} " / " {move || sub_path().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid gap-4 md:grid-cols-2">
                    {layout
                        .cards
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body">
                                        <h3 class="card-title">{*title}</h3>
                                        <p class="text-base-content/70 text-sm">{*body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {(section == Role::Admin).then(|| view! { <UserDirectoryPanel /> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_dashboard() {
        for role in Role::ALL {
            let layout = dashboard_layout(role);
            assert!(layout.title.starts_with(role.label()));
            assert!(!layout.cards.is_empty());
        }
    }
}
