use crate::components::RoleSelect;
use leptos::prelude::*;
use rolegate::directory::ASSIGNABLE_ROLES;
use rolegate::{NewUser, Role, UserDirectory};

/// 管理员面板的用户表
///
/// 数据只在本页内存中维护，不会提交到后端。
#[component]
pub fn UserDirectoryPanel() -> impl IntoView {
    let directory = RwSignal::new(UserDirectory::seeded());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let (show_form, set_show_form) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        role.set(Role::default());
        set_error_msg.set(None);
    };

    let on_add = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = NewUser::new(name.get(), email.get(), role.get());
        match directory.try_update(|d| d.add(user)) {
            Some(Ok(_)) => {
                reset_form();
                set_show_form.set(false);
            }
            Some(Err(e)) => set_error_msg.set(Some(e.to_string())),
            None => {}
        }
    };

    let handle_delete = move |id: u32| {
        directory.update(|d| {
            d.delete(id);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">
                        "Users"
                        <span class="badge badge-ghost">{move || directory.with(|d| d.len())}</span>
                    </h3>
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| {
                            reset_form();
                            set_show_form.update(|open| *open = !*open);
                        }
                    >
                        {move || if show_form.get() { "Cancel" } else { "Add User" }}
                    </button>
                </div>

                <Show when=move || show_form.get()>
                    <form class="grid gap-2 md:grid-cols-4 items-end" on:submit=on_add novalidate>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2 md:col-span-4">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <input
                            type="text"
                            placeholder="Name"
                            on:input=move |ev| name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            class="input input-bordered input-sm"
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            on:input=move |ev| email.set(event_target_value(&ev))
                            prop:value=move || email.get()
                            class="input input-bordered input-sm"
                        />
                        <RoleSelect id="directory-role" role=role options={&ASSIGNABLE_ROLES} />
                        <button class="btn btn-success btn-sm">"Add"</button>
                    </form>
                </Show>

                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || directory.with(|d| d.users().to_vec())
                                key=|u| u.id
                                children=move |user| {
                                    let id = user.id;
                                    view! {
                                        <tr>
                                            <td class="font-mono text-xs opacity-50">{id}</td>
                                            <td>{user.name}</td>
                                            <td class="font-mono text-sm">{user.email}</td>
                                            <td>
                                                <div class="badge badge-accent badge-outline">{user.role.label()}</div>
                                            </td>
                                            <td>
                                                <button
                                                    on:click=move |_| handle_delete(id)
                                                    class="btn btn-ghost btn-sm text-error"
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
