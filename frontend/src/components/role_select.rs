use leptos::prelude::*;
use rolegate::Role;

/// 角色下拉框
///
/// 选择的角色只是提示，最终角色由后端决定。
#[component]
pub fn RoleSelect(
    #[prop(into)] id: String,
    role: RwSignal<Role>,
    /// 可选的角色，默认全部
    #[prop(default = &Role::ALL)]
    options: &'static [Role],
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form-control">
            <label class="label" for=label_for>
                <span class="label-text">"Role"</span>
            </label>
            <select
                id=id
                class="select select-bordered"
                on:change=move |ev| {
                    if let Ok(selected) = event_target_value(&ev).parse::<Role>() {
                        role.set(selected);
                    }
                }
            >
                {options
                    .iter()
                    .copied()
                    .map(|r| {
                        view! {
                            <option value=r.as_str() selected=move || role.get() == r>
                                {r.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
