//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责数据的持有、
//! 重置以及到核心库 [`SignUpForm`] 的转换。

use leptos::prelude::*;
use rolegate::{Role, SignUpForm};

/// 注册表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在闭包间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            role: RwSignal::new(Role::default()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.confirm_password.set(String::new());
        self.role.set(Role::default());
    }

    pub fn to_form(&self) -> SignUpForm {
        SignUpForm {
            full_name: self.full_name.get(),
            email: self.email.get(),
            password: self.password.get(),
            confirm_password: self.confirm_password.get(),
            role: self.role.get(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
