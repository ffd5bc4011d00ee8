//! 登录 / 注册页
//!
//! 成功后写入会话；页面本身是 GuestOnly，守卫会把已登录用户送往个人资料页。

use crate::api::use_api;
use crate::auth::{AuthContext, use_auth};
use crate::components::toast::{ToastContext, use_toast};
use civicsync::{ApiError, Notice};
use civicsync_shared::{AuthResponse, RegisterRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginTab {
    Citizen,
    Admin,
    SignUp,
}

impl LoginTab {
    fn label(&self) -> &'static str {
        match self {
            LoginTab::Citizen => "Citizen Sign In",
            LoginTab::Admin => "Admin Login",
            LoginTab::SignUp => "Sign Up",
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (tab, set_tab) = signal(LoginTab::Citizen);

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Welcome to CivicSync"</h1>
                    <p class="text-base-content/70">"Report and track civic issues in your city"</p>
                </div>
                <div role="tablist" class="tabs tabs-boxed w-full">
                    {[LoginTab::Citizen, LoginTab::Admin, LoginTab::SignUp]
                        .into_iter()
                        .map(|t| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    {move || match tab.get() {
                        LoginTab::Citizen => view! { <SignInForm admin=false /> }.into_any(),
                        LoginTab::Admin => view! { <SignInForm admin=true /> }.into_any(),
                        LoginTab::SignUp => view! { <SignUpForm /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// 登录 / 注册共用的结果处理
fn finish_auth(
    auth: AuthContext,
    toast: ToastContext,
    result: Result<AuthResponse, ApiError>,
    failure_title: &str,
) {
    match result {
        Ok(response) => {
            let welcome = format!("Signed in as {}", response.user.email);
            match auth.login(response) {
                Ok(()) => toast.push(Notice::success("Welcome", welcome)),
                Err(err) => toast.push(err.notice()),
            }
        }
        Err(err) => toast.push(err.notice(failure_title)),
    }
}

#[component]
fn SignInForm(admin: bool) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            toast.push(Notice::warning("Missing information", "Please fill in all fields."));
            return;
        }
        set_is_submitting.set(true);
        spawn_local(async move {
            let result = api.gateway().login(&email.get_untracked(), &password.get_untracked()).await;
            match result {
                // 管理员入口只接受管理员账号
                Ok(response) if admin && response.user.role != Role::Admin => {
                    toast.push(Notice::error(
                        "Access denied",
                        "This account does not have administrator access.",
                    ));
                }
                other => finish_auth(auth, toast, other, "Login failed"),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <form class="card-body" on:submit=on_submit>
            <div class="form-control">
                <label class="label" for="email">
                    <span class="label-text">"Email"</span>
                </label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    class="input input-bordered"
                    required
                />
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="password"
                    type="password"
                    placeholder="••••••••"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    class="input input-bordered"
                    required
                />
            </div>
            <div class="form-control mt-6">
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                    } else if admin {
                        "Login as Admin".into_any()
                    } else {
                        "Sign In".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn SignUpForm() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            toast.push(Notice::warning("Passwords do not match", "Please re-enter your password."));
            return;
        }
        let request = RegisterRequest {
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            password: password.get(),
        };
        set_is_submitting.set(true);
        spawn_local(async move {
            let result = api.gateway().register(&request).await;
            finish_auth(auth, toast, result, "Registration failed");
            set_is_submitting.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| set.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <form class="card-body" on:submit=on_submit>
            {field("signup-email", "Email", "email", email, set_email)}
            {field("signup-phone", "Phone", "tel", phone, set_phone)}
            {field("signup-password", "Password", "password", password, set_password)}
            {field("signup-confirm", "Confirm Password", "password", confirm, set_confirm)}
            <div class="form-control mt-6">
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                    } else {
                        "Create Account".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
