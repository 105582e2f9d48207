use fincore::ac::principal::Principal;
use leptos::prelude::*;
use leptos_router::{
    components::{A, Route},
    MatchNestedRoutes,
    StaticSegment,
};

use crate::{
    component::Outcome,
    error::AppError,
};

pub mod api;
use api::{
    ForgotPassword,
    Register,
    SignIn,
    SignOut,
    current_principal,
};

#[derive(Clone)]
pub struct AccountCtx {
    pub current_principal: ArcResource<Result<Principal, AppError>>,
}

pub fn provide_session_context() {
    let current_principal = ArcResource::new_blocking(
        move || (),
        move |_| async move {
            current_principal().await
        },
    );
    provide_context(AccountCtx {
        current_principal,
    });
}

#[component]
pub fn ACRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <Route path=StaticSegment("login") view=LoginPage/>
        <Route path=StaticSegment("register") view=RegisterPage/>
        <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
        <Route path=StaticSegment("logged_out") view=LogoutPage/>
    }
    .into_inner()
}

#[component]
pub fn SessionStatus() -> impl IntoView {
    let account_ctx = expect_context::<AccountCtx>();
    let action = ServerAction::<SignOut>::new();
    let session_status_view = move || {
        let current_principal = account_ctx.current_principal.clone();
        Suspend::new(async move {
            current_principal.await
                .map(|principal| match principal.name() {
                    Some(name) => view! {
                        <span>"Logged in as "{name.to_string()}</span>
                        <ActionForm action=action>
                            <button type="submit">"Sign out"</button>
                        </ActionForm>
                    }.into_any(),
                    None => view! {
                        <A href="/login">"Sign in"</A>
                        <A href="/register">"Sign up"</A>
                    }.into_any(),
                })
                .unwrap_or_else(|_| view! {
                    <div>"Error retrieving session info."</div>
                }.into_any())
        })
    };
    let account_ctx = expect_context::<AccountCtx>();
    view! {
        <div id="session-status">
            {move || match action.value().get() {
                Some(Ok(())) => account_ctx.current_principal.refetch(),
                _ => (),
            }}
            <Suspense>{session_status_view}</Suspense>
        </div>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    let account_ctx = expect_context::<AccountCtx>();
    let action = ServerAction::<SignIn>::new();

    Effect::new(move |_| {
        if let Some(Ok(_)) = action.value().get() {
            account_ctx.current_principal.refetch();
        }
    });

    view! {
        <h1>"Sign In"</h1>
        <ActionForm attr:id="sign-in" attr:class="standard" action=action>
            <div><Outcome value=action.value()/></div>
            <div>
                <label for="email">"Email"</label>
                <input type="email" id="email" name="email" required/>
            </div>
            <div>
                <label for="password">"Password"</label>
                <input type="password" id="password" name="password" required/>
            </div>
            <div>
                <button type="submit">"Sign In"</button>
            </div>
        </ActionForm>
        <p>
            <A href="/forgot-password">"Forgot your password?"</A>
            " "
            <A href="/register">"Create an account"</A>
        </p>
    }
}

#[component]
fn RegisterPage() -> impl IntoView {
    let account_ctx = expect_context::<AccountCtx>();
    let action = ServerAction::<Register>::new();

    Effect::new(move |_| {
        if let Some(Ok(_)) = action.value().get() {
            account_ctx.current_principal.refetch();
        }
    });

    view! {
        <h1>"Sign Up"</h1>
        <ActionForm attr:id="sign-up" attr:class="standard" action=action>
            <div><Outcome value=action.value()/></div>
            <div>
                <label for="name">"Name"</label>
                <input type="text" id="name" name="name" required/>
            </div>
            <div>
                <label for="email">"Email"</label>
                <input type="email" id="email" name="email" required/>
            </div>
            <div>
                <label for="password">"Password"</label>
                <input type="password" id="password" name="password" required/>
            </div>
            <div>
                <label for="confirmPassword">"Confirm Password"</label>
                <input type="password" id="confirmPassword" name="confirm_password" required/>
            </div>
            <div>
                <button type="submit">"Create Account"</button>
            </div>
        </ActionForm>
        <p>"Already registered? "<A href="/login">"Sign in"</A></p>
    }
}

#[component]
fn ForgotPasswordPage() -> impl IntoView {
    let action = ServerAction::<ForgotPassword>::new();

    view! {
        <h1>"Forgot Password"</h1>
        <ActionForm attr:id="forgot-password" attr:class="standard" action=action>
            <div><Outcome value=action.value()/></div>
            <div>
                <label for="email">"Email"</label>
                <input type="email" id="email" name="email" required/>
            </div>
            <div>
                <button type="submit">"Send Reset Instructions"</button>
            </div>
        </ActionForm>
        <p><A href="/login">"Back to sign in"</A></p>
    }
}

#[component]
fn LogoutPage() -> impl IntoView {
    view! {
        <h1>"You are now logged out."</h1>
    }
}
