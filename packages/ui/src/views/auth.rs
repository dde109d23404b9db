//! Login, signup and logout pages.

use dioxus::prelude::*;
use store::FormErrors;

use super::FieldErrors;
use crate::urls;

/// Login form. `next` is posted back so the user lands where they were headed.
#[component]
pub fn Login(
    #[props(default)] username: String,
    next: Option<String>,
    #[props(default)] errors: FormErrors,
) -> Element {
    rsx! {
        h1 { "Log in" }
        form {
            method: "post",
            action: urls::LOGIN,
            FieldErrors { messages: errors.general().to_vec() }
            p {
                label {
                    "Username "
                    input { r#type: "text", name: "username", value: "{username}" }
                }
            }
            FieldErrors { messages: errors.field("username").to_vec() }
            p {
                label {
                    "Password "
                    input { r#type: "password", name: "password" }
                }
            }
            FieldErrors { messages: errors.field("password").to_vec() }
            if let Some(ref next) = next {
                input { r#type: "hidden", name: "next", value: "{next}" }
            }
            button { r#type: "submit", "Log in" }
        }
        p {
            "No account yet? "
            a { href: urls::SIGNUP, "Sign up" }
        }
    }
}

#[component]
pub fn Signup(#[props(default)] username: String, #[props(default)] errors: FormErrors) -> Element {
    rsx! {
        h1 { "Sign up" }
        form {
            method: "post",
            action: urls::SIGNUP,
            FieldErrors { messages: errors.general().to_vec() }
            p {
                label {
                    "Username "
                    input { r#type: "text", name: "username", value: "{username}" }
                }
            }
            FieldErrors { messages: errors.field("username").to_vec() }
            p {
                label {
                    "Password "
                    input { r#type: "password", name: "password1" }
                }
            }
            FieldErrors { messages: errors.field("password1").to_vec() }
            p {
                label {
                    "Password confirmation "
                    input { r#type: "password", name: "password2" }
                }
            }
            FieldErrors { messages: errors.field("password2").to_vec() }
            button { r#type: "submit", "Sign up" }
        }
    }
}

#[component]
pub fn LoggedOut() -> Element {
    rsx! {
        h1 { "Logged out" }
        p { "You have been logged out." }
        p {
            a { href: urls::LOGIN, "Log in again" }
        }
    }
}
