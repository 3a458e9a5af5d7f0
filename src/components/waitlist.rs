use gloo_console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::ThemeHandle;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const CONFIRMATION_TITLE: &str = "Welcome to the Beta!";
pub const CONFIRMATION_BODY: &str =
    "You're now on the list! We'll send you exclusive updates and your early access invitation soon.";

/// Permissive syntactic check, not a deliverability check: one `@` with a
/// non-empty local part, and a domain with a `.` strictly inside it. No
/// segment may contain whitespace or a second `@`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let segment_ok =
        |s: &str| !s.is_empty() && !s.contains('@') && !s.contains(char::is_whitespace);
    if !segment_ok(local) || !segment_ok(domain) {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i < domain.len() - 1)
}

/// The email-capture form. Nothing is sent anywhere: a valid submission
/// flips the form into its confirmation state for the rest of the session,
/// an invalid one shows the fixed inline error and stays editable.
#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let theme = use_context::<ThemeHandle>().unwrap();
    let email = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);
    let classes = theme.classes();

    let oninput = {
        let email = email.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        }
    };

    let onsubmit = {
        let email = email.clone();
        let submitted = submitted.clone();
        let error_setter = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_setter.set(None);
            if !is_valid_email(&email) {
                log!("waitlist submit rejected: invalid email format");
                error_setter.set(Some(INVALID_EMAIL_MESSAGE.to_string()));
                return;
            }
            submitted.set(true);
        })
    };

    html! {
        <>
        {
            if !*submitted {
                html! {
                    <form onsubmit={onsubmit} class="waitlist-form">
                        <div class="waitlist-input-wrap">
                            <input
                                type="email"
                                value={(*email).clone()}
                                placeholder="Enter your email to secure your spot"
                                class={classes!("waitlist-input", classes.input)}
                                oninput={oninput}
                                required=true
                            />
                            <i class={classes!("fas", "fa-envelope", "waitlist-input-icon", classes.accent)}></i>
                        </div>
                        {
                            if let Some(error_message) = (*error).as_ref() {
                                html! {
                                    <p class="waitlist-error">{error_message}</p>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="waitlist-submit">
                            {"Secure My Beta Spot"}
                            <i class="fas fa-arrow-right"></i>
                        </button>
                    </form>
                }
            } else {
                html! {
                    <div class="waitlist-confirmation">
                        <i class={classes!("fas", "fa-circle-check", "confirmation-icon", classes.accent)}></i>
                        <h3 class="gradient-text">{CONFIRMATION_TITLE}</h3>
                        <p class={classes!("confirmation-body", classes.text_muted)}>
                            {CONFIRMATION_BODY}
                        </p>
                    </div>
                }
            }
        }
        <style>
            {r#"
    .waitlist-form {
        max-width: 42rem;
        margin: 0 auto;
    }
    .waitlist-input-wrap {
        position: relative;
    }
    .waitlist-input {
        width: 100%;
        padding: 1rem 3.5rem 1rem 1.5rem;
        border: 2px solid transparent;
        border-radius: 16px;
        font-size: 1.125rem;
        outline: none;
        transition: all 0.2s ease;
    }
    .waitlist-input:focus {
        border-color: #10B981;
        box-shadow: 0 0 0 4px rgba(16, 185, 129, 0.3);
    }
    .waitlist-input-icon {
        position: absolute;
        right: 1rem;
        top: 50%;
        transform: translateY(-50%);
        font-size: 1.25rem;
        pointer-events: none;
    }
    .waitlist-error {
        color: #f87171;
        font-size: 0.875rem;
        margin: 1rem 0 0;
    }
    .waitlist-submit {
        width: 100%;
        margin-top: 1.5rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 16px;
        background: linear-gradient(to right, #10B981, #14B8A6);
        color: #000;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .waitlist-submit i {
        margin-left: 0.5rem;
    }
    .waitlist-submit:hover {
        transform: translateY(-4px);
        box-shadow: 0 8px 32px rgba(16, 185, 129, 0.3);
    }
    .waitlist-submit:active {
        transform: scale(0.98);
    }
    .waitlist-confirmation {
        max-width: 42rem;
        margin: 0 auto;
        text-align: center;
    }
    .waitlist-confirmation h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin: 1.5rem 0 1rem;
    }
    .confirmation-icon {
        font-size: 3rem;
    }
    .confirmation-body {
        font-size: 1.125rem;
        margin: 0;
    }
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in [
            "dj@example.com",
            "a@b.c",
            "user.name@sub.domain.io",
            "u+tag@example.co.uk",
            "x@y..z",
        ] {
            assert!(is_valid_email(email), "expected valid: {email:?}");
        }
    }

    #[test]
    fn rejects_missing_at_or_dot() {
        for email in ["", "not-an-email", "a@b", "plainaddress", "a.b.c"] {
            assert!(!is_valid_email(email), "expected invalid: {email:?}");
        }
    }

    #[test]
    fn rejects_empty_or_misplaced_segments() {
        for email in ["@b.c", "a@", "a@.c", "a@c.", "a@b.c@d.e", "a@@b.c"] {
            assert!(!is_valid_email(email), "expected invalid: {email:?}");
        }
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        for email in ["a b@c.d", "a@b c.d", " a@b.c", "a@b.c ", "a@b.\tc"] {
            assert!(!is_valid_email(email), "expected invalid: {email:?}");
        }
    }

    #[test]
    fn error_and_confirmation_copy_is_fixed() {
        assert_eq!(INVALID_EMAIL_MESSAGE, "Please enter a valid email address");
        assert_eq!(CONFIRMATION_TITLE, "Welcome to the Beta!");
    }
}
