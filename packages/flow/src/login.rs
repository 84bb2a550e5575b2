//! # Login form: `idle → loading → (success | error) → idle`
//!
//! [`LoginForm`] is the whole state of the onboarding screen's credential panel.
//! Every sign-in goes through three steps:
//!
//! 1. **begin** ([`begin_google`](LoginForm::begin_google) /
//!    [`begin_email`](LoginForm::begin_email)) clears the previous error and notice,
//!    sets `loading` and hands out an [`Attempt`]. Email sign-in is refused locally
//!    (no attempt, fixed message) when a field is empty. Nothing starts while another
//!    attempt is outstanding.
//! 2. the provider call runs outside the form.
//! 3. **settle** ([`settle`](LoginForm::settle)) records success or the provider's
//!    message verbatim and always clears `loading`. Results belonging to an attempt
//!    that is no longer current are discarded.
//!
//! [`submit_google`] and [`submit_email`] run all three steps against an
//! [`IdentityProvider`]. They reach the form only through a [`FormCell`], which
//! reports when the form's owner is gone; a continuation that resumes after
//! teardown then drops its result instead of writing to dead state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use api::{AuthError, IdentityProvider};

/// Shown when the email form is submitted with a blank field.
pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";
pub const GOOGLE_SUCCESS: &str = "Google sign-in successful!";
pub const EMAIL_SUCCESS: &str = "Email sign-in successful!";
pub const FACEBOOK_PENDING: &str =
    "Facebook login will be added after connecting Facebook developer app.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInMethod {
    Google,
    Email,
}

impl SignInMethod {
    fn success_notice(self) -> &'static str {
        match self {
            SignInMethod::Google => GOOGLE_SUCCESS,
            SignInMethod::Email => EMAIL_SUCCESS,
        }
    }
}

/// Token for one outstanding sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an attempt must be settled or the form stays loading"]
pub struct Attempt {
    method: SignInMethod,
    generation: u64,
}

/// Email/password pair captured when an email attempt begins.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// State of the onboarding screen's credential panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
    notice: Option<String>,
    loading: bool,
    generation: u64,
}

impl LoginForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Acknowledgment of a success or of the Facebook placeholder.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_google(&mut self) -> Option<Attempt> {
        if self.loading {
            return None;
        }
        Some(self.start(SignInMethod::Google))
    }

    /// Start an email attempt, or record the validation message.
    pub fn begin_email(&mut self) -> Option<(Attempt, Credentials)> {
        if self.loading {
            return None;
        }
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }
        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        Some((self.start(SignInMethod::Email), credentials))
    }

    /// Record the outcome of `attempt`. Returns `false` if it was stale.
    pub fn settle<T>(&mut self, attempt: Attempt, result: Result<T, AuthError>) -> bool {
        if attempt.generation != self.generation || !self.loading {
            tracing::debug!(method = ?attempt.method, "discarding stale sign-in result");
            return false;
        }
        self.loading = false;
        match result {
            Ok(_) => {
                self.notice = Some(attempt.method.success_notice().to_string());
            }
            Err(err) => {
                tracing::warn!(method = ?attempt.method, code = %err.code, "sign-in failed");
                self.error = Some(err.message);
            }
        }
        true
    }

    /// Facebook placeholder: acknowledge, never call out.
    pub fn facebook(&mut self) {
        if self.loading {
            return;
        }
        self.notice = Some(FACEBOOK_PENDING.to_string());
    }

    /// Invalidate any outstanding attempt and return to idle.
    pub fn abandon(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    fn start(&mut self, method: SignInMethod) -> Attempt {
        self.error = None;
        self.notice = None;
        self.loading = true;
        self.generation += 1;
        Attempt {
            method,
            generation: self.generation,
        }
    }
}

/// Shared access to a [`LoginForm`] that may have been torn down.
pub trait FormCell {
    /// Run `f` on the form, or return `None` if its owner is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R>;
}

impl FormCell for Rc<RefCell<LoginForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormCell for Weak<RefCell<LoginForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        let form = self.upgrade()?;
        let result = f(&mut form.borrow_mut());
        Some(result)
    }
}

/// Run a Google popup sign-in against `provider`.
pub async fn submit_google<F, P>(form: &F, provider: &P)
where
    F: FormCell,
    P: IdentityProvider,
{
    let Some(attempt) = form.with_form(LoginForm::begin_google).flatten() else {
        return;
    };
    let result = provider.sign_in_with_popup().await;
    finish(form, attempt, result);
}

/// Run an email/password sign-in against `provider`.
pub async fn submit_email<F, P>(form: &F, provider: &P)
where
    F: FormCell,
    P: IdentityProvider,
{
    let Some((attempt, credentials)) = form.with_form(LoginForm::begin_email).flatten() else {
        return;
    };
    let result = provider
        .sign_in_with_email_and_password(&credentials.email, &credentials.password)
        .await;
    finish(form, attempt, result);
}

fn finish<F: FormCell, T>(form: &F, attempt: Attempt, result: Result<T, AuthError>) {
    if form.with_form(|f| f.settle(attempt, result)).is_none() {
        tracing::debug!(method = ?attempt.method, "login form gone before sign-in settled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AuthSession, UserInfo};
    use futures::channel::oneshot;
    use std::cell::Cell;

    fn session() -> AuthSession {
        AuthSession {
            user: UserInfo {
                uid: "uid-1".to_string(),
                email: "kid@example.com".to_string(),
                display_name: None,
                photo_url: None,
                provider_id: "password".to_string(),
            },
            id_token: "id".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in_secs: 3600,
        }
    }

    /// Provider answering every call with a fixed result.
    struct Scripted {
        result: Result<AuthSession, AuthError>,
        calls: Cell<usize>,
        last_email: RefCell<Option<(String, String)>>,
    }

    impl Scripted {
        fn ok() -> Self {
            Self::answering(Ok(session()))
        }

        fn failing(message: &str) -> Self {
            Self::answering(Err(AuthError::new("auth/test", message)))
        }

        fn answering(result: Result<AuthSession, AuthError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                last_email: RefCell::new(None),
            }
        }
    }

    impl IdentityProvider for Scripted {
        async fn sign_in_with_popup(&self) -> Result<AuthSession, AuthError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }

        async fn sign_in_with_email_and_password(
            &self,
            email: &str,
            password: &str,
        ) -> Result<AuthSession, AuthError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_email.borrow_mut() = Some((email.to_string(), password.to_string()));
            self.result.clone()
        }
    }

    /// Provider whose popup stays open until the test resolves it.
    struct Held {
        answer: RefCell<Option<oneshot::Receiver<Result<AuthSession, AuthError>>>>,
    }

    impl IdentityProvider for Held {
        async fn sign_in_with_popup(&self) -> Result<AuthSession, AuthError> {
            let receiver = self.answer.borrow_mut().take().expect("popup opened twice");
            receiver
                .await
                .unwrap_or_else(|_| Err(AuthError::new("auth/test", "dropped")))
        }

        async fn sign_in_with_email_and_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<AuthSession, AuthError> {
            unreachable!("email sign-in not used")
        }
    }

    fn form_with(email: &str, password: &str) -> Rc<RefCell<LoginForm>> {
        Rc::new(RefCell::new(LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn empty_email_is_rejected_locally() {
        let form = form_with("", "x");
        let provider = Scripted::ok();

        submit_email(&form, &provider).await;

        let form = form.borrow();
        assert_eq!(form.error(), Some("Please enter both email and password."));
        assert!(!form.is_loading());
        assert_eq!(provider.calls.get(), 0);
    }

    #[tokio::test]
    async fn empty_password_is_rejected_locally() {
        let form = form_with("kid@example.com", "");
        let provider = Scripted::ok();

        submit_email(&form, &provider).await;

        assert_eq!(form.borrow().error(), Some(MISSING_CREDENTIALS));
        assert_eq!(provider.calls.get(), 0);
    }

    #[tokio::test]
    async fn email_success_is_acknowledged() {
        let form = form_with("kid@example.com", "secret");
        form.borrow_mut().facebook();
        let provider = Scripted::ok();

        submit_email(&form, &provider).await;

        let form = form.borrow();
        assert_eq!(form.notice(), Some(EMAIL_SUCCESS));
        assert_eq!(form.error(), None);
        assert!(!form.is_loading());
        assert_eq!(
            *provider.last_email.borrow(),
            Some(("kid@example.com".to_string(), "secret".to_string()))
        );
    }

    #[tokio::test]
    async fn email_failure_shows_provider_message_verbatim() {
        let form = form_with("kid@example.com", "wrong");
        let provider = Scripted::failing("Firebase: Error (auth/invalid-credential).");

        submit_email(&form, &provider).await;

        let form = form.borrow();
        assert_eq!(form.error(), Some("Firebase: Error (auth/invalid-credential)."));
        assert_eq!(form.notice(), None);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn google_rejection_is_displayed_and_loading_cleared() {
        let form = form_with("", "");
        let provider = Scripted::failing("popup closed by user");

        submit_google(&form, &provider).await;

        let form = form.borrow();
        assert_eq!(form.error(), Some("popup closed by user"));
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn google_success_clears_previous_error() {
        let form = form_with("", "x");
        let _ = form.borrow_mut().begin_email();
        assert!(form.borrow().error().is_some());

        submit_google(&form, &Scripted::ok()).await;

        let form = form.borrow();
        assert_eq!(form.error(), None);
        assert_eq!(form.notice(), Some(GOOGLE_SUCCESS));
    }

    #[tokio::test]
    async fn loading_is_set_while_the_call_is_outstanding() {
        let form = form_with("", "");
        let (resolve, answer) = oneshot::channel();
        let provider = Held {
            answer: RefCell::new(Some(answer)),
        };

        let observe = async {
            tokio::task::yield_now().await;
            assert!(form.borrow().is_loading());
            // A second trigger while loading does nothing.
            assert!(form.borrow_mut().begin_google().is_none());
            assert!(form.borrow_mut().begin_email().is_none());
            resolve.send(Ok(session())).unwrap();
        };
        futures::join!(submit_google(&form, &provider), observe);

        assert!(!form.borrow().is_loading());
        assert_eq!(form.borrow().notice(), Some(GOOGLE_SUCCESS));
    }

    #[tokio::test]
    async fn result_after_teardown_is_dropped() {
        let owner = form_with("", "");
        let weak = Rc::downgrade(&owner);
        let (resolve, answer) = oneshot::channel();
        let provider = Held {
            answer: RefCell::new(Some(answer)),
        };

        let unmount = async move {
            tokio::task::yield_now().await;
            assert!(owner.borrow().is_loading());
            drop(owner);
            resolve
                .send(Err(AuthError::new("auth/test", "late")))
                .unwrap();
        };
        futures::join!(submit_google(&weak, &provider), unmount);

        assert!(weak.upgrade().is_none());
    }

    #[tokio::test]
    async fn abandoned_sign_in_settles_nothing() {
        let form = form_with("", "");
        let (resolve, answer) = oneshot::channel();
        let provider = Held {
            answer: RefCell::new(Some(answer)),
        };

        let leave = async {
            tokio::task::yield_now().await;
            form.borrow_mut().abandon();
            assert!(!form.borrow().is_loading());
            resolve
                .send(Err(AuthError::new("auth/test", "late")))
                .unwrap();
        };
        futures::join!(submit_google(&form, &provider), leave);

        let form = form.borrow();
        assert_eq!(form.error(), None);
        assert_eq!(form.notice(), None);
        assert!(!form.is_loading());
    }

    #[test]
    fn stale_attempts_are_discarded() {
        let mut form = LoginForm::default();
        let first = form.begin_google().unwrap();
        form.abandon();
        assert!(!form.is_loading());

        let second = form.begin_google().unwrap();
        assert!(!form.settle(first, Err::<(), _>(AuthError::new("auth/test", "old"))));
        assert!(form.is_loading());
        assert_eq!(form.error(), None);

        assert!(form.settle(second, Ok(())));
        assert!(!form.is_loading());
        assert!(!form.settle(second, Ok(())));
    }

    #[test]
    fn facebook_is_a_placeholder() {
        let mut form = LoginForm::default();
        form.facebook();
        assert_eq!(form.notice(), Some(FACEBOOK_PENDING));
        assert!(!form.is_loading());

        // Neither message replaces the other.
        assert!(form.begin_email().is_none());
        assert_eq!(form.error(), Some(MISSING_CREDENTIALS));
        assert_eq!(form.notice(), Some(FACEBOOK_PENDING));
        form.facebook();
        assert_eq!(form.error(), Some(MISSING_CREDENTIALS));

        let _attempt = form.begin_google().unwrap();
        form.facebook();
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials {
            email: "kid@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
