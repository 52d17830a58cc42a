use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::user::{AuthDto, UserDto};

#[cfg(feature = "web")]
use crate::client::constant::SESSION_STORAGE_KEY;
#[cfg(feature = "web")]
use gloo_storage::{LocalStorage, Storage};

/// Token issued at login together with the user it identifies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserDto,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Local storage has not been read yet
    Initializing,
    Authenticated(Session),
    NotLoggedIn,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<String> {
        match self {
            AuthState::Authenticated(session) => Some(session.token.clone()),
            _ => None,
        }
    }
}

/// Current session shared through the component tree and mirrored to local storage.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token()
    }

    /// Restores a session saved by an earlier visit.
    #[cfg(feature = "web")]
    pub fn restore(&mut self) {
        let state = match LocalStorage::get::<Session>(SESSION_STORAGE_KEY) {
            Ok(session) => AuthState::Authenticated(session),
            Err(_) => AuthState::NotLoggedIn,
        };
        self.inner.set(state);
    }

    pub fn sign_in(&mut self, auth: AuthDto) {
        let session = Session {
            token: auth.token,
            user: auth.user,
        };

        #[cfg(feature = "web")]
        if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, &session) {
            dioxus_logger::tracing::warn!("Failed to persist session: {}", e);
        }

        self.inner.set(AuthState::Authenticated(session));
    }

    /// Replaces the stored user after a profile change, keeping the token.
    pub fn update_user(&mut self, user: UserDto) {
        let Some(token) = self.token() else {
            return;
        };
        let session = Session { token, user };

        #[cfg(feature = "web")]
        if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, &session) {
            dioxus_logger::tracing::warn!("Failed to persist session: {}", e);
        }

        self.inner.set(AuthState::Authenticated(session));
    }

    pub fn sign_out(&mut self) {
        #[cfg(feature = "web")]
        LocalStorage::delete(SESSION_STORAGE_KEY);

        self.inner.set(AuthState::NotLoggedIn);
    }
}
