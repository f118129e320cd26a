//! Session-flag tracking.
//!
//! "Login" here is simulated: a flag and a profile record written into the
//! backing store, with no server-verified token behind them. The manager
//! reads both on every refresh and drives the session portion of the view.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::storage::{self, KeyValueStore, keys};
use crate::view::{SessionView, StorefrontView};

/// Stored value of the login flag. Anything else means logged out.
const LOGGED_IN_FLAG: &str = "true";

/// The stored user profile record.
///
/// All fields are optional: the record is whatever the login form collected.
/// Unknown fields in previously stored records are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Display name shown when the profile carries no usable name.
    pub const FALLBACK_DISPLAY_NAME: &'static str = "User";

    /// Name to display for this profile: `first_name`, falling back to
    /// `name`, falling back to a literal default.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(Self::FALLBACK_DISPLAY_NAME)
    }
}

/// Reads and writes the session flag and profile record.
pub struct SessionManager<S> {
    store: S,
    login_url: String,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Create a manager over `store`.
    pub fn new(store: S, config: &WidgetConfig) -> Self {
        Self {
            store,
            login_url: config.login_url.clone(),
        }
    }

    /// True iff the stored flag equals the literal `"true"`.
    ///
    /// A storage-read failure is logged and reported as logged out.
    pub fn is_logged_in(&self) -> bool {
        match self.store.get(keys::IS_LOGGED_IN) {
            Ok(Some(flag)) => flag == LOGGED_IN_FLAG,
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to read login flag");
                false
            }
        }
    }

    /// The stored profile record, if present and well-formed.
    ///
    /// Absent key, malformed JSON, and storage-read failure all yield `None`.
    pub fn current_user(&self) -> Option<UserProfile> {
        storage::get_json(&self.store, keys::CURRENT_USER).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read user profile");
            None
        })
    }

    /// Write the flag and profile record, then refresh the view.
    ///
    /// Unconditionally overwrites any existing session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to write.
    pub fn login(&mut self, profile: &UserProfile, view: &mut dyn StorefrontView) -> Result<()> {
        self.store.set(keys::IS_LOGGED_IN, LOGGED_IN_FLAG)?;
        storage::set_json(&mut self.store, keys::CURRENT_USER, profile)?;
        debug!(display_name = profile.display_name(), "logged in");
        self.refresh(view);
        Ok(())
    }

    /// Clear both session entries, refresh the view, and navigate to the
    /// login page.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to delete.
    pub fn logout(&mut self, view: &mut dyn StorefrontView) -> Result<()> {
        self.store.remove(keys::IS_LOGGED_IN)?;
        self.store.remove(keys::CURRENT_USER)?;
        debug!("logged out");
        self.refresh(view);
        view.navigate(&self.login_url);
        Ok(())
    }

    /// Recompute session display state and hand it to the view.
    pub fn refresh(&self, view: &mut dyn StorefrontView) {
        view.render_session(&self.session_view());
    }

    /// Current session display state.
    ///
    /// Logged-in iff the flag is set *and* a well-formed profile record is
    /// present; a dangling flag without a profile renders as logged out.
    #[must_use]
    pub fn session_view(&self) -> SessionView {
        if !self.is_logged_in() {
            return SessionView::logged_out();
        }
        self.current_user().map_or_else(SessionView::logged_out, |user| SessionView {
            logged_in: true,
            display_name: Some(user.display_name().to_owned()),
        })
    }

    /// Access the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
