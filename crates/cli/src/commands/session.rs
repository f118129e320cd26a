//! Session commands: status, login, logout.

use localcart_widget::cart::CartWidget;
use localcart_widget::config::WidgetConfig;
use localcart_widget::session::{SessionManager, UserProfile};

use crate::console::ConsoleView;

/// Render current session and cart state.
pub fn status() -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    let mut view = ConsoleView;

    let manager = SessionManager::new(super::open_store()?, &config);
    manager.refresh(&mut view);

    let cart = CartWidget::load(super::open_store()?, &config);
    cart.render(&mut view);
    Ok(())
}

/// Write the session flag and profile record.
pub fn login(
    first_name: Option<String>,
    last_name: Option<String>,
    name: Option<String>,
    email: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    let mut manager = SessionManager::new(super::open_store()?, &config);
    let mut view = ConsoleView;

    let profile = UserProfile {
        first_name,
        last_name,
        name,
        email,
    };
    manager.login(&profile, &mut view)?;
    Ok(())
}

/// Clear the session entries and navigate to the login page.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    let mut manager = SessionManager::new(super::open_store()?, &config);
    let mut view = ConsoleView;

    manager.logout(&mut view)?;
    Ok(())
}
