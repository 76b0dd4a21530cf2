//! Shared UI crate for Eventdeck. Views, components and their state live here;
//! the platform crates only add routing and launch configuration.

pub mod core;
pub mod events;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod event_map;
    pub use event_map::EventMap;

    pub mod text_field;
    pub use text_field::TextField;

    pub mod toggle;
    pub use toggle::Toggle;
}

/// Shared theme, embedded so every platform can inline it.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
