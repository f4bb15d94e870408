use log::Level;

/// Component-scoped logging. Records go through the `log` facade with the
/// component name as target, and end up in the browser console.
pub struct Logger;

impl Logger {
    /// Install the console sink and panic hook. Safe to call more than once.
    pub fn init(level: Level) {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(level) {
            gloo::console::warn!("Console logger already installed:", e.to_string());
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(target: component, level, "{}", message);
    }
}
