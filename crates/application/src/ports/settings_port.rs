//! Settings port
//!
//! Read access to the persisted plugin settings.

#[cfg(test)]
use mockall::automock;

/// Port for reading plugin settings
#[cfg_attr(test, automock)]
pub trait SettingsPort: Send + Sync {
    /// The configured weather API key, if any
    fn weather_api_key(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SettingsPort>();
    }

    #[test]
    fn mock_returns_key() {
        let mut mock = MockSettingsPort::new();
        mock.expect_weather_api_key().returning(|| None);
        assert!(mock.weather_api_key().is_none());
    }
}
