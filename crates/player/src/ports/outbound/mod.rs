//! Outbound ports - what the session needs from the outside world

mod localization_port;

#[cfg(any(test, feature = "testing"))]
pub use localization_port::MockLocalizationPort;
pub use localization_port::LocalizationPort;
