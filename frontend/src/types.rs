//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - Transient notifications
//! - **Wallet Types** - Detected wallets and connection state

use launchpad::{Notification, NotificationLevel, Pubkey};
use serde::Deserialize;

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Informational message
    Info,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✅",
            ToastLevel::Error => "❌",
            ToastLevel::Info => "ℹ️",
        }
    }
}

impl From<NotificationLevel> for ToastLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Success => ToastLevel::Success,
            NotificationLevel::Error => ToastLevel::Error,
        }
    }
}

/// A single toast on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique id, used as list key and for dismissal
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl Toast {
    pub fn from_notification(id: u64, notification: Notification, timestamp: String) -> Self {
        Self {
            id,
            level: notification.level.into(),
            message: notification.message,
            timestamp,
        }
    }
}

// =============================================================================
// Wallet Types
// =============================================================================

/// A wallet registered on the page through the Wallet Standard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DetectedWallet {
    /// Wallet name, e.g. "Phantom"
    pub name: String,
    /// Data URI of the wallet icon
    pub icon: Option<String>,
}

/// Connected account as returned by the JS bridge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WalletAccount {
    /// Wallet the account belongs to
    pub name: String,
    /// Base58 address
    pub address: String,
}

/// Wallet connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting(String),
    Connected { name: String, public_key: Pubkey },
    Error(String),
}

impl WalletState {
    pub fn public_key(&self) -> Option<Pubkey> {
        match self {
            WalletState::Connected { public_key, .. } => Some(*public_key),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn wallet_name(&self) -> Option<&str> {
        match self {
            WalletState::Connected { name, .. } | WalletState::Connecting(name) => Some(name),
            _ => None,
        }
    }

    /// Text of the connect button.
    pub fn button_label(&self) -> String {
        match (self.public_key(), self.wallet_name()) {
            (Some(public_key), _) => short_address(&public_key.to_string()),
            (None, Some(name)) => format!("Connecting to {}...", name),
            (None, None) => "Select Wallet".to_string(),
        }
    }
}

/// `7xKX…AsU` style short form of an address.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..4], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
            "7xKX...gAsU"
        );
        assert_eq!(short_address("abc"), "abc");
    }

    #[test]
    fn test_toast_from_notification() {
        let toast = Toast::from_notification(
            3,
            Notification::error("All fields are required"),
            "12:00:00".into(),
        );
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.level.css_class(), "toast toast-error");
        assert_eq!(toast.message, "All fields are required");
    }

    #[test]
    fn test_wallet_account_deserialization() {
        let json = r#"{ "name": "Phantom", "address": "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU" }"#;
        let account: WalletAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.name, "Phantom");

        let state = WalletState::Connecting("Phantom".into());
        assert_eq!(state.wallet_name(), Some("Phantom"));
        assert!(!state.is_connected());
        assert!(state.public_key().is_none());
    }

    #[test]
    fn test_wallet_button_label() {
        assert_eq!(WalletState::Disconnected.button_label(), "Select Wallet");
        assert_eq!(WalletState::Error("User rejected".into()).button_label(), "Select Wallet");
        assert_eq!(
            WalletState::Connecting("Solflare".into()).button_label(),
            "Connecting to Solflare..."
        );

        let public_key: Pubkey = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".parse().unwrap();
        let state = WalletState::Connected {
            name: "Phantom".into(),
            public_key,
        };
        assert_eq!(state.button_label(), "7xKX...gAsU");
        assert_eq!(state.wallet_name(), Some("Phantom"));
    }
}
