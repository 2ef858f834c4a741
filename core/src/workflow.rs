//! The create-then-mint workflow.
//!
//! ```text
//!            create_token            mint_token
//!   NoMint ───────────────▶ MintCreated ─────────▶ Minted ─┐
//!      ▲                       │  ▲                  ▲     │ mint_token
//!      └── (create again replaces the mint identity) ┘     └─┘
//! ```
//!
//! [`LaunchSession`] owns the only mutable state of the launchpad: the busy
//! flag and the current [`LaunchPhase`]. A host (the Leptos form, or a test)
//! observes both through a [`LaunchObserver`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::capability::{send_transaction, Connection, Wallet};
use crate::config::{MINT_ACCOUNT_LEN, TOKEN_DECIMALS};
use crate::error::{LaunchError, LaunchResult, TransactionError, ValidationError};
use crate::form::TokenForm;
use crate::supply;
use crate::token;

// =============================================================================
// Notifications
// =============================================================================

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// The two user actions. At most one runs at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchAction {
    Create,
    Mint,
}

/// Receives state changes and notifications from a [`LaunchSession`].
pub trait LaunchObserver {
    fn notify(&self, notification: Notification);

    /// `Some(action)` once `action` holds the busy flag, `None` when it is
    /// released. Never called for a call rejected as busy.
    fn busy_changed(&self, _running: Option<LaunchAction>) {}

    fn phase_changed(&self, _phase: &LaunchPhase) {}
}

// =============================================================================
// Phase
// =============================================================================

/// Progress of the launch in the current session.
#[derive(Clone, Debug, Default)]
pub enum LaunchPhase {
    /// No mint account has been created yet.
    #[default]
    NoMint,
    /// A mint account exists; its supply has not been minted yet.
    MintCreated {
        mint: Rc<Keypair>,
        signature: Signature,
    },
    /// Supply has been minted at least once.
    Minted {
        mint: Rc<Keypair>,
        signature: Signature,
        amount: u64,
    },
}

impl LaunchPhase {
    /// The mint identity, once one has been created.
    pub fn mint(&self) -> Option<&Rc<Keypair>> {
        match self {
            LaunchPhase::NoMint => None,
            LaunchPhase::MintCreated { mint, .. } | LaunchPhase::Minted { mint, .. } => Some(mint),
        }
    }

    pub fn mint_address(&self) -> Option<Pubkey> {
        self.mint().map(|mint| mint.pubkey())
    }

    /// Signature of the last successful action.
    pub fn last_signature(&self) -> Option<Signature> {
        match self {
            LaunchPhase::NoMint => None,
            LaunchPhase::MintCreated { signature, .. } | LaunchPhase::Minted { signature, .. } => {
                Some(*signature)
            }
        }
    }

    pub fn is_minted(&self) -> bool {
        matches!(self, LaunchPhase::Minted { .. })
    }
}

/// Result of a successful `create_token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedMint {
    pub mint: Pubkey,
    pub signature: Signature,
}

/// Result of a successful `mint_token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub amount: u64,
    pub signature: Signature,
}

// =============================================================================
// Busy flag
// =============================================================================

/// Holds the busy flag for one action and releases it on drop, whatever the
/// outcome of the action.
struct BusyGuard<'a, O: LaunchObserver> {
    busy: &'a Cell<bool>,
    observer: &'a O,
}

impl<'a, O: LaunchObserver> BusyGuard<'a, O> {
    fn acquire(busy: &'a Cell<bool>, observer: &'a O, action: LaunchAction) -> LaunchResult<Self> {
        if busy.replace(true) {
            log::warn!("{:?} rejected, another action is running", action);
            return Err(LaunchError::Busy);
        }
        observer.busy_changed(Some(action));
        Ok(Self { busy, observer })
    }
}

impl<O: LaunchObserver> Drop for BusyGuard<'_, O> {
    fn drop(&mut self) {
        self.busy.set(false);
        self.observer.busy_changed(None);
    }
}

// =============================================================================
// Session
// =============================================================================

/// One launch form's worth of workflow state.
pub struct LaunchSession<C, W, O> {
    connection: C,
    wallet: W,
    observer: O,
    busy: Cell<bool>,
    phase: RefCell<LaunchPhase>,
}

impl<C, W, O> LaunchSession<C, W, O>
where
    C: Connection,
    W: Wallet,
    O: LaunchObserver,
{
    pub fn new(connection: C, wallet: W, observer: O) -> Self {
        Self {
            connection,
            wallet,
            observer,
            busy: Cell::new(false),
            phase: RefCell::new(LaunchPhase::NoMint),
        }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase.borrow().clone()
    }

    /// Create is offered when idle with a connected wallet.
    pub fn can_create(&self) -> bool {
        !self.is_busy() && self.wallet.is_connected()
    }

    /// Mint additionally needs a mint identity.
    pub fn can_mint(&self) -> bool {
        self.can_create() && self.phase.borrow().mint().is_some()
    }

    fn set_phase(&self, phase: LaunchPhase) {
        *self.phase.borrow_mut() = phase;
        self.observer.phase_changed(&self.phase.borrow());
    }

    /// Create a new mint account with the connected wallet as authority.
    ///
    /// Errors are reported to the observer as well as returned. The phase only
    /// advances when the transaction was submitted.
    pub async fn create_token(&self, form: &TokenForm) -> LaunchResult<CreatedMint> {
        let _busy = BusyGuard::acquire(&self.busy, &self.observer, LaunchAction::Create)?;

        match self.submit_create(form).await {
            Ok((mint, signature)) => {
                let created = CreatedMint {
                    mint: mint.pubkey(),
                    signature,
                };
                log::info!("Created mint {} ({})", created.mint, signature);
                self.set_phase(LaunchPhase::MintCreated {
                    mint: Rc::new(mint),
                    signature,
                });
                self.observer
                    .notify(Notification::success("Token mint created successfully"));
                Ok(created)
            }
            Err(err) => {
                log::error!("Create token failed: {}", err);
                self.observer
                    .notify(Notification::error(err.user_message("Failed to create token")));
                Err(err)
            }
        }
    }

    async fn submit_create(&self, form: &TokenForm) -> LaunchResult<(Keypair, Signature)> {
        form.validate()?;
        let payer = self
            .wallet
            .public_key()
            .ok_or(ValidationError::WalletNotConnected)?;
        log::debug!(
            "Token metadata '{}' ({}) is kept locally only",
            form.name,
            form.symbol
        );

        let mint = token::generate_mint_identity()?;
        let lamports = self
            .connection
            .get_minimum_balance_for_rent_exemption(MINT_ACCOUNT_LEN)
            .await?;
        let instructions =
            token::create_mint_instructions(&payer, &mint.pubkey(), lamports, TOKEN_DECIMALS)?;

        let blockhash = self.connection.get_latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&instructions, Some(&payer));
        transaction
            .try_partial_sign(&[&mint], blockhash.blockhash)
            .map_err(TransactionError::from)?;

        let signature = send_transaction(&self.wallet, &self.connection, transaction).await?;
        Ok((mint, signature))
    }

    /// Mint `initial_supply` whole tokens into the wallet's associated token
    /// account and wait for confirmation.
    pub async fn mint_token(&self, initial_supply: &str) -> LaunchResult<MintReceipt> {
        let _busy = BusyGuard::acquire(&self.busy, &self.observer, LaunchAction::Mint)?;

        match self.submit_mint(initial_supply).await {
            Ok((mint, receipt)) => {
                log::info!(
                    "Minted {} base units of {} into {} ({})",
                    receipt.amount,
                    receipt.mint,
                    receipt.token_account,
                    receipt.signature
                );
                self.set_phase(LaunchPhase::Minted {
                    mint,
                    signature: receipt.signature,
                    amount: receipt.amount,
                });
                self.observer
                    .notify(Notification::success("Token minted successfully"));
                Ok(receipt)
            }
            Err(err) => {
                log::error!("Mint token failed: {}", err);
                self.observer
                    .notify(Notification::error(err.user_message("Failed to mint token")));
                Err(err)
            }
        }
    }

    async fn submit_mint(&self, initial_supply: &str) -> LaunchResult<(Rc<Keypair>, MintReceipt)> {
        let owner = self
            .wallet
            .public_key()
            .ok_or(ValidationError::WalletNotConnected)?;
        let mint = self
            .phase
            .borrow()
            .mint()
            .cloned()
            .ok_or(ValidationError::MintNotCreated)?;
        let amount = supply::to_base_units(initial_supply, TOKEN_DECIMALS)?;

        let mint_address = mint.pubkey();
        let token_account = token::associated_token_address(&owner, &mint_address);
        let instructions = token::mint_supply_instructions(&owner, &mint_address, amount)?;

        let blockhash = self.connection.get_latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&instructions, Some(&owner));
        transaction.message.recent_blockhash = blockhash.blockhash;

        let signature = send_transaction(&self.wallet, &self.connection, transaction).await?;
        self.connection
            .confirm_transaction(&signature, &blockhash)
            .await?;

        Ok((
            mint,
            MintReceipt {
                mint: mint_address,
                token_account,
                amount,
                signature,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct BusyLog(RefCell<Vec<Option<LaunchAction>>>);

    impl LaunchObserver for BusyLog {
        fn notify(&self, _notification: Notification) {}

        fn busy_changed(&self, running: Option<LaunchAction>) {
            self.0.borrow_mut().push(running);
        }
    }

    #[test]
    fn test_busy_guard_is_exclusive_and_released_on_drop() {
        let busy = Cell::new(false);
        let observer = BusyLog::default();
        {
            let _guard = BusyGuard::acquire(&busy, &observer, LaunchAction::Create).unwrap();
            assert!(busy.get());
            assert!(matches!(
                BusyGuard::acquire(&busy, &observer, LaunchAction::Mint),
                Err(LaunchError::Busy)
            ));
            // the failed acquire must not have cleared the flag
            assert!(busy.get());
        }
        assert!(!busy.get());
        assert_eq!(*observer.0.borrow(), vec![Some(LaunchAction::Create), None]);
    }

    #[test]
    fn test_phase_accessors() {
        assert!(LaunchPhase::NoMint.mint().is_none());
        assert!(LaunchPhase::NoMint.last_signature().is_none());

        let mint = Rc::new(Keypair::new());
        let created = LaunchPhase::MintCreated {
            mint: mint.clone(),
            signature: Signature::default(),
        };
        assert_eq!(created.mint_address(), Some(mint.pubkey()));
        assert!(!created.is_minted());

        let minted = LaunchPhase::Minted {
            mint: mint.clone(),
            signature: Signature::default(),
            amount: 5,
        };
        assert!(minted.is_minted());
        assert_eq!(minted.mint_address(), Some(mint.pubkey()));
    }
}
