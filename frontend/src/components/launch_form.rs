//! Token launch form: four inputs, Create and Mint.

use std::rc::Rc;

use launchpad::supply::format_base_units;
use launchpad::{
    FormField, LaunchAction, LaunchObserver, LaunchPhase, LaunchSession, Notification, TokenForm,
    TOKEN_DECIMALS,
};
use leptos::*;

use crate::components::{use_session, Toasts};
use crate::services::{BrowserWallet, RpcConnection};
use crate::types::short_address;

/// Bridges workflow events into signals and toasts.
struct FormObserver {
    running: WriteSignal<Option<LaunchAction>>,
    phase: WriteSignal<LaunchPhase>,
    toasts: Toasts,
}

impl LaunchObserver for FormObserver {
    fn notify(&self, notification: Notification) {
        self.toasts.push(notification);
    }

    fn busy_changed(&self, running: Option<LaunchAction>) {
        self.running.set(running);
    }

    fn phase_changed(&self, phase: &LaunchPhase) {
        self.phase.set(phase.clone());
    }
}

type FormSession = LaunchSession<RpcConnection, BrowserWallet, FormObserver>;

#[component]
pub fn LaunchForm() -> impl IntoView {
    let session = use_session();
    let wallet = session.wallet;
    let toasts = expect_context::<Toasts>();

    // Set by the session only once an action holds the busy flag
    let (running, set_running) = create_signal(None::<LaunchAction>);
    let (phase, set_phase) = create_signal(LaunchPhase::NoMint);
    let busy = move || running.with(Option::is_some);
    let is_running = move |action| running.get() == Some(action);
    let form = create_rw_signal(TokenForm::default());

    let launch: StoredValue<Rc<FormSession>> = store_value(Rc::new(LaunchSession::new(
        session.connection.clone(),
        wallet,
        FormObserver {
            running: set_running,
            phase: set_phase,
            toasts,
        },
    )));

    let on_create = move |_| {
        let launch = launch.get_value();
        let snapshot = form.get_untracked();
        spawn_local(async move {
            if let Ok(created) = launch.create_token(&snapshot).await {
                log::info!("🪙 Mint {} ready for minting", created.mint);
            }
        });
    };

    let on_mint = move |_| {
        let launch = launch.get_value();
        let supply = form.with_untracked(|form| form.initial_supply.clone());
        spawn_local(async move {
            if let Ok(receipt) = launch.mint_token(&supply).await {
                log::info!("💰 {} base units in {}", receipt.amount, receipt.token_account);
            }
        });
    };

    let create_disabled = move || busy() || !wallet.connected();
    let mint_disabled =
        move || busy() || !wallet.connected() || phase.with(|p| p.mint().is_none());

    let inputs = FormField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    type="text"
                    class="form-input"
                    placeholder=field.placeholder()
                    inputmode={if field == FormField::InitialSupply { "decimal" } else { "text" }}
                    prop:value=move || form.with(|form| form.field(field).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|form| *form.field_mut(field) = value);
                    }
                />
            }
        })
        .collect_view();

    view! {
        <section class="launch-form">
            <div class="form-fields">{inputs}</div>

            <div class="form-actions">
                <button class="btn btn-primary" on:click=on_create disabled=create_disabled>
                    {move || if is_running(LaunchAction::Create) { "Creating..." } else { "Create Token" }}
                </button>
                <button class="btn btn-secondary" on:click=on_mint disabled=mint_disabled>
                    {move || if is_running(LaunchAction::Mint) { "Minting..." } else { "Mint Tokens" }}
                </button>
            </div>

            <Show
                when=move || !wallet.connected()
                fallback=|| view! { }
            >
                <p class="warning">"Please connect your wallet to create and mint tokens"</p>
            </Show>

            {move || {
                phase.with(|phase| {
                    phase.mint_address().map(|mint| {
                        let explorer = format!(
                            "https://explorer.solana.com/address/{}?cluster=devnet",
                            mint
                        );
                        let minted = match phase {
                            LaunchPhase::Minted { amount, .. } => {
                                Some(format_base_units(*amount, TOKEN_DECIMALS))
                            }
                            _ => None,
                        };
                        let transaction = phase.last_signature().map(|signature| {
                            let signature = signature.to_string();
                            let href = format!(
                                "https://explorer.solana.com/tx/{}?cluster=devnet",
                                signature
                            );
                            (short_address(&signature), href)
                        });
                        view! {
                            <div class="mint-info">
                                <div class="mint-row">
                                    <span class="mint-label">"Mint address"</span>
                                    <a class="mint-address" href=explorer target="_blank">
                                        {mint.to_string()}
                                    </a>
                                </div>
                                {transaction.map(|(label, href)| view! {
                                    <div class="mint-row">
                                        <span class="mint-label">"Last transaction"</span>
                                        <a class="mint-address" href=href target="_blank">{label}</a>
                                    </div>
                                })}
                                {minted.map(|minted| view! {
                                    <div class="mint-row">
                                        <span class="mint-label">"Last minted"</span>
                                        <span class="mint-amount">{minted}</span>
                                    </div>
                                })}
                            </div>
                        }
                    })
                })
            }}
        </section>
    }
}
