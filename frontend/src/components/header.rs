use leptos::*;

use crate::components::{use_session, Toasts};

#[component]
pub fn Header() -> impl IntoView {
    let wallet = use_session().wallet;
    let toasts = expect_context::<Toasts>();

    // Wallet picker, shown when several wallets are installed
    let (picker_open, set_picker_open) = create_signal(false);

    let connect = move |name: String| {
        set_picker_open.set(false);
        spawn_local(async move {
            if let Err(e) = wallet.connect(&name).await {
                toasts.info(format!("Wallet connection failed: {}", e));
            }
        });
    };

    let on_select_click = move |_| {
        let detected = wallet.detected_untracked();
        match detected.as_slice() {
            [] => {
                log::warn!("⚠️  No Solana wallet found");
                toasts.info("No Solana wallet found. Install Phantom, Solflare or Backpack.");
            }
            [only] => connect(only.name.clone()),
            _ => set_picker_open.update(|open| *open = !*open),
        }
    };

    let on_disconnect_click = move |_| {
        spawn_local(async move {
            wallet.disconnect().await;
        });
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"LAUNCHPAD"</a>
                <span class="badge">"devnet"</span>
            </div>
            <div class="header-right wallet-controls">
                <button
                    class="wallet-button"
                    on:click=on_select_click
                    disabled=move || wallet.connected()
                >
                    {move || wallet.state().button_label()}
                </button>

                <Show
                    when=move || picker_open.get()
                    fallback=|| view! { }
                >
                    <ul class="wallet-picker">
                        <For
                            each=move || wallet.detected()
                            key=|detected| detected.name.clone()
                            children=move |detected| {
                                let name = detected.name.clone();
                                view! {
                                    <li>
                                        <button class="wallet-option" on:click=move |_| connect(name.clone())>
                                            {detected.icon.clone().map(|icon| view! {
                                                <img src=icon alt="" class="wallet-icon"/>
                                            })}
                                            {detected.name.clone()}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>

                <button
                    class="wallet-button wallet-disconnect"
                    on:click=on_disconnect_click
                    disabled=move || !wallet.connected()
                >
                    "Disconnect"
                </button>
            </div>
        </header>
    }
}
