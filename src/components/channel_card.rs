//! Card component for channel list entries on the channels page.

use leptos::prelude::*;

/// A channel entry with its unjoin action.
#[component]
pub fn ChannelCard(name: String, on_unjoin: Callback<String>) -> impl IntoView {
    let unjoin_name = name.clone();

    view! {
        <div class="channel-card">
            <span class="channel-card__name">{name}</span>
            <button
                class="btn btn--danger channel-card__unjoin"
                on:click=move |_| on_unjoin.run(unjoin_name.clone())
            >
                "Unjoin..."
            </button>
        </div>
    }
}
