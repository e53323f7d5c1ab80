//! Channels page listing channel participation with unjoin actions.

use leptos::prelude::*;

use crate::components::channel_card::ChannelCard;
use crate::components::unjoin_channel_modal::UnjoinChannelModal;
use crate::net::types::ChannelInfo;
use crate::state::channels::ChannelsState;

/// Channels page — lists every channel known to the ordering service and
/// hosts the unjoin modal for the channel the operator picked.
#[component]
pub fn ChannelsPage() -> impl IntoView {
    let channels = expect_context::<RwSignal<ChannelsState>>();

    let load_channels = move || {
        channels.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = crate::net::api::fetch_channels().await.unwrap_or_default();
            channels.update(|s| {
                s.items = items;
                s.loading = false;
            });
        });
    };

    // Initial load on mount.
    Effect::new(move || load_channels());

    // Unjoin dialog state: which channel is open, plus its fetched details.
    let unjoin_target = RwSignal::new(None::<String>);
    let channel_details = RwSignal::new(None::<ChannelInfo>);
    let details_loading = RwSignal::new(false);

    let on_unjoin = Callback::new(move |name: String| {
        unjoin_target.set(Some(name.clone()));
        channel_details.set(None);
        details_loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let info = crate::net::api::fetch_channel(&name).await;
            if info.is_none() {
                leptos::logging::warn!("channel details fetch failed: {name}");
            }
            channel_details.set(info);
            details_loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    });

    let on_close = Callback::new(move |()| {
        unjoin_target.set(None);
        channel_details.set(None);
    });

    // Every selected node unjoined; the list is stale, so refetch it.
    let on_complete = Callback::new(move |()| load_channels());

    view! {
        <div class="channels-page">
            <header class="channels-page__header">
                <h1>"Channels"</h1>
            </header>

            <Show
                when=move || !channels.get().loading
                fallback=|| view! { <p class="channels-page__loading">"Loading channels..."</p> }
            >
                {move || {
                    let items = channels.get().items;
                    if items.is_empty() {
                        view! {
                            <p class="channels-page__empty">"No channels."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="channels-page__list">
                                {items
                                    .into_iter()
                                    .map(|ch| view! { <ChannelCard name=ch.name on_unjoin=on_unjoin/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>

            <Show when=move || unjoin_target.get().is_some()>
                <UnjoinChannelModal
                    channel=channel_details
                    loading=details_loading
                    on_close=on_close
                    on_complete=on_complete
                />
            </Show>
        </div>
    }
}
