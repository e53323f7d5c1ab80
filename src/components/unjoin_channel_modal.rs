//! Confirmation modal for unjoining ordering nodes from a channel.
//!
//! The operator picks which nodes leave the channel (all are pre-selected)
//! and must type the channel name before the unjoin action arms. Submission
//! fans out one request per node, awaits every response, and either closes
//! the modal (all succeeded) or surfaces the aggregated errors and stays
//! open.

use leptos::prelude::*;

use crate::net::types::{ChannelInfo, Osn};
use crate::state::unjoin::{UnjoinForm, UnjoinStatus};

/// Modal dialog asking the operator to confirm an unjoin.
///
/// `channel` carries the fetched channel details; `loading` is true while
/// the parent is still fetching them. `on_complete` fires only when every
/// selected node unjoined, immediately before `on_close`.
#[component]
pub fn UnjoinChannelModal(
    channel: RwSignal<Option<ChannelInfo>>,
    loading: RwSignal<bool>,
    on_close: Callback<()>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(UnjoinForm::default());
    let initialized_for = RwSignal::new(None::<String>);

    // (Re)initialize the form when channel details arrive.
    Effect::new(move || {
        let Some(info) = channel.get() else {
            return;
        };

        if initialized_for.get().as_deref() == Some(info.name.as_str()) {
            return;
        }

        form.set(UnjoinForm::from_channel(&info));
        initialized_for.set(Some(info.name.clone()));
    });

    let submit = Callback::new(move |()| {
        let Some(info) = channel.get() else {
            return;
        };
        if !form.try_update(UnjoinForm::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let nodes = form.get_untracked().selected;
            leptos::task::spawn_local(async move {
                match crate::net::unjoin::unjoin_channel_nodes(&info.name, &nodes).await {
                    Ok(outcomes) => {
                        let all_ok = outcomes.iter().all(|o| o.is_success());
                        form.update(|f| f.finish_submit(outcomes));
                        if all_ok {
                            on_complete.run(());
                            on_close.run(());
                        }
                    }
                    Err(reason) => {
                        leptos::logging::warn!("unjoin aborted, identity fetch failed: {reason}");
                        form.update(|f| f.fail_submit(reason));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = info;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog unjoin-modal" on:click=move |ev| ev.stop_propagation()>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="unjoin-modal__skeleton"></div> }
                >
                    {move || {
                        channel.get().map(|info| {
                            let mut nodes: Vec<Osn> = info.nodes.values().cloned().collect();
                            nodes.sort_by(|a, b| a.name.cmp(&b.name));

                            view! {
                                <h1 class="unjoin-modal__title">{info.name.clone()}</h1>
                                <p class="unjoin-modal__desc">
                                    "The selected nodes will stop servicing "
                                    <code class="unjoin-modal__channel">{info.name.clone()}</code>
                                    ". This action cannot be undone."
                                </p>

                                <div class="unjoin-modal__nodes">
                                    {nodes
                                        .into_iter()
                                        .map(|osn| {
                                            let label = osn.name.clone();
                                            let node_id = osn.id.clone();
                                            view! {
                                                <label class="unjoin-modal__node">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || form.get().is_selected(&node_id)
                                                        on:change=move |_| form.update(|f| f.toggle_node(&osn))
                                                    />
                                                    <span class="unjoin-modal__node-name">{label}</span>
                                                </label>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>

                                <label class="dialog__label">
                                    "Type the channel name to confirm"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || form.get().confirm_text
                                        on:input=move |ev| {
                                            form.update(|f| f.set_confirm_text(event_target_value(&ev)));
                                        }
                                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                ev.prevent_default();
                                                submit.run(());
                                            }
                                        }
                                    />
                                </label>
                            }
                        })
                    }}
                </Show>

                {move || {
                    let current = form.get();
                    current.error().map(ToOwned::to_owned).map(|reason| {
                        let failed: Vec<String> = current
                            .outcomes
                            .iter()
                            .filter(|o| !o.is_success())
                            .map(|o| o.node_name.clone())
                            .collect();

                        view! {
                            <div class="unjoin-modal__error">
                                <span class="unjoin-modal__error-text">{reason}</span>
                                {(!failed.is_empty())
                                    .then(|| view! {
                                        <ul class="unjoin-modal__failed">
                                            {failed
                                                .into_iter()
                                                .map(|name| view! { <li>{name}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    })}
                            </div>
                        }
                    })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || !form.get().can_submit()
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if form.get().status == UnjoinStatus::Submitting {
                                "Unjoining..."
                            } else {
                                "Unjoin channel"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
