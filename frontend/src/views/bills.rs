use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::{icon_close, icon_eye, icon_plus};
use super::{page_shell, ErrorPage, LoadingPage};
use crate::containers::{BillRow, BillsContainer, BillsPageState, ReceiptPreview};
use crate::format::format_amount;
use crate::gateway::GatewayHandle;
use crate::hooks::use_mounted;
use crate::router::Navigator;

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub gateway: GatewayHandle,
    pub navigator: Navigator,
    /// Set when the previous page failed; shown instead of fetching.
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let container = BillsContainer::new(props.navigator.clone());
    let state = use_state(|| BillsPageState::Loading);
    let preview = use_state(|| None::<ReceiptPreview>);
    let mounted = use_mounted();

    {
        let state = state.clone();
        let gateway = props.gateway.clone();
        let container = container.clone();

        use_effect_with_deps(
            move |error: &Option<String>| {
                match error {
                    Some(message) => state.set(BillsPageState::Failed(message.clone())),
                    None => {
                        state.set(BillsPageState::Loading);
                        spawn_local(async move {
                            let next = container.fetch_bills(&*gateway).await;
                            if *mounted.borrow() {
                                state.set(next);
                            }
                        });
                    }
                }
                || ()
            },
            props.error.clone(),
        );
    }

    let on_new_bill = {
        let container = container.clone();
        Callback::from(move |_: MouseEvent| container.handle_click_new_bill())
    };

    let on_icon_eye = {
        let container = container.clone();
        let preview = preview.clone();
        Callback::from(move |url: String| preview.set(Some(container.handle_click_icon_eye(&url))))
    };

    let on_close_preview = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(None))
    };

    let content = match &*state {
        BillsPageState::Loading => html! { <LoadingPage /> },
        BillsPageState::Failed(message) => html! { <ErrorPage message={message.clone()} /> },
        BillsPageState::Loaded(rows) => html! {
            <BillsTable rows={rows.clone()} on_icon_eye={on_icon_eye} />
        },
    };

    page_shell(
        "Mes notes de frais",
        html! {
            <button data-testid="btn-new-bill" onclick={on_new_bill} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                { icon_plus() }
                {"Nouvelle note de frais"}
            </button>
        },
        html! {
            <>
                { content }
                if let Some(receipt) = &*preview {
                    <div data-testid="modal-file" class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-card rounded-xl shadow-lg p-6 w-full max-w-3xl">
                            <div class="flex items-center justify-between mb-4">
                                <h3 class="font-bold text-foreground text-lg">{"Justificatif"}</h3>
                                <button aria-label="Fermer" onclick={on_close_preview}>{ icon_close() }</button>
                            </div>
                            <div class="flex justify-center">
                                <img class="w-1/2" src={receipt.url.clone()} alt="Bill" />
                            </div>
                        </div>
                    </div>
                }
            </>
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct BillsTableProps {
    pub rows: Vec<BillRow>,
    /// Receives the receipt link of the clicked row.
    pub on_icon_eye: Callback<String>,
}

#[function_component(BillsTable)]
pub fn bills_table(props: &BillsTableProps) -> Html {
    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Type"}</th>
                            <th class="px-8 py-4 font-bold">{"Nom"}</th>
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold text-right">{"Montant"}</th>
                            <th class="px-8 py-4 font-bold">{"Statut"}</th>
                            <th class="px-8 py-4 font-bold">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody data-testid="tbody" class="divide-y divide-border">
                        { for props.rows.iter().enumerate().map(|(idx, row)| {
                            let receipt = row.receipt_url().map(|url| {
                                let url = url.to_string();
                                let target = url.clone();
                                (url, props.on_icon_eye.reform(move |_: MouseEvent| target.clone()))
                            });
                            html! {
                                <tr key={idx} class="text-sm hover:bg-muted/30 transition-colors">
                                    <td class="px-8 py-4">
                                        <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ row.bill.expense_type.label() }</span>
                                    </td>
                                    <td class="px-8 py-4 text-foreground">{ row.bill.name.clone() }</td>
                                    <td class="px-8 py-4 text-muted-foreground">{ row.date_label.clone() }</td>
                                    <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_amount(row.bill.amount) }</td>
                                    <td class="px-8 py-4 text-muted-foreground">{ row.status_label }</td>
                                    <td class="px-8 py-4">
                                        if let Some((url, on_click)) = receipt {
                                            <div data-testid="icon-eye" data-bill-url={url} class="inline-flex cursor-pointer" onclick={on_click}>
                                                { icon_eye() }
                                            </div>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
            if props.rows.is_empty() {
                <p class="p-6 text-sm text-muted-foreground">{"Aucune note de frais pour le moment."}</p>
            }
        </div>
    }
}
