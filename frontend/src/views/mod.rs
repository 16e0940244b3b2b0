//! Yew components for each screen.

pub mod bills;
pub mod icons;
pub mod new_bill;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

use yew::prelude::*;

pub use bills::BillsPage;
pub use new_bill::NewBillPage;

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    pub message: String,
}

#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-red-200">
            <h3 class="font-bold text-red-600 text-lg mb-2">{"Erreur"}</h3>
            <div data-testid="error-message" class="text-sm text-red-500">{ props.message.clone() }</div>
        </div>
    }
}

#[function_component(LoadingPage)]
pub fn loading_page() -> Html {
    html! {
        <div class="flex items-center justify-center py-12 text-muted-foreground">
            {"Chargement..."}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub title: &'static str,
    pub message: &'static str,
}

/// Placeholder for the screens served by other parts of the product
/// (login, admin dashboard).
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    page_shell(
        props.title,
        html! {},
        html! { <p class="text-sm text-muted-foreground">{ props.message }</p> },
    )
}
