use yew::prelude::*;

use crate::config::AppConfig;
use crate::gateway::GatewayHandle;
use crate::router::{self, Navigation, Navigator, Route, Screen};
use crate::storage;
use crate::views::{BillsPage, ErrorPage, NewBillPage, Notice};

#[function_component(App)]
pub fn app() -> Html {
    let gateway = use_memo(
        |_| GatewayHandle::connect(&AppConfig::from_build_env(), storage::load_token()),
        (),
    );
    let session = use_memo(|_| storage::load_session(), ());
    let navigation = use_state(|| Navigation::to(Route::from_path(&storage::current_hash())));

    let navigator = {
        let navigation = navigation.clone();
        Navigator::new(Callback::from(move |next: Navigation| {
            storage::set_hash(next.route.hash());
            navigation.set(next);
        }))
    };

    let session = match &*session {
        Ok(session) => session.as_ref(),
        Err(err) => {
            log::error!("cannot read the stored session: {err}");
            return html! { <ErrorPage message={err.to_string()} /> };
        }
    };

    let content = match router::guard(navigation.route, session) {
        Screen::Login => html! {
            <Notice title="Connexion" message="Aucune session active : connectez-vous pour accéder à vos notes de frais." />
        },
        Screen::Dashboard(_) => html! {
            <Notice title="Administration" message="Le tableau de bord administrateur n'est pas disponible dans cet espace." />
        },
        Screen::Bills(_) => html! {
            <BillsPage gateway={(*gateway).clone()} navigator={navigator} error={navigation.error.clone()} />
        },
        Screen::NewBill(session) => html! {
            <NewBillPage session={session.clone()} gateway={(*gateway).clone()} navigator={navigator} />
        },
    };

    html! {
        <div class="min-h-screen bg-background">
            <main class="overflow-y-auto">
                { content }
            </main>
        </div>
    }
}
