use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::page_shell;
use crate::containers::new_bill::ACCEPTED_EXTENSIONS;
use crate::containers::{NewBillContainer, NewBillForm, SubmitPhase};
use crate::gateway::{GatewayHandle, Receipt};
use crate::hooks::use_mounted;
use crate::models::{ExpenseType, Session};
use crate::router::Navigator;

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";
const LABEL_CLASS: &str = "block text-sm font-medium text-foreground mb-2";

#[derive(Properties, PartialEq)]
pub struct NewBillPageProps {
    pub session: Session,
    pub gateway: GatewayHandle,
    pub navigator: Navigator,
}

fn input_field(
    form: &UseStateHandle<NewBillForm>,
    apply: fn(&mut NewBillForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(NewBillPage)]
pub fn new_bill_page(props: &NewBillPageProps) -> Html {
    let form = use_state(NewBillForm::default);
    let phase = use_mut_ref(SubmitPhase::default);
    let submitting = use_state(|| false);
    let mounted = use_mounted();

    let container = Rc::new(NewBillContainer::new(
        props.session.clone(),
        props.navigator.clone(),
        phase,
    ));

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(kind) = ExpenseType::from_label(&select.value()) {
                let mut next = (*form).clone();
                next.expense_type = kind;
                form.set(next);
            }
        })
    };

    let on_commentary = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.commentary = area.value();
            form.set(next);
        })
    };

    let on_file = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let receipt = input
                .files()
                .and_then(|files| files.get(0))
                .map(Receipt::from_file);
            let mut next = (*form).clone();
            if !next.handle_change_file(receipt) {
                input.set_value("");
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let gateway = props.gateway.clone();
        let container = container.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if next.check_receipt().is_err() {
                form.set(next);
                return;
            }

            let gateway = gateway.clone();
            let container = container.clone();
            let submitting = submitting.clone();
            let mounted = mounted.clone();
            submitting.set(true);

            spawn_local(async move {
                let result = container.handle_submit(&*gateway, &next).await;
                if *mounted.borrow() {
                    submitting.set(container.is_busy());
                    container.finish_submit(&result);
                }
            });
        })
    };

    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    page_shell(
        "Envoyer une note de frais",
        html! {},
        html! {
            <form data-testid="form-new-bill" onsubmit={on_submit} class="bg-card rounded-[10px] p-6 border border-border">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="space-y-4">
                        <div>
                            <label class={LABEL_CLASS}>{"Type de dépense"}</label>
                            <select required=true data-testid="expense-type" class={INPUT_CLASS} onchange={on_type}>
                                { for ExpenseType::ALL.iter().map(|kind| html! {
                                    <option value={kind.label()} selected={*kind == form.expense_type}>{ kind.label() }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"Nom de la dépense"}</label>
                            <input type="text" data-testid="expense-name" placeholder="Vol Paris Londres" class={INPUT_CLASS}
                                value={form.name.clone()} oninput={input_field(&form, |f, v| f.name = v)} />
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"Date"}</label>
                            <input required=true type="date" data-testid="datepicker" class={INPUT_CLASS}
                                value={form.date.clone()} oninput={input_field(&form, |f, v| f.date = v)} />
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"Montant TTC"}</label>
                            <input required=true type="number" data-testid="amount" placeholder="348" class={INPUT_CLASS}
                                value={form.amount.clone()} oninput={input_field(&form, |f, v| f.amount = v)} />
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"TVA"}</label>
                            <div class="flex items-center gap-3">
                                <input type="number" data-testid="vat" placeholder="70" class={INPUT_CLASS}
                                    value={form.vat.clone()} oninput={input_field(&form, |f, v| f.vat = v)} />
                                <input required=true type="number" data-testid="pct" placeholder="20" class={INPUT_CLASS}
                                    value={form.pct.clone()} oninput={input_field(&form, |f, v| f.pct = v)} />
                                <span class="text-sm text-muted-foreground">{"%"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="space-y-4">
                        <div>
                            <label class={LABEL_CLASS}>{"Commentaire"}</label>
                            <textarea data-testid="commentary" rows="3" class={INPUT_CLASS}
                                value={form.commentary.clone()} oninput={on_commentary} />
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"Justificatif"}</label>
                            <input type="file" data-testid="file" accept={accept} class={INPUT_CLASS} onchange={on_file} />
                            <p data-testid="error-file" class="text-sm text-red-500 mt-2">{ form.file_error().to_string() }</p>
                        </div>
                    </div>
                </div>
                <div class="mt-6 flex justify-end">
                    <button type="submit" id="btn-send-bill" disabled={*submitting} class="bg-primary text-primary-foreground px-6 py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                        { if *submitting { "Envoi..." } else { "Envoyer" } }
                    </button>
                </div>
            </form>
        },
    )
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::super::testing::{by_test_id, click, fill, find, mount, settle, text};
    use super::*;
    use crate::error::FILE_MISSING_MESSAGE;
    use crate::gateway::MemoryBillsGateway;
    use crate::router::testing::recording_navigator;
    use crate::router::Navigation;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn props() -> (NewBillPageProps, Rc<RefCell<Vec<Navigation>>>) {
        let (navigator, log) = recording_navigator();
        let props = NewBillPageProps {
            session: Session::employee("employee@test.tld"),
            gateway: GatewayHandle::new(MemoryBillsGateway::with_sample_bills()),
            navigator,
        };
        (props, log)
    }

    #[wasm_bindgen_test]
    async fn test_form_renders_with_empty_file_error() {
        let (props, _) = props();
        let (_app, root) = mount::<NewBillPage>(props);
        settle().await;

        assert!(by_test_id(&root, "form-new-bill").is_some());
        for field in ["expense-type", "expense-name", "datepicker", "amount", "vat", "pct", "commentary", "file"] {
            assert!(by_test_id(&root, field).is_some(), "{field}");
        }
        let slot = by_test_id(&root, "error-file").expect("file error slot");
        assert_eq!(text(&slot), "");

        let file = by_test_id(&root, "file").expect("file input");
        assert_eq!(file.get_attribute("accept").as_deref(), Some(".jpg,.jpeg,.png"));
        assert!(!file.has_attribute("required"));
    }

    #[wasm_bindgen_test]
    async fn test_submit_without_receipt_stays_on_form() {
        let (props, log) = props();
        let (_app, root) = mount::<NewBillPage>(props);
        settle().await;

        fill(&root, "datepicker", "2022-06-01");
        fill(&root, "amount", "80");
        fill(&root, "pct", "20");
        click(&find(&root, "#btn-send-bill").expect("send button"));
        settle().await;

        let slot = by_test_id(&root, "error-file").expect("file error slot");
        assert_eq!(text(&slot), FILE_MISSING_MESSAGE);
        assert!(log.borrow().is_empty());
    }
}
