use chrono::Local;
use fincore::{
    entity::EditMode,
    operation::Operation,
    operation_type::OperationTypes,
    report::DATE_FORMAT,
};
use leptos::logging;
use leptos::prelude::*;
use leptos_meta::Title;

mod api;

use crate::component::{
    amount,
    Outcome,
    SelectMap,
    Spinner,
};
use crate::error_template::ErrorTemplate;
use api::{
    load_operations,
    DeleteOperation,
    SaveOperation,
};

type Editing = RwSignal<Option<(EditMode, Operation)>>;

fn new_operation() -> Operation {
    Operation {
        date: Local::now().date_naive(),
        .. Default::default()
    }
}

#[component]
pub fn OperationsPage() -> impl IntoView {
    let save = ServerAction::<SaveOperation>::new();
    let delete = ServerAction::<DeleteOperation>::new();
    let editing: Editing = RwSignal::new(None);
    let deleting = RwSignal::new(None::<Operation>);

    // close the dialogs once a submission has completed successfully
    Effect::new(move |_| {
        if let Some(Ok(_)) = save.value().get() {
            editing.set(None);
        }
    });
    Effect::new(move |_| {
        if let Some(Ok(_)) = delete.value().get() {
            deleting.set(None);
        }
    });

    let listing = Resource::new(
        move || (save.version().get(), delete.version().get()),
        move |_| async move {
            let result = load_operations().await;
            match result {
                Ok((ref operations, _)) => logging::log!("loaded {} operations", operations.len()),
                Err(ref e) => logging::log!("error loading operations: {e}"),
            };
            result
        },
    );

    let listing_view = move || Suspend::new(async move {
        listing.await.map(|(operations, types)| view! {
            {move || editing.get().map(|(mode, operation)| view! {
                <OperationEditor mode operation types=types.clone() action=save editing/>
            })}
            <button type="button" on:click=move |_| {
                editing.set(Some((EditMode::Create, new_operation())))
            }>"Add Operation"</button>
            {
                if operations.is_empty() {
                    view! { <p>"No operations recorded."</p> }.into_any()
                } else {
                    view! {
                        <OperationTable operations editing deleting/>
                    }.into_any()
                }
            }
        })
    });

    view! {
        <Title text="Operations — Finance Tracker"/>
        <div class="main">
            <h1>"Operations"</h1>
            <Outcome value=save.value()/>
            <Outcome value=delete.value()/>
            {move || deleting.get().map(|operation| view! {
                <DeleteOperationDialog operation action=delete deleting/>
            })}
            <Transition fallback=move || view! { <Spinner/> }>
                <ErrorBoundary fallback=|errors| view!{ <ErrorTemplate errors/>}>
                    {listing_view}
                </ErrorBoundary>
            </Transition>
        </div>
    }
}

#[component]
fn OperationTable(
    operations: Vec<Operation>,
    editing: Editing,
    deleting: RwSignal<Option<Operation>>,
) -> impl IntoView {
    let rows = operations.into_iter()
        .map(|operation| {
            let kind = match operation.is_income() {
                Some(true) => "income",
                Some(false) => "expense",
                None => "unknown",
            };
            let edit = operation.clone();
            let remove = operation.clone();
            view! {
                <tr class=kind>
                    <td>{operation.date.format(DATE_FORMAT).to_string()}</td>
                    <td>{operation.type_name().unwrap_or("Unknown").to_string()}</td>
                    <td class="amount">{amount(operation.amount)}</td>
                    <td>{operation.note.clone().unwrap_or_default()}</td>
                    <td>
                        <button type="button" on:click=move |_| {
                            editing.set(Some((EditMode::Update(edit.operation_id), edit.clone())))
                        }>"Edit"</button>
                        <button type="button" on:click=move |_| {
                            deleting.set(Some(remove.clone()))
                        }>"Delete"</button>
                    </td>
                </tr>
            }
        })
        .collect_view();
    view! {
        <table class="listing">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Note"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn OperationEditor(
    mode: EditMode,
    operation: Operation,
    types: OperationTypes,
    action: ServerAction<SaveOperation>,
    editing: Editing,
) -> impl IntoView {
    let heading = match mode {
        EditMode::Create => "Add Operation",
        EditMode::Update(_) => "Edit Operation",
    };
    let options = types.iter()
        .map(|t| (
            t.operation_type_id.to_string(),
            format!("{} ({})", t.name, t.kind_label()),
        ))
        .collect::<Vec<_>>();
    let selected = (operation.operation_type_id != 0)
        .then(|| operation.operation_type_id.to_string());
    view! {
        <div class="dialog">
            <h2>{heading}</h2>
            <ActionForm attr:class="standard" action=action>
                {match mode {
                    EditMode::Update(id) => Some(view! {
                        <input type="hidden" name="id" value=id.to_string()/>
                    }),
                    EditMode::Create => None,
                }}
                <div>
                    <label for="date">"Date"</label>
                    <input type="date" id="date" name="date"
                        value=operation.date.format(DATE_FORMAT).to_string() required/>
                </div>
                <div>
                    <label for="amount">"Amount"</label>
                    <input type="number" step="0.01" id="amount" name="amount"
                        value=operation.amount.to_string() required/>
                </div>
                <div>
                    <label for="note">"Note"</label>
                    <input type="text" id="note" name="note"
                        value=operation.note.clone().unwrap_or_default()/>
                </div>
                <div>
                    <label for="operation_type_id">"Type"</label>
                    <SelectMap name="operation_type_id".to_string() options value=selected/>
                </div>
                <div>
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| editing.set(None)>"Cancel"</button>
                </div>
            </ActionForm>
        </div>
    }
}

#[component]
fn DeleteOperationDialog(
    operation: Operation,
    action: ServerAction<DeleteOperation>,
    deleting: RwSignal<Option<Operation>>,
) -> impl IntoView {
    view! {
        <div class="dialog">
            <h2>"Delete Operation"</h2>
            <p>"Are you sure you want to delete this operation?"</p>
            <p>
                {operation.date.format(DATE_FORMAT).to_string()}" "
                {amount(operation.amount)}" "
                {operation.note.clone().unwrap_or_default()}
            </p>
            <ActionForm action=action>
                <input type="hidden" name="id" value=operation.operation_id.to_string()/>
                <button type="submit">"Delete"</button>
                <button type="button" on:click=move |_| deleting.set(None)>"Cancel"</button>
            </ActionForm>
        </div>
    }
}
