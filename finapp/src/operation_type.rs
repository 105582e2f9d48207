use fincore::{
    entity::EditMode,
    operation_type::{
        OperationType,
        OperationTypes,
    },
};
use leptos::logging;
use leptos::prelude::*;
use leptos_meta::Title;

mod api;

use crate::component::{
    Outcome,
    SelectMap,
    Spinner,
};
use crate::error_template::ErrorTemplate;
use api::{
    list_operation_types,
    DeleteOperationType,
    SaveOperationType,
};

type Editing = RwSignal<Option<(EditMode, OperationType)>>;

#[component]
pub fn OperationTypesPage() -> impl IntoView {
    let save = ServerAction::<SaveOperationType>::new();
    let delete = ServerAction::<DeleteOperationType>::new();
    let editing: Editing = RwSignal::new(None);
    let deleting = RwSignal::new(None::<OperationType>);

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
            let result = list_operation_types().await;
            match result {
                Ok(ref types) => logging::log!("loaded {} operation types", types.len()),
                Err(ref e) => logging::log!("error loading operation types: {e}"),
            };
            result
        },
    );

    let listing_view = move || Suspend::new(async move {
        listing.await.map(|types| {
            let (income, expense) = OperationType::split_by_kind(types);
            view! {
                <section class="income">
                    <h2>"Income"</h2>
                    <OperationTypeList types=income editing deleting/>
                </section>
                <section class="expense">
                    <h2>"Expense"</h2>
                    <OperationTypeList types=expense editing deleting/>
                </section>
            }
        })
    });

    view! {
        <Title text="Operation Types — Finance Tracker"/>
        <div class="main">
            <h1>"Operation Types"</h1>
            <Outcome value=save.value()/>
            <Outcome value=delete.value()/>
            <button type="button" on:click=move |_| {
                editing.set(Some((EditMode::Create, OperationType::default())))
            }>"Add Operation Type"</button>
            {move || editing.get().map(|(mode, operation_type)| view! {
                <OperationTypeEditor mode operation_type action=save editing/>
            })}
            {move || deleting.get().map(|operation_type| view! {
                <DeleteOperationTypeDialog operation_type action=delete deleting/>
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
fn OperationTypeList(
    types: OperationTypes,
    editing: Editing,
    deleting: RwSignal<Option<OperationType>>,
) -> impl IntoView {
    if types.is_empty() {
        return view! { <p>"None defined."</p> }.into_any();
    }
    let items = types.into_iter()
        .map(|operation_type| {
            let edit = operation_type.clone();
            let remove = operation_type.clone();
            view! {
                <li>
                    <span class="name">{operation_type.name.clone()}</span>
                    <span class="description">
                        {operation_type.description.clone().unwrap_or_default()}
                    </span>
                    <button type="button" on:click=move |_| {
                        editing.set(Some((EditMode::Update(edit.operation_type_id), edit.clone())))
                    }>"Edit"</button>
                    <button type="button" on:click=move |_| {
                        deleting.set(Some(remove.clone()))
                    }>"Delete"</button>
                </li>
            }
        })
        .collect_view();
    view! { <ul class="listing">{items}</ul> }.into_any()
}

#[component]
fn OperationTypeEditor(
    mode: EditMode,
    operation_type: OperationType,
    action: ServerAction<SaveOperationType>,
    editing: Editing,
) -> impl IntoView {
    let heading = match mode {
        EditMode::Create => "Add Operation Type",
        EditMode::Update(_) => "Edit Operation Type",
    };
    let kinds = vec![
        ("true".to_string(), "Income".to_string()),
        ("false".to_string(), "Expense".to_string()),
    ];
    let selected = match mode {
        EditMode::Update(_) => Some(operation_type.is_income.to_string()),
        EditMode::Create => None,
    };
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
                    <label for="name">"Name"</label>
                    <input type="text" id="name" name="name"
                        value=operation_type.name.clone() required/>
                </div>
                <div>
                    <label for="description">"Description"</label>
                    <input type="text" id="description" name="description"
                        value=operation_type.description.clone().unwrap_or_default()/>
                </div>
                <div>
                    <label for="is_income">"Kind"</label>
                    <SelectMap name="is_income".to_string() options=kinds value=selected/>
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
fn DeleteOperationTypeDialog(
    operation_type: OperationType,
    action: ServerAction<DeleteOperationType>,
    deleting: RwSignal<Option<OperationType>>,
) -> impl IntoView {
    view! {
        <div class="dialog">
            <h2>"Delete Operation Type"</h2>
            <p>
                "Are you sure you want to delete the "{operation_type.kind_label().to_lowercase()}
                " type \""{operation_type.name.clone()}"\"?"
            </p>
            <ActionForm action=action>
                <input type="hidden" name="id" value=operation_type.operation_type_id.to_string()/>
                <button type="submit">"Delete"</button>
                <button type="button" on:click=move |_| deleting.set(None)>"Cancel"</button>
            </ActionForm>
        </div>
    }
}
