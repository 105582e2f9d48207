use crate::error::AppError;
use http::status::StatusCode;
use leptos::{logging::log, prelude::*};
use leptos_router::components::A;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

#[component]
pub fn ErrorTemplate(
    #[prop(into)] errors: Signal<Errors>,
) -> impl IntoView {
    // Downcast lets us take a type that implements `std::error::Error`
    let errors = Memo::new(move |_| {
        errors
            .get_untracked()
            .into_iter()
            .filter_map(|(_, v)| v.downcast_ref::<AppError>().cloned())
            .collect::<Vec<_>>()
    });
    log!("Errors: {:#?}", &*errors.read_untracked());

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        let response = use_context::<ResponseOptions>();
        if let (Some(response), Some(error)) = (response, errors.read_untracked().first()) {
            response.set_status(error.status_code());
        }
    }

    view! {
        {move || {
            errors.get()
                .into_iter()
                .map(|error| {
                    let error_code = error.status_code();
                    let detail = match error_code {
                        StatusCode::UNAUTHORIZED => Some(view! {
                            <p>"Please "<A href="/login">"sign in"</A>" to continue."</p>
                        }.into_any()),
                        StatusCode::INTERNAL_SERVER_ERROR |
                        StatusCode::BAD_GATEWAY => Some(view! {
                            <p>{format!("Error: {error}")}</p>
                        }.into_any()),
                        _ => None,
                    };
                    view! {
                        <h1>{error_code.to_string()}</h1>
                        {detail}
                    }
                })
                .collect_view()
        }}
    }
}
