use leptos::prelude::*;

#[component]
pub fn SelectMap(
    name: String,
    options: Vec<(String, String)>,
    #[prop(default = None)] value: Option<String>,
) -> impl IntoView {
    let mut valid_choice = false;
    let options_view = options.into_iter()
        .map(|(option, label)| {
            let selected = Some(&option) == value.as_ref();
            valid_choice |= selected;
            let selected = selected.then_some("selected");
            view! { <option value=option selected=selected>{label}</option> }
        })
        .collect_view();
    view! {
        <select id=name.clone() name=name required>
            {(!valid_choice).then_some(view! { <option value="" selected="selected"></option> })}
            {options_view}
        </select>
    }
}

/// Outcome of the most recent submission of a form.
#[component]
pub fn Outcome<E>(
    value: RwSignal<Option<Result<String, E>>>,
) -> impl IntoView
where
    E: std::fmt::Display + Clone + Send + Sync + 'static,
{
    move || value.get().map(|result| match result {
        Ok(message) => view! { <p class="standard ok">{message}</p> }.into_any(),
        Err(e) => view! { <p class="standard error">{e.to_string()}</p> }.into_any(),
    })
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="bounce1"></div>
            <div class="bounce2"></div>
            <div class="bounce3"></div>
        </div>
    }
}

/// Formats an amount as shown in listings and reports.
pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_format() {
        assert_eq!(amount(12.5), "12.50");
        assert_eq!(amount(-3.0), "-3.00");
    }
}
