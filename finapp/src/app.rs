use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{
        Route,
        Router,
        Routes,
        A,
    },
    StaticSegment,
};

use crate::ac::{
    provide_session_context,
    ACRoutes,
    SessionStatus,
};
use crate::error::AppError;
use crate::error_template::ErrorTemplate;
use crate::operation::OperationsPage;
use crate::operation_type::OperationTypesPage;
use crate::report::{
    DailyReportPage,
    PeriodReportPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session_context();

    let fallback = || {
        let mut outside_errors = Errors::default();
        outside_errors.insert_with_default_key(AppError::NotFound);
        view! {
            <ErrorTemplate errors=outside_errors/>
        }
    };

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/finapp.css"/>
        <Title text="Finance Tracker"/>
        <Router>
            <header>
                <nav>
                    <A href="/">"Home"</A>
                    <A href="/operations">"Operations"</A>
                    <A href="/operation-types">"Operation Types"</A>
                    <A href="/reports/daily">"Daily Report"</A>
                    <A href="/reports/period">"Period Report"</A>
                </nav>
                <SessionStatus/>
            </header>
            <main>
                <Routes fallback>
                    <Route path=StaticSegment("") view=HomePage/>
                    <ACRoutes/>
                    <Route path=StaticSegment("operations") view=OperationsPage/>
                    <Route path=StaticSegment("operation-types") view=OperationTypesPage/>
                    <Route path=(StaticSegment("reports"), StaticSegment("daily")) view=DailyReportPage/>
                    <Route path=(StaticSegment("reports"), StaticSegment("period")) view=PeriodReportPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="main">
            <h1>"Finance Tracker"</h1>
            <p>"Keep track of income and expenses, and review them by day or period."</p>
            <dl>
                <dt><A href="/operations">"Operations"</A></dt>
                <dd>"Record, edit and delete individual income and expense entries."</dd>
                <dt><A href="/operation-types">"Operation Types"</A></dt>
                <dd>"Categories that classify each operation as income or expense."</dd>
                <dt><A href="/reports/daily">"Daily Report"</A></dt>
                <dd>"Totals and line items for a single day."</dd>
                <dt><A href="/reports/period">"Period Report"</A></dt>
                <dd>"Totals and line items between two dates."</dd>
            </dl>
        </div>
    }
}
