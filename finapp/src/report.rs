use chrono::Local;
use fincore::report::{
    IncomeFilter,
    Report,
    DATE_FORMAT,
};
use leptos::prelude::*;
use leptos_meta::Title;

mod api;

use crate::component::amount;
use api::{
    GenerateDailyReport,
    GeneratePeriodReport,
};

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Line filter for a single generated report; every new report starts
/// out showing all of its lines.
fn report_filter() -> RwSignal<IncomeFilter> {
    RwSignal::new(IncomeFilter::All)
}

#[component]
fn FilterBar(filter: RwSignal<IncomeFilter>) -> impl IntoView {
    [IncomeFilter::All, IncomeFilter::Income, IncomeFilter::Expense]
        .into_iter()
        .map(|choice| view! {
            <button type="button"
                class:active=move || filter.get() == choice
                on:click=move |_| filter.set(choice)
            >{choice.to_string()}</button>
        })
        .collect_view()
}

#[component]
fn ReportBody<R>(report: R, filter: RwSignal<IncomeFilter>) -> impl IntoView
where
    R: Report + Send + Sync + 'static,
{
    let totals = view! {
        <dl class="totals">
            <dt>"Total Income"</dt>
            <dd class="income">{amount(report.total_income())}</dd>
            <dt>"Total Expenses"</dt>
            <dd class="expense">{amount(report.total_expenses())}</dd>
            <dt>"Balance"</dt>
            <dd>{amount(report.total_income() - report.total_expenses())}</dd>
        </dl>
    };
    let lines = move || {
        let operations = report.filter_operations(filter.get());
        if operations.is_empty() {
            return view! { <p>"No operations to show."</p> }.into_any();
        }
        view! {
            <table class="listing">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th>"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {operations.into_iter()
                        .map(|operation| view! {
                            <tr>
                                <td>{operation.date.format(DATE_FORMAT).to_string()}</td>
                                <td>{operation.type_name().unwrap_or("Unknown").to_string()}</td>
                                <td class="amount">{amount(operation.amount)}</td>
                                <td>{operation.note.clone().unwrap_or_default()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }.into_any()
    };
    view! {
        {totals}
        <div class="filter"><FilterBar filter/></div>
        {lines}
    }
}

#[component]
pub fn DailyReportPage() -> impl IntoView {
    let action = ServerAction::<GenerateDailyReport>::new();

    let report_view = move || action.value().get().map(|result| match result {
        Ok(report) => {
            let filter = report_filter();
            view! {
                <h2>"Report for "{report.date.format(DATE_FORMAT).to_string()}</h2>
                <ReportBody report filter/>
            }.into_any()
        }
        Err(e) => view! {
            <p class="standard error">{format!("Error generating report: {e}")}</p>
        }.into_any(),
    });

    view! {
        <Title text="Daily Report — Finance Tracker"/>
        <div class="main">
            <h1>"Daily Report"</h1>
            <ActionForm attr:class="standard" action=action>
                <div>
                    <label for="date">"Date"</label>
                    <input type="date" id="date" name="date" value=today() required/>
                </div>
                <div>
                    <button type="submit" disabled=move || action.pending().get()>
                        {move || if action.pending().get() { "Generating..." } else { "Generate Report" }}
                    </button>
                </div>
            </ActionForm>
            {report_view}
        </div>
    }
}

#[component]
pub fn PeriodReportPage() -> impl IntoView {
    let action = ServerAction::<GeneratePeriodReport>::new();

    let report_view = move || action.value().get().map(|result| match result {
        Ok(report) => {
            let filter = report_filter();
            view! {
                <h2>
                    "Report for "{report.start_date.format(DATE_FORMAT).to_string()}
                    " to "{report.end_date.format(DATE_FORMAT).to_string()}
                </h2>
                <ReportBody report filter/>
            }.into_any()
        }
        Err(e) => view! {
            <p class="standard error">{format!("Error generating report: {e}")}</p>
        }.into_any(),
    });

    view! {
        <Title text="Period Report — Finance Tracker"/>
        <div class="main">
            <h1>"Period Report"</h1>
            <ActionForm attr:class="standard" action=action>
                <div>
                    <label for="start_date">"Start Date"</label>
                    <input type="date" id="start_date" name="start_date" value=today() required/>
                </div>
                <div>
                    <label for="end_date">"End Date"</label>
                    <input type="date" id="end_date" name="end_date" value=today() required/>
                </div>
                <div>
                    <button type="submit" disabled=move || action.pending().get()>
                        {move || if action.pending().get() { "Generating..." } else { "Generate Report" }}
                    </button>
                </div>
            </ActionForm>
            {report_view}
        </div>
    }
}
