//! Data Table Components

use leptos::*;
use std::rc::Rc;

use crate::components::icons::*;

/// Table column definition
#[derive(Clone)]
pub struct TableColumn<T: Clone + 'static> {
    pub label: String,
    pub render: Rc<dyn Fn(&T) -> View + 'static>,
}

impl<T: Clone + 'static> TableColumn<T> {
    pub fn new(label: impl Into<String>, render: impl Fn(&T) -> View + 'static) -> Self {
        Self {
            label: label.into(),
            render: Rc::new(render),
        }
    }
}

/// Data table component
#[component]
pub fn DataTable<T: Clone + 'static>(
    #[prop(into)] columns: Vec<TableColumn<T>>,
    #[prop(into)] data: MaybeSignal<Vec<T>>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] empty_message: Option<String>,
) -> impl IntoView {
    let header_columns = columns.clone();

    view! {
        <div class=format!("table-container {}", class)>
            <table class="data-table">
                <thead>
                    <tr>
                        {header_columns.iter().map(|col| {
                            let label = col.label.clone();
                            view! { <th class="table-header">{label}</th> }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = data.get();
                        if rows.is_empty() {
                            let msg = empty_message.clone().unwrap_or_else(|| "No data available".to_string());
                            let col_count = columns.len();
                            return view! {
                                <tr>
                                    <td colspan=col_count class="table-empty">
                                        <div class="empty-state">
                                            <IconDatabase size=IconSize::Xl class="text-muted".to_string() />
                                            <p>{msg}</p>
                                        </div>
                                    </td>
                                </tr>
                            }.into_view();
                        }

                        rows.iter().map(|row| {
                            view! {
                                <tr>
                                    {columns.iter().map(|col| {
                                        let cell_view = (col.render)(row);
                                        view! { <td>{cell_view}</td> }
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Status badge component
#[component]
pub fn StatusBadge(
    #[prop(into)] status: MaybeSignal<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", class.get())>
            {move || status.get()}
        </span>
    }
}
