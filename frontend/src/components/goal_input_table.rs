use shared::{format_date, GoalRow, GoalInputTable, RowField, RowId};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_goal_input_table::UseGoalInputTableActions;

#[derive(Properties, PartialEq)]
pub struct GoalInputTableProps {
    pub table: GoalInputTable,
    pub actions: UseGoalInputTableActions,
    #[prop_or_default]
    pub disabled: bool,
}

fn input_edit(edit: &Callback<(RowId, RowField, String)>, id: RowId, field: RowField) -> Callback<InputEvent> {
    let edit = edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        edit.emit((id, field, input.value()));
    })
}

fn notes_edit(edit: &Callback<(RowId, RowField, String)>, id: RowId) -> Callback<InputEvent> {
    let edit = edit.clone();
    Callback::from(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        edit.emit((id, RowField::Notes, textarea.value()));
    })
}

#[function_component(GoalInputTableView)]
pub fn goal_input_table_view(props: &GoalInputTableProps) -> Html {
    let remove_enabled = props.table.remove_enabled();

    let render_row = |row: &GoalRow| {
        let remove_row = props.actions.remove_row.clone();
        let id = row.id;

        html! {
            <tr key={row.id.to_string()}>
                <td>
                    <input
                        type="text"
                        name="title"
                        required={true}
                        value={row.title.clone()}
                        oninput={input_edit(&props.actions.edit, id, RowField::Title)}
                        disabled={props.disabled}
                    />
                </td>
                <td>
                    <textarea
                        rows="1"
                        name="notes"
                        value={row.notes.clone()}
                        oninput={notes_edit(&props.actions.edit, id)}
                        disabled={props.disabled}
                    />
                </td>
                <td>
                    <input
                        type="date"
                        name="due"
                        required={true}
                        value={row.due.map(format_date).unwrap_or_default()}
                        oninput={input_edit(&props.actions.edit, id, RowField::Due)}
                        disabled={props.disabled}
                    />
                </td>
                <td>
                    <button
                        type="button"
                        class="minus-button"
                        disabled={props.disabled || !remove_enabled}
                        onclick={Callback::from(move |_| remove_row.emit(id))}
                    >
                        {"\u{2212}"}
                    </button>
                </td>
            </tr>
        }
    };

    html! {
        <table id="goal-input-table" class="goal-input-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Notes"}</th>
                    <th>{"Due"}</th>
                    <th>
                        <button
                            type="button"
                            class="plus-button"
                            disabled={props.disabled}
                            onclick={props.actions.add_row.reform(|_| ())}
                        >
                            {"+"}
                        </button>
                    </th>
                </tr>
            </thead>
            <tbody>
                {for props.table.rows().iter().map(render_row)}
            </tbody>
        </table>
    }
}
