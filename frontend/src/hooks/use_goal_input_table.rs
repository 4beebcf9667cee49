use std::rc::Rc;

use shared::{GoalInputTable, RowField, RowId};
use yew::prelude::*;

pub enum InputTableAction {
    AddRow,
    RemoveRow(RowId),
    Reset,
    Edit(RowId, RowField, String),
}

#[derive(Clone, PartialEq, Default)]
pub struct InputTableStore(pub GoalInputTable);

impl Reducible for InputTableStore {
    type Action = InputTableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut table = self.0.clone();
        let changed = match action {
            InputTableAction::AddRow => {
                table.add_row();
                true
            }
            InputTableAction::RemoveRow(id) => table.remove_row(id),
            InputTableAction::Reset => {
                table.reset();
                true
            }
            InputTableAction::Edit(id, field, value) => table.update(id, field, &value),
        };

        if changed {
            Rc::new(InputTableStore(table))
        } else {
            self
        }
    }
}

pub struct UseGoalInputTableResult {
    pub table: GoalInputTable,
    pub actions: UseGoalInputTableActions,
}

#[derive(Clone, PartialEq)]
pub struct UseGoalInputTableActions {
    pub add_row: Callback<()>,
    pub remove_row: Callback<RowId>,
    pub reset: Callback<()>,
    pub edit: Callback<(RowId, RowField, String)>,
}

#[hook]
pub fn use_goal_input_table() -> UseGoalInputTableResult {
    let store = use_reducer(InputTableStore::default);

    let add_row = {
        let store = store.clone();
        use_callback((), move |_: (), _| store.dispatch(InputTableAction::AddRow))
    };

    let remove_row = {
        let store = store.clone();
        use_callback((), move |id: RowId, _| store.dispatch(InputTableAction::RemoveRow(id)))
    };

    let reset = {
        let store = store.clone();
        use_callback((), move |_: (), _| store.dispatch(InputTableAction::Reset))
    };

    let edit = {
        let store = store.clone();
        use_callback((), move |(id, field, value): (RowId, RowField, String), _| {
            store.dispatch(InputTableAction::Edit(id, field, value))
        })
    };

    UseGoalInputTableResult {
        table: store.0.clone(),
        actions: UseGoalInputTableActions {
            add_row,
            remove_row,
            reset,
            edit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_round_trip() {
        let initial = Rc::new(InputTableStore::default());

        let grown = initial.clone().reduce(InputTableAction::AddRow);
        assert_eq!(grown.0.len(), 2);
        assert!(grown.0.remove_enabled());

        let added = grown.0.rows()[1].id;
        let shrunk = grown.reduce(InputTableAction::RemoveRow(added));

        assert_eq!(shrunk.0.len(), initial.0.len());
        assert_eq!(shrunk.0.remove_enabled(), initial.0.remove_enabled());
    }

    #[test]
    fn test_removing_only_row_keeps_store() {
        let initial = Rc::new(InputTableStore::default());
        let only_row = initial.0.rows()[0].id;

        let after = initial.clone().reduce(InputTableAction::RemoveRow(only_row));

        assert!(Rc::ptr_eq(&initial, &after));
    }

    #[test]
    fn test_reset_after_edits() {
        let store = Rc::new(InputTableStore::default());
        let id = store.0.rows()[0].id;

        let store = store
            .reduce(InputTableAction::Edit(id, RowField::Title, "Learn Rust".to_string()))
            .reduce(InputTableAction::AddRow)
            .reduce(InputTableAction::Reset);

        assert_eq!(store.0.len(), 1);
        assert!(store.0.rows()[0].title.is_empty());
    }
}
