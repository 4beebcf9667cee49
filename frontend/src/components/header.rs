use yew::prelude::*;

/// Which half of the home page is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Goals,
    AddGoals,
}

impl ActiveView {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Goals => "Goals",
            ActiveView::AddGoals => "Add goals",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_view: ActiveView,
    pub on_select_view: Callback<ActiveView>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let view_button = |view: ActiveView| {
        let on_select_view = props.on_select_view.clone();
        let class = if props.active_view == view {
            "view-toggle active"
        } else {
            "view-toggle"
        };
        html! {
            <button
                type="button"
                class={class}
                onclick={Callback::from(move |_| on_select_view.emit(view))}
            >
                {view.label()}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Goal Tracker"}</h1>
                <nav class="header-right">
                    {view_button(ActiveView::Goals)}
                    {view_button(ActiveView::AddGoals)}
                    <button
                        type="button"
                        class="btn logout-button"
                        onclick={props.on_logout.reform(|_| ())}
                    >
                        {"Log out"}
                    </button>
                </nav>
            </div>
        </header>
    }
}
