use shared::{Child, ChildSelection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChildMultiSelectProps {
    pub roster: Vec<Child>,
    pub selection: ChildSelection,
    /// Fired with the child id for a single toggle
    pub on_toggle: Callback<String>,
    /// Fired by Select All / Deselect All
    pub on_toggle_all: Callback<()>,
}

/// Checkbox list with a select-all control and removable chips
#[function_component(ChildMultiSelect)]
pub fn child_multi_select(props: &ChildMultiSelectProps) -> Html {
    let roster_ids: Vec<String> = props.roster.iter().map(|c| c.child_id.clone()).collect();
    let all_selected = props.selection.is_all_selected(&roster_ids);
    let partial = props.selection.is_partially_selected(&roster_ids);

    let select_all_ref = use_node_ref();
    {
        let select_all_ref = select_all_ref.clone();
        use_effect_with(partial, move |partial| {
            if let Some(input) = select_all_ref.cast::<HtmlInputElement>() {
                input.set_indeterminate(*partial);
            }
            || ()
        });
    }

    let on_toggle_all = {
        let on_toggle_all = props.on_toggle_all.clone();
        Callback::from(move |_: Event| on_toggle_all.emit(()))
    };

    html! {
        <div class="child-multi-select">
            <label class="select-all">
                <input
                    type="checkbox"
                    ref={select_all_ref}
                    checked={all_selected}
                    onchange={on_toggle_all}
                />
                {if all_selected { "Deselect All" } else { "Select All" }}
            </label>

            <div class="child-options">
                {for props.roster.iter().map(|child| {
                    let child_id = child.child_id.clone();
                    let on_toggle = props.on_toggle.clone();
                    html! {
                        <label class="child-option">
                            <input
                                type="checkbox"
                                checked={props.selection.contains(&child.child_id)}
                                onchange={Callback::from(move |_: Event| on_toggle.emit(child_id.clone()))}
                            />
                            {&child.name}
                        </label>
                    }
                })}
            </div>

            <div class="chips">
                {for props.selection.ids().iter().map(|child_id| {
                    let name = props
                        .roster
                        .iter()
                        .find(|c| &c.child_id == child_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| child_id.clone());
                    let on_toggle = props.on_toggle.clone();
                    let child_id = child_id.clone();
                    html! {
                        <span class="chip">
                            {name}
                            <button
                                type="button"
                                class="chip-remove"
                                onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(child_id.clone()))}
                            >{"×"}</button>
                        </span>
                    }
                })}
            </div>
        </div>
    }
}
