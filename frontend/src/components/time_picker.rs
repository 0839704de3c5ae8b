use shared::ClockTime;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::date_utils::{clock_time_from_parts, hour_options, minute_options};

#[derive(Properties, PartialEq)]
pub struct TimePickerProps {
    pub label: AttrValue,
    pub value: Option<ClockTime>,
    pub on_change: Callback<Option<ClockTime>>,
}

/// Hour / minute / AM-PM selects
#[function_component(TimePicker)]
pub fn time_picker(props: &TimePickerProps) -> Html {
    let hour = props.value.map(|t| t.hour().to_string()).unwrap_or_default();
    let minute = props.value.map(|t| format!("{:02}", t.minute())).unwrap_or_default();
    let meridiem = props
        .value
        .map(|t| t.meridiem().label().to_string())
        .unwrap_or_default();

    // Each select rebuilds the time from its own new value and the other two
    let emit = {
        let on_change = props.on_change.clone();
        move |h: String, m: String, p: String| on_change.emit(clock_time_from_parts(&h, &m, &p))
    };

    let on_hour = {
        let (emit, minute, meridiem) = (emit.clone(), minute.clone(), meridiem.clone());
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit(select.value(), minute.clone(), meridiem.clone());
        })
    };
    let on_minute = {
        let (emit, hour, meridiem) = (emit.clone(), hour.clone(), meridiem.clone());
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit(hour.clone(), select.value(), meridiem.clone());
        })
    };
    let on_meridiem = {
        let (hour, minute) = (hour.clone(), minute.clone());
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit(hour.clone(), minute.clone(), select.value());
        })
    };

    html! {
        <div class="form-group time-picker">
            <label>{props.label.clone()}</label>
            <div class="time-selects">
                <select onchange={on_hour}>
                    <option value="" selected={hour.is_empty()}>{"--"}</option>
                    {for hour_options().map(|h| html! {
                        <option value={h.to_string()} selected={hour == h.to_string()}>{h}</option>
                    })}
                </select>
                <span>{":"}</span>
                <select onchange={on_minute}>
                    <option value="" selected={minute.is_empty()}>{"--"}</option>
                    {for minute_options().map(|m| {
                        let value = format!("{:02}", m);
                        html! { <option value={value.clone()} selected={minute == value}>{value.clone()}</option> }
                    })}
                </select>
                <select onchange={on_meridiem}>
                    <option value="" selected={meridiem.is_empty()}>{"--"}</option>
                    <option value="AM" selected={meridiem == "AM"}>{"AM"}</option>
                    <option value="PM" selected={meridiem == "PM"}>{"PM"}</option>
                </select>
            </div>
        </div>
    }
}
