use daycare_backend::{NavPayload, ParentScreen};
use yew::prelude::*;

use super::home::my_children;
use crate::components::common::{ParentTabBar, ScreenHeader};
use crate::hooks::use_app;
use crate::services::date_utils::or_placeholder;
use crate::services::loaded;

#[function_component(MyChildren)]
pub fn my_children_screen() -> Html {
    let app = use_app();
    let children = my_children(&app);

    html! {
        <div class="screen my-children">
            <ScreenHeader title="My Children" />
            {if children.is_empty() {
                html! { <p class="empty">{"No children are linked to your account yet."}</p> }
            } else {
                html! {
                    <ul class="child-list">
                        {for children.into_iter().map(|child| {
                            let app = app.clone();
                            let label = format!("{} · age {}", child.name, child.age);
                            let on_click = Callback::from(move |_: MouseEvent| {
                                app.parent_to(ParentScreen::DailyActivity, Some(NavPayload::Child(child.clone())))
                            });
                            html! { <li class="child-row" onclick={on_click}>{label}</li> }
                        })}
                    </ul>
                }
            }}
            <ParentTabBar current={ParentScreen::MyChildren} />
        </div>
    }
}

#[function_component(DailyActivity)]
pub fn daily_activity() -> Html {
    let app = use_app();
    let back = app.parent_link(ParentScreen::MyChildren);

    let Some(child) = app.session().parent_router.selected_child.clone() else {
        return html! {
            <div class="screen daily-activity">
                <ScreenHeader title="Daily Activity" on_back={Some(back)} />
                <p class="empty">{"Choose a child to see their day"}</p>
                <ParentTabBar current={ParentScreen::DailyActivity} />
            </div>
        };
    };

    let logs = loaded(app.backend.activity_log_service.logs_for_child(&child.child_id), "activity logs");
    let calendar = &app.backend.calendar_service;

    html! {
        <div class="screen daily-activity">
            <ScreenHeader title={format!("{}'s Day", child.name)} on_back={Some(back)} />
            {if logs.is_empty() {
                html! { <p class="empty">{"No activities logged yet"}</p> }
            } else {
                html! {
                    <ul class="log-list">
                        {for logs.into_iter().map(|log| {
                            let date = log
                                .date
                                .map(|d| calendar.format_date(d))
                                .unwrap_or_else(|| "Date not set".to_string());
                            let time = shared::format_time_range(&log.start_time, &log.end_time);
                            let name = log.activity_name.clone();
                            let app = app.clone();
                            let on_click = Callback::from(move |_: MouseEvent| {
                                app.parent_to(ParentScreen::ActivityDetails, Some(NavPayload::Log(log.clone())))
                            });
                            html! {
                                <li class="log-row" onclick={on_click}>
                                    <div class="log-date">{date}</div>
                                    <div class="log-name">{name}</div>
                                    <div class="log-time">{time}</div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
            <ParentTabBar current={ParentScreen::DailyActivity} />
        </div>
    }
}

#[function_component(ActivityDetails)]
pub fn activity_details() -> Html {
    let app = use_app();
    let back = app.parent_link(ParentScreen::DailyActivity);
    let router = &app.session().parent_router;

    let Some(log) = router.selected_activity.clone() else {
        return html! {
            <div class="screen activity-details">
                <ScreenHeader title="Activity" on_back={Some(back)} />
                <p class="empty">{"No activity selected"}</p>
                <ParentTabBar current={ParentScreen::ActivityDetails} />
            </div>
        };
    };

    let child_note = router
        .selected_child
        .as_ref()
        .and_then(|child| log.entry_for(&child.child_id))
        .map(|entry| entry.behavioral_note.clone())
        .unwrap_or_default();

    html! {
        <div class="screen activity-details">
            <ScreenHeader title={log.activity_name.clone()} on_back={Some(back)} />
            <dl class="details">
                <dt>{"Time"}</dt>
                <dd>{shared::format_time_range(&log.start_time, &log.end_time)}</dd>
                <dt>{"General Notes"}</dt>
                <dd>{or_placeholder(&log.notes, "No notes")}</dd>
                <dt>{"Behavioral Note"}</dt>
                <dd>{or_placeholder(&child_note, "No behavioral note for this activity")}</dd>
            </dl>
            <ParentTabBar current={ParentScreen::ActivityDetails} />
        </div>
    }
}
