use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::services::calendar::{self, CalendarMonth, DueItem};
use crate::ui_dioxus::components::PriorityBadge;
use crate::ui_dioxus::state::use_app_state;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarView() -> Element {
    let state = use_app_state();
    let repository = state.repository;
    let today = Local::now().date_naive();
    let mut month = use_signal(|| CalendarMonth::containing(today));
    let mut selected = use_signal(|| None::<NaiveDate>);

    let current = *month.read();
    let items = {
        let repo = repository.read();
        calendar::due_items(current, repo.projects.values(), repo.tasks.values())
    };
    let buckets = calendar::day_buckets(&items);
    let selected_day = *selected.read();
    let selected_title = selected_day.map(|day| day.format("%B %-d, %Y").to_string()).unwrap_or_default();
    let selected_items = selected_day.map(|day| calendar::items_on(&items, day)).unwrap_or_default();

    let mut select_day = move |day: NaiveDate| {
        selected.set(Some(day));
        let repo = repository.read();
        let due = calendar::due_items(CalendarMonth::containing(day), repo.projects.values(), repo.tasks.values());
        if calendar::items_on(&due, day).is_empty() {
            state.info(calendar::empty_day_message(day));
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0; font-size: 24px;", "Calendar" }
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        style: "padding: 6px 12px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| month.set(current.previous()),
                        "‹"
                    }
                    span { style: "font-weight: 600; min-width: 140px; text-align: center;", "{current.title()}" }
                    button {
                        style: "padding: 6px 12px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| month.set(current.next()),
                        "›"
                    }
                    button {
                        style: "padding: 6px 12px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            month.set(CalendarMonth::containing(today));
                            select_day(today);
                        },
                        "Today"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px;",

                div {
                    style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px;",
                    div {
                        style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; margin-bottom: 4px;",
                        for name in WEEKDAYS {
                            div { key: "{name}", style: "text-align: center; font-size: 12px; color: #6b7280;", "{name}" }
                        }
                    }
                    for (week_index, week) in current.weeks().into_iter().enumerate() {
                        div {
                            key: "{week_index}",
                            style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; margin-bottom: 4px;",
                            for (slot, day) in week.into_iter().enumerate() {
                                match day {
                                    Some(date) => rsx! {
                                        DayCell {
                                            key: "{date}",
                                            date: date,
                                            count: buckets.get(&date).map_or(0, |b| b.items.len()),
                                            has_high_priority: buckets.get(&date).is_some_and(|b| b.has_high_priority),
                                            is_today: date == today,
                                            is_selected: selected_day == Some(date),
                                            onselect: move |day| select_day(day),
                                        }
                                    },
                                    None => rsx! {
                                        div { key: "blank-{slot}", style: "min-height: 64px;" }
                                    },
                                }
                            }
                        }
                    }
                }

                div {
                    style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                    match selected_day {
                        Some(_) => rsx! {
                            h3 { style: "margin: 0 0 12px; font-size: 15px;", "{selected_title}" }
                            if selected_items.is_empty() {
                                p { style: "color: #6b7280; font-size: 13px;", "Nothing due on this day" }
                            }
                            for (index, item) in selected_items.into_iter().enumerate() {
                                DueItemRow { key: "{index}", item: item }
                            }
                        },
                        None => rsx! {
                            p { style: "color: #6b7280; font-size: 13px;", "Select a day to see what is due" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(
    date: NaiveDate,
    count: usize,
    has_high_priority: bool,
    is_today: bool,
    is_selected: bool,
    onselect: EventHandler<NaiveDate>,
) -> Element {
    let border = if is_selected { "#2563eb" } else if is_today { "#93c5fd" } else { "#f1f5f9" };
    let day_number = date.format("%-d").to_string();

    rsx! {
        div {
            style: "min-height: 64px; border: 2px solid {border}; border-radius: 6px; padding: 4px; cursor: pointer;",
            onclick: move |_| onselect.call(date),
            div {
                style: "display: flex; justify-content: space-between; font-size: 12px;",
                span { "{day_number}" }
                if has_high_priority {
                    span { style: "width: 8px; height: 8px; border-radius: 4px; background: #dc2626;" }
                }
            }
            if count > 0 {
                div { style: "margin-top: 6px; font-size: 11px; color: #2563eb;", "{count} due" }
            }
        }
    }
}

#[component]
fn DueItemRow(item: DueItem) -> Element {
    let kind = item.kind_label();
    let title = item.title().to_string();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0; border-bottom: 1px solid #f1f5f9;",
            div {
                div { style: "font-size: 11px; color: #6b7280; text-transform: uppercase;", "{kind}" }
                div { style: "font-size: 14px;", "{title}" }
            }
            PriorityBadge { priority: item.priority() }
        }
    }
}
