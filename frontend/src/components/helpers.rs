//! Small DOM and formatting helpers shared by the pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::{Event, InputEvent, TargetCast};

/// Shows a short-lived notification at the bottom of the page.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Asks the user to confirm a destructive action. A missing window counts as
/// a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Milliseconds since the epoch, as seen by the browser.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Renders a server timestamp as `dd.MM.yyyy`. Values that do not parse are
/// shown as they are; a missing value becomes a dash.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

/// Free-text notes for a table cell; blank notes become a dash.
pub fn notes_cell(notes: Option<&str>) -> String {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Renders an activity timestamp with its time of day.
pub fn format_date_time(value: &str) -> String {
    match NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_server_timestamps() {
        assert_eq!(format_date(Some("2024-03-05T14:30:00")), "05.03.2024");
        assert_eq!(format_date(Some("2024-03-05T14:30:00.123456")), "05.03.2024");
        assert_eq!(format_date(Some("2024-03-05T14:30:00Z")), "05.03.2024");
        assert_eq!(format_date(Some("2024-03-05")), "05.03.2024");
    }

    #[test]
    fn missing_or_odd_dates() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("  ")), "-");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
    }

    #[test]
    fn blank_notes_show_a_dash() {
        assert_eq!(notes_cell(Some("call after 5")), "call after 5");
        assert_eq!(notes_cell(Some("   ")), "-");
        assert_eq!(notes_cell(None), "-");
    }

    #[test]
    fn activity_dates_keep_the_time() {
        assert_eq!(format_date_time("2024-03-05T09:05:00"), "05.03.2024 09:05");
        assert_eq!(format_date_time("soon"), "soon");
    }
}
