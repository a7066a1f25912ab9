use common::model::lead::{LeadStatus, Priority};
use common::model::query::{SortField, SortOrder};
use strum::IntoEnumIterator;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadsTable;
use crate::components::helpers::{format_date, input_value, notes_cell, select_value};

pub fn view(table: &LeadsTable, ctx: &Context<LeadsTable>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let list = &table.list;
    let status = list.status_filter();
    let priority = list.priority_filter();

    html! {
        <div class="leads-table">
            <div class="controls">
                <label>
                    { "Sort by" }
                    <select onchange={link.callback(|e: Event| Msg::SetSortBy(select_value(e)))}>
                        { for SortField::iter().map(|field| html! {
                            <option value={field.to_string()} selected={list.sort_by() == field}>
                                { field.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Order" }
                    <select onchange={link.callback(|e: Event| Msg::SetOrder(select_value(e)))}>
                        { for SortOrder::iter().map(|order| html! {
                            <option value={order.to_string()} selected={list.order() == order}>
                                { order.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Status" }
                    <select onchange={link.callback(|e: Event| Msg::SetStatus(select_value(e)))}>
                        <option value="" selected={status.is_none()}>{ "All" }</option>
                        { for LeadStatus::iter().map(|s| html! {
                            <option value={s.to_string()} selected={status == Some(s)}>{ s.to_string() }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Priority" }
                    <select onchange={link.callback(|e: Event| Msg::SetPriority(select_value(e)))}>
                        <option value="" selected={priority.is_none()}>{ "All" }</option>
                        { for Priority::iter().map(|p| html! {
                            <option value={p.to_string()} selected={priority == Some(p)}>{ p.to_string() }</option>
                        }) }
                    </select>
                </label>
                <input
                    type="search"
                    placeholder="Search by name"
                    value={list.raw_search().to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::SearchInput(input_value(e)))}
                />
            </div>

            if let Some(error) = list.error() {
                <p class="error">{ error }</p>
            }
            if list.loading() {
                <p class="loading">{ "Loading leads..." }</p>
            }

            <table>
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Phone" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Priority" }</th>
                        <th>{ "Notes" }</th>
                        <th>{ "Created" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for list.rows().iter().map(|lead| {
                        let id = lead.id;
                        let on_edit = props.on_edit.reform({
                            let lead = lead.clone();
                            move |_: MouseEvent| lead.clone()
                        });
                        let on_details = props.on_details.reform({
                            let lead = lead.clone();
                            move |_: MouseEvent| lead.clone()
                        });
                        let on_delete = props.on_delete.reform(move |_: MouseEvent| id);
                        html! {
                            <tr key={id}>
                                <td>{ lead.name.clone() }</td>
                                <td>{ lead.email.clone() }</td>
                                <td>{ lead.phone.clone().unwrap_or_default() }</td>
                                <td>{ lead.status.to_string() }</td>
                                <td>{ lead.priority.map(|p| p.to_string()).unwrap_or_default() }</td>
                                <td>{ notes_cell(lead.notes.as_deref()) }</td>
                                <td>{ format_date(lead.created_at.as_deref()) }</td>
                                <td>
                                    <button onclick={on_details}>{ "Details" }</button>
                                    <button onclick={on_edit}>{ "Edit" }</button>
                                    <button onclick={on_delete}>{ "Delete" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            if !list.loading() && list.rows().is_empty() && list.error().is_none() {
                <p>{ "No leads found." }</p>
            }
        </div>
    }
}
