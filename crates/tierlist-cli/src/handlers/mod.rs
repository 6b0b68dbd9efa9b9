pub mod axis;
pub mod board;
pub mod items;
pub mod share;

use serde::Serialize;
use tierlist_domain::{contrast_text_color, AppState, Axis, Item};

#[derive(Serialize)]
pub struct AxisEntryView<'a> {
    pub index: usize,
    pub label: &'a str,
    pub color: &'a str,
    pub text_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

pub fn axis_view(state: &AppState, axis: Axis) -> Vec<AxisEntryView<'_>> {
    state
        .axis(axis)
        .iter()
        .enumerate()
        .map(|(index, entry)| AxisEntryView {
            index,
            label: &entry.label,
            color: &entry.color,
            text_color: contrast_text_color(&entry.color),
            width: match axis {
                Axis::Col => state.col_widths().get(index).copied(),
                Axis::Row => None,
            },
        })
        .collect()
}

#[derive(Serialize)]
pub struct ItemView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    pub container: Option<&'a str>,
}

pub fn item_view<'a>(state: &'a AppState, item: &'a Item) -> ItemView<'a> {
    ItemView {
        id: &item.id,
        name: item.display_name(),
        image: item.image.as_deref(),
        container: state.locate_container(&item.id),
    }
}

/// Resolves a container argument; `pool` names the pool.
pub fn container_arg<'a>(state: &'a AppState, arg: &'a str) -> &'a str {
    if arg == "pool" {
        state.pool_id()
    } else {
        arg
    }
}
