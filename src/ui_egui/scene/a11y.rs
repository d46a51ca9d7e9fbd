//! Accessibility nodes for painted content.
//!
//! The scene is drawn with a painter, so each meaningful element gets an
//! invisible hover-only response whose AccessKit node carries the role.

use egui::accesskit::{Live, Role};
use egui::{Id, Rect, Response, Sense, Ui};

fn node(ui: &mut Ui, id: Id, rect: Rect) -> Response {
    ui.interact(rect, id, Sense::hover())
}

pub fn region(ui: &mut Ui, id: Id, rect: Rect, label: &str) -> Response {
    let response = node(ui, id, rect);
    ui.ctx().accesskit_node_builder(response.id, |builder| {
        builder.set_role(Role::Main);
        builder.set_name(label);
    });
    response
}

/// Polite, atomic live region announcing the day count.
pub fn timer(ui: &mut Ui, id: Id, rect: Rect, label: &str) -> Response {
    let response = node(ui, id, rect);
    ui.ctx().accesskit_node_builder(response.id, |builder| {
        builder.set_role(Role::Timer);
        builder.set_name(label);
        builder.set_live(Live::Polite);
        builder.set_live_atomic();
    });
    response
}

pub fn heading(ui: &mut Ui, id: Id, rect: Rect, text: &str, level: usize) -> Response {
    let response = node(ui, id, rect);
    ui.ctx().accesskit_node_builder(response.id, |builder| {
        builder.set_role(Role::Heading);
        builder.set_name(text);
        builder.set_hierarchical_level(level);
    });
    response
}

/// Named container for a row of related painted text.
pub fn group(ui: &mut Ui, id: Id, rect: Rect, label: &str) -> Response {
    let response = node(ui, id, rect);
    ui.ctx().accesskit_node_builder(response.id, |builder| {
        builder.set_role(Role::Group);
        builder.set_name(label);
    });
    response
}

pub fn image(ui: &mut Ui, id: Id, rect: Rect, alt: &str) -> Response {
    let response = node(ui, id, rect);
    ui.ctx().accesskit_node_builder(response.id, |builder| {
        builder.set_role(Role::Image);
        builder.set_name(alt);
    });
    response
}
