use std::ops::{Div, Sub};

use eframe::{egui, emath};

use crate::render::ModalCard;

use super::{View, Window};

/// Detail view for one post. The card it paints is rebuilt by the render
/// dispatcher whenever the modal selection changes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PreviewWindow {
    closed: bool,
}

impl PreviewWindow {
    pub const NAME: &'static str = "Preview";
}

impl Window for PreviewWindow {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn show(&mut self, card: &ModalCard, ctx: &egui::Context, open: &mut bool, size: egui::Vec2) {
        self.closed = false;
        egui::Window::new(card.title.as_str())
            .id(egui::Id::new(Self::NAME))
            .resizable(false)
            .default_width(360.0)
            .default_pos(size.sub(egui::vec2(360.0, 400.0)).div(2.0).to_pos2())
            .open(open)
            .show(ctx, |ui| self.ui(ui, card));
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl View for PreviewWindow {
    fn ui(&mut self, ui: &mut egui::Ui, card: &ModalCard) {
        ui.label(card.body.as_str());
        ui.end_row();

        ui.with_layout(
            egui::Layout::default().with_cross_align(emath::Align::RIGHT),
            |ui| {
                ui.horizontal_wrapped(|ui| {
                    if ui.button(card.read_label.as_str()).clicked() {
                        if let Err(e) = open::that(&card.link) {
                            tracing::error!("{e}");
                        }
                    }
                    if ui.button(card.close_label.as_str()).clicked() {
                        self.closed = true;
                    }
                });
            },
        );
    }
}
