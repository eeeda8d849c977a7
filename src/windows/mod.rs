use eframe::egui;

use crate::render::ModalCard;

pub mod post;

pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui, card: &ModalCard);
}

/// Something to view
pub trait Window {
    /// `&'static` so we can also use it as a key to store open/close state.
    fn name(&self) -> &'static str;

    /// Show windows, etc
    fn show(
        &mut self,
        card: &ModalCard,
        ctx: &egui::Context,
        open: &mut bool,
        size: egui::Vec2,
    );

    /// status
    fn is_closed(&self) -> bool;
}
