use std::time::Duration;

use eframe::egui::{self, Color32, RichText};
use egui_extras::RetainedImage;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::i18n::{Locale, Translator};
use crate::models::{FormState, LoadingStatus};
use crate::render::{Surface, Tone};
use crate::store::{Change, SharedStore};
use crate::validate::validate;
use crate::windows::{post::PreviewWindow, Window};
use crate::Message;

pub struct App {
    store: SharedStore,
    changes: UnboundedReceiver<Change>,
    sender: UnboundedSender<Message>,
    i18n: Translator,
    surface: Surface,
    preview: PreviewWindow,
    preview_open: bool,
    rss_icon: RetainedImage,
}

impl App {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        store: SharedStore,
        changes: UnboundedReceiver<Change>,
        sender: UnboundedSender<Message>,
        locale: Locale,
    ) -> Self {
        let i18n = Translator::new(locale);

        Self {
            surface: Surface::new(&i18n),
            i18n,
            store,
            changes,
            sender,
            preview: PreviewWindow::default(),
            preview_open: false,
            rss_icon: RetainedImage::from_svg_bytes_with_size(
                "rss",
                include_bytes!("../icons/rss.svg"),
                egui_extras::image::FitTo::Size(24, 24),
            )
            .unwrap(),
        }
    }

    /// Applies queued change events to the surface, in the order the store
    /// committed them.
    fn drain_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            if let Ok(store) = self.store.read() {
                self.surface.apply(change, store.state(), &self.i18n);
            }
        }
    }

    fn submit(&mut self) {
        let url = self.surface.input.clone();
        let error = match self.store.read() {
            Ok(store) => validate(&url, &store.state().feeds),
            Err(_) => return,
        };
        if let Ok(mut store) = self.store.write() {
            match error {
                Some(error) => store.set_form(FormState::invalid(error)),
                None => {
                    store.set_form(FormState::valid());
                    if let Err(e) = self.sender.send(Message::AddFeed(url)) {
                        tracing::error!("{e}");
                    }
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.drain_changes();

        // keep painting while a load is in flight so its completion shows up
        if let Ok(store) = self.store.read() {
            if store.state().loading_process.status == LoadingStatus::Loading {
                ctx.request_repaint_after(Duration::from_millis(200));
            }
        }

        egui::TopBottomPanel::top("Form").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.image(self.rss_icon.texture_id(ctx), self.rss_icon.size_vec2());
                ui.heading("FeedBox");
            });
            ui.horizontal(|ui| {
                let mut edit = egui::TextEdit::singleline(&mut self.surface.input)
                    .hint_text("https://example.com/feed")
                    .desired_width(480.0);
                if self.surface.input_invalid {
                    edit = edit.text_color(Color32::RED);
                }
                let resp = ui.add_enabled(self.surface.input_enabled, edit);
                let entered =
                    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(self.surface.input_enabled, egui::Button::new("Add"))
                    .clicked();
                if entered || clicked {
                    self.submit();
                }
            });
            let feedback = &self.surface.feedback;
            if !feedback.text.is_empty() {
                match feedback.tone {
                    Tone::Danger => {
                        ui.label(RichText::new(&feedback.text).color(Color32::RED));
                    }
                    Tone::Success => {
                        ui.label(RichText::new(&feedback.text).color(Color32::DARK_GREEN));
                    }
                    Tone::Neutral => {
                        ui.label(&feedback.text);
                    }
                }
            }
            ui.add_space(4.0);
        });

        egui::SidePanel::left("Feeds")
            .resizable(true)
            .default_width(280.0)
            .width_range(160.0..=360.0)
            .show(ctx, |ui| {
                ui.heading(&self.surface.feeds_title);
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for feed in &self.surface.feeds {
                            ui.label(RichText::new(&feed.title).strong());
                            ui.label(&feed.description);
                            ui.separator();
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.surface.posts_title);
            ui.separator();

            let mut follow: Option<(String, String)> = None;
            let mut preview: Option<String> = None;

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for post in &self.surface.posts {
                        ui.horizontal(|ui| {
                            let title = if post.visited {
                                RichText::new(&post.title).weak()
                            } else {
                                RichText::new(&post.title).strong()
                            };
                            if ui.link(title).clicked() {
                                follow = Some((post.id.clone(), post.link.clone()));
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button(&self.surface.preview_label).clicked() {
                                        preview = Some(post.id.clone());
                                    }
                                },
                            );
                        });
                        ui.separator();
                    }
                });

            if let Some((id, link)) = follow {
                if let Err(e) = open::that(&link) {
                    tracing::error!("{e}");
                }
                if let Ok(mut store) = self.store.write() {
                    store.watch_post(id);
                }
                ctx.request_repaint();
            }
            if let Some(id) = preview {
                if let Ok(mut store) = self.store.write() {
                    store.watch_post(id.clone());
                    store.open_modal(id);
                }
                self.preview_open = true;
                ctx.request_repaint();
            }
        });

        if self.preview_open {
            if let Some(card) = &self.surface.modal {
                let size = frame.info().window_info.size;
                self.preview.show(card, ctx, &mut self.preview_open, size);
                if self.preview.is_closed() {
                    self.preview_open = false;
                }
            }
        }
    }
}
