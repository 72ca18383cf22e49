use eframe::{egui, App};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::dictionary_io::load_dictionary;
use crate::error::LoadError;
use crate::render::{
    averages_line, detail_cards, sentence_line, tag_chips, EMPTY_DETAILS, EMPTY_SENTENCE,
    EMPTY_SUMMARY, SNAPSHOT_TITLE,
};
use crate::session::{LoadState, SentenceSession};
use crate::types::entry::Entry;

type LoadResult = Result<Vec<Entry>, LoadError>;

// What the user asked for during one frame; applied after drawing so the
// session is never mutated while its slices are borrowed.
enum Intent {
    Pick(Rc<Entry>),
    RemoveAt(usize),
    Clear,
}

pub struct SentenceBuilderApp {
    session: SentenceSession,
    search_text: String,
    loader: Option<Receiver<LoadResult>>,
}

impl SentenceBuilderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dictionary_path: PathBuf) -> Self {
        Self {
            session: SentenceSession::new(),
            search_text: String::new(),
            loader: Some(spawn_loader(dictionary_path)),
        }
    }

    fn poll_loader(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.loader else { return };
        match rx.try_recv() {
            Ok(result) => {
                self.session.finish_load(result);
                self.loader = None;
            }
            Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(100)),
            Err(TryRecvError::Disconnected) => {
                self.session.finish_load(Err(LoadError::Interrupted));
                self.loader = None;
            }
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Pick(entry) => self.session.pick(&entry),
            Intent::RemoveAt(idx) => self.session.remove_at(idx),
            Intent::Clear => self.session.clear_selection(),
        }
    }

    fn word_list(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let typing = ui.ctx().wants_keyboard_input();
        egui::ScrollArea::vertical()
            .id_source("word_list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for entry in self.session.filtered() {
                        let selected = self.session.is_selected(entry);
                        let resp = ui
                            .selectable_label(selected, entry.word.as_str())
                            .on_hover_text(format!("{} • {}", entry.word, entry.pos_label()));
                        let shortcut = !typing
                            && (resp.hovered() || resp.has_focus())
                            && ui.input(|i| i.key_pressed(egui::Key::A));
                        if resp.clicked() || shortcut {
                            intents.push(Intent::Pick(Rc::clone(entry)));
                        }
                    }
                });
            });
    }

    fn sentence_strip(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.horizontal_wrapped(|ui| {
            if self.session.selection().is_empty() {
                ui.label(egui::RichText::new(EMPTY_SENTENCE).weak());
                return;
            }
            for (idx, entry) in self.session.selection().iter().enumerate() {
                if ui
                    .button(entry.word.as_str())
                    .on_hover_text("Click to remove")
                    .clicked()
                {
                    intents.push(Intent::RemoveAt(idx));
                }
            }
        });
    }

    fn details(&self, ui: &mut egui::Ui) {
        if self.session.selection().is_empty() {
            ui.label(EMPTY_DETAILS);
            return;
        }
        for card in detail_cards(self.session.selection()) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&card.word).strong());
                    ui.label(egui::RichText::new(&card.part_of_speech).italics());
                });
                ui.label(&card.denotation);
                ui.horizontal_wrapped(|ui| {
                    for tag in &card.tags {
                        ui.label(egui::RichText::new(tag).small());
                    }
                });
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&card.formality).small());
                    ui.label(egui::RichText::new(&card.intensity).small());
                });
                ui.label(&card.alternatives);
            });
            ui.add_space(4.0);
        }
    }

    fn summary(&self, ui: &mut egui::Ui) {
        let summary = self.session.summary();
        let Some(averages) = averages_line(summary) else {
            ui.label(EMPTY_SUMMARY);
            return;
        };
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(SNAPSHOT_TITLE).strong());
                ui.label(format!("{} word(s)", summary.word_count));
            });
            ui.label(averages);
            ui.horizontal_wrapped(|ui| {
                for chip in tag_chips(summary) {
                    ui.label(egui::RichText::new(chip).small());
                }
            });
        });
        ui.label(sentence_line(summary));
    }
}

fn spawn_loader(path: PathBuf) -> Receiver<LoadResult> {
    let (tx, rx) = mpsc::channel();
    info!("Loading dictionary from {}", path.display());
    thread::spawn(move || {
        // receiver gone means the window closed first
        let _ = tx.send(load_dictionary(&path));
    });
    rx
}

impl App for SentenceBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader(ctx);
        let mut intents: Vec<Intent> = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Search:");
                if ui.text_edit_singleline(&mut self.search_text).changed() {
                    self.session.set_query(&self.search_text);
                }
                if ui.button("Clear").clicked() {
                    intents.push(Intent::Clear);
                }
            });
            match self.session.load_state() {
                LoadState::Failed(msg) => {
                    ui.colored_label(egui::Color32::RED, msg);
                }
                _ => {
                    ui.label(self.session.status_line());
                }
            }
        });

        egui::SidePanel::left("word_list_panel")
            .min_width(220.0)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Words");
                ui.separator();
                self.word_list(ui, &mut intents);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sentence");
            self.sentence_strip(ui, &mut intents);
            ui.separator();
            ui.columns(2, |columns| {
                egui::ScrollArea::vertical()
                    .id_source("details_scroll")
                    .auto_shrink([false, false])
                    .show(&mut columns[0], |ui| {
                        ui.heading("Details");
                        ui.separator();
                        self.details(ui);
                    });
                egui::ScrollArea::vertical()
                    .id_source("summary_scroll")
                    .auto_shrink([false, false])
                    .show(&mut columns[1], |ui| {
                        ui.heading("Summary");
                        ui.separator();
                        self.summary(ui);
                    });
            });
        });

        for intent in intents {
            self.apply(intent);
        }
    }
}

pub fn run_gui(config: &Config) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };
    let dictionary_path = config.dictionary_path.clone();
    eframe::run_native(
        "Sentence Builder",
        options,
        Box::new(move |cc| Box::new(SentenceBuilderApp::new(cc, dictionary_path))),
    )
}
