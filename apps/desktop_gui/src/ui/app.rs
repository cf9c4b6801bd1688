//! The egui application surface: file picker, rule inputs, submit/reset
//! actions, and the results table. All client state lives in one
//! `CheckerWorkflow` instance owned here and passed to the drawing code.

use std::time::Duration;

use checker_core::{
    render::{result_rows, EvidenceDisplay, ResultRow, StatusTag, EMPTY_RESULTS_PLACEHOLDER},
    CheckerWorkflow, SelectedFile, WorkflowState,
};
use crossbeam_channel::{Receiver, Sender};
use egui::{Color32, RichText};
use shared::{domain::RULE_COUNT, error::SubmitError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const PASS_COLOR: Color32 = Color32::from_rgb(60, 160, 90);
const FAIL_COLOR: Color32 = Color32::from_rgb(200, 70, 70);
const NOTICE_COLOR: Color32 = Color32::from_rgb(190, 130, 20);

pub struct CheckerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    workflow: CheckerWorkflow,
    rule_drafts: [String; RULE_COUNT],
    file_notice: Option<String>,
    status_line: String,
}

impl CheckerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            workflow: CheckerWorkflow::new(),
            rule_drafts: Default::default(),
            file_notice: None,
            status_line: String::new(),
        }
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status_line = message,
                UiEvent::VerificationFinished(outcome) => self.workflow.finish_submit(outcome),
            }
        }
    }

    fn pick_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let file = SelectedFile::new(name, bytes);
                self.file_notice = file.advisory_warning();
                self.workflow.select_file(Some(file));
            }
            Err(err) => {
                self.status_line = format!("could not read '{}': {err}", path.display());
            }
        }
    }

    fn trigger_submit(&mut self) {
        let Some(request) = self.workflow.begin_submit() else {
            return;
        };
        let mut status = String::new();
        if !dispatch_backend_command(&self.cmd_tx, BackendCommand::Verify(request), &mut status) {
            // The attempt never reached the worker; release the in-flight
            // token through the normal failure path.
            self.workflow
                .finish_submit(Err(SubmitError::transport(status.clone())));
            self.status_line = status;
        }
    }

    fn reset(&mut self) {
        self.workflow.reset();
        self.rule_drafts = Default::default();
        self.file_notice = None;
    }

    fn file_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Upload PDF").strong());
        ui.horizontal(|ui| {
            if ui.button("Choose File").clicked() {
                self.pick_file();
            }
            match self.workflow.submission().file_name() {
                Some(name) => ui.label(RichText::new(name).italics()),
                None => ui.label(RichText::new("No file chosen").italics().weak()),
            };
        });
        ui.label(RichText::new("Max 20MB — PDF only.").weak().small());
        if let Some(notice) = &self.file_notice {
            ui.colored_label(NOTICE_COLOR, notice);
        }
        if self.workflow.submission().file().is_some() && ui.small_button("Remove File").clicked() {
            self.workflow.remove_file();
            self.file_notice = None;
        }
        if let Some(err @ SubmitError::MissingFile) = self.workflow.last_error() {
            ui.colored_label(FAIL_COLOR, err.to_string());
        }
    }

    fn rules_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Rules").strong());
        for index in 0..RULE_COUNT {
            ui.horizontal(|ui| {
                ui.label(format!("{}.", index + 1));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.rule_drafts[index])
                        .hint_text(format!("Enter rule {}", index + 1))
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.workflow.edit_rule(index, self.rule_drafts[index].clone());
                }
            });
        }
        ui.label(RichText::new("Tip: be clear and specific for the best results.").weak().small());
        if let Some(err @ SubmitError::IncompleteRules) = self.workflow.last_error() {
            ui.colored_label(FAIL_COLOR, err.to_string());
        }
    }

    fn actions_section(&mut self, ui: &mut egui::Ui) {
        let submitting = self.workflow.is_submitting();
        ui.horizontal(|ui| {
            let submit_label = if submitting { "Checking…" } else { "Check Document" };
            if ui
                .add_enabled(!submitting, egui::Button::new(submit_label))
                .clicked()
            {
                self.trigger_submit();
            }
            if submitting {
                ui.spinner();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} results", self.workflow.results().len()));
            });
        });

        if !submitting && !self.workflow.submission().is_complete() {
            ui.label(
                RichText::new("Attach a PDF and fill all 3 rules to run a check.")
                    .weak()
                    .small(),
            );
        }
        // Input errors are rendered field-level next to the file/rules
        // sections; only request-level failures get the banner.
        if let WorkflowState::Failed(err) = self.workflow.state() {
            if !err.is_input_error() {
                ui.colored_label(FAIL_COLOR, err.to_string());
            }
        }
        if !self.status_line.is_empty() {
            ui.label(RichText::new(&self.status_line).weak().small());
        }
    }

    fn results_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Results").strong());
        let rows = result_rows(self.workflow.results());
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(5)
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for header in ["Rule", "Status", "Evidence", "Reasoning", "Confidence"] {
                        ui.label(RichText::new(header).strong().small());
                    }
                    ui.end_row();

                    if rows.is_empty() {
                        ui.label(RichText::new(EMPTY_RESULTS_PLACEHOLDER).weak());
                        ui.end_row();
                    } else {
                        for row in &rows {
                            draw_result_row(ui, row);
                            ui.end_row();
                        }
                    }
                });
        });
    }
}

fn draw_result_row(ui: &mut egui::Ui, row: &ResultRow) {
    ui.label(&row.rule);
    let tag_color = match row.tag {
        StatusTag::Positive => PASS_COLOR,
        StatusTag::Negative => FAIL_COLOR,
    };
    ui.colored_label(tag_color, row.tag.label());
    match &row.evidence {
        EvidenceDisplay::Cited(citation) => {
            ui.label(RichText::new(citation).monospace());
        }
        EvidenceDisplay::NotFound => {
            // Neutral state: the service could not substantiate the verdict.
            ui.label(RichText::new(row.evidence.text()).weak());
        }
    }
    ui.label(&row.reasoning);
    ui.label(&row.confidence_label);
}

impl eframe::App for CheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_backend_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Document Rule Checker");
            ui.label("Upload a PDF and check it against your rules.");
            ui.separator();
            self.file_section(ui);
            ui.separator();
            self.rules_section(ui);
            ui.separator();
            self.actions_section(ui);
            ui.separator();
            self.results_section(ui);
        });

        if self.workflow.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
