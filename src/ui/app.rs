//! Main application for the sum-difference Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::AppConfig;
use crate::{Player, WinInfo, MAX_STONE_VALUE, MIN_STONE_VALUE, STONES_PER_PLAYER, WINNING_SCORE};
use super::board_view::{paint_stone_icon, BoardView};
use super::game_state::GameState;
use super::stone_picker::{self, PickerAction};
use super::theme::*;

/// Main application
pub struct SumDiffApp {
    state: GameState,
    board_view: BoardView,
    show_scores: bool,
}

impl SumDiffApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(config.win_pause()),
            board_view: BoardView::default(),
            show_scores: config.show_scores,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_scores, "Line Scores");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("First to a line worth exactly {}", WINNING_SCORE));
                });
            });
        });
    }

    /// Render the side panel with turn, inventories and scores
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_inventory_card(ui);
                ui.add_space(10.0);

                if self.show_scores {
                    self.render_scores_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if let Some(info) = self.state.session.winner().cloned() {
                    ui.add_space(10.0);
                    self.render_winner_card(ui, &info);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("+/-").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("SUM-DIFF GOMOKU").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("numbered stones, exact sum of 16").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.session.current_turn();
            let is_black = turn == Player::Black;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, stone_fill(is_black));
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, TEXT_MUTED));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.session.is_over() {
                        ("Game Over", WIN_TEXT)
                    } else if self.state.pending.is_some() {
                        ("Choosing a stone...", STATUS_WARNING)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Remaining stones of both players, one icon per value with its count
    fn render_inventory_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STONES LEFT").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in [Player::Black, Player::White] {
                let inventory = self.state.session.inventory(player);
                ui.horizontal(|ui| {
                    for value in MIN_STONE_VALUE..=MAX_STONE_VALUE {
                        let count = inventory.count(value);
                        ui.vertical(|ui| {
                            let (rect, _) = ui.allocate_exact_size(Vec2::splat(28.0), egui::Sense::hover());
                            if count > 0 {
                                paint_stone_icon(ui.painter(), rect, player, value, false);
                            } else {
                                ui.painter().circle_filled(rect.center(), 11.0, STATUS_EMPTY);
                            }
                            ui.label(RichText::new(format!("×{}", count)).size(10.0).color(TEXT_SECONDARY));
                        });
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}/{}", inventory.total(), STONES_PER_PLAYER))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Best directional score of each player after the last placement
    fn render_scores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("BEST LINE SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let scores = self.state.session.scores();
            for player in [Player::Black, Player::White] {
                let score = scores.of(player);
                let color = if score == WINNING_SCORE {
                    WIN_TEXT
                } else if score > WINNING_SCORE - 4 {
                    STATUS_WARNING
                } else {
                    TEXT_PRIMARY
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.name()).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{} / {}", score, WINNING_SCORE)).size(14.0).strong().color(color));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.session.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_winner_card(&self, ui: &mut egui::Ui, info: &WinInfo) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{} WINS!", info.winner.name().to_uppercase())).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("line of {} stones worth {}", info.line.len(), info.score))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(RichText::new(format!("last stone at {}", info.last_move)).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let session = &self.state.session;
            let winning_line = session.winner().map(|info| info.line.as_slice());
            let interactive = !session.is_over() && self.state.pending.is_none();

            let clicked = self.board_view.show(
                ui,
                session.board(),
                session.current_turn(),
                session.last_move(),
                winning_line,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.select_cell(pos) {
                    self.state.report(&err);
                }
            }
        });
    }

    fn render_stone_picker(&mut self, ctx: &Context) {
        let Some(pending) = &self.state.pending else {
            return;
        };

        let value = match stone_picker::show(ctx, pending) {
            Some(PickerAction::Chosen(value)) => Some(value),
            Some(PickerAction::Cancelled) => None,
            None => return,
        };

        if let Err(err) = self.state.choose_value(value) {
            self.state.report(&err);
        }
    }

    /// Announce the winner once the highlighted board has been shown long enough
    fn render_game_over_dialog(&mut self, ctx: &Context) {
        let now = Instant::now();
        match self.state.dialog_delay(now) {
            None => return,
            Some(delay) if !delay.is_zero() => {
                ctx.request_repaint_after(delay);
                return;
            }
            Some(_) => {}
        }

        let Some(winner) = self.state.session.winner().map(|info| info.winner) else {
            return;
        };

        let mut confirmed = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{} wins!", winner)).size(18.0).strong());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                });
            });

        if confirmed {
            self.state.reset();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let new_game = ctx.input(|i| i.key_pressed(egui::Key::N));
        if new_game && self.state.pending.is_none() {
            self.state.reset();
        }
    }
}

impl eframe::App for SumDiffApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_stone_picker(ctx);
        self.render_game_over_dialog(ctx);
    }
}
