//! Main application for the Isolation GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Ui, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameResult, MatchState, WinType};
use super::theme::*;
use crate::config::AppConfig;
use crate::{GameState, Player, SearchType};

/// Main Isolation application
pub struct IsolationApp {
    state: MatchState,
    board_view: BoardView,
    show_debug: bool,
}

impl IsolationApp {
    /// Create the app for a validated config and its opening position
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, initial: GameState) -> Self {
        Self {
            state: MatchState::new(config, GameMode::default(), initial),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Player 1)").clicked() {
                        self.state.restart(GameMode::PvE { human: Player::One });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Player 2)").clicked() {
                        self.state.restart(GameMode::PvE { human: Player::Two });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.restart(GameMode::PvP { show_suggestions: false });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    if let GameMode::PvP { show_suggestions } = &mut self.state.mode {
                        ui.checkbox(show_suggestions, "Live hints");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {human}"),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
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

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_mobility_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Rounded panel card
    fn card(fill: Color32, margin: f32) -> Frame {
        Frame::new().fill(fill).corner_radius(CornerRadius::same(8)).inner_margin(margin)
    }

    fn card_frame() -> Frame {
        Self::card(CARD_BG, 12.0)
    }

    /// Clickable label on a small rounded frame
    fn text_button(ui: &mut Ui, fill: Color32, text: RichText) -> bool {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked())
            .inner
    }

    fn section_title(ui: &mut Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
    }

    fn render_title_card(&self, ui: &mut Ui) {
        let config = self.state.config();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("ISOLATION").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "{}x{} board, {}ms per engine turn",
                    config.board.width, config.board.height, config.turn_time_ms
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.state.active();
            let (label, accent, text_color) = match player {
                Player::One => ("1", PLAYER_ONE, PLAYER_TWO),
                Player::Two => ("2", PLAYER_TWO, PLAYER_ONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(24.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.state.position(player).is_none() {
                        ("Place your knight", TIMER_NORMAL)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_title(ui, "TIMER");
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let budget = self.state.turn_budget().as_secs_f32();
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.6 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.turn_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.turn_timer.last_engine_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Moves left for each knight and open cells on the board
    fn render_mobility_card(&self, ui: &mut Ui) {
        let state = &self.state.state;
        Self::card_frame().show(ui, |ui| {
            Self::section_title(ui, "MOBILITY");
            ui.add_space(8.0);

            for player in [Player::One, Player::Two] {
                let moves = state.mobility(player);
                let color = match moves {
                    0 => TIMER_CRITICAL,
                    1 | 2 => TIMER_WARNING,
                    _ => TEXT_SECONDARY,
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.to_string()).size(12.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{moves} moves")).size(12.0).color(color));
                    });
                });
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} open cells", state.blank_count()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_title(ui, "ACTIONS");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::text_button(ui, BUTTON_BG, RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)) {
                    self.state.undo();
                }
                ui.add_space(4.0);
                let hotseat = matches!(self.state.mode, GameMode::PvP { .. });
                if hotseat && Self::text_button(ui, BUTTON_BG, RichText::new("Hint").size(12.0).color(TEXT_PRIMARY)) {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last engine search: what ran, how deep, and what it cost
    fn render_debug_card(&self, ui: &mut Ui) {
        let engine = self.state.config().engine;
        Self::card(DEBUG_CARD_BG, 12.0).show(ui, |ui| {
            Self::section_title(ui, "AI DEBUG");
            ui.label(
                RichText::new(format!("{:?} / {:?} / {:?}", engine.algorithm, engine.deepening, engine.heuristic))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(6.0);

            let Some(result) = self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            let search_color = match result.search_type {
                SearchType::Fallback => TIMER_CRITICAL,
                _ => TIMER_NORMAL,
            };
            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(search_color));

            egui::Grid::new("debug_stats").num_columns(2).spacing([12.0, 2.0]).show(ui, |ui| {
                let rows = [
                    ("depth", result.depth.to_string()),
                    ("score", format!("{:.1}", result.score)),
                    ("nodes", result.nodes.to_string()),
                    ("time", format!("{} ms", result.time_ms)),
                ];
                for (key, value) in rows {
                    ui.label(RichText::new(key).size(10.0).color(TEXT_MUTED));
                    ui.label(RichText::new(value).size(10.0).color(TEXT_SECONDARY));
                    ui.end_row();
                }
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut Ui, result: GameResult) {
        let how = match result.win_type {
            WinType::Isolated => "opponent isolated",
            WinType::Forfeit => "forfeit",
        };

        Self::card(GAME_OVER_BG, 16.0).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("GAME OVER").size(12.0).color(GAME_OVER_TEXT));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{} WINS!", result.winner.to_string().to_uppercase()))
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(4.0);
                ui.label(RichText::new(format!("by {how}")).size(11.0).color(TEXT_SECONDARY));
                ui.add_space(12.0);

                let label = RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY);
                if Self::text_button(ui, GAME_OVER_BUTTON_BG, label) {
                    self.state.reset();
                }
            });
        });
    }

    fn render_message_card(ui: &mut Ui, msg: &str) {
        Self::card(MESSAGE_BG, 10.0).show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let overlay = BoardOverlay {
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winner: self.state.game_over.map(|result| result.winner),
                interactive: self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            let clicked = ui
                .vertical_centered(|ui| self.board_view.show(ui, &self.state.state, &overlay))
                .inner;

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_move(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP { .. } = self.state.mode {
                    self.state.request_suggestion();
                }
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for IsolationApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        // Live hints in hotseat mode
        if let GameMode::PvP { show_suggestions: true } = self.state.mode {
            if self.state.suggested_move.is_none() && self.state.game_over.is_none() {
                self.state.request_suggestion();
            }
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
