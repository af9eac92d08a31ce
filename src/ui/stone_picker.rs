//! Modal window for choosing which stone value to place

use egui::{Align2, Context, RichText, Sense, Vec2};

use super::board_view::paint_stone_icon;
use super::game_state::PendingPlacement;
use super::theme::*;

const MAX_COLUMNS: usize = 8;

/// What the player did in the picker this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Chosen(u8),
    Cancelled,
}

/// Show the picker for `pending`. Returns `None` while it stays open.
pub fn show(ctx: &Context, pending: &PendingPlacement) -> Option<PickerAction> {
    let mut action = None;

    egui::Window::new("Choose a Stone")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("{} to play at {}", pending.player, pending.pos))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(6.0);

            for row in pending.choices.chunks(MAX_COLUMNS) {
                ui.horizontal(|ui| {
                    for &value in row {
                        let (rect, response) =
                            ui.allocate_exact_size(Vec2::splat(PICKER_STONE_SIZE), Sense::click());
                        paint_stone_icon(ui.painter(), rect, pending.player, value, response.hovered());
                        if response.clicked() {
                            action = Some(PickerAction::Chosen(value));
                        }
                    }
                });
            }

            ui.add_space(6.0);
            if ui.button("Cancel").clicked() {
                action = Some(PickerAction::Cancelled);
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(PickerAction::Cancelled);
    }

    action
}
