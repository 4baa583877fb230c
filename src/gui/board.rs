use std::collections::HashMap;

use eframe::egui::{
    self,
    Color32,
    Stroke,
};

use crate::{
    core::{
        CardId,
        PhraseCategory,
    },
    editor::{
        geometry::{
            self,
            Rect,
        },
        EditorSession,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

/// On-screen card rectangles from the latest paint, keyed by card id. Drop
/// placement and connection lines both read from here, so a drop always lands
/// relative to what the user actually saw.
pub struct BoardState {
    pub rects: HashMap<CardId, Rect>,
}

impl BoardState {
    pub fn new() -> Self {
        Self { rects: HashMap::new() }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// The four-column editing surface. Clicks and drops are queued as actions; the
/// session itself is only read here.
pub fn board(
    ctx: &egui::Context,
    session: &EditorSession,
    state: &mut BoardState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.columns(4, |columns| {
            for (index, category) in PhraseCategory::ALL.iter().enumerate() {
                show_column(&mut columns[index], session, state, theme, actions, *category);
            }
        });
    });

    draw_connections(ctx, session, state, theme);
}

fn show_column(
    ui: &mut egui::Ui,
    session: &EditorSession,
    state: &mut BoardState,
    theme: &Theme,
    actions: &mut ActionQueue,
    category: PhraseCategory,
) {
    let visible = session.cards(category).iter().filter(|card| card.is_visible()).count();
    ui.label(theme.heading(&format!("{} ({})", category.label(), visible)));
    ui.add_space(4.0);

    let frame = egui::Frame::default().inner_margin(4);
    let (_, dropped) = ui.dnd_drop_zone::<CardId, ()>(frame, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(category.label())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for card in session.cards(category) {
                    if !card.is_visible() {
                        continue;
                    }
                    show_card(ui, session, state, theme, actions, card.id);
                }
                // Keep empty columns droppable.
                ui.allocate_space(egui::vec2(ui.available_width(), 40.0_f32.max(ui.available_height())));
            });
    });

    if let Some(card_id) = dropped {
        let drop_y = ui
            .input(|input| input.pointer.interact_pos())
            .map(|pos| pos.y)
            .unwrap_or(f32::MAX);
        actions.push(UiAction::MoveCard { card_id: *card_id, target: category, drop_y });
    }
}

fn show_card(
    ui: &mut egui::Ui,
    session: &EditorSession,
    state: &mut BoardState,
    theme: &Theme,
    actions: &mut ActionQueue,
    card_id: CardId,
) {
    let Some(card) = session.card(card_id) else {
        return;
    };

    let stroke = if session.anchor() == Some(card.id) {
        Stroke::new(2.0, theme.anchor_accent())
    } else if card.connected {
        Stroke::new(1.5, theme.connected_accent())
    } else {
        Stroke::new(1.0, Color32::TRANSPARENT)
    };

    let drag_id = egui::Id::new(("card", card.id));
    let response = ui
        .dnd_drag_source(drag_id, card.id, |ui| {
            egui::Frame::default()
                .fill(theme.category_fill(card.category))
                .stroke(stroke)
                .corner_radius(4)
                .inner_margin(6)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(&card.text);
                    ui.horizontal(|ui| {
                        ui.small(format!("{:.3}", card.score));
                        if let Some(pattern) = &card.pattern {
                            ui.small(pattern);
                        }
                    });
                });
        })
        .response;

    state.rects.insert(
        card.id,
        Rect::new(
            response.rect.left(),
            response.rect.top(),
            response.rect.width(),
            response.rect.height(),
        ),
    );

    if response.interact(egui::Sense::click()).clicked() {
        actions.push(UiAction::SelectCard(card.id));
    }

    ui.add_space(4.0);
}

/// Relation lines are drawn on a foreground layer after the columns so they sit
/// above the card fills. Geometry works in absolute screen coordinates, so the
/// container origin is zero.
fn draw_connections(
    ctx: &egui::Context,
    session: &EditorSession,
    state: &BoardState,
    theme: &Theme,
) {
    let edges = session.visible_edges();
    if edges.is_empty() {
        return;
    }

    let screen = ctx.screen_rect();
    let container = Rect::new(0.0, 0.0, screen.width(), screen.height());
    let painter =
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("relations")));
    let stroke = Stroke::new(2.0, theme.connection_line());

    for edge in edges {
        let (Some(from), Some(to)) = (state.rects.get(&edge.from_id), state.rects.get(&edge.to_id))
        else {
            continue;
        };

        let segment = geometry::compute_segment(from, to, &container);
        painter.line_segment(
            [
                egui::pos2(segment.start.x, segment.start.y),
                egui::pos2(segment.end.x, segment.end.y),
            ],
            stroke,
        );
    }
}
