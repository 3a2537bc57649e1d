//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastendrücke und mappt sie auf `AppIntent`s.

use crate::app::{AdjustDirection, AppIntent};

/// Verarbeitet Tastendrücke und gibt AppIntents zurück.
///
/// Pfeil hoch/runter passt t₁ an, Pfeil links/rechts die Polaren-Stufe,
/// `C` leert die Kontrollpunkte, Escape beendet die Anwendung.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, up, down, left, right, key_c, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowDown),
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Pfeiltasten nur ohne Modifier (Cmd/Ctrl-Kombinationen nicht verschlucken)
    if !modifiers.command && !modifiers.shift && !modifiers.alt {
        if up {
            events.push(AppIntent::BlendAdjustRequested {
                direction: AdjustDirection::Increase,
            });
        }
        if down {
            events.push(AppIntent::BlendAdjustRequested {
                direction: AdjustDirection::Decrease,
            });
        }
        if right {
            events.push(AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Increase,
            });
        }
        if left {
            events.push(AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Decrease,
            });
        }
    }

    if key_c && !modifiers.command {
        events.push(AppIntent::ClearPointsRequested);
    }

    if key_escape {
        events.push(AppIntent::ExitRequested);
    }

    events
}
