// src/app.rs
//
// Calculatrice Voyager : fenêtre eframe
//
// Raccourcis globaux (hors champ de saisie compris) :
// - Échap      : efface l’entrée (bouton "C")
// - PageUp/Dn  : un terme de série de plus / de moins
// - F5         : recalcule avec l’entrée courante

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (esc, plus, moins, recalcul) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::PageUp),
                i.key_pressed(egui::Key::PageDown),
                i.key_pressed(egui::Key::F5),
            )
        });

        if esc {
            self.clear_entree();
        }
        if plus {
            self.pas_termes(1);
        }
        if moins {
            self.pas_termes(-1);
        }
        if recalcul {
            self.eval_via_noyau();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
