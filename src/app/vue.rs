// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand le champ angle est focus)
// - Démarche : un terme par ligne, somme partielle incluse
// - Panneau mode : 1C / 2C / U + taille de mot + base + mémoire programme/registres

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use crate::noyau::mode::{MEMOIRE_PROGRAMME, TAILLE_MOT_MAX};
use crate::noyau::{calcule_sinus, Base, Mode, CHIFFRES_MAX, TERMES_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Voyager — sin(x) par série");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_mode(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Angle (radians) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1.8, -0.5, .25")
                .id_salt("entree_angle")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Termes :");
            let mut t = self.termes;
            let resp = ui.add(egui::DragValue::new(&mut t).speed(1).range(1..=TERMES_MAX));
            if resp.changed() {
                self.set_termes(t);
            }

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Somme (%f) :");
        Self::champ_monospace(ui, "valeur_out", &self.valeur, 1);

        ui.add_space(6.0);

        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 1);

        ui.add_space(6.0);

        ui.label("Lecture tronquée :");
        Self::champ_monospace(ui, "lecture_out", &self.lecture, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                let termes = self.demarche.termes.join("\n");
                ui.add_space(4.0);
                ui.label("Termes :");
                Self::champ_monospace(ui, "demarche_termes", &termes, self.demarche.termes.len());

                ui.add_space(4.0);
                ui.label("Écart à sin(x) :");
                Self::champ_monospace(ui, "demarche_ecart", &self.demarche.ecart, 1);

                ui.add_space(4.0);
                ui.label("Note :");
                Self::champ_monospace(ui, "demarche_note", &self.demarche.note, 1);
            });
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Mode")
            .default_open(false)
            .show(ui, |ui| {
                let mut mode = self.config.mode();
                ui.horizontal(|ui| {
                    for m in Mode::TOUS {
                        ui.radio_value(&mut mode, m, m.sigle());
                    }

                    ui.separator();

                    ui.label("Taille de mot :");
                    ui.add(
                        egui::DragValue::new(&mut self.taille_mot_saisie)
                            .speed(1)
                            .range(0..=u8::MAX),
                    )
                    .on_hover_text(format!("maximum {TAILLE_MOT_MAX}"));

                    if ui.button("Appliquer").clicked() {
                        self.applique_mode(mode);
                    }
                });

                let mut base = self.config.base();
                ui.horizontal(|ui| {
                    ui.label("Base :");
                    for b in Base::TOUTES {
                        ui.radio_value(&mut base, b, format!("{} ({})", b.nom(), b.numerique()));
                    }
                });
                if base != self.config.base() {
                    self.config.set_base(base);
                }

                ui.horizontal(|ui| {
                    ui.label("Programme :");
                    let mut l = self.longueur_programme;
                    let resp = ui.add(
                        egui::DragValue::new(&mut l)
                            .speed(1)
                            .range(0..=MEMOIRE_PROGRAMME)
                            .suffix(" octets"),
                    );
                    if resp.changed() {
                        self.set_longueur_programme(l);
                    }
                });

                ui.add_space(4.0);
                ui.monospace(self.config.to_string());
                ui.monospace(self.memoire_lisible());
                if !self.message_mode.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.message_mode);
                }
            });
    }

    fn applique_mode(&mut self, mode: Mode) {
        match self.config.set_mode(mode, self.taille_mot_saisie) {
            Ok(()) => self.message_mode.clear(),
            Err(e) => {
                self.message_mode = e.to_string();
                // état conservé : on réaffiche la taille en vigueur
                self.taille_mot_saisie = self.config.taille_mot();
            }
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows.max(1) as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    /// Calcule via le noyau, puis dépose somme/exact/lecture/démarche dans l’état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        match calcule_sinus(&self.entree, self.termes, self.digits) {
            Ok(r) => {
                let d_ui = Demarche {
                    termes: r.demarche.termes,
                    ecart: format!("{:e}", r.demarche.ecart),
                    note: r.demarche.note,
                };
                self.set_resultats(r.ligne, r.exact, r.lecture, d_ui);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
