// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - L'écran est en LECTURE SEULE : toute saisie passe par les pavés
//   (le vocabulaire fermé des boutons est ce qui rend le noyau sûr)
// - Deux pavés (principal / fonctions), bascule via les boutons func/Back
// - Radios deg/rad : change l'unité ET convertit la valeur affichée
//
// Note :
// - La consigne de défilement du moteur est consommée sur UNE frame
//   (sinon l'offset forcé gèlerait le défilement manuel).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::moteur::{Defilement, Panneau};
use crate::noyau::trig::ModeAngle;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(4.0);
        self.ui_unites(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        match self.panneau {
            Panneau::Principal => self.ui_pave_principal(ui),
            Panneau::Fonctions => self.ui_pave_fonctions(ui),
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let texte = self.moteur.affichage().to_string();

        let mut zone = egui::ScrollArea::horizontal()
            .id_salt("ecran_calc")
            .auto_shrink([false, true]);

        // consigne du moteur : début après "=", fin pendant la saisie
        if let Some(d) = self.defilement.take() {
            let x = match d {
                Defilement::Debut => 0.0,
                Defilement::Fin => 1e9, // borné par egui à la largeur réelle
            };
            zone = zone.scroll_offset(egui::vec2(x, 0.0));
        }

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                zone.show(ui, |ui| {
                    // l'info-bulle reflète le contenu (miroir "title" historique)
                    ui.monospace(&texte).on_hover_text(&texte);
                });
            });
    }

    fn ui_unites(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Angle :");

            // garde : ne convertir QUE sur un vrai changement (pas de
            // reconversion en recliquant le radio déjà coché)
            let deg = ui.radio(self.mode == ModeAngle::Degres, "deg");
            if deg.clicked() && self.mode != ModeAngle::Degres {
                self.change_unite(ModeAngle::Degres);
            }

            let rad = ui.radio(self.mode == ModeAngle::Radians, "rad");
            if rad.clicked() && self.mode != ModeAngle::Radians {
                self.change_unite(ModeAngle::Radians);
            }
        });
    }

    /* ------------------------ Pavés ------------------------ */

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C");
                self.bouton(ui, "⇐");
                self.bouton(ui, "func");
                self.bouton(ui, "/");
                ui.end_row();

                self.bouton(ui, "7");
                self.bouton(ui, "8");
                self.bouton(ui, "9");
                self.bouton(ui, "*");
                ui.end_row();

                self.bouton(ui, "4");
                self.bouton(ui, "5");
                self.bouton(ui, "6");
                self.bouton(ui, "-");
                ui.end_row();

                self.bouton(ui, "1");
                self.bouton(ui, "2");
                self.bouton(ui, "3");
                self.bouton(ui, "+");
                ui.end_row();

                self.bouton(ui, "+/-");
                self.bouton(ui, "0");
                self.bouton(ui, ".");
                self.bouton(ui, "=");
                ui.end_row();
            });
    }

    fn ui_pave_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fonctions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin");
                self.bouton(ui, "cos");
                self.bouton(ui, "tan");
                self.bouton(ui, "Back");
                ui.end_row();

                self.bouton(ui, "asin");
                self.bouton(ui, "acos");
                self.bouton(ui, "atan");
                self.bouton(ui, "gcd");
                ui.end_row();

                self.bouton(ui, "exp");
                self.bouton(ui, "log2");
                self.bouton(ui, "log10");
                self.bouton(ui, "ln");
                ui.end_row();

                self.bouton(ui, "x²");
                self.bouton(ui, "xʸ");
                self.bouton(ui, "√");
                self.bouton(ui, "1/x");
                ui.end_row();

                self.bouton(ui, "π");
                self.bouton(ui, "!");
                self.bouton(ui, "mod");
                self.bouton(ui, "div");
                ui.end_row();

                // de quoi fermer les appels ouverts + virgule de gcd
                self.bouton(ui, "(");
                self.bouton(ui, ")");
                self.bouton(ui, ",");
                self.bouton(ui, "=");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized([56.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuie(label);
        }
    }
}
