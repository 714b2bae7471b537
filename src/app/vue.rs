// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Rouleau d'historique en haut (collé en bas, comme un ticket de caisse)
// - Écran : expression en cours + résultat (estimation en demi-teinte,
//   erreur en couleur d'erreur)
// - Pavé 4 colonnes ; la touche décimale porte le séparateur d'affichage
//
// Les raccourcis clavier globaux (Échap/Entrée/Retour) vivent dans app.rs.

use eframe::egui;

use crate::noyau::format;
use crate::noyau::jetons::Operateur;

use super::etat::{AppCalc, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_historique(ui);

        ui.separator();

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("historique_pose")
            .max_height(150.0)
            .auto_shrink([false, true])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for ligne in &self.historique {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&ligne.expression).monospace().weak());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(&ligne.resultat).monospace());
                        });
                    });
                }
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let expression = format::formate_expression(&self.expression, self.separateurs);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(expression).monospace().size(22.0));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if self.erreur {
                ui.colored_label(ui.visuals().error_fg_color, &self.resultat);
            } else {
                let mut texte = egui::RichText::new(&self.resultat).monospace().size(18.0);
                if self.estimation {
                    // estimation live : en demi-teinte, pas encore un résultat
                    texte = texte.weak();
                }
                ui.label(texte);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let decimale = self.separateurs.decimale.to_string();

        egui::Grid::new("pave_pose")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let efface = self.libelle_efface();
                self.bouton(ui, efface, Touche::Efface, maintenant);
                self.bouton(ui, "⌫", Touche::Retour, maintenant);
                self.bouton(ui, "%", Touche::Pourcent, maintenant);
                self.bouton(ui, "÷", Touche::Operateur(Operateur::Divise), maintenant);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'), maintenant);
                self.bouton(ui, "8", Touche::Chiffre('8'), maintenant);
                self.bouton(ui, "9", Touche::Chiffre('9'), maintenant);
                self.bouton(ui, "×", Touche::Operateur(Operateur::Fois), maintenant);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'), maintenant);
                self.bouton(ui, "5", Touche::Chiffre('5'), maintenant);
                self.bouton(ui, "6", Touche::Chiffre('6'), maintenant);
                self.bouton(ui, "−", Touche::Operateur(Operateur::Moins), maintenant);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'), maintenant);
                self.bouton(ui, "2", Touche::Chiffre('2'), maintenant);
                self.bouton(ui, "3", Touche::Chiffre('3'), maintenant);
                self.bouton(ui, "+", Touche::Operateur(Operateur::Plus), maintenant);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'), maintenant);
                self.bouton(ui, &decimale, Touche::Chiffre('.'), maintenant);
                ui.label("");
                self.bouton(ui, "=", Touche::Egal, maintenant);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, maintenant: f64) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree(touche, maintenant);
        }
    }
}
