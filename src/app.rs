// src/app.rs
//
// Calculatrice posée — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + tempo.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - L'horloge passée partout est `egui` time (f64, secondes) : c'est la
//   seule horloge qui marche en natif ET en wasm32.
// - Tant qu'une estimation est en attente, on programme un repaint à son
//   échéance, sinon la frame différée n'arriverait jamais sur une UI calme.

pub mod etat;
pub mod tempo;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Estimation différée arrivée à échéance ?
        self.tic(maintenant);

        // Clavier physique : chiffres, opérateurs (ASCII admis), % et =
        // arrivent en événements texte.
        let (echap, entree, retour, textes) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });
        for t in &textes {
            for c in t.chars() {
                self.touche_texte(c, maintenant);
            }
        }
        // Échap = C/AC, Entrée = "=", Retour arrière = ⌫.
        if echap {
            self.entree(Touche::Efface, maintenant);
        }
        if entree {
            self.entree(Touche::Egal, maintenant);
        }
        if retour {
            self.entree(Touche::Retour, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant); // méthode publique (dans vue.rs)
        });

        if let Some(echeance) = self.echeance_estimation() {
            let delai = (echeance - maintenant).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(delai));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(etat::CLE_HISTORIQUE, self.historique_texte());
    }
}
