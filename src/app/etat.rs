//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'expression en cours (jetons), le résultat affiché et
//! l'historique, et traduire chaque touche en édition + (ré)estimation.
//!
//! Contrats :
//! - Le calcul passe exclusivement par le noyau (aucune arithmétique ici).
//! - L'estimation (recalcul live) est regroupée par l'anti-rebond ; l'appui
//!   sur "=" évalue en mode strict, pousse dans l'historique et vide
//!   l'expression.
//! - "C" efface la saisie ; le "C" d'un état déjà vide devient "AC" et
//!   efface aussi l'historique.

use crate::noyau::format::{self, Separateurs};
use crate::noyau::{est_erreur, evalue};
use crate::noyau::jetons::{self, Jeton, Operateur};

use super::tempo::AntiRebond;

/// Clé de persistance de l'historique (eframe::Storage).
pub const CLE_HISTORIQUE: &str = "historique_pose";

/// Garde-fou : l'historique ne grandit pas sans borne.
const HISTORIQUE_MAX: usize = 100;

/// Une ligne d'historique : expression affichée + résultat affiché ("=…").
#[derive(Clone, Debug, PartialEq)]
pub struct Ligne {
    pub expression: String,
    pub resultat: String,
}

/// Touches logiques de la calculatrice (la vue et les raccourcis clavier
/// passent tous par ici).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Pourcent,
    Egal,
    Efface,
    Retour,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie ---
    pub expression: Vec<Jeton>,

    // --- sortie ---
    pub resultat: String, // nombre formaté, ou message d'erreur marqué
    pub estimation: bool, // le résultat affiché est une estimation live
    pub erreur: bool,

    // --- historique ---
    pub historique: Vec<Ligne>,

    // --- paramètres ---
    pub separateurs: Separateurs,

    // --- interne ---
    anti_rebond: AntiRebond,
    efface_tout: bool, // saisie vierge : le prochain "C" vaut "AC"
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: Vec::new(),
            resultat: String::new(),
            estimation: false,
            erreur: false,
            historique: Vec::new(),
            separateurs: Separateurs::default(),
            anti_rebond: AntiRebond::default(),
            efface_tout: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Dispatch des touches ------------------------ */

    /// Traite une touche. `maintenant` : horloge en secondes (egui time).
    pub fn entree(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Chiffre(c) => {
                jetons::ajoute_chiffre(&mut self.expression, c);
                self.efface_tout = false;
                self.demande_estimation(maintenant);
            }
            Touche::Operateur(op) => {
                jetons::ajoute_operateur(&mut self.expression, op);
                self.efface_tout = false;
            }
            Touche::Pourcent => {
                // Saisie vide : on repart du dernier résultat de l'historique.
                if self.expression.is_empty() {
                    let Some(ligne) = self.historique.last() else {
                        return;
                    };
                    let n = format::analyse_nombre(
                        ligne.resultat.trim_start_matches('='),
                        self.separateurs,
                    );
                    self.expression.push(Jeton::Nombre(n));
                }
                jetons::pourcentage(&mut self.expression);
                self.efface_tout = false;
                self.demande_estimation(maintenant);
            }
            Touche::Egal => self.evalue_stricte(),
            Touche::Efface => self.efface(),
            Touche::Retour => {
                jetons::efface_dernier(&mut self.expression);
                if self.expression.is_empty() {
                    self.resultat.clear();
                    self.estimation = false;
                    self.erreur = false;
                    self.anti_rebond.annule();
                } else {
                    self.demande_estimation(maintenant);
                }
            }
        }
    }

    /// Frappe clavier (caractère tapé) vers touche logique. Les symboles
    /// ASCII (- * /) passent par les équivalences d'`Operateur::depuis`.
    pub fn touche_texte(&mut self, c: char, maintenant: f64) {
        if c.is_ascii_digit() {
            self.entree(Touche::Chiffre(c), maintenant);
        } else if c == '.' || c == ',' {
            self.entree(Touche::Chiffre('.'), maintenant);
        } else if c == '%' {
            self.entree(Touche::Pourcent, maintenant);
        } else if c == '=' {
            self.entree(Touche::Egal, maintenant);
        } else if let Some(op) = Operateur::depuis(c) {
            self.entree(Touche::Operateur(op), maintenant);
        }
    }

    /// Libellé de la touche d'effacement ("C" ou "AC").
    pub fn libelle_efface(&self) -> &'static str {
        if self.efface_tout {
            "AC"
        } else {
            "C"
        }
    }

    /* ------------------------ Estimation (live) ------------------------ */

    fn demande_estimation(&mut self, maintenant: f64) {
        if self.anti_rebond.demande(maintenant) {
            self.estime();
        }
    }

    /// À appeler à chaque frame : exécute l'estimation différée si son
    /// échéance est passée.
    pub fn tic(&mut self, maintenant: f64) {
        if self.anti_rebond.tic(maintenant) {
            self.estime();
        }
    }

    /// Échéance de l'estimation en attente (planification du repaint).
    pub fn echeance_estimation(&self) -> Option<f64> {
        self.anti_rebond.echeance()
    }

    fn estime(&mut self) {
        if self.expression.is_empty() {
            self.resultat.clear();
            self.estimation = false;
            self.erreur = false;
            return;
        }
        self.resultat = match evalue(&self.expression, true) {
            Ok(s) => format::formate_nombre(&s, self.separateurs),
            Err(msg) => msg,
        };
        self.erreur = est_erreur(&self.resultat);
        self.estimation = true;
    }

    /* ------------------------ "=" et "C"/"AC" ------------------------ */

    fn evalue_stricte(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        self.anti_rebond.annule();
        self.estimation = false;

        match evalue(&self.expression, false) {
            Ok(s) => {
                let ligne = Ligne {
                    expression: format::formate_expression(&self.expression, self.separateurs),
                    resultat: format::formate_resultat(&s, self.separateurs),
                };
                self.resultat = ligne.resultat.clone();
                self.historique.push(ligne);
                if self.historique.len() > HISTORIQUE_MAX {
                    let excedent = self.historique.len() - HISTORIQUE_MAX;
                    self.historique.drain(..excedent);
                }
                self.expression.clear();
                self.erreur = false;
                self.efface_tout = true;
            }
            Err(msg) => {
                // L'expression reste affichée : l'utilisateur corrige.
                self.resultat = msg;
                self.erreur = est_erreur(&self.resultat);
            }
        }
    }

    fn efface(&mut self) {
        if self.efface_tout {
            self.historique.clear();
        }
        self.expression.clear();
        self.resultat.clear();
        self.estimation = false;
        self.erreur = false;
        self.efface_tout = true;
        self.anti_rebond.annule();
    }

    /* ------------------------ Persistance (eframe::Storage) ------------------------ */

    /// Recharge l'historique depuis sa forme texte (une ligne par entrée,
    /// expression et résultat séparés par une tabulation).
    pub fn charge_historique(&mut self, texte: &str) {
        self.historique = texte
            .lines()
            .filter_map(|l| {
                let (expression, resultat) = l.split_once('\t')?;
                Some(Ligne {
                    expression: expression.to_string(),
                    resultat: resultat.to_string(),
                })
            })
            .collect();
        if self.historique.len() > HISTORIQUE_MAX {
            let excedent = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..excedent);
        }
    }

    /// Forme texte de l'historique, symétrique de `charge_historique`.
    pub fn historique_texte(&self) -> String {
        self.historique
            .iter()
            .map(|l| format!("{}\t{}", l.expression, l.resultat))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/* ------------------------ Tests ------------------------ */
