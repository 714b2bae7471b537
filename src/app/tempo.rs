//! src/app/tempo.rs
//!
//! Anti-rebond de l'estimation.
//!
//! L'estimation recalcule à chaque frappe ; pour ne pas relancer le calcul
//! posé pendant une rafale de touches, les demandes sont regroupées :
//! - première demande d'une période calme : exécution immédiate
//! - demandes pendant l'intervalle : une seule exécution différée, au tic
//!   qui suit l'échéance (chaque demande remplace la précédente)
//!
//! L'horloge est injectée (secondes, f64) : `egui::Context::input(|i| i.time)`
//! fonctionne en natif comme en wasm32, là où `std::time::Instant` n'existe
//! pas côté web.

/// Intervalle de regroupement par défaut, en secondes.
pub const INTERVALLE_DEFAUT: f64 = 0.125;

#[derive(Clone, Debug)]
pub struct AntiRebond {
    intervalle: f64,
    echeance: Option<f64>,
    en_attente: bool,
}

impl AntiRebond {
    pub fn new(intervalle: f64) -> Self {
        Self {
            intervalle,
            echeance: None,
            en_attente: false,
        }
    }

    /// Dépose une demande. Vrai si elle doit être exécutée tout de suite
    /// (front montant) ; sinon elle reste en attente jusqu'au tic.
    pub fn demande(&mut self, maintenant: f64) -> bool {
        match self.echeance {
            None => {
                self.echeance = Some(maintenant + self.intervalle);
                true
            }
            Some(_) => {
                self.en_attente = true;
                false
            }
        }
    }

    /// À appeler à chaque frame. Vrai si la demande en attente doit être
    /// exécutée maintenant (l'échéance est passée) ; la période se réarme.
    pub fn tic(&mut self, maintenant: f64) -> bool {
        match self.echeance {
            Some(e) if maintenant >= e => {
                if self.en_attente {
                    self.en_attente = false;
                    self.echeance = Some(maintenant + self.intervalle);
                    true
                } else {
                    self.echeance = None;
                    false
                }
            }
            _ => false,
        }
    }

    /// Abandonne la demande en attente et referme la période.
    pub fn annule(&mut self) {
        self.echeance = None;
        self.en_attente = false;
    }

    /// Échéance courante, si une période est ouverte (pour planifier le
    /// prochain repaint).
    pub fn echeance(&self) -> Option<f64> {
        self.echeance
    }
}

impl Default for AntiRebond {
    fn default() -> Self {
        Self::new(INTERVALLE_DEFAUT)
    }
}

/* ------------------------ Tests (horloge synthétique) ------------------------ */
