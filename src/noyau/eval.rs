//! Noyau — évaluation (surface publique)
//!
//! jetons -> réduction (× ÷ puis + −) -> suite canonique
//!
//! Le moteur ne panique jamais : chaque évaluation rend une suite valide ou
//! un message d'erreur préfixé par MARQUE_ERREUR, que l'appelant peut
//! reconnaître d'un simple starts_with.

use super::chiffres::Suite;
use super::jetons::Jeton;
use super::reduction;

/// Préfixe constant de tout message d'erreur du moteur.
pub const MARQUE_ERREUR: &str = "erreur : ";

/// Évalue une expression plate.
/// - `estimation` : mode estimation (recalcul à chaque frappe) — un
///   opérateur traînant est toléré, l'opérande droite absente vaut zéro
/// - mode strict (appui sur "=") : une opérande absente est une erreur
pub fn evalue(jetons: &[Jeton], estimation: bool) -> Result<Suite, String> {
    reduction::reduit(jetons, estimation).map_err(|msg| format!("{MARQUE_ERREUR}{msg}"))
}

/// Vrai si un texte de résultat est un message d'erreur du moteur.
pub fn est_erreur(texte: &str) -> bool {
    texte.starts_with(MARQUE_ERREUR)
}
