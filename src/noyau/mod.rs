//! Noyau — calcul posé sur suites de chiffres
//!
//! Organisation interne :
//! - chiffres.rs  : alphabet, canonisation, comparaison, alignement
//! - somme.rs     : addition / soustraction signées
//! - produit.rs   : multiplication posée
//! - quotient.rs  : division longue, fraction plafonnée à 21 chiffres
//! - jetons.rs    : jetons + édition incrémentale (chiffre, opérateur, %)
//! - reduction.rs : réduction plate en deux passes (× ÷ puis + −)
//! - format.rs    : séparateurs d'affichage (groupes, virgule)
//! - eval.rs      : surface publique + marque d'erreur

pub mod chiffres;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod produit;
pub mod quotient;
pub mod reduction;
pub mod somme;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{est_erreur, evalue, MARQUE_ERREUR};
