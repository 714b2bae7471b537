// src/noyau/reduction.rs
//
// Réduction d'une expression plate : × et ÷ d'abord, + et − ensuite,
// chaque passe de gauche à droite. Pas d'arbre, pas de parenthèses — la
// fenêtre de trois jetons (gauche, opérateur, droite) est remplacée sur
// place par son résultat et le balayage reprend à cet endroit.
//
// La première erreur rencontrée interrompt toute la réduction.

use super::chiffres::{self, Suite, MOINS};
use super::jetons::{Jeton, Operateur};
use super::{produit, quotient, somme};

pub const ENTREE_VIDE: &str = "entrée vide";
pub const EXPRESSION_MAL_FORMEE: &str = "expression mal formée";

/// Réduit l'expression en une seule suite canonique (ou presque : un nombre
/// seul repart tel quel, comme à l'édition).
/// - `estimation` : tolère un opérateur traînant (opérande droite = 0)
pub fn reduit(jetons: &[Jeton], estimation: bool) -> Result<Suite, String> {
    if jetons.is_empty() {
        return Err(ENTREE_VIDE.to_string());
    }
    let mut exp: Vec<Jeton> = jetons.to_vec();

    // Moins unaire de tête : absorbé par le nombre qui suit. Un moins seul,
    // ou devant zéro, fait retomber toute l'expression sur "0".
    if exp.first() == Some(&Jeton::Op(Operateur::Moins)) {
        match exp.get(1) {
            Some(Jeton::Nombre(n)) if !chiffres::est_zero(n) => {
                exp.remove(0);
                if let Some(Jeton::Nombre(n)) = exp.first_mut() {
                    n.insert(0, MOINS);
                }
            }
            _ => return Ok(vec!['0']),
        }
    }

    passe(&mut exp, estimation, true)?;
    passe(&mut exp, estimation, false)?;

    match exp.into_iter().next() {
        Some(Jeton::Nombre(n)) => Ok(n),
        _ => Err(EXPRESSION_MAL_FORMEE.to_string()),
    }
}

/// Une passe de réduction : `multiplicative` sélectionne ×/÷, sinon +/−.
fn passe(exp: &mut Vec<Jeton>, estimation: bool, multiplicative: bool) -> Result<(), String> {
    let mut i = 0;
    while i < exp.len() {
        let op = match &exp[i] {
            Jeton::Op(o) => {
                let selectionne = if multiplicative {
                    *o == Operateur::Fois || *o == Operateur::Divise
                } else {
                    *o == Operateur::Plus || *o == Operateur::Moins
                };
                if !selectionne {
                    i += 1;
                    continue;
                }
                *o
            }
            Jeton::Nombre(_) => {
                i += 1;
                continue;
            }
        };

        // Moins unaire juste après × ou ÷ : on le replie dans l'opérande.
        if multiplicative && exp.get(i + 1) == Some(&Jeton::Op(Operateur::Moins)) {
            if let Some(Jeton::Nombre(n)) = exp.get(i + 2) {
                let mut n = n.clone();
                n.insert(0, MOINS);
                exp[i + 1] = Jeton::Nombre(n);
                exp.remove(i + 2);
            } else {
                // "5 × −" en fin d'expression : le moins pendouille, la
                // droite reste absente
                exp.remove(i + 1);
            }
        }

        let gauche = match i.checked_sub(1).and_then(|j| exp.get(j)) {
            Some(Jeton::Nombre(n)) => n.clone(),
            _ => return Err(EXPRESSION_MAL_FORMEE.to_string()),
        };
        let droite = match exp.get(i + 1) {
            Some(Jeton::Nombre(n)) => Some(n.clone()),
            _ => None,
        };

        let resultat = match op {
            Operateur::Plus => somme::additionne(&gauche, droite.as_deref(), estimation)?,
            Operateur::Moins => somme::soustrait(&gauche, droite.as_deref(), estimation)?,
            Operateur::Fois => produit::multiplie(&gauche, droite.as_deref(), estimation)?,
            Operateur::Divise => quotient::divise(&gauche, droite.as_deref(), estimation)?,
        };

        // La fenêtre (gauche, op, droite) devient le résultat ; le balayage
        // reprend sur le jeton qui suit, désormais à l'indice i.
        let fin = (i + 2).min(exp.len());
        exp.splice(i - 1..fin, [Jeton::Nombre(resultat)]);
    }
    Ok(())
}

/* ------------------------ Tests ------------------------ */
