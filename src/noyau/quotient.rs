// src/noyau/quotient.rs
//
// Division posée — la plus délicate des quatre opérations.
//
// Déroulé :
// 1. chemin rapide diviseur "1", puis refus du diviseur nul
// 2. alignement décimal : fractions alignées puis points retirés, les deux
//    opérandes deviennent des entiers à la même échelle (le quotient ne
//    change pas)
// 3. division longue par fenêtre : comparer / soustraire en comptant
// 4. au-delà des chiffres du dividende, on prolonge par des zéros (partie
//    fractionnaire du quotient) jusqu'à LONGUEUR_FRACTION_MAX chiffres
// 5. reste non nul au bout du budget : arrondi à la demi-supérieure via une
//    vraie addition de 10^-21 (la retenue traverse les 9 de queue)

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::chiffres::{self, chiffre, valeur, Suite, MOINS, POINT};
use super::jetons::Operateur;
use super::somme;

/// Plafond de chiffres après le point dans un quotient.
pub const LONGUEUR_FRACTION_MAX: usize = 21;

/// Message du diviseur nul (le mode estimation ne le rattrape jamais).
pub const DIVISION_PAR_ZERO: &str = "impossible de diviser par zéro";

/// Division signée. Diviseur absent : "0" en mode estimation — ce qui
/// retombe sur l'erreur de division par zéro — et erreur d'opérande sinon.
pub fn divise(
    gauche: &[char],
    droite: Option<&[char]>,
    estimation: bool,
) -> Result<Suite, String> {
    let droite: Suite = match droite {
        Some(d) => d.to_vec(),
        None if estimation => vec!['0'],
        None => return Err(Operateur::Divise.erreur_droite()),
    };

    let g = chiffres::nettoie(gauche.to_vec());
    let d = chiffres::nettoie(droite);

    let (neg_g, mut g) = somme::separe_signe(&g);
    let (neg_d, mut d) = somme::separe_signe(&d);
    let negatif = neg_g != neg_d;

    // Diviseur "1" : le dividende passe tel quel, au signe près.
    if d.as_slice() == ['1'] {
        let mut r = g;
        if negatif {
            r.insert(0, MOINS);
        }
        return Ok(chiffres::nettoie(r));
    }
    if chiffres::est_zero(&d) {
        return Err(DIVISION_PAR_ZERO.to_string());
    }

    // Alignement décimal : même longueur de fraction puis points retirés.
    // g/d sont maintenant des entiers à la même échelle.
    chiffres::aligne_fractions(&mut g, &mut d);
    g.retain(|&c| c != POINT);
    d.retain(|&c| c != POINT);
    let g = chiffres::nettoie(g);
    let d = chiffres::nettoie(d);

    // Fenêtre initiale : autant de chiffres du dividende que le diviseur en
    // compte (moins si le dividende est plus court).
    let mut restant: VecDeque<char> = g.into_iter().collect();
    let mut fenetre: Suite = Vec::with_capacity(d.len() + 1);
    for _ in 0..d.len() {
        if let Some(c) = restant.pop_front() {
            fenetre.push(c);
        }
    }

    let mut resultat: Suite = Vec::new();
    let mut en_fraction = false;
    let mut longueur_fraction = 0usize;

    while !fenetre.is_empty() && longueur_fraction <= LONGUEUR_FRACTION_MAX {
        match chiffres::compare(&fenetre, &d) {
            Ordering::Less => resultat.push('0'),
            Ordering::Equal => {
                resultat.push('1');
                fenetre.clear();
            }
            Ordering::Greater => {
                // Le prochain chiffre du quotient = nombre de soustractions
                // du diviseur possibles dans la fenêtre (au plus 9).
                let mut n = 0u32;
                while chiffres::compare(&fenetre, &d) != Ordering::Less {
                    let (reste, _) = somme::difference_magnitudes(fenetre, d.clone());
                    fenetre = chiffres::nettoie(reste);
                    n += 1;
                }
                resultat.push(chiffre(n));
            }
        }

        if en_fraction {
            longueur_fraction += 1;
        }

        if fenetre.as_slice() == ['0'] {
            fenetre.clear();
        }

        if let Some(c) = restant.pop_front() {
            fenetre.push(c);
        } else if !fenetre.is_empty() {
            // Dividende épuisé mais reste non nul : on entre dans la partie
            // fractionnaire du quotient.
            if !en_fraction {
                resultat.push(POINT);
                en_fraction = true;
            }
            fenetre.push('0');
        }
    }

    // Budget dépassé : le chiffre excédentaire décide de l'arrondi.
    if longueur_fraction > LONGUEUR_FRACTION_MAX {
        let dernier = resultat.pop().map(valeur).unwrap_or(0);
        if dernier >= 5 {
            let mut increment: Suite = vec!['0', POINT];
            increment.extend(std::iter::repeat('0').take(LONGUEUR_FRACTION_MAX - 1));
            increment.push('1');
            resultat = somme::additionne(&resultat, Some(&increment), estimation)?;
        }
    }

    if negatif {
        resultat.insert(0, MOINS);
    }
    Ok(chiffres::nettoie(resultat))
}

/* ------------------------ Tests ------------------------ */
