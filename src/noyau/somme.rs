// src/noyau/somme.rs
//
// Addition et soustraction posées.
//
// Les signes sont traités par une répartition explicite des quatre cas
// (tableau de signes), pas par récursion croisée addition↔soustraction :
// la terminaison se lit d'un coup d'œil. Le travail chiffre à chiffre se
// fait toujours sur des grandeurs (sans signe) aux fractions alignées.

use std::cmp::Ordering;

use super::chiffres::{self, chiffre, valeur, Suite, MOINS, POINT};
use super::jetons::Operateur;

/* ------------------------ Tableau de signes ------------------------ */

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Signes {
    Aucun,
    Gauche,
    Droite,
    LesDeux,
}

fn signes(gauche: bool, droite: bool) -> Signes {
    match (gauche, droite) {
        (false, false) => Signes::Aucun,
        (true, false) => Signes::Gauche,
        (false, true) => Signes::Droite,
        (true, true) => Signes::LesDeux,
    }
}

/// Sépare le signe : (négatif ?, grandeur).
pub(crate) fn separe_signe(s: &[char]) -> (bool, Suite) {
    if s.first() == Some(&MOINS) {
        (true, s[1..].to_vec())
    } else {
        (false, s.to_vec())
    }
}

/* ------------------------ Grandeurs ------------------------ */

/// Somme de deux grandeurs : fractions alignées puis addition position par
/// position depuis la droite, retenue propagée, retenue finale réinsérée en
/// tête. Le résultat n'est PAS nettoyé (l'appelant public s'en charge).
pub(crate) fn somme_magnitudes(mut g: Suite, mut d: Suite) -> Suite {
    chiffres::aligne_fractions(&mut g, &mut d);

    let mut resultat: Suite = Vec::with_capacity(g.len().max(d.len()) + 1);
    let mut retenue = 0u32;

    while !g.is_empty() || !d.is_empty() {
        let cg = g.pop();
        let cd = d.pop();
        // Fractions alignées : les deux points tombent au même tour.
        if cg == Some(POINT) || cd == Some(POINT) {
            resultat.insert(0, POINT);
            continue;
        }
        let mut v = cg.map(valeur).unwrap_or(0) + cd.map(valeur).unwrap_or(0) + retenue;
        if v >= 10 {
            retenue = 1;
            v -= 10;
        } else {
            retenue = 0;
        }
        resultat.insert(0, chiffre(v));
    }
    if retenue != 0 {
        resultat.insert(0, '1');
    }
    resultat
}

/// Différence de deux grandeurs : (résultat, résultat négatif ?).
/// Compare d'abord ; si d > g on échange et le résultat est négatif, si
/// égalité on répond "0" tout de suite. L'emprunt remonte dans le grand
/// opérande jusqu'au premier chiffre non nul (l'ordre des grandeurs garantit
/// qu'il existe).
pub(crate) fn difference_magnitudes(mut g: Suite, mut d: Suite) -> (Suite, bool) {
    chiffres::aligne_fractions(&mut g, &mut d);

    let mut negatif = false;
    match chiffres::compare(&g, &d) {
        Ordering::Less => {
            std::mem::swap(&mut g, &mut d);
            negatif = true;
        }
        Ordering::Equal => return (vec!['0'], false),
        Ordering::Greater => {}
    }

    let mut resultat: Suite = Vec::with_capacity(g.len());
    while !g.is_empty() || !d.is_empty() {
        let cg = g.pop();
        let cd = d.pop();
        if cg == Some(POINT) {
            resultat.insert(0, POINT);
            continue;
        }
        let vg = cg.map(valeur).unwrap_or(0) as i32;
        let vd = cd.map(valeur).unwrap_or(0) as i32;
        let mut v = vg - vd;
        if v < 0 {
            v += 10;
            for i in (0..g.len()).rev() {
                if g[i] == POINT {
                    continue;
                }
                if g[i] != '0' {
                    g[i] = chiffre(valeur(g[i]) - 1);
                    break;
                }
                g[i] = '9';
            }
        }
        resultat.insert(0, chiffre(v as u32));
    }
    (resultat, negatif)
}

/* ------------------------ Opérations signées ------------------------ */

fn droite_ou_zero(
    droite: Option<&[char]>,
    estimation: bool,
    op: Operateur,
) -> Result<Suite, String> {
    match droite {
        Some(d) => Ok(d.to_vec()),
        None if estimation => Ok(vec!['0']),
        None => Err(op.erreur_droite()),
    }
}

/// Addition signée. Opérande droite absente : "0" en mode estimation,
/// erreur sinon. Résultat canonique.
pub fn additionne(
    gauche: &[char],
    droite: Option<&[char]>,
    estimation: bool,
) -> Result<Suite, String> {
    let droite = droite_ou_zero(droite, estimation, Operateur::Plus)?;
    let (neg_g, mg) = separe_signe(gauche);
    let (neg_d, md) = separe_signe(&droite);

    let resultat = match signes(neg_g, neg_d) {
        // g + d
        Signes::Aucun => somme_magnitudes(mg, md),
        // (−g) + (−d) = −(g + d)
        Signes::LesDeux => signe(somme_magnitudes(mg, md), true),
        // (−g) + d = d − g
        Signes::Gauche => {
            let (r, neg) = difference_magnitudes(md, mg);
            signe(r, neg)
        }
        // g + (−d) = g − d
        Signes::Droite => {
            let (r, neg) = difference_magnitudes(mg, md);
            signe(r, neg)
        }
    };
    Ok(chiffres::nettoie(resultat))
}

/// Soustraction signée. Même politique d'opérande manquante que l'addition.
pub fn soustrait(
    gauche: &[char],
    droite: Option<&[char]>,
    estimation: bool,
) -> Result<Suite, String> {
    let droite = droite_ou_zero(droite, estimation, Operateur::Moins)?;
    let (neg_g, mg) = separe_signe(gauche);
    let (neg_d, md) = separe_signe(&droite);

    let resultat = match signes(neg_g, neg_d) {
        // g − d
        Signes::Aucun => {
            let (r, neg) = difference_magnitudes(mg, md);
            signe(r, neg)
        }
        // g − (−d) = g + d
        Signes::Droite => somme_magnitudes(mg, md),
        // (−g) − d = −(g + d)
        Signes::Gauche => signe(somme_magnitudes(mg, md), true),
        // (−g) − (−d) = d − g
        Signes::LesDeux => {
            let (r, neg) = difference_magnitudes(md, mg);
            signe(r, neg)
        }
    };
    Ok(chiffres::nettoie(resultat))
}

/// Préfixe le signe moins si demandé ("−0" sera rattrapé par nettoie).
fn signe(mut s: Suite, negatif: bool) -> Suite {
    if negatif {
        s.insert(0, MOINS);
    }
    s
}

/* ------------------------ Tests ------------------------ */
