// src/noyau/produit.rs
//
// Multiplication posée.
//
// Schéma classique : on retire les points en notant la longueur de fraction
// de chacun (celle du produit est leur somme), on forme un produit partiel
// décalé par chiffre du multiplicateur (retenue propagée), on accumule les
// partiels par additions successives, puis on réinsère le point à l'offset
// combiné depuis la droite.

use super::chiffres::{self, chiffre, valeur, Suite, MOINS, POINT};
use super::jetons::Operateur;
use super::somme;

/// Multiplication signée. Opérande droite absente : "0" en mode estimation,
/// erreur sinon. Résultat canonique.
pub fn multiplie(
    gauche: &[char],
    droite: Option<&[char]>,
    estimation: bool,
) -> Result<Suite, String> {
    let droite: Suite = match droite {
        Some(d) => d.to_vec(),
        None if estimation => vec!['0'],
        None => return Err(Operateur::Fois.erreur_droite()),
    };

    let g = chiffres::nettoie(gauche.to_vec());
    let d = chiffres::nettoie(droite);

    // Chemins rapides sur les formes canoniques "0" et "1" (un "−1" passe
    // par le chemin long, son signe fait partie du calcul).
    if g.as_slice() == ['0'] || d.as_slice() == ['0'] {
        return Ok(vec!['0']);
    }
    if g.as_slice() == ['1'] {
        return Ok(d);
    }
    if d.as_slice() == ['1'] {
        return Ok(g);
    }

    let fraction = chiffres::longueur_fraction(&g) + chiffres::longueur_fraction(&d);

    let (neg_g, mut g) = somme::separe_signe(&g);
    let (neg_d, mut d) = somme::separe_signe(&d);
    let negatif = neg_g != neg_d;

    g.retain(|&c| c != POINT);
    d.retain(|&c| c != POINT);

    // Produits partiels, chiffre le moins significatif du multiplicateur
    // d'abord, chacun décalé d'un zéro de plus que le précédent.
    let mut partiels: Vec<Suite> = Vec::new();
    let mut decalage = 0usize;
    while let Some(cd) = d.pop() {
        let vd = valeur(cd);
        let mut partiel: Suite = Vec::with_capacity(g.len() + 1 + decalage);
        let mut retenue = 0u32;
        for i in (0..g.len()).rev() {
            // 9×9 + retenue(≤8) = 89 : la retenue tient sur un chiffre
            let p = valeur(g[i]) * vd + retenue;
            retenue = p / 10;
            partiel.insert(0, chiffre(p));
        }
        if retenue != 0 {
            partiel.insert(0, chiffre(retenue));
        }
        partiel.extend(std::iter::repeat('0').take(decalage));
        partiels.push(partiel);
        decalage += 1;
    }

    // Accumulation par additions successives.
    let mut total = partiels.remove(0);
    for partiel in partiels {
        total = somme::somme_magnitudes(total, partiel);
    }

    // Réinsertion du point à `fraction` chiffres de la droite, avec des
    // zéros de tête si le produit brut est trop court.
    if fraction > 0 {
        if total.len() <= fraction {
            let manque = fraction - total.len() + 1;
            for _ in 0..manque {
                total.insert(0, '0');
            }
        }
        total.insert(total.len() - fraction, POINT);
    }

    if negatif {
        total.insert(0, MOINS);
    }
    Ok(chiffres::nettoie(total))
}

/* ------------------------ Tests ------------------------ */
