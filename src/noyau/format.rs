// src/noyau/format.rs
//
// Adaptation locale de l'affichage : groupement des milliers et marque
// décimale. La DÉCOUVERTE des séparateurs (Intl, OS…) reste à la charge de
// l'hôte ; ici on ne fait que styler dans un sens et déstyler dans l'autre.

use super::chiffres::{Suite, MOINS, POINT};
use super::jetons::Jeton;

/// Séparateurs d'affichage.
#[derive(Clone, Copy, Debug)]
pub struct Separateurs {
    pub groupe: char,
    pub decimale: char,
}

impl Default for Separateurs {
    fn default() -> Self {
        // Convention française : espace insécable fine + virgule.
        Self {
            groupe: '\u{202f}',
            decimale: ',',
        }
    }
}

/// Style une suite interne : groupes de trois chiffres dans la partie
/// entière, marque décimale locale.
pub fn formate_nombre(suite: &[char], seps: Separateurs) -> String {
    let (signe, grandeur) = match suite.first() {
        Some(&MOINS) => ("−", &suite[1..]),
        _ => ("", suite),
    };
    let point = grandeur
        .iter()
        .position(|&c| c == POINT)
        .unwrap_or(grandeur.len());
    let (entier, fraction) = grandeur.split_at(point);

    let mut sortie = String::from(signe);
    for (i, &c) in entier.iter().enumerate() {
        sortie.push(c);
        let restant = entier.len() - i - 1;
        if restant > 0 && restant % 3 == 0 {
            sortie.push(seps.groupe);
        }
    }
    if !fraction.is_empty() {
        // fraction[0] est le point interne
        sortie.push(seps.decimale);
        sortie.extend(&fraction[1..]);
    }
    sortie
}

/// Style une expression complète (jetons concaténés, sans espaces).
pub fn formate_expression(jetons: &[Jeton], seps: Separateurs) -> String {
    let mut sortie = String::new();
    for jeton in jetons {
        match jeton {
            Jeton::Nombre(n) => sortie.push_str(&formate_nombre(n, seps)),
            Jeton::Op(op) => sortie.push(op.symbole()),
        }
    }
    sortie
}

/// Style un résultat : "=" devant le nombre.
pub fn formate_resultat(suite: &[char], seps: Separateurs) -> String {
    format!("={}", formate_nombre(suite, seps))
}

/// Chemin inverse : d'un texte affiché vers une suite interne (séparateurs
/// de groupe retirés, marque décimale et moins normalisés).
pub fn analyse_nombre(texte: &str, seps: Separateurs) -> Suite {
    texte
        .chars()
        .filter(|&c| c != seps.groupe)
        .map(|c| {
            if c == seps.decimale {
                POINT
            } else if c == '-' {
                MOINS
            } else {
                c
            }
        })
        .collect()
}

/* ------------------------ Tests ------------------------ */
