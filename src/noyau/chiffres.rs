// src/noyau/chiffres.rs
//
// Suite de chiffres : un décimal signé représenté caractère par caractère.
// C'est la brique de base du calcul posé — toutes les opérations travaillent
// sur ces suites, jamais sur des flottants natifs.
//
// Invariants de la forme canonique (après nettoie) :
// - au plus un POINT, jamais en dernière position
// - au plus un MOINS, en position 0 seulement
// - pas de zéro de tête devant un autre chiffre (sauf le "0" de "0.5")
// - pas de zéro de queue après le point
// - jamais "-0"

use std::cmp::Ordering;

/// Marque décimale interne (l'affichage localisé vit dans format.rs).
pub const POINT: char = '.';

/// Signe moins (U+2212, le même symbole que l'opérateur).
pub const MOINS: char = '−';

/// Un nombre décimal, un caractère par case.
pub type Suite = Vec<char>;

/// Construit une suite depuis un texte. Le tiret ASCII est accepté en entrée
/// et normalisé en MOINS.
pub fn suite(texte: &str) -> Suite {
    texte
        .chars()
        .map(|c| if c == '-' { MOINS } else { c })
        .collect()
}

/// Texte brut d'une suite (sans style locale).
pub fn texte(suite: &[char]) -> String {
    suite.iter().collect()
}

/// Nombre de chiffres après le point (0 si pas de point).
pub fn longueur_fraction(s: &[char]) -> usize {
    match s.iter().position(|&c| c == POINT) {
        Some(p) => s.len() - p - 1,
        None => 0,
    }
}

/* ------------------------ Forme canonique ------------------------ */

/// Nettoie une suite : zéros de tête, zéros de queue après le point, point
/// devenu inutile, signe d'un zéro. Consomme et retourne (pas d'alias caché).
/// Idempotente.
pub fn nettoie(mut s: Suite) -> Suite {
    let negatif = s.first() == Some(&MOINS);
    if negatif {
        s.remove(0);
    }

    // Zéros de tête : on garde toujours un chiffre devant le point.
    let mut point = s.iter().position(|&c| c == POINT).unwrap_or(s.len());
    while point > 1 && s.first() == Some(&'0') {
        s.remove(0);
        point -= 1;
    }

    // Zéros de queue après le point, puis le point lui-même s'il ne reste
    // plus de fraction ("0.0" retombe ainsi sur "0").
    if point < s.len() {
        while s.len() > point {
            match s.last() {
                Some('0') => {
                    s.pop();
                }
                Some(&c) if c == POINT => {
                    s.pop();
                    break;
                }
                _ => break,
            }
        }
    }

    // Le signe ne revient que si la grandeur n'est pas exactement zéro.
    if negatif && !(s.len() == 1 && s[0] == '0') {
        s.insert(0, MOINS);
    }
    s
}

/// Vrai si la forme canonique est exactement "0".
pub fn est_zero(s: &[char]) -> bool {
    let n = nettoie(s.to_vec());
    n.len() == 1 && n[0] == '0'
}

/* ------------------------ Comparaison de grandeurs ------------------------ */

/// Compare deux grandeurs (SANS tenir compte du signe : l'appelant retire
/// les signes avant, ou interprète le résultat).
/// Position du point d'abord (partie entière la plus longue gagne), puis
/// chiffre à chiffre ; le point compte comme plus petit que tout chiffre.
pub fn compare(g: &[char], d: &[char]) -> Ordering {
    let pg = g.iter().position(|&c| c == POINT).unwrap_or(g.len());
    let pd = d.iter().position(|&c| c == POINT).unwrap_or(d.len());
    match pg.cmp(&pd) {
        Ordering::Equal => {}
        autre => return autre,
    }

    for (cg, cd) in g.iter().zip(d.iter()) {
        if cg != cd {
            if *cg == POINT {
                return Ordering::Less;
            }
            if *cd == POINT {
                return Ordering::Greater;
            }
            return cg.cmp(cd);
        }
    }
    g.len().cmp(&d.len())
}

/* ------------------------ Alignement des fractions ------------------------ */

/// Complète la suite avec des zéros de queue jusqu'à `longueur` chiffres de
/// fraction (en insérant le point s'il manquait).
pub fn complete_fraction(s: &mut Suite, longueur: usize) {
    if s.is_empty() {
        s.push('0');
        return;
    }
    let point = match s.iter().position(|&c| c == POINT) {
        Some(p) => p,
        None => {
            s.push(POINT);
            s.len() - 1
        }
    };
    while s.len() - point - 1 < longueur {
        s.push('0');
    }
}

/// Aligne les deux opérandes sur une même longueur de fraction : le plus
/// court reçoit des zéros de queue. Indispensable avant toute somme ou
/// différence position par position.
pub fn aligne_fractions(g: &mut Suite, d: &mut Suite) {
    let fg = longueur_fraction(g);
    let fd = longueur_fraction(d);
    if fg < fd {
        complete_fraction(g, fd);
    } else if fd < fg {
        complete_fraction(d, fg);
    }
}

/* ------------------------ Petits outils chiffres ------------------------ */

/// Valeur numérique d'un caractère chiffre (0 pour tout le reste).
pub(crate) fn valeur(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

/// Caractère d'un chiffre 0..9.
pub(crate) fn chiffre(v: u32) -> char {
    char::from_digit(v % 10, 10).unwrap_or('0')
}

/* ------------------------ Tests ------------------------ */
