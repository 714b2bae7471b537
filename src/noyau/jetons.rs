// src/noyau/jetons.rs
//
// Jetons d'expression + saisie incrémentale.
//
// Une expression est une liste plate qui alterne nombres et opérateurs,
// construite touche par touche par l'UI. On n'a PAS de parseur général :
// les fonctions de saisie garantissent la forme (un opérateur traînant ou
// un moins unaire de tête restent des états d'édition transitoires).

use super::chiffres::{self, Suite, MOINS, POINT};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Reconnaît un symbole d'opérateur (les équivalents ASCII sont admis).
    pub fn depuis(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '−' | '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Message d'opérande droite manquante (mode strict).
    pub fn erreur_droite(self) -> String {
        format!("il manque le nombre à droite de {}", self.symbole())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Jeton {
    Nombre(Suite),
    Op(Operateur),
}

/* ------------------------ Saisie incrémentale ------------------------ */

/// Ajoute un chiffre (ou la marque décimale) au dernier nombre, en
/// respectant les règles d'édition : pas de double point, pas de zéros de
/// tête accumulés, "." seul devient "0.".
pub fn ajoute_chiffre(exp: &mut Vec<Jeton>, c: char) {
    if let Some(Jeton::Nombre(n)) = exp.last_mut() {
        if n.as_slice() == ['0'] {
            if c == '0' {
                return;
            }
            if c != POINT {
                n.clear();
            }
        }
        if c == POINT && n.contains(&POINT) {
            return;
        }
        n.push(c);
        return;
    }

    // Pas de nombre en cours : on en ouvre un.
    if c == POINT {
        exp.push(Jeton::Nombre(vec!['0', POINT]));
    } else {
        exp.push(Jeton::Nombre(vec![c]));
    }
}

/// Ajoute un opérateur.
/// - une expression vide n'accepte que le moins (futur unaire)
/// - un opérateur traînant est remplacé, SAUF le moins après × ou ÷
///   (moins unaire du facteur suivant)
/// - le nombre que l'opérateur referme est nettoyé au passage
pub fn ajoute_operateur(exp: &mut Vec<Jeton>, op: Operateur) {
    while let Some(&Jeton::Op(dernier)) = exp.last() {
        let unaire = op == Operateur::Moins
            && (dernier == Operateur::Fois || dernier == Operateur::Divise);
        if unaire {
            break;
        }
        exp.pop();
    }
    // En tête d'expression, seul le moins (futur unaire) a un sens.
    if exp.is_empty() && op != Operateur::Moins {
        return;
    }

    if let Some(Jeton::Nombre(n)) = exp.last_mut() {
        *n = chiffres::nettoie(std::mem::take(n));
    }
    exp.push(Jeton::Op(op));
}

/// Transforme le dernier nombre en pourcentage : la marque décimale recule
/// de deux positions (12 → 0.12, 250 → 2.5). Sans effet sur un opérateur ou
/// sur zéro.
pub fn pourcentage(exp: &mut Vec<Jeton>) {
    let Some(Jeton::Nombre(n)) = exp.last_mut() else {
        return;
    };
    if chiffres::est_zero(n) {
        return;
    }

    let negatif = n.first() == Some(&MOINS);
    let mut grandeur: Suite = n.iter().copied().filter(|&c| c != MOINS).collect();

    let point = grandeur
        .iter()
        .position(|&c| c == POINT)
        .unwrap_or(grandeur.len());
    grandeur.retain(|&c| c != POINT);

    if point >= 2 {
        let decalage = point - 2;
        if decalage == 0 {
            grandeur.insert(0, POINT);
            grandeur.insert(0, '0');
        } else {
            grandeur.insert(decalage, POINT);
        }
    } else {
        for _ in 0..(2 - point) {
            grandeur.insert(0, '0');
        }
        grandeur.insert(0, POINT);
        grandeur.insert(0, '0');
    }

    if negatif {
        grandeur.insert(0, MOINS);
    }
    *n = grandeur;
}

/// Retour arrière : retire le dernier caractère du dernier jeton. Un
/// opérateur disparaît d'un coup ; un nombre vidé est retiré de la liste.
pub fn efface_dernier(exp: &mut Vec<Jeton>) {
    match exp.pop() {
        None | Some(Jeton::Op(_)) => {}
        Some(Jeton::Nombre(mut n)) => {
            n.pop();
            if !n.is_empty() {
                exp.push(Jeton::Nombre(n));
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */
