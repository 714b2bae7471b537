//! Tests de propriétés : lois algébriques vérifiées sur un petit corpus
//! énuméré (pas de hasard ici, le hasard vit dans tests_fuzz_safe).
//!
//! - canonisation idempotente
//! - + et × commutatifs
//! - la soustraction défait l'addition
//! - éléments neutres et absorbant
//! - règles de signe
//! - le quotient multiplié par le diviseur redonne le dividende (cas exacts)

use super::chiffres::{self, suite, texte, MOINS};
use super::{produit, quotient, somme};

/// Corpus signé : chaque grandeur sous ses deux signes.
fn corpus() -> Vec<String> {
    let grandeurs = [
        "0", "1", "2", "7", "10", "25", "100", "999", "0.5", "0.125", "3.14", "123.456",
        "1000.001",
    ];
    let mut tous = Vec::new();
    for g in grandeurs {
        tous.push(g.to_string());
        if g != "0" {
            tous.push(format!("−{g}"));
        }
    }
    tous
}

fn add(g: &str, d: &str) -> String {
    texte(&somme::additionne(&suite(g), Some(&suite(d)), false).unwrap())
}
fn sub(g: &str, d: &str) -> String {
    texte(&somme::soustrait(&suite(g), Some(&suite(d)), false).unwrap())
}
fn mul(g: &str, d: &str) -> String {
    texte(&produit::multiplie(&suite(g), Some(&suite(d)), false).unwrap())
}
fn div(g: &str, d: &str) -> String {
    texte(&quotient::divise(&suite(g), Some(&suite(d)), false).unwrap())
}

/// Négation textuelle d'une forme canonique.
fn neg(s: &str) -> String {
    if s == "0" {
        s.to_string()
    } else if let Some(reste) = s.strip_prefix(MOINS) {
        reste.to_string()
    } else {
        format!("{MOINS}{s}")
    }
}

#[test]
fn canonisation_idempotente() {
    for brut in [
        "007", "0.500", "10.", "−0", "−0.000", "0.0", "000", ".5", "−007.120", "42",
    ] {
        let une = chiffres::nettoie(suite(brut));
        let deux = chiffres::nettoie(une.clone());
        assert_eq!(une, deux, "nettoie instable sur {brut:?}");
    }
}

#[test]
fn addition_commutative() {
    for a in corpus() {
        for b in corpus() {
            assert_eq!(add(&a, &b), add(&b, &a), "a={a} b={b}");
        }
    }
}

#[test]
fn multiplication_commutative() {
    for a in corpus() {
        for b in corpus() {
            assert_eq!(mul(&a, &b), mul(&b, &a), "a={a} b={b}");
        }
    }
}

#[test]
fn soustraction_defait_addition() {
    for a in corpus() {
        for b in corpus() {
            let aller = add(&a, &b);
            let retour = sub(&aller, &b);
            let attendu = texte(&chiffres::nettoie(suite(&a)));
            assert_eq!(retour, attendu, "a={a} b={b} (somme={aller})");
        }
    }
}

#[test]
fn neutres_et_absorbant() {
    for a in corpus() {
        let canon = texte(&chiffres::nettoie(suite(&a)));
        assert_eq!(add(&a, "0"), canon, "a + 0, a={a}");
        assert_eq!(sub(&a, "0"), canon, "a − 0, a={a}");
        assert_eq!(mul(&a, "1"), canon, "a × 1, a={a}");
        assert_eq!(mul(&a, "0"), "0", "a × 0, a={a}");
        assert_eq!(div(&a, "1"), canon, "a ÷ 1, a={a}");
    }
}

#[test]
fn regles_de_signe_produit() {
    for a in corpus() {
        for b in corpus() {
            let direct = mul(&a, &b);
            assert_eq!(mul(&neg(&a), &b), neg(&direct), "(−a)×b, a={a} b={b}");
            assert_eq!(mul(&a, &neg(&b)), neg(&direct), "a×(−b), a={a} b={b}");
            assert_eq!(mul(&neg(&a), &neg(&b)), direct, "(−a)×(−b), a={a} b={b}");
        }
    }
}

#[test]
fn soustraction_antisymetrique() {
    for a in corpus() {
        for b in corpus() {
            assert_eq!(sub(&a, &b), neg(&sub(&b, &a)), "a={a} b={b}");
        }
    }
}

#[test]
fn quotient_fois_diviseur_exact() {
    // Paires dont le quotient est exact : la multiplication doit refermer
    // la boucle au chiffre près.
    for (a, b) in [
        ("100", "4"),
        ("2.5", "0.5"),
        ("0.125", "5"),
        ("−81", "9"),
        ("7", "−8"),
        ("0", "3"),
    ] {
        let q = div(a, b);
        let retour = mul(&q, b);
        let attendu = texte(&chiffres::nettoie(suite(a)));
        assert_eq!(retour, attendu, "a={a} b={b} q={q}");
    }
}

#[test]
fn division_par_zero_toujours_refusee() {
    for a in corpus() {
        for z in ["0", "0.000", "−0"] {
            for estimation in [false, true] {
                let e = quotient::divise(&suite(&a), Some(&suite(z)), estimation).unwrap_err();
                assert_eq!(e, quotient::DIVISION_PAR_ZERO, "a={a} z={z}");
            }
        }
    }
}
