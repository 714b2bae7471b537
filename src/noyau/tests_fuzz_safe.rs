//! Tests fuzz safe : le calcul posé contrôlé par un oracle exact.
//!
//! But : marteler les quatre opérations et la réduction sans brûler la
//! machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - oracle : rationnels exacts (num-rational) — l'addition, la
//!   soustraction et la multiplication posées doivent coller exactement,
//!   la division au plafond de fraction près (écart ≤ 10^-21)
//! - on accepte certaines erreurs attendues (division par zéro, opérande
//!   manquante, expression mal formée)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::chiffres::{self, suite, texte, Suite, MOINS, POINT};
use super::jetons::{Jeton, Operateur};
use super::{produit, quotient, reduction, somme};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle rationnel ------------------------ */

fn dix_puissance(n: usize) -> BigInt {
    let mut p = BigInt::one();
    for _ in 0..n {
        p *= BigInt::from(10);
    }
    p
}

/// Suite canonique (ou brute) vers rationnel exact.
fn vers_rationnel(s: &[char]) -> BigRational {
    let (negatif, grandeur) = match s.first() {
        Some(&MOINS) => (true, &s[1..]),
        _ => (false, s),
    };
    let mut numerateur = BigInt::zero();
    let mut fraction = 0usize;
    let mut apres_point = false;
    for &c in grandeur {
        if c == POINT {
            apres_point = true;
            continue;
        }
        numerateur = numerateur * BigInt::from(10) + BigInt::from(c.to_digit(10).unwrap());
        if apres_point {
            fraction += 1;
        }
    }
    if negatif {
        numerateur = -numerateur;
    }
    BigRational::new(numerateur, dix_puissance(fraction))
}

fn est_canonique(s: &[char]) -> bool {
    chiffres::nettoie(s.to_vec()) == s
}

fn est_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz, le domaine de la
    // réduction plate étant volontairement limité.
    msg.contains("diviser par zéro")
        || msg.contains("il manque le nombre")
        || msg.contains("entrée vide")
        || msg.contains("expression mal formée")
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> Suite {
    let entier = 1 + rng.pick(10) as usize;
    let fraction = rng.pick(7) as usize;
    let mut s = String::new();
    if rng.coin() {
        s.push(MOINS);
    }
    for _ in 0..entier {
        s.push(char::from_digit(rng.pick(10), 10).unwrap());
    }
    if fraction > 0 {
        s.push(POINT);
        for _ in 0..fraction {
            s.push(char::from_digit(rng.pick(10), 10).unwrap());
        }
    }
    suite(&s)
}

fn gen_jetons(rng: &mut Rng) -> Vec<Jeton> {
    // Streams presque bien formés : nombre, opérateur, nombre, … avec de
    // temps en temps un opérateur doublé ou traînant pour balayer les
    // chemins d'erreur.
    let mut exp = Vec::new();
    let paires = 1 + rng.pick(4);
    for _ in 0..paires {
        exp.push(Jeton::Nombre(gen_nombre(rng)));
        let op = match rng.pick(4) {
            0 => Operateur::Plus,
            1 => Operateur::Moins,
            2 => Operateur::Fois,
            _ => Operateur::Divise,
        };
        exp.push(Jeton::Op(op));
        if rng.pick(8) == 0 {
            exp.push(Jeton::Op(Operateur::Moins));
        }
    }
    if rng.pick(3) != 0 {
        exp.push(Jeton::Nombre(gen_nombre(rng)));
    }
    exp
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_operations_exactes_contre_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let a = gen_nombre(&mut rng);
        let b = gen_nombre(&mut rng);
        let ra = vers_rationnel(&a);
        let rb = vers_rationnel(&b);

        let s = somme::additionne(&a, Some(&b), false).unwrap();
        assert!(est_canonique(&s), "somme non canonique: {:?}", texte(&s));
        assert_eq!(
            vers_rationnel(&s),
            &ra + &rb,
            "{} + {}",
            texte(&a),
            texte(&b)
        );

        let d = somme::soustrait(&a, Some(&b), false).unwrap();
        assert!(est_canonique(&d), "différence non canonique: {:?}", texte(&d));
        assert_eq!(
            vers_rationnel(&d),
            &ra - &rb,
            "{} − {}",
            texte(&a),
            texte(&b)
        );

        let p = produit::multiplie(&a, Some(&b), false).unwrap();
        assert!(est_canonique(&p), "produit non canonique: {:?}", texte(&p));
        assert_eq!(
            vers_rationnel(&p),
            &ra * &rb,
            "{} × {}",
            texte(&a),
            texte(&b)
        );
    }
}

#[test]
fn fuzz_safe_division_au_plafond_pres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(800);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let tolerance = BigRational::new(BigInt::one(), dix_puissance(quotient::LONGUEUR_FRACTION_MAX));

    let mut vus_ok = 0usize;
    for _ in 0..150 {
        budget(t0, max);

        let a = gen_nombre(&mut rng);
        let b = gen_nombre(&mut rng);

        match quotient::divise(&a, Some(&b), false) {
            Ok(q) => {
                assert!(est_canonique(&q), "quotient non canonique: {:?}", texte(&q));
                assert!(
                    chiffres::longueur_fraction(&q) <= quotient::LONGUEUR_FRACTION_MAX,
                    "fraction trop longue: {:?}",
                    texte(&q)
                );
                let exact = vers_rationnel(&a) / vers_rationnel(&b);
                let ecart = (vers_rationnel(&q) - exact).abs();
                assert!(
                    ecart <= tolerance,
                    "{} ÷ {} = {} (écart hors plafond)",
                    texte(&a),
                    texte(&b),
                    texte(&q)
                );
                vus_ok += 1;
            }
            Err(e) => {
                assert!(
                    chiffres::est_zero(&chiffres::nettoie(b.clone())),
                    "erreur sans diviseur nul: {} ÷ {} : {e}",
                    texte(&a),
                    texte(&b)
                );
                assert_eq!(e, quotient::DIVISION_PAR_ZERO);
            }
        }
    }
    assert!(vus_ok > 50, "trop peu de divisions réussies: {vus_ok}");
}

#[test]
fn fuzz_safe_reduction_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(800);

    // Même seed => mêmes expressions => mêmes sorties.
    let tirage = |seed: u64| -> Vec<Result<String, String>> {
        let mut rng = Rng::new(seed);
        let mut sorties = Vec::new();
        for _ in 0..100 {
            let exp = gen_jetons(&mut rng);
            let estimation = rng.coin();
            sorties.push(reduction::reduit(&exp, estimation).map(|s| texte(&s)));
        }
        sorties
    };

    let premier = tirage(0xFEED_u64);
    budget(t0, max);
    let second = tirage(0xFEED_u64);
    assert_eq!(premier, second, "réduction non déterministe");

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;
    for sortie in premier {
        match sortie {
            Ok(s) => {
                assert!(est_canonique(&suite(&s)), "résultat non canonique: {s:?}");
                vus_ok += 1;
            }
            Err(e) => {
                assert!(est_erreur_attendue(&e), "erreur non attendue: {e}");
                vus_err += 1;
            }
        }
    }
    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 10, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}
