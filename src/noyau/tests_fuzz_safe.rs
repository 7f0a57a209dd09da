//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le tampon avec des suites de touches sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global (large : builds debug en CI)
//! - invariant clé : Ok => un seul jeton qui relit le résultat ; Err => tampon intact
//! - oracle : pour les suites bien formées, comparaison avec un calcul direct par paliers

use std::time::{Duration, Instant};

use super::{ErreurCalcul, Tampon};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const TOUCHES: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "^", "*", "/", "+", "-",
];
const OPS: [&str; 5] = ["^", "*", "/", "+", "-"];

/// N’importe quelle suite de touches (souvent malformée).
fn gen_touches(rng: &mut Rng, max_len: u32) -> Vec<&'static str> {
    let n = 1 + rng.pick(max_len);
    (0..n).map(|_| TOUCHES[rng.pick(16) as usize]).collect()
}

/// Suite bien formée : nombre (op nombre)*, nombres de 1 à 2 chiffres.
fn gen_bien_formee(rng: &mut Rng, max_ops: u32) -> Vec<String> {
    fn nombre(rng: &mut Rng) -> String {
        rng.pick(13).to_string()
    }

    let mut out = Vec::new();
    out.push(nombre(rng));
    for _ in 0..rng.pick(max_ops + 1) {
        out.push(OPS[rng.pick(5) as usize].to_string());
        out.push(nombre(rng));
    }
    out
}

/* ------------------------ Oracle (calcul direct par paliers) ------------------------ */

/// Même règles, écrites autrement : découpe par + -, puis * /, puis ^ (tout à gauche).
fn oracle(jetons: &[String]) -> Result<f64, ErreurCalcul> {
    fn facteur(j: &[String]) -> f64 {
        // j = a ^ b ^ c ...
        let mut acc: f64 = j[0].parse().unwrap();
        for k in (1..j.len()).step_by(2) {
            acc = acc.powf(j[k + 1].parse().unwrap());
        }
        acc
    }

    fn produit(j: &[String]) -> Result<f64, ErreurCalcul> {
        let morceaux = decoupe(j, &["*", "/"]);
        let mut acc = facteur(&morceaux[0].1);
        for (op, m) in &morceaux[1..] {
            let v = facteur(m);
            if op == "/" {
                if v == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                acc /= v;
            } else {
                acc *= v;
            }
        }
        Ok(acc)
    }

    // D’abord toutes les divisions par zéro (la passe * / passe avant + -).
    let morceaux = decoupe(jetons, &["+", "-"]);
    let valeurs = morceaux
        .iter()
        .map(|(_, m)| produit(m))
        .collect::<Result<Vec<f64>, _>>()?;

    let mut acc = valeurs[0];
    for ((op, _), v) in morceaux[1..].iter().zip(&valeurs[1..]) {
        if op == "+" {
            acc += v;
        } else {
            acc -= v;
        }
    }
    Ok(acc)
}

/// Découpe `j` aux opérateurs `seps` : [(op_precedent, morceau), ...].
fn decoupe(j: &[String], seps: &[&str]) -> Vec<(String, Vec<String>)> {
    let mut out = vec![(String::new(), Vec::new())];
    for t in j {
        if seps.contains(&t.as_str()) {
            out.push((t.clone(), Vec::new()));
        } else if let Some(dernier) = out.last_mut() {
            dernier.1.push(t.clone());
        }
    }
    out
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_tampon() {
    let _ = env_logger::builder().is_test(true).try_init();

    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let touches = gen_touches(&mut rng, 12);
        let mut t = Tampon::new();
        for j in &touches {
            t.ajouter(*j);
        }
        let avant = t.clone();

        match t.evaluer() {
            Ok(x) => {
                assert_eq!(t.len(), 1, "touches={touches:?}");
                let relu: f64 = t.jetons().next().unwrap().parse().unwrap();
                assert!(meme_valeur(relu, x), "touches={touches:?} x={x} relu={relu}");
                seen_ok += 1;
            }
            Err(e) => {
                assert_eq!(t, avant, "tampon modifié par une erreur: {e}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_oracle_suites_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let jetons = gen_bien_formee(&mut rng, 6);
        let mut t = Tampon::new();
        for j in &jetons {
            // tape chiffre par chiffre, comme au clavier
            if j.chars().all(|c| c.is_ascii_digit()) {
                for c in j.chars() {
                    t.ajouter(c.to_string());
                }
            } else {
                t.ajouter(j.as_str());
            }
        }
        assert_eq!(t.len(), jetons.len(), "fusion: {jetons:?}");

        let attendu = oracle(&jetons);
        let obtenu = t.evaluer();

        match (&attendu, &obtenu) {
            (Ok(a), Ok(b)) => assert!(meme_valeur(*a, *b), "{jetons:?}: {a} != {b}"),
            (Err(ErreurCalcul::DivisionParZero), Err(ErreurCalcul::DivisionParZero)) => {
                seen_div0 += 1;
            }
            _ => panic!("{jetons:?}: oracle={attendu:?} tampon={obtenu:?}"),
        }
    }

    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_longue_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 1+1+...+1 (2000 termes) : pas de récursion, pas de pile
    let mut t = Tampon::new();
    t.ajouter("1");
    for _ in 1..2000 {
        t.ajouter("+");
        t.ajouter("1");
    }
    budget(t0, max);

    assert_eq!(t.evaluer(), Ok(2000.0));
    budget(t0, max);
}
