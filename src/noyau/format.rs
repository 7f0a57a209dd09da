// src/noyau/format.rs
//
// Affichage d’un résultat :
// - format_resultat : forme compacte (écran principal)
// - format_lecture  : lecture décimale TRONQUÉE à `digits` décimales (jamais arrondie)
//
// NaN => "indéfini", ±inf => "∞" / "-∞". Pas d’erreur : c’est un affichage.

/// Au-delà (ou en deçà), notation scientifique.
const SCI_MAX: f64 = 1e16;
const SCI_MIN: f64 = 1e-6;

pub const INDEFINI: &str = "indéfini";

fn non_fini(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some(INDEFINI)
    } else if x == f64::INFINITY {
        Some("∞")
    } else if x == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

pub fn format_resultat(x: f64) -> String {
    if let Some(s) = non_fini(x) {
        return s.to_string();
    }

    let a = x.abs();
    if a != 0.0 && !(SCI_MIN..SCI_MAX).contains(&a) {
        return format!("{x:e}");
    }

    // -0 affiché 0
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/// Lecture tronquée. `None` si le résultat n’est pas fini.
///
/// On part de l’écriture décimale la plus courte qui relit exactement `x`,
/// puis on coupe : pas de chiffres inventés au-delà de la précision d’un f64.
pub fn format_lecture(x: f64, digits: usize) -> Option<String> {
    if non_fini(x).is_some() {
        return None;
    }

    let txt = format!("{x}");
    let (entier, frac) = match txt.split_once('.') {
        Some((e, f)) => (e, f),
        None => (txt.as_str(), ""),
    };

    let frac: String = frac.chars().take(digits).collect();

    // "-0.00" tronqué à 0 décimale => "-0" : on garde le signe seulement si non nul
    let zero = entier.trim_start_matches('-') == "0" && frac.chars().all(|c| c == '0');
    let entier = if zero { "0" } else { entier };

    if frac.is_empty() {
        Some(entier.to_string())
    } else {
        Some(format!("{entier}.{frac}"))
    }
}
