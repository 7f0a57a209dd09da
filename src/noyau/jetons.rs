// src/noyau/jetons.rs
//
// Table des opérateurs + classement des jetons.
//
// Un jeton reste une chaîne dans le tampon (c’est ce que tape l’utilisateur).
// Au moment de l’évaluation seulement, chaque jeton devient un `Terme` :
// - symbole présent dans OPERATEURS => Terme::Op
// - tout le reste                   => Terme::Nombre (ou OperandeInvalide)

use std::fmt;

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Puissance,
    Mul,
    Div,
    Add,
    Sub,
}

/// Paliers de précédence, du plus prioritaire au moins prioritaire.
/// L’ordre des variantes EST l’ordre des passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Palier {
    Puissance,
    Produit,
    Somme,
}

impl Palier {
    pub const TOUS: [Palier; 3] = [Palier::Puissance, Palier::Produit, Palier::Somme];
}

/// Table unique symbole -> opérateur (figée à la compilation).
pub const OPERATEURS: [(&str, Operateur); 5] = [
    ("^", Operateur::Puissance),
    ("*", Operateur::Mul),
    ("/", Operateur::Div),
    ("+", Operateur::Add),
    ("-", Operateur::Sub),
];

impl Operateur {
    /// Recherche dans la table. `None` => le jeton est un opérande.
    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        OPERATEURS
            .iter()
            .find(|(sym, _)| *sym == s)
            .map(|(_, op)| *op)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Puissance => "^",
            Operateur::Mul => "*",
            Operateur::Div => "/",
            Operateur::Add => "+",
            Operateur::Sub => "-",
        }
    }

    pub fn palier(self) -> Palier {
        match self {
            Operateur::Puissance => Palier::Puissance,
            Operateur::Mul | Operateur::Div => Palier::Produit,
            Operateur::Add | Operateur::Sub => Palier::Somme,
        }
    }

    /// a (op) b. Seule la division peut échouer.
    pub fn appliquer(self, a: f64, b: f64) -> Resultat<f64> {
        match self {
            Operateur::Puissance => Ok(a.powf(b)),
            Operateur::Mul => Ok(a * b),
            Operateur::Div => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
            Operateur::Add => Ok(a + b),
            Operateur::Sub => Ok(a - b),
        }
    }
}

/// Vrai si le jeton est un des cinq symboles d’opérateur (et rien d’autre).
pub fn est_operateur(jeton: &str) -> bool {
    Operateur::depuis_symbole(jeton).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Terme {
    Nombre(f64),
    Op(Operateur),
}

impl fmt::Display for Terme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terme::Nombre(x) => write!(f, "{x}"),
            Terme::Op(op) => f.write_str(op.symbole()),
        }
    }
}

/// Écritures non finies que le tampon lui-même peut produire (résultat relu).
const NON_FINIS: [&str; 3] = ["inf", "-inf", "NaN"];

/// Forme d’un littéral : '-' optionnel (résultat négatif), puis chiffres et '.'.
/// Au moins un chiffre. Les points multiples passent ici et échouent au parse.
fn forme_numerique(jeton: &str) -> bool {
    let corps = jeton.strip_prefix('-').unwrap_or(jeton);
    corps.chars().all(|c| c.is_ascii_digit() || c == '.')
        && corps.chars().any(|c| c.is_ascii_digit())
}

/// Classe un jeton du tampon.
pub fn classer(jeton: &str) -> Resultat<Terme> {
    if let Some(op) = Operateur::depuis_symbole(jeton) {
        return Ok(Terme::Op(op));
    }

    let invalide = || ErreurCalcul::OperandeInvalide(jeton.to_string());

    // parse::<f64> accepte aussi "nan", "Infinity", "+3", "1e5" : on filtre avant.
    if !forme_numerique(jeton) && !NON_FINIS.contains(&jeton) {
        return Err(invalide());
    }
    jeton
        .parse::<f64>()
        .map(Terme::Nombre)
        .map_err(|_| invalide())
}

/// Format utilitaire (démarche / logs) : termes séparés par des espaces.
pub fn format_termes(termes: &[Terme]) -> String {
    termes
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
