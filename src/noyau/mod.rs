//! Noyau de la calculatrice à tampon
//!
//! Organisation interne :
//! - erreur.rs   : ErreurCalcul (toutes récupérables)
//! - jetons.rs   : table des opérateurs + classement jeton -> terme
//! - eval.rs     : trois passes (^, puis * /, puis + -)
//! - tampon.rs   : saisie touche par touche + fusion des chiffres
//! - format.rs   : affichage compact + lecture tronquée

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod tampon;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::Demarche;
pub use tampon::Tampon;
