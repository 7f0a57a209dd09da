// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule enum, toutes récupérables.
// Aucune ne touche à l’état du tampon (c’est l’appelant qui décide : DEL, C, …).

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Opération structurelle (DEL) sur un tampon vide.
    #[error("tampon vide : rien à retirer")]
    TamponVide,

    /// `=` sans aucun jeton.
    #[error("Entrée vide")]
    ExpressionVide,

    /// Un jeton attendu numérique ne se lit pas comme un nombre.
    #[error("opérande invalide: '{0}'")]
    OperandeInvalide(String),

    /// La suite de jetons ne se réduit pas à un seul nombre.
    #[error("expression invalide: {0}")]
    ExpressionMalformee(&'static str),

    #[error("division par zéro")]
    DivisionParZero,
}

/// Alias du noyau.
pub type Resultat<T> = Result<T, ErreurCalcul>;
